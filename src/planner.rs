//! The planner module provides a convenient interface for planning and executing
//! a Fast Fourier Transform (FFT). The planner owns the twiddle factor table for the
//! iterative transform and keeps it keyed by the transform size and direction, so a
//! table is only ever computed again when one of the two changes.
use num_traits::{Float, FloatConst};

use crate::twiddles::TwiddleTable;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Rotate by `e^(-2πi k / n)`
    #[default]
    Forward,
    /// Rotate by `e^(+2πi k / n)`. The result is not scaled by `1 / n`.
    Reverse,
}

impl Direction {
    /// Sign of the twiddle factor exponent, `-1` for [`Direction::Forward`]
    /// and `+1` for [`Direction::Reverse`]
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Reverse => T::one(),
        }
    }

    /// `Reverse` when `inverse` is set
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    /// Whether this is the inverse transform
    pub fn is_inverse(self) -> bool {
        self == Direction::Reverse
    }
}

/// The planner caches the twiddle factors of the last requested `(n, direction)`.
///
/// Asking for a different size or direction drops the old table and builds a new one,
/// so a stale table can never be handed to the iterative transform. Repeated transforms
/// of one size (e.g. a sliding analysis window) pay for the trigonometry only once.
#[derive(Debug, Clone, Default)]
pub struct Planner<T> {
    table: Option<TwiddleTable<T>>,
    builds: usize,
}

/// Single-precision planner
pub type Planner32 = Planner<f32>;

/// Double-precision planner
pub type Planner64 = Planner<f64>;

impl<T: Float + FloatConst> Planner<T> {
    /// Create an empty planner. No table is computed until one is requested.
    pub fn new() -> Self {
        Self {
            table: None,
            builds: 0,
        }
    }

    /// Create a planner with the table for `num_points` in `direction` already built
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
    pub fn with_plan(num_points: usize, direction: Direction) -> Self {
        let mut planner = Self::new();
        planner.twiddles(num_points, direction);
        planner
    }

    /// Twiddle factors for an `num_points`-point transform in `direction`,
    /// computing them if the cached table was built for a different key
    ///
    /// # Panics
    ///
    /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
    pub fn twiddles(&mut self, num_points: usize, direction: Direction) -> &TwiddleTable<T> {
        let stale = match &self.table {
            Some(table) if table.matches(num_points, direction) => false,
            Some(table) => {
                tracing::debug!(
                    cached_n = table.size(),
                    cached_direction = ?table.direction(),
                    n = num_points,
                    ?direction,
                    "twiddle table key changed, rebuilding"
                );
                true
            }
            None => true,
        };

        if stale {
            tracing::debug!(n = num_points, ?direction, "building twiddle table");
            self.table = Some(TwiddleTable::new(num_points, direction));
            self.builds += 1;
        }

        self.table
            .get_or_insert_with(|| TwiddleTable::new(num_points, direction))
    }
}

impl<T> Planner<T> {
    /// The currently cached table, if any
    pub fn cached(&self) -> Option<&TwiddleTable<T>> {
        self.table.as_ref()
    }

    /// How many tables this planner has computed so far
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Drop the cached table
    pub fn clear(&mut self) {
        self.table = None;
    }
}
