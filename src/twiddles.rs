//! Twiddle factor tables for the iterative transform.
//!
//! A table for an `n`-point transform holds the `n / 2` roots of unity
//! `w_k = e^(sign * 2πi * k / n)`. Every smaller butterfly stage reads the same table with
//! a stride, so one table covers all `log2(n)` stages.
use num_traits::{Float, FloatConst};

use crate::complex::Complex;
use crate::planner::Direction;

/// Compute the `n / 2` twiddle factors of an `n`-point transform in `direction`.
///
/// Each entry is evaluated directly with [`Complex::exp`] rather than by repeated
/// rotation, so no error accumulates towards the end of the table.
pub fn generate_twiddles<T: Float + FloatConst>(n: usize, direction: Direction) -> Vec<Complex<T>> {
    let angle_mult = direction.sign::<T>() * (T::TAU() / T::from(n).unwrap());

    (0..n / 2)
        .map(|k| Complex::exp(angle_mult * T::from(k).unwrap()))
        .collect()
}

/// Twiddle factors together with the `(n, direction)` they were generated for
#[derive(Debug, Clone)]
pub struct TwiddleTable<T> {
    factors: Vec<Complex<T>>,
    n: usize,
    direction: Direction,
}

impl<T: Float + FloatConst> TwiddleTable<T> {
    /// Build the table for an `n`-point transform in `direction`
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or not a power of 2
    pub fn new(n: usize, direction: Direction) -> Self {
        assert!(n > 0 && n.is_power_of_two());

        Self {
            factors: generate_twiddles(n, direction),
            n,
            direction,
        }
    }
}

impl<T> TwiddleTable<T> {
    /// Transform size this table was built for
    pub fn size(&self) -> usize {
        self.n
    }

    /// Direction this table was built for
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether this table can be used for an `n`-point transform in `direction`
    pub fn matches(&self, n: usize, direction: Direction) -> bool {
        self.n == n && self.direction == direction
    }

    /// The raw factors, `n / 2` of them
    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.factors
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use utilities::assert_float_closeness;

    use super::*;
    use crate::complex::{Complex32, Complex64};

    #[test]
    fn twiddles_8_forward() {
        let table = TwiddleTable::<f64>::new(8, Direction::Forward);
        let w = table.as_slice();
        assert_eq!(w.len(), 4);

        let expected = [
            (1.0, 0.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (0.0, -1.0),
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        ];
        for (z, (re, im)) in w.iter().zip(expected) {
            assert_float_closeness(z.re, re, 1e-12);
            assert_float_closeness(z.im, im, 1e-12);
        }
    }

    #[test]
    fn reverse_is_conjugate_of_forward() {
        let forward = TwiddleTable::<f64>::new(64, Direction::Forward);
        let reverse = TwiddleTable::<f64>::new(64, Direction::Reverse);

        for (f, r) in forward.as_slice().iter().zip(reverse.as_slice()) {
            assert_float_closeness(f.re, r.re, 1e-12);
            assert_float_closeness(f.im, -r.im, 1e-12);
        }
    }

    #[test]
    fn entries_equal_exp() {
        for direction in [Direction::Forward, Direction::Reverse] {
            for log_n in 0..=10 {
                let n = 1 << log_n;
                let table = TwiddleTable::<f32>::new(n, direction);
                assert_eq!(table.as_slice().len(), n / 2);

                for (k, w) in table.as_slice().iter().enumerate() {
                    let angle = direction.sign::<f32>() * 2.0 * std::f32::consts::PI * k as f32
                        / n as f32;
                    let expected = Complex32::exp(angle);
                    assert_float_closeness(w.re, expected.re, 1e-6);
                    assert_float_closeness(w.im, expected.im, 1e-6);
                }

                let table = TwiddleTable::<f64>::new(n, direction);
                for (k, w) in table.as_slice().iter().enumerate() {
                    let angle = direction.sign::<f64>() * 2.0 * PI * k as f64 / n as f64;
                    let expected = Complex64::exp(angle);
                    assert_float_closeness(w.re, expected.re, 1e-12);
                    assert_float_closeness(w.im, expected.im, 1e-12);
                }
            }
        }
    }

    #[test]
    fn key() {
        let table = TwiddleTable::<f32>::new(16, Direction::Reverse);
        assert_eq!(table.size(), 16);
        assert_eq!(table.direction(), Direction::Reverse);
        assert!(table.matches(16, Direction::Reverse));
        assert!(!table.matches(16, Direction::Forward));
        assert!(!table.matches(32, Direction::Reverse));
    }

    #[test]
    fn single_point_has_no_twiddles() {
        let table = TwiddleTable::<f32>::new(1, Direction::Forward);
        assert!(table.as_slice().is_empty());
    }

    #[test]
    #[should_panic]
    fn non_power_of_two_panics() {
        TwiddleTable::<f32>::new(12, Direction::Forward);
    }
}
