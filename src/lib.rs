//! Radix-2 Cooley-Tukey Decimation-in-Time FFT over complex samples.
//!
//! Two interchangeable formulations are provided:
//!
//! - [`transform_recursive`]: divide and conquer over the output buffer, evaluating twiddle
//!   factors on the fly
//! - [`transform_iterative`]: bit reversal followed by butterfly passes over a
//!   precomputed [`TwiddleTable`], which a [`Planner`] caches per `(n, direction)`
//!
//! Both are unchecked and never scale the inverse transform by `1 / n`. The checked entry
//! points [`fft`], [`fft_32`], [`fft_64`] and [`fft_with_opts_and_plan`] validate their
//! arguments first and can optionally normalize, see [`options::Normalization`].
#![warn(
    missing_docs,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::correctness,
    clippy::suspicious
)]

use num_traits::{Float, FloatConst};

use crate::algorithms::iterative::transform_iterative_with_bit_reverse;
use crate::options::{Algorithm, Normalization, Options};
use crate::utils::normalize;

pub use crate::algorithms::iterative::transform_iterative;
pub use crate::algorithms::recursive::{fft_recursive, transform_recursive};
pub use crate::buffer::SampleBuffer;
pub use crate::complex::{Complex, Complex32, Complex64};
pub use crate::error::FftError;
pub use crate::planner::{Direction, Planner, Planner32, Planner64};
pub use crate::twiddles::{generate_twiddles, TwiddleTable};

pub mod algorithms;
pub mod buffer;
pub mod complex;
pub mod error;
mod kernels;
pub mod options;
pub mod planner;
pub mod twiddles;
pub mod utils;

/// Checked FFT of `input` into `output`, reusing the twiddle table held by `planner`.
///
/// This is the validating entry point: it rejects what the raw transforms in
/// [`algorithms`] take on trust, then dispatches to the variant selected in `opts`.
/// The planner rebuilds its table only when `input.len()` or `direction` differs from the
/// previous call.
///
/// # Errors
///
/// Returns an error if `input` is empty, if its length is not a power of two, or if
/// `output` does not have the same length as `input`.
pub fn fft_with_opts_and_plan<T: Float + FloatConst>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
    opts: &Options,
    planner: &mut Planner<T>,
) -> Result<(), FftError> {
    let n = input.len();
    FftError::check_size(n)?;
    if output.len() != n {
        return Err(FftError::LengthMismatch {
            input: n,
            output: output.len(),
        });
    }

    tracing::trace!(n, ?direction, algorithm = ?opts.algorithm, "fft");

    match opts.algorithm {
        Algorithm::Recursive => transform_recursive(input, 0, output, 0, n, 1, direction),
        Algorithm::Iterative => {
            let twiddles = planner.twiddles(n, direction);
            transform_iterative_with_bit_reverse(
                input,
                output,
                n,
                twiddles.as_slice(),
                opts.bit_reverse,
            );
        }
    }

    if direction.is_inverse() && opts.normalization == Normalization::ByLength {
        normalize(output);
    }

    Ok(())
}

/// Checked FFT of `input` into `output` with options guessed from the input size.
///
/// A throwaway plan is built for the call. Keep a [`Planner`] around and use
/// [`fft_with_opts_and_plan`] when transforming repeatedly.
///
/// # Errors
///
/// See [`fft_with_opts_and_plan`].
pub fn fft<T: Float + FloatConst>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) -> Result<(), FftError> {
    let opts = Options::guess_options(input.len());
    let mut planner = Planner::new();
    fft_with_opts_and_plan(input, output, direction, &opts, &mut planner)
}

macro_rules! impl_fft_for {
    ($func_name:ident, $func_name_with_plan:ident, $precision:ty, $planner:ty) => {
        /// Checked FFT of `input` into `output`, with options guessed from the input size.
        ///
        /// # Errors
        ///
        /// Returns an error if `input` is empty, if its length is not a power of two, or if
        /// `output` does not have the same length as `input`.
        pub fn $func_name(
            input: &[Complex<$precision>],
            output: &mut [Complex<$precision>],
            direction: Direction,
        ) -> Result<(), FftError> {
            fft(input, output, direction)
        }

        /// Checked FFT of `input` into `output` with the given options and plan.
        ///
        /// # Errors
        ///
        /// See [`fft_with_opts_and_plan`].
        pub fn $func_name_with_plan(
            input: &[Complex<$precision>],
            output: &mut [Complex<$precision>],
            direction: Direction,
            opts: &Options,
            planner: &mut $planner,
        ) -> Result<(), FftError> {
            fft_with_opts_and_plan(input, output, direction, opts, planner)
        }
    };
}

impl_fft_for!(fft_32, fft_32_with_opts_and_plan, f32, Planner32);
impl_fft_for!(fft_64, fft_64_with_opts_and_plan, f64, Planner64);
