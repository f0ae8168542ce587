//! Recursive radix-2 Decimation-in-Time (DIT) FFT
//!
//! The `n`-point transform of a strided input is the combination of two `n / 2`-point
//! transforms: one over the even-indexed samples and one over the odd-indexed samples.
//! Each half-size result is written into its half of the output range, which then serves
//! as scratch space for the butterflies of the level above. Nothing is allocated.
//!
//! ## Algorithm Overview
//!
//! 1. Transform the even samples into `output[off .. off + n/2]`
//! 2. Transform the odd samples into `output[off + n/2 .. off + n]`
//! 3. Combine: for every `k < n/2`, with `w = e^(sign * 2πi * k / n)`,
//!    `X[k] = E[k] + w * O[k]` and `X[k + n/2] = E[k] - w * O[k]`
//!
//! Twiddle factors are evaluated on the fly. See
//! [`transform_iterative`](super::iterative::transform_iterative) for the variant that
//! reads them from a precomputed table.
use num_traits::{Float, FloatConst};

use crate::complex::Complex;
use crate::planner::Direction;

/// Recursive radix-2 DIT transform.
///
/// Reads the `n` samples `input[input_offset + i * stride]` for `i` in `0..n` and writes
/// their transform into `output[output_offset .. output_offset + n]`. Callers start with
/// `stride == 1`; every level down doubles it.
///
/// No `1 / n` scaling is applied for [`Direction::Reverse`], so a forward transform
/// followed by a reverse one yields the original sequence multiplied by `n`.
///
/// `n` must be a power of two. Other lengths silently produce a meaningless result.
///
/// # Panics
///
/// Panics if either buffer is too short for the requested range. `n == 0` is outside the
/// domain of the transform and must be rejected by the caller.
pub fn transform_recursive<T: Float + FloatConst>(
    input: &[Complex<T>],
    input_offset: usize,
    output: &mut [Complex<T>],
    output_offset: usize,
    n: usize,
    stride: usize,
    direction: Direction,
) {
    if n == 1 {
        output[output_offset] = input[input_offset];
        return;
    }

    let half = n >> 1;

    transform_recursive(
        input,
        input_offset,
        output,
        output_offset,
        half,
        stride << 1,
        direction,
    );
    transform_recursive(
        input,
        input_offset + stride,
        output,
        output_offset + half,
        half,
        stride << 1,
        direction,
    );

    let angle_mult = direction.sign::<T>() * (T::TAU() / T::from(n).unwrap());

    for k in 0..half {
        // Both slots are read before either is written: the two writes below land on the
        // very positions the sub-transform results are read from.
        let even = output[output_offset + k];
        let odd = output[output_offset + k + half];

        let twiddle = Complex::exp(angle_mult * T::from(k).unwrap()) * odd;

        output[output_offset + k] = even + twiddle;
        output[output_offset + k + half] = even - twiddle;
    }
}

/// Recursive transform of all of `input` into `output`, starting at offset 0 with stride 1
///
/// # Panics
///
/// Panics if `output.len() < input.len()`
#[inline]
pub fn fft_recursive<T: Float + FloatConst>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) {
    transform_recursive(input, 0, output, 0, input.len(), 1, direction);
}
