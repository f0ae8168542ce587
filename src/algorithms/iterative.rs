//! Iterative radix-2 Decimation-in-Time (DIT) FFT over a precomputed twiddle table
//!
//! ## Algorithm Overview
//!
//! 1. Copy the input into the output buffer in bit-reversed order
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input, reading the twiddles
//!    of each stage from the one `N / 2`-entry table at a decreasing stride
//!
//! The result equals that of [`transform_recursive`](super::recursive::transform_recursive)
//! up to rounding, without the recursion and without evaluating any trigonometric function.
use num_traits::Float;

use crate::algorithms::bit_reverse::bit_reverse;
use crate::complex::Complex;
use crate::kernels::{fft_chunk_2, fft_chunk_n};
use crate::options::BitReverseAlgorithm;

/// Iterative radix-2 DIT transform of `input[..n]` into `output[..n]`.
///
/// `twiddles` must hold the `n / 2` factors `e^(sign * 2πi * k / n)` for this very `n`;
/// the direction of the transform is the one the table was generated for. A table built
/// for another size or direction is not detected and yields a wrong result. Use a
/// [`Planner`](crate::planner::Planner) to have the table kept in sync.
///
/// No `1 / n` scaling is applied for inverse transforms.
///
/// `n` must be a power of two; this is only checked in debug builds.
///
/// # Panics
///
/// Panics if either buffer is shorter than `n`, or if `n` is zero.
pub fn transform_iterative<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    n: usize,
    twiddles: &[Complex<T>],
) {
    transform_iterative_with_bit_reverse(input, output, n, twiddles, BitReverseAlgorithm::Plain);
}

/// [`transform_iterative`] with a choice of bit reversal algorithm
pub fn transform_iterative_with_bit_reverse<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    n: usize,
    twiddles: &[Complex<T>],
    bit_rev: BitReverseAlgorithm,
) {
    debug_assert!(n.is_power_of_two());
    let log_n = n.ilog2() as usize;

    let output = &mut output[..n];
    output.copy_from_slice(&input[..n]);
    bit_reverse(output, log_n, bit_rev);

    for stage in 0..log_n {
        let dist = 1 << stage;
        let chunk_size = dist << 1;

        if chunk_size == 2 {
            fft_chunk_2(output);
        } else {
            fft_chunk_n(output, twiddles, n / chunk_size, dist);
        }
    }
}
