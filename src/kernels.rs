//! Butterfly passes of the iterative decimation-in-time transform.
//!
//! A pass with distance `dist` splits the data into chunks of `2 * dist` samples and
//! combines the two halves of every chunk:
//!
//! ```text
//! a = chunk[k], b = chunk[k + dist] * w_k
//! chunk[k] = a + b, chunk[k + dist] = a - b
//! ```
//!
//! `w_k` are the roots of unity of size `2 * dist`, read from the full-size twiddle table
//! at a stride of `n / (2 * dist)`.
use num_traits::Float;

use crate::complex::Complex;

/// Butterfly for chunk_size == 2, where the only twiddle factor is 1
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_chunk_2<T: Float>(buf: &mut [Complex<T>]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// Butterfly for any chunk_size, consuming every `twiddle_stride`-th entry of `twiddles`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn fft_chunk_n<T: Float>(
    buf: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    twiddle_stride: usize,
    dist: usize,
) {
    let chunk_size = dist << 1;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter().step_by(twiddle_stride))
            .for_each(|((z0, z1), w)| {
                let even = *z0;
                let odd = *z1 * *w;

                *z0 = even + odd;
                *z1 = even - odd;
            });
    });
}

#[cfg(test)]
mod tests {
    use utilities::assert_float_closeness;

    use super::*;
    use crate::complex::Complex64;

    #[test]
    fn chunk_2() {
        let mut buf = vec![
            Complex64::new(1.0, 2.0),
            Complex64::new(3.0, -1.0),
            Complex64::new(0.5, 0.0),
            Complex64::new(0.5, 0.0),
        ];
        fft_chunk_2(&mut buf);
        assert_eq!(
            buf,
            vec![
                Complex64::new(4.0, 1.0),
                Complex64::new(-2.0, 3.0),
                Complex64::new(1.0, 0.0),
                Complex64::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn chunk_n_matches_chunk_2_with_unit_twiddle() {
        let mut a: Vec<Complex64> = (0..8)
            .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
            .collect();
        let mut b = a.clone();

        fft_chunk_2(&mut a);
        fft_chunk_n(&mut b, &[Complex64::one()], 1, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn chunk_n_uses_strided_twiddles() {
        // Twiddles of an 8-point table, consumed by a pass with dist = 2 (stride 2),
        // so w_0 = 1 and w_1 = -i.
        let table = crate::twiddles::generate_twiddles::<f64>(8, crate::Direction::Forward);
        let mut buf = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
        ];
        fft_chunk_n(&mut buf, &table, 2, 2);

        let expected = [
            Complex64::new(3.0, 0.0),
            Complex64::new(0.0, -2.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, 4.0),
        ];
        for (z, e) in buf.iter().zip(expected) {
            assert_float_closeness(z.re, e.re, 1e-12);
            assert_float_closeness(z.im, e.im, 1e-12);
        }
    }
}
