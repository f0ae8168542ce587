//! Utility functions such as split/combine of separate real and imaginary buffers and
//! caller-side normalization

#[cfg(feature = "complex-nums")]
use bytemuck::{cast_slice, cast_slice_mut, Pod};

use num_traits::Float;

use crate::complex::Complex;

/// Utility function to combine separate slices of real and imaginary components
/// into a single vector of complex samples.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

/// Separates complex samples into a vector of real parts and a vector of imaginary parts
pub fn split_re_im<T: Float>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    signal.iter().map(|z| (z.re, z.im)).unzip()
}

/// Scale every sample by `1 / buf.len()`.
///
/// The transforms leave inverse results unscaled; this turns a forward-then-inverse pair
/// back into the identity.
pub fn normalize<T: Float>(buf: &mut [Complex<T>]) {
    if buf.is_empty() {
        return;
    }

    let scaling_factor = T::one() / T::from(buf.len()).unwrap();
    for z in buf.iter_mut() {
        *z = z.scale(scaling_factor);
    }
}

/// View a [`num_complex::Complex`] slice as samples, without copying
#[cfg(feature = "complex-nums")]
pub fn from_num_complex<T: Pod>(signal: &[num_complex::Complex<T>]) -> &[Complex<T>] {
    cast_slice(signal)
}

/// Mutable variant of [`from_num_complex`]
#[cfg(feature = "complex-nums")]
pub fn from_num_complex_mut<T: Pod>(signal: &mut [num_complex::Complex<T>]) -> &mut [Complex<T>] {
    cast_slice_mut(signal)
}

/// View an interleaved `[re, im, re, im, ...]` slice as samples, without copying
///
/// # Panics
///
/// Panics if `interleaved.len()` is odd.
#[cfg(feature = "complex-nums")]
pub fn from_interleaved<T: Pod>(interleaved: &[T]) -> &[Complex<T>] {
    cast_slice(interleaved)
}

/// Mutable variant of [`from_interleaved`]
///
/// # Panics
///
/// Panics if `interleaved.len()` is odd.
#[cfg(feature = "complex-nums")]
pub fn from_interleaved_mut<T: Pod>(interleaved: &mut [T]) -> &mut [Complex<T>] {
    cast_slice_mut(interleaved)
}
