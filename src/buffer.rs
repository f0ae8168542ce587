//! The sample buffer contract the transforms read from and write into.
//!
//! Buffers are owned by the caller (usually a `Vec<Complex<T>>`); the transforms only borrow
//! them for the duration of one call. Element access is direct: there is no validation
//! beyond the bounds check of the underlying slice.
use num_traits::Float;

use crate::complex::Complex;

/// Indexable, fixed-length sequence of complex samples
pub trait SampleBuffer<T> {
    /// Number of samples in the buffer
    fn num_samples(&self) -> usize;

    /// Read the sample at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range
    fn sample(&self, index: usize) -> Complex<T>;

    /// Overwrite the sample at `index` and return a reference to the stored element
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range
    fn set_sample(&mut self, index: usize, re: T, im: T) -> &mut Complex<T>;
}

impl<T: Float> SampleBuffer<T> for [Complex<T>] {
    #[inline]
    fn num_samples(&self) -> usize {
        self.len()
    }

    #[inline]
    fn sample(&self, index: usize) -> Complex<T> {
        self[index]
    }

    #[inline]
    fn set_sample(&mut self, index: usize, re: T, im: T) -> &mut Complex<T> {
        let slot = &mut self[index];
        *slot = Complex::new(re, im);
        slot
    }
}
