//! Complex arithmetic used by the transforms.
//!
//! [`Complex`] is a plain `(re, im)` pair. It is `#[repr(C)]`, so a slice of samples has
//! the same memory layout as an interleaved `[re, im, re, im, ...]` float slice.
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

/// A complex sample with real and imaginary components of type `T`
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Complex<T> {
    /// Real component
    pub re: T,
    /// Imaginary component
    pub im: T,
}

/// Single-precision sample, the native precision of the engine
pub type Complex32 = Complex<f32>;

/// Double-precision sample
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Create a new complex number from its components
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

#[allow(clippy::should_implement_trait)]
impl<T: Float> Complex<T> {
    /// `0 + 0i`
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// `1 + 0i`
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Point on the unit circle at `angle` radians, i.e. `e^(i * angle)`.
    /// Roots of unity are generated with this.
    #[inline]
    pub fn exp(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Component-wise addition
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    /// Component-wise subtraction
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    /// Complex multiplication
    #[inline]
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Complex conjugate, `(re, -im)`
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Multiply both components by a real factor
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Squared magnitude, `re² + im²`
    #[inline]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Complex::sub(self, rhs)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Complex::mul(self, rhs)
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<T> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

#[cfg(feature = "complex-nums")]
mod interop {
    use super::Complex;

    // SAFETY: `Complex<T>` is `repr(C)` with two fields of the same `Pod` type, so it has no
    // padding and every bit pattern is valid.
    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Complex<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Complex<T> {}

    impl<T> From<num_complex::Complex<T>> for Complex<T> {
        fn from(z: num_complex::Complex<T>) -> Self {
            Self::new(z.re, z.im)
        }
    }

    impl<T> From<Complex<T>> for num_complex::Complex<T> {
        fn from(z: Complex<T>) -> Self {
            num_complex::Complex::new(z.re, z.im)
        }
    }
}
