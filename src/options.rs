//! Configuration of the checked transform entry points

/// Options to select the transform variant and the post-processing applied by the
/// checked entry points ([`crate::fft_with_opts_and_plan`] and friends).
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size.
///
/// The raw transforms in [`crate::algorithms`] ignore these options entirely.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Transform formulation to run
    pub algorithm: Algorithm,
    /// Permutation used by [`Algorithm::Iterative`]
    pub bit_reverse: BitReverseAlgorithm,
    /// Scaling of inverse results
    pub normalization: Normalization,
}

impl Options {
    /// Reasonable defaults for a transform of `input_size` points
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size <= 4 {
            options.algorithm = Algorithm::Recursive;
        }
        if input_size >= 1 << 10 {
            options.bit_reverse = BitReverseAlgorithm::Gray;
        }
        options
    }

    /// Use `algorithm` for the transform
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use `bit_reverse` for the permutation step of the iterative transform
    pub fn with_bit_reverse(mut self, bit_reverse: BitReverseAlgorithm) -> Self {
        self.bit_reverse = bit_reverse;
        self
    }

    /// Apply `normalization` to inverse transforms
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Which formulation of the radix-2 decimation-in-time transform to run.
/// Both produce the same result up to rounding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Divide and conquer on the output buffer, evaluating every twiddle factor on the fly.
    /// Needs no plan.
    Recursive,
    #[default]
    /// Bit-reversal permutation followed by `log2(n)` butterfly passes over a cached
    /// twiddle table
    Iterative,
}

/// The algorithm to use for bit reversal in the iterative transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Straightforward reversed-counter walk that performs best at smaller sizes
    Plain,
    /// Swaps pairs generated from a Gray code sequence, touching each pair once
    Gray,
}

/// Scaling applied to the result of an inverse transform
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    /// Leave the result unscaled, so forward followed by inverse multiplies by `n`
    None,
    /// Scale the inverse result by `1 / n`
    ByLength,
}
