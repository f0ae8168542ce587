//! Errors reported by the checked entry points.
//!
//! The raw transforms never return errors: their preconditions are the caller's to uphold.

/// Reasons a checked transform refuses to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The transform length is zero
    #[error("transform length must be at least 1")]
    ZeroLength,

    /// The transform length is not a power of two
    #[error("transform length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// The input and output buffers have different lengths
    #[error("input has {input} samples but output has {output}")]
    LengthMismatch {
        /// Number of input samples
        input: usize,
        /// Number of output samples
        output: usize,
    },
}

impl FftError {
    /// Check that `n` is a valid radix-2 transform length
    pub fn check_size(n: usize) -> Result<(), FftError> {
        if n == 0 {
            return Err(FftError::ZeroLength);
        }
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo(n));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_checks() {
        assert_eq!(FftError::check_size(0), Err(FftError::ZeroLength));
        assert_eq!(FftError::check_size(6), Err(FftError::NotPowerOfTwo(6)));
        assert!(FftError::check_size(1).is_ok());
        assert!(FftError::check_size(1 << 20).is_ok());
    }

    #[test]
    fn messages() {
        assert_eq!(
            FftError::NotPowerOfTwo(12).to_string(),
            "transform length 12 is not a power of two"
        );
        assert_eq!(
            FftError::LengthMismatch { input: 8, output: 4 }.to_string(),
            "input has 8 samples but output has 4"
        );
    }
}
