pub extern crate rustfft;

// export rustfft to ditfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::{FftNum, FftPlanner};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Unnormalized DFT of `(reals, imags)` computed by `rustfft`, used as the reference
/// result in tests. `inverse` selects the `+2πi` exponent.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn reference_fft<T: FftNum + Float>(
    reals: &[T],
    imags: &[T],
    inverse: bool,
) -> (Vec<T>, Vec<T>) {
    assert_eq!(reals.len(), imags.len());

    let mut buffer: Vec<Complex<T>> = reals
        .iter()
        .zip(imags.iter())
        .map(|(re, im)| Complex::new(*re, *im))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = if inverse {
        planner.plan_fft_inverse(buffer.len())
    } else {
        planner.plan_fft_forward(buffer.len())
    };
    fft.process(&mut buffer);

    buffer.iter().map(|z| (z.re, z.im)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 16;
        let mut reals: Vec<_> = vec![0.0; big_n];
        let mut imags: Vec<_> = vec![0.0; big_n];

        gen_random_signal::<f64>(&mut reals, &mut imags);

        assert!(reals
            .iter()
            .chain(imags.iter())
            .all(|x| (-1.0..1.0).contains(x)));

        // Uniform(-1, 1) has mean 0
        let mean = reals.iter().sum::<f64>() / big_n as f64;
        assert_float_closeness(mean, 0.0, 0.05);
    }

    #[test]
    fn reference_impulse_is_flat() {
        let mut reals = vec![0.0f64; 8];
        let imags = vec![0.0f64; 8];
        reals[0] = 1.0;

        let (out_re, out_im) = reference_fft(&reals, &imags, false);
        for (re, im) in out_re.iter().zip(out_im.iter()) {
            assert_float_closeness(*re, 1.0, 1e-12);
            assert_float_closeness(*im, 0.0, 1e-12);
        }
    }
}
