//! In-place bit-reversal permutations.
//!
//! The iterative decimation-in-time transform starts from its input in bit-reversed order:
//! the sample at index `i` is moved to the index whose `log2(n)` low bits are those of `i`
//! reversed. Both routines here swap each pair `(i, rev(i))` exactly once.
use crate::options::BitReverseAlgorithm;

/// Permute `buf[..1 << log_n]` into bit-reversed order with the selected algorithm
#[inline]
pub fn bit_reverse<T>(buf: &mut [T], log_n: usize, algorithm: BitReverseAlgorithm) {
    match algorithm {
        BitReverseAlgorithm::Plain => bit_rev_plain(buf, log_n),
        BitReverseAlgorithm::Gray => bit_rev_gray(buf, log_n),
    }
}

/// Walk `i` forward while keeping `j = rev(i)` as a counter that is incremented
/// from the most significant bit down.
pub fn bit_rev_plain<T>(buf: &mut [T], log_n: usize) {
    let big_n = 1usize << log_n;
    let mut j = 0;

    for i in 1..big_n {
        let mut bit = big_n >> 1;

        while (j & bit) != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            buf.swap(i, j);
        }
    }
}

/// Enumerate the even indices below `n / 2` in Gray code order, so that each step flips a
/// single bit of `forward` and of its reversal `rev`. Every visited pair also yields its
/// bitwise complement and its odd neighbour, which covers the whole permutation in
/// `n / 4` steps.
///
/// ## References
/// [1] <https://www.katjaas.nl/bitreversal/bitreversal.html>
pub fn bit_rev_gray<T>(buf: &mut [T], log_n: usize) {
    let big_n = 1usize << log_n;
    let half_n = big_n >> 1;
    let quarter_n = big_n >> 2;
    let mask = big_n - 1;

    let mut forward = half_n;
    let mut rev = 1;

    for i in (1..=quarter_n).rev() {
        let zeros = i.trailing_zeros();
        forward ^= 2 << zeros;
        rev ^= quarter_n >> zeros;

        if forward < rev {
            buf.swap(forward, rev);
            buf.swap(mask ^ forward, mask ^ rev);
        }

        // odd partner: lowest bit of forward set <=> highest bit of rev set
        buf.swap(forward ^ 1, rev ^ half_n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse the low `log_n` bits of every index. Obviously correct, only used for testing.
    fn reference_permutation(log_n: usize) -> Vec<usize> {
        let big_n = 1usize << log_n;
        (0..big_n)
            .map(|i| {
                if log_n == 0 {
                    i
                } else {
                    i.reverse_bits() >> (usize::BITS as usize - log_n)
                }
            })
            .collect()
    }

    #[test]
    fn plain_bit_reversal() {
        for log_n in 0..16 {
            let mut buf: Vec<usize> = (0..1 << log_n).collect();
            bit_rev_plain(&mut buf, log_n);
            assert_eq!(buf, reference_permutation(log_n), "log_n = {log_n}");
        }
    }

    #[test]
    fn gray_bit_reversal() {
        let mut buf: Vec<f64> = (0..8).map(f64::from).collect();
        bit_rev_gray(&mut buf, 3);
        assert_eq!(buf, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);

        for log_n in 0..16 {
            let mut buf: Vec<usize> = (0..1 << log_n).collect();
            bit_rev_gray(&mut buf, log_n);
            assert_eq!(buf, reference_permutation(log_n), "log_n = {log_n}");
        }
    }

    #[test]
    fn only_prefix_is_permuted() {
        let mut buf: Vec<usize> = (0..12).collect();
        bit_reverse(&mut buf, 3, BitReverseAlgorithm::Gray);
        assert_eq!(&buf[..8], &[0, 4, 2, 6, 1, 5, 3, 7]);
        assert_eq!(&buf[8..], &[8, 9, 10, 11]);
    }

    #[test]
    fn is_an_involution() {
        for algorithm in [BitReverseAlgorithm::Plain, BitReverseAlgorithm::Gray] {
            let original: Vec<usize> = (0..1024).collect();
            let mut buf = original.clone();
            bit_reverse(&mut buf, 10, algorithm);
            bit_reverse(&mut buf, 10, algorithm);
            assert_eq!(buf, original);
        }
    }
}
