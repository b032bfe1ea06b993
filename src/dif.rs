//! Stage/group/butterfly decomposition and the bit-reversal pass.
//!
//! A length-`n` decimation-in-frequency transform runs `log2(n)` sequential
//! stages over one in-place buffer. Stage `s` splits the buffer into
//! `2^s` groups of `n >> s` samples, and each group pairs its first half
//! against its second half: butterfly `j` of group `g` reads positions
//! `i1 = g * groupsize * 2 + j` and `i2 = i1 + groupsize`, then writes back
//! `a + b` and `(a - b) * w[j << s]`. Within one stage those `(i1, i2)`
//! pairs partition the buffer indices exactly once, so butterflies of a
//! stage are independent of each other; stages are not, and must run in
//! order. DIF leaves the result in bit-reversed index order, which
//! [`bit_reverse_permute`] undoes as a final pass.

use crate::num::{Complex, Float};
use crate::trace::{ButterflySite, Trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of butterfly stages for a power-of-two length.
#[inline]
pub fn stage_count(n: usize) -> usize {
    debug_assert!(n.is_power_of_two());
    n.trailing_zeros() as usize
}

/// Run the stage/group/butterfly loop over `buf`, notifying `trace` at every
/// boundary.
///
/// `twiddles` must be the `buf.len() / 2` entry table for the chosen
/// direction. `buf.len()` must be a power of two; a length of 1 has zero
/// stages and leaves the buffer untouched.
pub fn transform<T: Float, C: Trace<T>>(
    buf: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    trace: &C,
) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(twiddles.len(), n / 2);

    let stages = stage_count(n);
    trace.fft_start(n, stages);
    for stage in 0..stages {
        let groups = 1usize << stage;
        let groupsize = n >> (stage + 1);
        trace.stage_start(stage, groups, groupsize);
        for group in 0..groups {
            // Butterflies per group equal the group half-size.
            let butterflies = groupsize;
            trace.group_start(stage, group, butterflies);
            for index in 0..butterflies {
                let k = index << stage;
                let i1 = group * groupsize * 2 + index;
                let i2 = i1 + groupsize;
                let site = ButterflySite {
                    stage,
                    group,
                    index,
                    k,
                    i1,
                    i2,
                };
                let a = buf[i1];
                let b = buf[i2];
                trace.butterfly_start(&site, a, b);
                let x = a + b;
                let y = (a - b) * twiddles[k];
                buf[i1] = x;
                buf[i2] = y;
                trace.butterfly_end(&site, a, b, x, y);
            }
            trace.group_end(stage, group, butterflies);
        }
        trace.stage_end(stage, groups);
    }
    trace.fft_end(n, stages);
}

/// Same semantics as [`transform`], with the butterflies of each stage
/// spread across rayon workers.
///
/// One group maps to one disjoint `par_chunks_mut` block, and the parallel
/// iterator joins before the next stage begins, so the stage ordering
/// requirement holds. `trace` may be notified from several workers at once
/// and therefore must be `Sync`; group and butterfly events of one stage
/// arrive in no particular order.
#[cfg(feature = "parallel")]
pub fn transform_parallel<T, C>(buf: &mut [Complex<T>], twiddles: &[Complex<T>], trace: &C)
where
    T: Float,
    C: Trace<T> + Sync,
{
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(twiddles.len(), n / 2);

    let stages = stage_count(n);
    trace.fft_start(n, stages);
    for stage in 0..stages {
        let groups = 1usize << stage;
        let groupsize = n >> (stage + 1);
        trace.stage_start(stage, groups, groupsize);
        buf.par_chunks_mut(groupsize * 2)
            .enumerate()
            .for_each(|(group, chunk)| {
                let butterflies = groupsize;
                trace.group_start(stage, group, butterflies);
                for index in 0..butterflies {
                    let k = index << stage;
                    let base = group * groupsize * 2;
                    let site = ButterflySite {
                        stage,
                        group,
                        index,
                        k,
                        i1: base + index,
                        i2: base + index + groupsize,
                    };
                    let a = chunk[index];
                    let b = chunk[index + groupsize];
                    trace.butterfly_start(&site, a, b);
                    let x = a + b;
                    let y = (a - b) * twiddles[k];
                    chunk[index] = x;
                    chunk[index + groupsize] = y;
                    trace.butterfly_end(&site, a, b, x, y);
                }
                trace.group_end(stage, group, butterflies);
            });
        trace.stage_end(stage, groups);
    }
    trace.fft_end(n, stages);
}

/// Bit-reversed counterpart of index `i` for a power-of-two length `n`.
///
/// Walks a low bit `a` and a high bit `b` towards each other, mirroring set
/// bits of `i` into `k` from both ends. Equivalent to reversing the low
/// `log2(n)` bits of `i`; only valid for power-of-two `n`.
#[inline]
pub fn bit_reversed(i: usize, n: usize) -> usize {
    let mut k = 0usize;
    let mut b = n >> 1;
    let mut a = 1usize;
    while b >= a {
        if b & i != 0 {
            k |= a;
        }
        if a & i != 0 {
            k |= b;
        }
        b >>= 1;
        a <<= 1;
    }
    k
}

/// Reorder `buf` in place into bit-reversed index order.
///
/// Swapping only when `i < k` visits each pair once, which also makes the
/// pass an involution: applying it twice restores the original order. A
/// length of 1 is a no-op.
pub fn bit_reverse_permute<T>(buf: &mut [T]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    for i in 0..n {
        let k = bit_reversed(i, n);
        if i < k {
            buf.swap(i, k);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    // Straightforward reversal of the low `bits` bits, as an oracle for the
    // accumulator walk.
    fn reverse_bits(mut i: usize, bits: usize) -> usize {
        let mut out = 0usize;
        for _ in 0..bits {
            out = (out << 1) | (i & 1);
            i >>= 1;
        }
        out
    }

    #[test]
    fn bit_reversed_matches_closed_form() {
        for bits in 0..=10 {
            let n = 1usize << bits;
            for i in 0..n {
                assert_eq!(bit_reversed(i, n), reverse_bits(i, bits), "n={} i={}", n, i);
            }
        }
    }

    #[test]
    fn known_order_length_eight() {
        let mut buf: Vec<usize> = (0..8).collect();
        bit_reverse_permute(&mut buf);
        assert_eq!(buf, [0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn stage_indices_partition_buffer() {
        // Every buffer index must be written exactly once per stage.
        let n = 64usize;
        for stage in 0..stage_count(n) {
            let groups = 1usize << stage;
            let groupsize = n >> (stage + 1);
            let mut hits = alloc::vec![0u32; n];
            for group in 0..groups {
                for index in 0..groupsize {
                    let i1 = group * groupsize * 2 + index;
                    let i2 = i1 + groupsize;
                    hits[i1] += 1;
                    hits[i2] += 1;
                }
            }
            assert!(hits.iter().all(|&h| h == 1), "stage {}", stage);
        }
    }

    #[test]
    fn length_one_is_untouched() {
        use crate::num::Complex64;
        use crate::trace::NoTrace;
        let mut buf = [Complex64::new(42.0, -1.0)];
        let twiddles: [crate::num::Complex64; 0] = [];
        transform(&mut buf, &twiddles, &NoTrace);
        bit_reverse_permute(&mut buf);
        assert_eq!(buf[0], Complex64::new(42.0, -1.0));
    }
}
