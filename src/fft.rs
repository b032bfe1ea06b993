//! Forward and inverse transform facade.
//!
//! [`DifFft`] validates the sequence length, copies it into a working
//! buffer, fetches the twiddle table from its planner, runs the stage loop
//! and the bit-reversal pass, and for the inverse direction scales every
//! sample by `1 / n`. The caller's input is never mutated by the copying
//! entry points; in-place variants over a caller-owned buffer are also
//! provided.

use alloc::vec::Vec;
use core::cell::RefCell;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::dif;
use crate::num::{Complex, Float};
use crate::trace::{NoTrace, Trace};
use crate::twiddle::{Direction, TwiddlePlanner};

/// Errors the transform entry points can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is not a positive power of two. Carries the
    /// offending length.
    InvalidLength(usize),
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength(n) => {
                write!(f, "sequence length {} is not a positive power of two", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// The only validation in this module: rejects lengths that are not a
/// positive power of two before anything is allocated or mutated.
#[inline]
fn check_length(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength(n))
    }
}

/// Radix-2 decimation-in-frequency FFT with a twiddle planner cache.
pub struct DifFft<T: Float> {
    planner: RefCell<TwiddlePlanner<T>>,
}

impl<T: Float> Default for DifFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DifFft<T> {
    pub fn new() -> Self {
        Self {
            planner: RefCell::new(TwiddlePlanner::new()),
        }
    }

    pub fn with_planner(planner: TwiddlePlanner<T>) -> Self {
        Self {
            planner: RefCell::new(planner),
        }
    }

    /// Forward transform of `input`, returned as a fresh sequence.
    pub fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.fft_with(input, &NoTrace)
    }

    /// Forward transform with an observer notified at every boundary.
    pub fn fft_with<C: Trace<T>>(
        &self,
        input: &[Complex<T>],
        trace: &C,
    ) -> Result<Vec<Complex<T>>, FftError> {
        check_length(input.len())?;
        let mut buf = input.to_vec();
        self.run(&mut buf, Direction::Forward, trace);
        Ok(buf)
    }

    /// Inverse transform of `input`, returned as a fresh sequence. Every one
    /// of the `n` output samples is scaled by `1 / n`.
    pub fn ifft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.ifft_with(input, &NoTrace)
    }

    /// Inverse transform with an observer notified at every boundary.
    pub fn ifft_with<C: Trace<T>>(
        &self,
        input: &[Complex<T>],
        trace: &C,
    ) -> Result<Vec<Complex<T>>, FftError> {
        check_length(input.len())?;
        let mut buf = input.to_vec();
        self.run(&mut buf, Direction::Inverse, trace);
        normalize(&mut buf);
        Ok(buf)
    }

    /// Forward transform of a real-valued sequence.
    pub fn fft_real(&self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        check_length(input.len())?;
        let mut buf: Vec<Complex<T>> = input
            .iter()
            .map(|&re| Complex::new(re, T::zero()))
            .collect();
        self.run(&mut buf, Direction::Forward, &NoTrace);
        Ok(buf)
    }

    /// In-place forward transform over a caller-owned buffer.
    pub fn fft_in_place(&self, buf: &mut [Complex<T>]) -> Result<(), FftError> {
        self.fft_in_place_with(buf, &NoTrace)
    }

    pub fn fft_in_place_with<C: Trace<T>>(
        &self,
        buf: &mut [Complex<T>],
        trace: &C,
    ) -> Result<(), FftError> {
        check_length(buf.len())?;
        self.run(buf, Direction::Forward, trace);
        Ok(())
    }

    /// In-place inverse transform over a caller-owned buffer.
    pub fn ifft_in_place(&self, buf: &mut [Complex<T>]) -> Result<(), FftError> {
        self.ifft_in_place_with(buf, &NoTrace)
    }

    pub fn ifft_in_place_with<C: Trace<T>>(
        &self,
        buf: &mut [Complex<T>],
        trace: &C,
    ) -> Result<(), FftError> {
        check_length(buf.len())?;
        self.run(buf, Direction::Inverse, trace);
        normalize(buf);
        Ok(())
    }

    fn run<C: Trace<T>>(&self, buf: &mut [Complex<T>], direction: Direction, trace: &C) {
        let twiddles = self.planner.borrow_mut().get_twiddles(buf.len(), direction);
        dif::transform(buf, &twiddles, trace);
        dif::bit_reverse_permute(buf);
    }
}

#[cfg(feature = "parallel")]
impl<T: Float> DifFft<T> {
    /// In-place forward transform using the parallel stage loop for lengths
    /// at or above the parallel threshold.
    pub fn fft_in_place_par_with<C: Trace<T> + Sync>(
        &self,
        buf: &mut [Complex<T>],
        trace: &C,
    ) -> Result<(), FftError> {
        check_length(buf.len())?;
        self.run_par(buf, Direction::Forward, trace);
        Ok(())
    }

    /// In-place inverse transform using the parallel stage loop for lengths
    /// at or above the parallel threshold.
    pub fn ifft_in_place_par_with<C: Trace<T> + Sync>(
        &self,
        buf: &mut [Complex<T>],
        trace: &C,
    ) -> Result<(), FftError> {
        check_length(buf.len())?;
        self.run_par(buf, Direction::Inverse, trace);
        normalize(buf);
        Ok(())
    }

    fn run_par<C: Trace<T> + Sync>(&self, buf: &mut [Complex<T>], direction: Direction, trace: &C) {
        let n = buf.len();
        let twiddles = self.planner.borrow_mut().get_twiddles(n, direction);
        if n >= parallel_fft_threshold() {
            dif::transform_parallel(buf, &twiddles, trace);
        } else {
            dif::transform(buf, &twiddles, trace);
        }
        dif::bit_reverse_permute(buf);
    }
}

/// Scale every sample by `1 / n`.
fn normalize<T: Float>(buf: &mut [Complex<T>]) {
    let scale = T::one() / T::from_f32(buf.len() as f32);
    for c in buf.iter_mut() {
        *c = c.scale(scale);
    }
}

/// Override for the minimum length that switches the in-place parallel entry
/// points to the parallel stage loop. `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_FFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "parallel")]
const DEFAULT_PARALLEL_FFT_THRESHOLD: usize = 1 << 12;

/// Set a custom minimum length for the parallel stage loop. Passing `0`
/// reverts to the built-in default.
#[cfg(feature = "parallel")]
pub fn set_parallel_fft_threshold(threshold: usize) {
    PARALLEL_FFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
fn parallel_fft_threshold() -> usize {
    let threshold = PARALLEL_FFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if threshold != 0 {
        threshold
    } else {
        DEFAULT_PARALLEL_FFT_THRESHOLD
    }
}

/// In-place parallel forward transform with a throwaway planner.
#[cfg(feature = "parallel")]
pub fn fft_parallel<T: Float>(buf: &mut [Complex<T>]) -> Result<(), FftError> {
    DifFft::new().fft_in_place_par_with(buf, &NoTrace)
}

/// In-place parallel inverse transform with a throwaway planner.
#[cfg(feature = "parallel")]
pub fn ifft_parallel<T: Float>(buf: &mut [Complex<T>]) -> Result<(), FftError> {
    DifFft::new().ifft_in_place_par_with(buf, &NoTrace)
}

#[cfg(all(feature = "internal-tests", test))]
mod property_tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    proptest! {
        #[test]
        fn prop_fft_ifft_roundtrip(
            len in proptest::sample::select(vec![1usize, 2, 4, 8, 16, 32, 64]),
            ref signal in proptest::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 64),
        ) {
            let input: Vec<Complex64> = signal
                .iter()
                .take(len)
                .map(|&(re, im)| Complex64::new(re, im))
                .collect();
            let fft = DifFft::<f64>::new();
            let spectrum = fft.fft(&input).unwrap();
            let back = fft.ifft(&spectrum).unwrap();
            for (orig, rec) in input.iter().zip(back.iter()) {
                prop_assert!((orig.re - rec.re).abs() < 1e-6);
                prop_assert!((orig.im - rec.im).abs() < 1e-6);
            }
        }

        #[test]
        fn prop_permutation_involution(bits in 0usize..=10) {
            let n = 1usize << bits;
            let mut buf: Vec<usize> = (0..n).collect();
            crate::dif::bit_reverse_permute(&mut buf);
            crate::dif::bit_reverse_permute(&mut buf);
            prop_assert!(buf.iter().enumerate().all(|(i, &v)| i == v));
        }
    }

    #[test]
    fn randomized_large_roundtrip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let n = 1 << 10;
        let input: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let fft = DifFft::<f64>::new();
        let back = fft.ifft(&fft.fft(&input).unwrap()).unwrap();
        for (orig, rec) in input.iter().zip(back.iter()) {
            assert!((orig.re - rec.re).abs() < 1e-9);
            assert!((orig.im - rec.im).abs() < 1e-9);
        }
    }
}
