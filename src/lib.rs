//! # difft - instrumented radix-2 decimation-in-frequency FFT
//!
//! A small, teaching-oriented FFT engine built around the classic radix-2
//! DIF decomposition: `log2(n)` sequential stages of butterfly operations
//! over one in-place buffer, followed by a bit-reversal permutation, with an
//! optional observer notified at every transform, stage, group, and
//! butterfly boundary.
//!
//! ## Features
//!
//! - **In-place and copying APIs** over `Complex<f32>` / `Complex<f64>`
//! - **Instrumentation hooks** exposing every intermediate computation
//! - **Twiddle planner** caching rotation tables per (length, direction)
//! - **no_std support** (`default-features = false`, math via `libm`)
//! - **Parallel stage execution** (optional, `parallel` feature)
//! - **Event logging** through the `log` facade (`verbose-logging` feature)
//!
//! ## Cargo features
//!
//! - `std` (default): standard library float intrinsics and `std::error::Error`
//! - `parallel`: spread each stage's butterflies across rayon workers
//! - `verbose-logging`: ship trace events to the `log` facade
//! - `internal-tests`: property-test suites (proptest, rand)
//!
//! ## Example
//!
//! ```
//! use difft::{Complex64, DifFft};
//!
//! let fft = DifFft::<f64>::new();
//! let input: Vec<Complex64> = (1..=4).map(|x| Complex64::new(x as f64, 0.0)).collect();
//! let spectrum = fft.fft(&input)?;
//! assert!((spectrum[0].re - 10.0).abs() < 1e-12);
//! let back = fft.ifft(&spectrum)?;
//! assert!((back[3].re - 4.0).abs() < 1e-12);
//! # Ok::<(), difft::FftError>(())
//! ```
//!
//! Only power-of-two lengths are accepted; anything else fails up front with
//! [`FftError::InvalidLength`].

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Stage/group/butterfly loop and the bit-reversal permutation.
pub mod dif;

/// Forward/inverse facade, validation, and errors.
pub mod fft;

/// Complex samples and the float abstraction.
pub mod num;

/// Observer hooks for tracing a transform.
pub mod trace;

/// Twiddle factor tables and their planner cache.
pub mod twiddle;

pub use fft::{DifFft, FftError};
#[cfg(feature = "parallel")]
pub use fft::{fft_parallel, ifft_parallel, set_parallel_fft_threshold};
pub use num::{Complex, Complex32, Complex64, Float};
#[cfg(feature = "verbose-logging")]
pub use trace::LogTrace;
pub use trace::{ButterflySite, NoTrace, Trace};
pub use twiddle::{twiddle_table, Direction, TwiddlePlanner};
