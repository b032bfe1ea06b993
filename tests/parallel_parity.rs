#![cfg(feature = "parallel")]

use std::sync::atomic::{AtomicUsize, Ordering};

use difft::{
    fft_parallel, ifft_parallel, set_parallel_fft_threshold, ButterflySite, Complex32, DifFft,
    NoTrace, Trace,
};

fn generate_input(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|i| Complex32::new(i as f32, (i * 2) as f32))
        .collect()
}

fn assert_rel_close(a: f32, b: f32, tol: f32) {
    let scale = a.abs().max(b.abs()).max(1.0);
    assert!((a - b).abs() <= scale * tol, "{} vs {}", a, b);
}

#[test]
fn parallel_matches_serial() {
    set_parallel_fft_threshold(1);
    for n in [2usize, 16, 256, 1 << 12] {
        let mut parallel = generate_input(n);
        let mut serial = parallel.clone();
        fft_parallel(&mut parallel).unwrap();
        DifFft::<f32>::new().fft_in_place(&mut serial).unwrap();
        for (a, b) in parallel.iter().zip(serial.iter()) {
            assert_rel_close(a.re, b.re, 1e-6);
            assert_rel_close(a.im, b.im, 1e-6);
        }
    }
}

#[test]
fn parallel_roundtrip() {
    set_parallel_fft_threshold(1);
    let original = generate_input(1 << 11);
    let mut data = original.clone();
    fft_parallel(&mut data).unwrap();
    ifft_parallel(&mut data).unwrap();
    for (a, b) in data.iter().zip(original.iter()) {
        assert_rel_close(a.re, b.re, 1e-3);
        assert_rel_close(a.im, b.im, 1e-3);
    }
}

/// Counter safe for concurrent notification from butterfly workers.
#[derive(Default)]
struct AtomicCountingTrace {
    butterflies: AtomicUsize,
}

impl Trace<f32> for AtomicCountingTrace {
    fn butterfly_end(
        &self,
        _site: &ButterflySite,
        _a: Complex32,
        _b: Complex32,
        _x: Complex32,
        _y: Complex32,
    ) {
        self.butterflies.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn concurrent_hook_sees_every_butterfly() {
    set_parallel_fft_threshold(1);
    let n = 1usize << 10;
    let mut data = generate_input(n);
    let trace = AtomicCountingTrace::default();
    DifFft::<f32>::new()
        .fft_in_place_par_with(&mut data, &trace)
        .unwrap();
    assert_eq!(trace.butterflies.load(Ordering::Relaxed), (n / 2) * 10);
}

#[test]
fn invalid_length_is_rejected_before_parallel_dispatch() {
    set_parallel_fft_threshold(1);
    let mut data = generate_input(12);
    assert!(fft_parallel(&mut data).is_err());
    let mut empty: Vec<Complex32> = Vec::new();
    assert!(DifFft::<f32>::new()
        .ifft_in_place_par_with(&mut empty, &NoTrace)
        .is_err());
}
