//! Demonstrates shipping trace events through the `log` facade.
use difft::{Complex64, DifFft, LogTrace};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let input: Vec<Complex64> = (1..=4).map(|x| Complex64::new(x as f64, 0.0)).collect();
    let fft = DifFft::<f64>::new();
    let spectrum = fft.fft_with(&input, &LogTrace).unwrap();
    println!("bin 0 = ({}, {}i)", spectrum[0].re, spectrum[0].im);
}
