//! Forward and inverse transform of a short ramp signal.
use difft::{Complex64, DifFft};

fn main() -> Result<(), difft::FftError> {
    let fft = DifFft::<f64>::new();

    let input: Vec<Complex64> = (1..=8).map(|x| Complex64::new(x as f64, 0.0)).collect();
    let spectrum = fft.fft(&input)?;

    println!("FFT results:");
    for (index, bin) in spectrum.iter().enumerate() {
        println!("{index} : ({:.2}, j{:.2})", bin.re, bin.im);
    }

    let back = fft.ifft(&spectrum)?;
    println!("Inverse FFT:");
    for (index, sample) in back.iter().enumerate() {
        println!("{index} : {:.2}", sample.re);
    }

    Ok(())
}
