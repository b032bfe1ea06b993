//! Prints the full stage/group/butterfly event tree of one small transform,
//! using a custom [`Trace`] observer.
use difft::{ButterflySite, Complex64, DifFft, Trace};

struct TreePrinter;

impl Trace<f64> for TreePrinter {
    fn fft_start(&self, length: usize, stages: usize) {
        println!("Length: {length} => Stages: {stages}");
    }
    fn fft_end(&self, _length: usize, _stages: usize) {
        println!("'- FFT END");
    }
    fn stage_start(&self, stage: usize, groups: usize, groupsize: usize) {
        println!("'-Groups at stage {stage}: {groups} (Groupsize={groupsize})");
    }
    fn group_start(&self, stage: usize, group: usize, butterflies: usize) {
        println!("| '-Bflies at stage {stage}");
        println!("|   '-Group      : {group}");
        println!("|   '-Butterflies: {butterflies}");
    }
    fn butterfly_start(&self, site: &ButterflySite, a: Complex64, b: Complex64) {
        println!("|     '- Initial values:");
        println!("|     |  '- a  = ({:.2}, j{:.2})", a.re, a.im);
        println!("|     |  '- b  = ({:.2}, j{:.2})", b.re, b.im);
        println!("|     |  '- k  = {}", site.k);
        println!("|     |  '- i1 = {}", site.i1);
        println!("|     |  '- i2 = {}", site.i2);
    }
    fn butterfly_end(
        &self,
        _site: &ButterflySite,
        a: Complex64,
        b: Complex64,
        x: Complex64,
        y: Complex64,
    ) {
        println!("|     '- Results:");
        println!(
            "|     |  '- a: ({:.2}, j{:.2}) => ({:.2}, j{:.2})",
            a.re, a.im, x.re, x.im
        );
        println!(
            "|     |  '- b: ({:.2}, j{:.2}) => ({:.2}, j{:.2})",
            b.re, b.im, y.re, y.im
        );
    }
}

fn main() -> Result<(), difft::FftError> {
    let size: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(8);

    println!("Decimation-In-Frequency Radix-2 FFT");
    println!("Used FFT length: {size}");
    println!();

    let input: Vec<Complex64> = (1..=size).map(|x| Complex64::new(x as f64, 0.0)).collect();
    let fft = DifFft::<f64>::new();
    let spectrum = fft.fft_with(&input, &TreePrinter)?;

    println!();
    println!("FFT results:");
    for (index, bin) in spectrum.iter().enumerate() {
        println!("{index} : ({:.2}, j{:.2})", bin.re, bin.im);
    }
    Ok(())
}
