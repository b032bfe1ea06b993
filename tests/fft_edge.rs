use difft::{Complex64, DifFft, FftError};

#[test]
fn zero_length_is_rejected() {
    let fft = DifFft::<f64>::new();
    let input: [Complex64; 0] = [];
    assert_eq!(fft.fft(&input), Err(FftError::InvalidLength(0)));
    assert_eq!(fft.ifft(&input), Err(FftError::InvalidLength(0)));
}

#[test]
fn non_power_of_two_is_rejected() {
    let fft = DifFft::<f64>::new();
    for n in [3usize, 5, 6, 12, 1000] {
        let input = vec![Complex64::zero(); n];
        assert_eq!(fft.fft(&input), Err(FftError::InvalidLength(n)));
        assert_eq!(fft.ifft(&input), Err(FftError::InvalidLength(n)));
        assert_eq!(
            fft.fft_real(&vec![0.0f64; n]),
            Err(FftError::InvalidLength(n))
        );
    }
}

#[test]
fn invalid_length_leaves_buffer_untouched() {
    let fft = DifFft::<f64>::new();
    let mut buf = vec![
        Complex64::new(1.0, 2.0),
        Complex64::new(3.0, 4.0),
        Complex64::new(5.0, 6.0),
    ];
    let snapshot = buf.clone();
    assert!(fft.fft_in_place(&mut buf).is_err());
    assert!(fft.ifft_in_place(&mut buf).is_err());
    assert_eq!(buf, snapshot);
}

#[test]
fn length_one_is_identity() {
    let fft = DifFft::<f64>::new();
    let input = [Complex64::new(42.0, -7.0)];
    let spectrum = fft.fft(&input).unwrap();
    assert_eq!(spectrum.len(), 1);
    assert_eq!(spectrum[0], input[0]);
    let back = fft.ifft(&spectrum).unwrap();
    assert_eq!(back[0], input[0]);
}

#[test]
fn inverse_scales_every_sample() {
    // The last sample must be normalized like all the others, and the
    // output must keep the full length.
    let fft = DifFft::<f64>::new();
    let input = [
        Complex64::zero(),
        Complex64::zero(),
        Complex64::zero(),
        Complex64::new(7.0, -3.0),
    ];
    let back = fft.ifft(&fft.fft(&input).unwrap()).unwrap();
    assert_eq!(back.len(), 4);
    assert!((back[3].re - 7.0).abs() < 1e-9);
    assert!((back[3].im + 3.0).abs() < 1e-9);
}

#[test]
fn error_reports_offending_length() {
    let err = DifFft::<f32>::new()
        .fft(&vec![difft::Complex32::zero(); 24])
        .unwrap_err();
    assert_eq!(err, FftError::InvalidLength(24));
    let message = format!("{}", err);
    assert!(message.contains("24"));
    assert!(message.contains("power of two"));
}

#[cfg(feature = "std")]
#[test]
fn error_implements_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(FftError::InvalidLength(3));
    assert!(err.to_string().contains("3"));
}
