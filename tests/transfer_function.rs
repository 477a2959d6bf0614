use approx::assert_relative_eq;
use rustycontrol::{Complex, Error, TransferFunction, evaluate_transfer_function};

#[test]
fn closure_divides_numerator_by_denominator() {
    // (s + 1) / (s + 3) at s = i  ->  (1 + i) / (3 + i) = 0.4 + 0.2i
    let h = evaluate_transfer_function(&[1.0, 1.0], &[1.0, 3.0]).unwrap();
    let v = h(Complex::I).unwrap();
    assert_relative_eq!(v.re, 0.4, epsilon = 1e-12);
    assert_relative_eq!(v.im, 0.2, epsilon = 1e-12);
}

#[test]
fn pole_is_reported_as_division_by_zero() {
    let h = evaluate_transfer_function(&[1.0], &[1.0, -2.0]).unwrap();
    let z = Complex::new(2.0, 0.0);
    assert_eq!(h(z), Err(Error::DivisionByZero { at: z }));
    // Next to the pole the value is finite.
    assert!(h(Complex::new(2.5, 0.0)).unwrap().re.is_finite());
}

#[test]
fn closure_rejects_empty_coefficients() {
    assert!(matches!(
        evaluate_transfer_function(&[], &[1.0]),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let h = evaluate_transfer_function(&[2.0, -1.0, 0.5], &[1.0, 0.3, 4.0, 1.0]).unwrap();
    let z = Complex::new(0.37, 1.91);
    let (a, b) = (h(z).unwrap(), h(z).unwrap());
    assert_eq!(a.re.to_bits(), b.re.to_bits());
    assert_eq!(a.im.to_bits(), b.im.to_bits());
}

#[test]
fn frequency_path_matches_complex_path() {
    let tf = TransferFunction::from_coefficients(&[1.0, 0.5], &[1.0, 2.0, 10.0, 3.0]).unwrap();
    for omega in [0.0, 0.25, 1.0, 4.0] {
        let direct = tf.evaluate(Complex::from_imag(omega)).unwrap();
        let fast = tf.evaluate_at_frequency(omega).unwrap();
        assert_relative_eq!(direct.re, fast.re, epsilon = 1e-12);
        assert_relative_eq!(direct.im, fast.im, epsilon = 1e-12);
    }
}

#[test]
fn frequency_path_reports_imaginary_pole() {
    // 1 / (s^2 + 1) has poles at ±i
    let tf = TransferFunction::from_coefficients(&[1.0], &[1.0, 0.0, 1.0]).unwrap();
    assert_eq!(
        tf.evaluate_at_frequency(1.0),
        Err(Error::DivisionByZero {
            at: Complex::from_imag(1.0)
        })
    );
}

#[test]
fn dc_gain_and_relative_degree() {
    let tf = TransferFunction::from_coefficients(&[2.0], &[1.0, 4.0]).unwrap();
    assert_relative_eq!(tf.dc_gain().unwrap(), 0.5);
    assert_eq!(tf.relative_degree(), 1);

    let integrator = TransferFunction::from_coefficients(&[1.0], &[1.0, 0.0]).unwrap();
    assert!(integrator.dc_gain().is_err());
}

#[test]
fn zero_denominator_is_rejected() {
    assert!(TransferFunction::from_coefficients(&[1.0], &[0.0, 0.0]).is_err());
}

#[test]
fn closure_validates_like_from_coefficients() {
    assert!(matches!(
        evaluate_transfer_function(&[1.0], &[0.0, 0.0]),
        Err(Error::InvalidInput { .. })
    ));
    assert!(TransferFunction::from_coefficients(&[1.0], &[0.0, 0.0]).is_err());
}

#[test]
fn tiny_constant_denominator_gives_finite_gain() {
    let h = evaluate_transfer_function(&[1.0], &[1e-170]).unwrap();
    let v = h(Complex::ZERO).unwrap();
    assert!(v.re.is_finite() && v.im.is_finite());
    assert_relative_eq!(v.re, 1e170, max_relative = 1e-12);
}
