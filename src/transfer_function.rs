//! Rational transfer functions `H(s) = N(s) / D(s)`.

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::polynomial::{Polynomial, SplitPolynomial};
use serde::{Deserialize, Serialize};

/// Ratio of two real polynomials in `s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunction {
    pub numerator: Polynomial,
    pub denominator: Polynomial,
}

impl TransferFunction {
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Build from raw coefficient slices, validating both.
    pub fn from_coefficients(numerator: &[f64], denominator: &[f64]) -> Result<Self> {
        let numerator = Polynomial::new(numerator)
            .map_err(|e| Error::invalid(format!("numerator: {e}")))?;
        let denominator = Polynomial::new(denominator)
            .map_err(|e| Error::invalid(format!("denominator: {e}")))?;
        if denominator.coefficients().iter().all(|&c| c == 0.0) {
            return Err(Error::invalid("denominator is identically zero"));
        }
        Ok(Self::new(numerator, denominator))
    }

    /// `H(z)`; fails with [`Error::DivisionByZero`] at a pole.
    pub fn evaluate(&self, z: Complex) -> Result<Complex> {
        let num = self.numerator.evaluate(z);
        let den = self.denominator.evaluate(z);
        num.checked_div(den, z)
    }

    /// `H(jω)` through the real/imaginary split. Prefer [`Self::frequency_evaluator`]
    /// when sweeping many frequencies.
    pub fn evaluate_at_frequency(&self, omega: f64) -> Result<Complex> {
        self.frequency_evaluator().at(omega)
    }

    /// Precomputed split of numerator and denominator at `s = jω`.
    pub fn frequency_evaluator(&self) -> FrequencyEvaluator {
        FrequencyEvaluator {
            numerator: self.numerator.split_jw(),
            denominator: self.denominator.split_jw(),
        }
    }

    /// Steady-state gain `H(0)`.
    pub fn dc_gain(&self) -> Result<f64> {
        Ok(self.evaluate(Complex::ZERO)?.re)
    }

    /// Relative degree `deg D − deg N`; negative for improper functions.
    pub fn relative_degree(&self) -> isize {
        self.denominator.degree() as isize - self.numerator.degree() as isize
    }
}

/// `H(jω)` evaluator holding the split coefficients of both polynomials.
#[derive(Debug, Clone)]
pub struct FrequencyEvaluator {
    numerator: SplitPolynomial,
    denominator: SplitPolynomial,
}

impl FrequencyEvaluator {
    pub fn at(&self, omega: f64) -> Result<Complex> {
        let num = self.numerator.at(omega);
        let den = self.denominator.at(omega);
        num.checked_div(den, Complex::from_imag(omega))
    }
}

/// Returns a closure evaluating `numerator(z) / denominator(z)`.
///
/// Inputs are validated like [`TransferFunction::from_coefficients`]: empty
/// or non-finite coefficients and an identically-zero denominator are
/// rejected up front. The closure fails with [`Error::DivisionByZero`]
/// whenever the denominator is exactly `0 + 0i`.
pub fn evaluate_transfer_function(
    numerator: &[f64],
    denominator: &[f64],
) -> Result<impl Fn(Complex) -> Result<Complex> + Send + Sync + Clone> {
    let tf = TransferFunction::from_coefficients(numerator, denominator)?;
    Ok(move |z: Complex| tf.evaluate(z))
}
