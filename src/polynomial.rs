//! Real-coefficient polynomials evaluated on the complex plane.
//!
//! Coefficients are stored highest degree first: `[5, 3, 7]` is `5s² + 3s + 7`.
//!
//! Two evaluation paths exist:
//! - [`Polynomial::evaluate`] sums `c · z^k` for an arbitrary complex `z`.
//! - [`Polynomial::split_jw`] substitutes `s = jω` symbolically and returns the
//!   real and imaginary parts as two real polynomials in `ω`. Sweeping many
//!   frequencies then only needs real arithmetic.
//!
//! The substitution relies on the period-4 cycle of `(jω)^k`:
//!
//! ```text
//! k mod 4 :   0     1      2      3
//! (jω)^k  :  ω^k  jω^k  -ω^k  -jω^k
//! ```
//!
//! so a term of degree `k` lands in the real part when `k` is even and in the
//! imaginary part when `k` is odd, negated when `k mod 4` is 2 or 3.

use crate::complex::Complex;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A non-empty sequence of real coefficients, highest degree first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial; fails with [`Error::InvalidInput`] on an empty slice
    /// or non-finite coefficients.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Result<Self> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(Error::invalid(
                "polynomial needs at least one coefficient",
            ));
        }
        if let Some(c) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(Error::invalid(format!("non-finite coefficient {c}")));
        }
        Ok(Self { coefficients })
    }

    /// The constant polynomial `c`.
    pub fn constant(c: f64) -> Self {
        Self {
            coefficients: vec![c],
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate at a complex point by direct summation of `c · at^k`.
    pub fn evaluate(&self, at: Complex) -> Complex {
        evaluate_terms(&self.coefficients, at)
    }

    /// Evaluate at a real point.
    pub fn evaluate_real(&self, x: f64) -> f64 {
        evaluate_real(&self.coefficients, x)
    }

    /// Real part of `p(jω)` as coefficients in `ω` (same length as `self`).
    pub fn real_terms(&self) -> Vec<f64> {
        real_terms(&self.coefficients)
    }

    /// Imaginary part of `p(jω)` as coefficients in `ω` (same length as `self`).
    pub fn imag_terms(&self) -> Vec<f64> {
        imag_terms(&self.coefficients)
    }

    /// Precompute both parts of `p(jω)` for repeated frequency evaluation.
    pub fn split_jw(&self) -> SplitPolynomial {
        SplitPolynomial {
            real: self.real_terms(),
            imag: self.imag_terms(),
        }
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = Error;

    fn try_from(coefficients: Vec<f64>) -> Result<Self> {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(p: Polynomial) -> Self {
        p.coefficients
    }
}

/// `p(jω)` decomposed into `re(ω) + j·im(ω)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPolynomial {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
}

impl SplitPolynomial {
    /// Value of the original polynomial at `s = jω`.
    pub fn at(&self, omega: f64) -> Complex {
        Complex::new(
            evaluate_real(&self.real, omega),
            evaluate_real(&self.imag, omega),
        )
    }
}

/// Evaluate `coefficients` (highest degree first) at a complex point.
///
/// Fails with [`Error::InvalidInput`] when `coefficients` is empty.
pub fn evaluate(coefficients: &[f64], at: Complex) -> Result<Complex> {
    if coefficients.is_empty() {
        return Err(Error::invalid("empty coefficient sequence"));
    }
    Ok(evaluate_terms(coefficients, at))
}

fn evaluate_terms(coefficients: &[f64], at: Complex) -> Complex {
    let n = coefficients.len();
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| at.powi((n - 1 - i) as u32).scale(c))
        .fold(Complex::ZERO, |acc, term| acc + term)
}

/// Horner evaluation of a real polynomial at a real point. Empty input is 0.
pub fn evaluate_real(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Degree of position `i` counted from the end of a sequence of length `len`.
#[inline]
fn degree_at(len: usize, i: usize) -> usize {
    len - 1 - i
}

/// Coefficients of `Re p(jω)`: even-degree positions carry `±c`, odd ones 0.
///
/// ```
/// use rustycontrol::polynomial::real_terms;
/// assert_eq!(real_terms(&[5.0, 3.0, 7.0]), vec![-5.0, 0.0, 7.0]);
/// ```
pub fn real_terms(coefficients: &[f64]) -> Vec<f64> {
    let len = coefficients.len();
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| match degree_at(len, i) % 4 {
            0 => c,
            2 => -c,
            _ => 0.0,
        })
        .collect()
}

/// Coefficients of `Im p(jω)`: odd-degree positions carry `±c`, even ones 0.
///
/// ```
/// use rustycontrol::polynomial::imag_terms;
/// assert_eq!(imag_terms(&[5.0, 3.0, 7.0]), vec![0.0, 3.0, 0.0]);
/// ```
pub fn imag_terms(coefficients: &[f64]) -> Vec<f64> {
    let len = coefficients.len();
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| match degree_at(len, i) % 4 {
            1 => c,
            3 => -c,
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_counts_from_the_end() {
        assert_eq!(degree_at(6, 0), 5);
        assert_eq!(degree_at(6, 5), 0);
    }

    #[test]
    fn six_term_sign_pattern() {
        let t = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        // degrees 5..0
        assert_eq!(real_terms(&t), vec![0.0, 5.0, 0.0, -3.0, 0.0, 1.0]);
        assert_eq!(imag_terms(&t), vec![6.0, 0.0, -4.0, 0.0, 2.0, 0.0]);
    }
}
