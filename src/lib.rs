//! Transfer function evaluation for control-system analysis.
//!
//! This crate evaluates real-coefficient polynomials and rational transfer
//! functions on the complex plane, splits `p(jω)` into real and imaginary
//! polynomials in `ω`, and computes Bode responses from those splits.
//!
//! The binary `rustycontrol` wraps these operations and prints JSON.

pub mod bode;
pub mod complex;
pub mod document;
pub mod error;
pub mod polynomial;
pub mod transfer_function;

pub use complex::Complex;
pub use error::{Error, Result};
pub use polynomial::Polynomial;
pub use transfer_function::{TransferFunction, evaluate_transfer_function};
