//! JSON documents describing transfer functions and sweep settings.
//!
//! ```json
//! { "name": "plant", "numerator": [1.0], "denominator": [1.0, 1.0] }
//! ```

use crate::bode::SweepConfig;
use crate::transfer_function::TransferFunction;
use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Unvalidated transfer function as written in a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFunctionDoc {
    #[serde(default)]
    pub name: Option<String>,
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
}

impl TransferFunctionDoc {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse transfer function JSON")
    }

    pub fn from_json_file(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Failed to read {}", path))
    }

    /// Validate into a [`TransferFunction`].
    pub fn to_transfer_function(&self) -> Result<TransferFunction> {
        let tf = TransferFunction::from_coefficients(&self.numerator, &self.denominator)
            .with_context(|| {
                format!(
                    "Invalid transfer function {}",
                    self.name.as_deref().unwrap_or("<unnamed>")
                )
            })?;
        Ok(tf)
    }
}

impl From<&TransferFunction> for TransferFunctionDoc {
    fn from(tf: &TransferFunction) -> Self {
        Self {
            name: None,
            numerator: tf.numerator.coefficients().to_vec(),
            denominator: tf.denominator.coefficients().to_vec(),
        }
    }
}

/// Read a [`SweepConfig`]; fields missing from the file keep their defaults.
pub fn load_sweep_config(path: impl AsRef<Utf8Path>) -> Result<SweepConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    let config: SweepConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse sweep config {}", path))?;
    Ok(config)
}
