//! Frequency response sweeps along the imaginary axis.
//!
//! A sweep evaluates `H(jω)` on a grid of frequencies using the split
//! real/imaginary coefficients of numerator and denominator, so each point
//! costs two real polynomial evaluations per polynomial and one division.
//! Points are computed in parallel and returned in grid order.

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::transfer_function::TransferFunction;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const BINARY_MAGIC: &[u8; 12] = b"RUSTYCONTROL";
const BINARY_VERSION: u32 = 1;

/// Upper bound on [`SweepConfig::points`].
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    #[default]
    Log,
    Linear,
}

/// What a sweep does when it hits a frequency where `D(jω) = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolePolicy {
    /// Abort the sweep with [`Error::DivisionByZero`].
    #[default]
    Fail,
    /// Drop the point and record it in [`BodeResponse::poles`].
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First frequency in rad/s.
    pub start: f64,
    /// Last frequency in rad/s.
    pub stop: f64,
    pub points: usize,
    pub spacing: Spacing,
    pub on_pole: PolePolicy,
    /// Remove ±360° jumps between consecutive phase samples.
    pub unwrap_phase: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0.01,
            stop: 100.0,
            points: 200,
            spacing: Spacing::Log,
            on_pole: PolePolicy::Fail,
            unwrap_phase: true,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(Error::invalid("sweep bounds must be finite"));
        }
        if self.stop <= self.start {
            return Err(Error::invalid(format!(
                "sweep stop ({}) must exceed start ({})",
                self.stop, self.start
            )));
        }
        if self.spacing == Spacing::Log && self.start <= 0.0 {
            return Err(Error::invalid("log sweep needs a positive start frequency"));
        }
        if self.points < 2 {
            return Err(Error::invalid("sweep needs at least 2 points"));
        }
        if self.points > MAX_SWEEP_POINTS {
            return Err(Error::invalid(format!(
                "sweep of {} points exceeds the maximum of {}",
                self.points, MAX_SWEEP_POINTS
            )));
        }
        Ok(())
    }

    /// Frequency grid. The first and last entries equal `start` and `stop`.
    pub fn frequencies(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let last = self.points - 1;
        let grid = (0..self.points).map(|i| {
            if i == 0 {
                return self.start;
            }
            if i == last {
                return self.stop;
            }
            let t = i as f64 / last as f64;
            match self.spacing {
                Spacing::Linear => self.start + t * (self.stop - self.start),
                Spacing::Log => {
                    let (a, b) = (self.start.log10(), self.stop.log10());
                    10f64.powf(a + t * (b - a))
                }
            }
        });
        Ok(grid.collect())
    }
}

/// One sample of a frequency response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodePoint {
    pub omega: f64,
    pub re: f64,
    pub im: f64,
    pub magnitude: f64,
    /// `-inf` at a transmission zero; written as `null` and read back as `-inf`.
    #[serde(with = "decibels")]
    pub magnitude_db: f64,
    pub phase_deg: f64,
}

mod decibels {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(db: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        db.is_finite().then_some(*db).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

impl BodePoint {
    pub fn from_value(omega: f64, h: Complex) -> Self {
        let magnitude = h.abs();
        Self {
            omega,
            re: h.re,
            im: h.im,
            magnitude,
            magnitude_db: 20.0 * magnitude.log10(),
            phase_deg: h.arg().to_degrees(),
        }
    }

    pub fn value(&self) -> Complex {
        Complex::new(self.re, self.im)
    }
}

/// Result of a sweep together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodeResponse {
    pub transfer_function: TransferFunction,
    pub config: SweepConfig,
    pub points: Vec<BodePoint>,
    /// Frequencies dropped under [`PolePolicy::Skip`].
    #[serde(default)]
    pub poles: Vec<f64>,
}

/// Sweep `tf` over the grid described by `config`.
pub fn bode(tf: &TransferFunction, config: &SweepConfig) -> Result<BodeResponse> {
    let omegas = config.frequencies()?;
    debug!(
        "Bode sweep: {} points from {} to {} rad/s ({:?})",
        omegas.len(),
        config.start,
        config.stop,
        config.spacing
    );
    let evaluator = tf.frequency_evaluator();
    let samples: Vec<(f64, Result<Complex>)> = omegas
        .par_iter()
        .map(|&w| (w, evaluator.at(w)))
        .collect();

    let mut points = Vec::with_capacity(samples.len());
    let mut poles = Vec::new();
    for (omega, sample) in samples {
        match sample {
            Ok(h) => {
                trace!("H(j{omega}) = {h}");
                points.push(BodePoint::from_value(omega, h));
            }
            Err(err @ Error::DivisionByZero { .. }) => match config.on_pole {
                PolePolicy::Fail => return Err(err),
                PolePolicy::Skip => {
                    warn!("Skipping pole at omega = {omega}");
                    poles.push(omega);
                }
            },
            Err(err) => return Err(err),
        }
    }
    if config.unwrap_phase {
        unwrap_phase(&mut points);
    }
    Ok(BodeResponse {
        transfer_function: tf.clone(),
        config: *config,
        points,
        poles,
    })
}

/// Shift each phase by a multiple of 360° so that consecutive samples differ
/// by at most 180°.
pub fn unwrap_phase(points: &mut [BodePoint]) {
    let mut offset = 0.0;
    let mut prev_raw: Option<f64> = None;
    for p in points.iter_mut() {
        let raw = p.phase_deg;
        if let Some(prev) = prev_raw {
            let delta = raw - prev;
            if delta > 180.0 {
                offset -= 360.0 * ((delta - 180.0) / 360.0).ceil();
            } else if delta < -180.0 {
                offset += 360.0 * ((-delta - 180.0) / 360.0).ceil();
            }
        }
        prev_raw = Some(raw);
        p.phase_deg = raw + offset;
    }
}

impl BodeResponse {
    /// Save the response to a binary file with magic bytes and versioning.
    pub fn save_to_binary<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        std::io::Write::write_all(&mut writer, BINARY_MAGIC)?;
        std::io::Write::write_all(&mut writer, &BINARY_VERSION.to_le_bytes())?;
        bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
        std::io::Write::flush(&mut writer)?;
        Ok(())
    }

    /// Load a response from a binary file, checking magic bytes and version.
    pub fn load_from_binary<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mut magic = [0u8; 12];
        std::io::Read::read_exact(&mut reader, &mut magic)?;
        if &magic != BINARY_MAGIC {
            anyhow::bail!("Invalid magic bytes: expected 'RUSTYCONTROL'");
        }
        let mut version_bytes = [0u8; 4];
        std::io::Read::read_exact(&mut reader, &mut version_bytes)?;
        let version = u32::from_le_bytes(version_bytes);
        if version != BINARY_VERSION {
            anyhow::bail!("Unsupported version: {}", version);
        }
        let response: BodeResponse =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        Ok(response)
    }
}
