use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use log::info;
use rustycontrol::bode::{PolePolicy, Spacing, SweepConfig, bode};
use rustycontrol::document::{TransferFunctionDoc, load_sweep_config};
use rustycontrol::polynomial::{imag_terms, real_terms};
use rustycontrol::{Complex, TransferFunction};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate transfer functions and print the results as JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate H(s) at one complex point
    Eval {
        #[command(flatten)]
        tf: TfArgs,
        /// Real part of s
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        re: f64,
        /// Imaginary part of s
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        im: f64,
    },
    /// Split p(jω) into real and imaginary coefficient arrays
    Split {
        /// Coefficients, highest degree first (comma separated)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        coefficients: Vec<f64>,
    },
    /// Sweep H(jω) and print magnitude and phase
    Bode {
        #[command(flatten)]
        tf: TfArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        /// Also write the response to a binary cache file
        #[arg(long, value_name = "OUT_BIN")]
        cache: Option<Utf8PathBuf>,
    },
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// JSON sweep configuration; flags below override its fields
    #[arg(long, value_name = "SWEEP_JSON")]
    config: Option<Utf8PathBuf>,
    #[arg(long)]
    start: Option<f64>,
    #[arg(long)]
    stop: Option<f64>,
    #[arg(long)]
    points: Option<usize>,
    /// Use a linear instead of logarithmic grid
    #[arg(long)]
    linear: bool,
    /// Drop frequencies that hit a pole instead of failing
    #[arg(long)]
    skip_poles: bool,
}

impl SweepArgs {
    /// Defaults, then the config file, then command-line flags.
    fn resolve(&self) -> Result<SweepConfig> {
        let mut sweep = match &self.config {
            Some(path) => load_sweep_config(path)?,
            None => SweepConfig::default(),
        };
        if let Some(v) = self.start {
            sweep.start = v;
        }
        if let Some(v) = self.stop {
            sweep.stop = v;
        }
        if let Some(v) = self.points {
            sweep.points = v;
        }
        if self.linear {
            sweep.spacing = Spacing::Linear;
        }
        if self.skip_poles {
            sweep.on_pole = PolePolicy::Skip;
        }
        Ok(sweep)
    }
}

#[derive(Args, Debug)]
struct TfArgs {
    /// Numerator coefficients, highest degree first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    num: Vec<f64>,
    /// Denominator coefficients, highest degree first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    den: Vec<f64>,
    /// Transfer function JSON file (instead of --num/--den)
    #[arg(long, value_name = "TF_JSON", conflicts_with_all = ["num", "den"])]
    tf: Option<Utf8PathBuf>,
}

impl TfArgs {
    fn load(&self) -> Result<TransferFunction> {
        let doc = match &self.tf {
            Some(path) => TransferFunctionDoc::from_json_file(path)?,
            None => {
                if self.num.is_empty() || self.den.is_empty() {
                    bail!("Provide --tf FILE or both --num and --den");
                }
                TransferFunctionDoc {
                    name: None,
                    numerator: self.num.clone(),
                    denominator: self.den.clone(),
                }
            }
        };
        doc.to_transfer_function()
    }
}

#[derive(Serialize)]
struct SplitOutput {
    real: Vec<f64>,
    imag: Vec<f64>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Execute a subcommand and return the JSON it prints.
fn run(command: Command) -> Result<String> {
    match command {
        Command::Eval { tf, re, im } => {
            let tf = tf.load()?;
            let s = Complex::new(re, im);
            let h = tf
                .evaluate(s)
                .with_context(|| format!("Failed to evaluate H({})", s))?;
            to_json(&h)
        }
        Command::Split { coefficients } => to_json(&SplitOutput {
            real: real_terms(&coefficients),
            imag: imag_terms(&coefficients),
        }),
        Command::Bode { tf, sweep, cache } => {
            let tf = tf.load()?;
            let sweep = sweep.resolve()?;
            let response = bode(&tf, &sweep).context("Bode sweep failed")?;
            if let Some(path) = &cache {
                response
                    .save_to_binary(path)
                    .with_context(|| format!("Write {}", path))?;
                info!("Wrote {} points to {}", response.points.len(), path);
            }
            to_json(&response)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json = run(cli.command)?;
    println!("{}", json);
    Ok(())
}
