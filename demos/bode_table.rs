//! Print a Bode table for a second-order system.
//!
//! Usage:
//!   cargo run --example bode_table -- --zeta 0.2 --wn 1.0

use anyhow::Result;
use clap::Parser;
use rustycontrol::TransferFunction;
use rustycontrol::bode::{PolePolicy, SweepConfig, bode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bode table of wn^2 / (s^2 + 2 zeta wn s + wn^2)", long_about = None)]
struct Args {
    /// Damping ratio
    #[arg(long, default_value_t = 0.2)]
    zeta: f64,
    /// Natural frequency in rad/s
    #[arg(long, default_value_t = 1.0)]
    wn: f64,
    #[arg(long, default_value_t = 25)]
    points: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let wn2 = args.wn * args.wn;
    let tf = TransferFunction::from_coefficients(&[wn2], &[1.0, 2.0 * args.zeta * args.wn, wn2])?;
    let config = SweepConfig {
        start: args.wn / 100.0,
        stop: args.wn * 100.0,
        points: args.points,
        on_pole: PolePolicy::Skip,
        ..Default::default()
    };
    let response = bode(&tf, &config)?;

    println!("{:>12} {:>12} {:>12}", "omega", "gain [dB]", "phase [deg]");
    println!("{:-<12} {:-<12} {:-<12}", "", "", "");
    for p in &response.points {
        println!("{:12.4} {:12.3} {:12.2}", p.omega, p.magnitude_db, p.phase_deg);
    }
    for w in &response.poles {
        println!("{:12.4} {:>12} {:>12}", w, "pole", "-");
    }
    Ok(())
}
