//! Averaging longitudes across the antimeridian.
//!
//! `cargo run -p demos --example dateline_mean -- 179 -179 178`

use anyhow::{ensure, Result};
use circa::embedding::circular_mean;
use circa::period::Period;
use clap::Parser;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "dateline_mean")]
#[command(about = "Linear vs circular mean of longitudes")]
struct Args {
    /// Longitudes in degrees, east positive
    #[arg(required = true, allow_hyphen_values = true)]
    longitudes: Vec<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circa=info".parse()?),
        )
        .init();

    let args = Args::parse();
    ensure!(
        args.longitudes.iter().all(|l| l.is_finite()),
        "longitudes must be finite"
    );
    let degrees = Period::degrees();

    let linear = args.longitudes.iter().sum::<f64>() / args.longitudes.len() as f64;
    let mean = circular_mean(args.longitudes.as_slice(), degrees)?;
    let circular = degrees.wrap_signed(mean.mean);

    println!("Longitudes  {:?}", args.longitudes);
    println!("Linear      {:8.3}°", linear);
    if mean.degenerate {
        warn!("longitudes cancel out, the circular mean is arbitrary");
    }
    println!(
        "Circular    {:8.3}° (resultant length {:.3})",
        circular, mean.resultant_length
    );

    Ok(())
}
