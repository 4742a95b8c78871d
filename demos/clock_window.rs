//! Which photo window is closest to an arrival time?
//!
//! Works out the local arrival hour of a trip, then asks both window
//! policies which window is nearest. Just before midnight the naive
//! forward search waits for tomorrow morning while the clock face says the
//! afternoon window is closer.
//!
//! `cargo run -p demos --example clock_window -- --departure 20 --duration 3.5`

use std::path::PathBuf;

use anyhow::{Context, Result};
use circa::clock::{arrival_hour, clock_distance, ClockTime};
use circa::config::Config;
use circa::window::{compare_windows, WaitQuality};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "clock_window")]
#[command(about = "Compare naive and circular window selection for an arrival time")]
struct Args {
    /// Departure hour (local time at origin)
    #[arg(long, default_value = "20.0")]
    departure: f64,

    /// Trip duration in hours
    #[arg(long, default_value = "3.5")]
    duration: f64,

    /// Destination offset minus origin offset, in hours
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    timezones: f64,

    /// TOML config with windows and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn clock(hours: f64) -> String {
    ClockTime::from_hours(hours).map_or_else(|| "--:--".into(), |t| t.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circa=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    info!(windows = config.windows.len(), period = config.period, "loaded config");

    let period = config.period()?;
    let windows = config.windows()?;
    let quality = config.quality()?;

    let arrival = arrival_hour(args.departure, args.duration, args.timezones);
    let naive_arrival = args.departure + args.duration + args.timezones;
    println!("Departure   {}", clock(args.departure));
    println!(
        "Arrival     {} (naive sum {:.2} h)",
        clock(arrival),
        naive_arrival
    );
    println!(
        "Clock gap   {:.2} h between departure and arrival readings",
        clock_distance(args.departure, arrival)
    );

    let cmp = compare_windows(arrival, &windows, period, config.wait_gap_threshold()?)?;
    let label = |i: usize| windows[i].name().unwrap_or("window").to_string();

    println!(
        "\nCircular    {:<10} wait {:.2} h",
        label(cmp.circular.index),
        cmp.circular.distance
    );
    println!(
        "Naive       {:<10} wait {:.2} h",
        label(cmp.naive.index),
        cmp.naive.distance
    );

    let rating = WaitQuality::assess(arrival, &windows, cmp.circular.distance, quality);
    println!("Quality     {:?}", rating);

    if cmp.meaningful {
        println!(
            "\nThe naive search waits {:.2} h longer than it needs to.",
            cmp.wait_gap
        );
    } else {
        println!("\nBoth methods agree here.");
    }

    Ok(())
}
