//! Blending two hues on a colour wheel.
//!
//! `cargo run -p demos --example hue_wheel -- --a 340 --b 40`

use anyhow::Result;
use circa::embedding::{circular_mean, nearest_index, sample_arc, ArcSweep};
use circa::naive::NaiveComparator;
use circa::period::Period;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hue_wheel")]
#[command(about = "Naive vs circular midpoint and gradient between two hues")]
struct Args {
    /// First hue in degrees
    #[arg(long, default_value = "340.0", allow_hyphen_values = true)]
    a: f64,

    /// Second hue in degrees
    #[arg(long, default_value = "40.0", allow_hyphen_values = true)]
    b: f64,

    /// Gradient steps
    #[arg(long, default_value = "6")]
    steps: usize,

    /// Optional click position on the wheel, in degrees
    #[arg(long, allow_hyphen_values = true)]
    click: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circa=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let degrees = Period::degrees();
    let comparator = NaiveComparator::new(degrees).with_threshold(30.0)?;

    let midpoint = comparator.compare_midpoint(args.a, args.b);
    let mean = circular_mean(&[args.a, args.b], degrees)?;
    info!(resultant_length = mean.resultant_length, "circular mean");

    println!("Hues        {:.1}° and {:.1}°", args.a, args.b);
    println!("Naive mid   {:.1}°", midpoint.naive);
    println!("Circular    {:.1}°", midpoint.circular);
    if mean.degenerate {
        println!("            (opposite hues, no preferred direction)");
    }
    if midpoint.differs {
        println!(
            "            the two blends are {:.1}° apart on the wheel",
            midpoint.divergence
        );
    }

    let sweep = ArcSweep::between(args.a, args.b, degrees);
    println!(
        "\nArc         {:.1}° {} (large arc: {})",
        sweep.span,
        if sweep.positive { "clockwise" } else { "counter-clockwise" },
        sweep.large_arc
    );

    let arc = sample_arc(args.a, args.b, args.steps, degrees);
    let line = comparator.sample_line(args.a, args.b, args.steps);
    println!("Gradient along the arc:  {}", render(&arc));
    println!("Gradient along the line: {}", render(&line));

    if let Some(click) = args.click {
        let handle = nearest_index(click, &[args.a, args.b], degrees)?;
        println!("\nClick at {:.1}° grabs handle {}", click, ["a", "b"][handle]);
    }

    Ok(())
}

fn render(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.0}°", v))
        .collect::<Vec<_>>()
        .join(" → ")
}
