//! Hue gradient from 340° to 40°
//!
//! Walking a colour wheel from magenta-red (340°) to orange (40°) should pass
//! through red (0°). The short way round is 60°.
//!
//! # The Problem with a Naive Approach
//! Interpolating the raw numbers, `(1 - t) * 340 + t * 40`, walks 300° the
//! other way, through blue and green. Each step is 60° instead of 12°.
//!
//! # The Manifold Solution
//! Embedding both hues on the unit circle and moving along the geodesic
//! (`local` to get the signed tangent, `retract` to step along it) keeps every
//! sample on the short arc, equally spaced.

use circa::embedding::{angular_steps, embed, sample_arc, Embedding};
use circa::manifold::{geodesic_samples, LinePoint, Manifold};
use circa::period::Period;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    type T = f64;

    let degrees = Period::<T>::degrees();
    let (start, target) = (340.0, 40.0);
    let steps = 5;

    println!("Manifold interpolation (short arc):");
    let embedding = Embedding::new(degrees);
    let (from, to) = (embed(start, degrees), embed(target, degrees));
    let tangent = from.local(&to);
    for i in 0..=steps {
        let t = i as T / steps as T;
        let point = from.retract(&(tangent * t));
        println!(
            "  t={:.1}: ({:6.2}, {:6.2}) | hue {:6.1}°",
            t,
            point.x(),
            point.y(),
            embedding.unembed(&point)
        );
    }
    let arc = sample_arc(start, target, steps, degrees);
    println!("  steps: {:?}", angular_steps(&arc, degrees));

    println!("\nNaive linear interpolation (long way):");
    let line = geodesic_samples(&LinePoint(start), &LinePoint(target), steps);
    for (i, point) in line.iter().enumerate() {
        println!("  t={:.1}: hue {:6.1}°", i as T / steps as T, point.value());
    }
    let raw: Vec<T> = line.iter().map(LinePoint::value).collect();
    let naive_steps: Vec<T> = raw.windows(2).map(|w| w[1] - w[0]).collect();
    println!("  steps: {:?}", naive_steps);

    println!("\nThe arc moves 12° per step through red; the line moves 60° through cyan.");

    Ok(())
}
