//! Circular quantities in Rust
//!
//! Clock hours, compass bearings, hues and longitudes live on a cycle. This
//! crate embeds them on the unit circle to get distances, deltas, means and
//! interpolations that respect the wraparound, and keeps the naive linear
//! versions next to them for contrast.

pub mod clock;
pub mod config;
pub mod embedding;
pub mod error;
pub mod manifold;
pub(crate) mod math;
pub mod naive;
pub mod period;
pub mod window;

pub use embedding::{
    circular_distance, circular_mean, embed, shortest_midpoint, shortest_signed_delta,
    CircularMean, Embedding,
};
pub use error::CircularError;
pub use naive::{NaiveComparator, NaivePolicy};
pub use period::{CyclicValue, Period};
pub use window::{Interval, WaitQuality};
