//! TOML configuration and validated builders for the library types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::embedding::Embedding;
use crate::error::CircularError;
use crate::naive::{NaiveComparator, NaivePolicy};
use crate::period::Period;
use crate::window::{Interval, QualityThresholds};

/// Runtime configuration, loadable from TOML. Every field has a default, so
/// an empty file yields the 24-hour clock with a morning and an afternoon
/// window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of one cycle.
    pub period: f64,
    /// Where value 0 sits on the circle, in degrees. -90 puts it at the top.
    pub phase_degrees: f64,
    pub naive_policy: NaivePolicy,
    /// Divergence above which naive and circular answers count as different.
    pub divergence_threshold: f64,
    /// Wait difference above which a window comparison is worth reporting.
    pub wait_gap_threshold: f64,
    pub quality: QualityConfig,
    pub windows: Vec<WindowConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub imminent: f64,
    pub short: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        let thresholds = QualityThresholds::<f64>::default();
        Self {
            imminent: thresholds.imminent,
            short: thresholds.short,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            period: 24.0,
            phase_degrees: -90.0,
            naive_policy: NaivePolicy::default(),
            divergence_threshold: 30.0,
            wait_gap_threshold: 2.0,
            quality: QualityConfig::default(),
            windows: vec![
                WindowConfig {
                    name: "Morning".into(),
                    start: 9.0,
                    end: 11.0,
                },
                WindowConfig {
                    name: "Afternoon".into(),
                    start: 14.0,
                    end: 16.0,
                },
            ],
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CircularError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CircularError> {
        Ok(toml::from_str(content)?)
    }

    pub fn period(&self) -> Result<Period<f64>, CircularError> {
        Period::new(self.period).inspect_err(|e| warn!("rejected period: {e}"))
    }

    pub fn embedding(&self) -> Result<Embedding<f64>, CircularError> {
        Ok(Embedding::new(self.period()?).with_phase(self.phase_degrees.to_radians()))
    }

    pub fn comparator(&self) -> Result<NaiveComparator<f64>, CircularError> {
        NaiveComparator::new(self.period()?)
            .with_policy(self.naive_policy)
            .with_threshold(self.divergence_threshold)
            .inspect_err(|e| warn!("rejected divergence_threshold: {e}"))
    }

    pub fn windows(&self) -> Result<Vec<Interval<f64>>, CircularError> {
        let period = self.period()?;
        self.windows
            .iter()
            .map(|w| {
                Interval::named(w.name.clone(), w.start, w.end, period)
                    .inspect_err(|e| warn!(window = %w.name, "rejected window: {e}"))
            })
            .collect()
    }

    /// Validated wait-gap threshold for [`crate::window::compare_windows`].
    pub fn wait_gap_threshold(&self) -> Result<f64, CircularError> {
        check_threshold(self.wait_gap_threshold, "wait_gap_threshold")
    }

    pub fn quality(&self) -> Result<QualityThresholds<f64>, CircularError> {
        let imminent = check_threshold(self.quality.imminent, "quality.imminent")?;
        let short = check_threshold(self.quality.short, "quality.short")?;
        if short < imminent {
            warn!(imminent, short, "quality.short is below quality.imminent");
            return Err(CircularError::InvalidThreshold(short.to_string()));
        }
        Ok(QualityThresholds { imminent, short })
    }
}

fn check_threshold(value: f64, field: &str) -> Result<f64, CircularError> {
    if !value.is_finite() || value < 0.0 {
        warn!(field, value, "rejected threshold");
        return Err(CircularError::InvalidThreshold(value.to_string()));
    }
    Ok(value)
}
