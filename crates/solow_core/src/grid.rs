use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_K_MIN: f64 = 0.005;
pub const DEFAULT_K_MAX: f64 = 100.0;
pub const DEFAULT_SAMPLES: usize = 200;

/// Bounds and resolution of the capital axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_K_MIN,
            max: DEFAULT_K_MAX,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Evenly spaced capital-per-worker values, both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapitalGrid {
    settings: GridSettings,
    values: Vec<f64>,
}

impl Default for CapitalGrid {
    fn default() -> Self {
        let settings = GridSettings::default();
        Self {
            settings,
            values: linspace(settings.min, settings.max, settings.samples),
        }
    }
}

impl CapitalGrid {
    pub fn new(settings: GridSettings) -> Result<Self> {
        if !settings.min.is_finite() || !settings.max.is_finite() || settings.max <= settings.min {
            bail!("Capital grid range must be finite with max > min.");
        }
        if settings.min < 0.0 {
            bail!("Capital grid must not include negative capital.");
        }
        if settings.samples < 2 {
            bail!("Capital grid needs at least 2 samples.");
        }
        Ok(Self {
            settings,
            values: linspace(settings.min, settings.max, settings.samples),
        })
    }

    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bounds(&self) -> [f64; 2] {
        [self.settings.min, self.settings.max]
    }
}

fn linspace(min: f64, max: f64, samples: usize) -> Vec<f64> {
    let denom = (samples - 1) as f64;
    let step = (max - min) / denom;
    let mut values: Vec<f64> = (0..samples).map(|i| min + step * i as f64).collect();
    // Pin the last sample so rounding never overshoots the requested range.
    if let Some(last) = values.last_mut() {
        *last = max;
    }
    values
}
