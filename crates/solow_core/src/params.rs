//! Model parameters and the ranges the presentation layers expose for them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("parameter {name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("parameter {name} = {value} is outside its domain {domain}")]
    OutOfDomain {
        name: &'static str,
        value: f64,
        domain: &'static str,
    },
    #[error("break-even investment rate n + d must be positive (n = {n}, d = {d})")]
    DegenerateBreakEven { n: f64, d: f64 },
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Savings,
    PopulationGrowth,
    Depreciation,
    CapitalShare,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Savings,
        ParameterKind::PopulationGrowth,
        ParameterKind::Depreciation,
        ParameterKind::CapitalShare,
    ];

    /// Short name used by the bridges and in the summary text.
    pub fn name(self) -> &'static str {
        match self {
            ParameterKind::Savings => "s",
            ParameterKind::PopulationGrowth => "n",
            ParameterKind::Depreciation => "d",
            ParameterKind::CapitalShare => "alpha",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ParameterError> {
        match name.trim().to_lowercase().as_str() {
            "s" => Ok(ParameterKind::Savings),
            "n" => Ok(ParameterKind::PopulationGrowth),
            "d" => Ok(ParameterKind::Depreciation),
            "alpha" | "α" => Ok(ParameterKind::CapitalShare),
            _ => Err(ParameterError::UnknownParameter(name.to_string())),
        }
    }

    pub fn spec(self) -> &'static ParameterSpec {
        match self {
            ParameterKind::Savings => &PARAMETER_SPECS[0],
            ParameterKind::PopulationGrowth => &PARAMETER_SPECS[1],
            ParameterKind::Depreciation => &PARAMETER_SPECS[2],
            ParameterKind::CapitalShare => &PARAMETER_SPECS[3],
        }
    }
}

/// Slider affordances for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub kind: ParameterKind,
    pub label: &'static str,
    pub symbol: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places used when displaying the value.
    pub precision: usize,
}

pub const PARAMETER_SPECS: [ParameterSpec; 4] = [
    ParameterSpec {
        kind: ParameterKind::Savings,
        label: "Taxa de Poupança (s)",
        symbol: "s",
        min: 0.01,
        max: 0.8,
        step: 0.01,
        default: 0.3,
        precision: 2,
    },
    ParameterSpec {
        kind: ParameterKind::PopulationGrowth,
        label: "Taxa de Crescimento Populacional (n)",
        symbol: "n",
        min: 0.001,
        max: 0.1,
        step: 0.001,
        default: 0.02,
        precision: 3,
    },
    ParameterSpec {
        kind: ParameterKind::Depreciation,
        label: "Taxa de Depreciação (d)",
        symbol: "d",
        min: 0.001,
        max: 0.1,
        step: 0.001,
        default: 0.02,
        precision: 3,
    },
    ParameterSpec {
        kind: ParameterKind::CapitalShare,
        label: "Participação do Capital (α)",
        symbol: "α",
        min: 0.1,
        max: 0.9,
        step: 0.01,
        default: 0.3,
        precision: 2,
    },
];

impl ParameterSpec {
    /// Clamps `value` into `[min, max]` and rounds it onto the step grid.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let scale = 10f64.powi(self.precision as i32);
        let snapped = ((self.min + steps * self.step) * scale).round() / scale;
        snapped.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of `value` inside the range, in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }
}

/// One immutable snapshot of the four model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Savings rate.
    pub s: f64,
    /// Population growth rate.
    pub n: f64,
    /// Depreciation rate.
    pub d: f64,
    /// Capital share of output.
    pub alpha: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            s: ParameterKind::Savings.spec().default,
            n: ParameterKind::PopulationGrowth.spec().default,
            d: ParameterKind::Depreciation.spec().default,
            alpha: ParameterKind::CapitalShare.spec().default,
        }
    }
}

impl Parameters {
    pub fn new(s: f64, n: f64, d: f64, alpha: f64) -> Self {
        Self { s, n, d, alpha }
    }

    pub fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Savings => self.s,
            ParameterKind::PopulationGrowth => self.n,
            ParameterKind::Depreciation => self.d,
            ParameterKind::CapitalShare => self.alpha,
        }
    }

    fn slot(&mut self, kind: ParameterKind) -> &mut f64 {
        match kind {
            ParameterKind::Savings => &mut self.s,
            ParameterKind::PopulationGrowth => &mut self.n,
            ParameterKind::Depreciation => &mut self.d,
            ParameterKind::CapitalShare => &mut self.alpha,
        }
    }

    /// Returns a copy with `kind` set to `value`, clamped to the slider range
    /// and snapped to its step.
    pub fn with(mut self, kind: ParameterKind, value: f64) -> Result<Self, ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite {
                name: kind.name(),
                value,
            });
        }
        let spec = kind.spec();
        let applied = spec.snap(value);
        if !spec.contains(value) {
            warn!(
                parameter = kind.name(),
                requested = value,
                applied,
                "Parameter clamped to slider range"
            );
        }
        *self.slot(kind) = applied;
        Ok(self)
    }

    /// Moves `kind` by a whole number of slider steps.
    pub fn nudge(self, kind: ParameterKind, steps: i32) -> Self {
        let spec = kind.spec();
        let target = self.get(kind) + f64::from(steps) * spec.step;
        let mut next = self;
        *next.slot(kind) = spec.snap(target);
        next
    }

    /// Applies [`Parameters::with`] to every field.
    pub fn clamped(self) -> Result<Self, ParameterError> {
        ParameterKind::ALL
            .iter()
            .try_fold(self, |acc, &kind| acc.with(kind, self.get(kind)))
    }

    /// Investment per unit of capital needed to keep `k` constant.
    pub fn break_even_rate(&self) -> f64 {
        self.n + self.d
    }

    /// Checks the invariants the closed-form steady state relies on.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for kind in ParameterKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() {
                return Err(ParameterError::NotFinite {
                    name: kind.name(),
                    value,
                });
            }
        }
        if self.s <= 0.0 || self.s >= 1.0 {
            return Err(ParameterError::OutOfDomain {
                name: "s",
                value: self.s,
                domain: "(0, 1)",
            });
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(ParameterError::OutOfDomain {
                name: "alpha",
                value: self.alpha,
                domain: "(0, 1)",
            });
        }
        if self.n < 0.0 {
            return Err(ParameterError::OutOfDomain {
                name: "n",
                value: self.n,
                domain: "[0, inf)",
            });
        }
        if self.d < 0.0 {
            return Err(ParameterError::OutOfDomain {
                name: "d",
                value: self.d,
                domain: "[0, inf)",
            });
        }
        if self.break_even_rate() <= 0.0 {
            return Err(ParameterError::DegenerateBreakEven {
                n: self.n,
                d: self.d,
            });
        }
        Ok(())
    }
}
