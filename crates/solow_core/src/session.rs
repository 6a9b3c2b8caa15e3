//! Reactive recomputation: every parameter change rebuilds the snapshot.

use crate::grid::{CapitalGrid, GridSettings};
use crate::params::{ParameterKind, Parameters};
use crate::snapshot::ModelSnapshot;
use anyhow::{Context, Result};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    grid: CapitalGrid,
    snapshot: ModelSnapshot,
}

impl Session {
    pub fn new(params: Parameters) -> Result<Self> {
        Self::with_grid(params, GridSettings::default())
    }

    pub fn with_grid(params: Parameters, grid: GridSettings) -> Result<Self> {
        let grid = CapitalGrid::new(grid).context("Invalid capital grid.")?;
        let snapshot = ModelSnapshot::compute(params, &grid)?;
        Ok(Self { grid, snapshot })
    }

    pub fn params(&self) -> Parameters {
        self.snapshot.params
    }

    pub fn grid(&self) -> &CapitalGrid {
        &self.grid
    }

    pub fn snapshot(&self) -> &ModelSnapshot {
        &self.snapshot
    }

    /// Sets one parameter (clamped and snapped) and recomputes.
    pub fn set_parameter(&mut self, kind: ParameterKind, value: f64) -> Result<&ModelSnapshot> {
        let params = self.params().with(kind, value)?;
        self.recompute(params)
    }

    /// Replaces all parameters as given. Host-supplied sets go through
    /// [`Parameters::clamped`] first when slider bounds should apply.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<&ModelSnapshot> {
        self.recompute(params)
    }

    pub fn nudge(&mut self, kind: ParameterKind, steps: i32) -> Result<&ModelSnapshot> {
        let params = self.params().nudge(kind, steps);
        self.recompute(params)
    }

    pub fn reset(&mut self) -> Result<&ModelSnapshot> {
        self.recompute(Parameters::default())
    }

    /// On failure the previous snapshot stays in place.
    fn recompute(&mut self, params: Parameters) -> Result<&ModelSnapshot> {
        let snapshot = ModelSnapshot::compute(params, &self.grid)?;
        debug!(
            s = params.s,
            n = params.n,
            d = params.d,
            alpha = params.alpha,
            k_star = snapshot.steady_state.state.k_star,
            "Recomputed Solow diagram"
        );
        self.snapshot = snapshot;
        Ok(&self.snapshot)
    }
}
