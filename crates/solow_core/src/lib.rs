pub mod autodiff;
pub mod chart;
pub mod curves;
pub mod grid;
pub mod params;
pub mod production;
pub mod session;
pub mod snapshot;
pub mod steady_state;
pub mod summary;
/// The `solow_core` crate holds the computational side of the Solow-Swan explorer.
/// Everything is a pure function of an immutable [`params::Parameters`] value;
/// presentation layers only call in and render what comes back.
///
/// Key components:
/// - **Production**: Cobb-Douglas `y = k^alpha`, generic over `Scalar` so it also runs on dual numbers.
/// - **Curves**: output, effective investment, required investment and consumption over a capital grid.
/// - **Steady state**: closed-form equilibrium plus its linear stability via `autodiff`.
/// - **Session**: synchronous recomputation of a full `ModelSnapshot` on every parameter change.
pub mod traits;

pub use curves::{update_curves, CurveSet};
pub use params::{ParameterError, ParameterKind, ParameterSpec, Parameters, PARAMETER_SPECS};
pub use production::produce;
pub use session::Session;
pub use snapshot::ModelSnapshot;
pub use steady_state::{find_steady_state, solve_steady_state, SteadyState, SteadyStateAnalysis};
