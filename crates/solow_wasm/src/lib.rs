//! WASM bridge exposing the Solow core to a browser presentation layer.
//!
//! The host owns the sliders and the plotting; it hands parameter values in
//! and receives serialized snapshots back. Every call recomputes
//! synchronously inside the calling JS task.

mod functions;
mod session;
mod shared;

pub use functions::*;
pub use session::WasmSolowSession;
