//! Terminal presentation layer for the Solow-Swan explorer.
//!
//! [`app::App`] owns a core `Session`; [`input`] turns key presses into
//! parameter changes and [`ui::draw`] renders the latest snapshot.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{Action, App};
pub use input::pump_events;
pub use theme::Palette;
pub use ui::draw;
