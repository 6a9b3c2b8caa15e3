//! Input handling for the explorer.

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;
use tracing::trace;

use crate::app::App;

/// Bounded so a held key never starves rendering.
const MAX_EVENTS_PER_FRAME: usize = 64;

/// Waits up to `timeout` for input, then drains whatever else is queued.
/// Returns whether anything changed that needs a redraw.
pub fn pump_events(app: &mut App, timeout: Duration) -> Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }

    let mut dirty = false;
    for _ in 0..MAX_EVENTS_PER_FRAME {
        dirty |= dispatch(app, event::read()?);
        if app.should_quit() || !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(dirty)
}

fn dispatch(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            trace!(?key, "key event");
            app.handle_key(key)
        }
        Event::Resize(..) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Palette;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use solow_core::{Parameters, Session};

    fn app() -> App {
        App::new(
            Session::new(Parameters::default()).expect("defaults are valid"),
            Palette::standard(),
        )
    }

    #[test]
    fn resize_forces_a_redraw() {
        let mut app = app();
        assert!(dispatch(&mut app, Event::Resize(100, 40)));
        assert!(!dispatch(&mut app, Event::FocusGained));
    }

    #[test]
    fn key_events_reach_the_app() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert!(dispatch(&mut app, Event::Key(key)));
        assert_eq!(app.session().params().s, 0.31);
    }
}
