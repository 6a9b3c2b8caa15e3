//! Explorer state: the model session plus slider focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};

use solow_core::{ParameterKind, Session};

use crate::theme::Palette;

/// Shift+arrow moves this many slider steps at once.
const COARSE_STEPS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrevious,
    Adjust(i32),
    Reset,
}

impl Action {
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Right | KeyCode::Char('l') => {
                Some(Action::Adjust(if coarse { COARSE_STEPS } else { 1 }))
            }
            KeyCode::Left | KeyCode::Char('h') => {
                Some(Action::Adjust(if coarse { -COARSE_STEPS } else { -1 }))
            }
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        }
    }
}

pub struct App {
    session: Session,
    selected: usize,
    status: Option<String>,
    should_quit: bool,
    palette: Palette,
}

impl App {
    #[must_use]
    pub fn new(session: Session, palette: Palette) -> Self {
        Self {
            session,
            selected: 0,
            status: None,
            should_quit: false,
            palette,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn selected(&self) -> ParameterKind {
        ParameterKind::ALL[self.selected]
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether the screen needs to be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match Action::from_key(key) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    pub fn apply(&mut self, action: Action) -> bool {
        let count = ParameterKind::ALL.len();
        match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::SelectNext => {
                self.selected = (self.selected + 1) % count;
                true
            }
            Action::SelectPrevious => {
                self.selected = (self.selected + count - 1) % count;
                true
            }
            Action::Adjust(steps) => {
                let kind = self.selected();
                let before = self.session.params().get(kind);
                let result = self.session.nudge(kind, steps).map(|_| ());
                self.finish_update(result);
                self.session.params().get(kind) != before || self.status.is_some()
            }
            Action::Reset => {
                let result = self.session.reset().map(|_| ());
                if result.is_ok() {
                    info!("Parameters reset to defaults");
                }
                self.finish_update(result);
                true
            }
        }
    }

    fn finish_update(&mut self, result: anyhow::Result<()>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "Recompute rejected");
                self.status = Some(format!("{err:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solow_core::Parameters;

    fn app() -> App {
        let session = Session::new(Parameters::default()).expect("defaults are valid");
        App::new(session, Palette::standard())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_adjust_the_selected_parameter() {
        let mut app = app();
        assert_eq!(app.selected(), ParameterKind::Savings);
        assert!(app.handle_key(press(KeyCode::Right)));
        assert_eq!(app.session().params().s, 0.31);
        assert!(app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT)));
        assert_eq!(app.session().params().s, 0.21);
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut app = app();
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected(), ParameterKind::CapitalShare);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected(), ParameterKind::Savings);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.selected(), ParameterKind::PopulationGrowth);
    }

    #[test]
    fn adjusting_at_a_bound_requests_no_redraw() {
        let mut app = app();
        app.apply(Action::SelectPrevious);
        assert!(app.apply(Action::Adjust(1000)));
        assert_eq!(app.session().params().alpha, 0.9);
        assert!(!app.apply(Action::Adjust(1)));
    }

    #[test]
    fn every_change_recomputes_the_steady_state() {
        let mut app = app();
        let before = app.session().snapshot().steady_state.state.k_star;
        app.apply(Action::Adjust(5));
        let after = app.session().snapshot().steady_state.state.k_star;
        assert!(after > before, "raising s should raise k*: {before} -> {after}");
        app.apply(Action::Reset);
        assert_eq!(app.session().params(), Parameters::default());
        assert!(app.status().is_none());
    }

    #[test]
    fn quit_keys_and_release_events() {
        let mut app = app();
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key(release));
        assert!(!app.should_quit());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut app = app();
        assert!(!app.handle_key(press(KeyCode::Char('x'))));
        assert_eq!(app.session().params(), Parameters::default());
    }
}
