//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::async_ops::FetchCommand;
use super::loader::Loader;
use super::state::{AppState, Mode, Screen};

/// Handle key events, returning an optional fetch command to send
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<FetchCommand> {
    // Handle modal input first
    match state.mode {
        Mode::Alert => return handle_alert_key(state, key),
        Mode::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                state.mode = Mode::Normal;
            }
            return None;
        }
        Mode::Normal => {}
    }

    // Global shortcuts
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            state.should_quit = true;
            return None;
        }
        (_, KeyCode::Char('?')) | (_, KeyCode::F(1)) => {
            state.mode = Mode::Help;
            return None;
        }
        _ => {}
    }

    match state.screen {
        Screen::List => handle_list_key(state, key),
        Screen::Detail { .. } => handle_detail_key(state, key),
    }
}

/// The list screen's blocking error alert: Retry or Cancel.
///
/// Cancel leaves the inline error view (with its own retry hint) behind.
fn handle_alert_key(state: &mut AppState, key: KeyEvent) -> Option<FetchCommand> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => Some(state.refresh_list()),
        KeyCode::Esc | KeyCode::Char('c') => {
            state.dismiss_alert();
            None
        }
        _ => None,
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Option<FetchCommand> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.select_next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.select_prev();
            None
        }
        KeyCode::Char('g') => {
            state.select_first();
            None
        }
        KeyCode::Char('G') => {
            state.select_last();
            None
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            // Navigation needs a settled list
            if state.list.is_loading() {
                return None;
            }
            let item = state.selected_item()?.clone();
            Some(state.open_detail(item))
        }
        KeyCode::Char('r') => {
            // Retry/refresh is inert until the prior fetch settles
            if state.list.is_loading() {
                None
            } else {
                Some(state.refresh_list())
            }
        }
        _ => None,
    }
}

fn handle_detail_key(state: &mut AppState, key: KeyEvent) -> Option<FetchCommand> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            state.go_back();
            None
        }
        KeyCode::Char('r') => {
            if state.detail.as_ref().is_some_and(Loader::is_loading) {
                None
            } else {
                state.retry_detail()
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::async_ops::FetchEvent;
    use crate::config::Config;
    use crate::demo;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new(Config::default());
        let request = state.list.request();
        state.apply(FetchEvent::Items {
            request,
            result: Ok(demo::demo_category()),
        });
        state
    }

    #[test]
    fn retry_keys_are_inert_while_loading() {
        let mut state = AppState::new(Config::default());
        assert!(state.list.is_loading());
        assert!(handle_key(&mut state, key(KeyCode::Char('r'))).is_none());
        assert!(handle_key(&mut state, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn enter_opens_the_selected_item() {
        let mut state = ready_state();
        let cmd = handle_key(&mut state, key(KeyCode::Enter));
        assert!(matches!(cmd, Some(FetchCommand::Text { ref id, .. }) if id == "1"));
        assert!(matches!(state.screen, Screen::Detail { .. }));
    }

    #[test]
    fn alert_enter_retries_and_esc_dismisses() {
        let mut state = AppState::new(Config::default());
        let request = state.list.request();
        state.apply(FetchEvent::Items {
            request,
            result: Err("boom".to_string()),
        });
        assert_eq!(state.mode, Mode::Alert);

        // Cancel drops back to the inline error view
        assert!(handle_key(&mut state, key(KeyCode::Esc)).is_none());
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.list.error_message().is_some());

        // Inline retry still works after cancelling
        let cmd = handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(matches!(cmd, Some(FetchCommand::Items { .. })));
        assert!(state.list.is_loading());
    }

    #[test]
    fn escape_navigates_back_from_detail() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(handle_key(&mut state, key(KeyCode::Esc)).is_none());
        assert!(matches!(state.screen, Screen::List));
        assert!(state.detail.is_none());
    }

    #[test]
    fn q_quits() {
        let mut state = ready_state();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);
    }
}
