use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::{Input, Key};

use crate::core::app::AppAction;

const PAGE_LINES: u16 = 10;

/// Translate one terminal key event into the action it requests.
///
/// Keys without a binding are handed to the draft editor.
pub fn map_key_event(key: KeyEvent) -> Option<AppAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let newline = key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => AppAction::Quit,
        KeyCode::Esc => AppAction::Quit,
        KeyCode::Char('s') if ctrl => AppAction::TriggerSync,
        KeyCode::Enter if newline => AppAction::DraftInput {
            input: Input {
                key: Key::Enter,
                ..Default::default()
            },
        },
        KeyCode::Enter => AppAction::SubmitDraft,
        KeyCode::PageUp => AppAction::ScrollUp { lines: PAGE_LINES },
        KeyCode::PageDown => AppAction::ScrollDown { lines: PAGE_LINES },
        _ => AppAction::DraftInput {
            input: Input::from(key),
        },
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_keys_map_to_session_actions() {
        assert!(matches!(
            map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::Quit)
        ));
        assert!(matches!(
            map_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AppAction::Quit)
        ));
        assert!(matches!(
            map_key_event(press(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(AppAction::TriggerSync)
        ));
        assert!(matches!(
            map_key_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(AppAction::SubmitDraft)
        ));
        assert!(matches!(
            map_key_event(press(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(AppAction::ScrollUp { lines: PAGE_LINES })
        ));
    }

    #[test]
    fn alt_enter_inserts_newline_into_draft() {
        match map_key_event(press(KeyCode::Enter, KeyModifiers::ALT)) {
            Some(AppAction::DraftInput { input }) => assert_eq!(input.key, Key::Enter),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn plain_characters_edit_the_draft() {
        match map_key_event(press(KeyCode::Char('s'), KeyModifiers::NONE)) {
            Some(AppAction::DraftInput { input }) => assert_eq!(input.key, Key::Char('s')),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = press(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(map_key_event(key).is_none());
    }
}
