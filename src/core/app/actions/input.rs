use super::{App, AppAction, AppCommand};

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::DraftInput { input } => {
            app.draft.input(input);
            None
        }
        AppAction::SetDraft { text } => {
            app.draft.set_text(&text);
            None
        }
        AppAction::ScrollUp { lines } => {
            app.ui.scroll_up(lines);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll_down(lines);
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
        _ => unreachable!("non-input action routed to input handler"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_textarea::{Input, Key};

    fn key(ch: char) -> Input {
        Input {
            key: Key::Char(ch),
            ..Default::default()
        }
    }

    #[test]
    fn typed_keys_edit_the_draft() {
        let mut app = App::default();
        for ch in "hi".chars() {
            handle_input_action(&mut app, AppAction::DraftInput { input: key(ch) });
        }
        handle_input_action(
            &mut app,
            AppAction::DraftInput {
                input: Input {
                    key: Key::Backspace,
                    ..Default::default()
                },
            },
        );
        assert_eq!(app.draft.text(), "h");
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = App::default();
        handle_input_action(&mut app, AppAction::Quit);
        assert!(app.ui.exit_requested);
    }
}
