use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::app::App;
use crate::core::message::{Message, Role};
use crate::core::view::{BadgeVariant, View};
use crate::ui::theme;
use crate::ui::wrap::wrap_line;

pub const SIDEBAR_TITLE: &str = "AI Notes Assistant";
pub const TIPS: [&str; 2] = [
    "Drop new notes into the /notes folder.",
    "Ask a question and the assistant will search your notes.",
];

const SIDEBAR_WIDTH: u16 = 34;
const MAX_INPUT_LINES: u16 = 5;

pub fn ui(f: &mut Frame, app: &mut App) {
    let view = app.view();
    let [sidebar_area, chat_area] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(f.area());

    render_sidebar(f, &view, sidebar_area);
    render_chat(f, app, &view, chat_area);
}

fn render_sidebar(f: &mut Frame, view: &View, area: Rect) {
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {SIDEBAR_TITLE} "), theme::title_style()));
    let inner = frame_block.inner(area);
    f.render_widget(frame_block, area);

    let [status_area, model_area, notes_area, tips_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .areas(inner);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", badge_label(view.badge)), theme::badge_style(view.badge)),
        Span::raw(" "),
        Span::raw(view.status_message.as_str()),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(status, status_area);

    let model = Paragraph::new(view.model_identity.as_str())
        .block(Block::default().borders(Borders::ALL).title("Active Model"))
        .wrap(Wrap { trim: true });
    f.render_widget(model, model_area);

    let sync_style = if view.sync_enabled {
        theme::title_style()
    } else {
        theme::muted_style()
    };
    let mut note_lines = vec![
        Line::from(vec![
            Span::styled(view.sync_label, sync_style),
            Span::styled(" (Ctrl+S)", theme::muted_style()),
        ]),
        Line::from(""),
    ];
    if let Some(banner) = &view.sync_banner {
        note_lines.push(Line::from(Span::styled(
            banner.message.as_str(),
            theme::banner_style(banner.kind),
        )));
    }
    let notes = Paragraph::new(note_lines)
        .block(Block::default().borders(Borders::ALL).title("Note Management"))
        .wrap(Wrap { trim: true });
    f.render_widget(notes, notes_area);

    let tip_lines: Vec<Line> = TIPS
        .iter()
        .map(|tip| Line::from(Span::styled(format!("• {tip}"), theme::muted_style())))
        .collect();
    let tips = Paragraph::new(tip_lines)
        .block(Block::default().title("Tips"))
        .wrap(Wrap { trim: true });
    f.render_widget(tips, tips_area);
}

fn badge_label(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Nominal => "READY",
        BadgeVariant::Warning => "WAIT",
        BadgeVariant::Error => "DOWN",
    }
}

fn render_chat(f: &mut Frame, app: &mut App, view: &View, area: Rect) {
    let input_lines = (app.draft.textarea().lines().len() as u16).clamp(1, MAX_INPUT_LINES);
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(input_lines + 2)]).areas(area);

    let transcript_block = Block::default().borders(Borders::ALL).title("Chat");
    let inner = transcript_block.inner(transcript_area);
    let lines = build_transcript_lines(&view.transcript, inner.width);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let offset = app.ui.scroll_offset(total, inner.height);

    let transcript = Paragraph::new(lines)
        .block(transcript_block)
        .scroll((offset, 0));
    f.render_widget(transcript, transcript_area);

    let input_title = if app.chat_state.is_pending() {
        "Waiting for a reply... (Ctrl+C to quit)"
    } else {
        "Ask about your notes (Enter to send, Alt+Enter for new line, Ctrl+C to quit)"
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(input_title)
        .border_style(theme::input_border_style(view.can_submit));
    let input_inner = input_block.inner(input_area);
    f.render_widget(input_block, input_area);
    f.render_widget(app.draft.textarea(), input_inner);
}

/// Transcript rows already wrapped to `width`, one `Line` per drawn row.
pub fn build_transcript_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines = Vec::new();
    for message in messages {
        let speaker = match message.role {
            Role::User => "You",
            Role::Assistant => "Assistant",
        };
        lines.push(Line::from(Span::styled(
            speaker,
            theme::speaker_style(message.role),
        )));
        for content_line in message.content.lines() {
            for row in wrap_line(content_line, width) {
                lines.push(Line::from(Span::styled(
                    row,
                    theme::body_style(message.role),
                )));
            }
        }
        lines.push(Line::from(""));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_action, AppAction};
    use crate::core::view::{SYNC_PENDING_LABEL, THINKING_PLACEHOLDER};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).expect("terminal");
        terminal.draw(|f| ui(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn initial_frame_shows_sidebar_and_greeting() {
        let mut app = App::default();
        let screen = render(&mut app);
        assert!(screen.contains(SIDEBAR_TITLE));
        assert!(screen.contains("Active Model"));
        assert!(screen.contains("loading..."));
        assert!(screen.contains("Sync & Re-index Notes"));
        assert!(screen.contains("Hi! Ask a question"));
        assert!(screen.contains("WAIT"));
    }

    #[test]
    fn pending_requests_show_placeholder_and_sync_label() {
        let mut app = App::default();
        app.draft.set_text("trains?");
        apply_action(&mut app, AppAction::SubmitDraft);
        apply_action(&mut app, AppAction::TriggerSync);

        let screen = render(&mut app);
        assert!(screen.contains(THINKING_PLACEHOLDER));
        assert!(screen.contains(SYNC_PENDING_LABEL));
        assert!(screen.contains("trains?"));
    }

    #[test]
    fn tail_of_long_reply_is_visible_when_following() {
        let mut app = App::default();
        let reply = format!("{}FINALWORD", "abcdefghijklmno ".repeat(120));
        app.append_message(Message::assistant(reply));

        let screen = render(&mut app);
        assert!(screen.contains("FINALWORD"));
        assert_eq!(app.ui.scroll_from_bottom, 0);
        assert!(app.ui.max_scroll > 0);
    }

    #[test]
    fn paging_back_down_after_overscroll_reaches_tail() {
        let mut app = App::default();
        let reply = format!("{}FINALWORD", "abcdefghijklmno ".repeat(120));
        app.append_message(Message::assistant(reply));
        render(&mut app);

        for _ in 0..20 {
            apply_action(&mut app, AppAction::ScrollUp { lines: 10 });
        }
        assert_eq!(app.ui.scroll_from_bottom, app.ui.max_scroll);
        let top = render(&mut app);
        assert!(top.contains("Hi! Ask a question"));
        assert!(!top.contains("FINALWORD"));

        let pages = app.ui.max_scroll.div_ceil(10);
        for _ in 0..pages {
            apply_action(&mut app, AppAction::ScrollDown { lines: 10 });
        }
        assert!(render(&mut app).contains("FINALWORD"));
    }

    #[test]
    fn transcript_lines_label_each_speaker() {
        let messages = vec![Message::user("hi"), Message::assistant("one\ntwo")];
        let lines = build_transcript_lines(&messages, 40);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].spans[0].content, "You");
        assert_eq!(lines[3].spans[0].content, "Assistant");
    }
}
