use ratatui::style::{Color, Modifier, Style};

use crate::core::message::Role;
use crate::core::view::{BadgeVariant, SyncBannerKind};

pub fn badge_style(variant: BadgeVariant) -> Style {
    let color = match variant {
        BadgeVariant::Nominal => Color::Green,
        BadgeVariant::Warning => Color::Yellow,
        BadgeVariant::Error => Color::Red,
    };
    Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
}

pub fn banner_style(kind: SyncBannerKind) -> Style {
    match kind {
        SyncBannerKind::Success => Style::default().fg(Color::Green),
        SyncBannerKind::Error => Style::default().fg(Color::Red),
    }
}

pub fn speaker_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Assistant => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn body_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::White),
    }
}

pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Border color of the input box: highlighted only when Enter would send.
pub fn input_border_style(can_submit: bool) -> Style {
    if can_submit {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_differ_per_variant() {
        let nominal = badge_style(BadgeVariant::Nominal).bg;
        let warning = badge_style(BadgeVariant::Warning).bg;
        let error = badge_style(BadgeVariant::Error).bg;
        assert_eq!(nominal, Some(Color::Green));
        assert_eq!(warning, Some(Color::Yellow));
        assert_eq!(error, Some(Color::Red));
    }
}
