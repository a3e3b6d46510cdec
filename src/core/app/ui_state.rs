/// Presentation-only session state: nothing here affects what the backend sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Rows scrolled up from the newest transcript row; 0 follows the tail.
    pub scroll_from_bottom: u16,
    /// Furthest `scroll_from_bottom` can go, as of the last drawn frame.
    pub max_scroll: u16,
    pub exit_requested: bool,
}

impl UiState {
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(lines)
            .min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn follow_latest(&mut self) {
        self.scroll_from_bottom = 0;
    }

    /// Record the transcript size of the frame being drawn and return the top
    /// row of its viewport.
    pub fn scroll_offset(&mut self, total_rows: u16, viewport_height: u16) -> u16 {
        self.max_scroll = total_rows.saturating_sub(viewport_height);
        self.scroll_from_bottom = self.scroll_from_bottom.min(self.max_scroll);
        self.max_scroll - self.scroll_from_bottom
    }
}
