//! Word wrapping for the transcript pane.
//!
//! The transcript is wrapped here and rendered without ratatui's `Wrap`, so the
//! row count used for scrolling is exactly the number of rows drawn.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Break one logical line into rows of at most `width` display columns.
///
/// Breaks at spaces where possible; words wider than a row are split by
/// character. Always returns at least one row.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split(' ') {
        let word_width = word.width();
        let separator = usize::from(!current.is_empty());

        if current_width + separator + word_width <= width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    rows.push(current);
    rows
}
