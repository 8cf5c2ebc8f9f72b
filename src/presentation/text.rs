use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap measured in terminal columns.
/// Words wider than `width` are broken between characters.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(line_width > 0);
        if line_width + gap + word_width <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += gap + word_width;
            continue;
        }

        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if line_width + char_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += char_width;
        }
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}

/// Column offset that centers `s` in `width`, zero when it does not fit
pub fn center_offset(s: &str, width: usize) -> usize {
    width.saturating_sub(s.width()) / 2
}
