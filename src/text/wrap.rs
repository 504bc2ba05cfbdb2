use crate::text::face::TextFace;

/// Result of splitting text into display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedText {
    /// Lines in display order. Every line but the last keeps its trailing delimiter space.
    pub lines: Vec<String>,
    /// Characters across all lines; equals the character count of the wrapped text.
    pub char_count: usize,
}

impl WrappedText {
    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// `true` when there is nothing to reveal.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Greedily pack space-separated words into lines no wider than `width_budget`.
///
/// A word's candidate width is the line so far plus the word, plus one space for its trailing
/// delimiter. When that exceeds the budget the current line is closed and the word opens the
/// next one. A word that alone exceeds the budget becomes its own overflowing line; words are
/// never split. Repeated spaces survive as empty words so no character is lost.
pub fn wrap_lines(face: &mut dyn TextFace, text: &str, width_budget: f32) -> WrappedText {
    let mut out = WrappedText::default();
    if text.is_empty() {
        return out;
    }

    let space_w = face.space_width();
    let mut line = String::new();
    for word in text.split(' ') {
        let candidate = format!("{line}{word}");
        let candidate_w = face.measure(&candidate) + space_w;
        if candidate_w > width_budget && !line.is_empty() {
            out.char_count += line.chars().count();
            out.lines.push(std::mem::take(&mut line));
        }
        line.push_str(word);
        line.push(' ');
    }

    // The last word's delimiter was never part of the text.
    line.pop();
    if !line.is_empty() {
        out.char_count += line.chars().count();
        out.lines.push(line);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
