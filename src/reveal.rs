//! Character-by-character reveal of wrapped lines, split into pages.

/// One snapshot of partially typed text. Each state becomes exactly one output frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Blank page: opaque background, no text.
    Background {
        /// 0-based page index.
        page: usize,
    },
    /// Prefix of the current line typed so far.
    Typed {
        /// 0-based page index.
        page: usize,
        /// Vertical line slot within the page, `0..max_lines`.
        slot: usize,
        /// Line prefix up to and including the newest character.
        text: String,
    },
}

impl RenderState {
    /// Page the state belongs to.
    pub fn page(&self) -> usize {
        match self {
            Self::Background { page } | Self::Typed { page, .. } => *page,
        }
    }

    /// `true` for blank page states.
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    InLine,
    PageBreak,
    Done,
}

/// Lazy iterator over the [`RenderState`]s for a set of wrapped lines.
///
/// The sequence opens with a blank page. Each character of each line then yields the line's
/// prefix through that character. A new blank page is inserted before any line that would land
/// on slot `max_lines`; there is never a trailing blank page.
#[derive(Clone, Debug)]
pub struct RevealSequence<'a> {
    lines: &'a [String],
    max_lines: usize,
    phase: Phase,
    page: usize,
    slot: usize,
    line: usize,
    // Byte offset of the end of the current prefix.
    cursor: usize,
}

impl<'a> RevealSequence<'a> {
    /// Sequence over `lines` with at most `max_lines` lines per page (clamped to at least 1).
    pub fn new(lines: &'a [String], max_lines: usize) -> Self {
        Self {
            lines,
            max_lines: max_lines.max(1),
            phase: Phase::Idle,
            page: 0,
            slot: 0,
            line: 0,
            cursor: 0,
        }
    }

    /// Total number of states the full sequence yields.
    pub fn frame_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        1 + chars + self.page_count().saturating_sub(1)
    }

    /// Number of pages the lines occupy (at least 1; the opening blank page always exists).
    pub fn page_count(&self) -> usize {
        self.lines.len().saturating_sub(1) / self.max_lines + 1
    }

    fn finish_line(&mut self) {
        self.line += 1;
        self.slot += 1;
        self.cursor = 0;
        self.phase = if self.line >= self.lines.len() {
            Phase::Done
        } else if self.slot >= self.max_lines {
            Phase::PageBreak
        } else {
            Phase::InLine
        };
    }
}

impl Iterator for RevealSequence<'_> {
    type Item = RenderState;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => None,
            Phase::Idle => {
                self.phase = if self.lines.is_empty() {
                    Phase::Done
                } else {
                    Phase::InLine
                };
                Some(RenderState::Background { page: 0 })
            }
            Phase::PageBreak => {
                self.page += 1;
                self.slot = 0;
                self.phase = Phase::InLine;
                Some(RenderState::Background { page: self.page })
            }
            Phase::InLine => {
                let lines = self.lines;
                let line = lines[self.line].as_str();
                let Some(c) = line[self.cursor..].chars().next() else {
                    // Empty line: occupies a slot, yields nothing.
                    self.finish_line();
                    return self.next();
                };
                self.cursor += c.len_utf8();
                let state = RenderState::Typed {
                    page: self.page,
                    slot: self.slot,
                    text: line[..self.cursor].to_string(),
                };
                if self.cursor == line.len() {
                    self.finish_line();
                }
                Some(state)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/reveal.rs"]
mod tests;
