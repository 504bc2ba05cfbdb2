/// Marks that get a space inserted after them when text runs on directly.
pub const PUNCTUATION_MARKS: [char; 7] = [',', '.', '!', '?', ':', ';', '-'];

fn is_mark(c: char) -> bool {
    PUNCTUATION_MARKS.contains(&c)
}

/// Insert one space after every punctuation mark that is directly followed by a character that
/// is neither whitespace nor another mark.
///
/// Runs of marks (`"..."`, `"?!"`) stay together and a mark at the very end is left alone.
///
/// ```
/// assert_eq!(typegif::normalize_punctuation("Hi,there"), "Hi, there");
/// assert_eq!(typegif::normalize_punctuation("Wait...what?!"), "Wait... what?!");
/// ```
pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if !is_mark(c) {
            continue;
        }
        if let Some(&next) = chars.peek()
            && !next.is_whitespace()
            && !is_mark(next)
        {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/normalize.rs"]
mod tests;
