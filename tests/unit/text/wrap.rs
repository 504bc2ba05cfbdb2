use super::*;
use crate::test_support::BlockFace;

fn wrap(text: &str, chars_per_line: usize) -> WrappedText {
    let mut face = BlockFace::new(10.0);
    wrap_lines(&mut face, text, (chars_per_line * 10) as f32)
}

#[test]
fn breaks_at_five_characters() {
    let w = wrap("This is a test line", 5);
    assert_eq!(w.lines, vec!["This ", "is a ", "test ", "line"]);
    assert_eq!(w.char_count, 19);
    assert_eq!(w.line_count(), 4);
}

#[test]
fn short_text_is_one_line() {
    let w = wrap("Hello", 40);
    assert_eq!(w.lines, vec!["Hello"]);
    assert_eq!(w.char_count, 5);
}

#[test]
fn empty_text_has_no_lines() {
    let w = wrap("", 10);
    assert!(w.is_empty());
    assert_eq!(w.char_count, 0);
}

#[test]
fn overflowing_word_gets_its_own_line() {
    let w = wrap("a supercalifragilistic b", 5);
    assert_eq!(w.lines, vec!["a ", "supercalifragilistic ", "b"]);
}

#[test]
fn overflowing_first_word_does_not_emit_empty_line() {
    let w = wrap("enormous x", 3);
    assert_eq!(w.lines, vec!["enormous ", "x"]);
}

#[test]
fn repeated_spaces_are_preserved() {
    let text = "ab  cd";
    let w = wrap(text, 40);
    assert_eq!(w.lines, vec!["ab  cd"]);
    assert_eq!(w.char_count, text.chars().count());
}

#[test]
fn trailing_space_is_kept() {
    let w = wrap("ab ", 40);
    assert_eq!(w.lines, vec!["ab "]);
    assert_eq!(w.char_count, 3);
}

#[test]
fn lines_fit_budget_unless_single_word() {
    let text = "the quick brown fox jumps over the lazy dog and keeps running far away";
    for chars in 4..20 {
        let budget = (chars * 10) as f32;
        let w = wrap(text, chars);
        let mut face = BlockFace::new(10.0);
        for line in &w.lines {
            let width = face.measure(line.trim_end()) + face.space_width();
            let single_word = !line.trim_end().contains(' ');
            assert!(
                width <= budget || single_word,
                "line {line:?} is {width} wide for budget {budget}"
            );
        }
        assert_eq!(w.lines.concat(), text);
        assert_eq!(w.char_count, text.chars().count());
    }
}

#[test]
fn counts_characters_not_bytes() {
    let w = wrap("héllo wörld", 40);
    assert_eq!(w.char_count, 11);
}
