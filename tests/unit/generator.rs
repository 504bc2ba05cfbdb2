use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::test_support::BlockFace;

fn typer(chars_per_line: u16) -> Typer<BlockFace> {
    let cfg = TyperConfig {
        font_size: 10,
        frame_width: chars_per_line * 10,
        frame_height: 500,
        ..TyperConfig::default()
    };
    Typer::with_face(BlockFace::new(10.0), cfg).unwrap()
}

#[test]
fn wraps_example_sentence() {
    let mut t = typer(5);
    let w = t.wrap("This is a test line");
    assert_eq!(w.lines, vec!["This ", "is a ", "test ", "line"]);
    assert_eq!(w.char_count, 19);
}

#[test]
fn normalizes_before_wrapping() {
    let mut t = typer(40);
    assert_eq!(t.wrap("Hi,there").lines, vec!["Hi, there"]);

    t.set_normalize_punctuation(false);
    assert_eq!(t.wrap("Hi,there").lines, vec!["Hi,there"]);
}

#[test]
fn frame_count_is_background_plus_one_per_char() {
    let mut t = typer(5);
    t.set_max_lines(10).unwrap();
    let anim = t.generate("This is a test line").unwrap();
    assert_eq!(anim.len(), 1 + 19);
    assert!(anim.frames().iter().all(|f| f.delay == 30));
}

#[test]
fn canvas_height_tracks_visible_lines() {
    let mut t = typer(5);
    t.set_max_lines(2).unwrap();
    let anim = t.generate("This is a test line").unwrap();
    assert_eq!(anim.canvas(), Canvas::new(50, 2 * 10 + 8).unwrap());
    // Two pages: two blank frames.
    let white = anim.palette().index_of(Rgba8Premul::WHITE);
    let blanks = anim
        .frames()
        .iter()
        .filter(|f| f.frame.indices.iter().all(|&i| i == white))
        .count();
    assert_eq!(blanks, 2);
    assert_eq!(anim.len(), 2 + 19);
}

#[test]
fn rejected_setters_keep_previous_values() {
    let mut t = typer(5);
    assert!(t.set_delay(0).is_err());
    assert_eq!(t.config().delay, 30);
    assert!(t.set_max_lines(0).is_err());
    assert_eq!(t.config().max_lines, 5);
    assert!(t.set_frame_size(0, 10).is_err());
    assert_eq!(t.config().frame_width, 50);
    assert!(t.set_margins(0, 0, 30, 30).is_err());
    assert_eq!(t.config().margins, Margins::default());
    assert!(t.set_margins(70_000, 0, 0, 0).is_err());
    assert_eq!(t.config().margins, Margins::default());
    assert!(t.generate("still fine").is_ok());
    assert!(t.set_face(BlockFace::new(12.0), 0).is_err());
    assert_eq!(t.face().advance, 10.0);
}

#[test]
fn margins_clamp_and_shrink_the_budget() {
    let mut t = typer(10);
    t.set_margins(-3, 2, 20, -1).unwrap();
    assert_eq!(t.config().margins, Margins::clamped(0, 2, 20, 0));
    // 80 px left for text: seven characters plus the trailing space.
    let w = t.wrap("ab cdef gh");
    assert_eq!(w.lines, vec!["ab cdef ", "gh"]);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = TyperConfig {
        delay: 0,
        ..TyperConfig::default()
    };
    assert!(Typer::with_face(BlockFace::new(10.0), cfg).is_err());
}

#[test]
fn missing_font_fails_initialization() {
    let cfg = TyperConfig {
        font_path: "definitely/missing/font.ttf".into(),
        ..TyperConfig::default()
    };
    let err = Typer::new(cfg).unwrap_err();
    assert!(matches!(err, crate::TyperError::FontLoad(_)));
}

#[test]
fn generate_into_streams_same_frames_as_generate() {
    let mut t = typer(5);
    let anim = t.generate("one two").unwrap();

    let mut sink = InMemorySink::new();
    t.generate_into("one two", &mut sink).unwrap();
    assert_eq!(sink.config().unwrap().frame_count, anim.len());
    assert_eq!(sink.into_animation().unwrap(), anim);
}
