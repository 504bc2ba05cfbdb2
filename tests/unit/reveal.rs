use super::*;

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn typed(page: usize, slot: usize, text: &str) -> RenderState {
    RenderState::Typed {
        page,
        slot,
        text: text.to_string(),
    }
}

#[test]
fn single_short_line() {
    let l = lines(&["Hi!"]);
    let seq = RevealSequence::new(&l, 5);
    assert_eq!(seq.frame_count(), 4);
    let states: Vec<_> = seq.collect();
    assert_eq!(
        states,
        vec![
            RenderState::Background { page: 0 },
            typed(0, 0, "H"),
            typed(0, 0, "Hi"),
            typed(0, 0, "Hi!"),
        ]
    );
}

#[test]
fn empty_input_is_just_the_blank_page() {
    let l: Vec<String> = Vec::new();
    let seq = RevealSequence::new(&l, 5);
    assert_eq!(seq.frame_count(), 1);
    assert_eq!(seq.collect::<Vec<_>>(), vec![RenderState::Background { page: 0 }]);
}

#[test]
fn slots_advance_per_line() {
    let l = lines(&["ab ", "c"]);
    let states: Vec<_> = RevealSequence::new(&l, 5).collect();
    assert_eq!(
        states,
        vec![
            RenderState::Background { page: 0 },
            typed(0, 0, "a"),
            typed(0, 0, "ab"),
            typed(0, 0, "ab "),
            typed(0, 1, "c"),
        ]
    );
}

#[test]
fn page_break_inserts_one_background() {
    let l = lines(&["a", "b", "c"]);
    let seq = RevealSequence::new(&l, 2);
    assert_eq!(seq.page_count(), 2);
    assert_eq!(seq.frame_count(), 5);
    let states: Vec<_> = seq.collect();
    assert_eq!(
        states,
        vec![
            RenderState::Background { page: 0 },
            typed(0, 0, "a"),
            typed(0, 1, "b"),
            RenderState::Background { page: 1 },
            typed(1, 0, "c"),
        ]
    );
}

#[test]
fn no_trailing_background_when_page_fills_exactly() {
    let l = lines(&["a", "b", "c", "d"]);
    let states: Vec<_> = RevealSequence::new(&l, 2).collect();
    assert_eq!(states.iter().filter(|s| s.is_background()).count(), 2);
    assert!(!states.last().unwrap().is_background());
}

#[test]
fn frame_count_matches_iteration() {
    let l = lines(&["This ", "is a ", "test ", "line"]);
    for max in 1..6 {
        let seq = RevealSequence::new(&l, max);
        let expected = seq.frame_count();
        let states: Vec<_> = seq.collect();
        assert_eq!(states.len(), expected, "max_lines={max}");

        let typed_chars = states
            .iter()
            .filter(|s| matches!(s, RenderState::Typed { text, .. } if !text.is_empty()))
            .count();
        assert_eq!(typed_chars, 19);

        let backgrounds = states.iter().filter(|s| s.is_background()).count();
        assert_eq!(backgrounds, (l.len() - 1) / max + 1);
        for s in &states {
            if let RenderState::Typed { slot, .. } = s {
                assert!(*slot < max);
            }
        }
    }
}

#[test]
fn each_background_opens_its_page() {
    let l = lines(&["a", "b", "c", "d", "e"]);
    let states: Vec<_> = RevealSequence::new(&l, 2).collect();
    let mut expected_page = 0;
    for (i, s) in states.iter().enumerate() {
        if s.is_background() {
            assert_eq!(s.page(), expected_page);
            expected_page += 1;
        } else {
            assert!(i > 0);
            assert_eq!(s.page(), expected_page - 1);
        }
    }
    assert_eq!(expected_page, 3);
}

#[test]
fn zero_max_lines_behaves_like_one() {
    let l = lines(&["a", "b"]);
    let states: Vec<_> = RevealSequence::new(&l, 0).collect();
    assert_eq!(states.len(), 4);
    assert_eq!(states[2], RenderState::Background { page: 1 });
}

#[test]
fn multibyte_prefixes_split_on_char_boundaries() {
    let l = lines(&["né"]);
    let states: Vec<_> = RevealSequence::new(&l, 5).collect();
    assert_eq!(states[1], typed(0, 0, "n"));
    assert_eq!(states[2], typed(0, 0, "né"));
}

#[test]
fn empty_line_takes_a_slot_without_frames() {
    let l = lines(&["a", "", "b"]);
    let seq = RevealSequence::new(&l, 5);
    assert_eq!(seq.frame_count(), 3);
    let states: Vec<_> = seq.collect();
    assert_eq!(states[2], typed(0, 2, "b"));
}
