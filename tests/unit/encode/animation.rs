use super::*;
use crate::foundation::core::Rgba8Premul;
use std::path::PathBuf;

fn two_frames() -> Animation {
    let canvas = Canvas::new(2, 1).unwrap();
    let frame = |indices: Vec<u8>| AnimationFrame {
        frame: IndexedFrame { canvas, indices },
        delay: 12,
    };
    Animation::new(
        canvas,
        Palette::default(),
        vec![frame(vec![2, 2]), frame(vec![1, 0])],
    )
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("animation_save").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn accessors_describe_the_frames() {
    let anim = two_frames();
    assert_eq!(anim.len(), 2);
    assert!(!anim.is_empty());
    assert_eq!(anim.total_delay(), 24);
    assert_eq!(anim.palette().colors()[2], Rgba8Premul::WHITE);
    assert_eq!(
        anim.frames()[1].frame.to_rgba8(anim.palette()),
        vec![0, 0, 0, 255, 0, 0, 0, 0]
    );
}

#[test]
fn uncreatable_parent_directory_is_an_encoding_error() {
    let dir = scratch("blocked_parent");
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let out = blocker.join("out.gif");
    let err = two_frames().save(&out).unwrap_err();
    assert!(matches!(err, TyperError::Encoding(_)), "{err}");
    assert!(!out.exists());
}

#[test]
fn uncreatable_temp_file_is_an_encoding_error() {
    let dir = scratch("blocked_temp");
    let out = dir.join("out.gif");
    std::fs::create_dir_all(dir.join("out.gif.partial")).unwrap();

    let err = two_frames().save(&out).unwrap_err();
    assert!(matches!(err, TyperError::Encoding(_)), "{err}");
    assert!(err.to_string().contains("out.gif.partial"));
    assert!(!out.exists());
}

#[test]
fn failed_rename_removes_the_temp_file() {
    let dir = scratch("blocked_rename");
    let out = dir.join("taken.gif");
    std::fs::create_dir_all(out.join("occupied")).unwrap();

    let err = two_frames().save(&out).unwrap_err();
    assert!(matches!(err, TyperError::Encoding(_)), "{err}");
    assert!(!dir.join("taken.gif.partial").exists());
    assert!(out.is_dir());
}

#[test]
fn ensure_parent_dir_creates_nested_directories() {
    let dir = scratch("nested");
    let out = dir.join("a").join("b").join("out.gif");
    ensure_parent_dir(&out).unwrap();
    assert!(dir.join("a").join("b").is_dir());
    ensure_parent_dir(std::path::Path::new("bare.gif")).unwrap();
}
