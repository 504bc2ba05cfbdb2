use super::*;

#[test]
fn over_transparent_src_keeps_dst() {
    assert_eq!(over([1, 2, 3, 4], [0, 0, 0, 0]), [1, 2, 3, 4]);
}

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([255, 255, 255, 255], [0, 0, 0, 255]), [0, 0, 0, 255]);
}

#[test]
fn over_half_black_on_white_is_grey() {
    let out = over([255, 255, 255, 255], [0, 0, 0, 128]);
    assert_eq!(out, [127, 127, 127, 255]);
}

#[test]
fn over_in_place_composites_every_pixel() {
    let mut dst = vec![0u8; 8];
    let src = [0, 0, 0, 255, 10, 10, 10, 10];
    over_in_place(&mut dst, &src);
    assert_eq!(dst, src);
}
