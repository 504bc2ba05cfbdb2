use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(3, 4).unwrap();
    assert_eq!(c.pixel_count(), 12);
}

#[test]
fn margins_clamp_negative_values() {
    let m = Margins::clamped(-5, 3, -1, 7);
    assert_eq!(
        m,
        Margins {
            top: 0,
            bottom: 3,
            left: 0,
            right: 7
        }
    );
    assert_eq!(m.horizontal(), 7);
    assert_eq!(m.vertical(), 3);
}

#[test]
fn premul_roundtrip_for_opaque_and_transparent() {
    let c = Rgba8Premul::from_straight_rgba(0, 100, 0, 255);
    assert_eq!(c, Rgba8Premul::opaque(0, 100, 0));
    assert_eq!(c.to_straight_rgba(), [0, 100, 0, 255]);

    let t = Rgba8Premul::from_straight_rgba(200, 10, 30, 0);
    assert_eq!(t, Rgba8Premul::TRANSPARENT);
    assert_eq!(t.to_straight_rgba(), [0, 0, 0, 0]);
}

#[test]
fn premul_half_alpha_scales_channels() {
    let c = Rgba8Premul::from_straight_rgba(255, 255, 255, 128);
    assert_eq!(c.to_array(), [128, 128, 128, 128]);
    assert_eq!(c.to_straight_rgba(), [255, 255, 255, 128]);
}
