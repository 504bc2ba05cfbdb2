pub(crate) type PremulRgba8 = [u8; 4];

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Source-over for premultiplied pixels.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
            }
            out
        }
    }
}

/// Composite `src` over `dst`; both are tightly packed premultiplied RGBA8 of equal size.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
