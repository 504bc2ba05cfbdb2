use crate::foundation::error::{TyperError, TyperResult};

/// Output canvas dimensions in pixels.
///
/// GIF logical screens are limited to 16-bit dimensions, so both sides are `u16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Canvas {
    /// Create a validated canvas with both dimensions `>= 1`.
    pub fn new(width: u16, height: u16) -> TyperResult<Self> {
        if width == 0 || height == 0 {
            return Err(TyperError::invalid_config(format!(
                "canvas dimensions must be >= 1 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Space kept free around the text area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Above the first line.
    pub top: u32,
    /// Below the last line.
    pub bottom: u32,
    /// Before the first glyph of every line.
    pub left: u32,
    /// Reserved at the end of every line.
    pub right: u32,
}

impl Margins {
    /// Build margins from signed values, clamping negatives to zero.
    pub fn clamped(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        let clamp = |v: i32| v.max(0).unsigned_abs();
        Self {
            top: clamp(top),
            bottom: clamp(bottom),
            left: clamp(left),
            right: clamp(right),
        }
    }

    /// Sum of left and right margins.
    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom margins.
    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque color; premultiplication is the identity at full alpha.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Convert back to straight alpha. Fully transparent colors become `[0, 0, 0, 0]`.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = u32::from(self.a);
        let unpremul = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }

    /// Channels as an array in `r, g, b, a` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
