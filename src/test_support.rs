//! Deterministic stand-ins for tests and benchmarks that should not depend on font files.

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::TyperResult;
use crate::render::FrameRGBA;
use crate::text::face::TextFace;

/// Monospace face that draws each visible character as a solid block.
///
/// Every character (spaces included) advances by `advance` pixels. Blocks are `advance - 1`
/// pixels wide and `ascent` pixels tall, sitting on the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFace {
    /// Horizontal advance per character.
    pub advance: f32,
    /// Block height above the baseline.
    pub ascent: f32,
}

impl BlockFace {
    /// Block face with the given advance and an ascent of `advance`.
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            ascent: advance,
        }
    }
}

impl TextFace for BlockFace {
    fn measure(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn paint(
        &mut self,
        frame: &mut FrameRGBA,
        text: &str,
        origin_x: f32,
        baseline_y: f32,
        color: Rgba8Premul,
    ) -> TyperResult<()> {
        let top = (baseline_y - self.ascent).max(0.0) as u32;
        let bottom = baseline_y.max(0.0) as u32;
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = (origin_x + i as f32 * self.advance).max(0.0) as u32;
            let right = left + (self.advance as u32).saturating_sub(1);
            frame.fill_rect(left, top, right, bottom, color);
        }
        Ok(())
    }
}
