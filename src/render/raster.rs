use crate::foundation::core::{Canvas, Margins, Rgba8Premul};
use crate::foundation::error::{TyperError, TyperResult};
use crate::render::FrameRGBA;
use crate::reveal::RenderState;
use crate::text::face::TextFace;

/// Extra pixels below the last baseline so descenders are not clipped.
pub const DESCENT_ALLOWANCE: u32 = 8;

/// Page background color.
pub const BACKGROUND: Rgba8Premul = Rgba8Premul::WHITE;
/// Text color.
pub const INK: Rgba8Premul = Rgba8Premul::BLACK;

/// Canvas height for `line_count` wrapped lines.
///
/// Only the lines visible on one page count. The text area is `visible * font_size` plus
/// [`DESCENT_ALLOWANCE`], capped at `max_text_height`, and the vertical margins are added on top.
pub fn frame_height(
    line_count: usize,
    max_lines: usize,
    font_size: u32,
    max_text_height: u32,
    margins: Margins,
) -> TyperResult<u16> {
    let visible = line_count.min(max_lines.max(1)) as u64;
    let text_height = visible * u64::from(font_size) + u64::from(DESCENT_ALLOWANCE);
    let height = text_height.min(u64::from(max_text_height)) + u64::from(margins.vertical());
    u16::try_from(height.max(1)).map_err(|_| {
        TyperError::invalid_config(format!(
            "canvas height {height} exceeds the GIF limit of {}",
            u16::MAX
        ))
    })
}

/// Turns render states into full-canvas frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRasterizer {
    canvas: Canvas,
    margins: Margins,
    font_size: u32,
}

impl FrameRasterizer {
    /// Rasterizer for one generation call.
    pub fn new(canvas: Canvas, margins: Margins, font_size: u32) -> Self {
        Self {
            canvas,
            margins,
            font_size,
        }
    }

    /// Size of every frame produced.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Baseline of line slot `slot`: `(slot + 1) * font_size + top margin`.
    pub fn baseline_y(&self, slot: usize) -> f32 {
        ((slot as f64 + 1.0) * f64::from(self.font_size) + f64::from(self.margins.top)) as f32
    }

    /// Opaque page with no text.
    pub fn background(&self) -> FrameRGBA {
        FrameRGBA::filled(self.canvas, BACKGROUND)
    }

    /// Render one state.
    ///
    /// Typed states are drawn on a transparent canvas so earlier lines of the page, kept by the
    /// previous frames, show through.
    pub fn render(&self, face: &mut dyn TextFace, state: &RenderState) -> TyperResult<FrameRGBA> {
        match state {
            RenderState::Background { .. } => Ok(self.background()),
            RenderState::Typed { slot, text, .. } => {
                let mut frame = FrameRGBA::transparent(self.canvas);
                face.paint(
                    &mut frame,
                    text,
                    self.margins.left as f32,
                    self.baseline_y(*slot),
                    INK,
                )?;
                Ok(frame)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
