use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{TyperError, TyperResult};
use crate::foundation::math::over_in_place;
use crate::render::FrameRGBA;

/// Measures and paints runs of text for layout and rasterization.
///
/// Implementations must be deterministic: the same string always measures the same width.
pub trait TextFace {
    /// Advance width of `text` in pixels, including trailing whitespace.
    fn measure(&mut self, text: &str) -> f32;

    /// Width a single space adds between two words.
    ///
    /// The default derives it from two measurements (`" W"` minus `"W"`) for engines that do not
    /// report whitespace advances on their own.
    fn space_width(&mut self) -> f32 {
        self.measure(" W") - self.measure("W")
    }

    /// Draw `text` onto `frame` with its left edge at `origin_x` and baseline at `baseline_y`.
    fn paint(
        &mut self,
        frame: &mut FrameRGBA,
        text: &str,
        origin_x: f32,
        baseline_y: f32,
        color: Rgba8Premul,
    ) -> TyperResult<()>;
}

/// Brush type carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    /// Straight-alpha RGBA8.
    pub rgba: [u8; 4],
}

/// A scalable font loaded at a fixed pixel size.
///
/// Shaping goes through Parley against a private font collection holding only this face, so
/// results never depend on fonts installed on the host.
pub struct FontFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
    size_px: f32,
    source: Option<PathBuf>,
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("size_px", &self.size_px)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl FontFace {
    /// Read and register the font file at `path`.
    pub fn load(path: impl AsRef<Path>, size_px: u32) -> TyperResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            TyperError::font_load(format!("read font '{}': {e}", path.display()))
        })?;
        let mut face = Self::from_bytes(bytes, size_px).map_err(|e| match e {
            TyperError::FontLoad(msg) => {
                TyperError::font_load(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })?;
        face.source = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), family = %face.family_name, size_px, "loaded font");
        Ok(face)
    }

    /// Register a font from raw TrueType/OpenType bytes.
    pub fn from_bytes(bytes: Vec<u8>, size_px: u32) -> TyperResult<Self> {
        if size_px == 0 {
            return Err(TyperError::invalid_config("font size must be >= 1"));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TyperError::font_load("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TyperError::font_load("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
            size_px: size_px as f32,
            source: None,
        })
    }

    /// Pixel size the face was loaded at.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Family name reported by the font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// File the face was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn layout(&mut self, text: &str, brush: TextBrush) -> parley::Layout<TextBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextFace for FontFace {
    fn measure(&mut self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.layout(text, TextBrush::default()).full_width()
    }

    fn space_width(&mut self) -> f32 {
        self.measure(" ")
    }

    fn paint(
        &mut self,
        frame: &mut FrameRGBA,
        text: &str,
        origin_x: f32,
        baseline_y: f32,
        color: Rgba8Premul,
    ) -> TyperResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let rgba = color.to_straight_rgba();
        let layout = self.layout(text, TextBrush { rgba });
        let first_baseline = layout
            .lines()
            .next()
            .map(|line| line.metrics().baseline)
            .unwrap_or(0.0);

        let (w, h) = (frame.canvas.width, frame.canvas.height);
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(origin_x),
            f64::from(baseline_y - first_baseline),
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let [r, g, b, a] = run.style().brush.rgba;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let src = pixmap.data_as_u8_slice();
        if src.len() != frame.data.len() {
            return Err(TyperError::Other(anyhow::anyhow!(
                "text surface size mismatch ({} vs {} bytes)",
                src.len(),
                frame.data.len()
            )));
        }
        over_in_place(&mut frame.data, src);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/face.rs"]
mod tests;
