//! The typing-animation generator.

use std::path::Path;

use crate::config::{TyperConfig, validate_delay, validate_font_size, validate_max_lines};
use crate::encode::animation::Animation;
use crate::encode::palette::Palette;
use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{Canvas, Margins};
use crate::foundation::error::TyperResult;
use crate::render::raster::{DESCENT_ALLOWANCE, FrameRasterizer, frame_height};
use crate::reveal::RevealSequence;
use crate::text::face::{FontFace, TextFace};
use crate::text::normalize::normalize_punctuation;
use crate::text::wrap::{WrappedText, wrap_lines};

/// Turns text into a typewriter-style [`Animation`].
///
/// A generator owns its face and settings exclusively. Setters validate before mutating, so a
/// rejected value leaves the previous configuration in place. Generation and setters take
/// `&mut self`; share one generator across threads only behind a mutex, or use one generator per
/// request.
#[derive(Debug)]
pub struct Typer<F: TextFace = FontFace> {
    face: F,
    config: TyperConfig,
}

impl Typer<FontFace> {
    /// Validate `config` and load the font it names.
    pub fn new(config: TyperConfig) -> TyperResult<Self> {
        config.validate()?;
        let face = FontFace::load(&config.font_path, config.font_size)?;
        Ok(Self { face, config })
    }

    /// Generator with [`TyperConfig::default`].
    pub fn with_defaults() -> TyperResult<Self> {
        Self::new(TyperConfig::default())
    }

    /// Load a different font file and size.
    ///
    /// The new face replaces the current one only after it loaded successfully.
    pub fn set_font(&mut self, path: impl AsRef<Path>, size: u32) -> TyperResult<()> {
        validate_font_size(size)?;
        let path = path.as_ref();
        let face = FontFace::load(path, size)?;
        self.face = face;
        self.config.font_path = path.to_path_buf();
        self.config.font_size = size;
        Ok(())
    }

    /// Reload the current font file at another size.
    pub fn set_font_size(&mut self, size: u32) -> TyperResult<()> {
        let path = self.config.font_path.clone();
        self.set_font(path, size)
    }
}

impl<F: TextFace> Typer<F> {
    /// Generator over an already constructed face.
    ///
    /// `config.font_size` is used as the line height and should match the face.
    pub fn with_face(face: F, config: TyperConfig) -> TyperResult<Self> {
        config.validate()?;
        Ok(Self { face, config })
    }

    /// Current settings.
    pub fn config(&self) -> &TyperConfig {
        &self.config
    }

    /// Current face.
    pub fn face(&self) -> &F {
        &self.face
    }

    /// Swap in another face at `size` pixels.
    pub fn set_face(&mut self, face: F, size: u32) -> TyperResult<()> {
        validate_font_size(size)?;
        self.face = face;
        self.config.font_size = size;
        Ok(())
    }

    /// Delay per frame in 1/100 s; must be >= 1.
    pub fn set_delay(&mut self, delay: u16) -> TyperResult<()> {
        validate_delay(delay)?;
        self.config.delay = delay;
        Ok(())
    }

    /// Lines per page; must be >= 1.
    pub fn set_max_lines(&mut self, max_lines: usize) -> TyperResult<()> {
        validate_max_lines(max_lines)?;
        self.config.max_lines = max_lines;
        Ok(())
    }

    /// Frame width and text-area height ceiling; both must be >= 1.
    pub fn set_frame_size(&mut self, width: u16, height: u16) -> TyperResult<()> {
        self.try_update(|cfg| {
            cfg.frame_width = width;
            cfg.frame_height = height;
        })
    }

    /// Set all four margins. Negative values clamp to zero.
    ///
    /// Fails if the side margins would leave no horizontal room.
    pub fn set_margins(&mut self, top: i32, bottom: i32, left: i32, right: i32) -> TyperResult<()> {
        let margins = Margins::clamped(top, bottom, left, right);
        self.try_update(|cfg| cfg.margins = margins)
    }

    /// Replace the output palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.config.palette = palette;
    }

    /// Toggle the punctuation spacing pass.
    pub fn set_normalize_punctuation(&mut self, enabled: bool) {
        self.config.normalize_punctuation = enabled;
    }

    fn try_update(&mut self, f: impl FnOnce(&mut TyperConfig)) -> TyperResult<()> {
        let mut next = self.config.clone();
        f(&mut next);
        next.validate()?;
        self.config = next;
        Ok(())
    }

    /// Normalize and wrap `text` with the current face and settings.
    pub fn wrap(&mut self, text: &str) -> WrappedText {
        let normalized;
        let text = if self.config.normalize_punctuation {
            normalized = normalize_punctuation(text);
            normalized.as_str()
        } else {
            text
        };
        wrap_lines(&mut self.face, text, self.config.width_budget())
    }

    /// Render `text` into a complete animation.
    ///
    /// Either every frame is produced or an error is returned; there is no partial result.
    pub fn generate(&mut self, text: &str) -> TyperResult<Animation> {
        let mut sink = InMemorySink::new();
        self.generate_into(text, &mut sink)?;
        sink.into_animation()
    }

    /// Render `text` and stream the quantized frames into `sink`.
    #[tracing::instrument(skip(self, text, sink), fields(text_len = text.len()))]
    pub fn generate_into(&mut self, text: &str, sink: &mut dyn FrameSink) -> TyperResult<()> {
        let wrapped = self.wrap(text);
        let canvas = self.canvas_for(wrapped.line_count())?;
        let cfg = &self.config;

        let page_text_height = cfg
            .max_lines
            .saturating_mul(cfg.font_size as usize)
            .saturating_add(DESCENT_ALLOWANCE as usize);
        if page_text_height > usize::from(cfg.frame_height) {
            tracing::warn!(
                max_lines = cfg.max_lines,
                font_size = cfg.font_size,
                frame_height = cfg.frame_height,
                "a full page of lines does not fit the frame height; text will overflow"
            );
        }

        let raster = FrameRasterizer::new(canvas, cfg.margins, cfg.font_size);
        let seq = RevealSequence::new(&wrapped.lines, cfg.max_lines);
        let frame_count = seq.frame_count();
        tracing::debug!(
            lines = wrapped.line_count(),
            chars = wrapped.char_count,
            pages = seq.page_count(),
            frames = frame_count,
            width = canvas.width,
            height = canvas.height,
            "prepared reveal sequence"
        );

        sink.begin(&SinkConfig {
            canvas,
            palette: cfg.palette.clone(),
            frame_count,
        })?;
        for state in seq {
            let rgba = raster.render(&mut self.face, &state)?;
            sink.push_frame(self.config.palette.quantize(&rgba), self.config.delay)?;
        }
        sink.end()
    }

    /// Canvas for a text of `line_count` wrapped lines.
    pub fn canvas_for(&self, line_count: usize) -> TyperResult<Canvas> {
        let cfg = &self.config;
        let height = frame_height(
            line_count,
            cfg.max_lines,
            cfg.font_size,
            u32::from(cfg.frame_height),
            cfg.margins,
        )?;
        Canvas::new(cfg.frame_width, height)
    }
}

#[cfg(test)]
#[path = "../tests/unit/generator.rs"]
mod tests;
