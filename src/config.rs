//! Generator settings, their defaults, and the JSON file form.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::palette::Palette;
use crate::foundation::core::{Canvas, Margins};
use crate::foundation::error::{TyperError, TyperResult};

/// Font file used when none is configured.
pub const DEFAULT_FONT_FILE: &str = "Roboto-Regular.ttf";
/// Font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 32;
/// Frame width in pixels.
pub const DEFAULT_FRAME_WIDTH: u16 = 500;
/// Frame height in pixels; also the ceiling for the text area.
pub const DEFAULT_FRAME_HEIGHT: u16 = 500;
/// Lines per page.
pub const DEFAULT_MAX_LINES: usize = 5;
/// Delay between frames, in 1/100 s.
pub const DEFAULT_DELAY: u16 = 30;

/// Everything a [`crate::Typer`] needs besides the loaded font.
///
/// Every field has a default, so a JSON config may name only what it changes:
///
/// ```
/// let cfg = typegif::TyperConfig::from_json_str(r#"{ "delay": 12, "max_lines": 3 }"#).unwrap();
/// assert_eq!(cfg.delay, 12);
/// assert_eq!(cfg.font_size, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TyperConfig {
    /// Font file to load.
    pub font_path: PathBuf,
    /// Font size in pixels; also the line height.
    pub font_size: u32,
    /// Frame width.
    pub frame_width: u16,
    /// Frame height ceiling for the text area (margins are added on top).
    pub frame_height: u16,
    /// Space kept free around the text.
    pub margins: Margins,
    /// Delay per frame, in 1/100 s.
    pub delay: u16,
    /// Lines shown per page before a new page starts.
    pub max_lines: usize,
    /// Color table for the output.
    pub palette: Palette,
    /// Insert a space after punctuation that runs into the next word.
    pub normalize_punctuation: bool,
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_FILE),
            font_size: DEFAULT_FONT_SIZE,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            margins: Margins::default(),
            delay: DEFAULT_DELAY,
            max_lines: DEFAULT_MAX_LINES,
            palette: Palette::default(),
            normalize_punctuation: true,
        }
    }
}

impl TyperConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> TyperResult<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> TyperResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check every invariant.
    pub fn validate(&self) -> TyperResult<()> {
        validate_font_size(self.font_size)?;
        validate_delay(self.delay)?;
        validate_max_lines(self.max_lines)?;
        Canvas::new(self.frame_width, self.frame_height)?;
        if self.margins.horizontal() >= u32::from(self.frame_width) {
            return Err(TyperError::invalid_config(format!(
                "left + right margins ({}) leave no room in a {} px wide frame",
                self.margins.horizontal(),
                self.frame_width
            )));
        }
        let tallest = u64::from(self.frame_height) + u64::from(self.margins.vertical());
        if tallest > u64::from(u16::MAX) {
            return Err(TyperError::invalid_config(format!(
                "frame height {} plus top + bottom margins ({}) exceeds the GIF limit of {}",
                self.frame_height,
                self.margins.vertical(),
                u16::MAX
            )));
        }
        Ok(())
    }

    /// Horizontal space available to a line.
    pub fn width_budget(&self) -> f32 {
        u32::from(self.frame_width).saturating_sub(self.margins.horizontal()) as f32
    }
}

pub(crate) fn validate_font_size(size: u32) -> TyperResult<()> {
    if size == 0 {
        return Err(TyperError::invalid_config("font size must be >= 1"));
    }
    Ok(())
}

pub(crate) fn validate_delay(delay: u16) -> TyperResult<()> {
    if delay < 1 {
        return Err(TyperError::invalid_config("delay must be >= 1"));
    }
    Ok(())
}

pub(crate) fn validate_max_lines(max_lines: usize) -> TyperResult<()> {
    if max_lines < 1 {
        return Err(TyperError::invalid_config("max visible lines must be >= 1"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
