use std::io::Write;
use std::path::Path;

use crate::encode::gif_sink::GifSink;
use crate::encode::palette::{IndexedFrame, Palette};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{TyperError, TyperResult};

/// One output frame and its display time in GIF units (1/100 s).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Quantized pixels.
    pub frame: IndexedFrame,
    /// Display time.
    pub delay: u16,
}

/// The finished typing animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    canvas: Canvas,
    palette: Palette,
    frames: Vec<AnimationFrame>,
}

impl Animation {
    pub(crate) fn new(canvas: Canvas, palette: Palette, frames: Vec<AnimationFrame>) -> Self {
        Self {
            canvas,
            palette,
            frames,
        }
    }

    /// Size shared by all frames.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Palette the frame indices refer to.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Frames in display order.
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all frame delays.
    pub fn total_delay(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.delay)).sum()
    }

    /// Replay every frame into `sink`.
    pub fn replay(&self, sink: &mut dyn FrameSink) -> TyperResult<()> {
        sink.begin(&SinkConfig {
            canvas: self.canvas,
            palette: self.palette.clone(),
            frame_count: self.frames.len(),
        })?;
        for f in &self.frames {
            sink.push_frame(f.frame.clone(), f.delay)?;
        }
        sink.end()
    }

    /// Encode as an animated GIF into `writer`.
    pub fn write_gif<W: Write>(&self, writer: W) -> TyperResult<W> {
        let mut sink = GifSink::new(writer);
        self.replay(&mut sink)?;
        sink.into_inner()
            .ok_or_else(|| TyperError::encoding("gif sink did not return its writer"))
    }

    /// Encode as an animated GIF in memory.
    pub fn to_gif_bytes(&self) -> TyperResult<Vec<u8>> {
        self.write_gif(Vec::new())
    }

    /// Write the GIF to `path`.
    ///
    /// The bytes go to a temporary sibling first and are renamed into place only once encoding
    /// succeeded, so a failed run never leaves a truncated file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> TyperResult<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".partial");
        let tmp = std::path::PathBuf::from(tmp);

        let result = std::fs::File::create(&tmp)
            .map_err(|e| TyperError::encoding(format!("create '{}': {e}", tmp.display())))
            .and_then(|f| self.write_gif(std::io::BufWriter::new(f)))
            .and_then(|w| {
                w.into_inner()
                    .map_err(|e| TyperError::encoding(format!("flush '{}': {e}", tmp.display())))
                    .map(drop)
            })
            .and_then(|()| {
                std::fs::rename(&tmp, path).map_err(|e| {
                    TyperError::encoding(format!("move output into '{}': {e}", path.display()))
                })
            });

        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> TyperResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            TyperError::encoding(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/animation.rs"]
mod tests;
