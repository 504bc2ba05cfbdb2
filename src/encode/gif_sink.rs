use std::borrow::Cow;
use std::io::Write;

use crate::encode::palette::IndexedFrame;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{TyperError, TyperResult};

/// Sink that streams frames into an animated GIF.
///
/// The palette becomes the global color table. Frames use the "keep" disposal so transparent
/// pixels show the previous frame, and the animation loops forever.
pub struct GifSink<W: Write> {
    writer: Option<W>,
    encoder: Option<gif::Encoder<W>>,
    canvas: Option<Canvas>,
    transparent: Option<u8>,
}

impl<W: Write> GifSink<W> {
    /// Sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            encoder: None,
            canvas: None,
            transparent: None,
        }
    }

    /// Recover the writer once `end` has run.
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: &SinkConfig) -> TyperResult<()> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| TyperError::encoding("gif sink already started"))?;
        let mut encoder = gif::Encoder::new(
            writer,
            cfg.canvas.width,
            cfg.canvas.height,
            &cfg.palette.rgb_table(),
        )?;
        encoder.set_repeat(gif::Repeat::Infinite)?;
        self.encoder = Some(encoder);
        self.canvas = Some(cfg.canvas);
        self.transparent = cfg.palette.transparent_index();
        Ok(())
    }

    fn push_frame(&mut self, frame: IndexedFrame, delay: u16) -> TyperResult<()> {
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| TyperError::encoding("gif sink not started"))?;
        if Some(frame.canvas) != self.canvas {
            return Err(TyperError::encoding(format!(
                "frame is {}x{}, animation canvas is {:?}",
                frame.canvas.width, frame.canvas.height, self.canvas
            )));
        }

        let mut out = gif::Frame::default();
        out.width = frame.canvas.width;
        out.height = frame.canvas.height;
        out.delay = delay;
        out.dispose = gif::DisposalMethod::Keep;
        out.transparent = self.transparent;
        out.buffer = Cow::Borrowed(&frame.indices);
        encoder.write_frame(&out)?;
        Ok(())
    }

    fn end(&mut self) -> TyperResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| TyperError::encoding("gif sink not started"))?;
        let writer = encoder
            .into_inner()
            .map_err(|e| TyperError::encoding(format!("finish gif stream: {e}")))?;
        self.writer = Some(writer);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif_sink.rs"]
mod tests;
