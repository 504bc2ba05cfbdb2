use crate::encode::animation::{Animation, AnimationFrame};
use crate::encode::palette::{IndexedFrame, Palette};
use crate::foundation::core::Canvas;
use crate::foundation::error::{TyperError, TyperResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Size of every frame.
    pub canvas: Canvas,
    /// Palette the frame indices refer to.
    pub palette: Palette,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
}

/// Sink contract for consuming quantized frames in reveal order.
///
/// `begin` is called once, then `push_frame` once per frame in order, then `end` once.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: &SinkConfig) -> TyperResult<()>;
    /// Push the next frame and how long it stays on screen.
    fn push_frame(&mut self, frame: IndexedFrame, delay: u16) -> TyperResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TyperResult<()>;
}

/// Sink that keeps every frame; backs [`crate::Typer::generate`].
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<AnimationFrame>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames captured so far.
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Assemble the captured frames into an [`Animation`].
    pub fn into_animation(self) -> TyperResult<Animation> {
        let cfg = self
            .cfg
            .ok_or_else(|| TyperError::encoding("sink finished without begin"))?;
        Ok(Animation::new(cfg.canvas, cfg.palette, self.frames))
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> TyperResult<()> {
        self.frames.clear();
        self.frames.reserve(cfg.frame_count);
        self.cfg = Some(cfg.clone());
        Ok(())
    }

    fn push_frame(&mut self, frame: IndexedFrame, delay: u16) -> TyperResult<()> {
        self.frames.push(AnimationFrame { frame, delay });
        Ok(())
    }

    fn end(&mut self) -> TyperResult<()> {
        Ok(())
    }
}
