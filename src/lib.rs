//! typegif renders text as an animated GIF that looks like it is being typed.
//!
//! The pipeline runs in one synchronous pass:
//!
//! - normalize punctuation spacing and wrap the text against the frame width
//! - expand the lines into one render state per revealed character, paging by line count
//! - rasterize each state and quantize it into a small fixed palette
//! - stream the indexed frames into a [`FrameSink`], by default collecting an [`Animation`]
//!
//! ```no_run
//! let mut typer = typegif::Typer::with_defaults()?;
//! typer.set_delay(8)?;
//! let anim = typer.generate("Hello, world!")?;
//! anim.save("hello.gif")?;
//! # Ok::<(), typegif::TyperError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Generator settings and their JSON form.
pub mod config;
/// Palette quantization, sinks, and GIF output.
pub mod encode;
/// The generator.
pub mod generator;
/// Render states to raster frames.
pub mod render;
/// Reveal sequencing.
pub mod reveal;
pub mod test_support;
/// Text measurement, normalization and wrapping.
pub mod text;

pub use crate::config::TyperConfig;
pub use crate::encode::animation::{Animation, AnimationFrame};
pub use crate::encode::gif_sink::GifSink;
pub use crate::encode::palette::{IndexedFrame, Palette};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{Canvas, Margins, Rgba8Premul};
pub use crate::foundation::error::{TyperError, TyperResult};
pub use crate::generator::Typer;
pub use crate::render::FrameRGBA;
pub use crate::render::raster::FrameRasterizer;
pub use crate::reveal::{RenderState, RevealSequence};
pub use crate::text::face::{FontFace, TextFace};
pub use crate::text::normalize::normalize_punctuation;
pub use crate::text::wrap::{WrappedText, wrap_lines};
