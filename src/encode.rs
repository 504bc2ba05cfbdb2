//! Palette quantization and animation assembly.
//!
//! Sinks consume quantized frames in reveal order; [`gif_sink::GifSink`] writes them as an
//! animated GIF and [`sink::InMemorySink`] collects them into an [`animation::Animation`].

/// The finished animation value and file output.
pub mod animation;
/// Animated GIF sink.
pub mod gif_sink;
/// Fixed palette and quantized frames.
pub mod palette;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
