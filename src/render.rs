/// Render states to full-canvas raster frames.
pub mod raster;

use crate::foundation::core::{Canvas, Rgba8Premul};

/// A rendered frame as premultiplied RGBA8 pixels, before palette quantization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// RGBA8 bytes, tightly packed, row-major, premultiplied alpha.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Frame cleared to fully transparent.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0; canvas.pixel_count() * 4],
        }
    }

    /// Frame filled with one color.
    pub fn filled(canvas: Canvas, color: Rgba8Premul) -> Self {
        let mut data = Vec::with_capacity(canvas.pixel_count() * 4);
        for _ in 0..canvas.pixel_count() {
            data.extend_from_slice(&color.to_array());
        }
        Self { canvas, data }
    }

    /// Pixel at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let (w, h) = (u32::from(self.canvas.width), u32::from(self.canvas.height));
        if x >= w || y >= h {
            return None;
        }
        let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
        Some(Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    /// Overwrite the half-open rectangle `[left, right) x [top, bottom)`, clipped to the canvas.
    pub fn fill_rect(&mut self, left: u32, top: u32, right: u32, bottom: u32, color: Rgba8Premul) {
        let w = u32::from(self.canvas.width);
        let h = u32::from(self.canvas.height);
        let (right, bottom) = (right.min(w), bottom.min(h));
        let px = color.to_array();
        for y in top..bottom {
            for x in left..right {
                let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
                self.data[i..i + 4].copy_from_slice(&px);
            }
        }
    }
}
