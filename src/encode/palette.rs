use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{TyperError, TyperResult};
use crate::render::FrameRGBA;

/// Maximum number of entries a GIF color table can hold.
pub const MAX_PALETTE_LEN: usize = 256;

/// Fixed color table every output frame is quantized into.
///
/// The first fully transparent entry (if any) becomes the GIF transparent index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<[u8; 4]>", into = "Vec<[u8; 4]>")]
pub struct Palette {
    colors: Vec<Rgba8Premul>,
}

impl Default for Palette {
    /// Transparent, black, white and two accent greens.
    fn default() -> Self {
        Self {
            colors: vec![
                Rgba8Premul::TRANSPARENT,
                Rgba8Premul::BLACK,
                Rgba8Premul::WHITE,
                Rgba8Premul::opaque(0, 255, 0),
                Rgba8Premul::opaque(0, 100, 0),
            ],
        }
    }
}

impl Palette {
    /// Create a palette with between 1 and 256 entries.
    pub fn new(colors: Vec<Rgba8Premul>) -> TyperResult<Self> {
        if colors.is_empty() {
            return Err(TyperError::invalid_config("palette must not be empty"));
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(TyperError::invalid_config(format!(
                "palette holds at most {MAX_PALETTE_LEN} colors (got {})",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// Palette entries in index order.
    pub fn colors(&self) -> &[Rgba8Premul] {
        &self.colors
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes are validated non-empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the first fully transparent entry.
    pub fn transparent_index(&self) -> Option<u8> {
        self.colors
            .iter()
            .position(|c| c.a == 0)
            .map(|i| i as u8)
    }

    /// Entry for `index`, if in range.
    pub fn color(&self, index: u8) -> Option<Rgba8Premul> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Nearest entry for a premultiplied pixel.
    ///
    /// Exact matches win; otherwise the smallest squared distance over `(r, g, b, a)`, ties going
    /// to the lower index.
    pub fn index_of(&self, px: Rgba8Premul) -> u8 {
        if let Some(i) = self.colors.iter().position(|c| *c == px) {
            return i as u8;
        }

        let dist = |c: &Rgba8Premul| -> u32 {
            let d = |a: u8, b: u8| {
                let v = i32::from(a) - i32::from(b);
                (v * v) as u32
            };
            d(c.r, px.r) + d(c.g, px.g) + d(c.b, px.b) + d(c.a, px.a)
        };

        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let dd = dist(c);
            if dd < best_dist {
                best = i;
                best_dist = dd;
            }
        }
        best as u8
    }

    /// Map every pixel of `frame` to a palette index. No dithering.
    pub fn quantize(&self, frame: &FrameRGBA) -> IndexedFrame {
        let mut indices = Vec::with_capacity(frame.canvas.pixel_count());
        // Frames are mostly runs of one color; remember the last lookup.
        let mut last: Option<(Rgba8Premul, u8)> = None;
        for px in frame.data.chunks_exact(4) {
            let px = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            };
            let idx = match last {
                Some((c, i)) if c == px => i,
                _ => {
                    let i = self.index_of(px);
                    last = Some((px, i));
                    i
                }
            };
            indices.push(idx);
        }
        IndexedFrame {
            canvas: frame.canvas,
            indices,
        }
    }

    /// Packed `r, g, b` triples in straight alpha, as GIF color tables expect.
    pub fn rgb_table(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 3);
        for c in &self.colors {
            let [r, g, b, _] = c.to_straight_rgba();
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}

impl TryFrom<Vec<[u8; 4]>> for Palette {
    type Error = TyperError;

    fn try_from(value: Vec<[u8; 4]>) -> Result<Self, Self::Error> {
        Self::new(
            value
                .into_iter()
                .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
                .collect(),
        )
    }
}

impl From<Palette> for Vec<[u8; 4]> {
    fn from(value: Palette) -> Self {
        value
            .colors
            .into_iter()
            .map(Rgba8Premul::to_straight_rgba)
            .collect()
    }
}

/// A frame after quantization: one palette index per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// Palette indices, `canvas.width * canvas.height` entries.
    pub indices: Vec<u8>,
}

impl IndexedFrame {
    /// Expand into straight-alpha RGBA8 bytes using `palette`.
    ///
    /// Out-of-range indices render as transparent.
    pub fn to_rgba8(&self, palette: &Palette) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.indices.len() * 4);
        for &i in &self.indices {
            let c = palette.color(i).unwrap_or(Rgba8Premul::TRANSPARENT);
            out.extend_from_slice(&c.to_straight_rgba());
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/palette.rs"]
mod tests;
