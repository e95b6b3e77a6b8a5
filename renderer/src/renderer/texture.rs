use super::color::Color;
use super::error::RenderError;

/// Nearest-pixel sampler over a desaturated bitmap. The RGBA source is
/// converted once at construction: every texel becomes its R/G/B average
/// replicated across the color channels, alpha kept as-is.
pub struct Texture {
    texels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn from_rgba8(width: u32, height: u32, pixels: &[u8]) -> Self {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        let texels = pixels
            .chunks_exact(4)
            .map(|px| {
                let grey = ((px[0] as u32 + px[1] as u32 + px[2] as u32) / 3) as u8;
                Color::from_rgba8(grey, grey, grey, px[3])
            })
            .collect();
        Self {
            texels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Look up the texel under `(u, v)`. The valid domain is the half-open
    /// square [0, 1) x [0, 1); anything else means the caller computed a bad
    /// coordinate and gets an error instead of a wrapped or clamped texel.
    pub fn sample(&self, u: f32, v: f32) -> Result<Color, RenderError> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return Err(RenderError::SampleOutOfRange { u, v });
        }
        let x = (u * self.width as f32) as u32;
        let y = (v * self.height as f32) as u32;
        Ok(self.texels[(x + y * self.width) as usize])
    }
}
