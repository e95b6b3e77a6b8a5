use super::error::RenderError;

/// RGBA color with every channel in [0, 1]. Channels only become bytes at
/// the output edge, via `to_rgba8`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Result<Self, RenderError> {
        for value in [r, g, b, a] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RenderError::ColorRange { value });
            }
        }
        Ok(Self { r, g, b, a })
    }

    pub fn r(&self) -> f32 {
        self.r
    }
    pub fn g(&self) -> f32 {
        self.g
    }
    pub fn b(&self) -> f32 {
        self.b
    }
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Color channels scaled by `factor`, clamped back into [0, 1].
    /// Alpha is left untouched.
    pub fn scaled(self, factor: f32) -> Color {
        Color {
            r: (self.r * factor).clamp(0.0, 1.0),
            g: (self.g * factor).clamp(0.0, 1.0),
            b: (self.b * factor).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    pub(crate) fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}
