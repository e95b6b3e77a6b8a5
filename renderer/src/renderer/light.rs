use glam::Vec3;

use super::color::Color;

/// Directional light approximation. No position, no attenuation.
#[derive(Debug, Copy, Clone)]
pub struct Light {
    direction: Vec3,
    color: Color,
}

impl Light {
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self { direction, color }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Lambert term for a unit face normal, clamped so back-facing
    /// geometry goes black instead of inverting.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).max(0.0)
    }

    /// Flat shade: the diffuse color scaled by the face intensity.
    pub fn surface_color(&self, diffuse: Color, normal: Vec3) -> Color {
        diffuse.scaled(self.intensity(normal))
    }
}
