mod bounding_box;
mod color;
mod error;
mod framebuffer;
mod light;
pub mod math;
mod model;
mod stats;
mod texture;

pub use color::Color;
pub use error::RenderError;
pub use framebuffer::Framebuffer;
pub use light::Light;
pub use model::{Face, Model};
pub use stats::RenderStats;
pub use texture::Texture;

use bounding_box::BoundingBox;
use glam::{IVec2, Vec2, Vec3};
use itertools::Itertools;
use std::time::Instant;

/// Interpolated UVs are clamped just under 1.0 so a pixel landing exactly
/// on the far edge of a triangle still samples inside the texture domain.
const UV_DOMAIN_MAX: f32 = 1.0 - f32::EPSILON;

/// How a render pass colors its faces. One mode for the whole pass; a face
/// without texcoord indices falls back to flat white even in textured mode.
pub enum Shading {
    Flat(Color),
    Textured(Texture),
}

/// Per-face color source, resolved once before the pixel loop.
enum FaceShade<'a> {
    Flat(Color),
    Textured {
        texture: &'a Texture,
        uv: [Vec2; 3],
    },
}

/// Batch rasterizer. Holds exclusive ownership of the framebuffer/depth
/// pair; faces and pixels are processed strictly sequentially.
pub struct Renderer {
    framebuffer: Framebuffer,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Render every face of `model` under a single directional light.
    ///
    /// Structural problems (a face indexing past the model arrays) abort
    /// the pass; zero-area faces are skipped and counted instead.
    pub fn render(
        &mut self,
        model: &Model,
        shading: &Shading,
        light: &Light,
    ) -> Result<RenderStats, RenderError> {
        let start = Instant::now();
        let mut stats = RenderStats::default();

        for (face_index, face) in model.faces().iter().enumerate() {
            let fetch = |index: usize| {
                model
                    .vertex(index)
                    .ok_or(RenderError::FaceIndexOutOfRange { face: face_index })
            };
            let vertices = [
                fetch(face.vertices[0])?,
                fetch(face.vertices[1])?,
                fetch(face.vertices[2])?,
            ];
            let texcoords = match face.texcoords {
                Some(indices) => {
                    let fetch = |index: usize| {
                        model
                            .texcoord(index)
                            .ok_or(RenderError::FaceIndexOutOfRange { face: face_index })
                    };
                    Some([fetch(indices[0])?, fetch(indices[1])?, fetch(indices[2])?])
                }
                None => None,
            };

            // This operand order decides the shading sign: reversing the
            // winding flips the normal and zeroes the lit side.
            let [v0, v1, v2] = vertices;
            let normal = match math::normalize((v2 - v0).cross(v1 - v0)) {
                Ok(normal) => normal,
                Err(_) => {
                    stats.faces_degenerate += 1;
                    continue;
                }
            };

            self.fill_triangle(vertices, texcoords, normal, shading, light, &mut stats)?;
            stats.faces_drawn += 1;
        }

        stats.elapsed = start.elapsed();
        Ok(stats)
    }

    /// Draw the three edges of every face instead of filling them.
    /// Color only, no depth, no lighting.
    pub fn render_wireframe(&mut self, model: &Model, color: Color) -> Result<(), RenderError> {
        let (width, height) = (self.width(), self.height());
        for (face_index, face) in model.faces().iter().enumerate() {
            let fetch = |index: usize| {
                model
                    .vertex(index)
                    .ok_or(RenderError::FaceIndexOutOfRange { face: face_index })
            };
            let screen = [
                project(fetch(face.vertices[0])?, width, height),
                project(fetch(face.vertices[1])?, width, height),
                project(fetch(face.vertices[2])?, width, height),
            ];
            for i in 0..3 {
                self.draw_line(screen[i], screen[(i + 1) % 3], color);
            }
        }
        Ok(())
    }

    /// Integer Bresenham over all eight octants: step one pixel per
    /// iteration along the dominant axis, advance the minor axis when the
    /// accumulated error crosses zero.
    pub fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let step_x = if to.x >= from.x { 1 } else { -1 };
        let step_y = if to.y >= from.y { 1 } else { -1 };

        let (mut x, mut y) = (from.x, from.y);
        self.plot(x, y, color);
        if dx >= dy {
            let mut error = 2 * dy - dx;
            for _ in 0..dx {
                if error > 0 {
                    y += step_y;
                    error -= 2 * dx;
                }
                error += 2 * dy;
                x += step_x;
                self.plot(x, y, color);
            }
        } else {
            let mut error = 2 * dx - dy;
            for _ in 0..dy {
                if error > 0 {
                    x += step_x;
                    error -= 2 * dy;
                }
                error += 2 * dx;
                y += step_y;
                self.plot(x, y, color);
            }
        }
    }

    fn fill_triangle(
        &mut self,
        vertices: [Vec3; 3],
        texcoords: Option<[Vec2; 3]>,
        normal: Vec3,
        shading: &Shading,
        light: &Light,
        stats: &mut RenderStats,
    ) -> Result<(), RenderError> {
        let (width, height) = (self.width(), self.height());
        let screen = [
            project(vertices[0], width, height),
            project(vertices[1], width, height),
            project(vertices[2], width, height),
        ];
        let bounding_box = match BoundingBox::of_triangle(screen, width, height) {
            Some(bounding_box) => bounding_box,
            None => return Ok(()),
        };

        let intensity = light.intensity(normal);
        let shade = match (shading, texcoords) {
            (Shading::Flat(base), _) => FaceShade::Flat(base.scaled(intensity)),
            (Shading::Textured(texture), Some(uv)) => FaceShade::Textured { texture, uv },
            (Shading::Textured(_), None) => FaceShade::Flat(Color::WHITE.scaled(intensity)),
        };

        let y_range = bounding_box.min().y..=bounding_box.max().y;
        let x_range = bounding_box.min().x..=bounding_box.max().x;
        for (y, x) in y_range.cartesian_product(x_range) {
            let weights = barycentric(screen, IVec2::new(x, y));
            if weights.x < 0.0 || weights.y < 0.0 || weights.z < 0.0 {
                continue;
            }

            let depth = weights.x * vertices[0].z
                + weights.y * vertices[1].z
                + weights.z * vertices[2].z;
            if !self
                .framebuffer
                .set_depth_if_greater(x as u32, y as u32, depth)
            {
                continue;
            }

            let color = match &shade {
                FaceShade::Flat(color) => *color,
                FaceShade::Textured { texture, uv } => {
                    let u = (weights.x * uv[0].x + weights.y * uv[1].x + weights.z * uv[2].x)
                        .clamp(0.0, UV_DOMAIN_MAX);
                    let v = (weights.x * uv[0].y + weights.y * uv[1].y + weights.z * uv[2].y)
                        .clamp(0.0, UV_DOMAIN_MAX);
                    texture.sample(u, v)?.scaled(intensity)
                }
            };
            self.framebuffer.set_color(x as u32, y as u32, color);
            stats.pixels_written += 1;
        }
        Ok(())
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 {
            self.framebuffer.set_color(x as u32, y as u32, color);
        }
    }
}

/// Orthographic map from the canonical [-1, 1] view volume onto the
/// canvas, truncated to integer pixel coordinates. No perspective divide.
fn project(v: Vec3, width: u32, height: u32) -> IVec2 {
    let x = (v.x + 1.0) * (width as f32 / 2.0);
    let y = (v.y + 1.0) * (height as f32 / 2.0);
    IVec2::new(x as i32, y as i32)
}

/// Barycentric weights of `p` in the projected triangle, via the 2D
/// cross-product of the edge deltas. A denominator under one pixel-unit
/// marks the triangle degenerate and yields sentinel weights that fail the
/// inside test, the caller just skips the pixel.
fn barycentric(triangle: [IVec2; 3], p: IVec2) -> Vec3 {
    let [a, b, c] = triangle;
    let ab = b - a;
    let ac = c - a;
    let pa = a - p;
    let u = Vec3::new(ac.x as f32, ab.x as f32, pa.x as f32)
        .cross(Vec3::new(ac.y as f32, ab.y as f32, pa.y as f32));
    if u.z.abs() < 1.0 {
        return Vec3::new(-1.0, -1.0, -1.0);
    }
    Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_maps_view_volume_corners() {
        assert_eq!(project(Vec3::ZERO, 800, 800), IVec2::new(400, 400));
        assert_eq!(
            project(Vec3::new(-1.0, -1.0, 0.3), 800, 600),
            IVec2::new(0, 0)
        );
        assert_eq!(
            project(Vec3::new(1.0, 1.0, -0.7), 800, 600),
            IVec2::new(800, 600)
        );
    }

    #[test]
    fn barycentric_interior_point_weights_are_positive_and_sum_to_one() {
        let triangle = [IVec2::new(0, 0), IVec2::new(100, 0), IVec2::new(0, 100)];
        let w = barycentric(triangle, IVec2::new(20, 30));
        assert!(w.x > 0.0 && w.y > 0.0 && w.z > 0.0);
        assert!((w.x + w.y + w.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn barycentric_is_one_at_the_matching_vertex() {
        let triangle = [IVec2::new(10, 10), IVec2::new(90, 20), IVec2::new(40, 80)];
        let at = |p: IVec2| barycentric(triangle, p);
        let w = at(triangle[0]);
        assert!((w.x - 1.0).abs() < 1e-5 && w.y.abs() < 1e-5 && w.z.abs() < 1e-5);
        let w = at(triangle[1]);
        assert!((w.y - 1.0).abs() < 1e-5 && w.x.abs() < 1e-5 && w.z.abs() < 1e-5);
        let w = at(triangle[2]);
        assert!((w.z - 1.0).abs() < 1e-5 && w.x.abs() < 1e-5 && w.y.abs() < 1e-5);
    }

    #[test]
    fn barycentric_outside_point_has_a_negative_weight() {
        let triangle = [IVec2::new(0, 0), IVec2::new(100, 0), IVec2::new(0, 100)];
        let w = barycentric(triangle, IVec2::new(90, 90));
        assert!(w.x < 0.0 || w.y < 0.0 || w.z < 0.0);
    }

    #[test]
    fn barycentric_degenerate_triangle_yields_sentinel() {
        // collinear points, zero area
        let triangle = [IVec2::new(0, 0), IVec2::new(50, 50), IVec2::new(100, 100)];
        let w = barycentric(triangle, IVec2::new(50, 50));
        assert_eq!(w, Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn draw_line_hits_both_endpoints_in_every_octant() {
        let center = IVec2::new(10, 10);
        let ends = [
            IVec2::new(19, 13),
            IVec2::new(13, 19),
            IVec2::new(7, 19),
            IVec2::new(1, 13),
            IVec2::new(1, 7),
            IVec2::new(7, 1),
            IVec2::new(13, 1),
            IVec2::new(19, 7),
        ];
        for end in ends {
            let mut renderer = Renderer::new(20, 20);
            renderer.draw_line(center, end, Color::WHITE);
            let fb = renderer.framebuffer();
            assert_eq!(
                fb.get_color(center.x as u32, center.y as u32),
                Some(Color::WHITE)
            );
            assert_eq!(
                fb.get_color(end.x as u32, end.y as u32),
                Some(Color::WHITE),
                "missing endpoint for {:?}",
                end
            );
            let dx = (end.x - center.x).abs() as usize;
            let dy = (end.y - center.y).abs() as usize;
            let lit = fb.colors().filter(|(_, _, c)| *c == Color::WHITE).count();
            assert_eq!(lit, dx.max(dy) + 1);
        }
    }

    #[test]
    fn draw_line_clips_against_the_canvas() {
        let mut renderer = Renderer::new(8, 8);
        renderer.draw_line(IVec2::new(-4, 3), IVec2::new(12, 3), Color::WHITE);
        let lit = renderer
            .framebuffer()
            .colors()
            .filter(|(_, _, c)| *c == Color::WHITE)
            .count();
        assert_eq!(lit, 8);
    }
}
