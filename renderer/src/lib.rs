pub mod renderer;
pub use renderer::*;

pub mod math_prelude {
    pub use glam::{IVec2, Vec2, Vec3};
}
