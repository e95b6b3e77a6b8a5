use thiserror::Error;

/// Everything that can abort a render pass. Degenerate triangles are not
/// listed here on purpose: they are skipped inside the rasterizer.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RenderError {
    #[error("cannot normalize a vector with length ~0")]
    DegenerateVector,

    #[error("face {face} references an index outside the model arrays")]
    FaceIndexOutOfRange { face: usize },

    #[error("color channel value {value} is outside [0, 1]")]
    ColorRange { value: f32 },

    #[error("texture sample ({u}, {v}) is outside the [0, 1) domain")]
    SampleOutOfRange { u: f32, v: f32 },
}
