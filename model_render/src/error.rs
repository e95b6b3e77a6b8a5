use thiserror::Error;

/// Failures on the way in or out of the renderer: unreadable sources,
/// codec trouble, or a mesh line that does not parse.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read input")]
    Io(#[from] std::io::Error),

    #[error("image codec failure")]
    Image(#[from] image::ImageError),

    #[error("line {line}: unparsable field {field:?}")]
    MalformedRecord { line: usize, field: String },

    #[error("line {line}: record is missing fields")]
    TruncatedRecord { line: usize },
}
