use thiserror::Error;

/// Result type alias for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The array element type is neither `f64` nor `f32`
    #[error("unsupported npy element type: {0}")]
    Npy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a two-dimensional coefficient grid, got shape {0:?}")]
    Shape(Vec<u64>),

    /// A grid dimension does not fit in the `i32` coordinates of a result
    #[error("grid dimension {0} exceeds the coordinate range")]
    CoordinateOverflow(u64),
}
