use crate::config::ParamName;
use crate::equation::Equation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown equation `{0}` (expected one of paraboloid, sphere, ellipsoid, hyperboloid, plane)")]
    UnknownEquation(String),
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
    /// Input for a parameter that has no slider in the current set.
    #[error("parameter `{name}` has no slider for {equation}")]
    Unbound { name: ParamName, equation: Equation },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("figure serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
