use thiserror::Error;

/// Failure surfaced by a resolution query.
///
/// Missing files, permission problems and unsupported codecs all land in
/// [`ResolutionError::Open`]; the backend's own message is kept as `reason`.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Failed to open video file: {path} ({reason})")]
    Open { path: String, reason: String },
}

impl ResolutionError {
    pub fn open(path: &str, reason: impl Into<String>) -> Self {
        Self::Open {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Path that could not be opened.
    pub fn path(&self) -> &str {
        match self {
            Self::Open { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolutionError>;
