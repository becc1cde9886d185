//! Video frame dimensions from a file name token (`clip_1920x1080.mp4`) or,
//! when the name carries none, from the container's stream metadata.

pub mod core;
pub mod decoder;
pub mod error;

pub use crate::core::filename::{match_filename, FilenameMatch};
pub use crate::core::resolver::{get_resolution, ResolutionResolver};
pub use crate::decoder::resolution::Resolution;
pub use crate::decoder::video::{MediaBackend, MediaHandle, MediaProbe, OpenCvBackend};
pub use crate::error::ResolutionError;
