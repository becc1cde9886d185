use log::{debug, warn};
use opencv::{
    prelude::*,
    videoio,
};

use super::resolution::Resolution;
use crate::error::{ResolutionError, Result};

/// Opens media containers for dimension queries.
pub trait MediaBackend {
    type Handle: MediaHandle;

    /// Open `path`. Any failure (missing file, permissions, unknown
    /// container) is reported as [`ResolutionError::Open`].
    fn open(&self, path: &str) -> Result<Self::Handle>;
}

/// An opened container. Dropping it releases the underlying resource.
pub trait MediaHandle {
    fn frame_size(&mut self) -> Result<Resolution>;
}

/// Backend built on OpenCV `videoio`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenCvBackend;

pub struct VideoHandle {
    capture: videoio::VideoCapture,
    path: String,
}

impl MediaBackend for OpenCvBackend {
    type Handle = VideoHandle;

    fn open(&self, path: &str) -> Result<VideoHandle> {
        // CAP_ANY lets OpenCV pick the backend for the platform
        let capture = videoio::VideoCapture::from_file(path, videoio::CAP_ANY)
            .map_err(|e| ResolutionError::open(path, e.to_string()))?;

        let opened = capture
            .is_opened()
            .map_err(|e| ResolutionError::open(path, e.to_string()))?;
        if !opened {
            warn!("OpenCV could not open {}", path);
            return Err(ResolutionError::open(path, "not a readable media container"));
        }

        debug!("OpenCV VideoCapture opened {}", path);
        Ok(VideoHandle {
            capture,
            path: path.to_string(),
        })
    }
}

impl MediaHandle for VideoHandle {
    fn frame_size(&mut self) -> Result<Resolution> {
        let width = self
            .capture
            .get(videoio::CAP_PROP_FRAME_WIDTH)
            .map_err(|e| ResolutionError::open(&self.path, e.to_string()))?;
        let height = self
            .capture
            .get(videoio::CAP_PROP_FRAME_HEIGHT)
            .map_err(|e| ResolutionError::open(&self.path, e.to_string()))?;
        Ok(Resolution::from_metadata(width, height))
    }
}

impl Drop for VideoHandle {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            warn!("Failed to release capture for {}: {}", self.path, e);
        }
    }
}

/// Reads dimensions from the file itself. Each query opens a fresh handle
/// and drops it before returning.
#[derive(Debug)]
pub struct MediaProbe {
    path: String,
}

impl MediaProbe {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn get_resolution<B: MediaBackend>(&self, backend: &B) -> Result<Resolution> {
        let mut handle = backend.open(&self.path)?;
        let resolution = handle.frame_size()?;
        debug!("Probed {}: {}", self.path, resolution);
        Ok(resolution)
    }
}
