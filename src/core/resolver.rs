use log::debug;

use super::filename::match_filename;
use crate::decoder::resolution::Resolution;
use crate::decoder::video::{MediaBackend, MediaProbe, OpenCvBackend};
use crate::error::Result;

/// Resolves the dimensions of one video file.
///
/// The file name is tried first. Only when it carries no usable
/// `_WIDTHxHEIGHT` token is a [`MediaProbe`] created and the file opened.
pub struct ResolutionResolver<B: MediaBackend = OpenCvBackend> {
    path: String,
    backend: B,
    probe: Option<MediaProbe>,
}

impl ResolutionResolver<OpenCvBackend> {
    pub fn new(path: &str) -> Self {
        Self::with_backend(path, OpenCvBackend)
    }
}

impl<B: MediaBackend> ResolutionResolver<B> {
    pub fn with_backend(path: &str, backend: B) -> Self {
        Self {
            path: path.to_string(),
            backend,
            probe: None,
        }
    }

    pub fn get_resolution(&mut self) -> Result<Resolution> {
        if let Some(res) = match_filename(&self.path).resolution() {
            return Ok(res);
        }

        debug!("Falling back to probing {}", self.path);
        let path = &self.path;
        let probe = self.probe.get_or_insert_with(|| MediaProbe::new(path));
        probe.get_resolution(&self.backend)
    }

    #[cfg(test)]
    fn has_probe(&self) -> bool {
        self.probe.is_some()
    }
}

/// Width and height of the video at `path`.
///
/// Returns [`crate::ResolutionError::Open`] when the name carries no
/// resolution token and the file cannot be opened as media.
pub fn get_resolution(path: &str) -> Result<Resolution> {
    ResolutionResolver::new(path).get_resolution()
}
