use serde::Serialize;
use std::fmt;

/// Pixel dimensions of a video frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from backend metadata, which reports dimensions as floats.
    /// Fractions are truncated; negative and NaN values become 0.
    pub fn from_metadata(width: f64, height: f64) -> Self {
        Self {
            width: width as u32,
            height: height as u32,
        }
    }
}

impl From<Resolution> for (u32, u32) {
    fn from(res: Resolution) -> Self {
        (res.width, res.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_truncates_fractions() {
        assert_eq!(Resolution::from_metadata(1919.9, 1080.4), Resolution::new(1919, 1080));
    }

    #[test]
    fn test_metadata_coerces_invalid_to_zero() {
        assert_eq!(Resolution::from_metadata(-1.0, f64::NAN), Resolution::new(0, 0));
    }

    #[test]
    fn test_display_and_tuple() {
        let res = Resolution::new(640, 480);
        assert_eq!(res.to_string(), "640x480");
        assert_eq!(<(u32, u32)>::from(res), (640, 480));
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(Resolution::new(1280, 720)).unwrap();
        assert_eq!(json, serde_json::json!({ "width": 1280, "height": 720 }));
    }
}
