use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::decoder::resolution::Resolution;

lazy_static! {
    // Whole-path match. The greedy prefix makes the rightmost `_WxH` token win.
    // Neither side may cross a line terminator (\n, \r, U+2028, U+2029).
    static ref RESOLUTION_TOKEN: Regex = Regex::new(
        r"^[^\n\r\x{2028}\x{2029}]*_([0-9]+)x([0-9]+)[^\n\r\x{2028}\x{2029}]*$"
    )
    .unwrap();
}

// Dimensions are capped at `i32::MAX`; anything larger is treated as noise.
fn parse_dimension(digits: &str) -> Option<u32> {
    digits.parse::<i32>().ok().and_then(|v| u32::try_from(v).ok())
}

/// Outcome of reading a resolution out of a file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilenameMatch {
    Matched(Resolution),
    NoMatch,
}

impl FilenameMatch {
    pub(crate) fn resolution(self) -> Option<Resolution> {
        match self {
            FilenameMatch::Matched(res) => Some(res),
            FilenameMatch::NoMatch => None,
        }
    }
}

/// Extract `WIDTHxHEIGHT` from a path such as `clip_1920x1080_final.mp4`.
///
/// Pure string work; the filesystem is never consulted. Digit groups above
/// `i32::MAX` count as no match.
pub fn match_filename(path: &str) -> FilenameMatch {
    let Some(caps) = RESOLUTION_TOKEN.captures(path) else {
        debug!("No resolution token in {}", path);
        return FilenameMatch::NoMatch;
    };

    match (parse_dimension(&caps[1]), parse_dimension(&caps[2])) {
        (Some(width), Some(height)) => {
            let res = Resolution::new(width, height);
            debug!("Resolution {} taken from file name {}", res, path);
            FilenameMatch::Matched(res)
        }
        _ => {
            debug!("Resolution token in {} is out of range, ignoring it", path);
            FilenameMatch::NoMatch
        }
    }
}
