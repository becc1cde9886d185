pub mod resolution;
pub mod video;
