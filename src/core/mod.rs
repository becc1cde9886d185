pub mod filename;
pub mod resolver;
