pub mod cache;
pub mod tool;
