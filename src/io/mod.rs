pub mod readme_read;
pub mod target;
