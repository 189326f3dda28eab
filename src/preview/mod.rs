pub mod formatter;

pub use formatter::*;

#[cfg(feature = "image-export")]
pub mod image;
