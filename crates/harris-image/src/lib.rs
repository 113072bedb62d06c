#![deny(missing_docs)]
//! Pixel buffer types for generating and manipulating raster images

/// image buffer representation for computer vision purposes.
pub mod buffer;

/// Error types for the image module.
pub mod error;

pub use crate::buffer::{ImageSize, PixelBuffer};
pub use crate::error::{ErrorKind, ImageError};
