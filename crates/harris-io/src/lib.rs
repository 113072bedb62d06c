#![deny(missing_docs)]
//! JPEG read and write for the harris-rs corner detection library
//!
//! The codec boundary contract is `bytes on disk <-> in-memory pixel
//! buffer`: decoded samples are widened to `f32` in `[0, 255]` and encoding
//! rounds them back to `u8`. Single-channel buffers map to grayscale JPEGs,
//! 3-channel buffers to color; other channel counts are unsupported.

/// Error types for the io module.
pub mod error;

/// JPEG encoding and decoding.
pub mod jpeg;

pub use crate::error::IoError;
pub use crate::jpeg::{decode_image_jpeg, encode_image_jpeg, read_image_jpeg, write_image_jpeg};
