#![deny(missing_docs)]
//! Harris corner detection top-level crate
//!
//! Re-exports the member crates: [`image`] for the pixel buffer, [`imgproc`]
//! for filters and the detector, and [`io`] for the JPEG codec boundary.

#[doc(inline)]
pub use harris_image as image;

#[doc(inline)]
pub use harris_imgproc as imgproc;

#[doc(inline)]
pub use harris_io as io;
