//! Filter operations
//!
//! This module provides the two convolution primitives the corner detection
//! pipeline is built from: the parametric odd-length Gaussian kernel and the
//! fixed 3-tap Sobel gradient pair. They are kept as two distinct explicit
//! algorithms rather than one generic convolution framework because their
//! sizing rules genuinely differ.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

pub use kernels::Kernel1d;
