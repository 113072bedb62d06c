/// Coarse error classification surfaced at the API boundary.
///
/// Every concrete error maps to one of these kinds via [`ImageError::kind`].
/// Callers that only care about the failure class (retry with different
/// parameters, abort, log) can match on the kind instead of the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on the input was violated.
    InvalidInput,
    /// The pixel store could not be allocated.
    OutOfMemory,
    /// An I/O failure at the codec boundary.
    FileAccess,
}

/// An error type for image buffer and filter operations.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when a dimension of the requested buffer is zero.
    #[error("Invalid image dimensions {0}x{1}x{2}")]
    InvalidDimensions(usize, usize, usize),

    /// Error when the provided data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidLength(usize, usize),

    /// Error when an operation requires 1 or 3 channels.
    #[error("Image must have 1 or 3 channels, got {0}")]
    UnsupportedChannelCount(usize),

    /// Error when an operation requires a non-empty image.
    #[error("Image data is empty")]
    EmptyImage,

    /// Error when a Gaussian sigma is not a positive finite number.
    #[error("Sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),

    /// Error when the pixel store allocation fails.
    #[error("Failed to allocate pixel storage for {0} samples")]
    OutOfMemory(usize),
}

impl ImageError {
    /// Classify the error into its coarse [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensions(..)
            | Self::InvalidLength(..)
            | Self::UnsupportedChannelCount(..)
            | Self::EmptyImage
            | Self::InvalidSigma(..) => ErrorKind::InvalidInput,
            Self::OutOfMemory(..) => ErrorKind::OutOfMemory,
        }
    }
}
