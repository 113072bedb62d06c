use harris_image::ErrorKind;

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to encode the JPEG image.
    #[error("Error with Jpeg encoding. {0}")]
    JpegEncodingError(#[from] jpeg_encoder::EncodingError),

    /// Error to create the image buffer.
    #[error("Failed to create image. {0}")]
    Image(#[from] harris_image::ImageError),

    /// Error when the channel count has no JPEG color type.
    #[error("JPEG supports 1 or 3 channels, got {0}")]
    UnsupportedChannelCount(usize),

    /// Error when a dimension does not fit in the JPEG header.
    #[error("JPEG dimensions are limited to 65535, got {0}x{1}")]
    DimensionsTooLarge(usize, usize),
}

impl IoError {
    /// Classify the error into its coarse [`ErrorKind`].
    ///
    /// Codec and file failures map to [`ErrorKind::FileAccess`]; buffer
    /// errors keep their own kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileDoesNotExist(_)
            | Self::FileError(_)
            | Self::JpegDecodingError(_)
            | Self::JpegEncodingError(_) => ErrorKind::FileAccess,
            Self::Image(e) => e.kind(),
            Self::UnsupportedChannelCount(_) | Self::DimensionsTooLarge(..) => {
                ErrorKind::InvalidInput
            }
        }
    }
}
