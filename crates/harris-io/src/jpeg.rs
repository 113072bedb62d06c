use std::{fs, path::Path};

use jpeg_encoder::{ColorType, Encoder};

use crate::error::IoError;
use harris_image::{ImageError, ImageSize, PixelBuffer};

fn color_type_for(channels: usize) -> Result<ColorType, IoError> {
    match channels {
        1 => Ok(ColorType::Luma),
        3 => Ok(ColorType::Rgb),
        other => Err(IoError::UnsupportedChannelCount(other)),
    }
}

/// The JPEG header stores dimensions as `u16`, so larger images cannot be
/// encoded without silent truncation.
fn jpeg_dimensions(image: &PixelBuffer) -> Result<(u16, u16), IoError> {
    if image.width() > u16::MAX as usize || image.height() > u16::MAX as usize {
        return Err(IoError::DimensionsTooLarge(image.width(), image.height()));
    }
    Ok((image.width() as u16, image.height() as u16))
}

/// Round a sample to `u8`, saturating outside `[0, 255]`.
#[inline]
fn sample_to_u8(v: f32) -> u8 {
    (v + 0.5) as u8
}

/// Decode a JPEG image from raw bytes into a pixel buffer.
///
/// Decoded `u8` samples are widened to `f32` in `[0, 255]`. Grayscale JPEGs
/// produce a single-channel buffer, color JPEGs a 3-channel buffer.
///
/// # Arguments
///
/// - `src` - Raw bytes of the jpeg file
pub fn decode_image_jpeg(src: &[u8]) -> Result<PixelBuffer, IoError> {
    let mut decoder = zune_jpeg::JpegDecoder::new(src);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    let channels = img_data.len() / (image_size.width * image_size.height).max(1);
    if channels != 1 && channels != 3 {
        return Err(IoError::UnsupportedChannelCount(channels));
    }

    let data = img_data.iter().map(|&v| v as f32).collect::<Vec<f32>>();
    Ok(PixelBuffer::from_vec(image_size, channels, data)?)
}

/// Encode a pixel buffer as JPEG bytes.
///
/// Samples are rounded (half up) and saturated to `u8`. A single-channel
/// buffer encodes as grayscale, a 3-channel buffer as color. Dimensions
/// above 65535 are rejected with [`IoError::DimensionsTooLarge`].
///
/// # Arguments
///
/// - `image` - The pixel buffer to encode
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn encode_image_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, IoError> {
    if image.is_empty() {
        return Err(IoError::Image(ImageError::EmptyImage));
    }
    let color_type = color_type_for(image.channels())?;
    let (width, height) = jpeg_dimensions(image)?;

    let pixels = image
        .as_slice()
        .iter()
        .map(|&v| sample_to_u8(v))
        .collect::<Vec<u8>>();

    let mut bytes = Vec::new();
    let encoder = Encoder::new(&mut bytes, quality);
    encoder.encode(&pixels, width, height, color_type)?;

    Ok(bytes)
}

/// Read a JPEG image from a file path.
///
/// # Arguments
///
/// - `file_path` - The path to the JPEG file.
pub fn read_image_jpeg(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    decode_image_jpeg(&jpeg_data)
}

/// Write a pixel buffer to a file path as JPEG.
///
/// # Arguments
///
/// - `file_path` - The path to write to.
/// - `image` - The pixel buffer to encode.
/// - `quality` - The quality of the JPEG encoding, range from 0 (lowest) to 100 (highest)
pub fn write_image_jpeg(
    file_path: impl AsRef<Path>,
    image: &PixelBuffer,
    quality: u8,
) -> Result<(), IoError> {
    if image.is_empty() {
        return Err(IoError::Image(ImageError::EmptyImage));
    }
    let color_type = color_type_for(image.channels())?;
    let (width, height) = jpeg_dimensions(image)?;

    let pixels = image
        .as_slice()
        .iter()
        .map(|&v| sample_to_u8(v))
        .collect::<Vec<u8>>();

    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(&pixels, width, height, color_type)?;

    Ok(())
}
