//! Operations to normalize images.
//!
//! The detection pipeline produces unbounded filter responses; min-max
//! normalization maps them into a fixed range (typically `[0, 255]`) before
//! thresholding or encoding.

use harris_image::{ImageError, PixelBuffer};
use rayon::prelude::*;

/// Find the per-channel minimum and maximum sample values of an image.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has no pixel store.
///
/// # Examples
///
/// ```
/// use harris_image::{ImageSize, PixelBuffer};
/// use harris_imgproc::normalize::find_min_max_per_channel;
///
/// let image = PixelBuffer::from_vec(
///     ImageSize { width: 2, height: 1 },
///     2,
///     vec![0.0, 10.0, 4.0, -2.0],
/// )
/// .unwrap();
///
/// let (min, max) = find_min_max_per_channel(&image).unwrap();
/// assert_eq!(min, vec![0.0, -2.0]);
/// assert_eq!(max, vec![4.0, 10.0]);
/// ```
pub fn find_min_max_per_channel(src: &PixelBuffer) -> Result<(Vec<f32>, Vec<f32>), ImageError> {
    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let channels = src.channels();
    let mut min = vec![f32::MAX; channels];
    let mut max = vec![f32::MIN; channels];

    for pixel in src.as_slice().chunks_exact(channels) {
        for (c, &value) in pixel.iter().enumerate() {
            if value < min[c] {
                min[c] = value;
            }
            if value > max[c] {
                max[c] = value;
            }
        }
    }

    Ok((min, max))
}

/// Linearly map each channel of an image into `[lower, upper]`.
///
/// The per-channel extrema are computed over the full image, then every
/// sample is mapped as
///
/// `(value - min) / (max - min) * (upper - lower) + lower`
///
/// A channel whose samples are all equal divides by zero and produces
/// non-finite output for that channel. This is the reference behavior and is
/// propagated deliberately rather than clamped; callers that need a defined
/// result for constant channels must check [`find_min_max_per_channel`]
/// first.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has no pixel store.
pub fn normalize_min_max(
    src: &PixelBuffer,
    lower: f32,
    upper: f32,
) -> Result<PixelBuffer, ImageError> {
    let (min, max) = find_min_max_per_channel(src)?;

    let channels = src.channels();
    let scale = min
        .iter()
        .zip(max.iter())
        .map(|(&lo, &hi)| (upper - lower) / (hi - lo))
        .collect::<Vec<f32>>();

    let mut dst = PixelBuffer::alloc(src.size(), channels)?;
    dst.as_slice_mut()
        .par_chunks_mut(channels)
        .zip(src.as_slice().par_chunks(channels))
        .for_each(|(dst_pixel, src_pixel)| {
            for (c, (d, &s)) in dst_pixel.iter_mut().zip(src_pixel.iter()).enumerate() {
                *d = (s - min[c]) * scale[c] + lower;
            }
        });

    Ok(dst)
}
