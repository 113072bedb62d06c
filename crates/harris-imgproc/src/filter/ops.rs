use harris_image::{ImageError, PixelBuffer};
use rayon::prelude::*;

use super::kernels::{self, Kernel1d};

/// Convolve every row with a 1-D kernel, per channel.
///
/// Border samples use the buffer's clamp-to-edge accessors, so no explicit
/// padding is needed. Destination rows are disjoint, which makes the
/// row-parallel split safe while the source is only read.
fn convolve_rows(src: &PixelBuffer, kernel: &Kernel1d) -> Result<PixelBuffer, ImageError> {
    let mut dst = PixelBuffer::alloc(src.size(), src.channels())?;

    let cols = src.cols();
    let channels = src.channels();
    let center = kernel.center() as isize;
    let taps = kernel.taps();

    dst.as_slice_mut()
        .par_chunks_mut(cols * channels)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for x in 0..cols {
                for c in 0..channels {
                    let mut acc = 0.0f32;
                    for (k, &tap) in taps.iter().enumerate() {
                        acc += src.get_pixel(x as isize + k as isize - center, y as isize, c) * tap;
                    }
                    dst_row[x * channels + c] = acc;
                }
            }
        });

    Ok(dst)
}

/// Convolve every column with a 1-D kernel, per channel.
fn convolve_cols(src: &PixelBuffer, kernel: &Kernel1d) -> Result<PixelBuffer, ImageError> {
    let mut dst = PixelBuffer::alloc(src.size(), src.channels())?;

    let cols = src.cols();
    let channels = src.channels();
    let center = kernel.center() as isize;
    let taps = kernel.taps();

    dst.as_slice_mut()
        .par_chunks_mut(cols * channels)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for x in 0..cols {
                for c in 0..channels {
                    let mut acc = 0.0f32;
                    for (k, &tap) in taps.iter().enumerate() {
                        acc += src.get_pixel(x as isize, y as isize + k as isize - center, c) * tap;
                    }
                    dst_row[x * channels + c] = acc;
                }
            }
        });

    Ok(dst)
}

/// Blur an image with a separable Gaussian filter.
///
/// The kernel is built from `sigma` by [`kernels::gaussian_kernel_1d`] and
/// applied as a full-width horizontal pass followed by a full-height vertical
/// pass on the intermediate, per channel independently.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has no pixel store and
/// [`ImageError::InvalidSigma`] if `sigma` is not positive.
///
/// # Examples
///
/// ```
/// use harris_image::{ImageSize, PixelBuffer};
/// use harris_imgproc::filter::gaussian_blur;
///
/// let img = PixelBuffer::alloc(ImageSize { width: 16, height: 16 }, 1).unwrap();
/// let blurred = gaussian_blur(&img, 1.5).unwrap();
/// assert_eq!(blurred.size(), img.size());
/// ```
pub fn gaussian_blur(src: &PixelBuffer, sigma: f32) -> Result<PixelBuffer, ImageError> {
    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let kernel = kernels::gaussian_kernel_1d(sigma)?;
    log::debug!("gaussian blur kernel size: {}", kernel.len());

    let horizontal = convolve_rows(src, &kernel)?;
    convolve_cols(&horizontal, &kernel)
}

/// Compute the Sobel gradient pair `(dx, dy)` of an image.
///
/// Uses the fixed 3-tap separable kernels, smoothing `[1, 2, 1]` and central
/// difference `[-1, 0, 1]`: a vertical pass over the source followed by a
/// horizontal pass on the intermediates, per channel. `dx` is the horizontal
/// derivative (vertical smooth, horizontal difference) and `dy` the vertical
/// derivative (vertical difference, horizontal smooth).
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `src` has no pixel store.
pub fn sobel(src: &PixelBuffer) -> Result<(PixelBuffer, PixelBuffer), ImageError> {
    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let (smooth, diff) = kernels::sobel_kernel_1d();

    let smoothed_v = convolve_cols(src, &smooth)?;
    let derived_v = convolve_cols(src, &diff)?;

    let dx = convolve_rows(&smoothed_v, &diff)?;
    let dy = convolve_rows(&derived_v, &smooth)?;

    Ok((dx, dy))
}
