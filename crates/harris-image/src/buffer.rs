use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use harris_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An owning 2-D multi-channel buffer of `f32` samples.
///
/// Samples are stored contiguously in row-major, channel-interleaved order:
/// the sample at `(x, y, c)` lives at index `(y * width + x) * channels + c`.
/// The channel count is a runtime attribute because the detection pipeline
/// mixes single-channel and 3-channel buffers freely.
///
/// A buffer is either fully allocated (`data.len() == W*H*C`, all dimensions
/// positive) or empty (all dimensions zero, no store). There is no partially
/// allocated state. Cloning performs a deep copy of the pixel store; moving
/// transfers it.
///
/// The pixel accessors clamp out-of-range coordinates to the nearest valid
/// coordinate on each axis independently. This clamp-to-edge policy is the
/// buffer's border-extension semantics and every convolution in
/// `harris-imgproc` relies on it, which keeps the filter loops free of
/// explicit boundary handling.
///
/// # Examples
///
/// ```
/// use harris_image::{ImageSize, PixelBuffer};
///
/// let buf = PixelBuffer::alloc(ImageSize { width: 10, height: 20 }, 3).unwrap();
///
/// assert!(!buf.is_empty());
/// assert_eq!(buf.width(), 10);
/// assert_eq!(buf.height(), 20);
/// assert_eq!(buf.channels(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Create a new empty buffer with no pixel store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a buffer of the given size and channel count.
    ///
    /// All samples start at `0.0`, but callers must not rely on the initial
    /// contents; only the dimensions are part of the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if any dimension is zero and
    /// [`ImageError::OutOfMemory`] if the pixel store cannot be allocated.
    pub fn alloc(size: ImageSize, channels: usize) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 || channels == 0 {
            return Err(ImageError::InvalidDimensions(
                size.width,
                size.height,
                channels,
            ));
        }

        let len = size.width * size.height * channels;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ImageError::OutOfMemory(len))?;
        data.resize(len, 0.0);

        Ok(Self {
            width: size.width,
            height: size.height,
            channels,
            data,
        })
    }

    /// Create a buffer of the given size and channel count from existing data.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if any dimension is zero and
    /// [`ImageError::InvalidLength`] if the data length does not match the
    /// image size.
    pub fn from_vec(size: ImageSize, channels: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 || channels == 0 {
            return Err(ImageError::InvalidDimensions(
                size.width,
                size.height,
                channels,
            ));
        }

        let expected = size.width * size.height * channels;
        if data.len() != expected {
            return Err(ImageError::InvalidLength(data.len(), expected));
        }

        Ok(Self {
            width: size.width,
            height: size.height,
            channels,
            data,
        })
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the number of channels in the image.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height
    }

    /// Get the total number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff no pixel store is allocated.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Release the pixel store, leaving the buffer empty.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    #[inline]
    fn clamped_offset(&self, x: isize, y: isize, c: usize) -> usize {
        let x = (x.max(0) as usize).min(self.width - 1);
        let y = (y.max(0) as usize).min(self.height - 1);
        let c = c.min(self.channels - 1);
        (y * self.width + x) * self.channels + c
    }

    /// Read the sample at `(x, y, c)` with clamp-to-edge semantics.
    ///
    /// Out-of-range coordinates are clamped to the nearest valid coordinate
    /// on each axis independently, never rejected.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty; callers must check [`Self::is_empty`]
    /// first.
    #[inline]
    pub fn get_pixel(&self, x: isize, y: isize, c: usize) -> f32 {
        assert!(!self.is_empty(), "get_pixel on an empty buffer");
        self.data[self.clamped_offset(x, y, c)]
    }

    /// Write the sample at `(x, y, c)` with clamp-to-edge semantics.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty; callers must check [`Self::is_empty`]
    /// first.
    #[inline]
    pub fn set_pixel(&mut self, x: isize, y: isize, c: usize, value: f32) {
        assert!(!self.is_empty(), "set_pixel on an empty buffer");
        let offset = self.clamped_offset(x, y, c);
        self.data[offset] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn buffer_empty_by_default() {
        let buf = PixelBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.width(), 0);
        assert_eq!(buf.height(), 0);
        assert_eq!(buf.channels(), 0);
    }

    #[test]
    fn buffer_alloc_smoke() -> Result<(), ImageError> {
        let buf = PixelBuffer::alloc(
            ImageSize {
                width: 10,
                height: 20,
            },
            3,
        )?;
        assert!(!buf.is_empty());
        assert_eq!(buf.len(), 10 * 20 * 3);

        // every in-bounds sample reads back a defined value
        for y in 0..buf.height() as isize {
            for x in 0..buf.width() as isize {
                for c in 0..buf.channels() {
                    assert!(buf.get_pixel(x, y, c).is_finite());
                }
            }
        }
        Ok(())
    }

    #[test]
    fn buffer_alloc_rejects_zero_dimension() {
        for (w, h, c) in [(0, 5, 1), (5, 0, 1), (5, 5, 0)] {
            let err = PixelBuffer::alloc(ImageSize { width: w, height: h }, c).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn buffer_from_vec_length_mismatch() {
        let err = PixelBuffer::from_vec(
            ImageSize {
                width: 2,
                height: 2,
            },
            1,
            vec![0.0; 3],
        )
        .unwrap_err();
        assert!(matches!(err, ImageError::InvalidLength(3, 4)));
    }

    #[test]
    fn buffer_clamp_to_edge() -> Result<(), ImageError> {
        let mut buf = PixelBuffer::alloc(
            ImageSize {
                width: 3,
                height: 2,
            },
            2,
        )?;
        buf.set_pixel(0, 0, 0, 1.0);
        buf.set_pixel(2, 0, 0, 2.0);
        buf.set_pixel(0, 1, 0, 3.0);
        buf.set_pixel(2, 1, 1, 4.0);

        // each axis clamps independently to the nearest edge
        assert_eq!(buf.get_pixel(-5, 0, 0), buf.get_pixel(0, 0, 0));
        assert_eq!(buf.get_pixel(10, 0, 0), buf.get_pixel(2, 0, 0));
        assert_eq!(buf.get_pixel(0, -1, 0), buf.get_pixel(0, 0, 0));
        assert_eq!(buf.get_pixel(0, 7, 0), buf.get_pixel(0, 1, 0));
        assert_eq!(buf.get_pixel(2, 1, 9), buf.get_pixel(2, 1, 1));
        assert_eq!(buf.get_pixel(-1, 99, 0), buf.get_pixel(0, 1, 0));

        // writes clamp the same way
        buf.set_pixel(-3, -3, 0, 7.0);
        assert_eq!(buf.get_pixel(0, 0, 0), 7.0);
        Ok(())
    }

    #[test]
    fn buffer_clone_is_deep() -> Result<(), ImageError> {
        let mut buf = PixelBuffer::alloc(
            ImageSize {
                width: 2,
                height: 2,
            },
            1,
        )?;
        buf.set_pixel(1, 1, 0, 5.0);

        let copy = buf.clone();
        buf.set_pixel(1, 1, 0, 9.0);

        assert_eq!(copy.get_pixel(1, 1, 0), 5.0);
        assert_eq!(buf.get_pixel(1, 1, 0), 9.0);
        Ok(())
    }

    #[test]
    fn buffer_release() -> Result<(), ImageError> {
        let mut buf = PixelBuffer::alloc(
            ImageSize {
                width: 4,
                height: 4,
            },
            1,
        )?;
        buf.release();
        assert!(buf.is_empty());
        assert_eq!(buf.size().width, 0);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "get_pixel on an empty buffer")]
    fn buffer_get_pixel_empty_panics() {
        let buf = PixelBuffer::new();
        buf.get_pixel(0, 0, 0);
    }
}
