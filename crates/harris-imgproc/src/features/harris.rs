use harris_image::{ImageError, PixelBuffer};

use super::{Corner, DiagnosticSink, DiagnosticStage, FeatureDetector};
use crate::color::gray_from_rgb;
use crate::filter::{gaussian_blur, sobel};
use crate::normalize::normalize_min_max;

/// Parameters for the Harris corner detector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarrisParams {
    /// Standard deviation of the Gaussian window that aggregates the
    /// structure tensor. Must be positive.
    pub sigma: f32,
    /// The response-function constant, typically in `0.04..=0.06`.
    pub k: f32,
    /// Cutoff on the response map after normalization to `[0, 255]`.
    pub threshold: f32,
}

impl Default for HarrisParams {
    fn default() -> Self {
        Self {
            sigma: 2.0,
            k: 0.04,
            threshold: 200.0,
        }
    }
}

/// Harris corner detector.
///
/// A pure pipeline over one input image and one parameter set: grayscale
/// conversion, Sobel gradients, windowed structure tensor, corner response
/// `det - k * trace^2`, normalization to `[0, 255]` and threshold
/// extraction. Any failing step aborts the whole detection and surfaces the
/// originating error; no partial result is returned.
///
/// An optional [`DiagnosticSink`] receives the intermediate buffers; it has
/// no effect on the detection result.
///
/// # Examples
///
/// ```
/// use harris_image::{ImageSize, PixelBuffer};
/// use harris_imgproc::features::{FeatureDetector, HarrisDetector, HarrisParams};
///
/// let image = PixelBuffer::alloc(ImageSize { width: 32, height: 32 }, 1).unwrap();
/// let corners = HarrisDetector::new()
///     .detect(&image, &HarrisParams::default())
///     .unwrap();
/// // a flat image has no corners
/// assert!(corners.is_empty());
/// ```
#[derive(Default)]
pub struct HarrisDetector {
    diagnostics: Option<Box<dyn DiagnosticSink>>,
}

impl HarrisDetector {
    /// Create a detector without diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sink that receives the intermediate pipeline buffers.
    pub fn with_diagnostics(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    fn emit_diagnostics(
        &self,
        gray: &PixelBuffer,
        dx: &PixelBuffer,
        dy: &PixelBuffer,
        response: &PixelBuffer,
    ) -> Result<(), ImageError> {
        let Some(sink) = &self.diagnostics else {
            return Ok(());
        };

        sink.emit(DiagnosticStage::Grayscale, gray);

        // gradients are signed; visualize their normalized magnitudes
        for (stage, gradient) in [(DiagnosticStage::GradientX, dx), (DiagnosticStage::GradientY, dy)]
        {
            let mut magnitude = gradient.clone();
            magnitude.as_slice_mut().iter_mut().for_each(|v| *v = v.abs());
            sink.emit(stage, &normalize_min_max(&magnitude, 0.0, 255.0)?);
        }

        sink.emit(DiagnosticStage::Response, response);
        Ok(())
    }
}

impl FeatureDetector for HarrisDetector {
    type Params = HarrisParams;

    fn detect(
        &self,
        image: &PixelBuffer,
        params: &HarrisParams,
    ) -> Result<Vec<Corner>, ImageError> {
        if image.is_empty() {
            return Err(ImageError::EmptyImage);
        }

        let gray = gray_from_rgb(image)?;
        let (dx, dy) = sobel(&gray)?;

        // per-pixel gradient products: (dx^2, dx*dy, dy^2)
        let mut tensor = PixelBuffer::alloc(gray.size(), 3)?;
        tensor
            .as_slice_mut()
            .chunks_exact_mut(3)
            .zip(dx.as_slice().iter().zip(dy.as_slice().iter()))
            .for_each(|(products, (&gx, &gy))| {
                products[0] = gx * gx;
                products[1] = gx * gy;
                products[2] = gy * gy;
            });

        // windowed second-moment aggregation
        let windowed = gaussian_blur(&tensor, params.sigma)?;

        let mut response = PixelBuffer::alloc(gray.size(), 1)?;
        response
            .as_slice_mut()
            .iter_mut()
            .zip(windowed.as_slice().chunks_exact(3))
            .for_each(|(r, h)| {
                let (h11, h12, h22) = (h[0], h[1], h[2]);
                let det = h11 * h22 - h12 * h12;
                let trace = h11 + h22;
                *r = det - params.k * trace * trace;
            });

        let normalized = normalize_min_max(&response, 0.0, 255.0)?;

        let width = normalized.width();
        let mut corners = Vec::new();
        for (i, &r) in normalized.as_slice().iter().enumerate() {
            if r > params.threshold {
                corners.push(Corner::new(i % width, i / width));
            }
        }

        self.emit_diagnostics(&gray, &dx, &dy, &normalized)?;

        Ok(corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harris_image::{ErrorKind, ImageSize};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A 50x50 single-channel image with a white filled quadrant in the top
    /// left, leaving one sharp corner at (25, 25).
    fn quadrant_image() -> PixelBuffer {
        let (width, height) = (50, 50);
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(if x < 25 && y < 25 { 255.0 } else { 0.0 });
            }
        }
        PixelBuffer::from_vec(ImageSize { width, height }, 1, data).unwrap()
    }

    #[test]
    fn flat_image_has_no_corners() -> Result<(), ImageError> {
        let image = PixelBuffer::from_vec(
            ImageSize {
                width: 50,
                height: 50,
            },
            1,
            vec![128.0; 50 * 50],
        )?;

        let corners = HarrisDetector::new().detect(&image, &HarrisParams::default())?;
        assert!(corners.is_empty());
        Ok(())
    }

    #[test]
    fn quadrant_corner_is_detected() -> Result<(), ImageError> {
        let params = HarrisParams {
            sigma: 2.0,
            k: 0.04,
            threshold: 150.0,
        };

        let corners = HarrisDetector::new().detect(&quadrant_image(), &params)?;
        assert!(!corners.is_empty());

        let near_corner = |c: &Corner, radius: i64| {
            (c.x as i64 - 25).abs() <= radius && (c.y as i64 - 25).abs() <= radius
        };
        assert!(corners.iter().any(|c| near_corner(c, 6)));
        assert!(corners.iter().all(|c| near_corner(c, 10)));
        Ok(())
    }

    #[test]
    fn corners_come_in_raster_order() -> Result<(), ImageError> {
        let corners = HarrisDetector::new().detect(
            &quadrant_image(),
            &HarrisParams {
                threshold: 150.0,
                ..Default::default()
            },
        )?;

        for pair in corners.windows(2) {
            assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
        }
        Ok(())
    }

    #[test]
    fn rgb_input_is_supported() -> Result<(), ImageError> {
        let gray = quadrant_image();
        let rgb = crate::color::rgb_from_gray(&gray)?;

        let params = HarrisParams {
            threshold: 150.0,
            ..Default::default()
        };
        let from_rgb = HarrisDetector::new().detect(&rgb, &params)?;
        let from_gray = HarrisDetector::new().detect(&gray, &params)?;
        assert!(!from_rgb.is_empty());

        // the gray weights sum to 1.03, so the replicated image is a uniform
        // scaling of the gray one; normalization cancels the scale up to
        // floating point, leaving the detections agreeing to a pixel or two
        let close = |a: &Corner, b: &Corner| a.x.abs_diff(b.x) <= 2 && a.y.abs_diff(b.y) <= 2;
        for c in &from_rgb {
            assert!(from_gray.iter().any(|g| close(c, g)));
        }
        Ok(())
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = HarrisDetector::new()
            .detect(&PixelBuffer::new(), &HarrisParams::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn bad_sigma_propagates_from_blur() {
        let err = HarrisDetector::new()
            .detect(
                &quadrant_image(),
                &HarrisParams {
                    sigma: -1.0,
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ImageError::InvalidSigma(_)));
    }

    #[test]
    fn diagnostics_receive_all_stages() -> Result<(), ImageError> {
        struct Recorder(Rc<RefCell<Vec<DiagnosticStage>>>);

        impl DiagnosticSink for Recorder {
            fn emit(&self, stage: DiagnosticStage, image: &PixelBuffer) {
                assert!(!image.is_empty());
                self.0.borrow_mut().push(stage);
            }
        }

        let stages = Rc::new(RefCell::new(Vec::new()));
        let detector =
            HarrisDetector::new().with_diagnostics(Box::new(Recorder(Rc::clone(&stages))));
        let corners = detector.detect(&quadrant_image(), &HarrisParams::default())?;

        assert_eq!(
            stages.borrow().as_slice(),
            &[
                DiagnosticStage::Grayscale,
                DiagnosticStage::GradientX,
                DiagnosticStage::GradientY,
                DiagnosticStage::Response,
            ]
        );

        // the sink must not change the detection result
        let without = HarrisDetector::new().detect(&quadrant_image(), &HarrisParams::default())?;
        assert_eq!(corners, without);
        Ok(())
    }
}
