//! Feature detection module.
//!
//! Detectors are independent types sharing the [`FeatureDetector`]
//! capability rather than a common base type; the only state a detector may
//! carry is an optional [`DiagnosticSink`] for intermediate buffers.

use harris_image::{ImageError, PixelBuffer};

mod harris;
pub use harris::{HarrisDetector, HarrisParams};

/// A detected corner point in an image.
///
/// Coordinates are integer pixel positions. The detection result is ordered
/// by raster scan (row-major, increasing x within increasing y) and carries
/// no ranking by response strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Corner {
    /// The x-coordinate of the corner in the image.
    pub x: usize,
    /// The y-coordinate of the corner in the image.
    pub y: usize,
}

impl Corner {
    /// Creates a new corner at the given coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Corner { x, y }
    }
}

/// The capability shared by all feature detectors.
pub trait FeatureDetector {
    /// The detector-specific parameter set.
    type Params;

    /// Detect features on an image, in raster order.
    fn detect(&self, image: &PixelBuffer, params: &Self::Params)
        -> Result<Vec<Corner>, ImageError>;
}

/// The intermediate pipeline buffers a [`DiagnosticSink`] may receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticStage {
    /// The grayscale input to the gradient computation.
    Grayscale,
    /// The absolute horizontal gradient, normalized to `[0, 255]`.
    GradientX,
    /// The absolute vertical gradient, normalized to `[0, 255]`.
    GradientY,
    /// The corner response map, normalized to `[0, 255]`.
    Response,
}

impl DiagnosticStage {
    /// A short stable name, usable as a file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "gray",
            Self::GradientX => "sobel_x",
            Self::GradientY => "sobel_y",
            Self::Response => "response",
        }
    }
}

/// Receives intermediate buffers from a detector when diagnostics are
/// enabled.
///
/// Sinks are external collaborators: the detection result does not depend on
/// them and a failing sink must not fail the detection, so `emit` is
/// infallible from the detector's point of view.
pub trait DiagnosticSink {
    /// Called once per stage with the intermediate buffer.
    fn emit(&self, stage: DiagnosticStage, image: &PixelBuffer);
}
