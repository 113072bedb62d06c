use harris_image::ImageError;

/// Sobel smoothing tap, applied on the axis orthogonal to the derivative.
pub const SOBEL_SMOOTH: [f32; 3] = [1.0, 2.0, 1.0];

/// Sobel central-difference tap, applied on the derivative axis.
pub const SOBEL_DIFF: [f32; 3] = [-1.0, 0.0, 1.0];

/// A 1-D convolution kernel with an explicit center tap.
///
/// Kernels are immutable after construction. The center index is always
/// `len / 2`, which is the middle tap for the odd-length kernels produced by
/// [`gaussian_kernel_1d`] and the fixed Sobel taps.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel1d {
    taps: Vec<f32>,
    center: usize,
}

impl Kernel1d {
    /// Create a kernel from raw taps, center at `len / 2`.
    pub fn from_taps(taps: &[f32]) -> Self {
        Self {
            taps: taps.to_vec(),
            center: taps.len() / 2,
        }
    }

    /// The kernel taps.
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// The center tap index.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The number of taps.
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// True iff the kernel has no taps.
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

/// Create a normalized 1-D Gaussian kernel for the given sigma.
///
/// The kernel length is `ceil(6 * sigma)`, incremented to the next odd number
/// when even, with the center at `len / 2`. Tap `i` at offset `d = i - center`
/// is `exp(-d^2 / (2 * sigma^2))`, and the taps are normalized to sum to 1.0.
/// The 6-sigma half-width and odd-length rule are load-bearing: they must
/// match the reference output sample for sample.
///
/// # Errors
///
/// Returns [`ImageError::InvalidSigma`] if `sigma` is not a positive finite
/// number.
///
/// # Examples
///
/// ```
/// use harris_imgproc::filter::kernels::gaussian_kernel_1d;
///
/// let kernel = gaussian_kernel_1d(0.5).unwrap();
/// assert_eq!(kernel.len(), 3);
/// assert_eq!(kernel.center(), 1);
/// ```
pub fn gaussian_kernel_1d(sigma: f32) -> Result<Kernel1d, ImageError> {
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let mut size = (6.0 * sigma).ceil() as usize;
    if size % 2 == 0 {
        size += 1;
    }
    let center = size / 2;

    let sigma_sq = sigma * sigma;
    let mut taps = Vec::with_capacity(size);
    for i in 0..size {
        let d = i as f32 - center as f32;
        taps.push((-(d * d) / (2.0 * sigma_sq)).exp());
    }

    let sum = taps.iter().sum::<f32>();
    taps.iter_mut().for_each(|t| *t /= sum);

    Ok(Kernel1d { taps, center })
}

/// The fixed 3-tap Sobel kernel pair as `(smooth, derivative)`.
pub fn sobel_kernel_1d() -> (Kernel1d, Kernel1d) {
    (
        Kernel1d::from_taps(&SOBEL_SMOOTH),
        Kernel1d::from_taps(&SOBEL_DIFF),
    )
}
