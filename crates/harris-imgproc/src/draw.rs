use harris_image::PixelBuffer;

/// Helper to write one pixel's color, skipping out-of-bounds coordinates.
///
/// On a 3-channel buffer the full color is written; on a single-channel
/// buffer only `color[0]` is used. Other channel counts are left untouched.
#[inline]
fn put_pixel(img: &mut PixelBuffer, x: i64, y: i64, color: [f32; 3]) {
    if x < 0 || x >= img.cols() as i64 || y < 0 || y >= img.rows() as i64 {
        return;
    }
    match img.channels() {
        3 => {
            for (c, &v) in color.iter().enumerate() {
                img.set_pixel(x as isize, y as isize, c, v);
            }
        }
        1 => img.set_pixel(x as isize, y as isize, 0, color[0]),
        _ => {}
    }
}

/// Draw a filled diamond marker centered at `(x, y)` inplace.
///
/// The marker covers the pixels with Manhattan distance at most `size / 2`
/// from the center; parts falling outside the image are skipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `x`, `y` - The marker center.
/// * `color` - The marker color; `color[0]` is used on grayscale images.
/// * `size` - The marker diameter in pixels.
pub fn draw_point(img: &mut PixelBuffer, x: i64, y: i64, color: [f32; 3], size: usize) {
    let half = (size / 2) as i64;
    for i in (x - half)..=(x + half) {
        for j in (y - half)..=(y + half) {
            if (i - x).abs() + (j - y).abs() > half {
                continue;
            }
            put_pixel(img, i, j, color);
        }
    }
}

/// Helper to write one pixel's color through the clamping accessors, so
/// out-of-bounds coordinates land on the nearest edge pixel.
#[inline]
fn put_pixel_clamped(img: &mut PixelBuffer, x: i64, y: i64, color: [f32; 3]) {
    match img.channels() {
        3 => {
            for (c, &v) in color.iter().enumerate() {
                img.set_pixel(x as isize, y as isize, c, v);
            }
        }
        1 => img.set_pixel(x as isize, y as isize, 0, color[0]),
        _ => {}
    }
}

/// Draw a line from `p0` to `p1` inplace by sampling along the x axis.
///
/// The endpoints are swapped so that x increases; a vertical segment
/// (equal x coordinates) draws nothing, matching the x-major sampling.
/// Samples falling outside the image clamp to the nearest edge pixel, so a
/// steep line running off-image paints along the border.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The line color; `color[0]` is used on grayscale images.
pub fn draw_line(img: &mut PixelBuffer, p0: (i64, i64), p1: (i64, i64), color: [f32; 3]) {
    if img.is_empty() {
        return;
    }
    let ((x0, y0), (x1, y1)) = if p1.0 < p0.0 { (p1, p0) } else { (p0, p1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    for x in x0..x1 {
        let y = y0 + dy * (x - x0) / dx;
        put_pixel_clamped(img, x, y, color);
    }
}
