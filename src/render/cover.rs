use kurbo::{Rect, Size};

/// Compute the cover-fit source rectangle for drawing `image` into `target`.
///
/// The returned rectangle selects the portion of the image that fills the
/// target without distortion, cropping excess on exactly one axis: if the image
/// is relatively wider than the target it is cropped left/right keeping full
/// height, otherwise top/bottom keeping full width. The crop is centered.
/// Pixel-equivalent to CSS `object-fit: cover`; no easing or letterboxing.
///
/// Degenerate sizes (any dimension not strictly positive) fall back to the full
/// image rectangle.
pub fn cover_crop(target: Size, image: Size) -> Rect {
    if target.width <= 0.0 || target.height <= 0.0 || image.width <= 0.0 || image.height <= 0.0 {
        return Rect::new(0.0, 0.0, image.width.max(0.0), image.height.max(0.0));
    }

    let target_ratio = target.width / target.height;
    let image_ratio = image.width / image.height;

    if image_ratio > target_ratio {
        // Image relatively wider: crop left/right, keep full height.
        let sh = image.height;
        let sw = image.height * target_ratio;
        let sx = (image.width - sw) / 2.0;
        Rect::new(sx, 0.0, sx + sw, sh)
    } else {
        // Image relatively taller (or equal): crop top/bottom, keep full width.
        let sw = image.width;
        let sh = image.width / target_ratio;
        let sy = (image.height - sh) / 2.0;
        Rect::new(0.0, sy, sw, sy + sh)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cover.rs"]
mod tests;
