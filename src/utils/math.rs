//! # Drawing Mathematics
//!
//! Interpolation helpers used by gradients and effects.

use image::Rgba;

/// Linearly interpolates between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolates each channel of two colors, truncating like an integer cast.
///
/// # Examples
///
/// ```
/// use barberbrawl::utils::lerp_color;
/// use image::Rgba;
///
/// let mid = lerp_color(Rgba([0, 0, 0, 255]), Rgba([200, 100, 50, 255]), 0.5);
/// assert_eq!(mid, Rgba([100, 50, 25, 255]));
/// ```
pub fn lerp_color(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for (i, channel) in out.iter_mut().enumerate() {
        *channel = lerp(a.0[i] as f32, b.0[i] as f32, t) as u8;
    }
    Rgba(out)
}

/// Hermite smoothstep between two edges.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Scales an alpha value, saturating at the channel bounds.
pub fn scale_alpha(alpha: u8, factor: f32) -> u8 {
    (alpha as f32 * factor).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn test_lerp_color_clamps_t() {
        let a = Rgba([255, 215, 90, 255]);
        let b = Rgba([200, 150, 60, 255]);
        assert_eq!(lerp_color(a, b, -1.0), a);
        assert_eq!(lerp_color(a, b, 2.0), b);
    }

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.5), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // Degenerate edges behave like a step
        assert_eq!(smoothstep(1.0, 1.0, 0.5), 0.0);
        assert_eq!(smoothstep(1.0, 1.0, 1.5), 1.0);
    }

    #[test]
    fn test_scale_alpha_saturates() {
        assert_eq!(scale_alpha(200, 2.0), 255);
        assert_eq!(scale_alpha(200, 0.5), 100);
        assert_eq!(scale_alpha(200, -1.0), 0);
    }
}
