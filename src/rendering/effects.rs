//! # Visual Effects
//!
//! Particle scatter, glows and full-frame post effects layered on top of the
//! scene geometry.

use super::{palette, rgba, Canvas, Color, Rect, Typeface};
use crate::utils::{scale_alpha, smoothstep};
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::PI;

/// Parameters of an electric spark burst.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkBurst {
    /// Center of the burst
    pub center: (f32, f32),
    /// Number of particles
    pub count: usize,
    /// Maximum distance from the center
    pub radius: f32,
    /// Vertical squash applied to particle offsets
    pub squash: f32,
    /// Particle color (alpha is randomized per particle)
    pub color: Color,
}

impl SparkBurst {
    /// Electric-blue burst around a point.
    pub fn electric(center: (f32, f32), count: usize) -> Self {
        Self {
            center,
            count,
            radius: 140.0,
            squash: 0.6,
            color: palette::ELECTRIC_BLUE,
        }
    }
}

/// Scatters spark particles on a separate layer, softens it and composites it.
///
/// Particle distance from the center is `sqrt(u) * radius`, which spreads
/// particles evenly over the disc instead of bunching them in the middle.
pub fn spark_scatter(canvas: &mut Canvas, rng: &mut StdRng, burst: &SparkBurst) {
    let mut layer = canvas.layer();
    for _ in 0..burst.count {
        let angle = rng.gen::<f32>() * 2.0 * PI;
        let distance = rng.gen::<f32>().sqrt() * burst.radius;
        let x = (burst.center.0 + angle.cos() * distance).trunc();
        let y = (burst.center.1 + angle.sin() * distance * burst.squash).trunc();
        let size = rng.gen_range(1..6) as f32;
        let brightness = 180 + rng.gen_range(0..75u8);
        let color = rgba(burst.color.0[0], burst.color.0[1], burst.color.0[2], brightness);
        layer.fill_ellipse(Rect::new(x - size, y - size, x + size, y + size), color);
    }
    canvas.composite(&layer.blurred(1.0));
}

/// Soft colored light: concentric translucent discs blurred by half the radius.
pub fn glow(canvas: &mut Canvas, center: (f32, f32), radius: f32, color: Color, intensity: f32) {
    if radius <= 0.0 {
        return;
    }
    let mut layer = canvas.layer();
    let step = (radius / 6.0).max(1.0);
    let mut r = radius;
    while r > 0.0 {
        let alpha = (255.0 * (r / radius) * 0.18 * intensity).clamp(0.0, 255.0) as u8;
        layer.fill_ellipse(Rect::circle(center, r), rgba(color.0[0], color.0[1], color.0[2], alpha));
        r -= step;
    }
    canvas.composite(&layer.blurred(radius / 2.0));
}

/// Darkens every `spacing`-th row, imitating a CRT.
pub fn scanlines(canvas: &mut Canvas, spacing: u32, alpha: u8) {
    let spacing = spacing.max(1);
    let width = canvas.width() as i32;
    for y in (0..canvas.height()).step_by(spacing as usize) {
        canvas.blend_span(y as i32, 0, width, rgba(0, 0, 0, alpha));
    }
}

/// Radial darkening toward the corners.
///
/// `strength` is the fraction of brightness removed at the far corners; the
/// central ellipse is left untouched.
pub fn vignette(canvas: &mut Canvas, strength: f32) {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    if w == 0.0 || h == 0.0 {
        return;
    }
    let strength = strength.clamp(0.0, 1.0);
    canvas.map_pixels(|x, y, px| {
        let dx = (x as f32 + 0.5) / w * 2.0 - 1.0;
        let dy = (y as f32 + 0.5) / h * 2.0 - 1.0;
        let distance = (dx * dx + dy * dy).sqrt() / std::f32::consts::SQRT_2;
        let factor = 1.0 - strength * smoothstep(0.45, 1.0, distance);
        let mut out = px;
        for channel in out.0.iter_mut().take(3) {
            *channel = (*channel as f32 * factor) as u8;
        }
        out
    });
}

/// Streaky Perlin-noise grain, stretched horizontally like wood planks.
pub fn grain(canvas: &mut Canvas, area: Rect, seed: u32, strength: f32) {
    let perlin = Perlin::new(seed);
    let area = area.normalized();
    let x_range = (area.x0.max(0.0) as u32)..(area.x1.min(canvas.width() as f32).max(0.0) as u32);
    let y_range = (area.y0.max(0.0) as u32)..(area.y1.min(canvas.height() as f32).max(0.0) as u32);
    for y in y_range {
        for x in x_range.clone() {
            let n = perlin.get([x as f64 / 180.0, y as f64 / 9.0]) as f32;
            let alpha = scale_alpha(255, n.abs() * strength);
            let shade = if n > 0.0 { rgba(255, 230, 200, alpha) } else { rgba(0, 0, 0, alpha) };
            canvas.blend_pixel(x as i32, y as i32, shade);
        }
    }
}

/// White foam droplets scattered over an area.
pub fn foam_particles(canvas: &mut Canvas, rng: &mut StdRng, area: Rect, count: usize) {
    let area = area.normalized();
    for _ in 0..count {
        let x = rng.gen_range(area.x0..=area.x1).round();
        let y = rng.gen_range(area.y0..=area.y1).round();
        let r = rng.gen_range(3..=9) as f32;
        canvas.fill_ellipse(Rect::circle((x, y), r), rgba(245, 250, 255, 255));
    }
}

/// Text with a blurred halo of `glow_color` behind it, like a neon sign.
#[allow(clippy::too_many_arguments)]
pub fn neon_text(
    canvas: &mut Canvas,
    typeface: &Typeface,
    pos: (f32, f32),
    text: &str,
    size: f32,
    color: Color,
    glow_color: Color,
    glow_radius: f32,
) {
    let mut layer = canvas.layer();
    layer.draw_text(typeface, pos, text, size, glow_color);
    let halo = layer.blurred(glow_radius);
    // Two passes make the halo read as light rather than shadow
    canvas.composite(&halo);
    canvas.composite(&halo);
    canvas.draw_text(typeface, pos, text, size, color);
}

/// Translucent copies of a color for layered neon and glow passes.
pub fn fade(color: Color, factor: f32) -> Color {
    rgba(color.0[0], color.0[1], color.0[2], scale_alpha(color.0[3], factor))
}
