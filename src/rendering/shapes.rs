//! # Shape Primitives
//!
//! Rectangles, ellipses, arcs, lines and polygons drawn onto a [`Canvas`].
//!
//! Pixel `(x, y)` covers the unit square `[x, x + 1) x [y, y + 1)` and is
//! considered inside a shape when its center is. Rectangle bounds are inclusive.

use super::{Canvas, Color, Rect};
use crate::utils::lerp_color;

/// Integer row range of a rectangle, clipped to the canvas.
fn clipped_rows(canvas: &Canvas, y0: f32, y1: f32) -> std::ops::Range<i32> {
    let start = (y0.floor() as i32).max(0);
    let end = (y1.ceil() as i32).min(canvas.height() as i32);
    start..end.max(start)
}

/// Ellipse described in continuous coordinates.
#[derive(Debug, Clone, Copy)]
struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    /// Ellipse covering an inclusive bounding box.
    fn from_rect(rect: Rect) -> Self {
        let r = rect.normalized();
        Self {
            cx: (r.x0 + r.x1 + 1.0) / 2.0,
            cy: (r.y0 + r.y1 + 1.0) / 2.0,
            rx: (r.x1 - r.x0 + 1.0) / 2.0,
            ry: (r.y1 - r.y0 + 1.0) / 2.0,
        }
    }

    fn shrunk(&self, amount: f32) -> Self {
        Self {
            rx: self.rx - amount,
            ry: self.ry - amount,
            ..*self
        }
    }

    fn is_empty(&self) -> bool {
        self.rx <= 0.0 || self.ry <= 0.0
    }

    /// Horizontal pixel span `[start, end)` inside the ellipse on a given row.
    fn span(&self, row: i32) -> Option<(i32, i32)> {
        if self.is_empty() {
            return None;
        }
        let dy = (row as f32 + 0.5 - self.cy) / self.ry;
        if dy.abs() > 1.0 {
            return None;
        }
        let half = self.rx * (1.0 - dy * dy).sqrt();
        let start = (self.cx - half).round() as i32;
        let end = (self.cx + half).round() as i32;
        (end > start).then_some((start, end))
    }

    fn contains(&self, px: f32, py: f32) -> bool {
        if self.is_empty() {
            return false;
        }
        let dx = (px - self.cx) / self.rx;
        let dy = (py - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Whether `angle` (degrees) lies on the clockwise sweep from `start` to `end`.
fn angle_in_sweep(angle: f32, start: f32, end: f32) -> bool {
    let sweep = end - start;
    if sweep >= 360.0 {
        return true;
    }
    if sweep <= 0.0 {
        return false;
    }
    (angle - start).rem_euclid(360.0) <= sweep
}

impl Canvas {
    /// Fills a rectangle with inclusive bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use barberbrawl::{Canvas, Rect, rgb};
    ///
    /// let mut canvas = Canvas::new(10, 10, rgb(0, 0, 0));
    /// canvas.fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0), rgb(255, 0, 0));
    /// assert_eq!(canvas.pixel(4, 4), Some(rgb(255, 0, 0)));
    /// assert_eq!(canvas.pixel(5, 5), Some(rgb(0, 0, 0)));
    /// ```
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.normalized();
        let x_start = r.x0.round() as i32;
        let x_end = (r.x1.round() as i32).saturating_add(1);
        let y_start = (r.y0.round() as i32).max(0);
        let y_end = (r.y1.round() as i32)
            .saturating_add(1)
            .min(self.height() as i32);
        for y in y_start..y_end {
            self.blend_span(y, x_start, x_end, color);
        }
    }

    /// Draws a rectangle outline growing inward from the bounds.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let r = rect.normalized();
        let w = (width.max(1.0) - 1.0).min(r.width() / 2.0).min(r.height() / 2.0);
        // Top and bottom bands span the full width, sides fill the gap between them.
        self.fill_rect(Rect::new(r.x0, r.y0, r.x1, r.y0 + w), color);
        self.fill_rect(Rect::new(r.x0, r.y1 - w, r.x1, r.y1), color);
        if r.y1 - w - 1.0 >= r.y0 + w + 1.0 {
            self.fill_rect(Rect::new(r.x0, r.y0 + w + 1.0, r.x0 + w, r.y1 - w - 1.0), color);
            self.fill_rect(Rect::new(r.x1 - w, r.y0 + w + 1.0, r.x1, r.y1 - w - 1.0), color);
        }
    }

    /// Fills an ellipse inscribed in the bounding box.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let ellipse = Ellipse::from_rect(rect);
        let bounds = rect.normalized();
        for y in clipped_rows(self, bounds.y0, bounds.y1 + 1.0) {
            if let Some((start, end)) = ellipse.span(y) {
                self.blend_span(y, start, end, color);
            }
        }
    }

    /// Draws an elliptical ring of the given width inside the bounding box.
    pub fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: f32) {
        let outer = Ellipse::from_rect(rect);
        let inner = outer.shrunk(width.max(1.0));
        let bounds = rect.normalized();
        for y in clipped_rows(self, bounds.y0, bounds.y1 + 1.0) {
            let Some((start, end)) = outer.span(y) else {
                continue;
            };
            match inner.span(y) {
                Some((inner_start, inner_end)) => {
                    self.blend_span(y, start, inner_start, color);
                    self.blend_span(y, inner_end, end, color);
                }
                None => self.blend_span(y, start, end, color),
            }
        }
    }

    /// Draws part of an elliptical ring.
    ///
    /// Angles are in degrees, measured clockwise from 3 o'clock.
    pub fn arc(&mut self, rect: Rect, start_deg: f32, end_deg: f32, color: Color, width: f32) {
        let outer = Ellipse::from_rect(rect);
        let inner = outer.shrunk(width.max(1.0));
        let bounds = rect.normalized();
        for y in clipped_rows(self, bounds.y0, bounds.y1 + 1.0) {
            let Some((start, end)) = outer.span(y) else {
                continue;
            };
            let py = y as f32 + 0.5;
            for x in start.max(0)..end.min(self.width() as i32) {
                let px = x as f32 + 0.5;
                if inner.contains(px, py) {
                    continue;
                }
                let angle = (py - outer.cy).atan2(px - outer.cx).to_degrees();
                if angle_in_sweep(angle, start_deg, end_deg) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Draws a straight line. Widths above one pixel are drawn as a filled quad.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        if width > 1.0 {
            let (dx, dy) = (to.0 - from.0, to.1 - from.1);
            let length = (dx * dx + dy * dy).sqrt();
            if length == 0.0 {
                self.fill_rect(Rect::circle(from, width / 2.0), color);
                return;
            }
            let (nx, ny) = (-dy / length * width / 2.0, dx / length * width / 2.0);
            self.fill_polygon(
                &[
                    (from.0 + nx, from.1 + ny),
                    (to.0 + nx, to.1 + ny),
                    (to.0 - nx, to.1 - ny),
                    (from.0 - nx, from.1 - ny),
                ],
                color,
            );
            return;
        }

        let (x0, y0) = (from.0.round(), from.1.round());
        let (x1, y1) = (to.0.round(), to.1.round());
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        let limit = (self.width() + self.height()) as f32 * 4.0;
        if !steps.is_finite() || steps > limit {
            // Mostly off-canvas; clip by sampling as a thin polygon instead.
            self.fill_polygon(&[from, to, (to.0 + 0.5, to.1 + 0.5), (from.0 + 0.5, from.1 + 0.5)], color);
            return;
        }
        let steps = steps as i32;
        if steps == 0 {
            self.blend_pixel(x0 as i32, y0 as i32, color);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (x0 + (x1 - x0) * t).round() as i32;
            let y = (y0 + (y1 - y0) * t).round() as i32;
            self.blend_pixel(x, y, color);
        }
    }

    /// Draws connected line segments through the given points.
    pub fn polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color, width);
        }
    }

    /// Fills a polygon using the even-odd rule.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 || points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            return;
        }
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in clipped_rows(self, min_y, max_y + 1.0) {
            let py = y as f32 + 0.5;
            crossings.clear();
            for (i, &(xa, ya)) in points.iter().enumerate() {
                let (xb, yb) = points[(i + 1) % points.len()];
                if (ya <= py && py < yb) || (yb <= py && py < ya) {
                    crossings.push(xa + (py - ya) / (yb - ya) * (xb - xa));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil() as i32;
                let end = (pair[1] - 0.5).ceil() as i32;
                self.blend_span(y, start, end, color);
            }
        }
    }

    /// Fills a polygon and strokes its edges, giving a cel-shaded outline.
    pub fn fill_polygon_outlined(
        &mut self,
        points: &[(f32, f32)],
        fill: Color,
        outline: Color,
        outline_width: f32,
    ) {
        self.fill_polygon(points, fill);
        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.line(start, end, outline, outline_width);
        }
    }

    /// Fills an ellipse over a thick black silhouette of itself.
    pub fn fill_ellipse_outlined(&mut self, rect: Rect, fill: Color, outline: Color, thickness: f32) {
        self.fill_ellipse(rect.inflate(thickness), outline);
        self.fill_ellipse(rect, fill);
    }

    /// Fills a rectangle over a thick outline rectangle.
    pub fn fill_rect_outlined(&mut self, rect: Rect, fill: Color, outline: Color, thickness: f32) {
        self.fill_rect(rect.inflate(thickness), outline);
        self.fill_rect(rect, fill);
    }

    /// Fills a rectangle row by row, interpolating from `top` to `bottom`.
    pub fn vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        let r = rect.normalized();
        let y_start = r.y0.round() as i32;
        let y_end = r.y1.round() as i32;
        let rows = (y_end - y_start).max(1) as f32;
        for y in y_start.max(0)..=y_end.min(self.height() as i32 - 1) {
            let t = (y - y_start) as f32 / rows;
            let color = lerp_color(top, bottom, t);
            self.blend_span(y, r.x0.round() as i32, r.x1.round() as i32 + 1, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{palette, rgb, rgba};
    use proptest::prelude::*;

    fn count_color(canvas: &Canvas, color: Color) -> usize {
        canvas.as_image().pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_fill_rect_is_inclusive() {
        let mut canvas = Canvas::new(20, 20, palette::BLACK);
        canvas.fill_rect(Rect::new(2.0, 3.0, 11.0, 7.0), palette::WHITE);
        assert_eq!(count_color(&canvas, palette::WHITE), 10 * 5);
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut canvas = Canvas::new(10, 10, palette::BLACK);
        canvas.fill_rect(Rect::new(-50.0, -50.0, 4.0, 4.0), palette::WHITE);
        assert_eq!(count_color(&canvas, palette::WHITE), 25);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = Canvas::new(20, 20, palette::BLACK);
        canvas.stroke_rect(Rect::new(0.0, 0.0, 9.0, 9.0), palette::WHITE, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some(palette::WHITE));
        assert_eq!(canvas.pixel(9, 5), Some(palette::WHITE));
        assert_eq!(canvas.pixel(5, 5), Some(palette::BLACK));
        assert_eq!(count_color(&canvas, palette::WHITE), 36);
    }

    #[test]
    fn test_fill_ellipse_is_symmetric_and_round() {
        let mut canvas = Canvas::new(40, 40, palette::BLACK);
        canvas.fill_ellipse(Rect::new(10.0, 10.0, 29.0, 29.0), palette::WHITE);
        assert_eq!(canvas.pixel(20, 20), Some(palette::WHITE));
        // Corners of the bounding box stay outside the circle
        assert_eq!(canvas.pixel(10, 10), Some(palette::BLACK));
        assert_eq!(canvas.pixel(29, 29), Some(palette::BLACK));
        // Area is close to pi * r^2
        let area = count_color(&canvas, palette::WHITE) as f32;
        let expected = std::f32::consts::PI * 10.0 * 10.0;
        assert!((area - expected).abs() / expected < 0.08);
    }

    #[test]
    fn test_stroke_ellipse_has_hollow_center() {
        let mut canvas = Canvas::new(40, 40, palette::BLACK);
        canvas.stroke_ellipse(Rect::new(0.0, 0.0, 39.0, 39.0), palette::WHITE, 3.0);
        assert_eq!(canvas.pixel(20, 20), Some(palette::BLACK));
        assert_eq!(canvas.pixel(20, 1), Some(palette::WHITE));
    }

    #[test]
    fn test_arc_covers_only_requested_sweep() {
        let mut canvas = Canvas::new(40, 40, palette::BLACK);
        // Bottom half only (0..180 runs clockwise through 6 o'clock)
        canvas.arc(Rect::new(0.0, 0.0, 39.0, 39.0), 0.0, 180.0, palette::WHITE, 4.0);
        assert_eq!(canvas.pixel(20, 38), Some(palette::WHITE));
        assert_eq!(canvas.pixel(20, 1), Some(palette::BLACK));
    }

    #[test]
    fn test_angle_sweep_wraps() {
        assert!(angle_in_sweep(-100.0, 220.0, 320.0));
        assert!(angle_in_sweep(350.0, 300.0, 400.0));
        assert!(angle_in_sweep(10.0, 300.0, 400.0));
        assert!(!angle_in_sweep(90.0, 300.0, 400.0));
        assert!(angle_in_sweep(123.0, 0.0, 360.0));
    }

    #[test]
    fn test_thin_line_hits_both_endpoints() {
        let mut canvas = Canvas::new(20, 20, palette::BLACK);
        canvas.line((1.0, 1.0), (15.0, 8.0), palette::WHITE, 1.0);
        assert_eq!(canvas.pixel(1, 1), Some(palette::WHITE));
        assert_eq!(canvas.pixel(15, 8), Some(palette::WHITE));
        assert_eq!(count_color(&canvas, palette::WHITE), 15);
    }

    #[test]
    fn test_thick_line_has_width() {
        let mut canvas = Canvas::new(30, 30, palette::BLACK);
        canvas.line((2.0, 15.0), (28.0, 15.0), palette::WHITE, 6.0);
        for y in 13..17 {
            assert_eq!(canvas.pixel(15, y), Some(palette::WHITE), "row {}", y);
        }
        assert_eq!(canvas.pixel(15, 5), Some(palette::BLACK));
    }

    #[test]
    fn test_polyline_joins_segments() {
        let mut canvas = Canvas::new(20, 20, palette::BLACK);
        canvas.polyline(&[(2.0, 2.0), (12.0, 2.0), (12.0, 12.0)], palette::WHITE, 1.0);
        assert_eq!(canvas.pixel(7, 2), Some(palette::WHITE));
        assert_eq!(canvas.pixel(12, 7), Some(palette::WHITE));
        assert_eq!(canvas.pixel(7, 7), Some(palette::BLACK));
        // Shared corner counted once
        assert_eq!(count_color(&canvas, palette::WHITE), 21);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::new(20, 20, palette::BLACK);
        canvas.fill_polygon(&[(0.0, 0.0), (20.0, 0.0), (0.0, 20.0)], palette::WHITE);
        assert_eq!(canvas.pixel(2, 2), Some(palette::WHITE));
        assert_eq!(canvas.pixel(18, 18), Some(palette::BLACK));
        let area = count_color(&canvas, palette::WHITE);
        assert!((180..=220).contains(&area), "area was {}", area);
    }

    #[test]
    fn test_fill_polygon_ignores_degenerate_input() {
        let mut canvas = Canvas::new(10, 10, palette::BLACK);
        canvas.fill_polygon(&[(0.0, 0.0), (5.0, 5.0)], palette::WHITE);
        canvas.fill_polygon(&[(f32::NAN, 0.0), (5.0, 5.0), (1.0, 9.0)], palette::WHITE);
        canvas.fill_polygon(&[(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], palette::WHITE);
        assert_eq!(count_color(&canvas, palette::WHITE), 0);
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let mut canvas = Canvas::new(10, 11, palette::BLACK);
        let top = rgb(255, 215, 90);
        let bottom = rgb(200, 150, 60);
        canvas.vertical_gradient(Rect::new(0.0, 0.0, 9.0, 10.0), top, bottom);
        assert_eq!(canvas.pixel(5, 0), Some(top));
        assert_eq!(canvas.pixel(5, 10), Some(bottom));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = Canvas::new(4, 4, palette::BLACK);
        canvas.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), rgba(255, 255, 255, 20));
        let px = canvas.pixel(1, 1).unwrap();
        assert!(px.0[0] > 0 && px.0[0] < 40);
    }

    proptest! {
        #[test]
        fn prop_primitives_never_panic(
            x0 in -5000.0f32..5000.0,
            y0 in -5000.0f32..5000.0,
            x1 in -5000.0f32..5000.0,
            y1 in -5000.0f32..5000.0,
            width in 0.0f32..30.0,
        ) {
            let mut canvas = Canvas::new(32, 24, palette::BLACK);
            let rect = Rect::new(x0, y0, x1, y1);
            canvas.fill_rect(rect, palette::WHITE);
            canvas.stroke_rect(rect, palette::WHITE, width);
            canvas.fill_ellipse(rect, palette::WHITE);
            canvas.stroke_ellipse(rect, palette::WHITE, width);
            canvas.arc(rect, x0, y0, palette::WHITE, width);
            canvas.line((x0, y0), (x1, y1), palette::WHITE, width);
            canvas.fill_polygon(&[(x0, y0), (x1, y0), (x1, y1)], palette::WHITE);
            canvas.vertical_gradient(rect, palette::WHITE, palette::BLACK);
            prop_assert_eq!(canvas.width(), 32);
        }
    }
}
