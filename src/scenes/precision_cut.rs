//! # Precision Cut
//!
//! First-person barber POV: a hand gripping a golden clipper in front of a
//! blurred barbershop, with electric sparks, combo callouts and the timing HUD.

use super::{RenderConfig, Scene};
use crate::rendering::{
    effects::{self, SparkBurst},
    palette, rgb, Canvas, Color, Rect, Typeface,
};
use crate::{config, ArtResult};
use rand::rngs::StdRng;
use rand::Rng;

/// Renders `gameplay1.png`.
#[derive(Debug, Clone)]
pub struct PrecisionCut {
    /// Particles in the spark burst at the blade
    pub spark_count: usize,
    /// Blur applied to the shop backdrop
    pub backdrop_blur: f32,
    /// Corner darkening, `0.0..=1.0`
    pub vignette_strength: f32,
}

impl PrecisionCut {
    pub fn new() -> Self {
        Self {
            spark_count: config::SPARK_COUNT,
            backdrop_blur: 12.0,
            vignette_strength: 0.85,
        }
    }

    /// Mirrors and shelves behind the chair, softened to suggest depth of field.
    fn draw_backdrop(&self, width: u32, height: u32, rng: &mut StdRng) -> Canvas {
        let mut backdrop = Canvas::new(width, height, rgb(40, 40, 45));
        for i in 0..3 {
            let mx = 200.0 + i as f32 * 300.0;
            let my = 120.0;
            let (mw, mh) = (220.0, 300.0);
            backdrop.fill_rect(Rect::new(mx, my, mx + mw, my + mh), rgb(60, 60, 70));
            let shelf_top = my + mh + 10.0;
            backdrop.fill_rect(Rect::new(mx, shelf_top, mx + mw, my + mh + 30.0), rgb(80, 60, 40));

            // Product bottles standing on the shelf
            for j in 0..5 {
                let px = mx + 14.0 + j as f32 * 42.0;
                let bottle = rgb(
                    rng.gen_range(80..=230),
                    rng.gen_range(60..=200),
                    rng.gen_range(60..=230),
                );
                backdrop.fill_rect(Rect::new(px, shelf_top - 34.0, px + 22.0, shelf_top - 1.0), bottle);
            }
        }
        backdrop.blurred(self.backdrop_blur)
    }

    fn draw_hand(&self, canvas: &mut Canvas, w: f32, h: f32) {
        let hand = rgb(255, 220, 180);
        canvas.fill_ellipse_outlined(
            Rect::new(w * 0.22, h * 0.55, w * 0.5, h * 0.82),
            hand,
            palette::BLACK,
            12.0,
        );
        for i in 0..4 {
            let fx = w * (0.5 - i as f32 * 0.04);
            canvas.fill_rect_outlined(Rect::new(fx, h * 0.62, fx + 24.0, h * 0.75), hand, palette::BLACK, 4.0);
        }
    }

    /// Gold clipper body with its blade; returns the body bounds.
    fn draw_clipper(&self, canvas: &mut Canvas, w: f32, h: f32) -> Rect {
        let body = Rect::new((w * 0.45).trunc(), (h * 0.48).trunc(), (w * 0.75).trunc(), (h * 0.64).trunc());
        canvas.fill_rect(body.inflate(8.0), palette::BLACK);
        canvas.vertical_gradient(
            Rect::new(body.x0, body.y0, body.x1, body.y1 - 1.0),
            rgb(255, 215, 90),
            rgb(200, 150, 60),
        );

        let blade = Rect::new(body.x1 - 24.0, body.y0 + 6.0, body.x1 + 8.0, body.y1 - 6.0);
        canvas.fill_rect(blade, rgb(220, 230, 255));
        canvas.stroke_rect(blade.inflate(3.0), palette::BLACK, 1.0);
        body
    }

    fn draw_time_limit(&self, canvas: &mut Canvas, typeface: &Typeface, w: f32) {
        let bar_w = (w * 0.6).trunc();
        let bar_h = 26.0;
        let bar_x = ((w - bar_w) / 2.0).trunc();
        let bar_y = 20.0;
        canvas.fill_rect(Rect::new(bar_x, bar_y, bar_x + bar_w, bar_y + bar_h).inflate(4.0), palette::BLACK);

        // Alternate lit segments read as a blinking bar in a still frame
        let segment = (bar_w / 5.0).trunc();
        for i in (0..5).step_by(2) {
            let x0 = bar_x + i as f32 * segment;
            canvas.fill_rect(Rect::new(x0, bar_y, x0 + segment - 2.0, bar_y + bar_h), rgb(220, 40, 50));
        }
        canvas.draw_text(typeface, (bar_x + 8.0, bar_y + 2.0), "Time Limit", 22.0, palette::WHITE);
    }

    /// Top-left of the combo callout: beside the blade, but clear of the meter.
    pub fn combo_position(&self, typeface: &Typeface, spark_center: (f32, f32), w: f32) -> (f32, f32) {
        let (combo_w, _) = typeface.measure(COMBO_TEXT, COMBO_SIZE);
        let limit = meter_left(w) - METER_OVERHANG - 8.0 - combo_w - COMBO_STROKE as f32;
        ((spark_center.0 + 40.0).min(limit).max(0.0).trunc(), spark_center.1 - 60.0)
    }

    fn draw_precision_meter(&self, canvas: &mut Canvas, typeface: &Typeface, w: f32, h: f32) {
        let meter_w = 36.0;
        let meter_h = (h * 0.52).trunc();
        let meter_x = meter_left(w);
        let meter_y = (h * 0.2).trunc();
        canvas.fill_rect(Rect::new(meter_x, meter_y, meter_x + meter_w, meter_y + meter_h).inflate(4.0), palette::BLACK);

        for i in 0..meter_h as i32 {
            let y = meter_y + meter_h - i as f32;
            let band = precision_band(i as f32 / meter_h.max(1.0));
            canvas.fill_rect(Rect::new(meter_x, y, meter_x + meter_w, y), band);
        }

        let marker_y = meter_y + (meter_h * 0.35).trunc();
        canvas.fill_rect(
            Rect::new(
                meter_x - METER_OVERHANG,
                marker_y - 4.0,
                meter_x + meter_w + METER_OVERHANG,
                marker_y + 4.0,
            ),
            palette::WHITE,
        );

        let (label_w, _) = typeface.measure("PRECISION", 18.0);
        canvas.draw_text(
            typeface,
            (w - 12.0 - label_w, meter_y + meter_h + 12.0),
            "PRECISION",
            18.0,
            palette::WHITE,
        );
    }
}

impl Default for PrecisionCut {
    fn default() -> Self {
        Self::new()
    }
}

const COMBO_TEXT: &str = "COMBO +3";
const COMBO_SIZE: f32 = 56.0;
const COMBO_STROKE: i32 = 3;
/// How far the meter's marker sticks out past the bar on each side.
const METER_OVERHANG: f32 = 6.0;

/// Left edge of the precision meter bar.
fn meter_left(w: f32) -> f32 {
    w - 72.0
}

/// Meter color for a fill fraction measured from the bottom.
pub fn precision_band(t: f32) -> Color {
    if t > 0.7 {
        rgb(220, 80, 60)
    } else if t > 0.4 {
        rgb(240, 200, 60)
    } else {
        rgb(60, 200, 140)
    }
}

impl Scene for PrecisionCut {
    fn render(&self, config: &RenderConfig, typeface: &Typeface, rng: &mut StdRng) -> ArtResult<Canvas> {
        config.validate()?;
        let (w, h) = (config.width as f32, config.height as f32);

        let mut canvas = self.draw_backdrop(config.width, config.height, rng);
        self.draw_hand(&mut canvas, w, h);
        let clipper = self.draw_clipper(&mut canvas, w, h);

        let spark_center = (clipper.x1 - 6.0, clipper.center().1.trunc());
        effects::spark_scatter(&mut canvas, rng, &SparkBurst::electric(spark_center, self.spark_count));

        canvas.draw_text_stroked(
            typeface,
            self.combo_position(typeface, spark_center, w),
            COMBO_TEXT,
            COMBO_SIZE,
            rgb(255, 240, 130),
            COMBO_STROKE,
            palette::BLACK,
        );
        canvas.draw_text_stroked(
            typeface,
            (w * 0.25, h * 0.14),
            "PERFECT FADE!",
            84.0,
            palette::WHITE,
            6,
            palette::BLACK,
        );

        self.draw_time_limit(&mut canvas, typeface, w);
        self.draw_precision_meter(&mut canvas, typeface, w, h);

        effects::vignette(&mut canvas, self.vignette_strength);
        Ok(canvas)
    }

    fn scene_name(&self) -> &'static str {
        "Precision Cut"
    }

    fn file_name(&self) -> &'static str {
        "gameplay1.png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::create_rng;

    #[test]
    fn test_precision_band_thresholds() {
        assert_eq!(precision_band(0.0), rgb(60, 200, 140));
        assert_eq!(precision_band(0.4), rgb(60, 200, 140));
        assert_eq!(precision_band(0.5), rgb(240, 200, 60));
        assert_eq!(precision_band(0.71), rgb(220, 80, 60));
    }

    #[test]
    fn test_combo_clears_precision_meter() {
        let scene = PrecisionCut::new();
        let typeface = Typeface::builtin();
        let w: f32 = 1280.0;
        let spark_center = ((w * 0.75).trunc() - 6.0, 460.0);
        let (x, y) = scene.combo_position(&typeface, spark_center, w);
        let (combo_w, _) = typeface.measure(COMBO_TEXT, COMBO_SIZE);
        assert!(x + combo_w + COMBO_STROKE as f32 <= meter_left(w) - METER_OVERHANG);
        assert!(x < spark_center.0 + 40.0);
        assert_eq!(y, 400.0);
    }

    #[test]
    fn test_combo_keeps_offset_when_room() {
        let scene = PrecisionCut::new();
        let (x, _) = scene.combo_position(&Typeface::builtin(), (100.0, 200.0), 1280.0);
        assert_eq!(x, 140.0);
    }

    #[test]
    fn test_render_matches_config_size() {
        let config = RenderConfig::for_testing();
        let scene = PrecisionCut::new();
        let canvas = scene
            .render(&config, &Typeface::builtin(), &mut create_rng(&config))
            .unwrap();
        assert!(scene.validate(&canvas, &config).is_ok());
    }

    #[test]
    fn test_corners_are_darker_than_clipper() {
        let config = RenderConfig {
            width: 640,
            height: 360,
            ..RenderConfig::new()
        };
        let canvas = PrecisionCut::new()
            .render(&config, &Typeface::builtin(), &mut create_rng(&config))
            .unwrap();
        let luma = |x: u32, y: u32| {
            let p = canvas.pixel(x, y).unwrap();
            p.0[0] as u32 + p.0[1] as u32 + p.0[2] as u32
        };
        // Gold body sits between 45% and 75% of the width
        assert!(luma(0, 359) < luma(380, 190));
    }

    #[test]
    fn test_render_rejects_zero_size() {
        let config = RenderConfig {
            width: 0,
            ..RenderConfig::for_testing()
        };
        let result = PrecisionCut::new().render(&config, &Typeface::builtin(), &mut create_rng(&config));
        assert!(result.is_err());
    }
}
