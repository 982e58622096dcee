//! # Street Brawl
//!
//! Side-scrolling fight in a closed-up barbershop: two brawlers mid-exchange,
//! a super move tearing through shaving foam, and a fighting-game HUD.

use super::fighter::{draw_fighter, Facing, FighterFeature, Fighter};
use super::{RenderConfig, Scene};
use crate::rendering::{effects, palette, rgb, rgba, Canvas, Color, Rect, Typeface};
use crate::{config, ArtResult};
use rand::rngs::StdRng;
use rand::Rng;

const SIGN_SIZE: f32 = 28.0;
const SIGN_COLOR: Color = rgb(255, 120, 120);

/// Renders `gameplay2.png`.
#[derive(Debug, Clone)]
pub struct StreetBrawl {
    /// Remaining health of the left fighter, `0.0..=1.0`
    pub left_health: f32,
    /// Remaining health of the right fighter, `0.0..=1.0`
    pub right_health: f32,
    /// Round timer shown at the top
    pub timer: u32,
    /// Neon sign text on the back wall
    pub sign_text: &'static str,
}

impl StreetBrawl {
    pub fn new() -> Self {
        Self {
            left_health: 0.72,
            right_health: 0.46,
            timer: 99,
            sign_text: "IT'S A CUT-THROAT BUSINESS",
        }
    }

    fn fighters(&self, w: f32, floor_y: f32) -> (Fighter, Fighter) {
        let left = Fighter {
            x: (w * 0.28).trunc(),
            y: floor_y - 20.0,
            scale: 1.05,
            color: rgb(150, 40, 30),
            head_color: rgb(240, 200, 160),
            features: vec![FighterFeature::Fist, FighterFeature::Beard],
            facing: Facing::Right,
        };
        let right = Fighter {
            x: (w * 0.72).trunc(),
            y: floor_y - 20.0,
            scale: 1.0,
            color: rgb(40, 90, 140),
            head_color: rgb(240, 220, 180),
            features: vec![FighterFeature::Mustache, FighterFeature::Scissors],
            facing: Facing::Left,
        };
        (left, right)
    }

    fn draw_shop(&self, canvas: &mut Canvas, rng: &mut StdRng, w: f32, h: f32, floor_y: f32) {
        let floor = Rect::new(0.0, floor_y, w, h);
        canvas.fill_rect(floor, rgb(30, 20, 14));
        effects::grain(canvas, floor, rng.gen(), 0.25);

        // Barber chair silhouettes
        for i in 0..3 {
            let cx = 160.0 + i as f32 * 320.0;
            canvas.fill_rect(Rect::new(cx - 60.0, floor_y - 120.0, cx + 60.0, floor_y - 40.0), rgb(20, 20, 20));
            canvas.fill_ellipse(Rect::new(cx - 70.0, floor_y - 40.0, cx + 70.0, floor_y - 10.0), rgb(14, 10, 8));
        }
    }

    /// Top-left corner of the neon sign.
    fn sign_position(w: f32, h: f32) -> (f32, f32) {
        ((w * 0.15).trunc(), (h * 0.12).trunc())
    }

    fn draw_sign(&self, canvas: &mut Canvas, typeface: &Typeface, w: f32, h: f32) {
        effects::neon_text(
            canvas,
            typeface,
            Self::sign_position(w, h),
            self.sign_text,
            SIGN_SIZE,
            SIGN_COLOR,
            palette::NEON_RED,
            6.0,
        );
    }

    /// Glowing fist with rings of light and a shockwave of foam above it.
    fn draw_super_move(&self, canvas: &mut Canvas, rng: &mut StdRng, center: (f32, f32)) {
        effects::glow(canvas, center, 70.0, rgb(255, 140, 50), 1.2);

        let mut layer = canvas.layer();
        for r in (12..=60).rev().step_by(6) {
            let alpha = (40 + (60 - r) * 3) as u8;
            layer.stroke_ellipse(Rect::circle(center, r as f32), rgba(255, 240, 160, alpha), 1.0);
        }
        for i in 0..6 {
            let radius = 120.0 + i as f32 * 40.0;
            layer.arc(Rect::circle(center, radius), 220.0, 320.0, rgba(230, 240, 250, 200), 8.0);
        }
        canvas.composite(&layer.blurred(2.0));

        let spray = Rect::new(center.0 - 220.0, center.1 - 330.0, center.0 + 220.0, center.1 - 90.0);
        effects::foam_particles(canvas, rng, spray, config::FOAM_PARTICLE_COUNT);
    }

    fn draw_dodge(&self, canvas: &mut Canvas, fighter: &Fighter) {
        effects::glow(canvas, (fighter.x, fighter.y - 80.0), 90.0, rgb(60, 160, 255), 0.9);
        // Streaks trail behind the lean, away from the incoming punch
        for i in 0..5 {
            let offset = i as f32 * 6.0;
            canvas.polyline(
                &[
                    (fighter.x + 20.0, fighter.y - 120.0 - offset),
                    (fighter.x + 50.0, fighter.y - 96.0 - offset),
                    (fighter.x + 80.0, fighter.y - 60.0 - offset),
                ],
                rgba(200, 220, 255, 180),
                3.0,
            );
        }
    }

    fn draw_hud(&self, canvas: &mut Canvas, typeface: &Typeface, w: f32, h: f32) {
        let bar_w = 420.0;
        let bar_h = 22.0;
        let ui_y = 18.0;
        let p1_x = 60.0;
        let p2_x = w - 60.0 - bar_w;

        draw_health_bar(canvas, Rect::new(p1_x, ui_y, p1_x + bar_w, ui_y + bar_h), self.left_health, rgb(240, 220, 60), false);
        canvas.fill_ellipse(Rect::new(p1_x - 56.0, ui_y - 10.0, p1_x - 8.0, ui_y + 34.0), rgb(200, 180, 140));

        draw_health_bar(canvas, Rect::new(p2_x, ui_y, p2_x + bar_w, ui_y + bar_h), self.right_health, rgb(80, 240, 140), true);
        canvas.fill_ellipse(
            Rect::new(p2_x + bar_w + 8.0, ui_y - 10.0, p2_x + bar_w + 56.0, ui_y + 34.0),
            rgb(220, 200, 160),
        );

        let timer = self.timer.to_string();
        let (timer_w, _) = typeface.measure(&timer, 36.0);
        canvas.draw_text_stroked(
            typeface,
            (((w - timer_w) / 2.0).trunc(), ui_y - 4.0),
            &timer,
            36.0,
            palette::WHITE,
            4,
            palette::BLACK,
        );

        // Super meter: stacked translucent bars glow hotter toward the middle
        let sm_w = 500.0;
        let sm_h = 18.0;
        let sm_x = ((w - sm_w) / 2.0).trunc();
        let sm_y = h - 50.0;
        let meter = Rect::new(sm_x, sm_y, sm_x + sm_w, sm_y + sm_h);
        canvas.fill_rect(meter.inflate(6.0), palette::BLACK);
        for i in 0..8u8 {
            let inset = i as f32 * 6.0;
            let alpha = 220u8.saturating_sub(i * 24);
            canvas.fill_rect(
                Rect::new(sm_x + inset, sm_y, sm_x + sm_w - inset, sm_y + sm_h),
                rgba(40 + i * 20, 160 + i * 10, 255, alpha),
            );
        }
        effects::glow(canvas, meter.center(), 60.0, rgb(255, 180, 60), 0.8);
        canvas.draw_text(typeface, (sm_x + sm_w + 12.0, sm_y - 2.0), "SUPER", 20.0, palette::WHITE);
    }
}

impl Default for StreetBrawl {
    fn default() -> Self {
        Self::new()
    }
}

/// Outlined health bar. Player two's bar drains toward the screen center,
/// so its fill is anchored to the right edge.
pub fn draw_health_bar(canvas: &mut Canvas, bar: Rect, fraction: f32, fill: Color, anchor_right: bool) {
    canvas.fill_rect(bar.inflate(6.0), palette::BLACK);
    let filled = (bar.width() * fraction.clamp(0.0, 1.0)).trunc();
    if filled <= 0.0 {
        return;
    }
    let rect = if anchor_right {
        Rect::new(bar.x1 - filled, bar.y0, bar.x1, bar.y1)
    } else {
        Rect::new(bar.x0, bar.y0, bar.x0 + filled, bar.y1)
    };
    canvas.fill_rect(rect, fill);
}

impl Scene for StreetBrawl {
    fn render(&self, config: &RenderConfig, typeface: &Typeface, rng: &mut StdRng) -> ArtResult<Canvas> {
        config.validate()?;
        let (w, h) = (config.width as f32, config.height as f32);
        let floor_y = (h * 0.7).trunc();

        let mut canvas = Canvas::new(config.width, config.height, rgb(8, 8, 12));
        self.draw_shop(&mut canvas, rng, w, h, floor_y);

        let (left, right) = self.fighters(w, floor_y);
        draw_fighter(&mut canvas, &left);
        draw_fighter(&mut canvas, &right);

        self.draw_super_move(&mut canvas, rng, (left.x + 30.0, left.y - 70.0));
        self.draw_dodge(&mut canvas, &right);
        // Foam and glow layers would otherwise wash over the lettering
        self.draw_sign(&mut canvas, typeface, w, h);
        self.draw_hud(&mut canvas, typeface, w, h);

        effects::scanlines(&mut canvas, 3, 20);
        Ok(canvas)
    }

    fn scene_name(&self) -> &'static str {
        "Street Brawl"
    }

    fn file_name(&self) -> &'static str {
        "gameplay2.png"
    }
}
