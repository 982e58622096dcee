//! # Main Menu
//!
//! Mode select screen: a split panel with the two game modes, a row of
//! selectable barber portraits, control hints and the title banner.

use super::{RenderConfig, Scene};
use crate::rendering::{effects, palette, rgb, Canvas, Color, Rect, Typeface};
use crate::ArtResult;
use rand::rngs::StdRng;

/// A selectable barber shown on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Portrait {
    pub name: &'static str,
    pub color: Color,
}

/// The four playable barbers, left to right.
pub const ROSTER: [Portrait; 4] = [
    Portrait { name: "The Tank", color: rgb(200, 140, 100) },
    Portrait { name: "The All-rounder", color: rgb(160, 160, 220) },
    Portrait { name: "The Brawler", color: rgb(200, 120, 120) },
    Portrait { name: "The Technicus", color: rgb(140, 200, 150) },
];

const HINT: Color = rgb(200, 200, 200);
const CARD_HALF_WIDTH: f32 = 48.0;

/// Largest label size, up to 20px, at which every roster name fits `max_width`.
fn fitted_label_size(typeface: &Typeface, max_width: f32) -> f32 {
    let mut size = 20.0;
    while size > 8.0 && ROSTER.iter().any(|p| typeface.measure(p.name, size).0 > max_width) {
        size -= 1.0;
    }
    size
}

/// Renders `menu.png`.
#[derive(Debug, Clone)]
pub struct MainMenu {
    pub title: &'static str,
    /// Horizontal distance between portrait cards
    pub card_spacing: f32,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            title: "BARBER BRAWL ARCADE",
            card_spacing: 120.0,
        }
    }

    /// Horizontal center of each portrait card; the row is centered on the split.
    pub fn card_positions(&self, mid: f32) -> Vec<f32> {
        let start_x = mid - self.card_spacing * 1.5;
        (0..ROSTER.len())
            .map(|i| (start_x + i as f32 * self.card_spacing).trunc())
            .collect()
    }

    fn draw_precision_panel(&self, canvas: &mut Canvas, typeface: &Typeface, mid: f32, h: f32) {
        let (lx, ly) = ((mid / 2.0).trunc(), (h * 0.2).trunc());
        canvas.fill_ellipse(Rect::circle((lx, ly), 70.0), rgb(60, 60, 70));

        // Scissor blades crossing over the finger loops
        canvas.line((lx - 40.0, ly + 40.0), (lx + 40.0, ly - 40.0), palette::WHITE, 6.0);
        canvas.line((lx - 40.0, ly - 40.0), (lx + 40.0, ly + 40.0), palette::WHITE, 6.0);
        canvas.fill_ellipse(Rect::new(lx - 52.0, ly + 28.0, lx - 28.0, ly + 52.0), palette::GOLD);
        canvas.fill_ellipse(Rect::new(lx - 52.0, ly - 52.0, lx - 28.0, ly - 28.0), palette::GOLD);
        canvas.fill_rect(Rect::new(lx + 20.0, ly - 10.0, lx + 60.0, ly + 10.0), rgb(220, 170, 70));

        canvas.draw_text_stroked(
            typeface,
            (lx - 120.0, ly + 110.0),
            "PRECISION CUT",
            42.0,
            palette::WHITE,
            4,
            palette::BLACK,
        );
    }

    fn draw_brawl_panel(&self, canvas: &mut Canvas, typeface: &Typeface, mid: f32, w: f32, h: f32) {
        let (rx, ry) = ((mid + (w - mid) / 2.0).trunc(), (h * 0.2).trunc());
        canvas.fill_ellipse(Rect::circle((rx, ry), 70.0), rgb(50, 30, 30));
        canvas.fill_rect_outlined(
            Rect::new(rx - 30.0, ry - 20.0, rx + 30.0, ry + 30.0),
            rgb(180, 50, 40),
            palette::BLACK,
            3.0,
        );
        for i in 0..5u8 {
            let fx = rx - 40.0 + i as f32 * 20.0;
            canvas.fill_polygon_outlined(
                &[(fx, ry - 30.0), (fx + 10.0, ry - 70.0), (fx + 20.0, ry - 30.0)],
                rgb(255, 80 + 20 * i, 30),
                palette::BLACK,
                2.0,
            );
        }

        canvas.draw_text_stroked(
            typeface,
            (rx - 100.0, ry + 110.0),
            "STREET BRAWL",
            42.0,
            palette::WHITE,
            4,
            palette::BLACK,
        );
    }

    /// Card bounds around a card center.
    pub fn card_rect(&self, cx: f32, top: f32) -> Rect {
        Rect::new(cx - CARD_HALF_WIDTH, top, cx + CARD_HALF_WIDTH, top + 140.0)
    }

    fn draw_portraits(&self, canvas: &mut Canvas, typeface: &Typeface, mid: f32, h: f32) {
        let py = (h * 0.54).trunc();
        let label_size = fitted_label_size(typeface, self.card_spacing - 8.0);
        for (portrait, cx) in ROSTER.iter().zip(self.card_positions(mid)) {
            let card = self.card_rect(cx, py);
            canvas.fill_rect(card.inflate(4.0), effects::fade(palette::BLACK, 0.5));
            canvas.fill_rect_outlined(card, rgb(20, 20, 20), palette::BLACK, 3.0);
            canvas.fill_ellipse_outlined(
                Rect::from_center((cx, py + 42.0), 30.0, 30.0),
                portrait.color,
                palette::BLACK,
                3.0,
            );
            canvas.fill_rect(Rect::from_center((cx, py + 98.0), 22.0, 22.0), rgb(60, 60, 60));

            let (label_w, _) = typeface.measure(portrait.name, label_size);
            canvas.draw_text_stroked(
                typeface,
                ((cx - label_w / 2.0).trunc(), py + 148.0),
                portrait.name,
                label_size,
                palette::WHITE,
                2,
                palette::BLACK,
            );
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MainMenu {
    fn render(&self, config: &RenderConfig, typeface: &Typeface, _rng: &mut StdRng) -> ArtResult<Canvas> {
        config.validate()?;
        let (w, h) = (config.width as f32, config.height as f32);
        let mid = (w / 2.0).trunc();

        let mut canvas = Canvas::new(config.width, config.height, rgb(18, 18, 20));
        canvas.fill_rect(Rect::new(0.0, 0.0, mid, h), rgb(40, 45, 50));
        canvas.fill_rect(Rect::new(mid, 0.0, w, h), rgb(28, 26, 28));

        self.draw_precision_panel(&mut canvas, typeface, mid, h);
        self.draw_brawl_panel(&mut canvas, typeface, mid, w, h);
        self.draw_portraits(&mut canvas, typeface, mid, h);

        canvas.draw_text(typeface, (60.0, h - 40.0), "Press [Enter] to select", 18.0, HINT);
        canvas.draw_text(typeface, (w - 260.0, h - 40.0), "Use \u{2190} \u{2192} to switch", 18.0, HINT);

        canvas.draw_text_stroked(
            typeface,
            ((w * 0.25 - 50.0).trunc(), 24.0),
            self.title,
            56.0,
            rgb(255, 230, 200),
            6,
            rgb(30, 10, 10),
        );
        Ok(canvas)
    }

    fn scene_name(&self) -> &'static str {
        "Main Menu"
    }

    fn file_name(&self) -> &'static str {
        "menu.png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::create_rng;

    #[test]
    fn test_card_positions_center_on_split() {
        let menu = MainMenu::new();
        let positions = menu.card_positions(640.0);
        assert_eq!(positions, vec![460.0, 580.0, 700.0, 820.0]);

        let first = menu.card_rect(positions[0], 0.0);
        let last = menu.card_rect(positions[3], 0.0);
        assert_eq!((first.x0 + last.x1) / 2.0, 640.0);
        assert_eq!(first.center().0, 460.0);
    }

    #[test]
    fn test_cards_do_not_overlap() {
        let menu = MainMenu::new();
        let positions = menu.card_positions(640.0);
        for pair in positions.windows(2) {
            assert!(menu.card_rect(pair[0], 0.0).x1 < menu.card_rect(pair[1], 0.0).x0);
        }
    }

    #[test]
    fn test_labels_fit_within_card_spacing() {
        let typeface = Typeface::builtin();
        let menu = MainMenu::new();
        let size = fitted_label_size(&typeface, menu.card_spacing - 8.0);
        for portrait in &ROSTER {
            assert!(typeface.measure(portrait.name, size).0 <= menu.card_spacing - 8.0, "{}", portrait.name);
        }
    }

    #[test]
    fn test_portrait_row_is_mirrored_around_split() {
        let config = RenderConfig {
            width: 640,
            height: 360,
            ..RenderConfig::new()
        };
        let canvas = MainMenu::new()
            .render(&config, &Typeface::builtin(), &mut create_rng(&config))
            .unwrap();
        // Card centers at 140 and 500 around the split at 320; sample the card fill
        let py = (360.0_f32 * 0.54).trunc() as u32;
        let card = rgb(20, 20, 20);
        assert_eq!(canvas.pixel(140 - 44, py + 100), Some(card));
        assert_eq!(canvas.pixel(500 + 44, py + 100), Some(card));
        // Just past the outer edges both panels show through
        assert_eq!(canvas.pixel(140 - 54, py + 100), Some(rgb(40, 45, 50)));
        assert_eq!(canvas.pixel(500 + 54, py + 100), Some(rgb(28, 26, 28)));
    }

    #[test]
    fn test_roster_names_are_distinct() {
        let names: std::collections::HashSet<_> = ROSTER.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), ROSTER.len());
    }

    #[test]
    fn test_split_panel_colors() {
        let config = RenderConfig {
            width: 640,
            height: 360,
            ..RenderConfig::new()
        };
        let canvas = MainMenu::new()
            .render(&config, &Typeface::builtin(), &mut create_rng(&config))
            .unwrap();
        // Bottom corners sit clear of every icon, card and hint
        assert_eq!(canvas.pixel(2, 300), Some(rgb(40, 45, 50)));
        assert_eq!(canvas.pixel(637, 300), Some(rgb(28, 26, 28)));
    }

    #[test]
    fn test_render_ignores_rng_state() {
        let config = RenderConfig::for_testing();
        let menu = MainMenu::new();
        let typeface = Typeface::builtin();
        let a = menu.render(&config, &typeface, &mut create_rng(&config)).unwrap();
        let mut other = crate::utils::create_scene_rng(&config, 9);
        let b = menu.render(&config, &typeface, &mut other).unwrap();
        assert_eq!(a.as_image(), b.as_image());
    }
}
