//! # Fighter Sprites
//!
//! Blocky cel-outlined brawlers for the side-scrolling fight mockup.

use crate::rendering::{palette, rgb, Canvas, Color, Rect};

/// Accessories and facial details a fighter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FighterFeature {
    /// Dark fist on the rear arm
    Fist,
    /// Full beard under the face
    Beard,
    /// Thin mustache line
    Mustache,
    /// Open scissors in the front hand
    Scissors,
}

/// Which way a fighter faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// Horizontal sign of the facing direction.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Placement and look of one fighter.
#[derive(Debug, Clone, PartialEq)]
pub struct Fighter {
    /// Horizontal center of the torso
    pub x: f32,
    /// Bottom of the torso
    pub y: f32,
    /// Size multiplier
    pub scale: f32,
    /// Shirt color
    pub color: Color,
    /// Skin color for head and arms
    pub head_color: Color,
    pub features: Vec<FighterFeature>,
    pub facing: Facing,
}

impl Fighter {
    pub fn has(&self, feature: FighterFeature) -> bool {
        self.features.contains(&feature)
    }

    fn torso(&self) -> Rect {
        let half_w = ((90.0 * self.scale).trunc() / 2.0).trunc();
        let h = (120.0 * self.scale).trunc();
        Rect::new(self.x - half_w, self.y - h, self.x + half_w, self.y)
    }

    /// Torso edges on the facing side and the opposite side.
    fn shoulders(&self) -> (f32, f32) {
        let torso = self.torso();
        match self.facing {
            Facing::Right => (torso.x1, torso.x0),
            Facing::Left => (torso.x0, torso.x1),
        }
    }

    /// Center of the head.
    pub fn head_center(&self) -> (f32, f32) {
        let torso_h = (120.0 * self.scale).trunc();
        let head_r = self.head_radius();
        (
            self.x + self.facing.sign() * (18.0 * self.scale).trunc(),
            self.y - torso_h - head_r + 10.0,
        )
    }

    fn head_radius(&self) -> f32 {
        (36.0 * self.scale).trunc()
    }

    /// Tip of the front (facing-side) arm, where props are held.
    pub fn front_hand(&self) -> (f32, f32) {
        let (front, _) = self.shoulders();
        let reach = (40.0 * self.scale).trunc() * self.facing.sign();
        (front + reach, self.y - (10.0 * self.scale).trunc())
    }

    /// Tip of the rear arm.
    pub fn rear_hand(&self) -> (f32, f32) {
        let (_, rear) = self.shoulders();
        let reach = (40.0 * self.scale).trunc() * self.facing.sign();
        (rear - reach, self.y - (10.0 * self.scale).trunc())
    }
}

/// Draws a fighter: outlined torso and head, face, arms and props.
pub fn draw_fighter(canvas: &mut Canvas, fighter: &Fighter) {
    let s = fighter.scale;
    let dir = fighter.facing.sign();
    let torso = fighter.torso();
    canvas.fill_rect_outlined(torso, fighter.color, palette::BLACK, 8.0);

    let (hx, hy) = fighter.head_center();
    let head_r = fighter.head_radius();
    canvas.fill_ellipse_outlined(Rect::circle((hx, hy), head_r), fighter.head_color, palette::BLACK, 6.0);

    if fighter.has(FighterFeature::Beard) {
        canvas.fill_ellipse(
            Rect::new(hx - head_r * 0.7, hy + 2.0, hx + head_r * 0.7, hy + head_r + 4.0),
            rgb(70, 42, 24),
        );
    }

    let eye_offset = (12.0 * s).trunc() * dir;
    canvas.fill_ellipse(Rect::new(hx - 8.0 + eye_offset, hy - 6.0, hx - 2.0 + eye_offset, hy), palette::BLACK);
    canvas.fill_ellipse(Rect::new(hx + 2.0 + eye_offset, hy - 6.0, hx + 8.0 + eye_offset, hy), palette::BLACK);

    if fighter.has(FighterFeature::Mustache) {
        canvas.line((hx - 10.0, hy + 10.0), (hx + 10.0, hy + 10.0), rgb(60, 40, 20), (3.0 * s).trunc().max(2.0));
    }

    let shoulder_y = fighter.y - (120.0 * s).trunc() + 20.0;
    let elbow_y = fighter.y - (10.0 * s).trunc();
    let (front_edge, rear_edge) = fighter.shoulders();
    let rear = fighter.rear_hand();
    let front = fighter.front_hand();
    canvas.fill_polygon(&[(rear_edge, shoulder_y), rear, (rear_edge, elbow_y)], fighter.head_color);
    canvas.fill_polygon(&[(front_edge, shoulder_y), front, (front_edge, elbow_y)], fighter.head_color);

    if fighter.has(FighterFeature::Scissors) {
        let (fx, fy) = front;
        let tip = (fx + 30.0 * dir, fy - 10.0);
        canvas.line((fx, fy), tip, rgb(180, 180, 200), 6.0);
        canvas.fill_ellipse(Rect::new(tip.0 - 8.0, fy - 16.0, tip.0 + 8.0, fy), rgb(200, 200, 200));
    }
    if fighter.has(FighterFeature::Fist) {
        canvas.fill_ellipse(Rect::circle(rear, 12.0), rgb(60, 40, 20));
    }
}
