use macroquad::prelude::*;

use crate::rover_draw::heading_vector;

pub const NEEDLE_TRANSITION_SECONDS: f64 = 0.3;
pub const COMPASS_BORDER: Color = Color::from_rgba(117, 25, 0, 255);

/// Linear sweep of the needle between two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleTween {
    from: f32,
    to: f32,
    started: f64,
}

impl NeedleTween {
    pub fn settled(angle: f32) -> Self {
        Self {
            from: angle,
            to: angle,
            started: f64::NEG_INFINITY,
        }
    }

    pub fn retarget(&mut self, angle: f32, now: f64) {
        if angle == self.to {
            return;
        }
        self.from = self.angle_at(now);
        self.to = angle;
        self.started = now;
    }

    pub fn angle_at(&self, now: f64) -> f32 {
        let t = ((now - self.started) / NEEDLE_TRANSITION_SECONDS).clamp(0.0, 1.0) as f32;
        self.from + (self.to - self.from) * t
    }
}

pub fn draw_compass(center: Vec2, radius: f32, needle_degrees: f32) {
    let border = (radius * 0.07).max(1.0);
    draw_circle(center.x, center.y, radius, WHITE);
    draw_circle_lines(center.x, center.y, radius, border, COMPASS_BORDER);

    let north = heading_vector(needle_degrees);
    let side = vec2(-north.y, north.x);
    let tip_length = radius * 0.75;
    let half_width = radius * 0.12;
    let north_tip = center + north * tip_length;
    let south_tip = center - north * tip_length;
    draw_triangle(
        north_tip,
        center + side * half_width,
        center - side * half_width,
        RED,
    );
    draw_triangle(
        south_tip,
        center + side * half_width,
        center - side * half_width,
        DARKGRAY,
    );

    let label = center + north * (radius * 0.88);
    let font_size = radius * 0.25;
    draw_text("N", label.x - font_size * 0.25, label.y + font_size * 0.3, font_size, BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_sweeps_linearly_then_settles() {
        let mut tween = NeedleTween::settled(0.0);
        tween.retarget(-90.0, 10.0);
        assert_eq!(tween.angle_at(10.0), 0.0);
        assert!((tween.angle_at(10.15) + 45.0).abs() < 1e-3);
        assert_eq!(tween.angle_at(10.3), -90.0);
        assert_eq!(tween.angle_at(20.0), -90.0);
    }

    #[test]
    fn wrap_to_zero_sweeps_back_through_the_dial() {
        let mut tween = NeedleTween::settled(-270.0);
        tween.retarget(0.0, 0.0);
        assert!((tween.angle_at(0.15) + 135.0).abs() < 1e-3);
    }
}
