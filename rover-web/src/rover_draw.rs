use macroquad::prelude::*;

#[derive(Debug, Clone)]
pub struct RoverDrawConfig {
    pub body_ratio: f32,     // body half-width as a fraction of the cell
    pub wheel_ratio: f32,    // wheel radius as a fraction of the cell
    pub mast_ratio: f32,     // heading mast length as a fraction of the cell
    pub thickness_ratio: f32,
    pub body_color: Color,
    pub wheel_color: Color,
    pub mast_color: Color,
}

impl Default for RoverDrawConfig {
    fn default() -> Self {
        Self {
            body_ratio: 0.28,
            wheel_ratio: 0.09,
            mast_ratio: 0.45,
            thickness_ratio: 0.08,
            body_color: Color::from_rgba(196, 120, 60, 255),
            wheel_color: Color::from_rgba(40, 40, 40, 255),
            mast_color: Color::from_rgba(117, 25, 0, 255),
        }
    }
}

/// Unit vector for a clockwise rotation from screen-up, in degrees.
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    vec2(radians.sin(), -radians.cos())
}

pub fn draw_rover(center: Vec2, cell_size: f32, degrees: f32, config: &RoverDrawConfig) {
    let ahead = heading_vector(degrees);
    let side = vec2(-ahead.y, ahead.x);
    let half = cell_size * config.body_ratio;
    let wheel_radius = (cell_size * config.wheel_ratio).max(1.0);
    let thickness = (cell_size * config.thickness_ratio).max(1.0);

    for (along, across) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        let wheel = center + ahead * (half * 0.7 * along) + side * (half * across);
        draw_circle(wheel.x, wheel.y, wheel_radius, config.wheel_color);
    }

    // Body as two triangles so it follows the rotation.
    let corners = [
        center + ahead * half + side * half * 0.8,
        center + ahead * half - side * half * 0.8,
        center - ahead * half - side * half * 0.8,
        center - ahead * half + side * half * 0.8,
    ];
    draw_triangle(corners[0], corners[1], corners[2], config.body_color);
    draw_triangle(corners[0], corners[2], corners[3], config.body_color);

    let mast_end = center + ahead * (cell_size * config.mast_ratio);
    draw_line(
        center.x,
        center.y,
        mast_end.x,
        mast_end.y,
        thickness,
        config.mast_color,
    );
    draw_circle(mast_end.x, mast_end.y, thickness, config.mast_color);
}
