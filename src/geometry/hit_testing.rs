use egui::{Pos2, Rect, Vec2};

/// Half of the outline width counts as part of the shape.
pub fn stroke_padding(stroke_width: f32) -> f32 {
    stroke_width.max(0.0) / 2.0
}

pub fn circle_contains(center: Pos2, radius: f32, pos: Pos2, padding: f32) -> bool {
    let reach = radius + padding;
    center.distance_sq(pos) <= reach * reach
}

/// `size` is the full width and height, centered on `center`.
pub fn rect_contains(center: Pos2, size: Vec2, pos: Pos2, padding: f32) -> bool {
    centered_rect(center, size).expand(padding).contains(pos)
}

pub fn ellipse_contains(center: Pos2, radii: Vec2, pos: Pos2, padding: f32) -> bool {
    let rx = radii.x + padding;
    let ry = radii.y + padding;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let d = pos - center;
    (d.x / rx).powi(2) + (d.y / ry).powi(2) <= 1.0
}

pub fn centered_rect(center: Pos2, size: Vec2) -> Rect {
    Rect::from_center_size(center, size)
}
