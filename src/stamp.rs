//! Turns the current brush selection into a shape at a pointer position.

use egui::Pos2;

use crate::element::{PlacedShape, factory};
use crate::state::{ShapeKind, ToolState};

/// Builds the shape a pointer move at `pos` leaves behind.
///
/// Circles take the brush size as radius. Rectangles are `1.3 * size` wide
/// and `size` high; ellipses use the same pair as their radii. The outline
/// uses the active color, and so does the interior when fill is on.
pub fn stamp(tool: &ToolState, pos: Pos2) -> PlacedShape {
    let size = tool.brush_size().value() as f32;
    let color = tool.active_color();
    let filled = tool.is_filled();
    match tool.shape_kind() {
        ShapeKind::Circle => factory::create_circle(pos, size, color, filled),
        ShapeKind::Rectangle => {
            factory::create_rectangle(pos, factory::wide_extent(size), color, filled)
        }
        ShapeKind::Ellipse => {
            factory::create_ellipse(pos, factory::wide_extent(size), color, filled)
        }
    }
}
