use egui::{Painter, Pos2, Rect, Vec2};

mod common;
pub(crate) mod shape;

pub use common::{OUTLINE_WIDTH, WIDE_ASPECT};
pub use shape::{PlacedShape, ShapeGeometry, ShapeId};

/// Common trait for everything the canvas can hold
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ShapeId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Get the bounding rectangle for this element, outline included
    fn rect(&self) -> Rect;

    /// Draw the element, offsetting canvas coordinates by `origin`
    fn draw(&self, painter: &Painter, origin: Vec2);

    /// Test if the element contains the given canvas position
    fn hit_test(&self, pos: Pos2) -> bool;
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::{vec2, Color32};

    fn fill_for(color: Color32, filled: bool) -> Option<Color32> {
        filled.then_some(color)
    }

    pub fn create_circle(center: Pos2, radius: f32, color: Color32, filled: bool) -> PlacedShape {
        PlacedShape::new(
            center,
            ShapeGeometry::Circle { radius },
            color,
            fill_for(color, filled),
        )
    }

    pub fn create_rectangle(center: Pos2, size: Vec2, color: Color32, filled: bool) -> PlacedShape {
        PlacedShape::new(
            center,
            ShapeGeometry::Rectangle {
                width: size.x,
                height: size.y,
            },
            color,
            fill_for(color, filled),
        )
    }

    pub fn create_ellipse(center: Pos2, radii: Vec2, color: Color32, filled: bool) -> PlacedShape {
        PlacedShape::new(
            center,
            ShapeGeometry::Ellipse {
                radius_x: radii.x,
                radius_y: radii.y,
            },
            color,
            fill_for(color, filled),
        )
    }

    /// A rectangle or ellipse `size` high and `WIDE_ASPECT` times as wide.
    pub fn wide_extent(size: f32) -> Vec2 {
        vec2(WIDE_ASPECT * size, size)
    }
}
