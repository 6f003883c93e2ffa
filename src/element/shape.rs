use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Stroke as EguiStroke, Vec2, vec2};
use uuid::Uuid;

use super::Element;
use super::common::OUTLINE_WIDTH;
use crate::geometry::hit_testing;
use crate::state::ShapeKind;

/// Identity of a placed shape; two stamps never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dimensions of a placed shape, all centered on the shape's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Circle { radius: f32 },
    /// Full width and height
    Rectangle { width: f32, height: f32 },
    Ellipse { radius_x: f32, radius_y: f32 },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Circle { .. } => ShapeKind::Circle,
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
        }
    }

    /// Width and height of the filled area.
    pub fn extent(&self) -> Vec2 {
        match *self {
            ShapeGeometry::Circle { radius } => vec2(radius, radius) * 2.0,
            ShapeGeometry::Rectangle { width, height } => vec2(width, height),
            ShapeGeometry::Ellipse { radius_x, radius_y } => vec2(radius_x, radius_y) * 2.0,
        }
    }
}

/// One stamp on the canvas. Its appearance is fixed at creation.
#[derive(Debug, Clone)]
pub struct PlacedShape {
    id: ShapeId,
    center: Pos2,
    geometry: ShapeGeometry,
    stroke_color: Color32,
    fill_color: Option<Color32>,
}

impl PlacedShape {
    pub fn new(
        center: Pos2,
        geometry: ShapeGeometry,
        stroke_color: Color32,
        fill_color: Option<Color32>,
    ) -> Self {
        Self {
            id: ShapeId::new(),
            center,
            geometry,
            stroke_color,
            fill_color,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn geometry(&self) -> ShapeGeometry {
        self.geometry
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    /// `None` means the interior is left unpainted.
    pub fn fill_color(&self) -> Option<Color32> {
        self.fill_color
    }

    /// Same kind, position, size and colors, ignoring identity.
    pub fn same_appearance(&self, other: &PlacedShape) -> bool {
        self.center == other.center
            && self.geometry == other.geometry
            && self.stroke_color == other.stroke_color
            && self.fill_color == other.fill_color
    }
}

impl Element for PlacedShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        self.kind().label()
    }

    fn rect(&self) -> Rect {
        hit_testing::centered_rect(self.center, self.geometry.extent())
            .expand(hit_testing::stroke_padding(OUTLINE_WIDTH))
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let center = self.center + origin;
        let stroke = EguiStroke::new(OUTLINE_WIDTH, self.stroke_color);
        let fill = self.fill_color.unwrap_or(Color32::TRANSPARENT);
        match self.geometry {
            ShapeGeometry::Circle { radius } => {
                painter.circle(center, radius, fill, stroke);
            }
            ShapeGeometry::Rectangle { width, height } => {
                let rect = hit_testing::centered_rect(center, vec2(width, height));
                if self.fill_color.is_some() {
                    painter.rect_filled(rect, 0.0, fill);
                }
                painter.rect_stroke(rect, 0.0, stroke);
            }
            ShapeGeometry::Ellipse { radius_x, radius_y } => {
                let radii = vec2(radius_x, radius_y);
                if self.fill_color.is_some() {
                    painter.add(EguiShape::ellipse_filled(center, radii, fill));
                }
                painter.add(EguiShape::ellipse_stroke(center, radii, stroke));
            }
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let padding = hit_testing::stroke_padding(OUTLINE_WIDTH);
        match self.geometry {
            ShapeGeometry::Circle { radius } => {
                hit_testing::circle_contains(self.center, radius, pos, padding)
            }
            ShapeGeometry::Rectangle { width, height } => {
                hit_testing::rect_contains(self.center, vec2(width, height), pos, padding)
            }
            ShapeGeometry::Ellipse { radius_x, radius_y } => hit_testing::ellipse_contains(
                self.center,
                vec2(radius_x, radius_y),
                pos,
                padding,
            ),
        }
    }
}
