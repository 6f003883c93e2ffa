use draw_something::color::BrushColor;
use draw_something::{BrushSize, Element, ShapeGeometry, ShapeKind, ToolState, stamp};
use egui::pos2;

fn tool_with(kind: ShapeKind, size: BrushSize, filled: bool) -> ToolState {
    let mut tool = ToolState::default();
    tool.set_shape_kind(kind);
    tool.set_brush_size(size);
    tool.set_filled(filled);
    tool
}

#[test]
fn test_geometry_formulas_for_every_size() {
    for size in BrushSize::ALL {
        let s = size.value() as f32;

        let circle = stamp(&tool_with(ShapeKind::Circle, size, false), pos2(0.0, 0.0));
        assert_eq!(circle.geometry(), ShapeGeometry::Circle { radius: s });

        let rect = stamp(&tool_with(ShapeKind::Rectangle, size, false), pos2(0.0, 0.0));
        assert_eq!(
            rect.geometry(),
            ShapeGeometry::Rectangle {
                width: 1.3 * s,
                height: s
            }
        );

        let ellipse = stamp(&tool_with(ShapeKind::Ellipse, size, false), pos2(0.0, 0.0));
        assert_eq!(
            ellipse.geometry(),
            ShapeGeometry::Ellipse {
                radius_x: 1.3 * s,
                radius_y: s
            }
        );
    }
}

#[test]
fn test_stamp_records_kind_and_center() {
    for kind in ShapeKind::ALL {
        let shape = stamp(&tool_with(kind, BrushSize::Medium, false), pos2(42.0, 17.0));
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.center(), pos2(42.0, 17.0));
        assert_eq!(shape.element_type(), kind.label());
    }
}

#[test]
fn test_fill_follows_checkbox() {
    let mut tool = tool_with(ShapeKind::Circle, BrushSize::Small, false);
    tool.set_color(BrushColor::Blue);
    let hollow = stamp(&tool, pos2(5.0, 5.0));
    assert_eq!(hollow.stroke_color(), BrushColor::Blue.color32());
    assert_eq!(hollow.fill_color(), None);

    tool.set_filled(true);
    let solid = stamp(&tool, pos2(5.0, 5.0));
    assert_eq!(solid.fill_color(), Some(BrushColor::Blue.color32()));
}

#[test]
fn test_stamp_is_deterministic_apart_from_identity() {
    let tool = tool_with(ShapeKind::Ellipse, BrushSize::Large, true);
    let a = stamp(&tool, pos2(1.0, 2.0));
    let b = stamp(&tool, pos2(1.0, 2.0));
    assert!(a.same_appearance(&b));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_placed_shape_is_frozen() {
    let mut tool = tool_with(ShapeKind::Circle, BrushSize::Small, false);
    let shape = stamp(&tool, pos2(10.0, 10.0));

    tool.set_color(BrushColor::Green);
    tool.set_brush_size(BrushSize::Large);
    tool.set_filled(true);

    assert_eq!(shape.stroke_color(), BrushColor::Red.color32());
    assert_eq!(shape.geometry(), ShapeGeometry::Circle { radius: 5.0 });
    assert_eq!(shape.fill_color(), None);
}
