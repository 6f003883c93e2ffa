use draw_something::color::{self, BrushColor};
use draw_something::{
    BrushSize, Command, Controller, PenMode, ShapeGeometry, ShapeKind, ToolState, UiEvent,
};
use egui::pos2;

/// Scenario A: a filled green medium rectangle stamped at (100, 100).
fn scenario_a() -> Controller {
    let mut controller = Controller::default();
    controller.dispatch(UiEvent::ShapeSelected(ShapeKind::Rectangle));
    controller.dispatch(UiEvent::SizeSelected(BrushSize::Medium));
    controller.dispatch(UiEvent::ColorSelected(BrushColor::Green));
    controller.dispatch(UiEvent::FillToggled(true));
    controller.dispatch(UiEvent::PointerMoved(pos2(100.0, 100.0)));
    controller
}

#[test]
fn test_scenario_a_stamp() {
    let controller = scenario_a();
    let shapes = controller.canvas().shapes();
    assert_eq!(shapes.len(), 1);

    let shape = &shapes[0];
    let green = BrushColor::Green.color32();
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.center(), pos2(100.0, 100.0));
    let ShapeGeometry::Rectangle { width, height } = shape.geometry() else {
        panic!("expected a rectangle, got {:?}", shape.geometry());
    };
    assert!((width - 26.0).abs() < 1e-4);
    assert_eq!(height, 20.0);
    assert_eq!(shape.stroke_color(), green);
    assert_eq!(shape.fill_color(), Some(green));
}

#[test]
fn test_scenario_b_pen_off() {
    let mut controller = scenario_a();
    assert!(controller.dispatch(UiEvent::PointerClicked(pos2(50.0, 50.0))).is_none());
    assert_eq!(controller.tool().pen_mode(), PenMode::Off);
    assert_eq!(controller.tool().mode_label(), "off");

    assert!(controller.dispatch(UiEvent::PointerMoved(pos2(50.0, 50.0))).is_none());
    assert_eq!(controller.canvas().len(), 1);
}

#[test]
fn test_scenario_c_pen_back_down() {
    let mut controller = scenario_a();
    controller.dispatch(UiEvent::PointerClicked(pos2(50.0, 50.0)));
    controller.dispatch(UiEvent::PointerClicked(pos2(50.0, 50.0)));

    let green = BrushColor::Green.color32();
    assert_eq!(controller.tool().pen_mode(), PenMode::Drawing);
    assert_eq!(controller.tool().mode_label(), "draw");
    assert_eq!(controller.tool().active_color(), green);

    controller.dispatch(UiEvent::PointerMoved(pos2(50.0, 50.0)));
    let shapes = controller.canvas().shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[1].center(), pos2(50.0, 50.0));
    assert_eq!(shapes[1].stroke_color(), green);
    assert_eq!(shapes[1].fill_color(), Some(green));
}

#[test]
fn test_scenario_d_erase_overlapping() {
    let mut controller = Controller::default();
    controller.dispatch(UiEvent::SizeSelected(BrushSize::Medium));
    controller.dispatch(UiEvent::PointerMoved(pos2(100.0, 100.0)));
    controller.dispatch(UiEvent::PointerMoved(pos2(110.0, 100.0)));
    controller.dispatch(UiEvent::PointerMoved(pos2(300.0, 300.0)));
    assert_eq!(controller.canvas().len(), 3);

    controller.dispatch(UiEvent::EraseSelected);
    assert_eq!(controller.tool().pen_mode(), PenMode::Erasing);
    assert_eq!(controller.tool().mode_label(), "erase");
    assert_eq!(controller.tool().active_color(), color::BACKGROUND);

    let command = controller.dispatch(UiEvent::PointerMoved(pos2(105.0, 100.0)));
    assert!(matches!(command, Some(Command::EraseAt(_))));

    let shapes = controller.canvas().shapes();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].center(), pos2(300.0, 300.0));
}

#[test]
fn test_scenario_e_clear() {
    let mut controller = scenario_a();
    controller.dispatch(UiEvent::PointerMoved(pos2(10.0, 10.0)));
    assert!(matches!(
        controller.dispatch(UiEvent::ClearPressed),
        Some(Command::Clear)
    ));
    assert!(controller.canvas().is_empty());

    controller.dispatch(UiEvent::ClearPressed);
    assert!(controller.canvas().is_empty());
}

#[test]
fn test_control_events_leave_canvas_alone() {
    let mut controller = scenario_a();
    for event in [
        UiEvent::ShapeSelected(ShapeKind::Ellipse),
        UiEvent::SizeSelected(BrushSize::Large),
        UiEvent::ColorSelected(BrushColor::Blue),
        UiEvent::FillToggled(false),
        UiEvent::EraseSelected,
    ] {
        assert!(controller.dispatch(event).is_none());
    }
    assert_eq!(controller.canvas().len(), 1);
}

#[test]
fn test_moves_stamp_continuously() {
    let mut controller = Controller::new(ToolState::default());
    for x in 0..10 {
        controller.dispatch(UiEvent::PointerMoved(pos2(x as f32, 0.0)));
    }
    let centers: Vec<_> = controller.canvas().iter().map(|s| s.center().x).collect();
    assert_eq!(centers, (0..10).map(|x| x as f32).collect::<Vec<_>>());
}
