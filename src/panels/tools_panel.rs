use egui::Ui;

use crate::color::BrushColor;
use crate::input::UiEvent;
use crate::state::{BrushSize, ShapeKind, ToolState};

/// Mode label and the clear button
pub fn status_panel(ui: &mut Ui, tool: &ToolState, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        ui.label(tool.mode_label());
        if ui.button("clear").clicked() {
            events.push(UiEvent::ClearPressed);
        }
    });
}

pub fn shape_panel(ui: &mut Ui, tool: &ToolState, events: &mut Vec<UiEvent>) {
    ui.label("brush shape");
    for kind in ShapeKind::ALL {
        if ui.radio(tool.shape_kind() == kind, kind.label()).clicked() {
            events.push(UiEvent::ShapeSelected(kind));
        }
    }
}

pub fn fill_group(ui: &mut Ui, tool: &ToolState, events: &mut Vec<UiEvent>) {
    ui.label("brush fill");
    let mut filled = tool.is_filled();
    if ui.checkbox(&mut filled, "filled?").changed() {
        events.push(UiEvent::FillToggled(filled));
    }
}

pub fn size_panel(ui: &mut Ui, tool: &ToolState, events: &mut Vec<UiEvent>) {
    ui.label("brush size");
    for size in BrushSize::ALL {
        if ui.radio(tool.brush_size() == size, size.label()).clicked() {
            events.push(UiEvent::SizeSelected(size));
        }
    }
}

/// Color radios and the eraser button
pub fn color_panel(ui: &mut Ui, tool: &ToolState, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        ui.label("brush color");
        for color in BrushColor::ALL {
            if ui.radio(tool.last_chosen_color() == color, color.label()).clicked() {
                events.push(UiEvent::ColorSelected(color));
            }
        }
        if ui.button("eraser").clicked() {
            events.push(UiEvent::EraseSelected);
        }
    });
}
