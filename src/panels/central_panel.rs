use egui::{Sense, Ui};

use crate::controller::Controller;
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// Allocates the drawing area, applies its pointer events and paints it.
/// Returns whether the canvas contents changed.
pub fn central_panel(
    ui: &mut Ui,
    input: &mut InputHandler,
    renderer: &Renderer,
    controller: &mut Controller,
) -> bool {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let canvas_rect = response.rect;

    let mut changed = false;
    for event in input.process_input(ui.ctx(), canvas_rect) {
        changed |= controller.dispatch(event).is_some();
    }

    renderer.render(&painter, canvas_rect, controller.canvas());
    changed
}
