use egui::{Context, Pos2, Rect};

mod state;
pub use state::PointerSample;

use crate::color::BrushColor;
use crate::state::{BrushSize, ShapeKind};

/// Everything the user can do, as delivered to the controller.
/// Pointer positions are relative to the canvas top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    ShapeSelected(ShapeKind),
    SizeSelected(BrushSize),
    ColorSelected(BrushColor),
    FillToggled(bool),
    EraseSelected,
    ClearPressed,
    PointerMoved(Pos2),
    PointerClicked(Pos2),
}

/// Turns raw pointer state into canvas events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Reads this frame's pointer state from egui
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<UiEvent> {
        self.translate(PointerSample::from_context(ctx), canvas_rect)
    }

    /// A move is reported only when the position changed and no button is
    /// held, so dragging does not count as moving. Anything outside
    /// `canvas_rect` is ignored.
    pub fn translate(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<UiEvent> {
        let mut events = Vec::new();

        let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) else {
            self.last_pointer_pos = None;
            return events;
        };
        let local = (pos - canvas_rect.min).to_pos2();

        if self.last_pointer_pos != Some(local) && !sample.any_down {
            events.push(UiEvent::PointerMoved(local));
        }
        self.last_pointer_pos = Some(local);

        if sample.clicked {
            events.push(UiEvent::PointerClicked(local));
        }

        events
    }
}
