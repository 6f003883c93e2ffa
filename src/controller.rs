//! Routes [`UiEvent`]s to the tool state and the canvas.
//!
//! | event          | DRAWING        | OFF      | ERASING        |
//! |----------------|----------------|----------|----------------|
//! | pointer move   | stamp a shape  | nothing  | erase under it |
//! | eraser button  | → ERASING      | → ERASING| stays          |
//! | click          | → OFF          | → DRAWING| pen flips      |
//!
//! Clicking flips the pen between down (drawing) and up (off), so a click
//! while erasing lands in whichever of the two the pen flag points to.

use log::{debug, info};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::input::UiEvent;
use crate::stamp::stamp;
use crate::state::{PenMode, ToolState};

#[derive(Debug, Default)]
pub struct Controller {
    tool: ToolState,
    canvas: Canvas,
}

impl Controller {
    pub fn new(tool: ToolState) -> Self {
        Self {
            tool,
            canvas: Canvas::new(),
        }
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Handles one event to completion. Returns the canvas command that was
    /// applied, if the event touched the canvas at all.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<Command> {
        let command = match event {
            UiEvent::ShapeSelected(kind) => {
                self.tool.set_shape_kind(kind);
                None
            }
            UiEvent::SizeSelected(size) => {
                self.tool.set_brush_size(size);
                None
            }
            UiEvent::ColorSelected(color) => {
                self.tool.set_color(color);
                None
            }
            UiEvent::FillToggled(filled) => {
                self.tool.set_filled(filled);
                None
            }
            UiEvent::EraseSelected => {
                self.tool.enter_erase();
                None
            }
            UiEvent::ClearPressed => {
                info!("Clearing canvas ({} shapes)", self.canvas.len());
                Some(Command::Clear)
            }
            UiEvent::PointerMoved(pos) => match self.tool.pen_mode() {
                PenMode::Drawing => Some(Command::AddShape(stamp(&self.tool, pos))),
                PenMode::Erasing => Some(Command::EraseAt(pos)),
                PenMode::Off => None,
            },
            UiEvent::PointerClicked(_) => {
                self.tool.toggle_pen();
                None
            }
        }?;

        let changed = command.execute(&mut self.canvas);
        debug!("{} applied (changed: {})", command.name(), changed);
        Some(command)
    }
}
