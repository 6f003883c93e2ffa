use egui::Pos2;

use crate::canvas::Canvas;
use crate::element::PlacedShape;

/// A change to the canvas contents
#[derive(Debug, Clone)]
pub enum Command {
    /// Puts a stamp on top of everything else
    AddShape(PlacedShape),
    /// Removes every shape under the position
    EraseAt(Pos2),
    /// Empties the canvas
    Clear,
}

impl Command {
    /// Applies the command and reports whether the canvas changed.
    pub fn execute(&self, canvas: &mut Canvas) -> bool {
        match self {
            Command::AddShape(shape) => {
                canvas.append(shape.clone());
                true
            }
            Command::EraseAt(pos) => canvas.erase_at(*pos) > 0,
            Command::Clear => {
                let changed = !canvas.is_empty();
                canvas.clear();
                changed
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddShape(_) => "Add Shape",
            Command::EraseAt(_) => "Erase",
            Command::Clear => "Clear",
        }
    }
}
