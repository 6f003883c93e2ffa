use egui::{Context, Pos2};

/// What the pointer did during one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Where the pointer hovers, if it is over the window
    pub pos: Option<Pos2>,
    /// Whether any button is held down
    pub any_down: bool,
    /// Whether a button press and release completed as a click
    pub clicked: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.hover_pos(),
            any_down: input.pointer.any_down(),
            clicked: input.pointer.any_click(),
        })
    }

    pub fn hovering(pos: Pos2) -> Self {
        Self {
            pos: Some(pos),
            ..Self::default()
        }
    }

    pub fn clicking(pos: Pos2) -> Self {
        Self {
            pos: Some(pos),
            clicked: true,
            ..Self::default()
        }
    }
}
