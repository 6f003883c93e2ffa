use egui::Color32;
use log::{debug, info};

use crate::color::{self, BrushColor};

/// What a pointer move over the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenMode {
    /// Stamps a shape per pointer move
    #[default]
    Drawing,
    /// Pointer moves are ignored
    Off,
    /// Removes shapes under the pointer
    Erasing,
}

impl PenMode {
    pub fn label(self) -> &'static str {
        match self {
            PenMode::Drawing => "draw",
            PenMode::Off => "off",
            PenMode::Erasing => "erase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Ellipse];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Nominal radius/height in canvas units.
    pub fn value(self) -> u32 {
        match self {
            BrushSize::Small => 5,
            BrushSize::Medium => 20,
            BrushSize::Large => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushSize::Small => "small",
            BrushSize::Medium => "medium",
            BrushSize::Large => "large",
        }
    }
}

/// The brush selection driven by the control panels.
///
/// `active_color` always tracks the pen mode: the last chosen color while
/// drawing, [`color::TRANSPARENT`] while the pen is off and the canvas
/// background while erasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pen_mode: PenMode,
    pen_down: bool,
    shape_kind: ShapeKind,
    brush_size: BrushSize,
    filled: bool,
    active_color: Color32,
    last_chosen_color: BrushColor,
    background: Color32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(color::BACKGROUND)
    }
}

impl ToolState {
    /// Creates the initial selection; `background` is the ink used while erasing.
    pub fn new(background: Color32) -> Self {
        let last_chosen_color = BrushColor::default();
        Self {
            pen_mode: PenMode::Drawing,
            pen_down: true,
            shape_kind: ShapeKind::default(),
            brush_size: BrushSize::default(),
            filled: false,
            active_color: last_chosen_color.color32(),
            last_chosen_color,
            background,
        }
    }

    pub fn pen_mode(&self) -> PenMode {
        self.pen_mode
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn last_chosen_color(&self) -> BrushColor {
        self.last_chosen_color
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Text for the mode label: "draw", "off" or "erase".
    pub fn mode_label(&self) -> &'static str {
        self.pen_mode.label()
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        debug!("Brush shape set to {}", kind.label());
        self.shape_kind = kind;
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        debug!("Brush size set to {} ({})", size.label(), size.value());
        self.brush_size = size;
    }

    pub fn set_filled(&mut self, filled: bool) {
        debug!("Brush fill set to {}", filled);
        self.filled = filled;
    }

    /// Records a color choice. The ink only changes right away while drawing;
    /// otherwise the choice is restored the next time the pen goes down.
    pub fn set_color(&mut self, color: BrushColor) {
        debug!("Brush color set to {}", color.label());
        self.last_chosen_color = color;
        if self.pen_mode == PenMode::Drawing {
            self.active_color = color.color32();
        }
    }

    pub fn enter_erase(&mut self) {
        info!("Pen mode: erase");
        self.pen_mode = PenMode::Erasing;
        self.active_color = self.background;
    }

    /// Flips the pen between down (drawing) and up (off).
    pub fn toggle_pen(&mut self) {
        self.pen_down = !self.pen_down;
        if self.pen_down {
            self.pen_mode = PenMode::Drawing;
            self.active_color = self.last_chosen_color.color32();
        } else {
            self.pen_mode = PenMode::Off;
            self.active_color = color::TRANSPARENT;
        }
        info!("Pen mode: {}", self.mode_label());
    }
}
