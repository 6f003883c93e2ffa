use egui::Color32;

/// Canvas background, also used as the ink while erasing.
pub const BACKGROUND: Color32 = Color32::from_rgb(0, 255, 255);

/// Ink while the pen is lifted.
pub const TRANSPARENT: Color32 = Color32::TRANSPARENT;

/// The brush colors offered by the color panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl BrushColor {
    pub const ALL: [BrushColor; 3] = [BrushColor::Red, BrushColor::Green, BrushColor::Blue];

    pub fn color32(self) -> Color32 {
        match self {
            BrushColor::Red => Color32::from_rgb(255, 0, 0),
            // Plain "green" is half intensity, not lime
            BrushColor::Green => Color32::from_rgb(0, 128, 0),
            BrushColor::Blue => Color32::from_rgb(0, 0, 255),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushColor::Red => "red",
            BrushColor::Green => "green",
            BrushColor::Blue => "blue",
        }
    }
}

impl From<BrushColor> for Color32 {
    fn from(color: BrushColor) -> Self {
        color.color32()
    }
}
