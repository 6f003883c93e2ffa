/// Outline width of every stamped shape.
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Width-to-height ratio of rectangles and ellipses.
pub const WIDE_ASPECT: f32 = 1.3;
