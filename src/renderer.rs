// src/renderer.rs
use egui::{Color32, Painter, Rect};

use crate::canvas::Canvas;
use crate::element::Element;

#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    /// Creates a renderer painting the canvas area with `background`
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paints the background and then every shape, oldest first.
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle of the canvas
    ///     canvas (Canvas): Shapes in canvas coordinates
    ///
    /// Returns:
    ///     usize: Number of shapes drawn
    pub fn render(&self, painter: &Painter, rect: Rect, canvas: &Canvas) -> usize {
        painter.rect_filled(rect, 0.0, self.background);

        let clipped = painter.with_clip_rect(rect);
        let origin = rect.min.to_vec2();
        for shape in canvas.iter() {
            shape.draw(&clipped, origin);
        }
        canvas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::stamp::stamp;
    use crate::state::ToolState;

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::new(color::BACKGROUND);
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx, layer_id, rect);

        let mut canvas = Canvas::new();
        let tool = ToolState::default();
        canvas.append(stamp(&tool, egui::pos2(10.0, 10.0)));
        canvas.append(stamp(&tool, egui::pos2(20.0, 10.0)));

        assert_eq!(renderer.render(&painter, rect, &canvas), 2);
    }

    #[test]
    fn test_render_empty_canvas() {
        let renderer = Renderer::new(Color32::WHITE);
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        assert_eq!(renderer.render(&painter, rect, &Canvas::new()), 0);
        assert_eq!(renderer.background(), Color32::WHITE);
    }
}
