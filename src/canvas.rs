use egui::Pos2;
use log::debug;

use crate::element::{Element, PlacedShape};

/// The stamped shapes, oldest first. Later entries are drawn on top.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    shapes: Vec<PlacedShape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn append(&mut self, shape: PlacedShape) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Removes every shape under `pos` and returns how many went away.
    ///
    /// The whole sequence is filtered in one pass, so neighbours of a
    /// removed entry are never skipped.
    pub fn erase_at(&mut self, pos: Pos2) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !shape.hit_test(pos));
        let removed = before - self.shapes.len();
        if removed > 0 {
            debug!("Erased {} shape(s) at ({}, {})", removed, pos.x, pos.y);
        }
        removed
    }

    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedShape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
