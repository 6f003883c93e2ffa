#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stamp;
pub mod state;

pub use app::DrawApp;
pub use canvas::Canvas;
pub use color::BrushColor;
pub use command::Command;
pub use config::AppConfig;
pub use controller::Controller;
pub use element::{Element, PlacedShape, ShapeGeometry, ShapeId};
pub use error::ConfigError;
pub use input::{InputHandler, PointerSample, UiEvent};
pub use renderer::Renderer;
pub use stamp::stamp;
pub use state::{BrushSize, PenMode, ShapeKind, ToolState};
