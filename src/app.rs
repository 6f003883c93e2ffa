use crate::config::AppConfig;
use crate::controller::Controller;
use crate::input::{InputHandler, UiEvent};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::ToolState;

/// The drawing window: control panels around a canvas.
pub struct DrawApp {
    controller: Controller,
    input: InputHandler,
    renderer: Renderer,
}

impl Default for DrawApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl DrawApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let background = config.background_color();
        Self {
            controller: Controller::new(ToolState::new(background)),
            input: InputHandler::new(),
            renderer: Renderer::new(background),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    fn apply(&mut self, events: Vec<UiEvent>) -> bool {
        let mut changed = false;
        for event in events {
            changed |= self.controller.dispatch(event).is_some();
        }
        changed
    }
}

impl eframe::App for DrawApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        let tool = self.controller.tool();

        egui::TopBottomPanel::top("status_panel").show(ctx, |ui| {
            panels::status_panel(ui, tool, &mut events);
        });
        egui::TopBottomPanel::bottom("color_panel").show(ctx, |ui| {
            panels::color_panel(ui, tool, &mut events);
        });
        egui::SidePanel::left("shape_panel")
            .resizable(false)
            .show(ctx, |ui| {
                panels::shape_panel(ui, tool, &mut events);
                ui.separator();
                panels::fill_group(ui, tool, &mut events);
            });
        egui::SidePanel::right("size_panel")
            .resizable(false)
            .show(ctx, |ui| {
                panels::size_panel(ui, tool, &mut events);
            });

        // Control changes land before this frame's pointer events
        let mut changed = self.apply(events);

        egui::CentralPanel::default().show(ctx, |ui| {
            changed |= panels::central_panel(
                ui,
                &mut self.input,
                &self.renderer,
                &mut self.controller,
            );
        });

        if changed {
            ctx.request_repaint();
        }
    }
}
