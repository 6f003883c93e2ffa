mod central_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use tools_panel::{color_panel, fill_group, shape_panel, size_panel, status_panel};
