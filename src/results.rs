//! Results pane: table projection and rendering

mod results_render;

pub use results_render::{render_pane, row_cells};
