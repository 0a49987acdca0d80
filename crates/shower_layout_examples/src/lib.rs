#![forbid(unsafe_code)]

mod rendering;
mod report;

pub use rendering::{init_tracing, render_shower_layout_to_png, RenderConfig};
pub use report::format_report;
