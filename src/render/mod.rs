/// Module-to-pixel rasterization
pub mod canvas;
/// Payload string to module matrix
pub mod encode;
/// PNG/SVG output
pub mod export;
/// Per-module gradient colors
pub mod gradient;
/// Centered logo overlay
pub mod logo;

pub use canvas::{Layout, render};
pub use encode::encode;
pub use export::{default_file_name, png_bytes, save_png, to_svg};
pub use gradient::{cell_position, resolve_gradient_color};
pub use logo::overlay_logo;
