use std::path::Path;

use chrono::{DateTime, Utc};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat, RgbImage};

use super::gradient::{cell_position, resolve_gradient_color};
use crate::error::Result;
use crate::models::{ModuleMatrix, RenderOptions};

/// Encode a rendered code as PNG
pub fn png_bytes(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// Write a rendered code to a PNG file
pub fn save_png(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    log::debug!("wrote {}", path.as_ref().display());
    Ok(())
}

/// Download-style file name, `qr-<unix millis>.png`
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("qr-{}.png", now.timestamp_millis())
}

/// Render a module matrix as an SVG document.
///
/// Coordinates are in modules (quiet zone included); `options.size` sets the
/// displayed width and height. The logo is not embedded.
pub fn to_svg(matrix: &ModuleMatrix, options: &RenderOptions) -> String {
    let n = matrix.size();
    let margin = options.margin as usize;
    let total = n.saturating_add(margin.saturating_mul(2));

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}" height="{size}" viewBox="0 0 {total} {total}" shape-rendering="crispEdges">"#,
        size = options.size,
    );
    svg.push_str(&format!(
        r#"<rect width="{total}" height="{total}" fill="{}"/>"#,
        options.background
    ));
    for y in 0..n {
        for x in 0..n {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let color = resolve_gradient_color(
                cell_position(x, y, n),
                &options.gradient,
                options.foreground,
            );
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="1" height="1" fill="{}"/>"#,
                x + margin,
                y + margin,
                color
            ));
        }
    }
    svg.push_str("</svg>");
    svg
}
