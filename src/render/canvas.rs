use image::RgbImage;
use rayon::prelude::*;

use super::gradient::{cell_position, resolve_gradient_color};
use crate::error::{Error, Result};
use crate::models::{ModuleMatrix, RenderOptions};

/// Pixel grid geometry for a matrix drawn with a quiet zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Image side in pixels
    pub side: u32,
    /// Pixels per module (may be fractional)
    pub scale: f64,
    /// Quiet zone width in pixels
    pub margin_px: f64,
    /// Modules per side without quiet zone
    pub modules: usize,
}

impl Layout {
    /// Fit `matrix` plus `margin` quiet-zone modules on each side into `size` pixels
    pub fn new(matrix: &ModuleMatrix, size: u32, margin: u32) -> Result<Self> {
        if size > RenderOptions::MAX_SIZE {
            return Err(Error::ImageTooLarge {
                size,
                max: RenderOptions::MAX_SIZE,
            });
        }
        let total = u32::try_from(matrix.size())
            .ok()
            .and_then(|n| margin.checked_mul(2)?.checked_add(n))
            .unwrap_or(u32::MAX);
        if size < total {
            return Err(Error::ImageTooSmall {
                size,
                modules: total,
            });
        }
        let scale = size as f64 / total as f64;
        Ok(Self {
            side: size,
            scale,
            margin_px: margin as f64 * scale,
            modules: matrix.size(),
        })
    }

    /// Module index covering pixel coordinate `p`, if inside the matrix
    pub fn module_at(&self, p: u32) -> Option<usize> {
        let index = ((p as f64 - self.margin_px) / self.scale).floor();
        if index < 0.0 || index >= self.modules as f64 {
            return None;
        }
        Some(index as usize)
    }
}

/// Rasterize a module matrix with the configured colors and gradient.
///
/// The logo, if any, is not drawn here; see [`super::logo::overlay_logo`].
pub fn render(matrix: &ModuleMatrix, options: &RenderOptions) -> Result<RgbImage> {
    let layout = Layout::new(matrix, options.size, options.margin)?;
    let side = layout.side as usize;
    let columns: Vec<Option<usize>> = (0..layout.side).map(|x| layout.module_at(x)).collect();
    let background = options.background.channels();

    let mut image = RgbImage::new(layout.side, layout.side);
    image
        .par_chunks_mut(side * 3)
        .enumerate()
        .for_each(|(y, row)| {
            let module_y = layout.module_at(y as u32);
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let color = match (columns[x], module_y) {
                    (Some(mx), Some(my)) if matrix.is_dark(mx, my) => {
                        let position = cell_position(mx, my, layout.modules);
                        resolve_gradient_color(position, &options.gradient, options.foreground)
                            .channels()
                    }
                    _ => background,
                };
                pixel.copy_from_slice(&color);
            }
        });

    log::debug!(
        "rendered {}x{} modules into {}px (scale {:.2})",
        layout.modules,
        layout.modules,
        layout.side,
        layout.scale
    );
    Ok(image)
}
