use crate::models::{GradientConfig, GradientKind, Rgb};

/// Color for a dark module at a normalized scan position.
///
/// Falls back to `foreground` when the gradient is disabled or has fewer
/// than two endpoint colors. Extra colors past the second are ignored.
pub fn resolve_gradient_color(position: f64, gradient: &GradientConfig, foreground: Rgb) -> Rgb {
    let [from, to] = match gradient.colors.as_slice() {
        [from, to, ..] if gradient.enabled => [*from, *to],
        _ => return foreground,
    };

    match gradient.kind {
        GradientKind::Linear => lerp(from, to, position.clamp(0.0, 1.0)),
        GradientKind::Radial => {
            if position < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Diagonal scan position of module (x, y) in a `size`-module grid, in [0, 1]
pub fn cell_position(x: usize, y: usize, size: usize) -> f64 {
    if size <= 1 {
        return 0.0;
    }
    (x + y) as f64 / (2 * (size - 1)) as f64
}

fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = a as f64 + (b as f64 - a as f64) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
    )
}
