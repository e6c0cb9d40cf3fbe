//! Environment-driven defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `QR_STUDIO_SIZE` | 300 (clamped to 64..=4096) |
//! | `QR_STUDIO_MARGIN` | 2 (clamped to 0..=16) |
//! | `QR_STUDIO_EC` | `H` |
//! | `QR_STUDIO_HISTORY` | `<temp dir>/qr-history.json` |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

use crate::models::{ErrorCorrection, RenderOptions};

/// Environment variable holding the default image side
pub const SIZE_VAR: &str = "QR_STUDIO_SIZE";
/// Environment variable holding the default quiet zone
pub const MARGIN_VAR: &str = "QR_STUDIO_MARGIN";
/// Environment variable holding the default error correction level
pub const EC_VAR: &str = "QR_STUDIO_EC";
/// Environment variable holding the history file path
pub const HISTORY_VAR: &str = "QR_STUDIO_HISTORY";

/// History file name used when no path is configured
pub const DEFAULT_HISTORY_FILE: &str = "qr-history.json";

fn parse_u32<F>(lookup: &F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Defaults for rendering and history location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Image side in pixels
    pub size: u32,
    /// Quiet zone in modules
    pub margin: u32,
    /// Error correction level
    pub error_correction: ErrorCorrection,
    /// History file
    pub history_path: PathBuf,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let error_correction = lookup(EC_VAR)
            .and_then(|v| v.parse::<ErrorCorrection>().ok())
            .unwrap_or_default();
        let history_path = lookup(HISTORY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_HISTORY_FILE));

        Self {
            size: RenderOptions::clamp_size(parse_u32(&lookup, SIZE_VAR, RenderOptions::DEFAULT_SIZE)),
            margin: RenderOptions::clamp_margin(parse_u32(
                &lookup,
                MARGIN_VAR,
                RenderOptions::DEFAULT_MARGIN,
            )),
            error_correction,
            history_path,
        }
    }

    /// Render options seeded from these settings
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            size: self.size,
            margin: self.margin,
            error_correction: self.error_correction,
            ..RenderOptions::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
