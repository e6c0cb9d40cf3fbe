//! QR Studio - structured payloads to styled QR codes
//!
//! Formats contact cards, calendar events, WiFi credentials, UPI payment
//! links and mailto/smsto/tel intents into the exact strings scanner apps
//! parse, then encodes and renders them with colors, a two-tone gradient and
//! an optional centered logo.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Crate error type
pub mod error;
/// Payload string formatting per mode
pub mod formatter;
/// Recently generated text payloads
pub mod history;
/// Core data structures (payloads, colors, render options, module matrix)
pub mod models;
/// Encoding, rasterization and export
pub mod render;
/// Required-field checks
pub mod validation;

pub use error::{Error, Result};
pub use formatter::{Escaping, Formatter, format_payload};
pub use history::{History, HistoryStore, JsonFileStore, MemoryHistoryStore};
pub use models::{
    ErrorCorrection, GradientConfig, GradientKind, Logo, Mode, ModuleMatrix, Payload,
    RenderOptions, Rgb,
};
pub use render::resolve_gradient_color;
pub use validation::{ValidationError, validate};

use image::RgbImage;

/// Output of one generation
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    /// The formatted string that was encoded
    pub payload: String,
    /// Encoded modules, without quiet zone
    pub matrix: ModuleMatrix,
    /// Rendered image, logo included
    pub image: RgbImage,
}

/// Validate, format, encode and render payloads with fixed options
#[derive(Debug)]
pub struct Generator {
    options: RenderOptions,
    formatter: Formatter,
    history: Option<History>,
}

impl Generator {
    /// Create a generator without history
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            formatter: Formatter::new(),
            history: None,
        }
    }

    /// Record successful text generations in `history`
    pub fn with_history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }

    /// Use a non-default escaping policy
    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.formatter = Formatter::with_escaping(escaping);
        self
    }

    /// Current render options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Mutable render options, for adjusting between generations
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Attached history, if any
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Mutable history, e.g. to clear it
    pub fn history_mut(&mut self) -> Option<&mut History> {
        self.history.as_mut()
    }

    /// Validate and format without rendering (the "copy data" action)
    pub fn payload(&self, payload: &Payload) -> Result<String> {
        validate(payload)?;
        Ok(self.formatter.format(payload))
    }

    /// Run the full pipeline for one payload.
    ///
    /// A history store failure is logged and does not discard the rendered code.
    pub fn generate(&mut self, payload: &Payload) -> Result<GeneratedCode> {
        let data = self.payload(payload)?;
        log::debug!("generating {} payload ({} bytes)", payload.mode(), data.len());

        let matrix = render::encode(&data, self.options.error_correction)?;
        let mut image = render::render(&matrix, &self.options)?;
        if let Some(logo) = &self.options.logo {
            render::overlay_logo(&mut image, logo, self.options.background);
        }

        if let (Payload::Text(text), Some(history)) = (payload, self.history.as_mut()) {
            if let Err(err) = history.record(text.text.clone()) {
                log::warn!("could not record history entry: {err}");
            }
        }

        Ok(GeneratedCode {
            payload: data,
            matrix,
            image,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
