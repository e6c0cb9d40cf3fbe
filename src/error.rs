use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced while preparing, encoding, rendering or storing a QR code
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was empty for the selected mode
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The payload does not fit in any QR version at the requested level
    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    /// Image decoding or encoding failed (logo input, PNG output)
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Filesystem access failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The history file could not be read or written as JSON
    #[error("history store error: {0}")]
    History(#[from] serde_json::Error),
    /// A color string was not of the form `#RRGGBB`
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    /// A date-time string could not be parsed
    #[error("invalid date-time {0:?}")]
    InvalidDateTime(String),
    /// An unknown mode tag
    #[error("unknown mode {0:?}")]
    InvalidMode(String),
    /// An unknown WiFi encryption kind
    #[error("unknown encryption {0:?}, expected WPA, WEP or nopass")]
    InvalidEncryption(String),
    /// An unknown gradient kind
    #[error("unknown gradient {0:?}, expected linear or radial")]
    InvalidGradientKind(String),
    /// An unknown error correction level
    #[error("unknown error correction level {0:?}, expected L, M, Q or H")]
    InvalidErrorCorrection(String),
    /// The requested image is smaller than one pixel per module
    #[error("image size {size}px cannot hold {modules} modules")]
    ImageTooSmall {
        /// Requested side length in pixels
        size: u32,
        /// Modules per side including the quiet zone
        modules: u32,
    },
    /// The requested image side exceeds what the renderer will allocate
    #[error("image size {size}px exceeds the {max}px limit")]
    ImageTooLarge {
        /// Requested side length in pixels
        size: u32,
        /// Largest accepted side length
        max: u32,
    },
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;
