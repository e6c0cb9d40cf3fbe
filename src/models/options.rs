use std::fmt;
use std::str::FromStr;

use image::RgbaImage;

use super::Rgb;
use crate::error::Error;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity), leaves room for a logo
    #[default]
    H,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            _ => Err(Error::InvalidErrorCorrection(s.to_string())),
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        };
        f.write_str(tag)
    }
}

/// Gradient shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    /// Channel-wise interpolation along the scan position
    #[default]
    Linear,
    /// Two-band step at the midpoint of the scan position
    Radial,
}

impl FromStr for GradientKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            _ => Err(Error::InvalidGradientKind(s.to_string())),
        }
    }
}

/// Two-tone fill for dark modules
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradientConfig {
    /// Whether the gradient replaces the plain foreground
    pub enabled: bool,
    /// Gradient shape
    pub kind: GradientKind,
    /// Endpoint colors; fewer than two falls back to the foreground
    pub colors: Vec<Rgb>,
}

impl GradientConfig {
    /// Enabled gradient between two endpoint colors
    pub fn new(kind: GradientKind, from: Rgb, to: Rgb) -> Self {
        Self {
            enabled: true,
            kind,
            colors: vec![from, to],
        }
    }

    /// Disabled gradient
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Image placed over the center of the code
#[derive(Debug, Clone)]
pub struct Logo {
    /// Decoded logo pixels
    pub image: RgbaImage,
    /// Side of the box the logo is fitted into, in pixels
    pub size: u32,
    /// Background-colored border around the logo box, in pixels
    pub padding: u32,
}

impl Logo {
    /// Default logo box side
    pub const DEFAULT_SIZE: u32 = 70;
    /// Default padding around the logo box
    pub const DEFAULT_PADDING: u32 = 5;

    /// Logo with the default box size and padding
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            size: Self::DEFAULT_SIZE,
            padding: Self::DEFAULT_PADDING,
        }
    }

    /// Override the logo box side
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

/// Rendering parameters for a generated code
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Requested image side in pixels
    pub size: u32,
    /// Quiet zone width in modules
    pub margin: u32,
    /// Error correction level
    pub error_correction: ErrorCorrection,
    /// Dark module color
    pub foreground: Rgb,
    /// Light module and quiet zone color
    pub background: Rgb,
    /// Optional gradient for dark modules
    pub gradient: GradientConfig,
    /// Optional centered logo
    pub logo: Option<Logo>,
}

impl RenderOptions {
    /// Default image side
    pub const DEFAULT_SIZE: u32 = 300;
    /// Default quiet zone
    pub const DEFAULT_MARGIN: u32 = 2;
    /// Smallest side accepted from configuration
    pub const MIN_SIZE: u32 = 64;
    /// Largest side the renderer will allocate
    pub const MAX_SIZE: u32 = 4096;
    /// Largest quiet zone accepted from configuration
    pub const MAX_MARGIN: u32 = 16;

    /// Bring `size` into `MIN_SIZE..=MAX_SIZE`
    pub fn clamp_size(size: u32) -> u32 {
        size.clamp(Self::MIN_SIZE, Self::MAX_SIZE)
    }

    /// Cap `margin` at `MAX_MARGIN`
    pub fn clamp_margin(margin: u32) -> u32 {
        margin.min(Self::MAX_MARGIN)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            margin: Self::DEFAULT_MARGIN,
            error_correction: ErrorCorrection::default(),
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
            gradient: GradientConfig::disabled(),
            logo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_correction_parse() {
        assert_eq!("h".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::H);
        assert_eq!("Q".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Q);
        assert!("X".parse::<ErrorCorrection>().is_err());
        assert_eq!(ErrorCorrection::default(), ErrorCorrection::H);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.size, 300);
        assert_eq!(options.margin, 2);
        assert_eq!(options.foreground.to_string(), "#000000");
        assert_eq!(options.background.to_string(), "#ffffff");
        assert!(!options.gradient.enabled);
        assert!(options.logo.is_none());
    }

    #[test]
    fn test_gradient_constructor() {
        let g = GradientConfig::new(GradientKind::Radial, Rgb::BLACK, Rgb::WHITE);
        assert!(g.enabled);
        assert_eq!(g.colors, vec![Rgb::BLACK, Rgb::WHITE]);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(RenderOptions::clamp_size(10), 64);
        assert_eq!(RenderOptions::clamp_size(300), 300);
        assert_eq!(RenderOptions::clamp_size(u32::MAX), 4096);
        assert_eq!(RenderOptions::clamp_margin(4), 4);
        assert_eq!(RenderOptions::clamp_margin(u32::MAX), 16);
    }
}
