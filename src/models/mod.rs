pub mod color;
pub mod matrix;
pub mod options;
pub mod payload;

pub use color::Rgb;
pub use matrix::ModuleMatrix;
pub use options::{ErrorCorrection, GradientConfig, GradientKind, Logo, RenderOptions};
pub use payload::{
    ContactPayload, EmailPayload, EventPayload, Mode, NetworkPayload, Payload, PaymentPayload,
    PhonePayload, SmsPayload, TextPayload, WifiEncryption,
};
