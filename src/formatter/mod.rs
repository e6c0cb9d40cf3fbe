//! Payload formatting: structured input to the exact string a scanner expects.
//!
//! Each submodule owns one wire grammar. None of them perform validation;
//! required fields are checked by [`crate::validation`] before formatting.

pub mod event;
pub mod intent;
pub mod vcard;
pub mod wifi;

use crate::models::Payload;

pub use event::{format_timestamp, parse_event_time};

/// How user values are interpolated into the structured grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Raw interpolation, byte-compatible with codes generated by earlier tools
    #[default]
    Compatible,
    /// Escape reserved separators per each format's grammar
    Strict,
}

/// Payload formatter with a fixed escaping policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    escaping: Escaping,
}

impl Formatter {
    /// Formatter that reproduces the unescaped grammars
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter with an explicit escaping policy
    pub fn with_escaping(escaping: Escaping) -> Self {
        Self { escaping }
    }

    /// Active escaping policy
    pub fn escaping(&self) -> Escaping {
        self.escaping
    }

    /// Format a payload into its wire string
    pub fn format(&self, payload: &Payload) -> String {
        match payload {
            Payload::Text(p) => p.text.clone(),
            Payload::Contact(p) => vcard::format_vcard(p, self.escaping),
            Payload::Event(p) => event::format_event(p, self.escaping),
            Payload::Payment(p) => intent::format_upi(p, self.escaping),
            Payload::Network(p) => wifi::format_wifi(p, self.escaping),
            Payload::Email(p) => intent::format_email(p),
            Payload::Sms(p) => intent::format_sms(p),
            Payload::Phone(p) => intent::format_phone(p),
        }
    }
}

/// Format a payload with [`Escaping::Compatible`]
pub fn format_payload(payload: &Payload) -> String {
    Formatter::new().format(payload)
}

/// Escape a TEXT value for vCard 3.0 / iCalendar content lines
pub(crate) fn escape_text_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
