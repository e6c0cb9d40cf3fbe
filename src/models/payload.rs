use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::Error;

/// Target payload convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plain text or URL
    Text,
    /// vCard 3.0 contact
    VCard,
    /// iCalendar VEVENT
    Event,
    /// UPI payment deep link
    Upi,
    /// WiFi network credentials
    Wifi,
    /// `mailto:` intent
    Email,
    /// `smsto:` intent
    Sms,
    /// `tel:` intent
    Phone,
}

impl Mode {
    /// All modes, in menu order
    pub const ALL: [Mode; 8] = [
        Mode::Text,
        Mode::VCard,
        Mode::Event,
        Mode::Upi,
        Mode::Wifi,
        Mode::Email,
        Mode::Sms,
        Mode::Phone,
    ];

    /// Short tag used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::VCard => "vcard",
            Mode::Event => "event",
            Mode::Upi => "upi",
            Mode::Wifi => "wifi",
            Mode::Email => "email",
            Mode::Sms => "sms",
            Mode::Phone => "phone",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == tag)
            .ok_or_else(|| Error::InvalidMode(s.to_string()))
    }
}

/// WiFi authentication kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiEncryption {
    /// WPA/WPA2
    #[default]
    Wpa,
    /// WEP
    Wep,
    /// Open network
    Open,
}

impl WifiEncryption {
    /// Value of the `T:` field
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::Open => "nopass",
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" => Ok(WifiEncryption::Wpa),
            "wep" => Ok(WifiEncryption::Wep),
            "nopass" | "open" | "none" => Ok(WifiEncryption::Open),
            _ => Err(Error::InvalidEncryption(s.to_string())),
        }
    }
}

/// Free text, encoded verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPayload {
    /// Text or URL
    pub text: String,
}

/// Contact card fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPayload {
    /// Full name (required)
    pub name: String,
    /// Organization
    pub organization: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Website URL
    pub website: String,
    /// Postal address, placed in the street component
    pub address: String,
}

/// Calendar event fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPayload {
    /// Summary line (required)
    pub title: String,
    /// Start time (required), interpreted as UTC
    pub start: Option<NaiveDateTime>,
    /// End time, interpreted as UTC
    pub end: Option<NaiveDateTime>,
    /// Location
    pub location: String,
    /// Description
    pub description: String,
}

/// UPI payment request fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentPayload {
    /// Payee VPA such as `name@bank` (required)
    pub payee_id: String,
    /// Payee display name
    pub payee_name: String,
    /// Amount as a decimal string
    pub amount: String,
}

/// WiFi network fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkPayload {
    /// Network name (required)
    pub ssid: String,
    /// Passphrase
    pub password: String,
    /// Authentication kind
    pub encryption: WifiEncryption,
}

/// Email intent fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailPayload {
    /// Recipient address (required)
    pub address: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

/// SMS intent fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsPayload {
    /// Destination number (required)
    pub number: String,
    /// Message body
    pub message: String,
}

/// Phone call intent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonePayload {
    /// Destination number (required)
    pub number: String,
}

/// Structured input for one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Plain text
    Text(TextPayload),
    /// vCard contact
    Contact(ContactPayload),
    /// Calendar event
    Event(EventPayload),
    /// UPI payment
    Payment(PaymentPayload),
    /// WiFi credentials
    Network(NetworkPayload),
    /// Email intent
    Email(EmailPayload),
    /// SMS intent
    Sms(SmsPayload),
    /// Phone intent
    Phone(PhonePayload),
}

impl Payload {
    /// Shorthand for a text payload
    pub fn text(text: impl Into<String>) -> Self {
        Payload::Text(TextPayload { text: text.into() })
    }

    /// Mode this payload formats to
    pub fn mode(&self) -> Mode {
        match self {
            Payload::Text(_) => Mode::Text,
            Payload::Contact(_) => Mode::VCard,
            Payload::Event(_) => Mode::Event,
            Payload::Payment(_) => Mode::Upi,
            Payload::Network(_) => Mode::Wifi,
            Payload::Email(_) => Mode::Email,
            Payload::Sms(_) => Mode::Sms,
            Payload::Phone(_) => Mode::Phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tags_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(" VCard ".parse::<Mode>().unwrap(), Mode::VCard);
        assert!("fax".parse::<Mode>().is_err());
    }

    #[test]
    fn test_encryption_aliases() {
        assert_eq!("WPA".parse::<WifiEncryption>().unwrap(), WifiEncryption::Wpa);
        assert_eq!("wep".parse::<WifiEncryption>().unwrap(), WifiEncryption::Wep);
        assert_eq!("nopass".parse::<WifiEncryption>().unwrap(), WifiEncryption::Open);
        assert_eq!("open".parse::<WifiEncryption>().unwrap(), WifiEncryption::Open);
        assert!("wpa3-enterprise".parse::<WifiEncryption>().is_err());
        assert_eq!(WifiEncryption::Open.as_str(), "nopass");
    }

    #[test]
    fn test_payload_mode() {
        assert_eq!(Payload::text("hi").mode(), Mode::Text);
        assert_eq!(Payload::Network(NetworkPayload::default()).mode(), Mode::Wifi);
        assert_eq!(Payload::Payment(PaymentPayload::default()).mode(), Mode::Upi);
    }
}
