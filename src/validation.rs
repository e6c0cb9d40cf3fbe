//! Required-field checks performed before formatting.

use thiserror::Error;

use crate::models::Payload;

/// A required field is empty for the selected mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text mode with blank input
    #[error("Please enter text or a URL")]
    EmptyText,
    /// UPI payment without a payee id
    #[error("UPI ID is required")]
    MissingPayeeId,
    /// Contact without a name
    #[error("Name is required")]
    MissingName,
    /// Event without a title or a start time
    #[error("Event title and start date are required")]
    MissingEventFields,
    /// WiFi network without an SSID
    #[error("WiFi SSID is required")]
    MissingSsid,
    /// Email intent without an address
    #[error("Email address is required")]
    MissingEmailAddress,
    /// SMS or phone intent without a number
    #[error("Phone number is required")]
    MissingPhoneNumber,
}

/// Check the required fields of a payload
pub fn validate(payload: &Payload) -> Result<(), ValidationError> {
    match payload {
        Payload::Text(p) if p.text.trim().is_empty() => Err(ValidationError::EmptyText),
        Payload::Payment(p) if p.payee_id.is_empty() => Err(ValidationError::MissingPayeeId),
        Payload::Contact(p) if p.name.is_empty() => Err(ValidationError::MissingName),
        Payload::Event(p) if p.title.is_empty() || p.start.is_none() => {
            Err(ValidationError::MissingEventFields)
        }
        Payload::Network(p) if p.ssid.is_empty() => Err(ValidationError::MissingSsid),
        Payload::Email(p) if p.address.is_empty() => Err(ValidationError::MissingEmailAddress),
        Payload::Sms(p) if p.number.is_empty() => Err(ValidationError::MissingPhoneNumber),
        Payload::Phone(p) if p.number.is_empty() => Err(ValidationError::MissingPhoneNumber),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::parse_event_time;
    use crate::models::{
        ContactPayload, EmailPayload, EventPayload, NetworkPayload, PaymentPayload, PhonePayload,
        SmsPayload,
    };

    #[test]
    fn test_text_requires_non_blank() {
        assert_eq!(
            validate(&Payload::text("   ")),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(validate(&Payload::text(" x ")), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyText.to_string(),
            "Please enter text or a URL"
        );
        assert_eq!(
            ValidationError::MissingEventFields.to_string(),
            "Event title and start date are required"
        );
        assert_eq!(ValidationError::MissingSsid.to_string(), "WiFi SSID is required");
    }

    #[test]
    fn test_event_requires_title_and_start() {
        let mut event = EventPayload {
            title: "Standup".into(),
            ..Default::default()
        };
        assert_eq!(
            validate(&Payload::Event(event.clone())),
            Err(ValidationError::MissingEventFields)
        );
        event.start = parse_event_time("2024-01-15T10:00").unwrap();
        assert_eq!(validate(&Payload::Event(event.clone())), Ok(()));
        event.title.clear();
        assert_eq!(
            validate(&Payload::Event(event)),
            Err(ValidationError::MissingEventFields)
        );
    }

    #[test]
    fn test_required_fields_per_mode() {
        assert_eq!(
            validate(&Payload::Payment(PaymentPayload::default())),
            Err(ValidationError::MissingPayeeId)
        );
        assert_eq!(
            validate(&Payload::Contact(ContactPayload::default())),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            validate(&Payload::Network(NetworkPayload::default())),
            Err(ValidationError::MissingSsid)
        );
        assert_eq!(
            validate(&Payload::Email(EmailPayload::default())),
            Err(ValidationError::MissingEmailAddress)
        );
        assert_eq!(
            validate(&Payload::Sms(SmsPayload::default())),
            Err(ValidationError::MissingPhoneNumber)
        );
        assert_eq!(
            validate(&Payload::Phone(PhonePayload::default())),
            Err(ValidationError::MissingPhoneNumber)
        );
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let payment = PaymentPayload {
            payee_id: "a@upi".into(),
            ..Default::default()
        };
        assert_eq!(validate(&Payload::Payment(payment)), Ok(()));
    }
}
