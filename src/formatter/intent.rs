//! URI-style intents: UPI deep links, mailto, smsto and tel.

use super::Escaping;
use crate::models::{EmailPayload, PaymentPayload, PhonePayload, SmsPayload};

/// Currency code appended to every UPI link
pub const UPI_CURRENCY: &str = "INR";

/// Format `upi://pay?pa=<id>&pn=<name>&am=<amount>&cu=INR`
pub fn format_upi(payment: &PaymentPayload, escaping: Escaping) -> String {
    let value = |s: &str| match escaping {
        Escaping::Compatible => s.to_string(),
        Escaping::Strict => urlencoding::encode(s).into_owned(),
    };
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu={}",
        value(&payment.payee_id),
        value(&payment.payee_name),
        value(&payment.amount),
        UPI_CURRENCY
    )
}

/// Format `mailto:<address>?subject=<enc>&body=<enc>`
pub fn format_email(email: &EmailPayload) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        email.address,
        urlencoding::encode(&email.subject),
        urlencoding::encode(&email.body)
    )
}

/// Format `smsto:<number>:<enc(message)>`
pub fn format_sms(sms: &SmsPayload) -> String {
    format!("smsto:{}:{}", sms.number, urlencoding::encode(&sms.message))
}

/// Format `tel:<number>`
pub fn format_phone(phone: &PhonePayload) -> String {
    format!("tel:{}", phone.number)
}
