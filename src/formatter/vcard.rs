use super::{Escaping, escape_text_value};
use crate::models::ContactPayload;

/// Split a full name into (last, first).
///
/// The last whitespace-delimited token is the family name, the rest joined
/// by single spaces is the given name. A single token is all family name.
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens: Vec<&str> = full_name.split_whitespace().collect();
    let last = tokens.pop().unwrap_or_default().to_string();
    (last, tokens.join(" "))
}

/// Format a vCard 3.0 contact, lines joined with `\n`
pub fn format_vcard(contact: &ContactPayload, escaping: Escaping) -> String {
    let value = |s: &str| match escaping {
        Escaping::Compatible => s.to_string(),
        Escaping::Strict => escape_text_value(s),
    };
    let (last, first) = split_name(&contact.name);

    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", value(&last), value(&first)),
        format!("FN:{}", value(&contact.name)),
        format!("ORG:{}", value(&contact.organization)),
        format!("TEL:{}", value(&contact.phone)),
        format!("EMAIL:{}", value(&contact.email)),
        format!("URL:{}", value(&contact.website)),
        format!("ADR:;;{};;;", value(&contact.address)),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}
