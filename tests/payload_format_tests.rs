//! Wire-format tests for every payload mode
//!
//! Third-party scanners parse these strings by fixed grammar, so each test
//! pins the exact output for a representative input.

use qr_studio::formatter::parse_event_time;
use qr_studio::models::{
    ContactPayload, EmailPayload, EventPayload, NetworkPayload, PaymentPayload, PhonePayload,
    SmsPayload, WifiEncryption,
};
use qr_studio::{Escaping, Formatter, Mode, Payload, format_payload};

fn all_modes() -> Vec<Payload> {
    vec![
        Payload::text("hello"),
        Payload::Contact(ContactPayload {
            name: "John Doe".into(),
            ..Default::default()
        }),
        Payload::Event(EventPayload {
            title: "Launch".into(),
            start: parse_event_time("2024-01-15T10:00").unwrap(),
            ..Default::default()
        }),
        Payload::Payment(PaymentPayload {
            payee_id: "a@upi".into(),
            ..Default::default()
        }),
        Payload::Network(NetworkPayload {
            ssid: "Home".into(),
            ..Default::default()
        }),
        Payload::Email(EmailPayload {
            address: "me@example.com".into(),
            ..Default::default()
        }),
        Payload::Sms(SmsPayload {
            number: "+15550100".into(),
            ..Default::default()
        }),
        Payload::Phone(PhonePayload {
            number: "+15550100".into(),
        }),
    ]
}

/// Output prefix that identifies each grammar
fn marker(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => "hello",
        Mode::VCard => "BEGIN:VCARD",
        Mode::Event => "BEGIN:VEVENT",
        Mode::Upi => "upi://",
        Mode::Wifi => "WIFI:",
        Mode::Email => "mailto:",
        Mode::Sms => "smsto:",
        Mode::Phone => "tel:",
    }
}

#[test]
fn test_no_mode_crossing_fields() {
    for payload in all_modes() {
        let out = format_payload(&payload);
        let mode = payload.mode();
        assert!(
            out.starts_with(marker(mode)),
            "{mode} output should start with {}: {out}",
            marker(mode)
        );
        for other in Mode::ALL.into_iter().filter(|m| *m != mode && *m != Mode::Text) {
            assert!(
                !out.contains(marker(other)),
                "{mode} output leaked {} marker: {out}",
                other
            );
        }
    }
}

#[test]
fn test_vcard_name_split() {
    let out = format_payload(&Payload::Contact(ContactPayload {
        name: "John Doe".into(),
        organization: "Acme".into(),
        ..Default::default()
    }));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "BEGIN:VCARD");
    assert_eq!(lines[1], "VERSION:3.0");
    assert_eq!(lines[2], "N:Doe;John;;;");
    assert_eq!(lines[3], "FN:John Doe");
    assert_eq!(lines[4], "ORG:Acme");
    assert_eq!(lines.last(), Some(&"END:VCARD"));
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_vcard_single_name() {
    let out = format_payload(&Payload::Contact(ContactPayload {
        name: "Madonna".into(),
        ..Default::default()
    }));
    assert!(out.lines().any(|l| l == "N:Madonna;;;;"));
}

#[test]
fn test_event_timestamps() {
    let out = format_payload(&Payload::Event(EventPayload {
        title: "Launch".into(),
        start: parse_event_time("2024-01-15T10:00").unwrap(),
        end: None,
        location: "HQ".into(),
        description: String::new(),
    }));
    assert!(out.lines().any(|l| l == "DTSTART:20240115T100000Z"));
    assert!(out.lines().any(|l| l == "DTEND:"));
}

#[test]
fn test_event_empty_start_is_not_an_error() {
    let start = parse_event_time("").unwrap();
    let out = format_payload(&Payload::Event(EventPayload {
        title: "Launch".into(),
        start,
        ..Default::default()
    }));
    assert!(out.lines().any(|l| l == "DTSTART:"));
}

#[test]
fn test_wifi() {
    let out = format_payload(&Payload::Network(NetworkPayload {
        ssid: "Home".into(),
        password: "secret".into(),
        encryption: WifiEncryption::Wpa,
    }));
    assert_eq!(out, "WIFI:S:Home;T:WPA;P:secret;;");
}

#[test]
fn test_upi() {
    let out = format_payload(&Payload::Payment(PaymentPayload {
        payee_id: "a@upi".into(),
        payee_name: "Bob".into(),
        amount: "100".into(),
    }));
    assert_eq!(out, "upi://pay?pa=a@upi&pn=Bob&am=100&cu=INR");
}

#[test]
fn test_email_subject_percent_encoded() {
    let out = format_payload(&Payload::Email(EmailPayload {
        address: "me@example.com".into(),
        subject: "Hi there".into(),
        body: "See you".into(),
    }));
    assert_eq!(out, "mailto:me@example.com?subject=Hi%20there&body=See%20you");
}

#[test]
fn test_sms_and_phone() {
    let sms = format_payload(&Payload::Sms(SmsPayload {
        number: "12345".into(),
        message: "Hello world".into(),
    }));
    assert_eq!(sms, "smsto:12345:Hello%20world");
    let tel = format_payload(&Payload::Phone(PhonePayload {
        number: "12345".into(),
    }));
    assert_eq!(tel, "tel:12345");
}

#[test]
fn test_strict_policy_is_opt_in() {
    let payload = Payload::Network(NetworkPayload {
        ssid: "Cafe;Guest".into(),
        password: String::new(),
        encryption: WifiEncryption::Open,
    });
    assert_eq!(format_payload(&payload), "WIFI:S:Cafe;Guest;T:nopass;P:;;");
    assert_eq!(
        Formatter::with_escaping(Escaping::Strict).format(&payload),
        "WIFI:S:Cafe\\;Guest;T:nopass;P:;;"
    );
}

#[test]
fn test_formatting_does_not_mutate_input() {
    let payload = Payload::Contact(ContactPayload {
        name: "  Jane   Q  Public ".into(),
        ..Default::default()
    });
    let before = payload.clone();
    let out = format_payload(&payload);
    assert_eq!(payload, before);
    assert!(out.contains("N:Public;Jane Q;;;"));
    assert!(out.contains("FN:  Jane   Q  Public \n"));
}
