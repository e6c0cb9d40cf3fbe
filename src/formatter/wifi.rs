use super::Escaping;
use crate::models::NetworkPayload;

/// Backslash-escape the characters reserved by the WIFI: grammar
pub fn escape_wifi_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Format a `WIFI:S:<ssid>;T:<enc>;P:<password>;;` string
pub fn format_wifi(network: &NetworkPayload, escaping: Escaping) -> String {
    let (ssid, password) = match escaping {
        Escaping::Compatible => (network.ssid.clone(), network.password.clone()),
        Escaping::Strict => (
            escape_wifi_field(&network.ssid),
            escape_wifi_field(&network.password),
        ),
    };
    format!(
        "WIFI:S:{};T:{};P:{};;",
        ssid,
        network.encryption.as_str(),
        password
    )
}
