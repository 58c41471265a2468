use super::{starts_with_ignore_case, strip_prefix_ignore_case};
use crate::models::Fields;

/// Label of the security field produced from `WIFI:` strings
pub const ENCRYPTION_LABEL: &str = "Encryption type";

/// True when the text opens a Wi-Fi network string
pub fn is_wifi(text: &str) -> bool {
    starts_with_ignore_case(text, "WIFI:")
}

/// Map a `T:` token to its display value
///
/// `WPA` → `WPA2`, `WEP` → `WEP`, `nopass`/empty → `Open`; any other token is
/// shown as written.
pub fn security_label(token: &str) -> String {
    match token.to_ascii_uppercase().as_str() {
        "WPA" => "WPA2".to_string(),
        "WEP" => "WEP".to_string(),
        "NOPASS" | "" => "Open".to_string(),
        _ => token.to_string(),
    }
}

/// Map a display value back to the `T:` token that produces it
pub fn security_token(label: &str) -> &str {
    match label {
        "WPA2" => "WPA",
        "Open" => "nopass",
        other => other,
    }
}

/// Extract SSID, password and security from `WIFI:T:..;S:..;P:..;;`
///
/// Output order is fixed: SSID, Password, then the security field, which is
/// always present and defaults to `Open`. Later `S`/`P`/`T` entries overwrite
/// earlier ones.
pub fn parse_wifi(wifi: &str) -> Fields {
    let body = strip_prefix_ignore_case(wifi, "WIFI:").unwrap_or(wifi);
    let body = body.strip_suffix(";;").unwrap_or(body);

    let mut ssid = "";
    let mut password = "";
    let mut encryption = "Open".to_string();

    for part in body.split(';') {
        let Some((key, value)) = part.split_once(':') else {
            continue;
        };
        match key {
            "S" => ssid = value,
            "P" => password = value,
            "T" => encryption = security_label(value),
            _ => {}
        }
    }

    let mut fields = Fields::new();
    fields.insert("SSID", ssid);
    fields.insert("Password", password);
    fields.insert(ENCRYPTION_LABEL, encryption);
    fields
}
