use super::starts_with_ignore_case;
use crate::models::Fields;

/// True when the text opens a vCard
pub fn is_vcard(text: &str) -> bool {
    starts_with_ignore_case(text, "BEGIN:VCARD")
}

/// Extract display fields from a vCard
///
/// Each line is split once on `:`; the property name is matched by prefix so
/// parameters (`TEL;TYPE=CELL`) do not matter. Fields keep the order in which
/// they first appeared; a repeated property overwrites the earlier value.
/// `FN` takes precedence over the structured `N` property.
pub fn parse_vcard(vcard: &str) -> Fields {
    let mut fields = Fields::new();

    for line in vcard.split(['\r', '\n']) {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if key.starts_with("fn") {
            fields.insert("Name", value);
        } else if key.starts_with('n') {
            if !fields.contains_key("Name") {
                fields.insert("Name", structured_name(value));
            }
        } else if key.starts_with("tel") {
            fields.insert("Phone", value);
        } else if key.starts_with("email") {
            fields.insert("Email", value);
        } else if key.starts_with("org") {
            fields.insert("Organization", value);
        } else if key.starts_with("adr") {
            fields.insert("Address", join_address(value));
        } else if key.starts_with("url") {
            fields.insert("Website", value);
        }
    }

    fields
}

/// `Last;First;Middle;Prefix;Suffix` → `First Last`
fn structured_name(value: &str) -> String {
    let mut parts = value.split(';');
    let last = parts.next().unwrap_or("").trim();
    let first = parts.next().unwrap_or("").trim();
    format!("{first} {last}").trim().to_string()
}

/// `;;Street;City;Region;Zip;Country` → `Street, City, Region, Zip, Country`
fn join_address(value: &str) -> String {
    value
        .split(';')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
