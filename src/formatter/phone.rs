use super::starts_with_ignore_case;
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional trunk `1` followed by a ten-digit national number
static NANP_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1?[0-9]{10}$").unwrap());

/// Bare local or international digits
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,15}$").unwrap());

/// True when the text is a `tel:` URI
pub fn is_tel_uri(text: &str) -> bool {
    starts_with_ignore_case(text, "tel:")
}

/// Heuristic phone number check
///
/// Whitespace and `- ( ) .` are ignored. Accepts `+` followed by digits (at
/// least eight characters in total), an optional `1` plus ten digits, or a run
/// of 7 to 15 digits.
pub fn is_phone_number(text: &str) -> bool {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')' | '.'))
        .collect();

    let international = cleaned
        .strip_prefix('+')
        .is_some_and(|digits| cleaned.len() >= 8 && digits.chars().all(|c| c.is_ascii_digit()));

    international || NANP_NUMBER.is_match(&cleaned) || DIGIT_RUN.is_match(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international() {
        assert!(is_phone_number("+44 20 7946 0958"));
        assert!(is_phone_number("+1234567"));
        assert!(!is_phone_number("+123456"));
        assert!(!is_phone_number("+1234567a"));
    }

    #[test]
    fn test_north_american() {
        assert!(is_phone_number("(555) 123-4567"));
        assert!(is_phone_number("1-555-123-4567"));
        assert!(is_phone_number("555.123.4567"));
    }

    #[test]
    fn test_digit_runs() {
        assert!(is_phone_number("5551234"));
        assert!(is_phone_number("123456789012345"));
        assert!(!is_phone_number("123456"));
        assert!(!is_phone_number("1234567890123456"));
    }

    #[test]
    fn test_not_phone() {
        assert!(!is_phone_number(""));
        assert!(!is_phone_number("call me"));
        assert!(!is_phone_number("37.7749, -122.4194"));
        assert!(!is_phone_number("+"));
    }

    #[test]
    fn test_tel_uri() {
        assert!(is_tel_uri("tel:5551234"));
        assert!(is_tel_uri("TEL:+15551234"));
        assert!(!is_tel_uri("telephone"));
    }
}
