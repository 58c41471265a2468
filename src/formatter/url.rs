use super::starts_with_ignore_case;

const LINK_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// True when the text starts with `http://`, `https://` or `www.` (any case)
pub fn is_link(text: &str) -> bool {
    LINK_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(text, prefix))
}

/// Normalize a scanned URL
///
/// Collapses the malformed `http://https://` and `http://http://` forms to the
/// inner scheme and gives bare `www.` hosts an `https://` scheme. Anything else
/// is returned trimmed but otherwise untouched.
pub fn clean_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://https://") || url.starts_with("http://http://") {
        url["http://".len()..].to_string()
    } else if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else if url.starts_with("www.") {
        format!("https://{url}")
    } else {
        url.to_string()
    }
}
