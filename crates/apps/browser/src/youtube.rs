//! YouTube embed addresses.

/// Embed shown before any search.
pub const FEATURED_URL: &str = "https://www.youtube.com/embed/featured";
const SEARCH_URL: &str = "https://www.youtube.com/embed/results?search_query=";

/// Embed URL for a search, or `None` for a blank term.
pub fn search_url(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("{SEARCH_URL}{}", encode_uri_component(term)))
}

/// Percent-encodes everything except the characters `encodeURIComponent` leaves alone.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_url_encodes_the_term() {
        assert_eq!(
            search_url(" rust & leptos ").as_deref(),
            Some("https://www.youtube.com/embed/results?search_query=rust%20%26%20leptos")
        );
        assert_eq!(search_url("  "), None);
    }

    #[test]
    fn encoding_handles_multibyte_characters() {
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_uri_component("keep-_.!~*'()"), "keep-_.!~*'()");
    }
}
