//! Field checks for incoming video payloads.

use url::Url;

/// Titles have to be cool.
pub fn is_cool_title(title: &str) -> bool {
    title.contains("Cool")
}

/// Absolute http(s) URL with a non-empty host.
pub fn is_valid_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cool_titles() {
        assert!(is_cool_title("Cool Video"));
        assert!(is_cool_title("A Very Cool one"));
        assert!(!is_cool_title("cool video"));
        assert!(!is_cool_title(""));
    }

    #[test]
    fn urls() {
        assert!(is_valid_url("https://youtu.be/JgW-i2QjgHQ"));
        assert!(is_valid_url("http://localhost:5000/watch?v=1"));
        assert!(!is_valid_url("youtu.be/JgW-i2QjgHQ"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("https://example.com:notaport/x"));
        assert!(!is_valid_url("https://exa<>mple.com"));
        assert!(!is_valid_url("http://example.com:99999"));
        assert!(!is_valid_url("mailto:jane@example.com"));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane@@example.com"));
    }
}
