use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref URL_RE: Regex =
        Regex::new(r"^https?://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(/[^\s]*)?$").unwrap();
}

/// Trimmed value of a required form field, `None` when empty or
/// whitespace-only.
pub fn required(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input.trim())
}

/// Whether a video link is something the platform opener can handle.
pub fn is_openable_url(input: &str) -> bool {
    URL_RE.is_match(input.trim())
}

/// Optional numeric field: blank means "leave the key out of the
/// payload", anything else must be a whole number.
pub fn optional_count(input: &str) -> Result<Option<u32>, ()> {
    match required(input) {
        None => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|_| ()),
    }
}

/// Strictly positive whole number (calories).
pub fn positive_count(input: &str) -> Result<u32, ()> {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(()),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert_eq!(required(""), None);
        assert_eq!(required("   "), None);
        assert_eq!(required("\t\n"), None);
        assert_eq!(required("  Ayşe  "), Some("Ayşe"));
    }

    #[test]
    fn email_regex_matches_the_usual_shapes() {
        assert!(is_valid_email("ayse@example.com"));
        assert!(is_valid_email("  ayse@example.com  "));
        assert!(is_valid_email("a.b+c@mail.example.org"));

        assert!(!is_valid_email("ayse@example"));
        assert!(!is_valid_email("ayse.example.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn openable_urls_are_http_or_https() {
        assert!(is_openable_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_openable_url("http://example.com"));

        assert!(!is_openable_url("youtube.com/watch?v=abc123"));
        assert!(!is_openable_url("ftp://example.com/video"));
        assert!(!is_openable_url("not a url"));
    }

    #[test]
    fn optional_count_distinguishes_blank_from_invalid() {
        assert_eq!(optional_count(""), Ok(None));
        assert_eq!(optional_count("   "), Ok(None));
        assert_eq!(optional_count("3"), Ok(Some(3)));
        assert_eq!(optional_count(" 12 "), Ok(Some(12)));

        assert_eq!(optional_count("üç"), Err(()));
        assert_eq!(optional_count("3.5"), Err(()));
        assert_eq!(optional_count("-2"), Err(()));
    }

    #[test]
    fn positive_count_rejects_zero_and_garbage() {
        assert_eq!(positive_count("350"), Ok(350));
        assert_eq!(positive_count(" 1 "), Ok(1));

        assert_eq!(positive_count("0"), Err(()));
        assert_eq!(positive_count("-10"), Err(()));
        assert_eq!(positive_count("abc"), Err(()));
        assert_eq!(positive_count(""), Err(()));
    }
}
