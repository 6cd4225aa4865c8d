//! Contact-field normalization for duplicate comparison

use log::warn;
use regex::Regex;
use std::sync::OnceLock;

static WWW_PREFIX: OnceLock<Regex> = OnceLock::new();
static NON_DIGIT: OnceLock<Regex> = OnceLock::new();

/// Normalize a URL into a canonical comparison key.
///
/// Strips scheme, a leading "www.", query/fragment, and a single trailing
/// slash, then lowercases the remainder. URLs typed without a scheme
/// ("github.com/alice") are handled by treating the first path segment as the
/// authority. Returns `None` for empty input. Never fails: if the input has no
/// recognizable structure, the raw value is lowercased and trimmed instead.
pub fn normalize_url(raw: Option<&str>) -> Option<String> {
    let url = raw?.trim();
    if url.is_empty() {
        return None;
    }

    match split_authority(url) {
        Some((authority, path)) => {
            let www = WWW_PREFIX.get_or_init(|| Regex::new(r"(?i)^www\.").unwrap());
            let authority = www.replace(authority, "");
            let combined = format!("{}{}", authority, path);
            let trimmed = combined.strip_suffix('/').unwrap_or(&combined);
            Some(trimmed.to_lowercase())
        }
        None => {
            warn!("Failed to normalize URL '{}': no recognizable authority", url);
            Some(url.to_lowercase())
        }
    }
}

/// Split a URL into authority and path, ignoring query and fragment.
///
/// Without a scheme the first path segment is taken as the authority. This
/// heuristic can misread multi-segment hostnames typed without a scheme, an
/// accepted limitation of scheme-less input.
fn split_authority(url: &str) -> Option<(&str, &str)> {
    // Query and fragment never participate in comparison
    let url = url.split(['?', '#']).next().unwrap_or("");

    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    if authority.is_empty() {
        return None;
    }

    Some((authority, path))
}

/// Normalize a phone number into a digits-only comparison key.
///
/// All formatting punctuation (spaces, dashes, parentheses, a leading "+") is
/// removed. Returns `None` for empty input or input with no digits at all.
/// Country codes are not canonicalized: "+1 555..." and "555..." remain
/// distinct keys.
pub fn normalize_phone(raw: Option<&str>) -> Option<String> {
    let phone = raw?.trim();
    if phone.is_empty() {
        return None;
    }

    let non_digit = NON_DIGIT.get_or_init(|| Regex::new(r"\D").unwrap());
    let digits = non_digit.replace_all(phone, "").into_owned();

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_scheme_and_www_stripped() {
        assert_eq!(
            normalize_url(Some("https://www.github.com/alice")),
            Some("github.com/alice".to_string())
        );
        assert_eq!(
            normalize_url(Some("http://github.com/alice")),
            Some("github.com/alice".to_string())
        );
        assert_eq!(
            normalize_url(Some("github.com/alice")),
            Some("github.com/alice".to_string())
        );
    }

    #[test]
    fn test_url_trailing_slash_and_case() {
        assert_eq!(
            normalize_url(Some("https://www.GitHub.com/Alice/")),
            Some("github.com/alice".to_string())
        );
        assert_eq!(
            normalize_url(Some("GITHUB.COM/ALICE")),
            Some("github.com/alice".to_string())
        );
    }

    #[test]
    fn test_url_query_and_fragment_ignored() {
        assert_eq!(
            normalize_url(Some("https://linkedin.com/in/alice?trk=profile")),
            Some("linkedin.com/in/alice".to_string())
        );
        assert_eq!(
            normalize_url(Some("linkedin.com/in/alice#about")),
            Some("linkedin.com/in/alice".to_string())
        );
    }

    #[test]
    fn test_url_www_strip_case_insensitive() {
        assert_eq!(
            normalize_url(Some("WWW.linkedin.com/in/bob")),
            Some("linkedin.com/in/bob".to_string())
        );
    }

    #[test]
    fn test_url_empty_or_blank_is_absent() {
        assert_eq!(normalize_url(None), None);
        assert_eq!(normalize_url(Some("")), None);
        assert_eq!(normalize_url(Some("   ")), None);
    }

    #[test]
    fn test_url_bare_domain() {
        assert_eq!(
            normalize_url(Some("https://github.com")),
            Some("github.com".to_string())
        );
        assert_eq!(
            normalize_url(Some("github.com/")),
            Some("github.com".to_string())
        );
    }

    #[test]
    fn test_url_idempotent() {
        let once = normalize_url(Some("https://www.LinkedIn.com/in/Carol/")).unwrap();
        let twice = normalize_url(Some(once.as_str())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_url_unparseable_falls_back_to_lowercase() {
        // "//" with nothing in front leaves no authority to extract
        assert_eq!(
            normalize_url(Some("https://")),
            Some("https://".to_string())
        );
    }

    #[test]
    fn test_phone_punctuation_equivalence() {
        let variants = [
            "+1 (555) 123-4567",
            "1-555-123-4567",
            "1 555 123 4567",
            "15551234567",
        ];
        for variant in variants {
            assert_eq!(
                normalize_phone(Some(variant)),
                Some("15551234567".to_string())
            );
        }
    }

    #[test]
    fn test_phone_different_digits_stay_distinct() {
        assert_ne!(
            normalize_phone(Some("+1 555 123 4567")),
            normalize_phone(Some("555 123 4567"))
        );
    }

    #[test]
    fn test_phone_absent_cases() {
        assert_eq!(normalize_phone(None), None);
        assert_eq!(normalize_phone(Some("")), None);
        assert_eq!(normalize_phone(Some("   ")), None);
        assert_eq!(normalize_phone(Some("n/a")), None);
        assert_eq!(normalize_phone(Some("---")), None);
    }

    #[test]
    fn test_phone_idempotent() {
        let once = normalize_phone(Some("(555) 000-1111")).unwrap();
        assert_eq!(normalize_phone(Some(once.as_str())), Some(once.clone()));
    }
}
