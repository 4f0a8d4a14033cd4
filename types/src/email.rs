//! Email syntax check.

use std::sync::LazyLock;

use regex::Regex;

/// Non-whitespace, non-`@` runs around a single `@`, with a dot after it.
/// U+FEFF counts as whitespace here, as it does in browser regex engines.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Syntactic sanity check for an email address.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, at least one `.` after
/// it, and no whitespace anywhere. Deliverability is not checked.
#[must_use]
pub fn validate_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::validate_email;

    #[test]
    fn accepts_minimal_address() {
        assert!(validate_email("a@b.c"));
    }

    #[test]
    fn accepts_common_addresses() {
        assert!(validate_email("owner@example.com"));
        assert!(validate_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_missing_at() {
        for s in ["", "plainaddress", "a.b.c", "example.com"] {
            assert!(!validate_email(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn rejects_missing_dot_after_at() {
        for s in ["a@b", "a.b@c", "user@localhost", "a@b."] {
            assert!(!validate_email(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn rejects_whitespace_and_extra_at() {
        for s in [
            "a b@c.d",
            "a@b .c",
            " a@b.c",
            "a@b.c ",
            "a@@b.c",
            "a@b@c.d",
            "@b.c",
            "a@.c",
        ] {
            assert!(!validate_email(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn rejects_byte_order_mark() {
        for s in ["a\u{FEFF}@b.c", "a@b\u{FEFF}.c", "a@b.c\u{FEFF}"] {
            assert!(!validate_email(s), "{s:?} should be rejected");
        }
        assert!(!validate_email("a\u{A0}@b.c"));
    }
}
