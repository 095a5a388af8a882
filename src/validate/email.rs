//! Notification email address pattern.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#,
    )
    .unwrap()
});

/// Dotted-atom or quoted local part, then a domain with at least two labels.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
