//! Cron expression syntax check backed by `croner`.

use croner::Cron;

/// Parse `expr` as a 5- or 6-field cron pattern (seconds optional).
///
/// Only syntax is checked; a pattern that never fires still parses. Blank
/// input is rejected before reaching the parser.
pub fn parse_cron(expr: &str) -> Option<Cron> {
    if expr.trim().is_empty() {
        return None;
    }
    Cron::new(expr).with_seconds_optional().parse().ok()
}

pub fn is_valid_cron(expr: &str) -> bool {
    parse_cron(expr).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_and_six_fields() {
        assert!(is_valid_cron("0 4 * * *"));
        assert!(is_valid_cron("*/15 9-17 * * 1-5"));
        assert!(is_valid_cron("30 0 4 * * *"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid_cron("not-a-cron"));
        assert!(!is_valid_cron("61 * * * *"));
        assert!(!is_valid_cron("* * *"));
    }

    #[test]
    fn rejects_blank() {
        assert!(!is_valid_cron(""));
        assert!(!is_valid_cron("   "));
    }
}
