use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
            .expect("email regex must compile")
    })
}

/// Purely syntactic check: local part, `@`, domain, dot, alphabetic TLD of
/// 2+ characters, total length 3..=254. Callers are expected to trim and
/// lower-case first; no DNS or deliverability checks here.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    let len = email.chars().count();
    if !(3..=254).contains(&len) {
        return false;
    }
    email_regex().is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.co"));
        assert!(is_valid_email("user_%99@mail-server.io"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana.example.com"));
    }

    #[test]
    fn rejects_short_tld_and_digits_in_tld() {
        assert!(!is_valid_email("ana@example.c"));
        assert!(!is_valid_email("ana@example.c0m"));
    }

    #[test]
    fn enforces_total_length_bounds() {
        // 254 characters in total is the ceiling.
        let local = "a".repeat(254 - "@example.com".len());
        assert!(is_valid_email(&format!("{}@example.com", local)));
        let local = "a".repeat(255 - "@example.com".len());
        assert!(!is_valid_email(&format!("{}@example.com", local)));
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert!(!is_valid_email("ana maria@example.com"));
        assert!(!is_valid_email(" ana@example.com"));
    }
}
