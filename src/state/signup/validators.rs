//! Pure syntactic validators for the sign-up form

use regex::Regex;
use std::sync::LazyLock;

// Email shape: local part, domain, 2-64 letter TLD.
//
// The `!-Z` range in the local part is inherited verbatim from the
// production validation rule and intentionally left as-is; it admits a
// number of punctuation characters in the local part.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[!-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

// Default password rule `^(?=.*[A-Za-z])(?=.*\d)[A-Za-z\d]{8,}$`, split
// into the three conditions the lookaheads encode; the regex crate does
// not support lookahead.
static PASSWORD_ALNUM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\d]{8,}$").expect("PASSWORD_ALNUM_REGEX: invalid regex pattern")
});

static PASSWORD_LETTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("PASSWORD_LETTER_REGEX: invalid regex pattern"));

static PASSWORD_DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("PASSWORD_DIGIT_REGEX: invalid regex pattern"));

/// True when the string has at least one character
pub fn is_non_empty(s: &str) -> bool {
    !s.is_empty()
}

/// True when the string matches the email shape rule
pub fn is_valid_email_shape(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// True when the string matches the default password rule: at least 8
/// alphanumeric characters with at least one letter and one digit
pub fn is_valid_password_shape(s: &str) -> bool {
    PASSWORD_ALNUM_REGEX.is_match(s)
        && PASSWORD_LETTER_REGEX.is_match(s)
        && PASSWORD_DIGIT_REGEX.is_match(s)
}

/// True when the confirmation equals the password
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Password rule applied by the pipeline. The default mirrors the
/// production rule; a custom pattern replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct PasswordRule {
    pattern: Option<Regex>,
}

impl PasswordRule {
    /// Rule backed by a custom pattern
    pub fn with_pattern(pattern: Regex) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }

    /// Compile a custom pattern into a rule
    pub fn from_pattern_str(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::with_pattern(Regex::new(pattern)?))
    }

    /// Apply the rule
    pub fn matches(&self, password: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(password),
            None => is_valid_password_shape(password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_shape {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(is_valid_email_shape("a@b.co"));
            assert!(is_valid_email_shape("alice@example.com"));
            assert!(is_valid_email_shape("first.last+tag@sub.example.org"));
        }

        #[test]
        fn test_rejects_missing_tld() {
            assert!(!is_valid_email_shape("a@b"));
        }

        #[test]
        fn test_rejects_missing_local_part() {
            assert!(!is_valid_email_shape("@b.com"));
        }

        #[test]
        fn test_rejects_missing_at_sign() {
            assert!(!is_valid_email_shape("a.com"));
        }

        #[test]
        fn test_rejects_empty() {
            assert!(!is_valid_email_shape(""));
        }

        #[test]
        fn test_rejects_one_letter_tld() {
            assert!(!is_valid_email_shape("a@b.c"));
        }

        #[test]
        fn test_rejects_digits_in_tld() {
            assert!(!is_valid_email_shape("a@b.c0m"));
        }

        #[test]
        fn test_local_part_range_admits_punctuation() {
            // The `!-Z` range covers '!' through 'Z', so symbols like
            // '#' and '?' are accepted in the local part.
            assert!(is_valid_email_shape("a#b@x.co"));
            assert!(is_valid_email_shape("what?@x.co"));
            assert!(is_valid_email_shape("UPPER@x.co"));
        }
    }

    mod password_shape {
        use super::*;

        #[test]
        fn test_accepts_letters_and_digit_mix() {
            assert!(is_valid_password_shape("abc12345"));
            assert!(is_valid_password_shape("abcdefg1"));
            assert!(is_valid_password_shape("1abcdefg"));
        }

        #[test]
        fn test_rejects_all_letters() {
            assert!(!is_valid_password_shape("abcdefgh"));
        }

        #[test]
        fn test_rejects_too_short() {
            assert!(!is_valid_password_shape("1234567"));
            assert!(!is_valid_password_shape("abc1234"));
        }

        #[test]
        fn test_rejects_all_digits() {
            assert!(!is_valid_password_shape("12345678"));
        }

        #[test]
        fn test_rejects_non_alphanumeric_characters() {
            // The rule only admits letters and digits.
            assert!(!is_valid_password_shape("abc1234!"));
            assert!(!is_valid_password_shape("abc 1234"));
        }

        #[test]
        fn test_rejects_empty() {
            assert!(!is_valid_password_shape(""));
        }
    }

    mod password_rule {
        use super::*;

        #[test]
        fn test_default_matches_default_shape() {
            let rule = PasswordRule::default();
            assert!(rule.matches("abc12345"));
            assert!(!rule.matches("abcdefgh"));
        }

        #[test]
        fn test_custom_pattern_overrides_default() {
            // Any 4+ characters, no digit required
            let rule = PasswordRule::from_pattern_str(r"^.{4,}$").unwrap();
            assert!(rule.matches("abcd"));
            assert!(!rule.matches("abc"));
        }

        #[test]
        fn test_invalid_pattern_is_an_error() {
            assert!(PasswordRule::from_pattern_str("(unclosed").is_err());
        }
    }

    mod misc {
        use super::*;

        #[test]
        fn test_is_non_empty() {
            assert!(is_non_empty("a"));
            assert!(!is_non_empty(""));
        }

        #[test]
        fn test_passwords_match() {
            assert!(passwords_match("abcd1234", "abcd1234"));
            assert!(!passwords_match("abcd1234", "abcd123"));
        }
    }
}
