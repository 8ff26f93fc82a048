use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidateEmail;

lazy_static! {
    /// Regex for validating phone numbers
    /// Optional leading `+`, digit groups separated by a single space, hyphen or dot
    /// - Valid: "+212 619-099651", "0612345678", "06.12.34.56.78"
    /// - Invalid: "06--12", "+", "phone", "06 12 ab"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]+(?:[ .\-][0-9]+)*$").unwrap();

    /// Regex for the domain part of an email address
    /// Dotted labels ending in an alphabetic top-level domain
    /// - Valid: "example.com", "etu.uae.ac.ma"
    /// - Invalid: "localhost", "b", "example.c", "-bad.com", "[127.0.0.1]"
    pub static ref EMAIL_DOMAIN_REGEX: Regex =
        Regex::new(r"^(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").unwrap();
}

/// Minimum number of digits in a phone number
pub const PHONE_MIN_DIGITS: usize = 8;

/// Maximum number of digits in a phone number (E.164)
pub const PHONE_MAX_DIGITS: usize = 15;

/// Check a phone number against [`PHONE_REGEX`] and the digit count bounds
pub fn is_valid_phone(value: &str) -> bool {
    if !PHONE_REGEX.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

/// Check an email address with `validator` and require a dotted domain
pub fn is_valid_email(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }
    value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| EMAIL_DOMAIN_REGEX.is_match(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+212 619-099651"));
        assert!(PHONE_REGEX.is_match("0612345678"));
        assert!(PHONE_REGEX.is_match("06.12.34.56.78"));
        assert!(PHONE_REGEX.is_match("06 12 34 56 78"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("06--12")); // double separator
        assert!(!PHONE_REGEX.is_match("+")); // no digits
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("06 12 ab"));
        assert!(!PHONE_REGEX.is_match("0612-")); // trailing separator
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_is_valid_phone_digit_bounds() {
        assert!(is_valid_phone("+212 619-099651"));
        assert!(!is_valid_phone("1234567")); // 7 digits
        assert!(is_valid_phone("12345678"));
        assert!(!is_valid_phone("1234567890123456")); // 16 digits
    }

    #[test]
    fn test_is_valid_email_requires_dotted_domain() {
        assert!(is_valid_email("yasmine@example.com"));
        assert!(is_valid_email("s.benali@etu.uae.ac.ma"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@[127.0.0.1]"));
        assert!(!is_valid_email("not-an-email"));
    }
}
