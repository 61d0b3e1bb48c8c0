use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating service category codes
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "passport", "tax", "vehicle-registration"
    /// - Invalid: "-tax", "tax-", "tax--office", "Tax", "tax_office"
    pub static ref CODE_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_regex_valid() {
        assert!(CODE_REGEX.is_match("passport"));
        assert!(CODE_REGEX.is_match("tax"));
        assert!(CODE_REGEX.is_match("vehicle-registration"));
        assert!(CODE_REGEX.is_match("a"));
        assert!(CODE_REGEX.is_match("counter2"));
        assert!(CODE_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_code_regex_invalid() {
        assert!(!CODE_REGEX.is_match("-tax")); // starts with hyphen
        assert!(!CODE_REGEX.is_match("tax-")); // ends with hyphen
        assert!(!CODE_REGEX.is_match("tax--office")); // double hyphen
        assert!(!CODE_REGEX.is_match("Tax")); // uppercase
        assert!(!CODE_REGEX.is_match("tax_office")); // underscore
        assert!(!CODE_REGEX.is_match("")); // empty
        assert!(!CODE_REGEX.is_match("tax office")); // space
    }
}
