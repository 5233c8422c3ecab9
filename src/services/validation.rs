//! Field-level validators, run before any network call. Each returns the
//! inline error message for the field, or `None` when the value is fine.

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("E-mail is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("E-mail must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("E-mail must be a valid address".to_string());
    }
    None
}

/// Validate a password against the remote API's policy: at least 6 chars
/// with an uppercase letter, a lowercase letter, a digit and a special
/// character.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain an uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain a lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a digit".to_string());
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("Password must contain a special character".to_string());
    }
    None
}

/// Validate that the confirmation matches the new password.
pub fn validate_confirmation(password: &str, confirm: &str) -> Option<String> {
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Validate the OTP sent by the reset-request endpoint.
pub fn validate_otp(seed: &str) -> Option<String> {
    if seed.trim().is_empty() {
        return Some("OTP is required".to_string());
    }
    None
}

/// Validate a username: 2-50 chars, alphanumeric and underscore only.
pub fn validate_username(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Username is required".to_string());
    }
    if trimmed.len() < 2 {
        return Some("Username must be at least 2 characters".to_string());
    }
    if trimmed.len() > 50 {
        return Some("Username must be at most 50 characters".to_string());
    }
    if !trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Some("Username may only contain letters, numbers, and underscores".to_string());
    }
    None
}

/// Validate an optional phone number: digits only, optional leading '+'.
pub fn validate_phone(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return None;
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some("Phone number may only contain digits".to_string());
    }
    if digits.len() > 15 {
        return Some("Phone number must be at most 15 digits".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(validate_email("nour@example.com").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("missing-dot@host").is_some());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Aa1!xy").is_none());
        assert!(validate_password("").is_some());
        assert!(validate_password("Aa1!").is_some()); // too short
        assert!(validate_password("aa1!xy").is_some()); // no uppercase
        assert!(validate_password("AA1!XY").is_some()); // no lowercase
        assert!(validate_password("Aaa!xy").is_some()); // no digit
        assert!(validate_password("Aa1xyz").is_some()); // no special
    }

    #[test]
    fn test_confirmation_must_match() {
        assert!(validate_confirmation("Aa1!xy", "Aa1!xy").is_none());
        assert!(validate_confirmation("Aa1!xy", "Aa1!xz").is_some());
    }

    #[test]
    fn test_otp_required() {
        assert!(validate_otp("X7k2p").is_none());
        assert!(validate_otp("  ").is_some());
    }

    #[test]
    fn test_username_bounds() {
        assert!(validate_username("nour_pm").is_none());
        assert!(validate_username("a").is_some());
        assert!(validate_username(&"x".repeat(51)).is_some());
        assert!(validate_username("bad name").is_some());
    }

    #[test]
    fn test_phone_optional_digits() {
        assert!(validate_phone("").is_none());
        assert!(validate_phone("01012345678").is_none());
        assert!(validate_phone("+201012345678").is_none());
        assert!(validate_phone("not-a-phone").is_some());
        assert!(validate_phone(&"9".repeat(16)).is_some());
    }
}
