pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    validate_username(username)?;
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err("Please enter your username".into());
    }
    if trimmed.chars().count() < MIN_USERNAME_LEN {
        return Err(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LEN
        ));
    }
    Ok(())
}

pub fn validate_password_pair(password: &str, repeat: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != repeat {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".into())
    }
}

/// Empty is allowed. Otherwise digits with an optional leading `+` and the
/// usual separators, 6 to 15 digits in total.
pub fn validate_optional_phone(phone: &str) -> Result<(), String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if allowed && (6..=15).contains(&digits) {
        Ok(())
    } else {
        Err("Please enter a valid phone number".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_need_minimum_lengths() {
        assert!(validate_credentials("ana", "secret").is_ok());
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("an", "secret").is_err());
        assert!(validate_credentials("ana", "").is_err());
        assert!(validate_credentials("ana", "12345").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("ops@northwind.io").is_ok());
        assert!(validate_email(" ops@northwind.io ").is_ok());
        assert!(validate_email("ops@northwind").is_err());
        assert!(validate_email("@northwind.io").is_err());
        assert!(validate_email("ops@@northwind.io").is_err());
        assert!(validate_email("o ps@northwind.io").is_err());
    }

    #[test]
    fn phone_is_optional_but_checked() {
        assert!(validate_optional_phone("").is_ok());
        assert!(validate_optional_phone("+386 40 123-456").is_ok());
        assert!(validate_optional_phone("(01) 234 5678").is_ok());
        assert!(validate_optional_phone("12345").is_err());
        assert!(validate_optional_phone("call me").is_err());
    }

    #[test]
    fn password_pair_checks_length_then_match() {
        assert!(validate_password_pair("secret", "secret").is_ok());
        assert!(validate_password_pair("short", "short")
            .unwrap_err()
            .contains("at least 6"));
        assert_eq!(
            validate_password_pair("secret1", "secret2").unwrap_err(),
            "Passwords do not match"
        );
    }
}
