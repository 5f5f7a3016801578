//! Client-side credential checks, applied before anything is sent.

use crate::error::AuthError;

/// Special characters a password may (and must) draw from.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

pub const MIN_PASSWORD_LEN: usize = 8;

/// At least eight characters, built only from ASCII letters, digits and
/// [`PASSWORD_SPECIALS`], with at least one of each class.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);

    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special);

    if long_enough && allowed && has_lower && has_upper && has_digit && has_special {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters and contain an uppercase \
             letter, a lowercase letter, a digit and one of {PASSWORD_SPECIALS}"
        )))
    }
}

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let invalid = || AuthError::InvalidCredentials(format!("invalid email address: {email}"));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let domain_ok = domain.contains('.') && domain.split('.').all(|part| !part.is_empty());

    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) || !domain_ok
    {
        return Err(invalid());
    }
    Ok(())
}

/// Both fields must be filled in before a login request is made.
pub fn require_filled(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials(
            "please fill in all fields".to_string(),
        ));
    }
    Ok(())
}
