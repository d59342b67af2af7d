//! Account sign-in flows.
//!
//! Email accounts sign up and log in with six-digit one-time passcodes; the
//! [`google`] module covers the OAuth2 flow. Both end with a bearer session.

pub mod google;
pub mod otp;

/// Lowercases and trims an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
