//! Newsletter signup address check

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewsletterError {
  #[error("email address is empty")]
  Empty,
  #[error("email address is malformed")]
  Malformed,
}

impl NewsletterError {
  pub fn notice(&self) -> &'static str {
    match self {
      NewsletterError::Empty => "Lütfen e-posta adresinizi girin.",
      NewsletterError::Malformed => "Geçerli bir e-posta adresi girin.",
    }
  }
}

/// Trim and loosely validate an address: one `@`, non-empty local part, dotted domain.
pub fn normalize_email(input: &str) -> Result<String, NewsletterError> {
  let email = input.trim();
  if email.is_empty() {
    return Err(NewsletterError::Empty);
  }
  let (local, domain) = email.split_once('@').ok_or(NewsletterError::Malformed)?;
  let dotted = domain
    .split('.')
    .all(|label| !label.is_empty())
    && domain.contains('.');
  if local.is_empty() || domain.contains('@') || !dotted || email.contains(char::is_whitespace) {
    return Err(NewsletterError::Malformed);
  }
  Ok(email.to_string())
}
