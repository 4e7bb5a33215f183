//! Submission validation and the hand-off to the auth collaborator

use serde::Serialize;

use super::{AuthError, AuthMode, CloseTicket, FormFields};

/// What a successful submit hands to the host application
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthAttempt {
  pub mode: AuthMode,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  pub email: String,
  #[serde(skip_serializing)]
  pub password: String,
}

impl AuthAttempt {
  pub fn from_fields(mode: AuthMode, fields: &FormFields) -> Self {
    Self {
      mode,
      name: match mode {
        AuthMode::Signup => Some(fields.name.clone()),
        AuthMode::Login => None,
      },
      email: fields.email.clone(),
      password: fields.password.clone(),
    }
  }
}

impl std::fmt::Debug for AuthAttempt {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AuthAttempt")
      .field("mode", &self.mode)
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Receiver of accepted login/signup attempts
pub trait AuthSink {
  fn on_auth_attempt(&mut self, attempt: &AuthAttempt);
}

impl<F: FnMut(&AuthAttempt)> AuthSink for F {
  fn on_auth_attempt(&mut self, attempt: &AuthAttempt) {
    self(attempt)
  }
}

/// Stub collaborator that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AuthSink for LogSink {
  fn on_auth_attempt(&mut self, attempt: &AuthAttempt) {
    let action = match attempt.mode {
      AuthMode::Login => "login",
      AuthMode::Signup => "signup",
    };
    tracing::info!(
      action,
      email = %attempt.email,
      name = attempt.name.as_deref().unwrap_or(""),
      "auth attempt"
    );
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Attempt recorded, close sequence started
  Accepted(CloseTicket),
  /// Dialog was not fully open; nothing happened
  Inactive,
}

/// Check the fields for `mode`. The confirmation check runs first.
pub fn validate(mode: AuthMode, fields: &FormFields) -> Result<(), AuthError> {
  if mode == AuthMode::Signup && fields.password != fields.confirm_password {
    return Err(AuthError::PasswordMismatch);
  }
  let missing = mode
    .visible_fields()
    .iter()
    .copied()
    .find(|key| fields.get(*key).trim().is_empty());
  match missing {
    Some(key) => Err(AuthError::MissingField(key)),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dialog::FieldKey;

  fn signup_fields(password: &str, confirm: &str) -> FormFields {
    let mut fields = FormFields::default();
    fields.set(FieldKey::Name, "A");
    fields.set(FieldKey::Email, "a@b.com");
    fields.set(FieldKey::Password, password);
    fields.set(FieldKey::ConfirmPassword, confirm);
    fields
  }

  #[test]
  fn test_mismatch_reported_before_missing_fields() {
    let mut fields = FormFields::default();
    fields.set(FieldKey::Password, "abc123");
    fields.set(FieldKey::ConfirmPassword, "abc999");
    assert_eq!(
      validate(AuthMode::Signup, &fields),
      Err(AuthError::PasswordMismatch)
    );
  }

  #[test]
  fn test_login_ignores_confirmation() {
    let mut fields = signup_fields("abc123", "something else");
    fields.set(FieldKey::Name, "");
    assert_eq!(validate(AuthMode::Login, &fields), Ok(()));
  }

  #[test]
  fn test_whitespace_counts_as_missing() {
    let mut fields = signup_fields("abc123", "abc123");
    fields.set(FieldKey::Name, "   ");
    assert_eq!(
      validate(AuthMode::Signup, &fields),
      Err(AuthError::MissingField(FieldKey::Name))
    );
  }

  #[test]
  fn test_attempt_omits_password_from_json() {
    let attempt = AuthAttempt::from_fields(AuthMode::Signup, &signup_fields("abc123", "abc123"));
    let json = serde_json::to_string(&attempt).unwrap();
    assert!(json.contains("\"mode\":\"signup\""));
    assert!(json.contains("\"name\":\"A\""));
    assert!(!json.contains("abc123"));
    assert!(!format!("{:?}", attempt).contains("abc123"));
  }

  #[test]
  fn test_login_attempt_has_no_name() {
    let attempt = AuthAttempt::from_fields(AuthMode::Login, &signup_fields("x", "x"));
    assert_eq!(attempt.name, None);
    assert_eq!(attempt.password, "x");
  }
}
