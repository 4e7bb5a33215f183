use thiserror::Error;

use super::FieldKey;

/// Validation failures raised by the submission handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
  #[error("password and confirmation do not match")]
  PasswordMismatch,
  #[error("required field `{}` is empty", .0.as_str())]
  MissingField(FieldKey),
}

impl AuthError {
  /// Blocking notice shown to the visitor.
  pub fn notice(&self) -> String {
    match self {
      AuthError::PasswordMismatch => "Şifreler eşleşmiyor!".to_string(),
      AuthError::MissingField(key) => format!("Lütfen \"{}\" alanını doldurun.", key.label()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unknown dialog mode: {0}")]
  UnknownMode(String),
  #[error("unknown form field: {0}")]
  UnknownField(String),
}
