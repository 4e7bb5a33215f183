//! Login/signup mode and the per-mode field and copy rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{FieldKey, ParseError};

/// Which form the dialog presents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
  #[default]
  Login,
  Signup,
}

/// Static copy rendered for a mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeCopy {
  pub title: &'static str,
  pub subtitle: &'static str,
  pub submit_label: &'static str,
  pub toggle_prompt: &'static str,
  pub toggle_action: &'static str,
}

const LOGIN_FIELDS: &[FieldKey] = &[FieldKey::Email, FieldKey::Password];
const SIGNUP_FIELDS: &[FieldKey] = &[
  FieldKey::Name,
  FieldKey::Email,
  FieldKey::Password,
  FieldKey::ConfirmPassword,
];

impl AuthMode {
  pub fn toggled(self) -> Self {
    match self {
      AuthMode::Login => AuthMode::Signup,
      AuthMode::Signup => AuthMode::Login,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      AuthMode::Login => "login",
      AuthMode::Signup => "signup",
    }
  }

  /// Fields rendered in this mode, in display order.
  pub fn visible_fields(self) -> &'static [FieldKey] {
    match self {
      AuthMode::Login => LOGIN_FIELDS,
      AuthMode::Signup => SIGNUP_FIELDS,
    }
  }

  /// Every visible field is required.
  pub fn is_required(self, key: FieldKey) -> bool {
    self.visible_fields().contains(&key)
  }

  pub fn shows_forgot_password(self) -> bool {
    self == AuthMode::Login
  }

  pub fn shows_terms(self) -> bool {
    self == AuthMode::Signup
  }

  pub fn copy(self) -> ModeCopy {
    match self {
      AuthMode::Login => ModeCopy {
        title: "Hoş Geldiniz",
        subtitle: "Hesabınıza giriş yapın",
        submit_label: "Giriş Yap",
        toggle_prompt: "Hesabınız yok mu?",
        toggle_action: "Kayıt Ol",
      },
      AuthMode::Signup => ModeCopy {
        title: "Aramıza Katılın",
        subtitle: "Yeni hesap oluşturun",
        submit_label: "Kayıt Ol",
        toggle_prompt: "Zaten hesabınız var mı?",
        toggle_action: "Giriş Yap",
      },
    }
  }
}

impl fmt::Display for AuthMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AuthMode {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "login" => Ok(AuthMode::Login),
      "signup" => Ok(AuthMode::Signup),
      other => Err(ParseError::UnknownMode(other.to_string())),
    }
  }
}
