//! Form field values and password visibility toggles

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ParseError;

/// Named text input of the dialog form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
  Name,
  Email,
  Password,
  ConfirmPassword,
}

impl FieldKey {
  /// Value of the input's `name` attribute
  pub fn as_str(self) -> &'static str {
    match self {
      FieldKey::Name => "name",
      FieldKey::Email => "email",
      FieldKey::Password => "password",
      FieldKey::ConfirmPassword => "confirmPassword",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      FieldKey::Name => "Ad Soyad",
      FieldKey::Email => "E-posta",
      FieldKey::Password => "Şifre",
      FieldKey::ConfirmPassword => "Şifre Tekrar",
    }
  }

  pub fn placeholder(self) -> &'static str {
    match self {
      FieldKey::Name => "Adınızı girin",
      FieldKey::Email => "ornek@email.com",
      FieldKey::Password | FieldKey::ConfirmPassword => "••••••••",
    }
  }

  /// Password-type fields carry a visibility toggle
  pub fn secret(self) -> Option<SecretField> {
    match self {
      FieldKey::Password => Some(SecretField::Password),
      FieldKey::ConfirmPassword => Some(SecretField::ConfirmPassword),
      FieldKey::Name | FieldKey::Email => None,
    }
  }
}

impl FromStr for FieldKey {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "name" => Ok(FieldKey::Name),
      "email" => Ok(FieldKey::Email),
      "password" => Ok(FieldKey::Password),
      "confirmPassword" => Ok(FieldKey::ConfirmPassword),
      other => Err(ParseError::UnknownField(other.to_string())),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretField {
  Password,
  ConfirmPassword,
}

/// The four text values of the form
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
  pub name: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
}

impl FormFields {
  pub fn get(&self, key: FieldKey) -> &str {
    match key {
      FieldKey::Name => &self.name,
      FieldKey::Email => &self.email,
      FieldKey::Password => &self.password,
      FieldKey::ConfirmPassword => &self.confirm_password,
    }
  }

  /// Replace one value, leaving the other three untouched.
  pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
    let slot = match key {
      FieldKey::Name => &mut self.name,
      FieldKey::Email => &mut self.email,
      FieldKey::Password => &mut self.password,
      FieldKey::ConfirmPassword => &mut self.confirm_password,
    };
    *slot = value.into();
  }

  pub fn is_empty(&self) -> bool {
    self.name.is_empty()
      && self.email.is_empty()
      && self.password.is_empty()
      && self.confirm_password.is_empty()
  }
}

impl std::fmt::Debug for FormFields {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FormFields")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"<redacted>")
      .field("confirm_password", &"<redacted>")
      .finish()
  }
}

/// Masked/plain state of the two password inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecretVisibility {
  password: bool,
  confirm_password: bool,
}

impl SecretVisibility {
  pub fn is_visible(&self, field: SecretField) -> bool {
    match field {
      SecretField::Password => self.password,
      SecretField::ConfirmPassword => self.confirm_password,
    }
  }

  pub fn toggle(&mut self, field: SecretField) {
    match field {
      SecretField::Password => self.password = !self.password,
      SecretField::ConfirmPassword => self.confirm_password = !self.confirm_password,
    }
  }

  /// `type` attribute for the input
  pub fn input_type(&self, field: SecretField) -> &'static str {
    if self.is_visible(field) {
      "text"
    } else {
      "password"
    }
  }

  pub fn all_hidden(&self) -> bool {
    !self.password && !self.confirm_password
  }
}

/// Field values plus their visibility toggles, owned by one dialog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
  fields: FormFields,
  secrets: SecretVisibility,
}

impl FormState {
  pub fn fields(&self) -> &FormFields {
    &self.fields
  }

  pub fn secrets(&self) -> &SecretVisibility {
    &self.secrets
  }

  pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
    self.fields.set(key, value);
  }

  pub fn toggle_secret_visibility(&mut self, field: SecretField) {
    self.secrets.toggle(field);
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}
