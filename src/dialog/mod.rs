//! Login/signup dialog state
//!
//! [`AuthDialog`] composes the visibility lifecycle, the mode selector and the
//! form state behind one set of mutating methods. It has no DOM dependency: the
//! page shell and the auth collaborator are injected, and the close timer is
//! driven by the host through [`CloseTicket`]s.

mod controller;
mod error;
mod form;
mod mode;
mod submit;

pub use controller::{CloseTicket, PageShell, Phase, VisibilityController, CLOSE_ANIMATION};
pub use error::{AuthError, ParseError};
pub use form::{FieldKey, FormFields, FormState, SecretField, SecretVisibility};
pub use mode::{AuthMode, ModeCopy};
pub use submit::{validate, AuthAttempt, AuthSink, LogSink, SubmitOutcome};

use std::time::Duration;

pub const ESCAPE_KEY: &str = "Escape";

pub struct AuthDialog<S: PageShell> {
  visibility: VisibilityController<S>,
  mode: AuthMode,
  form: FormState,
}

impl<S: PageShell> AuthDialog<S> {
  pub fn new(shell: S) -> Self {
    Self::with_close_delay(shell, CLOSE_ANIMATION)
  }

  pub fn with_close_delay(shell: S, close_delay: Duration) -> Self {
    Self {
      visibility: VisibilityController::with_close_delay(shell, close_delay),
      mode: AuthMode::default(),
      form: FormState::default(),
    }
  }

  pub fn mode(&self) -> AuthMode {
    self.mode
  }

  pub fn phase(&self) -> Phase {
    self.visibility.phase()
  }

  pub fn is_open(&self) -> bool {
    self.visibility.is_open()
  }

  pub fn is_closing(&self) -> bool {
    self.visibility.is_closing()
  }

  pub fn is_rendered(&self) -> bool {
    self.visibility.is_rendered()
  }

  pub fn fields(&self) -> &FormFields {
    self.form.fields()
  }

  pub fn secrets(&self) -> &SecretVisibility {
    self.form.secrets()
  }

  pub fn shell(&self) -> &S {
    self.visibility.shell()
  }

  pub fn shell_mut(&mut self) -> &mut S {
    self.visibility.shell_mut()
  }

  /// Show the dialog in `mode`. Returns true when a pending close was cancelled.
  pub fn open(&mut self, mode: AuthMode) -> bool {
    self.set_mode(mode);
    self.visibility.open()
  }

  /// Single entry point for every close path.
  pub fn request_close(&mut self) -> Option<CloseTicket> {
    self.visibility.request_close()
  }

  /// Timer expiry. Clears the form when the close actually completes.
  pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
    let closed = self.visibility.finish_close(ticket);
    if closed {
      self.form.reset();
    }
    closed
  }

  pub fn handle_key(&mut self, key: &str) -> Option<CloseTicket> {
    if key != ESCAPE_KEY || !self.is_open() {
      return None;
    }
    self.request_close()
  }

  pub fn backdrop_click(&mut self) -> Option<CloseTicket> {
    self.request_close()
  }

  pub fn set_mode(&mut self, mode: AuthMode) {
    self.mode = mode;
  }

  pub fn toggle_mode(&mut self) {
    self.mode = self.mode.toggled();
    self.form.reset();
    tracing::debug!(mode = %self.mode, "dialog mode toggled");
  }

  pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
    self.form.set_field(key, value);
  }

  pub fn toggle_secret_visibility(&mut self, field: SecretField) {
    self.form.toggle_secret_visibility(field);
  }

  /// Validate, hand the attempt to `sink`, and start closing.
  pub fn submit(&mut self, sink: &mut dyn AuthSink) -> Result<SubmitOutcome, AuthError> {
    if self.phase() != Phase::Open {
      return Ok(SubmitOutcome::Inactive);
    }
    validate(self.mode, self.form.fields()).inspect_err(|err| {
      tracing::debug!(mode = %self.mode, error = %err, "submission rejected");
    })?;

    let attempt = AuthAttempt::from_fields(self.mode, self.form.fields());
    sink.on_auth_attempt(&attempt);

    match self.request_close() {
      Some(ticket) => Ok(SubmitOutcome::Accepted(ticket)),
      None => Ok(SubmitOutcome::Inactive),
    }
  }
}
