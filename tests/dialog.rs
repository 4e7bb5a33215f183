//! Auth dialog lifecycle, mode switching and submission

use lunare::dialog::{
  AuthAttempt, AuthDialog, AuthError, AuthMode, CloseTicket, FieldKey, PageShell, Phase,
  SecretField, SubmitOutcome, CLOSE_ANIMATION,
};
use std::time::Duration;

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct RecordingShell {
  scroll_locked: bool,
  listener_attached: bool,
  lock_count: u32,
  attach_count: u32,
}

impl PageShell for RecordingShell {
  fn lock_scroll(&mut self) {
    assert!(!self.scroll_locked, "scroll locked twice");
    self.scroll_locked = true;
    self.lock_count += 1;
  }
  fn unlock_scroll(&mut self) {
    assert!(self.scroll_locked, "unlock without lock");
    self.scroll_locked = false;
  }
  fn attach_escape_listener(&mut self) {
    assert!(!self.listener_attached, "listener attached twice");
    self.listener_attached = true;
    self.attach_count += 1;
  }
  fn detach_escape_listener(&mut self) {
    assert!(self.listener_attached, "detach without attach");
    self.listener_attached = false;
  }
}

/// Pending close timers on a virtual clock (milliseconds)
#[derive(Default)]
struct Timers {
  now: u64,
  pending: Vec<(u64, CloseTicket)>,
}

impl Timers {
  fn schedule(&mut self, ticket: Option<CloseTicket>) {
    if let Some(ticket) = ticket {
      let due = self.now + ticket.delay().as_millis() as u64;
      self.pending.push((due, ticket));
    }
  }

  /// Advance the clock, firing every due timer against `dialog`.
  fn advance(&mut self, dialog: &mut AuthDialog<RecordingShell>, millis: u64) {
    self.now += millis;
    let now = self.now;
    let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _)| *at <= now);
    self.pending = rest;
    for (_, ticket) in due {
      dialog.finish_close(ticket);
    }
  }
}

fn new_dialog() -> AuthDialog<RecordingShell> {
  AuthDialog::new(RecordingShell::default())
}

fn fill_signup(dialog: &mut AuthDialog<RecordingShell>, password: &str, confirm: &str) {
  dialog.set_field(FieldKey::Name, "A");
  dialog.set_field(FieldKey::Email, "a@b.com");
  dialog.set_field(FieldKey::Password, password);
  dialog.set_field(FieldKey::ConfirmPassword, confirm);
}

fn assert_lock_matches_visibility(dialog: &AuthDialog<RecordingShell>) {
  assert_eq!(
    dialog.shell().scroll_locked,
    dialog.is_rendered(),
    "scroll lock out of sync in phase {:?}",
    dialog.phase()
  );
  assert_eq!(dialog.shell().listener_attached, dialog.is_rendered());
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn test_open_renders_and_locks() {
  let mut dialog = new_dialog();
  assert!(!dialog.is_rendered());
  assert_lock_matches_visibility(&dialog);

  dialog.open(AuthMode::Login);
  assert_eq!(dialog.phase(), Phase::Open);
  assert!(dialog.is_open());
  assert!(!dialog.is_closing());
  assert_lock_matches_visibility(&dialog);
}

#[test]
fn test_close_keeps_rendering_until_timer() {
  let mut dialog = new_dialog();
  let mut timers = Timers::default();
  dialog.open(AuthMode::Login);

  timers.schedule(dialog.request_close());
  assert!(dialog.is_closing());
  assert!(dialog.is_open());
  assert!(dialog.is_rendered());

  timers.advance(&mut dialog, 299);
  assert!(dialog.is_rendered());
  assert_lock_matches_visibility(&dialog);

  timers.advance(&mut dialog, 1);
  assert_eq!(dialog.phase(), Phase::Closed);
  assert!(!dialog.is_open());
  assert_lock_matches_visibility(&dialog);
}

#[test]
fn test_close_ticket_uses_fixed_delay() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  let ticket = dialog.request_close().unwrap();
  assert_eq!(ticket.delay(), CLOSE_ANIMATION);
  assert_eq!(CLOSE_ANIMATION, Duration::from_millis(300));
}

#[test]
fn test_custom_close_delay() {
  let mut dialog = AuthDialog::with_close_delay(RecordingShell::default(), Duration::from_millis(50));
  dialog.open(AuthMode::Signup);
  assert_eq!(dialog.request_close().unwrap().delay(), Duration::from_millis(50));
}

#[test]
fn test_open_while_open_resets_mode_only() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  dialog.set_field(FieldKey::Email, "a@b.com");
  dialog.open(AuthMode::Signup);

  assert_eq!(dialog.mode(), AuthMode::Signup);
  assert_eq!(dialog.fields().email, "a@b.com");
  assert_eq!(dialog.shell().lock_count, 1);
}

#[test]
fn test_reopen_during_close_ignores_stale_timer() {
  let mut dialog = new_dialog();
  let mut timers = Timers::default();
  dialog.open(AuthMode::Login);

  timers.schedule(dialog.request_close());
  timers.advance(&mut dialog, 100);
  assert!(dialog.open(AuthMode::Signup), "pending close should be cancelled");

  timers.advance(&mut dialog, 500);
  assert_eq!(dialog.phase(), Phase::Open);
  assert_eq!(dialog.mode(), AuthMode::Signup);
  assert_lock_matches_visibility(&dialog);
  assert_eq!(dialog.shell().lock_count, 1);
}

#[test]
fn test_stale_ticket_ignored_after_new_close() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  let stale = dialog.request_close().unwrap();
  dialog.open(AuthMode::Login);
  let fresh = dialog.request_close().unwrap();

  assert!(!dialog.finish_close(stale));
  assert!(dialog.is_closing());
  assert!(dialog.finish_close(fresh));
  assert!(!dialog.is_rendered());
}

#[test]
fn test_finish_close_twice_is_noop() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  let ticket = dialog.request_close().unwrap();
  assert!(dialog.finish_close(ticket));
  assert!(!dialog.finish_close(ticket));
  assert_lock_matches_visibility(&dialog);
}

#[test]
fn test_scroll_lock_across_interleavings() {
  // o = open(login), O = open(signup), c = close request, e = escape,
  // b = backdrop, digits = advance N * 100ms
  let scripts = [
    "oc3", "oc1o3", "oce3", "ooc2c1", "bo1c2O3c3", "oc1O1c1e3o", "e3oec3", "ocb1o2c4",
  ];
  for script in scripts {
    let mut dialog = new_dialog();
    let mut timers = Timers::default();
    for step in script.chars() {
      match step {
        'o' => {
          dialog.open(AuthMode::Login);
        }
        'O' => {
          dialog.open(AuthMode::Signup);
        }
        'c' => timers.schedule(dialog.request_close()),
        'e' => timers.schedule(dialog.handle_key("Escape")),
        'b' => timers.schedule(dialog.backdrop_click()),
        d => {
          let n = d.to_digit(10).unwrap() as u64;
          timers.advance(&mut dialog, n * 100);
        }
      }
      assert_lock_matches_visibility(&dialog);
    }
  }
}

// =============================================================================
// Keyboard and backdrop
// =============================================================================

#[test]
fn test_escape_ignored_when_closed() {
  let mut dialog = new_dialog();
  assert!(dialog.handle_key("Escape").is_none());
  assert_eq!(dialog.phase(), Phase::Closed);
  assert_eq!(dialog.shell().lock_count, 0);
  assert_eq!(dialog.shell().attach_count, 0);
}

#[test]
fn test_escape_closes_once() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  assert!(dialog.handle_key("Enter").is_none());
  assert!(dialog.handle_key("Escape").is_some());
  assert!(dialog.handle_key("Escape").is_none());
  assert!(dialog.is_closing());
}

#[test]
fn test_backdrop_click_closes() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Signup);
  assert!(dialog.backdrop_click().is_some());
  assert!(dialog.is_closing());
}

// =============================================================================
// Mode and fields
// =============================================================================

#[test]
fn test_toggle_mode_clears_everything() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  fill_signup(&mut dialog, "abc123", "abc999");
  dialog.toggle_secret_visibility(SecretField::Password);
  dialog.toggle_secret_visibility(SecretField::ConfirmPassword);

  dialog.toggle_mode();
  assert_eq!(dialog.mode(), AuthMode::Signup);
  assert!(dialog.fields().is_empty());
  assert!(dialog.secrets().all_hidden());
  assert_eq!(dialog.phase(), Phase::Open);

  dialog.toggle_mode();
  assert_eq!(dialog.mode(), AuthMode::Login);
  assert!(dialog.fields().is_empty());
}

#[test]
fn test_toggle_mode_does_not_touch_visibility() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  dialog.request_close();
  dialog.toggle_mode();
  assert!(dialog.is_closing());
}

#[test]
fn test_set_mode_keeps_fields() {
  let mut dialog = new_dialog();
  dialog.set_field(FieldKey::Email, "a@b.com");
  dialog.set_mode(AuthMode::Signup);
  assert_eq!(dialog.fields().email, "a@b.com");
}

#[test]
fn test_set_field_sequences_do_not_cross() {
  let keys = [
    FieldKey::Name,
    FieldKey::Email,
    FieldKey::Password,
    FieldKey::ConfirmPassword,
  ];
  let mut dialog = new_dialog();
  for round in 0..3 {
    for key in keys {
      let before = dialog.fields().clone();
      let value = format!("{}-{}", key.as_str(), round);
      dialog.set_field(key, value.clone());
      for other in keys {
        if other == key {
          assert_eq!(dialog.fields().get(other), value);
        } else {
          assert_eq!(dialog.fields().get(other), before.get(other));
        }
      }
    }
  }
}

#[test]
fn test_secret_toggles_are_independent() {
  let mut dialog = new_dialog();
  dialog.toggle_secret_visibility(SecretField::Password);
  assert!(dialog.secrets().is_visible(SecretField::Password));
  assert!(!dialog.secrets().is_visible(SecretField::ConfirmPassword));
}

// =============================================================================
// Submission
// =============================================================================

#[test]
fn test_signup_mismatch_keeps_dialog_and_fields() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Signup);
  fill_signup(&mut dialog, "abc123", "abc999");
  let before = dialog.fields().clone();

  let mut attempts: Vec<AuthAttempt> = Vec::new();
  let mut sink = |a: &AuthAttempt| attempts.push(a.clone());
  let result = dialog.submit(&mut sink);

  assert_eq!(result, Err(AuthError::PasswordMismatch));
  assert_eq!(dialog.phase(), Phase::Open);
  assert_eq!(dialog.fields(), &before);
  assert!(attempts.is_empty());
}

#[test]
fn test_signup_success_records_and_closes() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Signup);
  fill_signup(&mut dialog, "abc123", "abc123");

  let mut attempts: Vec<AuthAttempt> = Vec::new();
  let mut sink = |a: &AuthAttempt| attempts.push(a.clone());
  let outcome = dialog.submit(&mut sink).unwrap();

  let SubmitOutcome::Accepted(ticket) = outcome else {
    panic!("expected accepted submit, got {:?}", outcome);
  };
  assert!(dialog.is_closing());
  assert_eq!(attempts.len(), 1);
  assert_eq!(attempts[0].mode, AuthMode::Signup);
  assert_eq!(attempts[0].name.as_deref(), Some("A"));
  assert_eq!(attempts[0].email, "a@b.com");
  assert_eq!(attempts[0].password, "abc123");

  // fields survive the exit transition and clear once it completes
  assert_eq!(dialog.fields().email, "a@b.com");
  assert!(dialog.finish_close(ticket));
  assert!(dialog.fields().is_empty());
}

#[test]
fn test_login_success_has_no_name() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  dialog.set_field(FieldKey::Email, "a@b.com");
  dialog.set_field(FieldKey::Password, "secret");

  let mut seen = None;
  let mut sink = |a: &AuthAttempt| seen = Some(a.clone());
  assert!(matches!(dialog.submit(&mut sink), Ok(SubmitOutcome::Accepted(_))));
  let attempt = seen.unwrap();
  assert_eq!(attempt.mode, AuthMode::Login);
  assert_eq!(attempt.name, None);
}

#[test]
fn test_missing_field_blocks_submit() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  dialog.set_field(FieldKey::Password, "secret");

  let mut calls = 0;
  let mut sink = |_: &AuthAttempt| calls += 1;
  assert_eq!(
    dialog.submit(&mut sink),
    Err(AuthError::MissingField(FieldKey::Email))
  );
  assert_eq!(calls, 0);
  assert_eq!(dialog.phase(), Phase::Open);
}

#[test]
fn test_submit_while_closing_is_inactive() {
  let mut dialog = new_dialog();
  dialog.open(AuthMode::Login);
  dialog.set_field(FieldKey::Email, "a@b.com");
  dialog.set_field(FieldKey::Password, "secret");
  dialog.request_close();

  let mut calls = 0;
  let mut sink = |_: &AuthAttempt| calls += 1;
  assert_eq!(dialog.submit(&mut sink), Ok(SubmitOutcome::Inactive));
  assert_eq!(calls, 0);
}

#[test]
fn test_submit_when_closed_is_inactive() {
  let mut dialog = new_dialog();
  let mut sink = lunare::dialog::LogSink;
  assert_eq!(dialog.submit(&mut sink), Ok(SubmitOutcome::Inactive));
}

#[test]
fn test_error_notices() {
  assert_eq!(AuthError::PasswordMismatch.notice(), "Şifreler eşleşmiyor!");
  assert!(AuthError::MissingField(FieldKey::Email)
    .notice()
    .contains("E-posta"));
  assert_eq!(
    AuthError::MissingField(FieldKey::ConfirmPassword).to_string(),
    "required field `confirmPassword` is empty"
  );
}
