//! Page state shared through context

use gloo_timers::callback::Timeout;
use leptos::*;

use super::shell::DomShell;
use crate::dialog::{AuthAttempt, AuthDialog, AuthMode, AuthSink, CloseTicket, SubmitOutcome};

/// Toast notification
#[derive(Clone, Debug)]
pub struct Toast {
  pub id: u32,
  pub message: String,
  pub level: ToastLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
  Info,
  Success,
  Error,
}

/// Browser stand-in for the auth collaborator
struct ConsoleSink;

impl AuthSink for ConsoleSink {
  fn on_auth_attempt(&mut self, attempt: &AuthAttempt) {
    let action = match attempt.mode {
      AuthMode::Login => "Giriş yapılıyor...",
      AuthMode::Signup => "Kayıt olunuyor...",
    };
    logging::log!("{}", action);
    match serde_json::to_string(attempt) {
      Ok(json) => logging::log!("{}", json),
      Err(err) => logging::warn!("could not encode auth attempt: {}", err),
    }
  }
}

#[derive(Clone, Copy)]
pub struct SiteState {
  pub auth: RwSignal<AuthDialog<DomShell>>,
  close_timer: StoredValue<Option<Timeout>>,
  pub toasts: RwSignal<Vec<Toast>>,
  pub toast_counter: RwSignal<u32>,
}

impl SiteState {
  pub fn new() -> Self {
    let state = Self {
      auth: create_rw_signal(AuthDialog::new(DomShell::new())),
      close_timer: store_value(None),
      toasts: create_rw_signal(Vec::new()),
      toast_counter: create_rw_signal(0),
    };
    let on_key = Callback::new(move |key: String| {
      let ticket = state.auth.try_update(|d| d.handle_key(&key)).flatten();
      state.schedule_close(ticket);
    });
    state.auth.update_untracked(|d| d.shell_mut().bind_keys(on_key));
    state
  }

  pub fn open_auth_modal(&self, mode: AuthMode) {
    // dropping a pending Timeout cancels it
    self.close_timer.set_value(None);
    self.auth.update(|d| {
      d.open(mode);
    });
  }

  pub fn close_auth_modal(&self) {
    let ticket = self.auth.try_update(|d| d.request_close()).flatten();
    self.schedule_close(ticket);
  }

  pub fn backdrop_click(&self) {
    let ticket = self.auth.try_update(|d| d.backdrop_click()).flatten();
    self.schedule_close(ticket);
  }

  pub fn submit_auth(&self) {
    match self.auth.try_update(|d| d.submit(&mut ConsoleSink)) {
      Some(Ok(SubmitOutcome::Accepted(ticket))) => self.schedule_close(Some(ticket)),
      Some(Ok(SubmitOutcome::Inactive)) | None => {}
      Some(Err(err)) => {
        if let Err(js) = window().alert_with_message(&err.notice()) {
          logging::warn!("alert failed: {:?}", js);
        }
      }
    }
  }

  fn schedule_close(&self, ticket: Option<CloseTicket>) {
    let Some(ticket) = ticket else {
      return;
    };
    let auth = self.auth;
    let millis = u32::try_from(ticket.delay().as_millis()).unwrap_or(u32::MAX);
    let timeout = Timeout::new(millis, move || {
      auth.update(|d| {
        d.finish_close(ticket);
      });
    });
    self.close_timer.set_value(Some(timeout));
  }

  pub fn show_toast(&self, message: &str, level: ToastLevel) {
    let id = self.toast_counter.get_untracked() + 1;
    self.toast_counter.set(id);
    self.toasts.update(|toasts| {
      toasts.push(Toast {
        id,
        message: message.to_string(),
        level,
      });
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| {
      toasts.retain(|t| t.id != id);
    });
  }
}

impl Default for SiteState {
  fn default() -> Self {
    Self::new()
  }
}
