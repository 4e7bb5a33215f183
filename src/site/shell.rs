//! Document-level side effects of the auth dialog

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

use crate::dialog::PageShell;

/// Body scroll lock and the window keydown listener
#[derive(Default)]
pub struct DomShell {
  on_key: Option<Callback<String>>,
  key_listener: Option<WindowListenerHandle>,
}

impl DomShell {
  pub fn new() -> Self {
    Self::default()
  }

  /// Route keydown events to `on_key` while the listener is attached
  pub fn bind_keys(&mut self, on_key: Callback<String>) {
    self.on_key = Some(on_key);
  }
}

impl PageShell for DomShell {
  fn lock_scroll(&mut self) {
    set_body_overflow("hidden");
  }

  fn unlock_scroll(&mut self) {
    set_body_overflow("unset");
  }

  fn attach_escape_listener(&mut self) {
    if self.key_listener.is_some() {
      return;
    }
    let Some(on_key) = self.on_key else {
      logging::warn!("auth dialog opened before its key handler was bound");
      return;
    };
    let handle = window_event_listener(ev::keydown, move |ev| {
      on_key.call(ev.key());
    });
    self.key_listener = Some(handle);
  }

  fn detach_escape_listener(&mut self) {
    if let Some(handle) = self.key_listener.take() {
      handle.remove();
    }
  }
}

fn set_body_overflow(value: &str) {
  let Some(body) = document().body() else {
    return;
  };
  if let Err(err) = body.style().set_property("overflow", value) {
    logging::warn!("failed to set body overflow: {:?}", err);
  }
}
