//! Toast notification component

use super::Icon;
use crate::site::state::{SiteState, ToastLevel};
use gloo_timers::callback::Timeout;
use leptos::*;

#[component]
pub fn ToastContainer() -> impl IntoView {
  let state = use_context::<SiteState>().expect("SiteState not found");
  let toasts = state.toasts;

  view! {
    <div class="fixed bottom-6 right-6 z-[60] flex flex-col gap-3">
      <For
        each=move || toasts.get()
        key=|t| t.id
        children=move |toast| {
          let id = toast.id;

          // Auto-remove toast after 5 seconds
          let timeout = Timeout::new(5000, move || {
            state.remove_toast(id);
          });
          timeout.forget();

          view! {
            <div class=format!(
              "toast flex items-center gap-3 px-4 py-3 rounded-xl border backdrop-blur {}",
              toast_level_class(toast.level)
            )>
              <Icon name=toast_level_icon(toast.level) size=18/>
              <span class="text-sm">{toast.message.clone()}</span>
              <button class="opacity-60 hover:opacity-100" on:click=move |_| state.remove_toast(id)>
                <Icon name="x" size=16/>
              </button>
            </div>
          }
        }
      />
    </div>
  }
}

fn toast_level_class(level: ToastLevel) -> &'static str {
  match level {
    ToastLevel::Info => "bg-white/10 border-white/20",
    ToastLevel::Success => "bg-emerald-500/20 border-emerald-300/30",
    ToastLevel::Error => "bg-rose-500/20 border-rose-300/30",
  }
}

fn toast_level_icon(level: ToastLevel) -> &'static str {
  match level {
    ToastLevel::Info => "info",
    ToastLevel::Success => "check-circle",
    ToastLevel::Error => "alert-circle",
  }
}
