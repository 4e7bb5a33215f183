//! Login/signup dialog

use super::Icon;
use crate::content::BRAND;
use crate::dialog::{AuthMode, FieldKey};
use crate::site::state::SiteState;
use leptos::*;

#[component]
pub fn AuthModal() -> impl IntoView {
  let state = use_context::<SiteState>().expect("SiteState not found");
  let auth = state.auth;

  let rendered = create_memo(move |_| auth.with(|d| d.is_rendered()));
  let closing = create_memo(move |_| auth.with(|d| d.is_closing()));
  let mode = create_memo(move |_| auth.with(|d| d.mode()));

  let on_submit = move |ev: web_sys::SubmitEvent| {
    ev.prevent_default();
    state.submit_auth();
  };

  view! {
    <Show when=move || rendered.get()>
      <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
        <div
          class="absolute inset-0 bg-black/70 backdrop-blur-sm auth-backdrop"
          class:auth-backdrop-exit=move || closing.get()
          on:click=move |_| state.backdrop_click()
        ></div>

        <div
          class="relative w-full max-w-md mx-auto auth-surface"
          class:auth-surface-exit=move || closing.get()
          role="dialog"
          aria-modal="true"
          on:click=|e| e.stop_propagation()
        >
          <div class="relative rounded-3xl border border-white/20 bg-gradient-to-br from-[#1F1C2C] to-[#2a2535] p-8 backdrop-blur-xl shadow-2xl">
            <div aria-hidden="true" class="absolute inset-0 rounded-3xl opacity-50 auth-glow"></div>

            <button
              class="absolute top-6 right-6 p-2 rounded-xl bg-white/10 hover:bg-white/20 transition-colors z-10"
              aria-label="Modalı Kapat"
              on:click=move |_| state.close_auth_modal()
            >
              <Icon name="x" class="w-5 h-5 text-white"/>
            </button>

            // Re-rendered per mode so the entrance transition replays
            {move || {
              let copy = mode.get().copy();
              view! {
                <div class="relative text-center mb-8 auth-fade-in">
                  <div class="flex items-center justify-center gap-2 mb-4">
                    <Icon name="sparkles" class="w-6 h-6 text-white"/>
                    <span class="text-xl font-light tracking-widest text-white">{BRAND}</span>
                  </div>
                  <h2 class="text-2xl font-light text-white mb-2">{copy.title}</h2>
                  <p class="text-white/70 text-sm">{copy.subtitle}</p>
                </div>
              }
            }}

            <form class="relative space-y-5" on:submit=on_submit>
              <Show when=move || mode.get() == AuthMode::Signup>
                <AuthField field_key=FieldKey::Name icon="user"/>
              </Show>
              <AuthField field_key=FieldKey::Email icon="mail"/>
              <AuthField field_key=FieldKey::Password icon="lock"/>
              <Show when=move || mode.get() == AuthMode::Signup>
                <AuthField field_key=FieldKey::ConfirmPassword icon="lock"/>
              </Show>

              <Show when=move || mode.get().shows_forgot_password()>
                <div class="text-right">
                  <button type="button" class="text-sm text-white/70 hover:text-white transition-colors">
                    "Şifremi Unuttum"
                  </button>
                </div>
              </Show>

              <button
                type="submit"
                class="w-full py-3 rounded-xl bg-white text-black font-medium hover:bg-white/90 transition-all duration-300 transform hover:scale-[1.02] flex items-center justify-center gap-2"
              >
                {move || mode.get().copy().submit_label}
                <Icon name="arrow-right" class="w-4 h-4"/>
              </button>
            </form>

            <div class="relative mt-8 text-center">
              <div class="flex items-center justify-center gap-2 text-sm text-white/70">
                <span>{move || mode.get().copy().toggle_prompt}</span>
                <button
                  type="button"
                  class="text-white hover:text-white/80 font-medium underline decoration-white/30 hover:decoration-white/60 transition-colors"
                  on:click=move |_| auth.update(|d| d.toggle_mode())
                >
                  {move || mode.get().copy().toggle_action}
                </button>
              </div>
            </div>

            <Show when=move || mode.get().shows_terms()>
              <div class="relative mt-6 text-center text-xs text-white/60 auth-fade-in">
                "Kayıt olarak "
                <a href="#" class="underline hover:text-white/80">"Kullanım Şartları"</a>
                " ve "
                <a href="#" class="underline hover:text-white/80">"Gizlilik Politikası"</a>
                "'nı kabul etmiş olursunuz."
              </div>
            </Show>
          </div>
        </div>
      </div>
    </Show>
  }
}

/// One labelled input bound to a form field
#[component]
fn AuthField(field_key: FieldKey, icon: &'static str) -> impl IntoView {
  let key = field_key;
  let state = use_context::<SiteState>().expect("SiteState not found");
  let auth = state.auth;
  let secret = key.secret();

  let value = move || auth.with(|d| d.fields().get(key).to_string());
  let input_type = move || match secret {
    Some(field) => auth.with(|d| d.secrets().input_type(field)),
    None if key == FieldKey::Email => "email",
    None => "text",
  };
  let padding = if secret.is_some() { "pr-12" } else { "pr-4" };

  view! {
    <div class="relative auth-fade-in">
      <label class="block text-white/80 text-sm mb-2" for=key.as_str()>{key.label()}</label>
      <div class="relative">
        <Icon name=icon class="absolute left-3 top-1/2 transform -translate-y-1/2 w-5 h-5 text-white/50"/>
        <input
          id=key.as_str()
          name=key.as_str()
          type=input_type
          placeholder=key.placeholder()
          required=true
          class=format!(
            "w-full pl-12 {} py-3 rounded-xl bg-white/10 border border-white/20 text-white placeholder-white/50 focus:outline-none focus:ring-2 focus:ring-white/30 focus:border-transparent transition-all",
            padding
          )
          prop:value=value
          on:input=move |ev| {
            let text = event_target_value(&ev);
            auth.update(|d| d.set_field(key, text));
          }
        />
        {secret.map(|field| {
          let visible = move || auth.with(|d| d.secrets().is_visible(field));
          view! {
            <button
              type="button"
              class="absolute right-3 top-1/2 transform -translate-y-1/2 p-1 text-white/50 hover:text-white/80"
              aria-label="Şifreyi Göster/Gizle"
              on:click=move |_| auth.update(|d| d.toggle_secret_visibility(field))
            >
              {move || if visible() {
                view! { <Icon name="eye-off" class="w-5 h-5"/> }.into_view()
              } else {
                view! { <Icon name="eye" class="w-5 h-5"/> }.into_view()
              }}
            </button>
          }
        })}
      </div>
    </div>
  }
}
