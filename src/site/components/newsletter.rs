//! Newsletter signup form

use crate::newsletter::normalize_email;
use crate::site::state::{SiteState, ToastLevel};
use leptos::*;

#[component]
pub fn Newsletter() -> impl IntoView {
  let state = use_context::<SiteState>().expect("SiteState not found");
  let (email, set_email) = create_signal(String::new());

  let on_submit = move |ev: web_sys::SubmitEvent| {
    ev.prevent_default();
    match normalize_email(&email.get_untracked()) {
      Ok(address) => {
        logging::log!("newsletter signup: {}", address);
        set_email.set(String::new());
        state.show_toast("Teşekkürler! Bültenimize kaydoldunuz.", ToastLevel::Success);
      }
      Err(err) => state.show_toast(err.notice(), ToastLevel::Error),
    }
  };

  view! {
    <section class="pb-24">
      <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
        <div class="rounded-3xl border border-white/15 bg-white/5 p-8">
          <h3 class="text-xl md:text-2xl font-light">"Özel lansmanlardan haberdar olun"</h3>
          <p class="mt-2 text-white/80 text-sm">
            "Ayda bir e-posta. İndirimler, erken erişimler ve atölye hikayeleri."
          </p>
          <form class="mt-6 flex flex-col sm:flex-row gap-3" on:submit=on_submit>
            <input
              type="email"
              placeholder="E-posta adresiniz"
              class="flex-1 px-4 py-3 rounded-xl bg-black/40 border border-white/20 placeholder-white/50 focus:outline-none focus:ring-2 focus:ring-white/30"
              prop:value=email
              on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button type="submit" class="px-6 py-3 rounded-xl bg-white text-black hover:bg-white/90 transition">
              "Kaydol"
            </button>
          </form>
        </div>
      </div>
    </section>
  }
}
