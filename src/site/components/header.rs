//! Sticky header with section navigation

use super::Icon;
use crate::content::{BRAND_FULL, NAV_SECTIONS};
use crate::dialog::AuthMode;
use crate::site::navigation::smooth_scroll_to;
use crate::site::state::SiteState;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
  let state = use_context::<SiteState>().expect("SiteState not found");
  let (menu_open, set_menu_open) = create_signal(false);

  view! {
    <header class="sticky top-0 z-20 backdrop-blur supports-[backdrop-filter]:bg-black/20 bg-black/10">
      <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
        <a href="#" class="flex items-center gap-2 group">
          <Icon name="sparkles" class="w-5 h-5"/>
          <span class="tracking-widest font-light text-sm group-hover:opacity-90">{BRAND_FULL}</span>
        </a>

        <div class="hidden md:flex items-center gap-8 text-sm">
          {NAV_SECTIONS
            .into_iter()
            .map(|section| view! {
              <button
                class="hover:opacity-80 transition-all duration-150 active:scale-95"
                on:click=move |_| smooth_scroll_to(section)
              >
                {section.label()}
              </button>
            })
            .collect_view()}
        </div>

        <div class="hidden md:flex items-center gap-3">
          <button
            class="px-4 py-2 rounded-xl bg-white text-black hover:bg-white/90 transition"
            on:click=move |_| state.open_auth_modal(AuthMode::Login)
          >
            "Giriş"
          </button>
        </div>

        <button
          class="md:hidden p-2"
          aria-label="Menüyü Aç/Kapat"
          on:click=move |_| set_menu_open.update(|open| *open = !*open)
        >
          <div class="w-6 h-0.5 bg-white mb-1"></div>
          <div class="w-6 h-0.5 bg-white mb-1"></div>
          <div class="w-6 h-0.5 bg-white"></div>
        </button>
      </nav>

      <Show when=move || menu_open.get()>
        <div class="md:hidden px-4 pb-4 space-y-2 bg-black/40 backdrop-blur">
          {NAV_SECTIONS
            .into_iter()
            .map(|section| view! {
              <button
                class="block py-2 w-full text-left hover:opacity-80 transition-all duration-150 active:scale-95"
                on:click=move |_| {
                  smooth_scroll_to(section);
                  set_menu_open.set(false);
                }
              >
                {section.label()}
              </button>
            })
            .collect_view()}
          <div class="pt-2">
            <button
              class="w-full px-4 py-2 rounded-xl bg-white text-black hover:bg-white/90 transition text-center"
              on:click=move |_| {
                set_menu_open.set(false);
                state.open_auth_modal(AuthMode::Login);
              }
            >
              "Giriş"
            </button>
          </div>
        </div>
      </Show>
    </header>
  }
}
