//! Footer links, socials and copyright

use super::Icon;
use crate::content::{BRAND_FULL, FOOTER_GROUPS, SOCIAL_LINKS};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
  let year = js_sys::Date::new_0().get_full_year();

  view! {
    <footer class="border-t border-white/10 py-10 text-sm text-white/70">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-3 gap-8">
        <div>
          <div class="flex items-center gap-2">
            <Icon name="sparkles" class="w-4 h-4"/>
            <span>{BRAND_FULL}</span>
          </div>
          <p class="mt-3 max-w-sm">"Gece tonlarında zarafet. © " {year}</p>
        </div>
        <div class="grid grid-cols-2 gap-6">
          {FOOTER_GROUPS
            .into_iter()
            .map(|group| view! {
              <div>
                <p class="text-white mb-2">{group.title}</p>
                <ul class="space-y-1">
                  {group
                    .links
                    .iter()
                    .map(|link| view! {
                      <li><a href="#" class="hover:opacity-80">{*link}</a></li>
                    })
                    .collect_view()}
                </ul>
              </div>
            })
            .collect_view()}
        </div>
        <div class="md:text-right">
          <p>"Bizi Takip Edin"</p>
          <div class="mt-3 inline-flex gap-3">
            {SOCIAL_LINKS
              .into_iter()
              .map(|label| view! {
                <a href="#" class="px-3 py-1.5 rounded-lg bg-white/10 border border-white/15 hover:bg-white/15">
                  {label}
                </a>
              })
              .collect_view()}
          </div>
        </div>
      </div>
    </footer>
  }
}
