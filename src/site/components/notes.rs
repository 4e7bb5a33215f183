//! Scent note tiers

use super::Icon;
use crate::content::{Section, NOTES};
use leptos::*;

#[component]
pub fn Notes() -> impl IntoView {
  view! {
    <section id=Section::Notes.anchor() class="py-16 md:py-24">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div class="rounded-3xl border border-white/15 bg-gradient-to-br from-white/10 to-white/5 p-8 md:p-10">
          <h2 class="text-2xl md:text-3xl font-light mb-8">"Parfüm Notaları"</h2>
          <div class="grid md:grid-cols-3 gap-6">
            {NOTES
              .into_iter()
              .map(|note| view! {
                <div class="rounded-2xl p-6 bg-black/20 border border-white/10">
                  <div class="flex items-center gap-3">
                    <span class="inline-flex items-center justify-center w-10 h-10 rounded-xl bg-white/10">
                      <Icon name=note.tier.icon() class="w-5 h-5"/>
                    </span>
                    <div>
                      <p class="text-sm text-white/70">{note.tier.title()}</p>
                      <p class="font-medium">{note.text()}</p>
                    </div>
                  </div>
                </div>
              })
              .collect_view()}
          </div>
        </div>
      </div>
    </section>
  }
}
