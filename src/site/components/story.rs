//! Brand story section

use crate::content::{Section, BRAND, STORY_IMAGE, STORY_POINTS};
use leptos::*;

#[component]
pub fn Story() -> impl IntoView {
  view! {
    <section id=Section::Story.anchor() class="py-16 md:py-24">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-2 gap-10 items-center">
        <div class="rounded-3xl overflow-hidden border border-white/15">
          <img src=STORY_IMAGE alt="Atölyede parfüm karışımları" class="w-full h-[360px] object-cover"/>
        </div>
        <div>
          <h2 class="text-2xl md:text-3xl font-light">"Ay Işığından İlham"</h2>
          <p class="mt-4 text-white/80">
            {BRAND} ", gece gökyüzünün derin tonlarını ve ay ışığının gümüş parıltısını şişeye taşır. \
             Sürdürülebilir hammaddeler ve küçük parti üretim anlayışıyla, her damla benzersiz bir \
             karakter sunar."
          </p>
          <ul class="mt-6 space-y-2 text-white/80 text-sm list-disc list-inside">
            {STORY_POINTS.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
          </ul>
        </div>
      </div>
    </section>
  }
}
