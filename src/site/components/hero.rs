//! Hero banner with calls to action

use super::Icon;
use crate::content::{Section, BRAND, HERO_IMAGE};
use crate::site::navigation::smooth_scroll_to;
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
  view! {
    <section class="relative overflow-hidden min-h-screen flex items-center">
      <div class="w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-28 grid md:grid-cols-2 gap-10 items-center">
        <div class="fade-in-up">
          <p class="uppercase tracking-[0.3em] text-white/80 text-xs">"Eau de Parfum"</p>
          <h1 class="mt-4 text-4xl md:text-6xl lg:text-7xl leading-tight font-light">
            "Geceyle " <span class="font-semibold">"Dans Eden"</span> " Notalar"
          </h1>
          <p class="mt-6 text-lg text-white/80 max-w-xl">
            "Şehir ışıklarının altında doğan " {BRAND} ", koyu orman ve amber dokunuşlarını mor gün \
             batımının zarafetiyle buluşturur. Hem cesur, hem zarif."
          </p>
          <div class="mt-8 flex flex-wrap gap-3">
            <button
              class="inline-flex items-center gap-2 px-6 py-4 rounded-2xl bg-white text-black hover:bg-white/90 transition-all duration-300 transform hover:scale-105 active:scale-95"
              on:click=|_| smooth_scroll_to(Section::Bestsellers)
            >
              "Şimdi Keşfet " <Icon name="arrow-right" class="w-4 h-4"/>
            </button>
            <button
              class="inline-flex items-center gap-2 px-6 py-4 rounded-2xl border border-white/30 hover:border-white/60 transition-all duration-300 hover:bg-white/10 active:scale-95"
              on:click=|_| smooth_scroll_to(Section::Story)
            >
              "Markayı Tanı"
            </button>
          </div>

          <div class="mt-10 flex items-center gap-6 text-sm text-white/80">
            <div class="flex items-center gap-2">
              <Icon name="star" class="w-4 h-4"/> " 4.9/5 (2.4k+ değerlendirme)"
            </div>
            <div class="flex items-center gap-2">
              <Icon name="droplets" class="w-4 h-4"/> " Uzun Kalıcılık"
            </div>
          </div>
        </div>

        <div class="relative fade-in-scale">
          <div class="absolute -inset-6 bg-white/10 rounded-[2rem] blur-2xl" aria-hidden="true"></div>
          <div class="relative rounded-[2rem] overflow-hidden border border-white/20">
            <img
              src=HERO_IMAGE
              alt=format!("{} Eau de Parfum şişesi", BRAND)
              class="w-full h-[420px] object-cover"
            />
          </div>
        </div>
      </div>
    </section>
  }
}
