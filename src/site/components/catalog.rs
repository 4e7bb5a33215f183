//! Collection grid and bestseller cards

use super::Icon;
use crate::content::{Section, BESTSELLERS, COLLECTIONS};
use crate::site::navigation::smooth_scroll_to;
use leptos::*;

#[component]
pub fn Collections() -> impl IntoView {
  view! {
    <section id=Section::Collections.anchor() class="py-16 md:py-24">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <h2 class="text-2xl md:text-3xl font-light mb-8 flex items-center gap-3">
          <span class="h-px w-10 bg-white/30"></span>
          " Signature Koleksiyonlar"
        </h2>

        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
          {COLLECTIONS
            .into_iter()
            .map(|item| view! {
              <article class="group rounded-3xl overflow-hidden border border-white/15 bg-white/5 hover:bg-white/10 backdrop-blur fade-in-up">
                <div class="aspect-[4/3] overflow-hidden">
                  <img
                    src=item.image
                    alt=item.title
                    class="w-full h-full object-cover group-hover:scale-[1.02] transition"
                  />
                </div>
                <div class="p-5">
                  <h3 class="text-lg font-medium">{item.title}</h3>
                  <p class="text-sm text-white/80 mt-1">{item.description}</p>
                  <button class="mt-4 text-sm inline-flex items-center gap-1 hover:opacity-80">
                    "İncele " <Icon name="arrow-right" class="w-4 h-4"/>
                  </button>
                </div>
              </article>
            })
            .collect_view()}
        </div>
      </div>
    </section>
  }
}

#[component]
pub fn Bestsellers() -> impl IntoView {
  view! {
    <section id=Section::Bestsellers.anchor() class="py-16 md:py-24">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div class="flex items-center justify-between mb-6">
          <h2 class="text-2xl md:text-3xl font-light">{Section::Bestsellers.label()}</h2>
          <button
            class="text-sm hover:opacity-80 transition-all duration-150 active:scale-95"
            on:click=|_| smooth_scroll_to(Section::Collections)
          >
            "Tümünü Gör"
          </button>
        </div>
        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
          {BESTSELLERS
            .into_iter()
            .map(|product| view! {
              <div class="rounded-3xl overflow-hidden border border-white/15 bg-white/5">
                <div class="aspect-[4/3] overflow-hidden bg-black/20">
                  <img src=product.image alt=product.name class="w-full h-full object-cover"/>
                </div>
                <div class="p-5">
                  <div class="flex items-center justify-between">
                    <h3 class="font-medium">{product.name}</h3>
                    <span class="text-white/80 text-sm">{product.display_price()}</span>
                  </div>
                  <button class="mt-4 w-full py-2.5 rounded-xl bg-white text-black hover:bg-white/90 transition">
                    "Sepete Ekle"
                  </button>
                </div>
              </div>
            })
            .collect_view()}
        </div>
      </div>
    </section>
  }
}
