//! Site components

use crate::site::state::SiteState;
use leptos::*;

mod auth_modal;
mod catalog;
mod footer;
mod header;
mod hero;
mod icons;
mod newsletter;
mod notes;
mod story;
mod toast;

pub use auth_modal::AuthModal;
pub use catalog::{Bestsellers, Collections};
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::Icon;
pub use newsletter::Newsletter;
pub use notes::Notes;
pub use story::Story;
pub use toast::ToastContainer;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
  // Create page state
  let state = SiteState::new();
  provide_context(state);

  view! {
    <div class="min-h-screen w-full text-white bg-[#0f0e13] overflow-x-hidden">
      <div aria-hidden="true" class="fixed inset-0 -z-10 opacity-80 site-backdrop"></div>

      <Header/>
      <main class="relative w-full">
        <Hero/>
        <Collections/>
        <Notes/>
        <Bestsellers/>
        <Story/>
        <Newsletter/>
      </main>
      <Footer/>

      <AuthModal/>
      <ToastContainer/>
    </div>
  }
}
