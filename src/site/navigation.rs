//! Animated scrolling to page sections

use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;

use crate::content::Section;
use crate::scroll::SmoothScroll;

/// Scroll so `section` sits just below the sticky header
pub fn smooth_scroll_to(section: Section) {
  let Some(element) = document().get_element_by_id(section.anchor()) else {
    logging::warn!("no element with id {}", section.anchor());
    return;
  };
  let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
    return;
  };
  let start = window().scroll_y().unwrap_or(0.0);
  let scroll = SmoothScroll::new(start, f64::from(element.offset_top()));
  step(scroll, js_sys::Date::now());
}

fn step(scroll: SmoothScroll, started_ms: f64) {
  let elapsed = Duration::from_secs_f64((js_sys::Date::now() - started_ms).max(0.0) / 1000.0);
  window().scroll_to_with_x_and_y(0.0, scroll.position_at(elapsed));
  if !scroll.is_finished(elapsed) {
    request_animation_frame(move || step(scroll, started_ms));
  }
}
