//! Smooth in-page scrolling

use std::time::Duration;

pub const SCROLL_DURATION: Duration = Duration::from_millis(800);

/// Height kept clear for the sticky header
pub const HEADER_OFFSET: f64 = 80.0;

/// easeInOutQuart: `t` elapsed, `b` start, `c` change, `d` duration
pub fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
  if d <= 0.0 {
    return b + c;
  }
  let mut t = t.clamp(0.0, d) / (d / 2.0);
  if t < 1.0 {
    return c / 2.0 * t * t * t * t + b;
  }
  t -= 2.0;
  -c / 2.0 * (t * t * t * t - 2.0) + b
}

/// One scroll from the current offset to a target element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
  start: f64,
  distance: f64,
  duration: Duration,
}

impl SmoothScroll {
  /// `element_top` is the target's document offset; the header offset is applied here.
  pub fn new(start: f64, element_top: f64) -> Self {
    Self::with_duration(start, element_top, SCROLL_DURATION)
  }

  pub fn with_duration(start: f64, element_top: f64, duration: Duration) -> Self {
    Self {
      start,
      distance: element_top - HEADER_OFFSET - start,
      duration,
    }
  }

  pub fn target(&self) -> f64 {
    self.start + self.distance
  }

  pub fn position_at(&self, elapsed: Duration) -> f64 {
    ease_in_out_quart(
      elapsed.as_secs_f64() * 1000.0,
      self.start,
      self.distance,
      self.duration.as_secs_f64() * 1000.0,
    )
  }

  pub fn is_finished(&self, elapsed: Duration) -> bool {
    elapsed >= self.duration
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_curve_endpoints() {
    assert_eq!(ease_in_out_quart(0.0, 100.0, 400.0, 800.0), 100.0);
    assert_eq!(ease_in_out_quart(400.0, 100.0, 400.0, 800.0), 300.0);
    assert_eq!(ease_in_out_quart(800.0, 100.0, 400.0, 800.0), 500.0);
  }

  #[test]
  fn test_curve_is_monotonic() {
    let mut last = f64::MIN;
    for step in 0..=80 {
      let y = ease_in_out_quart(step as f64 * 10.0, 0.0, 1000.0, 800.0);
      assert!(y >= last);
      last = y;
    }
  }

  #[test]
  fn test_target_clears_header() {
    let down = SmoothScroll::new(0.0, 580.0);
    assert_eq!(down.target(), 500.0);

    let up = SmoothScroll::new(1000.0, 300.0);
    assert_eq!(up.target(), 220.0);
    assert!(up.position_at(Duration::from_millis(400)) < 1000.0);
  }

  #[test]
  fn test_scroll_runs_for_fixed_duration() {
    let scroll = SmoothScroll::new(120.0, 980.0);
    assert_eq!(scroll.position_at(Duration::ZERO), 120.0);
    assert_eq!(scroll.position_at(SCROLL_DURATION), scroll.target());
    assert_eq!(scroll.position_at(Duration::from_secs(2)), scroll.target());

    assert!(!scroll.is_finished(Duration::from_millis(799)));
    assert!(scroll.is_finished(SCROLL_DURATION));
  }

  #[test]
  fn test_custom_duration() {
    let scroll = SmoothScroll::with_duration(0.0, 480.0, Duration::from_millis(200));
    assert_eq!(scroll.position_at(Duration::from_millis(100)), 200.0);
    assert!(scroll.is_finished(Duration::from_millis(200)));
  }

  #[test]
  fn test_zero_duration_jumps() {
    assert_eq!(ease_in_out_quart(0.0, 10.0, 5.0, 0.0), 15.0);
  }
}
