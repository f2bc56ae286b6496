//! Reveal-on-scroll.
//!
//! A `RevealTrigger` is a two-state machine (`Pending` then `Fired`) fed
//! with intersection ratios from whatever is watching the viewport. An
//! `Entrance` describes the one-shot transition applied once it fires.

use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Fired,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    state: RevealState,
}

impl RevealTrigger {
    /// `threshold` is the visible fraction of the target required to fire.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        Self {
            threshold,
            state: RevealState::Pending,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_fired(&self) -> bool {
        self.state == RevealState::Fired
    }

    /// Feeds an observed intersection ratio. Returns `true` only for the
    /// observation that fires the trigger.
    pub fn observe_ratio(&mut self, ratio: f64) -> bool {
        if self.is_fired() || !self.crosses(ratio) {
            return false;
        }
        self.state = RevealState::Fired;
        true
    }

    /// Fires regardless of geometry. Used when the viewport cannot be observed.
    pub fn force(&mut self) -> bool {
        let was_pending = !self.is_fired();
        self.state = RevealState::Fired;
        was_pending
    }

    fn crosses(&self, ratio: f64) -> bool {
        if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `target` that lies inside `viewport`.
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f64 {
    let area = target.width * target.height;
    if area <= 0.0 {
        return 0.0;
    }
    let overlap_w = (target.right().min(viewport.right()) - target.left.max(viewport.left)).max(0.0);
    let overlap_h = (target.bottom().min(viewport.bottom()) - target.top.max(viewport.top)).max(0.0);
    ((overlap_w * overlap_h) / area).clamp(0.0, 1.0)
}

/// Where an element starts before its entrance plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Offset {
    pub const REST: Offset = Offset { x: 0.0, y: 0.0, scale: 1.0, opacity: 1.0 };

    fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0) scale({})", self.x, self.y, self.scale)
    }
}

/// A one-shot entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Offset,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Entrance {
    pub fn fade_up(distance_px: f64) -> Self {
        Self::from_offset(Offset { y: distance_px, opacity: 0.0, ..Offset::REST })
    }

    /// Slides in horizontally. A negative distance starts off to the left.
    pub fn slide_x(distance_px: f64) -> Self {
        Self::from_offset(Offset { x: distance_px, opacity: 0.0, ..Offset::REST })
    }

    pub fn pop(scale: f64) -> Self {
        Self::from_offset(Offset { scale, opacity: 0.0, ..Offset::REST })
    }

    fn from_offset(from: Offset) -> Self {
        Self {
            from,
            duration_ms: 500,
            delay_ms: 0,
            easing: Easing::EaseInOut,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delays the n-th item of a list by `index * step_ms`.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let delay = self.delay_ms + step_ms.saturating_mul(index as u32);
        self.with_delay(delay)
    }

    /// Inline style for the element, before (`fired == false`) or after firing.
    pub fn style(&self, fired: bool) -> String {
        let pose = if fired { Offset::REST } else { self.from };
        format!(
            "opacity: {}; transform: {}; transition: opacity {d}ms {e}, transform {d}ms {e}; transition-delay: {}ms;",
            pose.opacity,
            pose.transform(),
            self.delay_ms,
            d = self.duration_ms,
            e = self.easing.css(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_fires_once() {
        let mut trigger = RevealTrigger::new(0.5);
        assert!(!trigger.observe_ratio(0.2));
        assert_eq!(trigger.state(), RevealState::Pending);
        assert!(trigger.observe_ratio(0.6));
        assert!(trigger.is_fired());

        // Scrolling out and back in again changes nothing.
        assert!(!trigger.observe_ratio(0.0));
        assert!(trigger.is_fired());
        assert!(!trigger.observe_ratio(1.0));
        assert_eq!(trigger.state(), RevealState::Fired);
    }

    #[test]
    fn test_trigger_never_reverts_over_any_sequence() {
        let ratios = [0.0, 0.1, 0.49, 0.5, 0.2, 0.0, 0.9, 0.0];
        let mut trigger = RevealTrigger::new(0.5);
        let mut fired_at = Vec::new();
        let mut seen_fired = false;
        for (i, ratio) in ratios.iter().enumerate() {
            if trigger.observe_ratio(*ratio) {
                fired_at.push(i);
            }
            if seen_fired {
                assert!(trigger.is_fired());
            }
            seen_fired = trigger.is_fired();
        }
        assert_eq!(fired_at, vec![3]);
    }

    #[test]
    fn test_zero_threshold_needs_some_overlap() {
        let mut trigger = RevealTrigger::new(0.0);
        assert!(!trigger.observe_ratio(0.0));
        assert!(trigger.observe_ratio(0.01));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTrigger::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_force_only_reports_first_fire() {
        let mut trigger = RevealTrigger::new(0.5);
        assert!(trigger.force());
        assert!(!trigger.force());
    }

    #[test]
    fn test_intersection_ratio() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 100.0, 200.0, 200.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 700.0, 200.0, 200.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Rect::new(0.0, 900.0, 200.0, 200.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, -150.0, 200.0, 200.0), viewport), 0.25);
        assert_eq!(intersection_ratio(Rect::new(0.0, 0.0, 0.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn test_entrance_style_before_and_after() {
        let entrance = Entrance::fade_up(50.0).with_duration(600).staggered(2, 100);
        assert_eq!(entrance.delay_ms, 200);

        let hidden = entrance.style(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 50px, 0)"));
        assert!(hidden.contains("transition-delay: 200ms;"));

        let shown = entrance.style(true);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0) scale(1)"));
        assert!(shown.contains("opacity 600ms"));
    }

    #[test]
    fn test_slide_and_pop_presets() {
        assert!(Entrance::slide_x(-50.0).style(false).contains("translate3d(-50px, 0px, 0)"));
        assert!(Entrance::pop(0.8).style(false).contains("scale(0.8)"));
    }
}
