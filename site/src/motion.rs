//! Entrance animation timing for reveal-on-scroll elements.
//!
//! A [`Motion`] becomes a handful of CSS custom properties on the element;
//! the `.reveal` rules in [`crate::styles::PAGE_CSS`] do the actual
//! transition once the element gets `is-visible`.

/// Root margin for the reveal observer: elements reveal once they are 80px
/// inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-80px 0px -80px 0px";

/// Per-card stagger in the features grid.
pub const FEATURE_STAGGER_MS: u32 = 80;

/// Per-card stagger for use cases and pricing plans.
pub const CARD_STAGGER_MS: u32 = 100;

/// Starting pose of an element before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Fade in while moving up by `px`
    Rise(f32),
    /// Fade in while sliding right from `-px`
    SlideFromLeft(f32),
    /// Fade in while sliding left from `+px`
    SlideFromRight(f32),
    /// Fade in while growing from `scale`
    Zoom(f32),
    /// Opacity only
    Fade,
}

impl Entrance {
    /// CSS transform of the hidden pose.
    pub fn hidden_transform(self) -> String {
        match self {
            Entrance::Rise(px) => format!("translateY({px}px)"),
            Entrance::SlideFromLeft(px) => format!("translateX(-{px}px)"),
            Entrance::SlideFromRight(px) => format!("translateX({px}px)"),
            Entrance::Zoom(scale) => format!("scale({scale})"),
            Entrance::Fade => "none".to_string(),
        }
    }
}

/// Entrance, duration and delay of a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Hidden pose
    pub entrance: Entrance,
    /// Transition length
    pub duration_ms: u32,
    /// Transition delay
    pub delay_ms: u32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            entrance: Entrance::Rise(30.0),
            duration_ms: 700,
            delay_ms: 0,
        }
    }
}

impl Motion {
    /// Rise by `px` over `duration_ms`.
    pub fn rise(px: f32, duration_ms: u32) -> Self {
        Self {
            entrance: Entrance::Rise(px),
            duration_ms,
            delay_ms: 0,
        }
    }

    /// Same motion, delayed.
    pub fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Inline style carrying the motion as CSS custom properties.
    pub fn style(&self) -> String {
        format!(
            "--reveal-from: {}; --reveal-duration: {}ms; --reveal-delay: {}ms;",
            self.entrance.hidden_transform(),
            self.duration_ms,
            self.delay_ms
        )
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Timeline entrance: even steps slide in from the left, odd from the right.
pub fn alternate(index: usize, px: f32) -> Entrance {
    if index % 2 == 0 {
        Entrance::SlideFromLeft(px)
    } else {
        Entrance::SlideFromRight(px)
    }
}

/// Parallax travel (px) of the product glow: `+60` when the section enters
/// from below, `-60` when it leaves at the top.
pub const PARALLAX_RANGE: f64 = 60.0;

/// How far a section has travelled through the viewport: 0.0 when its top
/// touches the viewport bottom, 1.0 when its bottom touches the viewport top.
pub fn scroll_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let span = viewport + height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport - top) / span).clamp(0.0, 1.0)
}

/// Vertical glow offset for a scroll progress in `[0, 1]`.
pub fn parallax_offset(progress: f64) -> f64 {
    PARALLAX_RANGE - 2.0 * PARALLAX_RANGE * progress.clamp(0.0, 1.0)
}

/// Class list of a reveal wrapper.
pub fn reveal_class(base: &str, visible: bool) -> String {
    match (base.is_empty(), visible) {
        (true, false) => "reveal".to_string(),
        (true, true) => "reveal is-visible".to_string(),
        (false, false) => format!("reveal {base}"),
        (false, true) => format!("reveal {base} is-visible"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_motion_rises_30px() {
        let style = Motion::default().style();
        assert_eq!(
            style,
            "--reveal-from: translateY(30px); --reveal-duration: 700ms; --reveal-delay: 0ms;"
        );
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, FEATURE_STAGGER_MS), 0);
        assert_eq!(stagger(3, FEATURE_STAGGER_MS), 240);
        assert_eq!(stagger(2, CARD_STAGGER_MS), 200);
        assert_eq!(stagger(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn timeline_alternates_sides() {
        assert_eq!(alternate(0, 40.0), Entrance::SlideFromLeft(40.0));
        assert_eq!(alternate(1, 40.0), Entrance::SlideFromRight(40.0));
        assert_eq!(alternate(2, 40.0).hidden_transform(), "translateX(-40px)");
        assert_eq!(alternate(3, 40.0).hidden_transform(), "translateX(40px)");
    }

    #[test]
    fn zoom_and_fade_transforms() {
        assert_eq!(Entrance::Zoom(0.95).hidden_transform(), "scale(0.95)");
        assert_eq!(Entrance::Fade.hidden_transform(), "none");
    }

    #[test]
    fn delayed_keeps_entrance() {
        let motion = Motion::rise(40.0, 600).delayed(160);
        assert_eq!(motion.entrance, Entrance::Rise(40.0));
        assert!(motion.style().contains("--reveal-delay: 160ms"));
    }

    #[test]
    fn scroll_progress_spans_enter_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-2000.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_moves_from_plus_to_minus_60() {
        assert_eq!(parallax_offset(0.0), 60.0);
        assert_eq!(parallax_offset(0.5), 0.0);
        assert_eq!(parallax_offset(1.0), -60.0);
        assert_eq!(parallax_offset(3.0), -60.0);
    }

    #[test]
    fn reveal_class_variants() {
        assert_eq!(reveal_class("", false), "reveal");
        assert_eq!(reveal_class("", true), "reveal is-visible");
        assert_eq!(reveal_class("card", false), "reveal card");
        assert_eq!(reveal_class("card", true), "reveal card is-visible");
    }
}
