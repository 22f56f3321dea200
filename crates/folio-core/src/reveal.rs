//! Reveal policies: declarative entrance animations.
//!
//! A policy says *when* an element appears (on mount, or when its top edge
//! crosses a line in the viewport) and *how* (the hidden starting pose).
//! The UI layer turns a policy into inline styles and an observer.

use std::time::Duration;

/// When the reveal fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    OnMount,
    /// Fires once the element's top edge rises above `start_percent` of the
    /// viewport height, measured from the top.
    OnEnterViewport { start_percent: u8 },
}

impl RevealTrigger {
    /// Reveal once the element's top passes 85% of the viewport.
    pub const fn viewport() -> Self {
        Self::OnEnterViewport { start_percent: 85 }
    }

    /// `IntersectionObserver` root margin expressing the trigger line.
    ///
    /// Shrinking the bottom of the root by `100 - start_percent` makes an
    /// element intersect exactly when its top crosses the line.
    pub fn root_margin(&self) -> String {
        match self {
            Self::OnMount => "0px".to_string(),
            Self::OnEnterViewport { start_percent } => {
                let inset = 100 - (*start_percent).min(100);
                format!("0px 0px -{inset}% 0px")
            }
        }
    }
}

/// Starting pose of the element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    Fade,
    /// Rise from `px` pixels below.
    FadeUp(i32),
    /// Slide in horizontally from `px` (negative is from the left).
    FadeSlide(i32),
    /// Grow from `percent` of full size.
    Scale(u8),
}

impl RevealEffect {
    fn hidden_transform(&self) -> Option<String> {
        match self {
            Self::Fade => None,
            Self::FadeUp(px) => Some(format!("translateY({px}px)")),
            Self::FadeSlide(px) => Some(format!("translateX({px}px)")),
            Self::Scale(percent) => Some(format!("scale({})", f32::from(*percent) / 100.0)),
        }
    }
}

/// A trigger, an effect, and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPolicy {
    pub trigger: RevealTrigger,
    pub effect: RevealEffect,
    pub duration: Duration,
    pub delay: Duration,
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::fade_up()
    }
}

impl RevealPolicy {
    /// Section headings and cards: rise 50px when scrolled into view.
    pub fn fade_up() -> Self {
        Self {
            trigger: RevealTrigger::viewport(),
            effect: RevealEffect::FadeUp(50),
            duration: Duration::from_millis(800),
            delay: Duration::ZERO,
        }
    }

    /// Timeline rows: slide in from the left.
    pub fn slide_in(px: i32) -> Self {
        Self {
            effect: RevealEffect::FadeSlide(px),
            ..Self::fade_up()
        }
    }

    /// Hero content: plays once on mount.
    pub fn hero() -> Self {
        Self {
            trigger: RevealTrigger::OnMount,
            effect: RevealEffect::FadeUp(30),
            duration: Duration::from_millis(1000),
            delay: Duration::from_millis(200),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay the `index`-th element of a group by `index * step`.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let extra = step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
        self.with_delay(self.delay.saturating_add(extra))
    }

    /// Inline style before the trigger fires.
    pub fn hidden_style(&self) -> String {
        let mut style = String::from("opacity: 0;");
        if let Some(transform) = self.effect.hidden_transform() {
            style.push_str(&format!(" transform: {transform};"));
        }
        style.push(' ');
        style.push_str(&self.transition());
        style
    }

    /// Inline style once revealed.
    pub fn shown_style(&self) -> String {
        format!("opacity: 1; transform: none; {}", self.transition())
    }

    fn transition(&self) -> String {
        format!(
            "transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            d = self.duration.as_millis(),
            w = self.delay.as_millis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin() {
        assert_eq!(RevealTrigger::viewport().root_margin(), "0px 0px -15% 0px");
        assert_eq!(
            RevealTrigger::OnEnterViewport { start_percent: 80 }.root_margin(),
            "0px 0px -20% 0px"
        );
        assert_eq!(
            RevealTrigger::OnEnterViewport { start_percent: 150 }.root_margin(),
            "0px 0px -0% 0px"
        );
        assert_eq!(RevealTrigger::OnMount.root_margin(), "0px");
    }

    #[test]
    fn test_stagger_accumulates() {
        let step = Duration::from_millis(100);
        let base = RevealPolicy::hero();
        assert_eq!(base.staggered(0, step).delay, Duration::from_millis(200));
        assert_eq!(base.staggered(3, step).delay, Duration::from_millis(500));
        assert_eq!(base.staggered(3, step).effect, base.effect);
    }

    #[test]
    fn test_styles() {
        let policy = RevealPolicy::fade_up();
        let hidden = policy.hidden_style();
        assert!(hidden.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(hidden.contains("800ms ease-out 0ms"));
        assert!(policy.shown_style().starts_with("opacity: 1; transform: none;"));

        let scale = RevealPolicy {
            effect: RevealEffect::Scale(80),
            ..RevealPolicy::fade_up()
        };
        assert!(scale.hidden_style().contains("scale(0.8)"));

        let fade = RevealPolicy {
            effect: RevealEffect::Fade,
            ..RevealPolicy::fade_up()
        };
        assert!(!fade.hidden_style().contains("transform:"));
    }

    #[test]
    fn test_slide_keeps_viewport_trigger() {
        let policy = RevealPolicy::slide_in(-50);
        assert_eq!(policy.trigger, RevealTrigger::viewport());
        assert!(policy.hidden_style().contains("translateX(-50px)"));
    }
}
