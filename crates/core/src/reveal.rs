use std::time::Duration;

use thiserror::Error;

use crate::easing::Easing;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum RevealError {
    #[error("trigger fractions must lie in (0, 1]")]
    FractionOutOfRange,

    #[error("exit fraction must sit below the enter fraction")]
    InvertedBand,
}

/// Vertical extent of the visible viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

/// An observed section's bounding box, measured from the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Whether a section's reveal transition has been played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// The vertical window within the viewport where a reveal is armed to fire.
///
/// A hidden section becomes visible once its top crosses the enter line
/// (85% of the viewport from the top) while its bottom is still below the
/// exit line. A visible section only reverses when it leaves the band
/// upward again; scrolling past it keeps it visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    enter_fraction: f64,
    exit_fraction: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            enter_fraction: 0.85,
            exit_fraction: 0.15,
        }
    }
}

impl TriggerBand {
    /// Creates a band with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error when a fraction leaves `(0, 1]` or the exit line is
    /// not below the enter line.
    pub fn new(enter_fraction: f64, exit_fraction: f64) -> Result<Self, RevealError> {
        for fraction in [enter_fraction, exit_fraction] {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(RevealError::FractionOutOfRange);
            }
        }
        if exit_fraction >= enter_fraction {
            return Err(RevealError::InvertedBand);
        }
        Ok(Self {
            enter_fraction,
            exit_fraction,
        })
    }

    #[must_use]
    pub fn enter_fraction(&self) -> f64 {
        self.enter_fraction
    }

    #[must_use]
    pub fn exit_fraction(&self) -> f64 {
        self.exit_fraction
    }

    /// Next state for a section given where its box currently sits.
    #[must_use]
    pub fn next_state(
        &self,
        current: RevealState,
        bounds: ElementBounds,
        viewport: Viewport,
    ) -> RevealState {
        let enter_line = viewport.height * self.enter_fraction;
        let exit_line = viewport.height * self.exit_fraction;
        match current {
            RevealState::Hidden if bounds.top <= enter_line && bounds.bottom >= exit_line => {
                RevealState::Visible
            }
            RevealState::Visible if bounds.top > enter_line => RevealState::Hidden,
            other => other,
        }
    }
}

/// Settled or in-flight presentation of a revealed section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

/// The opacity/offset animation played when a section's state flips.
///
/// The reverse play is defined as the forward play traversed backwards, so
/// forward-then-reverse always lands back on the hidden style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransition {
    duration: Duration,
    easing: Easing,
    rise_px: f64,
}

impl Default for RevealTransition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1200),
            easing: Easing::QuartOut,
            rise_px: 60.0,
        }
    }
}

impl RevealTransition {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn rise_px(&self) -> f64 {
        self.rise_px
    }

    /// Style at progress `t` (clamped to `0..=1`) through the forward play.
    #[must_use]
    pub fn forward_style(&self, t: f64) -> RevealStyle {
        let eased = self.easing.apply(t);
        RevealStyle {
            opacity: eased,
            translate_y: self.rise_px * (1.0 - eased),
        }
    }

    /// Style at progress `t` through the reverse play.
    #[must_use]
    pub fn reverse_style(&self, t: f64) -> RevealStyle {
        self.forward_style(1.0 - t.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn hidden_style(&self) -> RevealStyle {
        self.forward_style(0.0)
    }

    #[must_use]
    pub fn visible_style(&self) -> RevealStyle {
        self.forward_style(1.0)
    }

    /// The settled style for a state, with no transition in flight.
    #[must_use]
    pub fn style_for(&self, state: RevealState) -> RevealStyle {
        match state {
            RevealState::Hidden => self.hidden_style(),
            RevealState::Visible => self.visible_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport { height: 1000.0 };

    fn band() -> TriggerBand {
        TriggerBand::default()
    }

    #[test]
    fn entering_the_band_reveals() {
        // Top at 84% of the viewport: inside the band.
        let bounds = ElementBounds {
            top: 840.0,
            bottom: 1400.0,
        };
        let next = band().next_state(RevealState::Hidden, bounds, VIEWPORT);
        assert_eq!(next, RevealState::Visible);
    }

    #[test]
    fn below_the_enter_line_stays_hidden() {
        let bounds = ElementBounds {
            top: 900.0,
            bottom: 1500.0,
        };
        let next = band().next_state(RevealState::Hidden, bounds, VIEWPORT);
        assert_eq!(next, RevealState::Hidden);
    }

    #[test]
    fn leaving_backward_reverses() {
        let bounds = ElementBounds {
            top: 920.0,
            bottom: 1520.0,
        };
        let next = band().next_state(RevealState::Visible, bounds, VIEWPORT);
        assert_eq!(next, RevealState::Hidden);
    }

    #[test]
    fn scrolling_past_keeps_a_section_visible() {
        // Entirely above the exit line.
        let bounds = ElementBounds {
            top: -700.0,
            bottom: -100.0,
        };
        let next = band().next_state(RevealState::Visible, bounds, VIEWPORT);
        assert_eq!(next, RevealState::Visible);
    }

    #[test]
    fn forward_and_reverse_are_inverses_at_the_endpoints() {
        let transition = RevealTransition::default();
        let original = transition.hidden_style();

        let played = transition.forward_style(1.0);
        assert_eq!(played, transition.visible_style());

        let reversed = transition.reverse_style(1.0);
        assert_eq!(reversed, original);
        assert_eq!(reversed.opacity, 0.0);
        assert_eq!(reversed.translate_y, transition.rise_px());
    }

    #[test]
    fn settled_styles_match_their_states() {
        let transition = RevealTransition::default();
        assert_eq!(
            transition.style_for(RevealState::Visible),
            RevealStyle {
                opacity: 1.0,
                translate_y: 0.0
            }
        );
        assert_eq!(
            transition.style_for(RevealState::Hidden).opacity,
            0.0
        );
    }

    #[test]
    fn custom_bands_are_validated() {
        assert!(TriggerBand::new(0.9, 0.1).is_ok());
        assert_eq!(
            TriggerBand::new(1.2, 0.1),
            Err(RevealError::FractionOutOfRange)
        );
        assert_eq!(TriggerBand::new(0.5, 0.5), Err(RevealError::InvertedBand));
    }
}
