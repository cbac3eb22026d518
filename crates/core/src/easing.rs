/// Easing curves used by reveal and hover transitions.
///
/// `apply` gives the sampled curve for animations driven from Rust; `css`
/// gives the equivalent `transition-timing-function` for transitions the
/// stylesheet plays on a class flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Decelerating quadratic.
    QuadOut,
    /// Decelerating cubic.
    CubicOut,
    /// Decelerating quartic; the section-reveal curve.
    QuartOut,
    /// Symmetric cubic ease-in-out.
    CubicInOut,
}

impl Easing {
    /// Sample the curve at `t`, clamped to `0..=1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t).powi(2),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }
        }
    }

    /// CSS timing function with the same shape.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadOut => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::CubicOut => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::QuartOut => "cubic-bezier(0.165, 0.84, 0.44, 1)",
            Easing::CubicInOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::QuartOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn curves_hit_both_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn samples_stay_within_the_unit_interval() {
        for easing in ALL {
            for step in 0..=100 {
                let value = easing.apply(f64::from(step) / 100.0);
                assert!((0.0..=1.0).contains(&value), "{easing:?} escaped at {step}");
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(7.5), easing.apply(1.0));
        }
    }
}
