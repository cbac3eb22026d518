/// How far the page has been scrolled, as a percentage in `[0, 100]`.
///
/// Recomputed from scratch on every scroll sample; nothing is accumulated.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollRatio(f64);

impl ScrollRatio {
    /// Ratio of `offset` to the total scrollable height.
    ///
    /// A page with nothing to scroll (height <= 0, as reported when the
    /// content fits the viewport) is 0, not a division by zero. Offsets
    /// outside the scrollable range clamp to the ends; rubber-band
    /// overscroll reports negative offsets on some platforms.
    #[must_use]
    pub fn compute(offset: f64, scrollable_height: f64) -> Self {
        if scrollable_height <= 0.0 {
            return Self(0.0);
        }
        let percent = (offset / scrollable_height * 100.0).clamp(0.0, 100.0);
        if percent.is_nan() { Self(0.0) } else { Self(percent) }
    }

    #[must_use]
    pub fn percent(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}
