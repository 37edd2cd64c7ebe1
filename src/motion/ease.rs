/// Timing curves for reveal transitions, rendered as CSS timing functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
}

impl Ease {
    /// CSS `transition-timing-function` equivalent.
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::OutQuad => "cubic-bezier(0.5, 1, 0.89, 1)",
            Self::OutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_curves_start_steep_and_settle() {
        assert_eq!(Ease::Linear.css(), "linear");
        for ease in [Ease::OutQuad, Ease::OutCubic] {
            let css = ease.css();
            assert!(css.starts_with("cubic-bezier("), "{css}");
            assert!(css.ends_with(", 1)"), "{css}");
        }
        assert_ne!(Ease::OutQuad.css(), Ease::OutCubic.css());
    }
}
