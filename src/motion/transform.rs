//! Scroll-offset driven values for the hero banner.
//!
//! Every output is a pure function of the page scroll offset, so the
//! parallax layer and the fading content can never drift apart.

use crate::config::{
    HEADER_SCROLL_THRESHOLD, HERO_FADE_DOMAIN, HERO_FADE_RANGE, PARALLAX_DOMAIN, PARALLAX_RANGE,
};

/// Piecewise-linear map from a scroll domain onto an output range.
///
/// Offsets outside the domain hold the boundary output, so a jump far past
/// the sampled region (anchor navigation, programmatic scrolling) never
/// extrapolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTransform {
    domain: [f64; 2],
    range: [f64; 2],
}

impl ScrollTransform {
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Normalised progress through the domain, in `[0, 1]`.
    pub fn progress(&self, offset: f64) -> f64 {
        let [start, end] = self.domain;
        if offset.is_nan() {
            return 0.0;
        }
        if end == start {
            return if offset < start { 0.0 } else { 1.0 };
        }
        ((offset - start) / (end - start)).clamp(0.0, 1.0)
    }

    pub fn sample(&self, offset: f64) -> f64 {
        let [from, to] = self.range;
        from + (to - from) * self.progress(offset)
    }
}

pub const PARALLAX: ScrollTransform = ScrollTransform::new(PARALLAX_DOMAIN, PARALLAX_RANGE);
pub const HERO_FADE: ScrollTransform = ScrollTransform::new(HERO_FADE_DOMAIN, HERO_FADE_RANGE);

/// Vertical offset of the hero background, in pixels.
pub fn parallax_y(offset: f64) -> f64 {
    PARALLAX.sample(offset)
}

/// Opacity of the hero content layer.
pub fn hero_opacity(offset: f64) -> f64 {
    HERO_FADE.sample(offset)
}

/// Strictly past the threshold; exactly 50px still counts as the top.
pub fn is_header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_or_above_top_of_page() {
        for x in [0.0, -1.0, -250.0, f64::NEG_INFINITY] {
            assert_eq!(parallax_y(x), 0.0);
            assert_eq!(hero_opacity(x), 1.0);
        }
    }

    #[test]
    fn parallax_holds_past_domain() {
        for x in [500.0, 501.0, 10_000.0, f64::INFINITY] {
            assert_eq!(parallax_y(x), 150.0);
        }
    }

    #[test]
    fn opacity_holds_past_domain() {
        for x in [400.0, 450.0, 10_000.0] {
            assert_eq!(hero_opacity(x), 0.0);
        }
    }

    #[test]
    fn interior_points_are_linear() {
        assert_eq!(parallax_y(250.0), 75.0);
        assert_eq!(hero_opacity(200.0), 0.5);
        assert!((parallax_y(100.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic_over_domain() {
        let mut last_y = parallax_y(0.0);
        let mut last_opacity = hero_opacity(0.0);
        for step in 1..=120 {
            let x = step as f64 * 5.0;
            let y = parallax_y(x);
            let opacity = hero_opacity(x);
            assert!(y >= last_y, "parallax decreased at {x}");
            assert!(opacity <= last_opacity, "opacity increased at {x}");
            last_y = y;
            last_opacity = opacity;
        }
    }

    #[test]
    fn anchor_jump_clamps_instead_of_extrapolating() {
        assert_eq!(parallax_y(0.0), 0.0);
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(parallax_y(1000.0), 150.0);
        assert_eq!(hero_opacity(1000.0), 0.0);
    }

    #[test]
    fn nan_offset_maps_to_range_start() {
        assert_eq!(parallax_y(f64::NAN), 0.0);
        assert_eq!(hero_opacity(f64::NAN), 1.0);
    }

    #[test]
    fn degenerate_domain_is_a_step() {
        let step = ScrollTransform::new([10.0, 10.0], [0.0, 1.0]);
        assert_eq!(step.sample(9.9), 0.0);
        assert_eq!(step.sample(10.0), 1.0);
    }

    #[test]
    fn reversed_domain_still_clamps() {
        let t = ScrollTransform::new([100.0, 0.0], [0.0, 1.0]);
        assert_eq!(t.sample(150.0), 0.0);
        assert_eq!(t.sample(50.0), 0.5);
        assert_eq!(t.sample(-20.0), 1.0);
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!is_header_scrolled(0.0));
        assert!(!is_header_scrolled(50.0));
        assert!(is_header_scrolled(50.5));
        assert!(is_header_scrolled(1000.0));
    }
}
