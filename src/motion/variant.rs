use crate::config::{FADE_IN_DURATION, FADE_IN_UP_DURATION, FADE_IN_UP_OFFSET_PX, SECTION_FADE};
use crate::motion::ease::Ease;

/// Animatable properties of one visual state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub offset_y: f64,
}

impl Pose {
    pub const SHOWN: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    FadeInUp,
    FadeIn,
    /// The section container itself.
    Container,
}

impl Variant {
    pub fn hidden(self) -> Pose {
        match self {
            Self::FadeInUp => Pose {
                opacity: 0.0,
                offset_y: FADE_IN_UP_OFFSET_PX,
            },
            Self::FadeIn | Self::Container => Pose {
                opacity: 0.0,
                offset_y: 0.0,
            },
        }
    }

    pub fn visible(self) -> Pose {
        Pose::SHOWN
    }

    pub fn duration(self) -> f64 {
        match self {
            Self::FadeInUp => FADE_IN_UP_DURATION,
            Self::FadeIn => FADE_IN_DURATION,
            Self::Container => SECTION_FADE,
        }
    }

    pub fn ease(self) -> Ease {
        match self {
            Self::FadeInUp => Ease::OutCubic,
            Self::FadeIn => Ease::OutQuad,
            Self::Container => Ease::Linear,
        }
    }

    /// Inline style for the given state. The delay only applies on the way
    /// in; hidden elements never animate back out.
    pub fn style(self, visible: bool, delay: f64) -> String {
        let pose = if visible { self.visible() } else { self.hidden() };
        let mut style = format!(
            "opacity: {}; transform: translateY({}px);",
            pose.opacity, pose.offset_y
        );
        if visible {
            style.push_str(&format!(
                " transition: opacity {d}s {e} {delay:.2}s, transform {d}s {e} {delay:.2}s;",
                d = self.duration(),
                e = self.ease().css(),
            ));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_fade_in_up_sits_below_its_slot() {
        let hidden = Variant::FadeInUp.hidden();
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, 40.0);
        assert_eq!(Variant::FadeInUp.visible(), Pose::SHOWN);
    }

    #[test]
    fn durations_stay_in_band() {
        for variant in [Variant::FadeInUp, Variant::FadeIn, Variant::Container] {
            let d = variant.duration();
            assert!((0.6..=0.8).contains(&d), "{variant:?} lasts {d}s");
        }
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = Variant::FadeInUp.style(false, 0.25);
        assert_eq!(style, "opacity: 0; transform: translateY(40px);");
    }

    #[test]
    fn visible_style_carries_delay() {
        let style = Variant::FadeIn.style(true, 0.25);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("opacity 0.6s"));
        assert!(style.contains(" 0.25s,"));
        assert!(style.ends_with(" 0.25s;"));
    }
}
