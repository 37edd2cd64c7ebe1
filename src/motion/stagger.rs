use crate::config::{DELAY_CHILDREN, STAGGER_CHILDREN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_children: DELAY_CHILDREN,
            stagger_children: STAGGER_CHILDREN,
        }
    }
}

impl Stagger {
    /// Start delay of the child at `index` (zero based), in seconds.
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }
}

/// What a revealing child needs from the section around it.
///
/// `origin` is when this container itself starts, relative to the moment
/// the enclosing section became visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealContext {
    pub visible: bool,
    pub origin: f64,
    pub stagger: Stagger,
}

impl RevealContext {
    pub fn section(visible: bool) -> Self {
        Self {
            visible,
            origin: 0.0,
            stagger: Stagger::default(),
        }
    }

    pub fn start_of(&self, index: usize) -> f64 {
        self.origin + self.stagger.delay_for(index)
    }

    /// Context for a nested stagger group sitting at `index`.
    pub fn nested(&self, index: usize) -> Self {
        Self {
            origin: self.start_of(index),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nth_child_starts_at_delay_plus_stagger() {
        let stagger = Stagger::default();
        for n in 1..=8usize {
            let expected = 0.1 + (n - 1) as f64 * 0.15;
            assert!(close(stagger.delay_for(n - 1), expected), "child {n}");
        }
    }

    #[test]
    fn children_cascade_rather_than_coincide() {
        let ctx = RevealContext::section(true);
        let starts: Vec<f64> = (0..4).map(|i| ctx.start_of(i)).collect();
        assert!(starts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn nested_group_offsets_from_its_slot() {
        let section = RevealContext::section(true);
        let group = section.nested(2);
        assert!(close(group.origin, 0.4));
        assert!(close(group.start_of(0), 0.5));
        assert!(close(group.start_of(2), 0.8));
        assert_eq!(group.visible, section.visible);
    }
}
