use std::rc::Rc;

use yew::prelude::*;

/// One-shot "has this section ever been on screen" flag.
///
/// The only transitions are false -> true; nothing turns it back off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportLatch {
    entered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchAction {
    /// An intersection report from the platform.
    Observed(bool),
    /// Observation is unavailable; show the content anyway.
    ForceOpen,
}

impl ViewportLatch {
    pub fn has_entered(self) -> bool {
        self.entered
    }

    pub fn apply(self, action: LatchAction) -> Self {
        match action {
            LatchAction::Observed(intersecting) => Self {
                entered: self.entered || intersecting,
            },
            LatchAction::ForceOpen => Self { entered: true },
        }
    }
}

impl Reducible for ViewportLatch {
    type Action = LatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ViewportLatch::default().has_entered());
    }

    #[test]
    fn non_intersecting_reports_keep_it_closed() {
        let latch = (0..10).fold(ViewportLatch::default(), |latch, _| {
            latch.apply(LatchAction::Observed(false))
        });
        assert!(!latch.has_entered());
    }

    #[test]
    fn never_reverts_once_entered() {
        let mut latch = ViewportLatch::default().apply(LatchAction::Observed(true));
        for intersecting in [false, true, false, false] {
            latch = latch.apply(LatchAction::Observed(intersecting));
            assert!(latch.has_entered());
        }
    }

    #[test]
    fn force_open_is_idempotent() {
        let latch = ViewportLatch::default()
            .apply(LatchAction::ForceOpen)
            .apply(LatchAction::ForceOpen);
        assert!(latch.has_entered());
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let closed = Rc::new(ViewportLatch::default());
        let same = closed.clone().reduce(LatchAction::Observed(false));
        assert!(Rc::ptr_eq(&closed, &same));

        let open = closed.reduce(LatchAction::Observed(true));
        assert!(open.has_entered());
        let again = open.clone().reduce(LatchAction::Observed(true));
        assert!(Rc::ptr_eq(&open, &again));
    }
}
