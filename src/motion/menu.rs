use std::rc::Rc;

use yew::prelude::*;

/// Mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Burger button.
    Toggle,
    /// Any navigation link was followed.
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match (self, action) {
            (Self::Closed, MenuAction::Toggle) => Self::Open,
            (Self::Open, MenuAction::Toggle) | (_, MenuAction::Close) => Self::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_toggles_both_ways() {
        let open = MenuState::default().apply(MenuAction::Toggle);
        assert!(open.is_open());
        assert_eq!(open.apply(MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn following_a_link_closes_an_open_menu() {
        assert_eq!(
            MenuState::Open.apply(MenuAction::Close),
            MenuState::Closed
        );
    }

    #[test]
    fn following_a_link_leaves_a_closed_menu_closed() {
        assert_eq!(
            MenuState::Closed.apply(MenuAction::Close),
            MenuState::Closed
        );
    }
}
