use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::error::{self, SiteError, SiteResult};

pub fn scroll_to_section(id: &str) -> SiteResult<()> {
    let element = error::document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::detached(format!("#{}", id)))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Section `id` to scroll to.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the click, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    pub children: Children,
}

/// In-page link that scrolls instead of touching the hash, which belongs
/// to the router.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
            if let Err(err) = scroll_to_section(&target) {
                warn!("cannot scroll to section: {}", err);
            }
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
