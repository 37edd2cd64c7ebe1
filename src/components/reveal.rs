use log::debug;
use yew::prelude::*;

use crate::components::in_view::use_in_view;
use crate::config::TRIGGER_MARGIN_PX;
use crate::motion::stagger::RevealContext;
use crate::motion::variant::Variant;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A page section whose children cascade in the first time it is scrolled into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), TRIGGER_MARGIN_PX);

    {
        let id = props.id.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    debug!("revealing section {}", id.as_deref().unwrap_or("<anonymous>"));
                }
                || ()
            },
            visible,
        );
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={props.class.clone()}
            style={Variant::Container.style(visible, 0.0)}
        >
            <ContextProvider<RevealContext> context={RevealContext::section(visible)}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position among the animated siblings.
    pub index: usize,
    #[prop_or_default]
    pub variant: Variant,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    // Outside a section there is nothing to wait for.
    let context = use_context::<RevealContext>().unwrap_or_else(|| RevealContext::section(true));
    let style = props
        .variant
        .style(context.visible, context.start_of(props.index));

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A nested stagger container, e.g. a card grid inside a section.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let parent = use_context::<RevealContext>().unwrap_or_else(|| RevealContext::section(true));
    let context = parent.nested(props.index);

    html! {
        <div
            class={props.class.clone()}
            style={Variant::Container.style(parent.visible, parent.start_of(props.index))}
        >
            <ContextProvider<RevealContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<RevealContext>>
        </div>
    }
}
