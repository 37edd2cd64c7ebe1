use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
}

/// Eyebrow + title block that opens every section; always first in the cascade.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal index={0} class="section-heading">
            <p class="section-eyebrow">{props.eyebrow.clone()}</p>
            <h2 class="section-title text-gold-gradient">{props.title.clone()}</h2>
        </Reveal>
    }
}
