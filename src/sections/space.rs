use yew::prelude::*;

use crate::components::reveal::{AnimatedSection, Reveal, RevealGroup};
use crate::content::{INTERIOR_IMAGE, SCENES, SPACE_PARAGRAPHS};
use crate::sections::heading::SectionHeading;

#[function_component(SpaceSection)]
pub fn space_section() -> Html {
    html! {
        <AnimatedSection id="space" class="page-section tinted">
            <div class="container">
                <SectionHeading eyebrow="SPACE" title="お部屋と空間" />

                <Reveal index={1} class="space-image">
                    <div class="wide-image glow-image">
                        <img src={INTERIOR_IMAGE} alt="寿司忠の座敷" />
                    </div>
                </Reveal>

                <Reveal index={2} class="space-description">
                    { for SPACE_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                </Reveal>

                <RevealGroup index={3} class="grid-4">
                    { for SCENES.iter().enumerate().map(|(i, scene)| html! {
                        <Reveal index={i} class="scene outline-card">
                            <h3 class="scene-title">{scene.title}</h3>
                            <p class="muted scene-description">{scene.description}</p>
                        </Reveal>
                    }) }
                </RevealGroup>
            </div>
            <style>
                {r#"
                    .space-image {
                        margin-bottom: 3rem;
                    }
                    .space-description {
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                        text-align: center;
                        font-size: 1.125rem;
                        color: rgba(232, 228, 220, 0.8);
                    }
                    .space-description p + p {
                        margin-top: 1rem;
                    }
                    .scene {
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .scene-title {
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.5rem;
                    }
                    .scene-description {
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </AnimatedSection>
    }
}
