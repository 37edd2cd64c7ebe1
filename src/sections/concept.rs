use yew::prelude::*;

use crate::components::reveal::{AnimatedSection, Reveal, RevealGroup};
use crate::content::{INTERIOR_IMAGE, PHILOSOPHY_QUOTE, PILLARS};
use crate::sections::heading::SectionHeading;

#[function_component(ConceptSection)]
pub fn concept_section() -> Html {
    html! {
        <AnimatedSection id="concept" class="page-section">
            <div class="container">
                <SectionHeading eyebrow="PHILOSOPHY" title="寿司忠の心" />

                <Reveal index={1} class="concept-image">
                    <div class="wide-image glow-image">
                        <img src={INTERIOR_IMAGE} alt="寿司忠の店内" />
                        <div class="concept-image-shade"></div>
                    </div>
                </Reveal>

                <RevealGroup index={2} class="grid-3">
                    { for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                        <Reveal index={i} class="pillar outline-card">
                            <span class="pillar-title text-gold-gradient">{pillar.title}</span>
                            <h3 class="pillar-subtitle">{pillar.subtitle}</h3>
                            <p class="pillar-description muted">{pillar.description}</p>
                        </Reveal>
                    }) }
                </RevealGroup>

                <Reveal index={3} class="concept-quote">
                    <div class="divider-gold"></div>
                    <p class="quote-text">
                        {PHILOSOPHY_QUOTE[0]}<br />{PHILOSOPHY_QUOTE[1]}
                    </p>
                    <div class="divider-gold"></div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .concept-image {
                        margin-bottom: 4rem;
                    }
                    .concept-image-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(13, 13, 13, 0.6), transparent);
                    }
                    .pillar {
                        text-align: center;
                        padding: 2rem;
                    }
                    .pillar-title {
                        display: inline-block;
                        font-family: "Noto Serif JP", serif;
                        font-size: 2.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .pillar-subtitle {
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .pillar-description {
                        font-size: 0.875rem;
                    }
                    .concept-quote {
                        margin: 5rem auto 0;
                        max-width: 48rem;
                        text-align: center;
                    }
                    .quote-text {
                        font-family: "Noto Serif JP", serif;
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        letter-spacing: 0.05em;
                        margin: 3rem 0;
                    }
                "#}
            </style>
        </AnimatedSection>
    }
}
