use yew::prelude::*;

use crate::components::reveal::{AnimatedSection, Reveal};
use crate::content::{Specialty, SPECIALTIES};
use crate::sections::heading::SectionHeading;

fn specialty_feature(index: usize, specialty: &Specialty) -> Html {
    let image = html! {
        <div class={classes!("feature-image", "glow-image", specialty.image_trailing.then(|| "trailing"))}>
            <img src={specialty.image} alt={specialty.image_alt} />
            <div class="feature-badge badge-vermillion">{specialty.badge}</div>
        </div>
    };
    let text = html! {
        <div class="feature-text">
            <h3 class="feature-title text-gold-gradient">{specialty.title}</h3>
            { for specialty.paragraphs.iter().map(|p| html! { <p class="feature-paragraph">{*p}</p> }) }
            <div class="feature-prices">
                { for specialty.prices.iter().map(|price| html! {
                    <div>
                        <p class="muted feature-price-label">{price.label}</p>
                        <p class="price feature-price">
                            {price.amount}<span class="feature-price-note">{price.note}</span>
                        </p>
                    </div>
                }) }
            </div>
        </div>
    };

    html! {
        <Reveal index={index} class="grid-2 feature">
            { image }
            { text }
        </Reveal>
    }
}

#[function_component(SpecialtiesSection)]
pub fn specialties_section() -> Html {
    html! {
        <AnimatedSection id="specialties" class="page-section">
            <div class="container">
                <SectionHeading eyebrow="SPECIALTIES" title="名物" />
                { for SPECIALTIES.iter().enumerate().map(|(i, s)| specialty_feature(i + 1, s)) }
            </div>
            <style>
                {r#"
                    .feature + .feature {
                        margin-top: 4rem;
                    }
                    .feature-image {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        overflow: hidden;
                    }
                    .feature-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.25rem 1rem;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                    }
                    .feature-text {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .feature-title {
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        letter-spacing: 0.1em;
                        margin-bottom: 1.5rem;
                    }
                    .feature-paragraph {
                        color: rgba(232, 228, 220, 0.8);
                        margin-bottom: 1.5rem;
                    }
                    .feature-prices {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        margin-top: 0.5rem;
                    }
                    .feature-price-label {
                        font-size: 0.875rem;
                        margin-bottom: 0.25rem;
                    }
                    .feature-price {
                        font-size: 1.5rem;
                    }
                    .feature-price-note {
                        font-size: 0.875rem;
                        margin-left: 0.25rem;
                    }
                    @media (min-width: 1024px) {
                        .feature-image {
                            aspect-ratio: auto;
                        }
                        .feature-image.trailing {
                            order: 2;
                        }
                        .feature-text {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
        </AnimatedSection>
    }
}
