use yew::prelude::*;

use crate::components::reveal::{AnimatedSection, Reveal};
use crate::config;
use crate::content::{CLOSED_ON, DIRECTIONS, OPENING_HOURS};
use crate::motion::variant::Variant;
use crate::sections::heading::SectionHeading;

#[function_component(AccessSection)]
pub fn access_section() -> Html {
    html! {
        <AnimatedSection id="access" class="page-section">
            <div class="container">
                <SectionHeading eyebrow="ACCESS" title="アクセス" />

                <div class="grid-2 access-grid">
                    <Reveal index={1} class="access-info">
                        <h3 class="access-name text-gold-gradient">{config::RESTAURANT_NAME}</h3>

                        <div class="access-row">
                            <span class="access-icon">{"〒"}</span>
                            <div>
                                <p>{config::POSTAL_CODE}</p>
                                <p>{config::ADDRESS}</p>
                            </div>
                        </div>
                        <div class="access-row">
                            <span class="access-icon">{"☎"}</span>
                            <a href={config::tel_href()} class="access-phone">{config::PHONE}</a>
                        </div>
                        <div class="access-row">
                            <span class="access-icon">{"◷"}</span>
                            <div>
                                <p>{OPENING_HOURS}</p>
                                <p class="muted access-closed">{CLOSED_ON}</p>
                            </div>
                        </div>

                        <div class="divider-gold"></div>

                        <div>
                            <h4 class="access-subtitle">{"交通アクセス"}</h4>
                            <ul class="access-directions">
                                { for DIRECTIONS.iter().map(|d| html! { <li>{format!("• {}", d)}</li> }) }
                            </ul>
                        </div>

                        <a
                            href={config::maps_link_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-outline-gold"
                        >
                            {"Google Mapで見る ↗"}
                        </a>
                    </Reveal>

                    <Reveal index={2} variant={Variant::FadeIn} class="access-map">
                        <iframe
                            src={config::maps_embed_url()}
                            width="100%"
                            height="100%"
                            style="border: 0; filter: grayscale(0.3) contrast(1.1);"
                            allowfullscreen=true
                            loading="lazy"
                            title="Google Maps"
                        />
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                    .access-grid {
                        gap: 3rem;
                    }
                    .access-info > * + * {
                        margin-top: 2rem;
                    }
                    .access-name {
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                    }
                    .access-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .access-row + .access-row {
                        margin-top: 1rem;
                    }
                    .access-icon {
                        width: 1.25rem;
                        flex-shrink: 0;
                        color: var(--gold);
                        text-align: center;
                    }
                    .access-phone {
                        font-size: 1.125rem;
                        transition: color 0.3s ease;
                    }
                    .access-phone:hover {
                        color: var(--gold);
                    }
                    .access-closed {
                        font-size: 0.875rem;
                    }
                    .access-subtitle {
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .access-directions {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        font-size: 0.875rem;
                        color: rgba(232, 228, 220, 0.8);
                    }
                    .access-directions li + li {
                        margin-top: 0.5rem;
                    }
                    .access-map {
                        min-height: 400px;
                        aspect-ratio: 1 / 1;
                        overflow: hidden;
                        border: 1px solid rgba(212, 175, 55, 0.12);
                    }
                    @media (min-width: 1024px) {
                        .access-map {
                            aspect-ratio: auto;
                        }
                    }
                "#}
            </style>
        </AnimatedSection>
    }
}
