use yew::prelude::*;

use crate::components::reveal::{AnimatedSection, Reveal, RevealGroup};
use crate::content::MENU_ITEMS;
use crate::sections::heading::SectionHeading;

#[function_component(MenuSection)]
pub fn menu_section() -> Html {
    html! {
        <AnimatedSection id="menu" class="page-section tinted">
            <div class="container">
                <SectionHeading eyebrow="MENU" title="おしながき" />

                <RevealGroup index={1} class="grid-3">
                    { for MENU_ITEMS.iter().enumerate().map(|(i, item)| html! {
                        <Reveal index={i} class="menu-card outline-card">
                            <div class="card-image">
                                <img src={item.image} alt={item.title} />
                                <div class="card-image-shade"></div>
                            </div>
                            <div class="menu-card-body">
                                <p class="menu-card-subtitle">{item.subtitle}</p>
                                <h3 class="menu-card-title">{item.title}</h3>
                                <p class="menu-card-description muted">{item.description}</p>
                                <p class="price menu-card-price">{item.price}</p>
                            </div>
                        </Reveal>
                    }) }
                </RevealGroup>
            </div>
            <style>
                {r#"
                    .menu-card {
                        position: relative;
                        overflow: hidden;
                        background: #141312;
                    }
                    .card-image {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                    }
                    .card-image img {
                        transition: transform 0.7s ease;
                    }
                    .menu-card:hover .card-image img {
                        transform: scale(1.05);
                    }
                    .card-image-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #141312, transparent 50%);
                    }
                    .menu-card-body {
                        padding: 1.5rem;
                    }
                    .menu-card-subtitle {
                        color: rgba(212, 175, 55, 0.7);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        margin-bottom: 0.5rem;
                    }
                    .menu-card-title {
                        font-size: 1.25rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.75rem;
                    }
                    .menu-card-description {
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .menu-card-price {
                        font-size: 1.125rem;
                    }
                "#}
            </style>
        </AnimatedSection>
    }
}
