use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::components::scroll_provider::use_scroll_offset;
use crate::config;
use crate::content::{FOUNDED_FORMAL, HERO_IMAGE, TAGLINE};
use crate::motion::transform::{hero_opacity, parallax_y};
use crate::sections::{
    access::AccessSection, concept::ConceptSection, menu::MenuSection, space::SpaceSection,
    specialties::SpecialtiesSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Navigation />
            <main>
                <HeroSection />
                <ConceptSection />
                <MenuSection />
                <SpecialtiesSection />
                <SpaceSection />
                <AccessSection />
            </main>
            <Footer />
            <style>{SECTION_CSS}</style>
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let offset = use_scroll_offset();
    // Background drifts down slower than the page, text fades before the next section.
    let background_style = format!("transform: translateY({:.1}px);", parallax_y(offset));
    let content_style = format!("opacity: {:.3};", hero_opacity(offset));

    html! {
        <section class="hero">
            <div class="hero-background" style={background_style}>
                <img src={HERO_IMAGE} alt="寿司忠の会席料理" />
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content container" style={content_style}>
                <div class="hero-intro">
                    <p class="hero-founded">{FOUNDED_FORMAL}</p>
                    <h1 class="hero-title text-gold-gradient">{config::RESTAURANT_NAME}</h1>
                    <p class="hero-tagline">
                        {TAGLINE[0]}<br class="mobile-break" />{TAGLINE[1]}
                    </p>
                </div>
                <div class="hero-cta-group">
                    <AnchorLink target="menu" class="btn-gold">{"おしながきを見る"}</AnchorLink>
                    <a href={config::tel_href()} class="btn-outline-gold">
                        {format!("ご予約 {}", config::PHONE)}
                    </a>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-bounce">
                    <span>{"SCROLL"}</span>
                    <span class="chevron"></span>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 700px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.3;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(13, 13, 13, 0.7), rgba(13, 13, 13, 0.4), var(--background));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        will-change: opacity;
                    }
                    .hero-intro {
                        animation: hero-rise 1s ease-out 0.3s both;
                    }
                    .hero-cta-group {
                        margin-top: 3rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        animation: hero-fade 1s ease-out 0.8s both;
                    }
                    .hero-founded {
                        color: rgba(212, 175, 55, 0.9);
                        font-size: 0.875rem;
                        letter-spacing: 0.3em;
                        font-weight: 300;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 9vw, 6rem);
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .hero-tagline {
                        color: rgba(232, 228, 220, 0.8);
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        font-weight: 300;
                    }
                    .mobile-break {
                        display: none;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        animation: hero-fade 0.6s ease-out 1.5s both;
                    }
                    .scroll-indicator-bounce {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(232, 228, 220, 0.5);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        animation: scroll-bounce 2s ease-in-out infinite;
                    }
                    .chevron {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-right: 1px solid currentColor;
                        border-bottom: 1px solid currentColor;
                        transform: rotate(45deg);
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes hero-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes scroll-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                    @media (max-width: 639px) {
                        .mobile-break {
                            display: inline;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

// Shared by every animated section on the page.
const SECTION_CSS: &str = r#"
    .page-section {
        padding: 6rem 0;
        scroll-margin-top: 5rem;
    }
    .page-section.tinted {
        background: rgba(26, 24, 22, 0.3);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-eyebrow {
        color: rgba(212, 175, 55, 0.8);
        font-size: 0.875rem;
        letter-spacing: 0.3em;
        margin-bottom: 1rem;
    }
    .section-title {
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        letter-spacing: 0.1em;
    }
    .wide-image {
        position: relative;
        aspect-ratio: 21 / 9;
        overflow: hidden;
    }
    .wide-image img, .card-image img, .feature-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .glow-image {
        box-shadow: 0 0 60px rgba(212, 175, 55, 0.08);
    }
    .outline-card {
        border: 1px solid rgba(212, 175, 55, 0.12);
        transition: border-color 0.5s ease;
    }
    .outline-card:hover {
        border-color: rgba(212, 175, 55, 0.3);
    }
    .muted {
        color: #8a8578;
    }
    .price {
        font-family: "Cormorant Garamond", serif;
        color: var(--gold);
        letter-spacing: 0.05em;
    }
    .grid-3, .grid-4, .grid-2 {
        display: grid;
        gap: 2rem;
    }
    @media (min-width: 768px) {
        .page-section {
            padding: 8rem 0;
        }
        .grid-3 {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    @media (min-width: 640px) {
        .grid-4 {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .grid-4 {
            grid-template-columns: repeat(4, 1fr);
        }
        .grid-2 {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;
