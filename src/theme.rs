//! Dark "lacquer" theme: near-black backgrounds so the food photography
//! carries the page, lantern gold for accents, vermillion for badges.

use stylist::GlobalStyle;
use yew::prelude::*;

use crate::components::error_boundary::use_error_reporter;
use crate::error::SiteError;

pub const BACKGROUND: &str = "#0d0d0d";
pub const FOREGROUND: &str = "#e8e4dc";
pub const GOLD: &str = "#d4af37";
pub const VERMILLION: &str = "#8b0000";

const GLOBAL_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        background-color: var(--background);
        color: var(--foreground);
        font-family: "Noto Sans JP", sans-serif;
        line-height: 1.7;
    }

    h1, h2, h3, h4 {
        font-family: "Noto Serif JP", serif;
        font-weight: 500;
        margin: 0;
    }

    p {
        margin: 0;
    }

    a {
        color: inherit;
        text-decoration: none;
    }

    img {
        display: block;
    }

    .container {
        width: 100%;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        box-sizing: border-box;
    }

    .font-display {
        font-family: "Cormorant Garamond", serif;
    }

    .btn-gold {
        display: inline-block;
        padding: 0.9rem 2.2rem;
        background-color: var(--gold);
        color: var(--background);
        letter-spacing: 0.15em;
        font-size: 0.9rem;
        border: 1px solid var(--gold);
        cursor: pointer;
        transition: background-color 0.3s ease, color 0.3s ease;
    }

    .btn-gold:hover {
        background-color: transparent;
        color: var(--gold);
    }

    .btn-outline-gold {
        display: inline-block;
        padding: 0.9rem 2.2rem;
        background-color: transparent;
        color: var(--gold);
        letter-spacing: 0.15em;
        font-size: 0.9rem;
        border: 1px solid var(--gold);
        cursor: pointer;
        transition: background-color 0.3s ease, color 0.3s ease;
    }

    .btn-outline-gold:hover {
        background-color: var(--gold);
        color: var(--background);
    }

    .divider-gold {
        height: 1px;
        width: 100%;
        background: linear-gradient(90deg, transparent, var(--gold), transparent);
        opacity: 0.5;
    }
"#;

/// Registers the global stylesheet for as long as it is mounted.
#[function_component(Theme)]
pub fn theme() -> Html {
    let reporter = use_error_reporter();

    use_effect_with_deps(
        move |_| {
            let style = GlobalStyle::new(GLOBAL_CSS).map_err(SiteError::style);
            if let Err(err) = &style {
                reporter.report(err.clone());
            }
            move || {
                if let Ok(style) = style {
                    style.unregister();
                }
            }
        },
        (),
    );

    // Gradient text needs vendor-prefixed properties; kept out of the
    // parsed sheet and emitted verbatim.
    html! {
        <style>
            {palette_css()}
            {r#"
                .text-gold-gradient {
                    background: linear-gradient(135deg, #f1d78a 0%, var(--gold) 50%, #a8862a 100%);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .badge-vermillion {
                    background: var(--vermillion);
                    color: var(--foreground);
                }
                ::selection {
                    background: var(--gold);
                    color: var(--background);
                }
            "#}
        </style>
    }
}

/// Custom properties every stylesheet on the page reads its colours from.
pub fn palette_css() -> String {
    format!(
        ":root {{ --background: {}; --foreground: {}; --gold: {}; --vermillion: {}; }}",
        BACKGROUND, FOREGROUND, GOLD, VERMILLION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_declares_every_colour() {
        let css = palette_css();
        for (name, value) in [
            ("--background", BACKGROUND),
            ("--foreground", FOREGROUND),
            ("--gold", GOLD),
            ("--vermillion", VERMILLION),
        ] {
            assert!(css.contains(&format!("{name}: {value};")), "{css}");
        }
    }

    #[test]
    fn global_sheet_reads_colours_from_the_palette() {
        for value in [BACKGROUND, FOREGROUND, GOLD, VERMILLION] {
            assert!(!GLOBAL_CSS.contains(value), "{value} hard-coded");
        }
        assert!(GLOBAL_CSS.contains("var(--gold)"));
    }
}
