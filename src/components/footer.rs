use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config;
use crate::content::{BRAND, FOOTER_TAGLINE, NAV_LINKS};

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::RESTAURANT_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="footer-brand text-gold-gradient">{BRAND}</p>
                <p class="footer-tagline">{FOOTER_TAGLINE}</p>

                <div class="footer-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <AnchorLink target={link.target} class="footer-link">{link.label}</AnchorLink>
                    }) }
                </div>

                <a href={config::tel_href()} class="footer-phone">{config::PHONE}</a>

                <p class="footer-copyright">{copyright(year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 0;
                        border-top: 1px solid rgba(212, 175, 55, 0.15);
                    }
                    .footer-inner {
                        text-align: center;
                    }
                    .footer-brand {
                        font-family: "Noto Serif JP", serif;
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .footer-tagline {
                        color: #8a8578;
                        font-size: 0.875rem;
                        margin-bottom: 2rem;
                    }
                    .footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                        font-size: 0.875rem;
                    }
                    .footer-link {
                        color: rgba(232, 228, 220, 0.6);
                        transition: color 0.3s ease;
                    }
                    .footer-link:hover {
                        color: var(--gold);
                    }
                    .footer-phone {
                        display: inline-block;
                        color: var(--gold);
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .footer-copyright {
                        color: #8a8578;
                        font-size: 0.75rem;
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_restaurant_and_year() {
        assert_eq!(
            copyright(2026),
            "© 2026 料亭 寿司忠. All rights reserved."
        );
    }
}
