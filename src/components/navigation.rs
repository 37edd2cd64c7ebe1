use yew::prelude::*;

use crate::components::anchor::{scroll_to_top, AnchorLink};
use crate::components::scroll_provider::use_scroll_derived;
use crate::config;
use crate::content::{BRAND, FOUNDED, NAV_LINKS};
use crate::motion::menu::{MenuAction, MenuState};
use crate::motion::transform::is_header_scrolled;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu = use_reducer(MenuState::default);
    let is_scrolled = use_scroll_derived(is_header_scrolled);
    let is_open = menu.is_open();

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    let to_top = {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(());
            scroll_to_top();
        })
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <nav class="container nav-bar">
                <a href="#" class="nav-logo" onclick={to_top}>
                    <span class="nav-brand text-gold-gradient">{BRAND}</span>
                    <span class="nav-founded">{FOUNDED}</span>
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <AnchorLink target={link.target} class="nav-link" on_follow={close_menu.clone()}>
                            {link.label}
                        </AnchorLink>
                    }) }
                    <a href={config::tel_href()} class="btn-outline-gold">{"ご予約"}</a>
                </div>

                <button
                    class={classes!("burger-menu", is_open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="メニュー"
                    aria-expanded={is_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <div class={classes!("mobile-menu", is_open.then(|| "open"))}>
                <div class="container mobile-menu-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <AnchorLink target={link.target} class="mobile-link" on_follow={close_menu.clone()}>
                            {link.label}
                        </AnchorLink>
                    }) }
                    <a href={config::tel_href()} class="btn-gold mobile-reserve">
                        {format!("ご予約 {}", config::PHONE)}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: background-color 0.5s ease, border-color 0.5s ease, backdrop-filter 0.5s ease;
                        animation: header-slide-in 0.6s ease-out both;
                    }

                    .site-header.scrolled {
                        background: rgba(13, 13, 13, 0.95);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        border-bottom-color: rgba(212, 175, 55, 0.15);
                    }

                    @keyframes header-slide-in {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }

                    .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 5rem;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .nav-brand {
                        font-family: "Noto Serif JP", serif;
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                    }

                    .nav-founded {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: #8a8578;
                    }

                    .nav-desktop {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        font-weight: 300;
                        color: rgba(232, 228, 220, 0.8);
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover, .mobile-link:hover {
                        color: var(--gold);
                    }

                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        width: 1.5rem;
                        height: 1.25rem;
                        padding: 0;
                        background: none;
                        border: none;
                        color: var(--foreground);
                        cursor: pointer;
                    }

                    .burger-menu span {
                        display: block;
                        width: 100%;
                        height: 2px;
                        background: currentColor;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }

                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(9px) rotate(45deg);
                    }

                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }

                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-9px) rotate(-45deg);
                    }

                    .mobile-menu {
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        background: rgba(13, 13, 13, 0.98);
                        backdrop-filter: blur(12px);
                        transition: max-height 0.4s ease, opacity 0.4s ease;
                    }

                    .mobile-menu.open {
                        max-height: 32rem;
                        opacity: 1;
                        border-bottom: 1px solid rgba(212, 175, 55, 0.15);
                    }

                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding-top: 1.5rem;
                        padding-bottom: 1.5rem;
                    }

                    .mobile-link {
                        padding: 0.5rem 0;
                        letter-spacing: 0.1em;
                        color: rgba(232, 228, 220, 0.8);
                    }

                    .mobile-reserve {
                        margin-top: 1rem;
                        text-align: center;
                    }

                    @media (min-width: 640px) {
                        .nav-founded {
                            display: inline;
                        }
                    }

                    @media (max-width: 639px) {
                        .nav-founded {
                            display: none;
                        }
                    }

                    @media (min-width: 1024px) {
                        .nav-desktop {
                            display: flex;
                        }
                        .burger-menu, .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
