use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::content::Link;
use crate::motion::hooks::use_mount_reveal;
use crate::motion::reveal::Entrance;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: Vec<Link>,
    #[prop_or(AttrValue::from("Start a Project"))]
    pub cta: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_THRESHOLD_PX;
    let shown = use_mount_reveal();
    let entrance = Entrance::fade_up(-100.0).with_duration(500);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str| -> Html {
        props.items.iter().map(|item| {
            html! {
                <a key={item.name.clone()} href={item.link.clone()} class={class} onclick={close_menu.clone()}>
                    {item.name.clone()}
                </a>
            }
        }).collect()
    };

    html! {
        <div class="nav-anchor">
            <nav
                class={classes!("floating-nav", is_scrolled.then(|| "scrolled"), (*menu_open).then(|| "menu-open"))}
                style={entrance.style(shown)}
            >
                <div class="nav-bar">
                    <a href="#" class="nav-logo" aria-label="Home">{"</>"}</a>

                    <div class="nav-links">
                        { links("nav-link") }
                    </div>

                    <button class="nav-cta">{props.cta.clone()}</button>

                    <button
                        class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                    { links("mobile-link") }
                    <button class="nav-cta mobile-cta" onclick={close_menu.clone()}>
                        {props.cta.clone()}
                    </button>
                </div>
            </nav>
            <style>
                {r#"
                    .nav-anchor {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        width: max-content;
                        max-width: 95vw;
                    }
                    .floating-nav {
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    }
                    .floating-nav.scrolled {
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .floating-nav.menu-open {
                        border-radius: 1.25rem;
                    }
                    .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .nav-logo {
                        color: #fff;
                        font-family: monospace;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: none;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link, .mobile-link {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 200ms;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        background: #9333ea;
                        color: #fff;
                        font-weight: 600;
                        padding: 0.375rem 1rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: transform 150ms;
                    }
                    .nav-cta:hover {
                        transform: scale(1.05);
                    }
                    .nav-cta:active {
                        transform: scale(0.95);
                    }
                    .burger-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 4px;
                    }
                    .burger-menu span {
                        width: 20px;
                        height: 2px;
                        background: #fff;
                        transition: transform 300ms ease, opacity 300ms ease;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(6px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-6px) rotate(-45deg);
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        max-height: 0;
                        opacity: 0;
                        overflow: hidden;
                        transition: max-height 300ms ease-in-out, opacity 300ms ease-in-out, padding 300ms ease-in-out;
                    }
                    .mobile-menu.open {
                        max-height: 20rem;
                        opacity: 1;
                        padding: 0.75rem 0 0.25rem;
                    }
                    .mobile-cta {
                        display: none;
                    }
                    @media (min-width: 640px) {
                        .nav-links {
                            display: flex;
                        }
                        .burger-menu, .mobile-menu {
                            display: none;
                        }
                    }
                    @media (max-width: 639px) {
                        .nav-bar .nav-cta {
                            display: none;
                        }
                        .mobile-cta {
                            display: inline-block;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
