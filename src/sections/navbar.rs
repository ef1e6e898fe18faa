use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{NAV_LINKS, PHONE_NUMBER};

/// Smooth-scrolls to the section matching the anchor selector, e.g. "#courses".
pub fn scroll_to(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(element)) = document.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 100);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

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

    let nav_link = |label: &'static str, href: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(href);
            menu_open.set(false);
        });
        html! {
            <a href={href} {onclick} class="nav-link">{label}</a>
        }
    };

    let cta_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to("#contact");
    });

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#hero" class="nav-logo" onclick={{
                        let menu_open = menu_open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to("#hero");
                            menu_open.set(false);
                        })
                    }}>
                        <div class="nav-logo-mark">{"一"}</div>
                        <div class="nav-logo-text">
                            <div class="nav-logo-name">{"一简科创"}</div>
                            <div class="nav-logo-slogan">{"以简驭繁，决胜综评"}</div>
                        </div>
                    </a>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| nav_link(link.label, link.href)) }
                    </div>

                    <div class="nav-cta">
                        <a href="tel:18301980613" class="nav-phone">{"📞 "}{PHONE_NUMBER}</a>
                        <button class="nav-cta-button" onclick={cta_click}>{"免费咨询"}</button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <div class="mobile-menu-backdrop" onclick={close_menu}></div>
                <div class="mobile-menu-panel">
                    { for NAV_LINKS.iter().map(|link| nav_link(link.label, link.href)) }
                    <div class="mobile-menu-contact">
                        <a href="tel:18301980613" class="nav-phone">{"📞 "}{PHONE_NUMBER}</a>
                        <button class="nav-cta-button" onclick={{
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll_to("#contact");
                                menu_open.set(false);
                            })
                        }}>{"免费咨询"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    transition: all 0.5s ease;
                    background: transparent;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 24px rgba(0, 0, 0, 0.08);
                    padding: 0.75rem 0;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                }

                .nav-logo-mark {
                    width: 40px;
                    height: 40px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 1.1rem;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }

                .scrolled .nav-logo-mark {
                    background: linear-gradient(135deg, #1e3c8b, #f58220);
                }

                .nav-logo-name {
                    font-weight: 700;
                    font-size: 1.05rem;
                    line-height: 1.2;
                    color: #fff;
                }

                .nav-logo-slogan {
                    font-size: 0.7rem;
                    color: rgba(255, 255, 255, 0.7);
                }

                .scrolled .nav-logo-name { color: #1a1a1a; }
                .scrolled .nav-logo-slogan { color: #6b7280; }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .scrolled .nav-link { color: #374151; }
                .nav-link:hover { color: #f58220; }

                .nav-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .nav-phone {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #fff;
                    text-decoration: none;
                }

                .scrolled .nav-phone { color: #1e3c8b; }

                .nav-cta-button {
                    background: #f58220;
                    color: #fff;
                    border: none;
                    border-radius: 12px;
                    padding: 0.6rem 1.5rem;
                    font-size: 0.9rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .nav-cta-button:hover { background: #e07418; }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: background 0.3s ease;
                }

                .scrolled .burger-menu span { background: #1a1a1a; }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    visibility: hidden;
                    transition: visibility 0.4s;
                }

                .mobile-menu.open { visibility: visible; }

                .mobile-menu-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transition: opacity 0.4s ease;
                }

                .mobile-menu.open .mobile-menu-backdrop { opacity: 1; }

                .mobile-menu-panel {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 300px;
                    max-width: 85%;
                    height: 100%;
                    background: #fff;
                    box-shadow: -8px 0 32px rgba(0, 0, 0, 0.2);
                    padding: 5rem 1.5rem 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    transform: translateX(100%);
                    transition: transform 0.4s ease;
                }

                .mobile-menu.open .mobile-menu-panel { transform: translateX(0); }

                .mobile-menu-panel .nav-link {
                    color: #374151;
                    font-size: 1.05rem;
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                }

                .mobile-menu-panel .nav-link:hover {
                    background: rgba(245, 130, 32, 0.1);
                    color: #f58220;
                }

                .mobile-menu-contact {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #f3f4f6;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .mobile-menu-contact .nav-phone { color: #1e3c8b; }

                @media (max-width: 1024px) {
                    .nav-links, .nav-cta { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </>
    }
}
