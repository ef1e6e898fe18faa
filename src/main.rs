use log::{info, Level};
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod reveal;
mod sections {
    pub mod competitions;
    pub mod courses;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod teachers;
}

use sections::{
    competitions::Competitions, courses::Courses, features::Features, footer::Footer, hero::Hero,
    navbar::Navbar, teachers::Teachers,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="site">
            <Navbar />
            <main>
                <Hero />
                <Features />
                <Courses />
                <Teachers />
                <Competitions />
                <Footer />
            </main>

            <style>
                {r#"
                * { margin: 0; }

                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI",
                        "PingFang SC", "Hiragino Sans GB", "Microsoft YaHei",
                        Roboto, Helvetica, Arial, sans-serif;
                    background: #fff;
                    color: #1a1a1a;
                    -webkit-font-smoothing: antialiased;
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-head {
                    text-align: center;
                    margin-bottom: 4rem;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease;
                }

                .section-head.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .section-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .section-pill.orange {
                    background: rgba(245, 130, 32, 0.1);
                    color: #f58220;
                }

                .section-pill.blue {
                    background: rgba(30, 60, 139, 0.1);
                    color: #1e3c8b;
                }

                .section-pill-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: currentColor;
                }

                .section-title {
                    font-size: clamp(1.9rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0 0 1rem;
                }

                .section-title .orange { color: #f58220; }
                .section-title .blue { color: #1e3c8b; }

                .section-subtitle {
                    color: #4b5563;
                    font-size: 1.1rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
