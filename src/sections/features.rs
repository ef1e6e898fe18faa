use yew::prelude::*;

use crate::content::FEATURES;
use crate::reveal::use_reveal;

#[function_component(Features)]
pub fn features() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());

    html! {
        <section id="features" ref={section_ref} class="features">
            <div class="section-inner">
                <div class={classes!("section-head", revealed.then_some("revealed"))}>
                    <div class="section-pill orange">
                        <span class="section-pill-dot"></span>
                        <span>{"核心优势"}</span>
                    </div>
                    <h2 class="section-title">
                        {"为什么选择"}<span class="blue">{"一简科创"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"专业师资 · 科学课程 · 软硬结合 · 大赛直通车"}
                    </p>
                </div>

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div
                            class={classes!("feature-card", revealed.then_some("revealed"))}
                            style={format!("transition-delay: {}ms; --accent: {};", index * 100, feature.accent)}
                        >
                            <div class="feature-icon">{feature.icon}</div>
                            <div class="feature-heading">
                                <h3>{feature.title}</h3>
                                <span class="feature-subtitle">{feature.subtitle}</span>
                            </div>
                            <p class="feature-desc">{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .features {
                    padding: 6rem 0;
                    background: #fff;
                    position: relative;
                    overflow: hidden;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .feature-card {
                    position: relative;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 18px;
                    padding: 2rem;
                    box-shadow: 0 6px 24px rgba(0, 0, 0, 0.06);
                    transition: all 0.5s ease;
                    opacity: 0;
                    transform: translateY(2.5rem);
                }

                .feature-card.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .feature-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12);
                    border-color: var(--accent);
                }

                .feature-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 14px;
                    background: #f8f9fa;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    margin-bottom: 1.5rem;
                }

                .feature-heading h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0 0 0.25rem;
                }

                .feature-subtitle {
                    font-size: 0.85rem;
                    font-weight: 500;
                    color: #f58220;
                }

                .feature-desc {
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 1rem 0 0;
                }

                @media (max-width: 1024px) {
                    .features-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (max-width: 640px) {
                    .features-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
