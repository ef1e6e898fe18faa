use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::COMPETITIONS;
use crate::reveal::use_reveal;
use crate::sections::navbar::scroll_to;

#[function_component(Competitions)]
pub fn competitions() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());

    let goto_contact = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to("#contact");
    });

    html! {
        <section id="competitions" ref={section_ref} class="competitions">
            <div class="section-inner">
                <div class={classes!("section-head", revealed.then_some("revealed"))}>
                    <div class="section-pill blue">
                        <span>{"🏆 综评赛事"}</span>
                    </div>
                    <h2 class="section-title">
                        {"创新大赛"}<span class="orange">{"直通车"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"直通高含金量科创赛事，助力综评背景提升，为升学加分"}
                    </p>
                </div>

                <div class="competition-grid">
                    { for COMPETITIONS.iter().enumerate().map(|(index, comp)| html! {
                        <div
                            class={classes!("competition-card", revealed.then_some("revealed"))}
                            style={format!("transition-delay: {}ms; --accent: {};", index * 100, comp.accent)}
                        >
                            <div class="competition-head">
                                <div class="competition-icon">{comp.icon}</div>
                                <span class="competition-level">{comp.level}</span>
                            </div>
                            <h3 class="competition-name">{comp.name}</h3>
                            <p class="competition-organizer">{comp.organizer}</p>
                            <p class="competition-desc">{comp.description}</p>
                            <div class="competition-benefits">
                                { for comp.benefits.iter().map(|benefit| html! {
                                    <span class="competition-benefit">{*benefit}</span>
                                }) }
                            </div>
                            <span class="competition-category">{comp.category}</span>
                        </div>
                    }) }
                </div>

                <div class={classes!("competition-cta", revealed.then_some("revealed"))}>
                    <h3>{"不知道如何规划综评赛事？"}</h3>
                    <p>{"我们的专业团队将根据学生情况，量身定制综评赛事规划方案"}</p>
                    <button class="competition-cta-button" onclick={goto_contact}>
                        {"免费咨询 ›"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .competitions {
                    padding: 6rem 0;
                    background: #f8f9fa;
                }

                .competition-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .competition-card {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 18px;
                    padding: 1.5rem;
                    box-shadow: 0 6px 24px rgba(0, 0, 0, 0.06);
                    transition: all 0.5s ease;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    position: relative;
                }

                .competition-card.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .competition-card:hover {
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.12);
                    border-color: var(--accent);
                }

                .competition-head {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }

                .competition-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 14px;
                    background: #f8f9fa;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                }

                .competition-level {
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: var(--accent);
                    background: #f8f9fa;
                    border-radius: 999px;
                    padding: 0.3rem 0.9rem;
                }

                .competition-name {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0 0 0.35rem;
                }

                .competition-organizer {
                    font-size: 0.85rem;
                    color: #9ca3af;
                    margin: 0 0 0.75rem;
                }

                .competition-desc {
                    font-size: 0.9rem;
                    color: #4b5563;
                    margin: 0 0 1rem;
                }

                .competition-benefits {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }

                .competition-benefit {
                    font-size: 0.75rem;
                    color: #4b5563;
                    background: #f3f4f6;
                    border-radius: 8px;
                    padding: 0.25rem 0.6rem;
                }

                .competition-category {
                    font-size: 0.75rem;
                    color: #9ca3af;
                }

                .competition-cta {
                    margin-top: 4rem;
                    text-align: center;
                    background: linear-gradient(120deg, #1e3c8b, #2d4fa7);
                    border-radius: 24px;
                    padding: 3rem;
                    color: #fff;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease 0.5s;
                }

                .competition-cta.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .competition-cta h3 {
                    font-size: 1.7rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .competition-cta p {
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }

                .competition-cta-button {
                    background: #f58220;
                    color: #fff;
                    border: none;
                    border-radius: 12px;
                    padding: 0.9rem 2rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .competition-cta-button:hover { background: #e07418; }

                @media (max-width: 1024px) {
                    .competition-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (max-width: 640px) {
                    .competition-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
