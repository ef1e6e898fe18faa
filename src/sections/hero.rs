use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{HERO_STATS, HERO_TAGS, PHONE_NUMBER, WECHAT_ID};
use crate::sections::navbar::scroll_to;

#[function_component(Hero)]
pub fn hero() -> Html {
    let entered = use_state(|| false);

    // Entrance transition plays right after mount.
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                entered.set(true);
                || ()
            },
            (),
        );
    }

    let goto_contact = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to("#contact");
    });
    let goto_courses = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to("#courses");
    });

    html! {
        <section id="hero" class="hero">
            <div class="hero-backdrop"></div>

            <div class="hero-inner">
                <div class={classes!("hero-main", (*entered).then_some("entered"))}>
                    <div class="hero-badge">
                        <span class="hero-badge-icon">{"✨"}</span>
                        <span>{"上海综评 · 科创教育领导者"}</span>
                    </div>

                    <h1 class="hero-title">
                        <span class="hero-title-line">{"以简驭繁"}</span>
                        <span class="hero-title-line accent">{"决胜综评"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"专注人工智能、软件编程、硬件创新，助力上海学子综合素质评价提升"}
                    </p>

                    <div class="hero-tags">
                        { for HERO_TAGS.iter().map(|tag| html! {
                            <div class="hero-tag">
                                <span class="hero-tag-dot"></span>
                                <span>{*tag}</span>
                            </div>
                        }) }
                    </div>

                    <div class="hero-cta-group">
                        <button class="hero-cta primary" onclick={goto_contact}>
                            {"📞 立即咨询 ›"}
                        </button>
                        <button class="hero-cta ghost" onclick={goto_courses}>
                            {"了解课程"}
                        </button>
                    </div>

                    <div class="hero-contact">
                        <span>{"📞 "}{PHONE_NUMBER}</span>
                        <span>{"💬 微信: "}{WECHAT_ID}</span>
                    </div>
                </div>

                <div class={classes!("hero-stats", (*entered).then_some("entered"))}>
                    <div class="hero-stats-card">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="hero-stat">
                                <div class="hero-stat-number">{stat.number}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                                <div class="hero-stat-desc">{stat.desc}</div>
                            </div>
                        }) }
                    </div>
                    <div class="hero-float-card">
                        <div class="hero-float-icon">{"✨"}</div>
                        <div>
                            <div class="hero-float-title">{"专业团队"}</div>
                            <div class="hero-float-desc">{"算法工程师 + 复旦博士"}</div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background:
                        linear-gradient(90deg, rgba(30, 60, 139, 0.92) 0%, rgba(30, 60, 139, 0.72) 55%, rgba(30, 60, 139, 0.35) 100%),
                        radial-gradient(circle at 80% 20%, rgba(245, 130, 32, 0.35), transparent 45%),
                        #16295f;
                }

                .hero-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    width: 100%;
                }

                .hero-main {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 1s ease;
                }

                .hero-main.entered {
                    opacity: 1;
                    transform: translateY(0);
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    align-self: flex-start;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.85rem;
                    font-weight: 500;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.15;
                    color: #fff;
                    margin: 0;
                }

                .hero-title-line { display: block; }
                .hero-title-line.accent { color: #f58220; }

                .hero-subtitle {
                    font-size: 1.15rem;
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 36rem;
                    line-height: 1.7;
                    margin: 0;
                }

                .hero-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-tag {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border-radius: 10px;
                    padding: 0.5rem 1rem;
                    color: #fff;
                    font-weight: 500;
                    font-size: 0.95rem;
                }

                .hero-tag-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #f58220;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-cta {
                    border-radius: 14px;
                    padding: 1rem 2rem;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-cta.primary {
                    background: #f58220;
                    border: none;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(245, 130, 32, 0.35);
                }

                .hero-cta.primary:hover { background: #e07418; }

                .hero-cta.ghost {
                    background: rgba(255, 255, 255, 0.05);
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                    backdrop-filter: blur(4px);
                }

                .hero-cta.ghost:hover { background: rgba(255, 255, 255, 0.12); }

                .hero-contact {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    color: rgba(255, 255, 255, 0.85);
                    font-weight: 500;
                }

                .hero-stats {
                    position: relative;
                    opacity: 0;
                    transform: translateX(2.5rem);
                    transition: all 1s ease 0.3s;
                }

                .hero-stats.entered {
                    opacity: 1;
                    transform: translateX(0);
                }

                .hero-stats-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 20px;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                }

                .hero-stat {
                    text-align: center;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 14px;
                    transition: background 0.3s ease;
                }

                .hero-stat:hover { background: rgba(255, 255, 255, 0.1); }

                .hero-stat-number {
                    font-size: 1.9rem;
                    font-weight: 700;
                    color: #f58220;
                }

                .hero-stat-label {
                    color: #fff;
                    font-weight: 600;
                    margin: 0.25rem 0;
                }

                .hero-stat-desc {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                }

                .hero-float-card {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    background: #fff;
                    border-radius: 14px;
                    padding: 1rem;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.25);
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .hero-float-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: rgba(245, 130, 32, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                }

                .hero-float-title {
                    font-weight: 700;
                    color: #1a1a1a;
                }

                .hero-float-desc {
                    font-size: 0.85rem;
                    color: #6b7280;
                }

                @media (max-width: 1024px) {
                    .hero-inner { grid-template-columns: 1fr; }
                    .hero-stats { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
