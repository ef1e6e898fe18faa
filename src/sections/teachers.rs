use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::TEACHERS;
use crate::reveal::use_reveal;

#[function_component(Teachers)]
pub fn teachers() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());
    let active = use_state(|| 0usize);

    let teacher = &TEACHERS[*active];

    html! {
        <section id="teachers" ref={section_ref} class="teachers">
            <div class="section-inner">
                <div class={classes!("section-head", revealed.then_some("revealed"))}>
                    <div class="section-pill orange">
                        <span class="section-pill-dot"></span>
                        <span>{"师资团队"}</span>
                    </div>
                    <h2 class="section-title">
                        {"大咖团队"}<span class="blue">{"智慧研发"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"来自国内外优秀学府的专家教授、博士和精英，智库专家保驾护航"}
                    </p>
                </div>

                <div class={classes!("teacher-grid", revealed.then_some("revealed"))}>
                    { for TEACHERS.iter().enumerate().map(|(index, t)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <div
                                class={classes!("teacher-card", (index == *active).then_some("active"))}
                                {onclick}
                            >
                                <div class="teacher-portrait" style={format!("background: linear-gradient(160deg, {}33, {});", t.accent, t.accent)}>
                                    <span class="teacher-initial">{t.name.chars().next().map(String::from).unwrap_or_default()}</span>
                                </div>
                                <div class="teacher-card-meta">
                                    <span class="teacher-card-icon" style={format!("background: {};", t.accent)}>{t.icon}</span>
                                    <span class="teacher-card-title">{t.title}</span>
                                </div>
                                <h3 class="teacher-card-name">{t.name}</h3>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("teacher-detail", revealed.then_some("revealed"))}>
                    <div class="teacher-detail-main">
                        <div class="teacher-detail-head">
                            <div class="teacher-detail-icon" style={format!("background: {};", teacher.accent)}>
                                {teacher.icon}
                            </div>
                            <div>
                                <h3>{teacher.name}</h3>
                                <p class="teacher-detail-title">{teacher.title}</p>
                            </div>
                        </div>
                        <p class="teacher-detail-desc">{teacher.description}</p>
                        <div class="teacher-detail-grid">
                            { for teacher.details.iter().enumerate().map(|(idx, detail)| html! {
                                <div class="teacher-detail-item">
                                    <span class="teacher-detail-index">{idx + 1}</span>
                                    <span>{*detail}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="teacher-detail-figure">
                        <div class="teacher-orbit outer">
                            <div class="teacher-orbit middle">
                                <div class="teacher-avatar" style={format!("background: {};", teacher.accent)}>
                                    {teacher.name.chars().next().map(String::from).unwrap_or_default()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .teachers {
                    padding: 6rem 0;
                    background: #fff;
                }

                .teacher-grid {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease 0.2s;
                }

                .teacher-grid.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .teacher-card {
                    border-radius: 18px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 6px 24px rgba(0, 0, 0, 0.08);
                    cursor: pointer;
                    padding-bottom: 1rem;
                    transition: all 0.4s ease;
                }

                .teacher-card:hover { transform: translateY(-4px); }

                .teacher-card.active {
                    box-shadow: 0 0 0 4px #f58220, 0 16px 40px rgba(0, 0, 0, 0.16);
                    transform: scale(1.04);
                }

                .teacher-portrait {
                    aspect-ratio: 3 / 4;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .teacher-initial {
                    font-size: 3rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.9);
                }

                .teacher-card-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem 0;
                }

                .teacher-card-icon {
                    width: 30px;
                    height: 30px;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.9rem;
                }

                .teacher-card-title {
                    font-size: 0.8rem;
                    color: #6b7280;
                    font-weight: 500;
                }

                .teacher-card-name {
                    font-size: 1.15rem;
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0.5rem 1rem 0;
                }

                .teacher-detail {
                    background: linear-gradient(120deg, #1e3c8b, #2d4fa7);
                    border-radius: 24px;
                    padding: 3rem;
                    color: #fff;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                    align-items: center;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease 0.3s;
                }

                .teacher-detail.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .teacher-detail-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .teacher-detail-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 18px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                }

                .teacher-detail-head h3 {
                    font-size: 1.8rem;
                    font-weight: 700;
                    margin: 0;
                }

                .teacher-detail-title {
                    color: rgba(255, 255, 255, 0.8);
                    margin: 0.25rem 0 0;
                }

                .teacher-detail-desc {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 2rem;
                }

                .teacher-detail-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .teacher-detail-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.9rem;
                }

                .teacher-detail-index {
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                    flex-shrink: 0;
                }

                .teacher-detail-figure {
                    display: flex;
                    justify-content: center;
                }

                .teacher-orbit.outer {
                    width: 240px;
                    height: 240px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .teacher-orbit.middle {
                    width: 180px;
                    height: 180px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .teacher-avatar {
                    width: 120px;
                    height: 120px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    font-weight: 700;
                }

                @media (max-width: 1024px) {
                    .teacher-grid { grid-template-columns: repeat(2, 1fr); }
                    .teacher-detail { grid-template-columns: 1fr; }
                    .teacher-detail-figure { display: none; }
                }
                "#}
            </style>
        </section>
    }
}
