use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::COURSES;
use crate::reveal::use_reveal;
use crate::sections::navbar::scroll_to;

#[function_component(Courses)]
pub fn courses() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone());
    let active = use_state(|| 0usize);

    let course = &COURSES[*active];

    html! {
        <section id="courses" ref={section_ref} class="courses">
            <div class="section-inner">
                <div class={classes!("section-head", revealed.then_some("revealed"))}>
                    <div class="section-pill blue">
                        <span class="section-pill-dot"></span>
                        <span>{"课程体系"}</span>
                    </div>
                    <h2 class="section-title">
                        {"三大核心"}<span class="orange">{"课程方向"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"人工智能 · 软件编程 · 硬件创新，全方位培养科技素养"}
                    </p>
                </div>

                <div class={classes!("course-tabs", revealed.then_some("revealed"))}>
                    { for COURSES.iter().enumerate().map(|(index, c)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <button
                                class={classes!("course-tab", (index == *active).then_some("active"))}
                                {onclick}
                            >
                                <span class="course-tab-icon">{c.icon}</span>
                                <span>{c.title}</span>
                            </button>
                        }
                    }) }
                </div>

                <div class={classes!("course-panel", revealed.then_some("revealed"))}>
                    <div class="course-intro" style={format!("background: linear-gradient(135deg, {} 0%, {}cc 100%);", course.accent, course.accent)}>
                        <div class="course-intro-head">
                            <div class="course-intro-icon">{course.icon}</div>
                            <div>
                                <h3>{course.title}</h3>
                                <p class="course-intro-sub">{course.subtitle}</p>
                            </div>
                        </div>
                        <p class="course-intro-desc">{course.description}</p>
                        <ul class="course-features">
                            { for course.features.iter().map(|f| html! {
                                <li>{"✔ "}{*f}</li>
                            }) }
                        </ul>
                        <button class="course-cta" onclick={Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to("#contact");
                        })}>{"了解详情 ›"}</button>
                    </div>

                    <div class="course-levels">
                        <h4>{"课程阶段"}</h4>
                        { for course.levels.iter().enumerate().map(|(idx, level)| html! {
                            <div class="course-level">
                                <div class="course-level-number" style={format!("background: {};", course.accent)}>
                                    {idx + 1}
                                </div>
                                <div class="course-level-body">
                                    <div class="course-level-head">
                                        <h5>{level.name}</h5>
                                        <span class="course-level-age">{level.age}</span>
                                    </div>
                                    <p>{level.focus}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .courses {
                    padding: 6rem 0;
                    background: #f8f9fa;
                }

                .course-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease 0.2s;
                }

                .course-tabs.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .course-tab {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 14px;
                    background: #fff;
                    color: #4b5563;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                    transition: all 0.3s ease;
                }

                .course-tab:hover { background: #f9fafb; }

                .course-tab.active {
                    background: linear-gradient(135deg, #1e3c8b, #2d4fa7);
                    color: #fff;
                    transform: scale(1.05);
                    box-shadow: 0 8px 24px rgba(30, 60, 139, 0.3);
                }

                .course-panel {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    background: #fff;
                    border-radius: 24px;
                    overflow: hidden;
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.08);
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: all 0.7s ease 0.3s;
                }

                .course-panel.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .course-intro {
                    padding: 3rem;
                    color: #fff;
                }

                .course-intro-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .course-intro-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 18px;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                }

                .course-intro-head h3 {
                    font-size: 1.8rem;
                    font-weight: 700;
                    margin: 0;
                }

                .course-intro-sub {
                    color: rgba(255, 255, 255, 0.8);
                    margin: 0.25rem 0 0;
                }

                .course-intro-desc {
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .course-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    color: rgba(255, 255, 255, 0.9);
                }

                .course-cta {
                    background: #fff;
                    color: #1a1a1a;
                    border: none;
                    border-radius: 12px;
                    padding: 0.85rem 1.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .course-cta:hover { background: rgba(255, 255, 255, 0.9); }

                .course-levels {
                    padding: 3rem;
                }

                .course-levels h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0 0 1.5rem;
                }

                .course-level {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 14px;
                    background: #f8f9fa;
                    margin-bottom: 1rem;
                    transition: background 0.3s ease;
                }

                .course-level:hover { background: #f1f3f5; }

                .course-level-number {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.1rem;
                    flex-shrink: 0;
                }

                .course-level-body { flex: 1; }

                .course-level-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 0.25rem;
                }

                .course-level-head h5 {
                    font-weight: 700;
                    color: #1a1a1a;
                    margin: 0;
                    font-size: 1rem;
                }

                .course-level-age {
                    font-size: 0.8rem;
                    color: #6b7280;
                    background: #fff;
                    border-radius: 999px;
                    padding: 0.2rem 0.75rem;
                }

                .course-level-body p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .course-panel { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
