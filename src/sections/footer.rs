use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::contact::{
    drive_submission, BrowserSleep, FormStatus, HttpTransport, LeadForm, SubmissionGate,
};
use crate::content::{ADDRESS, CONTACT_EMAIL, FOOTER_COURSES, PHONE_NUMBER, WECHAT_ID};
use crate::sections::navbar::scroll_to;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("首页", "#hero"),
    ("课程介绍", "#courses"),
    ("师资团队", "#teachers"),
    ("综评赛事", "#competitions"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let form = use_state(LeadForm::default);
    let status = use_state(|| FormStatus::Idle);
    // Shared across renders so a repeat trigger during a submission is a no-op.
    let gate = use_mut_ref(SubmissionGate::default);

    let set_field = |apply: fn(&mut LeadForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_name = set_field(|form, value| form.name = value);
    let on_phone = set_field(|form, value| form.phone = value);
    let on_grade = set_field(|form, value| form.grade = value);

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let gate = gate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lead = (*form).clone();
            let gate = gate.borrow().clone();
            let publish = {
                let form = form.clone();
                let status = status.clone();
                move |next: FormStatus| {
                    if matches!(next, FormStatus::Success) {
                        form.set(LeadForm::default());
                    }
                    status.set(next);
                }
            };

            spawn_local(async move {
                let transport = HttpTransport::new(config::get_api_base_url());
                drive_submission(&gate, &transport, &BrowserSleep, &lead, publish).await;
            });
        })
    };

    let quick_link = |label: &'static str, href: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(href);
        });
        html! {
            <li><a href={href} {onclick}>{"› "}{label}</a></li>
        }
    };

    let is_submitting = matches!(*status, FormStatus::Submitting);
    let is_success = matches!(*status, FormStatus::Success);
    let submit_label = if is_submitting {
        "提交中..."
    } else if is_success {
        "✔ 已提交"
    } else {
        "立即预约 ›"
    };

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-cta-band">
                <div class="section-inner footer-cta-grid">
                    <div class="footer-cta-copy">
                        <h2>{"立即开始您的"}<span class="orange">{"科创之旅"}</span></h2>
                        <p>{"专业团队为您量身定制学习计划，助力综评背景提升"}</p>
                        <div class="footer-cta-contacts">
                            <div class="footer-cta-contact">
                                <div class="footer-cta-contact-icon">{"📞"}</div>
                                <div>
                                    <div class="footer-cta-contact-label">{"咨询电话"}</div>
                                    <div class="footer-cta-contact-value">{PHONE_NUMBER}</div>
                                </div>
                            </div>
                            <div class="footer-cta-contact">
                                <div class="footer-cta-contact-icon">{"💬"}</div>
                                <div>
                                    <div class="footer-cta-contact-label">{"微信咨询"}</div>
                                    <div class="footer-cta-contact-value">{WECHAT_ID}</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="lead-form-card">
                        <h3>{"预约免费试听"}</h3>
                        <form onsubmit={onsubmit}>
                            <div class="lead-form-row">
                                <input
                                    type="text"
                                    placeholder="您的姓名"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                    disabled={is_submitting}
                                />
                                <input
                                    type="tel"
                                    placeholder="联系电话"
                                    value={form.phone.clone()}
                                    oninput={on_phone}
                                    disabled={is_submitting}
                                />
                            </div>
                            <input
                                type="text"
                                placeholder="孩子年级"
                                value={form.grade.clone()}
                                oninput={on_grade}
                                disabled={is_submitting}
                            />

                            if let FormStatus::Error(message) = &*status {
                                <div class="lead-form-error">
                                    {"✕ "}{message}
                                </div>
                            }

                            if is_success {
                                <div class="lead-form-success">
                                    {"✔ 提交成功！我们会尽快联系您"}
                                </div>
                            }

                            <button
                                type="submit"
                                class="lead-form-submit"
                                disabled={is_submitting || is_success}
                            >
                                {submit_label}
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <div class="section-inner footer-main">
                <div class="footer-brand">
                    <div class="footer-brand-head">
                        <div class="footer-brand-mark">{"一"}</div>
                        <div>
                            <div class="footer-brand-name">{"一简科创"}</div>
                            <div class="footer-brand-slogan">{"以简驭繁，决胜综评"}</div>
                        </div>
                    </div>
                    <p>{"专注上海地区综合素质评价，提供人工智能、软件编程、硬件创新等专业课程。"}</p>
                </div>

                <div class="footer-column">
                    <h4>{"快速链接"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|&(label, href)| quick_link(label, href)) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"课程体系"}</h4>
                    <ul>
                        { for FOOTER_COURSES.iter().map(|course| html! {
                            <li><span>{*course}</span></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"联系我们"}</h4>
                    <ul class="footer-contact-list">
                        <li>
                            <span class="footer-contact-label">{"📞 电话"}</span>
                            <span>{PHONE_NUMBER}</span>
                        </li>
                        <li>
                            <span class="footer-contact-label">{"💬 微信"}</span>
                            <span>{WECHAT_ID}</span>
                        </li>
                        <li>
                            <span class="footer-contact-label">{"📧 邮箱"}</span>
                            <span>{CONTACT_EMAIL}</span>
                        </li>
                        <li>
                            <span class="footer-contact-label">{"📍 地址"}</span>
                            <span>{ADDRESS}</span>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="section-inner footer-bottom-row">
                    <span>{"© 2024 一简科创. All rights reserved."}</span>
                    <div class="footer-bottom-links">
                        <a href="#">{"隐私政策"}</a>
                        <a href="#">{"服务条款"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #1a1a1a;
                    color: #fff;
                }

                .footer-cta-band {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 5rem 0;
                }

                .footer-cta-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .footer-cta-copy h2 {
                    font-size: 2.2rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .footer-cta-copy .orange { color: #f58220; }

                .footer-cta-copy p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                }

                .footer-cta-contacts {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }

                .footer-cta-contact {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .footer-cta-contact-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 14px;
                    background: rgba(245, 130, 32, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                }

                .footer-cta-contact-label {
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-cta-contact-value {
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .lead-form-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(6px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 20px;
                    padding: 2rem;
                }

                .lead-form-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .lead-form-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .lead-form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .lead-form-card input {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    color: #fff;
                    font-size: 0.95rem;
                    outline: none;
                    transition: border-color 0.3s ease;
                }

                .lead-form-card input::placeholder {
                    color: rgba(255, 255, 255, 0.5);
                }

                .lead-form-card input:focus { border-color: #f58220; }

                .lead-form-card input:disabled { opacity: 0.6; }

                .lead-form-error {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #f87171;
                    background: rgba(239, 68, 68, 0.1);
                    border-radius: 10px;
                    padding: 0.6rem 0.9rem;
                    font-size: 0.9rem;
                }

                .lead-form-success {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #4ade80;
                    background: rgba(34, 197, 94, 0.1);
                    border-radius: 10px;
                    padding: 0.6rem 0.9rem;
                    font-size: 0.9rem;
                }

                .lead-form-submit {
                    background: #f58220;
                    color: #fff;
                    border: none;
                    border-radius: 14px;
                    padding: 1.1rem;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .lead-form-submit:hover:not(:disabled) { background: #e07418; }

                .lead-form-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .footer-main {
                    display: grid;
                    grid-template-columns: 1.3fr 1fr 1fr 1.2fr;
                    gap: 3rem;
                    padding-top: 3rem;
                    padding-bottom: 3rem;
                }

                .footer-brand-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .footer-brand-mark {
                    width: 48px;
                    height: 48px;
                    border-radius: 14px;
                    background: linear-gradient(135deg, #1e3c8b, #f58220);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    font-weight: 700;
                }

                .footer-brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-brand-slogan {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                .footer-brand p {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                    line-height: 1.7;
                }

                .footer-column h4 {
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-column a {
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                    font-size: 0.9rem;
                    transition: color 0.3s ease;
                }

                .footer-column a:hover { color: #f58220; }

                .footer-column span {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                }

                .footer-contact-list li {
                    display: flex;
                    flex-direction: column;
                    gap: 0.15rem;
                }

                .footer-contact-label {
                    font-size: 0.8rem !important;
                    color: rgba(255, 255, 255, 0.4) !important;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.5rem 0;
                }

                .footer-bottom-row {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                }

                .footer-bottom-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-bottom-links a {
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-bottom-links a:hover { color: #fff; }

                @media (max-width: 1024px) {
                    .footer-cta-grid { grid-template-columns: 1fr; }
                    .footer-main { grid-template-columns: 1fr 1fr; }
                }

                @media (max-width: 640px) {
                    .footer-main { grid-template-columns: 1fr; }
                    .lead-form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
