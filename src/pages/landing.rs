use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::demo_overlay::DemoOverlay;
use crate::components::faq_item::FaqItem;
use crate::components::lead_form::LeadForm;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{self, FaqAnswer, FaqBlock};
use crate::lead::form_state::{FormKind, LeadData};

/// Whether the demo-request overlay is mounted. Every opening gets a new
/// mount key so the hosted form starts from empty fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayVisibility {
    visible: bool,
    generation: u32,
}

impl OverlayVisibility {
    pub fn is_open(self) -> bool {
        self.visible
    }

    pub fn open(self) -> Self {
        if self.visible {
            return self;
        }
        Self {
            visible: true,
            generation: self.generation.wrapping_add(1),
        }
    }

    pub fn close(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub fn mount_key(self) -> String {
        format!("demo-overlay-{}", self.generation)
    }
}

/// `on_close` for the overlay: unmounts it without touching the form.
fn overlay_closer<F>(current: OverlayVisibility, apply: F) -> Callback<()>
where
    F: Fn(OverlayVisibility) + 'static,
{
    Callback::from(move |_: ()| {
        debug!("Demo overlay closed");
        apply(current.close());
    })
}

/// Demo-request confirmation banner. Each submission re-arms it; a timer
/// from an earlier submission cannot hide a newer confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub shown: bool,
    token: u32,
}

pub enum ConfirmationAction {
    Show(u32),
    Expire(u32),
}

impl Reducible for Confirmation {
    type Action = ConfirmationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ConfirmationAction::Show(token) => Rc::new(Self { shown: true, token }),
            ConfirmationAction::Expire(token) if token == self.token => Rc::new(Self {
                shown: false,
                ..*self
            }),
            ConfirmationAction::Expire(_) => self,
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let overlay = use_state(OverlayVisibility::default);
    let confirmation = use_reducer(Confirmation::default);
    let confirmation_timer = use_mut_ref(|| None::<Timeout>);
    let confirmation_seq = use_mut_ref(|| 0u32);

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            debug!("Landing page mounted");
            || ()
        },
        (),
    );

    let open_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            overlay.set(overlay.open());
        })
    };

    let close_overlay = {
        let handle = overlay.clone();
        overlay_closer(*overlay, move |next| handle.set(next))
    };

    let demo_submitted = {
        let confirmation = confirmation.clone();
        Callback::from(move |data: LeadData| {
            info!("Demo requested ({} chars of use case)", data.use_case.len());
            let token = {
                let mut seq = confirmation_seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            confirmation.dispatch(ConfirmationAction::Show(token));
            let expire = confirmation.clone();
            // Replacing the handle drops, and so cancels, the previous timer.
            *confirmation_timer.borrow_mut() = Some(Timeout::new(config::DEMO_CONFIRMATION_MS, move || {
                expire.dispatch(ConfirmationAction::Expire(token))
            }));
        })
    };

    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page">
            <nav class="top-nav">
                <div class="nav-content">
                    <span class="nav-logo">{"📊 "}{content::PRODUCT_NAME}</span>
                    <button class="nav-demo-button" onclick={open_overlay.clone()}>
                        {"Request a Demo"}
                    </button>
                </div>
            </nav>

            if confirmation.shown {
                <div class="demo-confirmation">{"Thanks! We'll reach out to schedule your demo."}</div>
            }

            <header class="hero">
                <h1>{content::HERO_TITLE}</h1>
                <p class="hero-subtitle">{content::HERO_SUBTITLE}</p>
                <div class="hero-image">
                    <img src={content::HERO_IMAGE} alt="Trading Dashboard" loading="lazy" />
                </div>
                <div class="early-access">
                    <LeadForm
                        kind={FormKind::EarlyAccess}
                        mode={config::early_access_mode()}
                        collect_intervals={true}
                        submit_label="Get Early Access →"
                    />
                </div>
            </header>

            <Reveal class={classes!("features")}>
                <div class="feature-grid">
                    { for content::FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{feature.icon}</span>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal class={classes!("how-it-works")}>
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    { for content::STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="step">
                            <span class="step-number">{(i + 1).to_string()}</span>
                            <h3>{step.title}</h3>
                            <p>{step.body}</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal class={classes!("testimonials")}>
                <h2>{"What Traders Say"}</h2>
                { for content::TESTIMONIALS.iter().map(|t| html! {
                    <blockquote class="testimonial">
                        <p>{t.quote}</p>
                        <footer>{t.author}{", "}{t.role}</footer>
                    </blockquote>
                }) }
            </Reveal>

            <Reveal class={classes!("pricing")}>
                <h2>{"Pricing"}</h2>
                <div class="pricing-grid">
                    { for content::PRICING.iter().map(|tier| html! {
                        <div class={classes!("pricing-card", tier.highlighted.then(|| "highlighted"))}>
                            <h3>{tier.name}</h3>
                            <p class="price">{tier.price}<span class="period">{tier.period}</span></p>
                            <ul>
                                { for tier.perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
                            </ul>
                            <button class="pricing-cta" onclick={open_overlay.clone()}>{"Talk to Us"}</button>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal class={classes!("faq-section")}>
                <h2>{"Frequently Asked Questions"}</h2>
                { for content::FAQ.iter().map(|entry| html! {
                    <FaqItem question={entry.question}>
                        { render_answer(&entry.answer) }
                    </FaqItem>
                }) }
            </Reveal>

            <footer class="footer">
                <p>{format!("© {} {}. All rights reserved.", year, content::PRODUCT_NAME)}</p>
            </footer>

            if overlay.is_open() {
                <DemoOverlay key={overlay.mount_key()} on_close={close_overlay} on_submit={demo_submitted} />
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #111827, #1f2937);
                    color: #fff;
                }
                .top-nav .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }
                .nav-logo { font-size: 1.25rem; font-weight: 700; }
                .hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle { font-size: 1.25rem; color: #d1d5db; }
                .hero-image img { width: 100%; border-radius: 0.5rem; margin: 2rem 0; }
                .early-access { max-width: 32rem; margin: 0 auto; }
                .lead-form { display: flex; flex-direction: column; gap: 1rem; text-align: left; }
                .lead-field label { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }
                .lead-field input, .lead-field textarea, .lead-field select {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid #4b5563;
                    color: #fff;
                }
                .lead-field textarea { min-height: 100px; }
                .lead-submit, .nav-demo-button, .pricing-cta {
                    background: #3b82f6;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                }
                .lead-error { color: #f87171; }
                .lead-thanks { color: #4ade80; display: flex; gap: 0.5rem; justify-content: center; }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .reveal.visible { opacity: 1; transform: none; }
                .feature-grid, .steps-grid, .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .feature-card, .step, .pricing-card, .testimonial {
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                }
                .feature-icon { font-size: 2.5rem; }
                .pricing-card.highlighted { border: 1px solid #3b82f6; }
                .faq-item { border-bottom: 1px solid #374151; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: #fff;
                    padding: 1rem 0;
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .faq-answer { color: #9ca3af; padding-bottom: 1rem; }
                .footer { text-align: center; color: #9ca3af; padding: 2rem 1rem; }
                .demo-confirmation {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #065f46;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    z-index: 60;
                }
                .overlay-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }
                .overlay-panel {
                    position: relative;
                    background: #111827;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    width: 100%;
                    max-width: 28rem;
                }
                .overlay-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}

fn render_answer(answer: &FaqAnswer) -> Html {
    match answer {
        FaqAnswer::Text(text) => html! { <p>{*text}</p> },
        FaqAnswer::Rich(blocks) => blocks
            .iter()
            .map(|block| match block {
                FaqBlock::Paragraph(text) => html! { <p>{*text}</p> },
                FaqBlock::Bullets(items) => html! {
                    <ul>
                        { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                },
            })
            .collect::<Html>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::demo_overlay::dismiss;
    use crate::lead::submit::LeadCapture;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn overlay_starts_closed_and_toggles() {
        let overlay = OverlayVisibility::default();
        assert!(!overlay.is_open());
        assert!(overlay.open().is_open());
        assert!(!overlay.open().close().is_open());
        assert_eq!(overlay.open().open(), overlay.open());
    }

    #[test]
    fn closing_overlay_unmounts_without_submitting() {
        let shell = Rc::new(Cell::new(OverlayVisibility::default().open()));
        let first_mount = shell.get().mount_key();

        let on_close = {
            let shell = shell.clone();
            overlay_closer(shell.get(), move |next| shell.set(next))
        };
        dismiss(&on_close);

        assert!(!shell.get().is_open());

        // Reopening mounts the overlay under a new key, so its form is built
        // fresh instead of reusing the dismissed instance and its fields.
        shell.set(shell.get().open());
        assert!(shell.get().is_open());
        assert_ne!(shell.get().mount_key(), first_mount);
        assert!(LeadCapture::default().fields.is_empty());
    }

    #[test]
    fn stale_timer_does_not_hide_newer_confirmation() {
        let first = Rc::new(Confirmation::default()).reduce(ConfirmationAction::Show(1));
        let second = first.reduce(ConfirmationAction::Show(2));

        let after_stale = second.reduce(ConfirmationAction::Expire(1));
        assert!(after_stale.shown);

        let after_current = after_stale.reduce(ConfirmationAction::Expire(2));
        assert!(!after_current.shown);
    }
}
