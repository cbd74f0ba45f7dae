use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

/// Open/closed flag of one FAQ entry. Entries are not coupled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: bool,
}

impl AccordionState {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let state = use_state(AccordionState::default);

    let toggle = {
        let state = state.clone();
        let question = props.question.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = state.toggle();
            debug!("FAQ \"{}\" open: {}", question, next.open);
            state.set(next);
        })
    };

    html! {
        <div class={classes!("faq-item", state.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={state.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if state.open { "−" } else { "+" }}</span>
            </button>
            if state.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}
