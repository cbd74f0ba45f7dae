use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::lead::form_state::{FormKind, LeadData};
use crate::lead::submit::{FailureNotice, SubmitMode};

#[derive(Properties, PartialEq)]
pub struct DemoOverlayProps {
    pub on_close: Callback<()>,
    pub on_submit: Callback<LeadData>,
}

/// Close button: asks the host to unmount the overlay. Nothing is sent.
pub fn dismiss(on_close: &Callback<()>) {
    on_close.emit(());
}

/// Modal demo-request form. Closing it unmounts the form and with it any
/// half-typed fields.
#[function_component(DemoOverlay)]
pub fn demo_overlay(props: &DemoOverlayProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dismiss(&on_close);
        })
    };

    html! {
        <div class="overlay-backdrop">
            <div class="overlay-panel" role="dialog" aria-modal="true">
                <button type="button" class="overlay-close" onclick={close} aria-label="Close">
                    {"✕"}
                </button>
                <h2>{"Request a Demo"}</h2>
                <LeadForm
                    kind={FormKind::DemoRequest}
                    mode={SubmitMode::Netlify}
                    failure_notice={FailureNotice::Alert}
                    submit_label="Submit Request"
                    on_submit={Some(props.on_submit.clone())}
                    on_close={Some(props.on_close.clone())}
                />
            </div>
        </div>
    }
}
