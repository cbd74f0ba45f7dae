use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::lead::form_state::{Field, FormKind, LeadData, TradingInterval};
use crate::lead::submit::{
    submit_lead, FailureNotice, LeadCapture, LeadHooks, NetlifyForms, SubmitError, SubmitMode,
};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub kind: FormKind,
    pub mode: SubmitMode,
    #[prop_or(FailureNotice::LogOnly)]
    pub failure_notice: FailureNotice,
    /// Adds the required trading-interval select.
    #[prop_or_default]
    pub collect_intervals: bool,
    #[prop_or(String::from("Submit"))]
    pub submit_label: String,
    #[prop_or_default]
    pub on_submit: Option<Callback<LeadData>>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

pub enum LeadFormMsg {
    Set(Field, String),
    Submit,
    Finished(Result<LeadData, SubmitError>),
}

pub struct LeadForm {
    capture: LeadCapture,
    error: Option<String>,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            capture: LeadCapture::default(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            LeadFormMsg::Set(field, value) => {
                self.capture.fields.set(field, value);
                self.error = None;
                true
            }
            LeadFormMsg::Submit => {
                // No in-flight guard: every submit event issues its own request.
                let (kind, mode, require_interval) = (props.kind, props.mode, props.collect_intervals);
                let fields = self.capture.fields.clone();
                ctx.link().send_future(async move {
                    let transport = NetlifyForms;
                    LeadFormMsg::Finished(
                        submit_lead(&transport, kind, mode, require_interval, &fields).await,
                    )
                });
                false
            }
            LeadFormMsg::Finished(Ok(data)) => {
                debug!(
                    "{} payload: {}",
                    props.kind.form_name(),
                    serde_json::to_string(&data).unwrap_or_default()
                );
                let hooks = LeadHooks {
                    on_submit: props.on_submit.clone(),
                    on_close: props.on_close.clone(),
                };
                self.capture.complete(data, &hooks);
                self.error = None;
                true
            }
            LeadFormMsg::Finished(Err(err)) => {
                if let SubmitError::Invalid(reason) = &err {
                    self.error = Some(reason.to_string());
                }
                if let Some(message) = self.capture.fail(&err, props.failure_notice) {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.alert_with_message(message) {
                            warn!("Could not show failure alert: {:?}", e);
                        }
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let form_name = props.kind.form_name();

        if self.capture.submitted {
            return html! {
                <div class="lead-thanks">
                    <span class="lead-thanks-icon">{"✓"}</span>
                    <span>{"Thank you! We'll be in touch soon."}</span>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LeadFormMsg::Set(Field::Email, input.value())
        });
        let on_use_case = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            LeadFormMsg::Set(Field::UseCase, input.value())
        });
        let on_interval = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            LeadFormMsg::Set(Field::TradingIntervals, select.value())
        });

        let fields = &self.capture.fields;
        let email_id = format!("{}-email", form_name);
        let use_case_id = format!("{}-use-case", form_name);
        let selected = fields.trading_interval.map(TradingInterval::value).unwrap_or("");

        html! {
            <form
                class="lead-form"
                name={form_name}
                method="POST"
                data-netlify="true"
                data-netlify-honeypot="bot-field"
                {onsubmit}
            >
                <input type="hidden" name="form-name" value={form_name} />
                <input type="hidden" name="bot-field" />

                <div class="lead-field">
                    <label for={email_id.clone()}>{"Email Address"}</label>
                    <input
                        type="email"
                        id={email_id}
                        name={Field::Email.wire_name()}
                        required={true}
                        value={fields.email.clone()}
                        oninput={on_email}
                        placeholder="your@email.com"
                    />
                </div>

                <div class="lead-field">
                    <label for={use_case_id.clone()}>{"Use Case Description"}</label>
                    <textarea
                        id={use_case_id}
                        name={Field::UseCase.wire_name()}
                        required={true}
                        value={fields.use_case.clone()}
                        oninput={on_use_case}
                        placeholder="Describe your use case (e.g., day trading, swing trading, specific markets)"
                    />
                </div>

                if props.collect_intervals {
                    <div class="lead-field">
                        <select
                            name={Field::TradingIntervals.wire_name()}
                            required={true}
                            onchange={on_interval}
                        >
                            <option value="" disabled={true} selected={selected.is_empty()}>
                                {"Select trading intervals"}
                            </option>
                            { for TradingInterval::ALL.iter().map(|interval| html! {
                                <option value={interval.value()} selected={selected == interval.value()}>
                                    {interval.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                }

                if let Some(error) = &self.error {
                    <p class="lead-error">{error}</p>
                }

                <button type="submit" class="lead-submit">{&props.submit_label}</button>
            </form>
        }
    }
}
