use async_trait::async_trait;
use gloo_net::http::Request;
use log::{error, info, warn};
use thiserror::Error;
use yew::Callback;

use crate::config;
use crate::lead::encode::FormPost;
use crate::lead::form_state::{FormKind, FormState, LeadData, ValidationError};

/// The two revisions of the lead-capture form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// Thank-you state only, nothing leaves the browser.
    Local,
    /// One POST to the static-site form-capture service.
    Netlify,
}

/// How a failed POST is surfaced to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureNotice {
    Alert,
    LogOnly,
}

pub const FAILURE_ALERT: &str = "There was an error submitting the form. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("form request failed: {0}")]
    Request(String),
}

#[async_trait(?Send)]
pub trait FormTransport {
    async fn post(&self, post: &FormPost) -> Result<(), SubmitError>;
}

/// Posts to the form-capture service that fronts the static site.
pub struct NetlifyForms;

#[async_trait(?Send)]
impl FormTransport for NetlifyForms {
    async fn post(&self, post: &FormPost) -> Result<(), SubmitError> {
        let response = Request::post(&config::form_url(post.path))
            .header("Content-Type", post.content_type)
            .body(post.body.clone())
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        settle_response(response.status())
    }
}

/// Any answer from the form host counts as delivered; only a failed
/// request is an error. Unexpected statuses are logged.
fn settle_response(status: u16) -> Result<(), SubmitError> {
    if !(200..300).contains(&status) {
        warn!("Form endpoint answered with status {}", status);
    }
    Ok(())
}

/// Validates the current fields and, in network mode, sends them once.
/// Nothing is sent when validation fails.
pub async fn submit_lead<T>(
    transport: &T,
    kind: FormKind,
    mode: SubmitMode,
    require_interval: bool,
    state: &FormState,
) -> Result<LeadData, SubmitError>
where
    T: FormTransport + ?Sized,
{
    let data = state.validate(require_interval).map_err(|e| {
        warn!("{} form rejected: {}", kind.form_name(), e);
        SubmitError::from(e)
    })?;

    if mode == SubmitMode::Netlify {
        info!("Submitting {} form", kind.form_name());
        transport.post(&FormPost::for_lead(kind, &data)).await?;
    }

    Ok(data)
}

/// Caller hooks fired once per successful submission.
#[derive(Clone, Default)]
pub struct LeadHooks {
    pub on_submit: Option<Callback<LeadData>>,
    pub on_close: Option<Callback<()>>,
}

/// Per-form state: the fields plus the one-way `submitted` flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadCapture {
    pub fields: FormState,
    pub submitted: bool,
}

impl LeadCapture {
    pub fn complete(&mut self, data: LeadData, hooks: &LeadHooks) {
        info!("Lead captured");
        if let Some(on_submit) = &hooks.on_submit {
            on_submit.emit(data);
        }
        if let Some(on_close) = &hooks.on_close {
            on_close.emit(());
        }
        self.fields.reset();
        self.submitted = true;
    }

    /// Fields stay populated so the visitor can try again. Returns the
    /// alert text to show, if any.
    pub fn fail(&self, err: &SubmitError, notice: FailureNotice) -> Option<&'static str> {
        if let SubmitError::Invalid(_) = err {
            return None;
        }
        error!("Form submission error: {}", err);
        match notice {
            FailureNotice::Alert => Some(FAILURE_ALERT),
            FailureNotice::LogOnly => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::encode::decode_form;
    use crate::lead::form_state::Field;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingTransport {
        posts: RefCell<Vec<FormPost>>,
        fail_with: Option<SubmitError>,
    }

    #[async_trait(?Send)]
    impl FormTransport for RecordingTransport {
        async fn post(&self, post: &FormPost) -> Result<(), SubmitError> {
            self.posts.borrow_mut().push(post.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn capture_with(email: &str, use_case: &str) -> LeadCapture {
        let mut capture = LeadCapture::default();
        capture.fields.set(Field::Email, email.to_string());
        capture.fields.set(Field::UseCase, use_case.to_string());
        capture
    }

    fn recording_hooks() -> (LeadHooks, Rc<RefCell<Vec<String>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let hooks = LeadHooks {
            on_submit: Some({
                let events = events.clone();
                Callback::from(move |data: LeadData| {
                    events
                        .borrow_mut()
                        .push(format!("submit:{}:{}", data.email, data.use_case))
                })
            }),
            on_close: Some({
                let events = events.clone();
                Callback::from(move |_| events.borrow_mut().push("close".to_string()))
            }),
        };
        (hooks, events)
    }

    #[test]
    fn single_submit_sends_one_post_and_fires_hooks_in_order() {
        let transport = RecordingTransport::default();
        let mut capture = capture_with("a@b.com", "day trading");
        let (hooks, events) = recording_hooks();

        let data = tokio_test::block_on(submit_lead(
            &transport,
            FormKind::EarlyAccess,
            SubmitMode::Netlify,
            false,
            &capture.fields,
        ))
        .unwrap();
        capture.complete(data, &hooks);

        let posts = transport.posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].path, "/");
        assert_eq!(
            posts[0].body,
            "form-name=early-access&email=a%40b.com&useCase=day%20trading"
        );
        assert_eq!(
            *events.borrow(),
            vec!["submit:a@b.com:day trading".to_string(), "close".to_string()]
        );
        assert!(capture.fields.is_empty());
        assert!(capture.submitted);
    }

    #[test]
    fn decoded_body_reproduces_fields() {
        let transport = RecordingTransport::default();
        let capture = capture_with("trader@desk.example", "Options & futures, 5% risk");

        tokio_test::block_on(submit_lead(
            &transport,
            FormKind::DemoRequest,
            SubmitMode::Netlify,
            false,
            &capture.fields,
        ))
        .unwrap();

        let decoded = decode_form(&transport.posts.borrow()[0].body);
        assert_eq!(
            decoded,
            vec![
                ("form-name".to_string(), "demo-request".to_string()),
                ("email".to_string(), "trader@desk.example".to_string()),
                ("useCase".to_string(), "Options & futures, 5% risk".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_fields_never_reach_the_network() {
        let transport = RecordingTransport::default();

        for (email, use_case) in [("", "day trading"), ("a@b.com", ""), ("not-an-email", "x")] {
            let capture = capture_with(email, use_case);
            let result = tokio_test::block_on(submit_lead(
                &transport,
                FormKind::EarlyAccess,
                SubmitMode::Netlify,
                false,
                &capture.fields,
            ));
            assert!(matches!(result, Err(SubmitError::Invalid(_))));
        }

        assert!(transport.posts.borrow().is_empty());
    }

    #[test]
    fn local_mode_only_flips_submitted() {
        let transport = RecordingTransport::default();
        let mut capture = capture_with("a@b.com", "swing trading");
        capture.fields.set(Field::TradingIntervals, "1h".to_string());

        let data = tokio_test::block_on(submit_lead(
            &transport,
            FormKind::EarlyAccess,
            SubmitMode::Local,
            true,
            &capture.fields,
        ))
        .unwrap();
        capture.complete(data, &LeadHooks::default());

        assert!(transport.posts.borrow().is_empty());
        assert!(capture.submitted);
        assert!(capture.fields.is_empty());
    }

    #[test]
    fn failure_keeps_fields_and_alerts_once() {
        let transport = RecordingTransport {
            fail_with: Some(SubmitError::Request("offline".to_string())),
            ..Default::default()
        };
        let capture = capture_with("a@b.com", "day trading");
        let before = capture.clone();

        let err = tokio_test::block_on(submit_lead(
            &transport,
            FormKind::DemoRequest,
            SubmitMode::Netlify,
            false,
            &capture.fields,
        ))
        .unwrap_err();

        assert_eq!(transport.posts.borrow().len(), 1);
        assert_eq!(capture.fail(&err, FailureNotice::Alert), Some(FAILURE_ALERT));
        assert_eq!(capture.fail(&err, FailureNotice::LogOnly), None);
        assert_eq!(capture, before);
    }

    #[test]
    fn error_statuses_still_count_as_delivered() {
        for status in [200, 204, 303, 404, 500] {
            assert_eq!(settle_response(status), Ok(()), "{status}");
        }
    }

    #[test]
    fn repeated_submit_is_not_deduplicated() {
        let transport = RecordingTransport::default();
        let capture = capture_with("a@b.com", "day trading");

        for _ in 0..2 {
            tokio_test::block_on(submit_lead(
                &transport,
                FormKind::EarlyAccess,
                SubmitMode::Netlify,
                false,
                &capture.fields,
            ))
            .unwrap();
        }

        assert_eq!(transport.posts.borrow().len(), 2);
    }
}
