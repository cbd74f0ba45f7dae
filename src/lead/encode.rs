//! `application/x-www-form-urlencoded` bodies for the form-capture service.

use crate::config;
use crate::lead::form_state::{Field, FormKind, LeadData};

/// Percent-encodes each key and value and joins them as `k=v&k=v`,
/// keeping the order the pairs were given in.
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Inverse of [`encode_form`]. Undecodable pieces are kept verbatim.
pub fn decode_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(raw)
}

impl LeadData {
    /// `form-name` first, then the collected fields in form order.
    pub fn form_pairs(&self, kind: FormKind) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("form-name", kind.form_name()),
            (Field::Email.wire_name(), self.email.as_str()),
            (Field::UseCase.wire_name(), self.use_case.as_str()),
        ];
        if let Some(interval) = self.trading_interval {
            pairs.push((Field::TradingIntervals.wire_name(), interval.value()));
        }
        pairs
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPost {
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl FormPost {
    pub fn for_lead(kind: FormKind, data: &LeadData) -> Self {
        Self {
            path: config::FORM_PATH,
            content_type: config::FORM_CONTENT_TYPE,
            body: encode_form(&data.form_pairs(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::form_state::TradingInterval;
    use pretty_assertions::assert_eq;

    fn lead(email: &str, use_case: &str) -> LeadData {
        LeadData {
            email: email.to_string(),
            use_case: use_case.to_string(),
            trading_interval: None,
        }
    }

    #[test]
    fn early_access_body_matches_wire_contract() {
        let post = FormPost::for_lead(FormKind::EarlyAccess, &lead("a@b.com", "day trading"));

        assert_eq!(post.path, "/");
        assert_eq!(post.content_type, "application/x-www-form-urlencoded");
        assert_eq!(
            post.body,
            "form-name=early-access&email=a%40b.com&useCase=day%20trading"
        );
    }

    #[test]
    fn demo_request_carries_its_own_form_name() {
        let post = FormPost::for_lead(FormKind::DemoRequest, &lead("x@y.io", "swing"));
        assert!(post.body.starts_with("form-name=demo-request&"));
    }

    #[test]
    fn interval_is_appended_last_when_chosen() {
        let mut data = lead("a@b.com", "scalping");
        data.trading_interval = Some(TradingInterval::FifteenMinutes);

        assert_eq!(
            encode_form(&data.form_pairs(FormKind::EarlyAccess)),
            "form-name=early-access&email=a%40b.com&useCase=scalping&tradingIntervals=15m"
        );
    }

    #[test]
    fn decoding_reproduces_awkward_values() {
        let use_case = "FX & crypto = 50/50, 100% \"systematic\"\nsecond line ✓";
        let post = FormPost::for_lead(FormKind::EarlyAccess, &lead("o'neil+tag@b.com", use_case));

        assert_eq!(
            decode_form(&post.body),
            vec![
                ("form-name".to_string(), "early-access".to_string()),
                ("email".to_string(), "o'neil+tag@b.com".to_string()),
                ("useCase".to_string(), use_case.to_string()),
            ]
        );
    }
}
