//! Field state for the lead-capture forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which logical form a submission belongs to. The form-capture service
/// routes submissions by this name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    EarlyAccess,
    DemoRequest,
}

impl FormKind {
    pub fn form_name(self) -> &'static str {
        match self {
            FormKind::EarlyAccess => "early-access",
            FormKind::DemoRequest => "demo-request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "1w")]
    Weekly,
}

impl TradingInterval {
    pub const ALL: [TradingInterval; 8] = [
        TradingInterval::OneMinute,
        TradingInterval::FiveMinutes,
        TradingInterval::FifteenMinutes,
        TradingInterval::ThirtyMinutes,
        TradingInterval::OneHour,
        TradingInterval::FourHours,
        TradingInterval::Daily,
        TradingInterval::Weekly,
    ];

    /// Value sent over the wire.
    pub fn value(self) -> &'static str {
        match self {
            TradingInterval::OneMinute => "1m",
            TradingInterval::FiveMinutes => "5m",
            TradingInterval::FifteenMinutes => "15m",
            TradingInterval::ThirtyMinutes => "30m",
            TradingInterval::OneHour => "1h",
            TradingInterval::FourHours => "4h",
            TradingInterval::Daily => "1d",
            TradingInterval::Weekly => "1w",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TradingInterval::OneMinute => "1 minute",
            TradingInterval::FiveMinutes => "5 minutes",
            TradingInterval::FifteenMinutes => "15 minutes",
            TradingInterval::ThirtyMinutes => "30 minutes",
            TradingInterval::OneHour => "1 hour",
            TradingInterval::FourHours => "4 hours",
            TradingInterval::Daily => "Daily",
            TradingInterval::Weekly => "Weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interval| interval.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    UseCase,
    TradingIntervals,
}

impl Field {
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::UseCase => "useCase",
            Field::TradingIntervals => "tradingIntervals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please describe your use case.")]
    MissingUseCase,
    #[error("Please select a trading interval.")]
    MissingTradingInterval,
}

/// Values collected by a submitted form, exactly as the user typed them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadData {
    pub email: String,
    #[serde(rename = "useCase")]
    pub use_case: String,
    #[serde(
        rename = "tradingIntervals",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub trading_interval: Option<TradingInterval>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub use_case: String,
    pub trading_interval: Option<TradingInterval>,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::UseCase => self.use_case = value,
            Field::TradingIntervals => self.trading_interval = TradingInterval::parse(&value),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.use_case.is_empty() && self.trading_interval.is_none()
    }

    /// Required-field and email-shape checks that the browser would apply
    /// before letting the form submit.
    pub fn validate(&self, require_interval: bool) -> Result<LeadData, ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.use_case.trim().is_empty() {
            return Err(ValidationError::MissingUseCase);
        }
        if require_interval && self.trading_interval.is_none() {
            return Err(ValidationError::MissingTradingInterval);
        }

        Ok(LeadData {
            email: self.email.clone(),
            use_case: self.use_case.clone(),
            trading_interval: self.trading_interval,
        })
    }
}

/// Same shape an `<input type="email">` accepts: a local part of
/// atext characters, `@`, and one or more dot-separated hostname labels.
pub fn is_valid_email(email: &str) -> bool {
    // The browser strips surrounding whitespace before checking.
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
