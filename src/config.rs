use log::Level;

use crate::lead::submit::SubmitMode;

/// Form submissions go to the page's own origin; the static host captures them.
pub const FORM_ENDPOINT_BASE: &str = "";
pub const FORM_PATH: &str = "/";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fraction of the element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const DEMO_CONFIRMATION_MS: u32 = 5_000;

#[cfg(feature = "local-early-access")]
pub fn early_access_mode() -> SubmitMode {
    SubmitMode::Local
}

#[cfg(not(feature = "local-early-access"))]
pub fn early_access_mode() -> SubmitMode {
    SubmitMode::Netlify
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Request URL for a form post: origin-relative in every build profile.
pub fn form_url(path: &str) -> String {
    format!("{}{}", FORM_ENDPOINT_BASE, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_posts_target_origin_root() {
        assert_eq!(form_url(FORM_PATH), "/");
    }
}
