mod actions;
pub(crate) mod http;
mod render;
pub(crate) mod types;

pub(crate) use actions::handle_sign_in;
#[cfg(test)]
pub(crate) use actions::{confirm, persist_record};
pub(crate) use http::sign_in;
pub(crate) use render::{error_message, failure_report, success_report};
pub(crate) use types::SignInOutcome;
