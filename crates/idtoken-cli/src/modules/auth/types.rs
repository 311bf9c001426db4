use idtoken_core::SignInResponse;
use reqwest::StatusCode;

pub(crate) enum SignInOutcome {
    Authenticated(SignInResponse),
    /// Non-2xx status with a JSON body.
    Rejected {
        status: StatusCode,
        body: serde_json::Value,
    },
}
