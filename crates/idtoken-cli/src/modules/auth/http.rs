use std::time::Instant;

use idtoken_core::{SignInRequest, SignInResponse};
use tracing::{debug, info};

use crate::modules::auth::SignInOutcome;
use crate::modules::system::SignInSettings;

pub(crate) async fn sign_in(
    client: &reqwest::Client,
    settings: &SignInSettings,
    payload: &SignInRequest,
) -> anyhow::Result<SignInOutcome> {
    debug!(endpoint = %settings.endpoint, email = %payload.email, "sending sign-in request");
    let started = Instant::now();
    let response = client
        .post(&settings.endpoint)
        .query(&[("key", settings.api_key.as_str())])
        .json(payload)
        .send()
        .await?;
    let status = response.status();
    info!(
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "sign-in response"
    );

    if !status.is_success() {
        let body = response.text().await?;
        let body = serde_json::from_str(&body)
            .map_err(|_| anyhow::anyhow!("Sign-in failed: {status} {body}"))?;
        return Ok(SignInOutcome::Rejected { status, body });
    }
    Ok(SignInOutcome::Authenticated(
        response.json::<SignInResponse>().await?,
    ))
}
