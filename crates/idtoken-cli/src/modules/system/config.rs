use std::path::PathBuf;

use idtoken_core::DEFAULT_API_KEY;

use super::types::SignInSettings;
use crate::cli_args::Cli;

const FIREBASE_API_KEY_ENV: &str = "FIREBASE_API_KEY";

pub(crate) fn resolve_settings(cli: &Cli) -> anyhow::Result<SignInSettings> {
    let endpoint = cli.endpoint.trim().to_string();
    ensure_secure_addr(&endpoint, cli.insecure)?;
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var(FIREBASE_API_KEY_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        anyhow::bail!("api key is empty (--api-key, IDTOKEN_API_KEY or FIREBASE_API_KEY)");
    }
    let output = cli.output.trim();
    if output.is_empty() {
        anyhow::bail!("output path is empty (IDTOKEN_OUTPUT or --output)");
    }
    Ok(SignInSettings {
        endpoint,
        api_key,
        api_base: cli.api_base.trim_end_matches('/').to_string(),
        output: PathBuf::from(output),
    })
}

/// Both positionals, or `None` when either is missing or blank.
pub(crate) fn credentials_from(cli: &Cli) -> Option<(String, String)> {
    let email = cli
        .email
        .as_deref()
        .filter(|value| !value.trim().is_empty())?;
    let password = cli
        .password
        .as_deref()
        .filter(|value| !value.trim().is_empty())?;
    Some((email.to_string(), password.to_string()))
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}
