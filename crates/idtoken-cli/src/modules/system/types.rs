use std::path::PathBuf;

/// Resolved configuration for one sign-in run.
#[derive(Debug, Clone)]
pub(crate) struct SignInSettings {
    pub endpoint: String,
    pub api_key: String,
    pub api_base: String,
    pub output: PathBuf,
}
