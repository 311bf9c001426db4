pub(crate) mod config;
pub(crate) mod types;

pub(crate) use config::{credentials_from, resolve_settings};
pub(crate) use types::SignInSettings;
