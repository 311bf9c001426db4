use clap::{ArgAction, Parser};
use idtoken_core::{DEFAULT_API_BASE, DEFAULT_RECORD_FILE, DEFAULT_SIGN_IN_ENDPOINT};

#[derive(Parser)]
#[command(name = "idtoken")]
#[command(about = "Sign in with email and password and print the identity token")]
pub struct Cli {
    #[arg(env = "FIREBASE_EMAIL")]
    pub email: Option<String>,
    #[arg(env = "FIREBASE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Ignored, like any further argv after the password.
    #[arg(hide = true)]
    pub extra: Vec<String>,
    #[arg(
        long,
        env = "IDTOKEN_API_KEY",
        hide_env_values = true,
        help = "Web API key (falls back to FIREBASE_API_KEY, then the built-in key)"
    )]
    pub api_key: Option<String>,
    #[arg(long, env = "IDTOKEN_ENDPOINT", default_value = DEFAULT_SIGN_IN_ENDPOINT)]
    pub endpoint: String,
    #[arg(
        long,
        env = "IDTOKEN_API_BASE",
        default_value = DEFAULT_API_BASE,
        help = "Base URL used in the example curl command"
    )]
    pub api_base: String,
    #[arg(long, env = "IDTOKEN_OUTPUT", default_value = DEFAULT_RECORD_FILE)]
    pub output: String,
    #[arg(long, conflicts_with = "no_save", help = "Save the token file without asking")]
    pub save: bool,
    #[arg(long, help = "Skip the save prompt")]
    pub no_save: bool,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// endpoints and invalid TLS certificates")]
    pub insecure: bool,
}

impl Cli {
    /// `None` leaves the decision to the interactive prompt.
    pub fn save_choice(&self) -> Option<bool> {
        if self.save {
            Some(true)
        } else if self.no_save {
            Some(false)
        } else {
            None
        }
    }
}
