use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;
use idtoken_core::{SignInError, SignInRequest, SignInResponse, TokenRecord};

use crate::modules::auth::{
    error_message, failure_report, sign_in, success_report, SignInOutcome,
};
use crate::modules::system::SignInSettings;

/// `save` of `None` asks on stdin after a successful sign-in.
pub(crate) async fn handle_sign_in(
    client: &reqwest::Client,
    settings: &SignInSettings,
    payload: SignInRequest,
    save: Option<bool>,
) -> anyhow::Result<()> {
    println!("Signing in...");
    println!("Email: {}", payload.email);
    println!();

    match sign_in(client, settings, &payload).await? {
        SignInOutcome::Authenticated(response) => {
            print!("{}", success_report(&response, &settings.api_base));
            println!();
            let save = match save {
                Some(save) => save,
                None => confirm(
                    &format!(
                        "Save token to {} file? [y/N]: ",
                        settings.output.display()
                    ),
                    &mut io::stdin().lock(),
                )?,
            };
            if save {
                persist_record(&response, &settings.output)?;
            }
            Ok(())
        }
        SignInOutcome::Rejected { status, body } => {
            print!("{}", failure_report(&body)?);
            Err(SignInError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            }
            .into())
        }
    }
}

pub(crate) fn persist_record(response: &SignInResponse, path: &Path) -> anyhow::Result<()> {
    TokenRecord::from(response).write(path, Local::now().naive_local())?;
    println!("Saved to {}", path.display());
    println!("   Source it with: source {}", path.display());
    Ok(())
}

/// Reads one answer line; only `y` (any case) counts as consent.
pub(crate) fn confirm(prompt: &str, input: &mut impl BufRead) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y")
}
