use clap::{CommandFactory, Parser};
use idtoken_core::{SignInError, SignInRequest};
use tracing_subscriber::EnvFilter;

mod cli_args;
mod modules;

use crate::cli_args::Cli;
use crate::modules::auth::handle_sign_in;
use crate::modules::system::{credentials_from, resolve_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print()?;
            return Err(SignInError::InvalidArguments.into());
        }
        Err(err) => err.exit(),
    };
    init_logging(cli.verbose)?;
    let Some((email, password)) = credentials_from(&cli) else {
        print_usage();
        return Err(SignInError::MissingCredentials.into());
    };
    let settings = resolve_settings(&cli)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;

    handle_sign_in(
        &client,
        &settings,
        SignInRequest::new(email, password),
        cli.save_choice(),
    )
    .await
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_usage() {
    let usage = Cli::command().render_usage();
    eprintln!("{usage}");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  idtoken user@example.com \"s3cret-Passw0rd\"");
}
