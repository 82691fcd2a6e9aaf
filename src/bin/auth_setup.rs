// ABOUTME: One-time OAuth authorization flow: browser consent, local callback, token persist
// ABOUTME: Stores access/refresh tokens plus the app identity in .whoop_credentials.json
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `whoop-auth-setup` - interactive one-time setup for the WHOOP CLI.
//!
//! Prints a consent URL, waits for the OAuth redirect on a local port,
//! exchanges the authorization code for tokens, persists them alongside the
//! app identity, and verifies the stored credentials with a profile fetch.

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing::info;
use whoop_cli::client::WhoopClient;
use whoop_cli::constants::DEFAULT_CALLBACK_PORT;
use whoop_cli::credentials::{CredentialStore, Credentials};
use whoop_cli::oauth;

/// How long the callback listener waits for the browser redirect.
const AUTHORIZATION_WAIT: Duration = Duration::from_secs(180);

#[derive(Parser)]
#[command(name = "whoop-auth-setup")]
#[command(about = "Set up OAuth authentication for the WHOOP CLI")]
#[command(
    long_about = "Runs the one-time WHOOP OAuth flow: prints a consent URL, listens for the \
                  redirect on a local port, and stores the resulting tokens in \
                  .whoop_credentials.json in the current directory."
)]
struct Cli {
    /// OAuth client ID (falls back to WHOOP_CLIENT_ID)
    #[arg(long)]
    client_id: Option<String>,

    /// OAuth client secret (falls back to WHOOP_CLIENT_SECRET)
    #[arg(long)]
    client_secret: Option<String>,

    /// Callback port; must match the redirect URI registered with the app
    #[arg(long, default_value_t = DEFAULT_CALLBACK_PORT)]
    port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "warn" })
        .with_writer(std::io::stderr)
        .init();

    let client_id = resolve_setting(cli.client_id, "WHOOP_CLIENT_ID", "--client-id")?;
    let client_secret =
        resolve_setting(cli.client_secret, "WHOOP_CLIENT_SECRET", "--client-secret")?;

    run_setup(client_id, client_secret, cli.port).await
}

/// Flag value if given, environment variable otherwise.
fn resolve_setting(flag: Option<String>, env_var: &str, flag_name: &str) -> Result<String> {
    flag.or_else(|| std::env::var(env_var).ok())
        .with_context(|| format!("missing OAuth app credential: set {env_var} or pass {flag_name}"))
}

async fn run_setup(client_id: String, client_secret: String, port: u16) -> Result<()> {
    info!("Setting up WHOOP OAuth authentication...");

    // The redirect URI has no path component; WHOOP apps are registered
    // with a bare localhost URI and the redirect lands on "/".
    let redirect_uri = format!("http://localhost:{port}");
    let state = uuid::Uuid::new_v4().to_string();
    let auth_url = oauth::authorization_url(&client_id, &redirect_uri, &state)?;

    println!("\nPlease visit this URL to authorize the application:");
    println!("{auth_url}\n");

    let code = oauth::await_authorization(port, &state, AUTHORIZATION_WAIT).await?;

    info!("Received authorization code, exchanging for tokens...");
    let pair = oauth::exchange_code(&client_id, &client_secret, &code, &redirect_uri).await?;
    let refresh_token = pair.refresh_token.context(
        "no refresh token in the response; check that the WHOOP app allows the 'offline' scope",
    )?;

    let credentials = Credentials {
        access_token: pair.access_token,
        refresh_token,
        client_id,
        client_secret,
    };

    let store = CredentialStore::new();
    store.persist(&credentials)?;

    println!("✅ Authentication successful!");
    println!("Credentials saved to: {}", store.path().display());

    println!("\nTesting connection...");
    let client = WhoopClient::with_credentials(credentials);
    let profile = client.profile().await?;
    println!("Connected as: {} {}", profile.first_name, profile.last_name);
    println!("Email: {}", profile.email);

    println!("\nSetup complete! You can now run 'whoop'.");
    Ok(())
}
