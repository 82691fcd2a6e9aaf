// ABOUTME: OAuth2 authorization helpers for the one-time setup flow
// ABOUTME: Builds the consent URL, catches the localhost redirect, exchanges the code
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # OAuth2 Setup Helpers
//!
//! The WHOOP API uses a standard authorization-code flow. Setup prints the
//! consent URL, the user approves in a browser, and WHOOP redirects to a
//! localhost URI carrying `code` and `state` query parameters. A one-shot
//! TCP listener catches that redirect, the `state` is checked against the
//! value we generated, and the code is exchanged for the initial token pair.
//!
//! Only the setup binary drives this module; the data commands never touch
//! the authorization endpoint.

use crate::client::build_http_client;
use crate::constants::{AUTH_URL, DEFAULT_SCOPES, TOKEN_URL};
use crate::errors::{AppError, AppResult};
use crate::models::TokenPair;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::{debug, info};
use url::Url;

const SUCCESS_RESPONSE: &str = "HTTP/1.1 200 OK\r\n\
    Content-Type: text/html\r\n\r\n\
    <html><body>\
    <h1>Authorization successful!</h1>\
    <p>You can close this window and return to the terminal.</p>\
    </body></html>";

const NOT_FOUND_RESPONSE: &str = "HTTP/1.1 404 Not Found\r\n\
    Content-Type: text/plain\r\n\r\n\
    not the OAuth callback";

/// Query parameters delivered by the authorization redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    /// Single-use authorization code
    pub code: String,
    /// Echo of the `state` value sent with the consent URL
    pub state: String,
}

/// Build the consent URL the user opens in a browser.
///
/// # Errors
///
/// Returns a setup error when the authorization endpoint cannot be parsed
/// as a URL.
pub fn authorization_url(client_id: &str, redirect_uri: &str, state: &str) -> AppResult<String> {
    let mut url = Url::parse(AUTH_URL)
        .map_err(|e| AppError::setup(format!("bad authorization endpoint: {e}")))?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", DEFAULT_SCOPES)
        .append_pair("state", state);

    Ok(url.into())
}

/// Extract the authorization parameters from a redirect request path.
///
/// Returns `None` for any path that does not carry both `code` and `state`,
/// such as a browser's favicon probe.
#[must_use]
pub fn parse_callback_path(path: &str) -> Option<CallbackParams> {
    let url = Url::parse(&format!("http://localhost{path}")).ok()?;

    let mut code = None;
    let mut state = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            _ => {}
        }
    }

    Some(CallbackParams {
        code: code?,
        state: state?,
    })
}

/// Listen on localhost for the authorization redirect and return the code.
///
/// Connections that do not carry the callback parameters are answered with
/// a 404 and ignored; the wait is bounded by `wait`.
///
/// # Errors
///
/// Returns a setup error when the port cannot be bound, when no callback
/// arrives within the wait, or when the delivered `state` does not match
/// `expected_state` (a mismatch means the redirect was not a response to
/// our consent URL and must not be trusted).
pub async fn await_authorization(
    port: u16,
    expected_state: &str,
    wait: Duration,
) -> AppResult<String> {
    let listener = TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|e| AppError::setup(format!("failed to listen on port {port}: {e}")))?;
    info!("listening for the OAuth callback on port {port}");

    timeout(wait, accept_callback(&listener, expected_state))
        .await
        .map_err(|_| {
            AppError::setup(format!(
                "no authorization callback within {} seconds",
                wait.as_secs()
            ))
        })?
}

async fn accept_callback(listener: &TcpListener, expected_state: &str) -> AppResult<String> {
    loop {
        let (socket, _) = listener
            .accept()
            .await
            .map_err(|e| AppError::setup(format!("callback accept failed: {e}")))?;

        let (reader, mut writer) = socket.into_split();
        let mut reader = BufReader::new(reader);
        let mut line = String::new();
        if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
            continue;
        }

        // Request line: `GET /?code=..&state=.. HTTP/1.1`
        let params = line.split_whitespace().nth(1).and_then(parse_callback_path);
        let Some(params) = params else {
            debug!("ignoring request without callback parameters");
            writer.write_all(NOT_FOUND_RESPONSE.as_bytes()).await.ok();
            continue;
        };

        writer.write_all(SUCCESS_RESPONSE.as_bytes()).await.ok();

        if params.state != expected_state {
            return Err(AppError::setup("state mismatch in OAuth callback"));
        }
        return Ok(params.code);
    }
}

/// Exchange an authorization code for the initial token pair.
///
/// # Errors
///
/// Returns [`AppError::Network`] on transport failure and [`AppError::Api`]
/// when the token endpoint rejects the exchange.
pub async fn exchange_code(
    client_id: &str,
    client_secret: &str,
    code: &str,
    redirect_uri: &str,
) -> AppResult<TokenPair> {
    info!("exchanging authorization code for tokens");

    let params = [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", redirect_uri),
    ];

    let response = build_http_client()
        .post(TOKEN_URL)
        .form(&params)
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(AppError::api(status.as_u16(), detail));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::api(status.as_u16(), format!("unparseable token response: {e}")))
}
