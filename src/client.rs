// ABOUTME: Authenticated WHOOP API client with token refresh and envelope pagination
// ABOUTME: Refreshes and persists tokens once at connect; a 401 anywhere means re-authenticate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # WHOOP API Client
//!
//! One command invocation makes a handful of sequential requests. Connecting
//! performs a single transactional credential update: load from the store,
//! refresh the token pair at the OAuth token endpoint, merge the rotated pair
//! into the stored client identity, and persist before any data request goes
//! out. Access tokens are short-lived and invocations are sporadic, so an
//! unconditional refresh is cheaper than tracking expiry across runs.
//!
//! Every `401` is uniformly interpreted as "token invalid or expired" and
//! surfaces as [`AppError::AuthExpired`]. There are no retries anywhere; a
//! failed call aborts the command with its status detail.

use crate::constants::{API_BASE_URL, PAGE_LIMIT, TOKEN_URL};
use crate::credentials::{CredentialStore, Credentials};
use crate::errors::{AppError, AppResult};
use crate::models::{Cycle, PaginatedResponse, Recovery, Sleep, TokenPair, UserProfile, Workout};
use crate::window::DateWindow;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::Write;
use std::time::Duration;
use tracing::{debug, info, warn};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client with the standard request and connect timeouts
#[must_use]
pub fn build_http_client() -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Authenticated client over the WHOOP developer API
#[derive(Debug)]
pub struct WhoopClient {
    http: Client,
    credentials: Credentials,
}

impl WhoopClient {
    /// Connect using stored credentials, refreshing and persisting the token
    /// pair before the first data request.
    ///
    /// The write-back goes through the store's merge-and-persist path, so the
    /// static client identity survives even though the token endpoint only
    /// returns the rotated pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCredentials`] when the store is empty,
    /// [`AppError::AuthExpired`] when the refresh is rejected, and network or
    /// API errors when the token endpoint is unreachable or failing.
    pub async fn connect(store: &CredentialStore) -> AppResult<Self> {
        let mut credentials = store.load()?;
        let http = build_http_client();

        let pair = refresh_token_pair(&http, &credentials).await?;
        credentials.merge_refreshed(pair);
        store.persist(&credentials)?;

        Ok(Self { http, credentials })
    }

    /// Client over credentials that are already fresh, for example straight
    /// out of the setup flow's code exchange. Nothing is refreshed or
    /// persisted.
    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            http: build_http_client(),
            credentials,
        }
    }

    /// All sleep activities in the query window, across every page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthExpired`] on `401`, [`AppError::Api`] on any
    /// other non-2xx status, and [`AppError::Network`] on transport failure.
    pub async fn sleep_collection(&self, window: &DateWindow) -> AppResult<Vec<Sleep>> {
        self.windowed_collection("activity/sleep", window).await
    }

    /// All workouts in the query window, across every page.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::sleep_collection`].
    pub async fn workout_collection(&self, window: &DateWindow) -> AppResult<Vec<Workout>> {
        self.windowed_collection("activity/workout", window).await
    }

    /// All cycles in the query window, across every page.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::sleep_collection`].
    pub async fn cycle_collection(&self, window: &DateWindow) -> AppResult<Vec<Cycle>> {
        self.windowed_collection("cycle", window).await
    }

    /// The server-default page of recent recovery records.
    ///
    /// Deliberately unwindowed: the upstream recovery endpoint is queried
    /// without parameters and matching happens client-side on the raw
    /// `created_at` prefix.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::sleep_collection`].
    pub async fn recent_recoveries(&self) -> AppResult<Vec<Recovery>> {
        let envelope: PaginatedResponse<Recovery> =
            self.get_json(&format!("{API_BASE_URL}/recovery")).await?;
        Ok(envelope.records)
    }

    /// The account's basic profile.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::sleep_collection`].
    pub async fn profile(&self) -> AppResult<UserProfile> {
        self.get_json(&format!("{API_BASE_URL}/user/profile/basic"))
            .await
    }

    /// Drain a windowed collection endpoint page by page until the envelope
    /// carries no `next_token`.
    async fn windowed_collection<T>(&self, endpoint: &str, window: &DateWindow) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let base = format!(
            "{API_BASE_URL}/{endpoint}?start={}&end={}&limit={PAGE_LIMIT}",
            window.api_start(),
            window.api_end()
        );

        let mut records = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut url = base.clone();
            if let Some(token) = &next_token {
                let _ = write!(url, "&nextToken={token}");
            }

            let page: PaginatedResponse<T> = self.get_json(&url).await?;
            records.extend(page.records);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        debug!("fetched {} records from {endpoint}", records.len());
        Ok(records)
    }

    /// Authenticated GET returning deserialized JSON.
    async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header("Authorization", self.credentials.auth_header())
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::AuthExpired);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!("WHOOP API returned {status} for {url}");
            return Err(AppError::api(status.as_u16(), detail));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::api(status.as_u16(), format!("unparseable response body: {e}")))
    }
}

/// Refresh the token pair at the OAuth token endpoint.
///
/// A rejected refresh (any 4xx) means the stored refresh token is no longer
/// good and the user must re-run setup.
async fn refresh_token_pair(http: &Client, credentials: &Credentials) -> AppResult<TokenPair> {
    info!("refreshing WHOOP access token");

    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", credentials.refresh_token.as_str()),
    ];

    let response = http
        .post(TOKEN_URL)
        .form(&params)
        .send()
        .await
        .map_err(|e| AppError::network(e.to_string()))?;

    let status = response.status();
    if status.is_client_error() {
        return Err(AppError::AuthExpired);
    }
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(AppError::api(status.as_u16(), detail));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::api(status.as_u16(), format!("unparseable token response: {e}")))
}
