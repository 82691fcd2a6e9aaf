// ABOUTME: File-backed store for OAuth tokens and static client identity
// ABOUTME: Refresh writes merge the rotated token pair without dropping client fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Credential Store
//!
//! Credentials live in a JSON file created once by the setup flow. The token
//! pair mutates on every refresh; the client identity never does. The token
//! endpoint only returns the rotated pair, so every write goes through
//! [`Credentials::merge_refreshed`] and serializes the complete struct -
//! a refresh can never leave a credential file without its client fields.

use crate::constants::CREDENTIALS_FILE;
use crate::errors::{AppError, AppResult};
use crate::models::TokenPair;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// OAuth credential set persisted between invocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token sent with every API request
    pub access_token: String,
    /// Token used to obtain a fresh access token
    pub refresh_token: String,
    /// OAuth application ID, fixed at setup time
    pub client_id: String,
    /// OAuth application secret, fixed at setup time
    pub client_secret: String,
}

impl Credentials {
    /// Authorization header value for API requests.
    ///
    /// Derivation only; refreshing is the client's job, observed through a
    /// subsequent [`CredentialStore::persist`].
    #[must_use]
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Fold a refreshed token pair into this credential set.
    ///
    /// The refresh response carries tokens only. The client identity stays
    /// untouched, and a response that omits the rotated refresh token keeps
    /// the previous one (it remains valid in that case).
    pub fn merge_refreshed(&mut self, pair: TokenPair) {
        self.access_token = pair.access_token;
        if let Some(refresh_token) = pair.refresh_token {
            self.refresh_token = refresh_token;
        }
    }
}

/// File-backed store for [`Credentials`]
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store at the default location, relative to the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(CREDENTIALS_FILE),
        }
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the credential file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load credentials from disk.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingCredentials`] when the file does not exist
    /// (the one-time setup flow has not been run), and a credential-store
    /// error when the file exists but cannot be read or parsed.
    pub fn load(&self) -> AppResult<Credentials> {
        if !self.path.exists() {
            return Err(AppError::MissingCredentials);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::credential_store(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            AppError::credential_store(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    /// Write the complete credential set to disk.
    ///
    /// Serializes to a sibling temporary file and renames it over the
    /// target, so a crash mid-write never leaves a partial credential file.
    ///
    /// # Errors
    ///
    /// Returns a credential-store error when serialization or either file
    /// operation fails.
    pub fn persist(&self, credentials: &Credentials) -> AppResult<()> {
        let json = serde_json::to_string_pretty(credentials).map_err(|e| {
            AppError::credential_store(format!("failed to serialize credentials: {e}"))
        })?;

        let staging = self.path.with_extension("tmp");
        fs::write(&staging, json).map_err(|e| {
            AppError::credential_store(format!("failed to write {}: {e}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).map_err(|e| {
            AppError::credential_store(format!("failed to replace {}: {e}", self.path.display()))
        })?;

        debug!("persisted credentials to {}", self.path.display());
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
