// ABOUTME: Unified error handling for CLI commands and WHOOP API access
// ABOUTME: Defines the fatal error taxonomy; an empty query result is not an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling
//!
//! Every fatal condition a command can hit maps to one [`AppError`] variant.
//! Binaries print the `Display` form on stderr and exit non-zero. A date with
//! no recorded data is deliberately *not* represented here: commands surface
//! it as a report with a null data field and exit zero.

use thiserror::Error;

/// Unified error type for the application
#[derive(Debug, Error)]
pub enum AppError {
    /// No credential file on disk; the one-time setup flow has not been run
    #[error("Credentials not found. Run 'whoop-auth-setup' first.")]
    MissingCredentials,

    /// Credential file exists but could not be read, parsed, or written
    #[error("credential store error: {detail}")]
    CredentialStore {
        /// What went wrong with the file operation
        detail: String,
    },

    /// Date argument did not parse as `YYYY-MM-DD`
    #[error("Invalid date format '{input}'. Use YYYY-MM-DD.")]
    InvalidDate {
        /// The rejected argument text
        input: String,
    },

    /// The WHOOP API rejected our token (401) or the token refresh failed
    #[error("Token expired. Run 'whoop-auth-setup' to re-authenticate.")]
    AuthExpired,

    /// Non-2xx API response other than 401
    #[error("WHOOP API request failed with status {status}: {detail}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body or status text
        detail: String,
    },

    /// Transport-level failure before any HTTP status was received
    #[error("request to WHOOP API failed: {detail}")]
    Network {
        /// Underlying transport error description
        detail: String,
    },

    /// Report serialization failed
    #[error("failed to render report: {detail}")]
    Render {
        /// Underlying serialization error description
        detail: String,
    },

    /// One-time OAuth setup flow failed before credentials were stored
    #[error("authorization setup failed: {detail}")]
    Setup {
        /// What went wrong during the flow
        detail: String,
    },
}

impl AppError {
    /// Create a credential store error
    #[must_use]
    pub fn credential_store(detail: impl Into<String>) -> Self {
        Self::CredentialStore {
            detail: detail.into(),
        }
    }

    /// Create an invalid date error
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Create an API error from a status code and response detail
    #[must_use]
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Create a network transport error
    #[must_use]
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    /// Create a report rendering error
    #[must_use]
    pub fn render(detail: impl Into<String>) -> Self {
        Self::Render {
            detail: detail.into(),
        }
    }

    /// Create a setup flow error
    #[must_use]
    pub fn setup(detail: impl Into<String>) -> Self {
        Self::Setup {
            detail: detail.into(),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
