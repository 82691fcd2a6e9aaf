// ABOUTME: Application constants for WHOOP API endpoints, OAuth, and report thresholds
// ABOUTME: Centralizes endpoint URLs and magic values to eliminate hardcoded strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants grouped by domain.

/// WHOOP developer API base URL (v2)
pub const API_BASE_URL: &str = "https://api.prod.whoop.com/developer/v2";

/// OAuth2 authorization endpoint
pub const AUTH_URL: &str = "https://api.prod.whoop.com/oauth/oauth2/auth";

/// OAuth2 token endpoint (code exchange and refresh)
pub const TOKEN_URL: &str = "https://api.prod.whoop.com/oauth/oauth2/token";

/// Default OAuth scopes (space-separated as per WHOOP API requirements)
/// - `offline`: required for refresh tokens
/// - `read:profile`: access to user profile information
/// - `read:workout`: access to workout/activity data
/// - `read:sleep`: access to sleep data
/// - `read:recovery`: access to recovery scores
/// - `read:cycles`: access to cycle data (daily strain)
pub const DEFAULT_SCOPES: &str =
    "offline read:profile read:workout read:sleep read:recovery read:cycles";

/// Credential file name, resolved relative to the working directory
pub const CREDENTIALS_FILE: &str = ".whoop_credentials.json";

/// Default localhost port for the one-time OAuth callback listener
pub const DEFAULT_CALLBACK_PORT: u16 = 1234;

/// Page size for windowed collection queries
pub const PAGE_LIMIT: u32 = 25;

/// Timestamp format the WHOOP API expects for window bounds
pub const API_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Fallback timezone offset when a record declares none
pub const UTC_OFFSET: &str = "+00:00";

/// Recovery scores at or above this threshold are in the green zone
pub const RECOVERY_GREEN_THRESHOLD: f64 = 67.0;

/// Recovery scores at or above this threshold (but below green) are yellow
pub const RECOVERY_YELLOW_THRESHOLD: f64 = 34.0;

/// Kilojoules per dietary calorie, for energy conversion in reports
pub const KILOJOULES_PER_KCAL: f64 = 4.184;
