// ABOUTME: Tests for the file-backed credential store and refresh merging
// ABOUTME: A refresh write must never drop the static client identity from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::path::Path;
use tempfile::TempDir;
use whoop_cli::credentials::{CredentialStore, Credentials};
use whoop_cli::errors::AppError;
use whoop_cli::models::TokenPair;

fn sample() -> Credentials {
    Credentials {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        client_id: "client-abc".to_owned(),
        client_secret: "secret-xyz".to_owned(),
    }
}

#[test]
fn test_persist_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at(dir.path().join("credentials.json"));

    store.persist(&sample()).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.access_token, "access-1");
    assert_eq!(loaded.refresh_token, "refresh-1");
    assert_eq!(loaded.client_id, "client-abc");
    assert_eq!(loaded.client_secret, "secret-xyz");
}

#[test]
fn test_missing_file_asks_for_setup() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at(dir.path().join("absent.json"));

    let error = store.load().unwrap_err();
    assert!(matches!(error, AppError::MissingCredentials));
    assert!(error.to_string().contains("whoop-auth-setup"));
}

#[test]
fn test_corrupt_file_is_a_store_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "{not json").unwrap();

    let error = CredentialStore::at(&path).load().unwrap_err();
    assert!(matches!(error, AppError::CredentialStore { .. }));
}

#[test]
fn test_refresh_merge_keeps_client_identity_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at(dir.path().join("credentials.json"));
    store.persist(&sample()).unwrap();

    // Token endpoint rotated the access token but returned no refresh token
    let mut credentials = store.load().unwrap();
    credentials.merge_refreshed(TokenPair {
        access_token: "access-2".to_owned(),
        refresh_token: None,
    });
    store.persist(&credentials).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["access_token"], "access-2");
    assert_eq!(raw["refresh_token"], "refresh-1");
    assert_eq!(raw["client_id"], "client-abc");
    assert_eq!(raw["client_secret"], "secret-xyz");
}

#[test]
fn test_persist_leaves_no_staging_file_behind() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::at(dir.path().join("credentials.json"));

    store.persist(&sample()).unwrap();

    assert!(store.path().exists());
    assert!(!dir.path().join("credentials.tmp").exists());
}

#[test]
fn test_default_store_uses_the_working_directory_file() {
    assert_eq!(
        CredentialStore::new().path(),
        Path::new(".whoop_credentials.json")
    );
}
