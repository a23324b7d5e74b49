//! Integration test to ensure every backend endpoint declared in
//! `constants.rs` is actually exercised by the API client.
//!
//! This catches the drift where an endpoint constant is added (or renamed)
//! without a corresponding client method, or a client method starts using a
//! hard-coded path instead of the shared constant.
//!
//! Run with: cargo test --test endpoint_coverage

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Collect the names of all `*_ENDPOINT` constants from constants.rs.
fn declared_endpoint_constants() -> HashSet<String> {
    let constants_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/constants.rs");
    let content = fs::read_to_string(&constants_path).expect("Failed to read constants.rs");

    let mut names = HashSet::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("pub const ") {
            if let Some(name) = rest.split(':').next() {
                let name = name.trim();
                if name.ends_with("_ENDPOINT") {
                    names.insert(name.to_string());
                }
            }
        }
    }
    names
}

#[test]
fn every_endpoint_constant_is_used_by_the_api_client() {
    let client_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/network/api_client.rs");
    let client_src = fs::read_to_string(&client_path).expect("Failed to read api_client.rs");

    let declared = declared_endpoint_constants();
    assert!(
        !declared.is_empty(),
        "no endpoint constants found; did constants.rs move?"
    );

    let unused: Vec<&String> = declared
        .iter()
        .filter(|name| !client_src.contains(name.as_str()))
        .collect();

    assert!(
        unused.is_empty(),
        "endpoint constants with no ApiClient call site: {:?}",
        unused
    );
}

#[test]
fn api_client_has_no_hard_coded_paths() {
    let client_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/network/api_client.rs");
    let client_src = fs::read_to_string(&client_path).expect("Failed to read api_client.rs");

    for line in client_src.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("//!") {
            continue;
        }
        assert!(
            !trimmed.contains("\"/api/"),
            "hard-coded endpoint path, use a constants.rs entry instead: {}",
            trimmed
        );
    }
}
