//! Tests for the reqwest-backed client.
//!
//! Transport behavior needs a network and lives outside unit tests; these
//! cover construction only.

use super::ReqwestClient;

#[test]
fn new_and_default_are_equivalent_constructors() {
    let _ = ReqwestClient::new();
    let _ = ReqwestClient::default();
}

#[test]
fn wraps_an_existing_reqwest_client() {
    let inner = reqwest::Client::new();
    let _ = ReqwestClient::from_client(inner);
}

#[test]
fn is_cheaply_cloneable() {
    let client = ReqwestClient::new();
    let _clone = client.clone();
}
