//! Shared fixtures for the cardkeep integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use cardkeep::images::ImageStore;
use cardkeep::models::CardDraft;
use cardkeep::routes::{self, AppState};
use cardkeep::store::MemoryStore;

/// Build a router over a fresh in-memory store and a scratch image root.
///
/// The caller must keep the `TempDir` alive for the duration of the test so
/// the image root is not deleted prematurely.
pub fn setup_app() -> (Router, Arc<AppState>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
        images: ImageStore::new(tmp.path()).unwrap(),
    });
    (routes::router(state.clone()), state, tmp)
}

/// A fully valid creation payload.
pub fn sample_draft() -> CardDraft {
    CardDraft {
        name: Some("Test Card".to_string()),
        card_type: Some("Creature".to_string()),
        rarity: Some("Rare".to_string()),
        description: Some("x".to_string()),
        attack: Some(10),
        defense: Some(5),
        abilities: Some(vec!["A".to_string()]),
        img_name: Some("http://x/y.png".to_string()),
    }
}

/// The sample payload as a JSON request body.
pub fn sample_json() -> serde_json::Value {
    serde_json::to_value(sample_draft()).unwrap()
}
