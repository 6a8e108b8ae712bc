//! cardkeep — a small card record service.
//!
//! Stores a single collection of trading-card records and exposes CRUD over
//! HTTP. The storage backing is pluggable behind the [`CardStore`] trait:
//! an in-process collection for demos and tests, or a MongoDB collection
//! for durability. An optional image upload can ride along with a card
//! payload; accepted files are materialized under a local image root and
//! the card's `img_name` is rewritten to point at them.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cardkeep::images::ImageStore;
//! use cardkeep::routes::{self, AppState};
//! use cardkeep::store::MemoryStore;
//!
//! let state = Arc::new(AppState {
//!     store: Arc::new(MemoryStore::new()),
//!     images: ImageStore::new("images").unwrap(),
//! });
//! let app = routes::router(state);
//! # let _ = app;
//! ```

pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod routes;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use models::{Card, CardDraft, CardType, NewCard, Rarity};
pub use store::{CardStore, MemoryStore, MongoStore};
