//! Storage adapters for the card collection.
//!
//! Both backings implement [`CardStore`] and are indistinguishable from the
//! route layer's perspective: ids are store-assigned uuid-v4 strings and
//! update follows the same merge policy ([`Card::apply_patch`]).
//!
//! [`Card::apply_patch`]: crate::models::Card::apply_patch

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Card, CardDraft, NewCard};

/// Uniform CRUD interface over a card collection.
///
/// Each operation is atomic with respect to a single record. A missing id
/// surfaces as [`Error::NotFound`](crate::Error::NotFound), never a panic.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Every stored card, in storage-defined order (insertion order for
    /// the in-memory backing).
    async fn list(&self) -> Result<Vec<Card>>;

    /// A single card by id.
    async fn get(&self, id: &str) -> Result<Card>;

    /// Store a validated record under a fresh unique id and return it.
    async fn insert(&self, card: NewCard) -> Result<Card>;

    /// Merge a patch into the record with the given id and return the
    /// updated record.
    async fn update(&self, id: &str, patch: CardDraft) -> Result<Card>;

    /// Remove the record with the given id.
    async fn delete(&self, id: &str) -> Result<()>;
}
