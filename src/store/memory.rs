//! In-process card collection, non-durable, process lifetime only.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::CardStore;
use crate::error::{Error, Result};
use crate::models::{Card, CardDraft, NewCard};

/// An ordered in-memory card collection.
///
/// Insertion order is list order. Two writers racing on the same id are
/// serialized by the collection mutex but there is no per-record locking,
/// so the last write wins; fine at single-user demo scale.
pub struct MemoryStore {
    cards: Mutex<Vec<Card>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Card>>> {
        self.cards
            .lock()
            .map_err(|_| Error::Storage("card collection lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Card>> {
        Ok(self.lock()?.clone())
    }

    async fn get(&self, id: &str) -> Result<Card> {
        self.lock()?
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn insert(&self, card: NewCard) -> Result<Card> {
        let card = card.into_card(Uuid::new_v4().to_string());
        self.lock()?.push(card.clone());
        Ok(card)
    }

    async fn update(&self, id: &str, patch: CardDraft) -> Result<Card> {
        let mut cards = self.lock()?;
        let card = cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        card.apply_patch(&patch);
        Ok(card.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut cards = self.lock()?;
        let index = cards
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        cards.remove(index);
        Ok(())
    }
}
