//! Durable card collection backed by a MongoDB collection.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use uuid::Uuid;

use super::CardStore;
use crate::error::{Error, Result};
use crate::models::{Card, CardDraft, NewCard};

const DATABASE: &str = "cardkeep";
const COLLECTION: &str = "cards";

/// Bounded so an unreachable store surfaces as an error instead of a hang.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// One MongoDB collection, `_id` = uuid string assigned on insert.
///
/// Driver errors map to 500 at the route layer and are never retried
/// there; the store's per-document atomicity bounds racing updates to
/// last-write-wins at the document level.
pub struct MongoStore {
    cards: Collection<Card>,
}

impl MongoStore {
    /// Connect using the externally supplied connection string.
    pub async fn connect(uri: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(SELECTION_TIMEOUT);
        let client = Client::with_options(options)?;
        Ok(Self {
            cards: client.database(DATABASE).collection(COLLECTION),
        })
    }
}

#[async_trait]
impl CardStore for MongoStore {
    async fn list(&self) -> Result<Vec<Card>> {
        let cursor = self.cards.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, id: &str) -> Result<Card> {
        self.cards
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn insert(&self, card: NewCard) -> Result<Card> {
        let card = card.into_card(Uuid::new_v4().to_string());
        self.cards.insert_one(&card).await?;
        Ok(card)
    }

    async fn update(&self, id: &str, patch: CardDraft) -> Result<Card> {
        // Read-merge-replace keeps the merge policy in one place
        // (Card::apply_patch) for both backings.
        let mut card = self.get(id).await?;
        card.apply_patch(&patch);
        let result = self.cards.replace_one(doc! { "_id": id }, &card).await?;
        if result.matched_count == 0 {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(card)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let result = self.cards.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(())
    }
}
