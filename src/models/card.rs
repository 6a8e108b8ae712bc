use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
}

impl CardType {
    pub const VARIANTS: [&'static str; 3] = ["Creature", "Spell", "Artifact"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Creature" => Some(Self::Creature),
            "Spell" => Some(Self::Spell),
            "Artifact" => Some(Self::Artifact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const VARIANTS: [&'static str; 4] = ["Common", "Rare", "Epic", "Legendary"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Common" => Some(Self::Common),
            "Rare" => Some(Self::Rare),
            "Epic" => Some(Self::Epic),
            "Legendary" => Some(Self::Legendary),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Card — the stored record
// ---------------------------------------------------------------------------

/// A stored card.
///
/// `id` is assigned by the storage adapter at insert and immutable
/// afterwards; it serializes as `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "cardType")]
    pub card_type: CardType,
    pub rarity: Rarity,
    pub description: String,
    pub attack: i64,
    pub defense: i64,
    pub abilities: Vec<String>,
    pub img_name: String,
}

impl Card {
    /// Merge a patch into this card.
    ///
    /// Fields present and non-empty in the patch overwrite the stored
    /// value; absent fields (and empty strings) keep the prior value. A
    /// present integer always overwrites, including 0, and a present
    /// abilities array overwrites even when empty.
    pub fn apply_patch(&mut self, patch: &CardDraft) {
        if let Some(name) = non_empty(&patch.name) {
            self.name = name.to_string();
        }
        if let Some(card_type) = patch.card_type.as_deref().and_then(CardType::parse) {
            self.card_type = card_type;
        }
        if let Some(rarity) = patch.rarity.as_deref().and_then(Rarity::parse) {
            self.rarity = rarity;
        }
        if let Some(description) = non_empty(&patch.description) {
            self.description = description.to_string();
        }
        if let Some(attack) = patch.attack {
            self.attack = attack;
        }
        if let Some(defense) = patch.defense {
            self.defense = defense;
        }
        if let Some(abilities) = &patch.abilities {
            self.abilities = abilities.clone();
        }
        if let Some(img_name) = non_empty(&patch.img_name) {
            self.img_name = img_name.to_string();
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// NewCard — a validated insert record
// ---------------------------------------------------------------------------

/// Everything but the id; produced by validation, consumed by insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub name: String,
    pub card_type: CardType,
    pub rarity: Rarity,
    pub description: String,
    pub attack: i64,
    pub defense: i64,
    pub abilities: Vec<String>,
    pub img_name: String,
}

impl NewCard {
    pub fn into_card(self, id: String) -> Card {
        Card {
            id,
            name: self.name,
            card_type: self.card_type,
            rarity: self.rarity,
            description: self.description,
            attack: self.attack,
            defense: self.defense,
            abilities: self.abilities,
            img_name: self.img_name,
        }
    }
}

// ---------------------------------------------------------------------------
// CardDraft — the raw wire payload
// ---------------------------------------------------------------------------

/// The raw payload for create and update.
///
/// Every field is optional and the enums arrive as plain strings, so the
/// validator (not the deserializer) decides what is wrong and reports the
/// first violated field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "cardType")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attack: Option<i64>,
    #[serde(default)]
    pub defense: Option<i64>,
    #[serde(default)]
    pub abilities: Option<Vec<String>>,
    #[serde(default)]
    pub img_name: Option<String>,
}
