//! Payload validation against the card constraint table.
//!
//! Checks run in field-declaration order (name, cardType, rarity,
//! description, attack, defense, abilities, img_name) and fail on the first
//! violation, so error messages are deterministic for a given payload.

use crate::error::{Error, Result};
use crate::models::{CardDraft, CardType, NewCard, Rarity};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 500;

/// Validate a full payload for card creation.
///
/// Every field is required. On success the typed insert record is
/// returned; on failure nothing has been written anywhere.
pub fn validate_new(draft: &CardDraft) -> Result<NewCard> {
    let name = require(draft.name.as_deref(), "name")?;
    check_name(name)?;
    let card_type = parse_card_type(require(draft.card_type.as_deref(), "cardType")?)?;
    let rarity = parse_rarity(require(draft.rarity.as_deref(), "rarity")?)?;
    let description = require(draft.description.as_deref(), "description")?;
    check_description(description)?;
    let attack = require_stat(draft.attack, "attack")?;
    let defense = require_stat(draft.defense, "defense")?;
    let abilities = draft.abilities.clone().ok_or_else(|| missing("abilities"))?;
    let img_name = require(draft.img_name.as_deref(), "img_name")?;
    if img_name.is_empty() {
        return Err(violation("img_name", "must not be empty"));
    }

    Ok(NewCard {
        name: name.to_string(),
        card_type,
        rarity,
        description: description.to_string(),
        attack,
        defense,
        abilities,
        img_name: img_name.to_string(),
    })
}

/// Validate a partial payload for card update.
///
/// Only fields present are checked. Empty strings count as absent under
/// the merge policy, so they are skipped here as well.
pub fn validate_patch(draft: &CardDraft) -> Result<()> {
    if let Some(name) = present(draft.name.as_deref()) {
        check_name(name)?;
    }
    if let Some(card_type) = present(draft.card_type.as_deref()) {
        parse_card_type(card_type)?;
    }
    if let Some(rarity) = present(draft.rarity.as_deref()) {
        parse_rarity(rarity)?;
    }
    if let Some(description) = present(draft.description.as_deref()) {
        check_description(description)?;
    }
    if let Some(attack) = draft.attack {
        check_stat(attack, "attack")?;
    }
    if let Some(defense) = draft.defense {
        check_stat(defense, "defense")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-field checks
// ---------------------------------------------------------------------------

fn check_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(violation(
            "name",
            format!("must be between {NAME_MIN} and {NAME_MAX} characters"),
        ));
    }
    Ok(())
}

fn check_description(description: &str) -> Result<()> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(violation(
            "description",
            format!("must be at most {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(())
}

fn check_stat(value: i64, field: &'static str) -> Result<()> {
    if value < 0 {
        return Err(violation(field, "must be a non-negative integer"));
    }
    Ok(())
}

fn parse_card_type(raw: &str) -> Result<CardType> {
    CardType::parse(raw).ok_or_else(|| {
        violation(
            "cardType",
            format!("must be one of {}", CardType::VARIANTS.join(", ")),
        )
    })
}

fn parse_rarity(raw: &str) -> Result<Rarity> {
    Rarity::parse(raw).ok_or_else(|| {
        violation(
            "rarity",
            format!("must be one of {}", Rarity::VARIANTS.join(", ")),
        )
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn missing(field: &'static str) -> Error {
    Error::Validation {
        field,
        message: "is required".to_string(),
    }
}

fn violation(field: &'static str, message: impl Into<String>) -> Error {
    Error::Validation {
        field,
        message: message.into(),
    }
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    value.ok_or_else(|| missing(field))
}

fn require_stat(value: Option<i64>, field: &'static str) -> Result<i64> {
    let value = value.ok_or_else(|| missing(field))?;
    check_stat(value, field)?;
    Ok(value)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
