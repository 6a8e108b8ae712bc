//! Validation component tests against the card constraint table.

mod common;

use cardkeep::models::{CardDraft, CardType, Rarity};
use cardkeep::validate::{validate_new, validate_patch};
use cardkeep::Error;

use common::sample_draft;

fn field_of(err: Error) -> &'static str {
    match err {
        Error::Validation { field, .. } => field,
        other => panic!("expected a validation error, got: {other}"),
    }
}

// ---------------------------------------------------------------------------
// validate_new
// ---------------------------------------------------------------------------

#[test]
fn accepts_a_fully_valid_payload() {
    let card = validate_new(&sample_draft()).unwrap();
    assert_eq!(card.name, "Test Card");
    assert_eq!(card.card_type, CardType::Creature);
    assert_eq!(card.rarity, Rarity::Rare);
    assert_eq!(card.attack, 10);
    assert_eq!(card.defense, 5);
    assert_eq!(card.abilities, vec!["A".to_string()]);
    assert_eq!(card.img_name, "http://x/y.png");
}

#[test]
fn rejects_missing_name() {
    let mut draft = sample_draft();
    draft.name = None;
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "name");
}

#[test]
fn rejects_two_character_name() {
    let mut draft = sample_draft();
    draft.name = Some("ab".to_string());
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "name");
}

#[test]
fn rejects_fifty_one_character_name() {
    let mut draft = sample_draft();
    draft.name = Some("x".repeat(51));
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "name");
}

#[test]
fn accepts_name_at_both_length_bounds() {
    let mut draft = sample_draft();
    draft.name = Some("abc".to_string());
    assert!(validate_new(&draft).is_ok());
    draft.name = Some("x".repeat(50));
    assert!(validate_new(&draft).is_ok());
}

#[test]
fn rejects_unknown_card_type() {
    let mut draft = sample_draft();
    draft.card_type = Some("Hero".to_string());
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "cardType");
}

#[test]
fn rejects_unknown_rarity() {
    let mut draft = sample_draft();
    draft.rarity = Some("Mythic".to_string());
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "rarity");
}

#[test]
fn rejects_overlong_description() {
    let mut draft = sample_draft();
    draft.description = Some("x".repeat(501));
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "description");
}

#[test]
fn rejects_negative_attack() {
    let mut draft = sample_draft();
    draft.attack = Some(-1);
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "attack");
}

#[test]
fn rejects_negative_defense() {
    let mut draft = sample_draft();
    draft.defense = Some(-5);
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "defense");
}

#[test]
fn zero_stats_are_valid() {
    let mut draft = sample_draft();
    draft.attack = Some(0);
    draft.defense = Some(0);
    assert!(validate_new(&draft).is_ok());
}

#[test]
fn rejects_missing_abilities() {
    let mut draft = sample_draft();
    draft.abilities = None;
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "abilities");
}

#[test]
fn empty_abilities_list_is_valid() {
    let mut draft = sample_draft();
    draft.abilities = Some(Vec::new());
    assert!(validate_new(&draft).is_ok());
}

#[test]
fn rejects_missing_img_name() {
    let mut draft = sample_draft();
    draft.img_name = None;
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "img_name");
}

#[test]
fn first_failing_field_wins() {
    // Both name and rarity are invalid; name is declared first.
    let mut draft = sample_draft();
    draft.name = Some("ab".to_string());
    draft.rarity = Some("Mythic".to_string());
    assert_eq!(field_of(validate_new(&draft).unwrap_err()), "name");
}

// ---------------------------------------------------------------------------
// validate_patch
// ---------------------------------------------------------------------------

#[test]
fn empty_patch_is_valid() {
    assert!(validate_patch(&CardDraft::default()).is_ok());
}

#[test]
fn patch_checks_only_present_fields() {
    let draft = CardDraft {
        attack: Some(42),
        ..Default::default()
    };
    assert!(validate_patch(&draft).is_ok());
}

#[test]
fn patch_rejects_unknown_rarity() {
    let draft = CardDraft {
        rarity: Some("Mythic".to_string()),
        ..Default::default()
    };
    assert_eq!(field_of(validate_patch(&draft).unwrap_err()), "rarity");
}

#[test]
fn patch_rejects_negative_attack() {
    let draft = CardDraft {
        attack: Some(-1),
        ..Default::default()
    };
    assert_eq!(field_of(validate_patch(&draft).unwrap_err()), "attack");
}

#[test]
fn patch_treats_empty_strings_as_absent() {
    // An empty name would fail the length check if it counted as present;
    // under the merge policy it means "keep the stored value".
    let draft = CardDraft {
        name: Some(String::new()),
        description: Some(String::new()),
        ..Default::default()
    };
    assert!(validate_patch(&draft).is_ok());
}
