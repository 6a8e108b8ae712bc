pub mod card;

pub use card::{Card, CardDraft, CardType, NewCard, Rarity};
