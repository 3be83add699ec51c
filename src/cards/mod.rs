//! Card system: roles, scene cards and the deck.
//!
//! ## Key Types
//!
//! - `Role`: a castable part, on a card or fixed to a set
//! - `SceneCard`: budget, on-card roles and wrap state of one scene
//! - `Deck`: shuffled, draw-once pool of scene cards

pub mod deck;
pub mod role;
pub mod scene;

pub use deck::Deck;
pub use role::Role;
pub use scene::{SceneCard, CARD_BACK_IMAGE, MAX_BUDGET};
