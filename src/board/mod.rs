//! The board: location graph, per-set scene state and the standard layout.
//!
//! ## Key Types
//!
//! - `Board`: validated location graph, deck and open-scene counter
//! - `Location` / `LocationKind`: a set, the trailer or the casting office
//! - `SetState`: the dealt scene, take markers and off-card roles of a set
//!
//! ## Usage
//!
//! ```
//! use deadwood::board::{standard_board, Board};
//! use deadwood::cards::{Deck, SceneCard};
//! use deadwood::core::{CardConfig, RoleConfig};
//!
//! let config = standard_board();
//! let cards = (1..=10)
//!     .map(|i| {
//!         SceneCard::from_config(&CardConfig::new(
//!             format!("Scene {i}"),
//!             i,
//!             3,
//!             vec![RoleConfig::new("Lead", 1)],
//!         ))
//!     })
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let board = Board::new(&config, Deck::in_order(cards)).unwrap();
//! assert_eq!(board.open_scenes(), 10);
//! let trailer = board.trailer();
//! assert!(board.neighbor(trailer, "Saloon").is_some());
//! ```

pub mod graph;
pub mod location;
pub mod standard;

pub use graph::Board;
pub use location::{Location, LocationKind, SetState, Take};
pub use standard::{standard_board, UPGRADE_PRICES};
