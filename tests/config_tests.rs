//! Board and catalog configuration from JSON.

mod common;

use deadwood::board::standard_board;
use deadwood::{BoardConfig, CardConfig, ConfigError, GameBuilder};

const BACKLOT: &str = r#"{
    "name": "Backlot",
    "locations": [
        {"name": "Trailer", "kind": {"type": "trailer"}, "neighbors": ["Saloon", "Bank"],
         "area": {"x": 900, "y": 250, "w": 194, "h": 201}},
        {"name": "Saloon", "kind": {"type": "set",
            "takes": [{"number": 1}, {"number": 2}],
            "roles": [{"name": "Reluctant Farmer", "rank": 1, "line": "I ain't so sure about this..."}]},
         "neighbors": ["Trailer", "Bank"]},
        {"name": "Bank", "kind": {"type": "set",
            "takes": [{"number": 1}],
            "roles": [{"name": "Flustered Teller", "rank": 3}]},
         "neighbors": ["Trailer", "Saloon", "Casting Office"],
         "layout": {"row_step": -120}},
        {"name": "Casting Office", "kind": {"type": "casting_office", "upgrades": [
            {"rank": 2, "currency": "dollars", "price": 4},
            {"rank": 2, "currency": "credits", "price": 5}]},
         "neighbors": ["Bank"]}
    ]
}"#;

const CARDS: &str = r#"[
    {"name": "Evil Wears a Hat", "number": 7, "budget": 4,
     "roles": [{"name": "Calamity Jane", "rank": 2}, {"name": "Bandit", "rank": 1}]},
    {"name": "Jesse James: Man of Action", "number": 61, "budget": 5,
     "roles": [{"name": "Shot in Back", "rank": 1}]}
]"#;

#[test]
fn test_game_from_json() {
    let board = BoardConfig::from_json(BACKLOT).unwrap();
    let mut cards = CardConfig::catalog_from_json(CARDS).unwrap();
    cards.extend(common::catalog(4));

    let mut game = GameBuilder::new(board, cards).seed(4).build().unwrap();
    assert_eq!(game.board().name(), "Backlot");
    assert_eq!(game.board().total_sets(), 2);
    assert_eq!(game.available_locations(), vec!["Saloon", "Bank"]);

    let bank = game.move_to("Bank").unwrap();
    let layout = game.board().location(bank).layout;
    assert_eq!(layout.row_step, -120);
    assert_eq!(layout.offset_y, 120);
}

#[test]
fn test_standard_board_survives_json() {
    let board = standard_board();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(BoardConfig::from_json(&json).unwrap(), board);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(BoardConfig::from_json("[]"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        CardConfig::catalog_from_json(r#"[{"name": "No Budget"}]"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_topology_errors_surface_from_builder() {
    let mut board = BoardConfig::from_json(BACKLOT).unwrap();
    board.locations[1].neighbors.push("Casting Office".into());
    let err = GameBuilder::new(board, common::catalog(10)).build().unwrap_err();
    assert_eq!(
        err,
        ConfigError::AsymmetricNeighbor {
            from: "Saloon".into(),
            to: "Casting Office".into()
        }
    );

    let mut board = BoardConfig::from_json(BACKLOT).unwrap();
    board.locations.retain(|l| l.name != "Trailer");
    for loc in &mut board.locations {
        loc.neighbors.retain(|n| n != "Trailer");
    }
    let err = GameBuilder::new(board, common::catalog(10)).build().unwrap_err();
    assert_eq!(err, ConfigError::TrailerCount(0));
}

#[test]
fn test_bad_card_surfaces_from_builder() {
    let mut cards = common::catalog(10);
    cards[3].budget = 0;
    let err = GameBuilder::new(BoardConfig::from_json(BACKLOT).unwrap(), cards)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBudget { budget: 0, .. }));
}
