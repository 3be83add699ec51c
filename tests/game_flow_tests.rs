//! End-to-end play on the standard board.

mod common;

use deadwood::rules::winners;
use deadwood::{
    ActionKind, Command, GameBuilder, GameError, GameManager, GameRng, GameResult, LocationId,
    Player, PlayerId, RuleError,
};
use rustc_hash::FxHashSet;

use common::{catalog, init_tracing, scripted_game};

#[test]
fn test_on_card_success_scenario() {
    init_tracing();
    let mut game = scripted_game(2, vec![4]);

    let saloon = game.move_to("Saloon").unwrap();
    game.take_role("Lead 10").unwrap();
    game.end_turn().unwrap();
    game.move_to("Saloon").unwrap();
    game.end_turn().unwrap();

    let takes_before = game.board().set(saloon).unwrap().remaining_takes().len();
    let outcome = game.act().unwrap();
    assert!(outcome.success);
    assert!(outcome.total >= 4);

    let actor = game.current_player();
    assert_eq!(actor.credits, 2);
    assert_eq!(actor.dollars, 0);
    assert_eq!(
        game.board().set(saloon).unwrap().remaining_takes().len(),
        takes_before - 1
    );
}

#[test]
fn test_end_turn_cycles_every_seat() {
    for players in 2..=8 {
        let mut game = scripted_game(players, vec![1]);
        for _ in 0..players {
            game.move_to("Hotel").unwrap();
            game.end_turn().unwrap();
            let previous = (game.current_player_id().index() + players - 1) % players;
            assert!(game.players()[previous].flags.is_clear());
        }
        assert_eq!(game.current_player_id(), PlayerId::new(0));
    }
}

#[test]
fn test_taken_role_is_hidden_from_others() {
    let mut game = scripted_game(3, vec![1]);
    game.move_to("Main Street").unwrap();
    let id = game.take_role("Railroad Worker").unwrap();
    game.end_turn().unwrap();

    game.move_to("Main Street").unwrap();
    assert!(game.available_roles().iter().all(|r| r.id != id));
    assert_eq!(
        game.take_role("Railroad Worker").unwrap_err(),
        GameError::Rule(RuleError::RoleUnavailable("Railroad Worker".into()))
    );
}

#[test]
fn test_scoring_scenario() {
    let trailer = LocationId::new(0);
    let players = vec![
        Player::new(PlayerId::new(0), 1, 10, 0, trailer),
        Player::new(PlayerId::new(1), 3, 0, 10, trailer),
    ];
    assert_eq!(players[0].score(), 15);
    assert_eq!(players[1].score(), 25);
    assert_eq!(winners(&players), Some(GameResult::Winner(PlayerId::new(1))));
}

#[test]
fn test_wrapped_set_refuses_roles() {
    // Jail has a single take; a six always lands it.
    let mut game = scripted_game(2, vec![6]);
    game.move_to("Main Street").unwrap();
    game.end_turn().unwrap();
    game.end_turn().unwrap();
    let jail = game.move_to("Jail").unwrap();
    game.end_turn().unwrap();
    game.end_turn().unwrap();

    // Rank 1 cannot take the off-card parts, so go for the card.
    let lead = game
        .available_roles()
        .into_iter()
        .find(|r| r.on_card && r.rank == 1)
        .unwrap();
    game.take_role(&lead.name).unwrap();
    game.end_turn().unwrap();
    game.end_turn().unwrap();

    let outcome = game.act().unwrap();
    assert!(outcome.wrap.is_some());
    assert!(outcome.bonus_awarded);
    assert!(game.board().set(jail).unwrap().is_wrapped());
    assert_eq!(game.open_scenes(), 9);
    assert!(!game.current_player().has_role());
    assert_eq!(game.current_player().practice_chips, 0);

    game.end_turn().unwrap();
    game.end_turn().unwrap();
    assert_eq!(game.current_player().location, jail);
    assert!(!game.available_actions().contains(ActionKind::TakeRole));
    assert!(game.available_roles().is_empty());

    let scene = game.cards().into_iter().find(|c| c.set == jail).unwrap();
    assert!(scene.wrapped);
    assert_eq!(scene.image, deadwood::cards::CARD_BACK_IMAGE);
}

fn check_invariants(game: &GameManager) {
    let mut held = FxHashSet::default();
    for player in game.players() {
        if let Some(id) = player.role {
            assert!(held.insert(id), "{id:?} held twice");
            assert!(game.board().role(id).unwrap().taken);
            assert_eq!(id.location, player.location);
            let scene = game.board().set(id.location).unwrap().scene().unwrap();
            assert!(!scene.wrapped);
            assert!(player.practice_chips < scene.budget.max(1));
        }
        assert!((1..=6).contains(&player.rank));
    }

    let open = game.open_scenes();
    assert!(open >= 1 && open <= game.board().total_sets());

    for (_, set) in game.board().sets() {
        let wrapped = set.scene().is_some_and(|s| s.wrapped);
        assert_eq!(wrapped, set.remaining_takes().is_empty());
    }
}

/// Deterministic greedy policy: act, else cast, else upgrade, else wander.
fn pick(game: &GameManager, rng: &mut GameRng) -> Command {
    let legal = game.legal_commands();
    let preferred = legal
        .iter()
        .find(|c| matches!(c, Command::Act))
        .or_else(|| legal.iter().find(|c| matches!(c, Command::TakeRole { .. })))
        .or_else(|| legal.iter().find(|c| matches!(c, Command::Upgrade { .. })));
    if let Some(command) = preferred {
        return command.clone();
    }

    let moves: Vec<&Command> = legal
        .iter()
        .filter(|c| matches!(c, Command::Move { .. }))
        .collect();
    if moves.is_empty() {
        Command::EndTurn
    } else {
        let i = rng.roll_range(1..=moves.len() as u8) as usize - 1;
        moves[i].clone()
    }
}

#[test]
fn test_game_to_completion() {
    init_tracing();
    for players in 2..=8 {
        let mut game = GameBuilder::standard(catalog(40))
            .player_count(players)
            .seed(players as u64)
            .build()
            .unwrap();
        let mut policy_rng = GameRng::new(99);
        let total_days = game.days();
        let mut days_seen = 1;

        let mut steps = 0;
        while !game.is_over() {
            let command = pick(&game, &mut policy_rng);
            let outcome = game.apply(&command);
            assert!(outcome.is_ok(), "{command:?} rejected: {outcome:?}");
            check_invariants(&game);

            if game.days() < total_days && !game.is_over() {
                days_seen = days_seen.max(game.day());
            }

            steps += 1;
            assert!(steps < 200_000, "game with {players} players did not finish");
        }

        assert_eq!(game.days(), 0);
        assert_eq!(days_seen, total_days);
        assert!(game.available_actions().is_empty());
        assert_eq!(
            game.apply(&Command::EndTurn).unwrap_err(),
            GameError::Rule(RuleError::GameOver)
        );

        let result = game.result().unwrap();
        let ranking = game.score_game();
        assert_eq!(ranking.len(), players);
        assert!(result.is_winner(ranking[0].player));
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(game.history().len(), steps);
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut game = GameBuilder::standard(catalog(40)).seed(seed).build().unwrap();
        let mut rng = GameRng::new(1);
        while !game.is_over() {
            let command = pick(&game, &mut rng);
            game.apply(&command).unwrap();
        }
        game.score_game()
    };
    assert_eq!(play(5), play(5));
}
