//! The rules engine.
//!
//! `GameManager` owns players, board and dice, and is the only thing that
//! mutates them. Every command validates first and mutates second, so a
//! rejected command leaves the game exactly as it was.
//!
//! ## Turn structure
//!
//! A player without a role may move and then take a role. A player with a
//! role may either act or rehearse. Ending the turn clears the per-turn
//! flags and passes play to the next seat.
//!
//! ## Days
//!
//! Each successful act consumes a take. When a set runs out of takes its
//! scene wraps and pays out. Once a single scene is left open the day ends:
//! everyone returns to the trailer and fresh cards are dealt. After the last
//! day the game is over and commands are refused.

use im::Vector;
use tracing::{debug, info, warn};

use super::outcome::{
    ActOutcome, AvailableRole, CommandOutcome, Payout, SceneView, TakeView, Token, UpgradeOffer,
    WrapReport,
};
use super::scoring::{standings, winners, GameResult, Standing};
use super::wrap::distribute_bonus;
use crate::board::Board;
use crate::cards::{Role, SceneCard};
use crate::core::action::{ActionKind, ActionRecord, ActionSet, Command};
use crate::core::config::{check_rank, Currency, GameConfig};
use crate::core::dice::{Dice, WrapRoll};
use crate::core::error::{CommandResult, ConfigError, RuleError};
use crate::core::ids::{LocationId, RoleId};
use crate::core::player::{Player, PlayerId};

/// Deadwood rules engine.
///
/// Build one with [`GameBuilder`](super::GameBuilder), or from parts with
/// [`GameManager::new`].
#[derive(Debug)]
pub struct GameManager {
    config: GameConfig,
    board: Board,
    dice: Dice,
    players: Vec<Player>,
    current: PlayerId,
    /// Days left, counting the one in progress.
    days: u8,
    turn: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
    over: bool,
}

impl GameManager {
    /// Seat `config.player_count` players in the trailer.
    ///
    /// The board's deck must still hold a full deal for every day after the
    /// first.
    pub fn new(config: GameConfig, board: Board, dice: Dice) -> Result<Self, ConfigError> {
        if !(2..=8).contains(&config.player_count) {
            return Err(ConfigError::PlayerCount(config.player_count));
        }
        if config.days == 0 {
            return Err(ConfigError::NoDays);
        }
        check_rank("starting rank", config.starting_rank, 1)?;

        // Day one is already dealt; every later day needs a full deal.
        let needed = usize::from(config.days - 1) * board.total_sets();
        let available = board.deck().remaining();
        if available < needed {
            return Err(ConfigError::InsufficientCards { needed, available });
        }

        let trailer = board.trailer();
        let players = PlayerId::all(config.player_count)
            .map(|id| {
                Player::new(
                    id,
                    config.starting_rank,
                    config.starting_dollars,
                    config.starting_credits,
                    trailer,
                )
            })
            .collect();

        let mut game = Self {
            days: config.days,
            config,
            board,
            dice,
            players,
            current: PlayerId::new(0),
            turn: 1,
            sequence: 0,
            history: Vector::new(),
            over: false,
        };
        game.send_everyone_home();
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// Days left, including the current one. Zero once the game is over.
    #[must_use]
    pub fn days(&self) -> u8 {
        self.days
    }

    /// The day in progress, starting at 1.
    #[must_use]
    pub fn day(&self) -> u8 {
        (self.config.days - self.days)
            .saturating_add(1)
            .min(self.config.days)
    }

    /// Turns started so far, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn open_scenes(&self) -> usize {
        self.board.open_scenes()
    }

    /// Every accepted command, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Winner(s), once the last day has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.over {
            winners(&self.players)
        } else {
            None
        }
    }

    /// Current ranking by score. Meaningful at any time; final once over.
    #[must_use]
    pub fn score_game(&self) -> Vec<Standing> {
        standings(&self.players)
    }

    /// What the current player may do right now.
    #[must_use]
    pub fn available_actions(&self) -> ActionSet {
        let mut actions = ActionSet::new();
        if self.over {
            return actions;
        }

        let player = self.current_player();
        let flags = player.flags;

        if !player.has_role() {
            if !flags.moved && !flags.acted {
                actions.insert(ActionKind::Move);
            }
            let open_set = self
                .board
                .set(player.location)
                .is_some_and(|set| !set.is_wrapped());
            if open_set && !flags.taken_role {
                actions.insert(ActionKind::TakeRole);
            }
        } else if !flags.acted && !flags.rehearsed && !flags.taken_role {
            actions.insert(ActionKind::Act);
            if let Some((role, scene)) = self.held_role(player) {
                if role.on_card && player.practice_chips < scene.max_practice_chips() {
                    actions.insert(ActionKind::Rehearse);
                }
            }
        }

        let at_office = player.location == self.board.casting_office();
        if at_office && self.board.upgrades().iter().any(|u| u.rank > player.rank) {
            actions.insert(ActionKind::Upgrade);
        }

        actions.insert(ActionKind::EndTurn);
        actions
    }

    /// Names of the locations next to the current player.
    #[must_use]
    pub fn available_locations(&self) -> Vec<&str> {
        let here = self.board.location(self.current_player().location);
        here.neighbors
            .iter()
            .map(|&n| self.board.location(n).name.as_str())
            .collect()
    }

    /// Untaken roles on the current set the player's rank allows, on-card
    /// first. Empty off a set or on a wrapped one.
    #[must_use]
    pub fn available_roles(&self) -> Vec<AvailableRole> {
        let player = self.current_player();
        let Some(set) = self.board.set(player.location) else {
            return Vec::new();
        };
        if set.is_wrapped() {
            return Vec::new();
        }

        set.all_roles()
            .filter(|(_, role)| role.is_open_to(player.rank))
            .map(|(slot, role)| AvailableRole {
                id: RoleId {
                    location: player.location,
                    slot,
                },
                name: role.name.clone(),
                rank: role.rank,
                on_card: role.on_card,
                line: role.line.clone(),
            })
            .collect()
    }

    /// Tiers above the current player's rank, when at the casting office.
    #[must_use]
    pub fn available_upgrades(&self) -> Vec<UpgradeOffer> {
        let player = self.current_player();
        if player.location != self.board.casting_office() {
            return Vec::new();
        }

        self.board
            .upgrades()
            .iter()
            .filter(|u| u.rank > player.rank)
            .map(|u| UpgradeOffer {
                rank: u.rank,
                currency: u.currency,
                price: u.price,
                affordable: balance(player, u.currency) >= u.price,
            })
            .collect()
    }

    /// Every concrete command the current player could issue now.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();

        for kind in self.available_actions().iter() {
            match kind {
                ActionKind::Move => {
                    commands.extend(
                        self.available_locations()
                            .into_iter()
                            .map(|to| Command::Move { to: to.to_string() }),
                    );
                }
                ActionKind::TakeRole => {
                    let mut seen: Vec<String> = Vec::new();
                    for role in self.available_roles() {
                        if !seen.contains(&role.name) {
                            seen.push(role.name.clone());
                            commands.push(Command::TakeRole { role: role.name });
                        }
                    }
                }
                ActionKind::Act => commands.push(Command::Act),
                ActionKind::Rehearse => commands.push(Command::Rehearse),
                ActionKind::Upgrade => {
                    let offers = self.available_upgrades().into_iter().filter(|o| o.affordable);
                    commands.extend(offers.map(|o| Command::Upgrade {
                        rank: o.rank,
                        currency: o.currency,
                    }));
                }
                ActionKind::EndTurn => commands.push(Command::EndTurn),
            }
        }

        commands
    }

    /// Scene card on every set, in board order.
    #[must_use]
    pub fn cards(&self) -> Vec<SceneView> {
        self.board
            .sets()
            .filter_map(|(loc, set)| {
                let scene = set.scene()?;
                Some(SceneView {
                    set: loc.id,
                    name: scene.name.clone(),
                    number: scene.number,
                    budget: scene.budget,
                    wrapped: scene.wrapped,
                    image: scene.displayed_image().to_string(),
                    area: loc.area,
                })
            })
            .collect()
    }

    /// Shot markers still on the board, per set.
    #[must_use]
    pub fn takes(&self) -> Vec<TakeView> {
        self.board
            .sets()
            .map(|(loc, set)| TakeView {
                set: loc.id,
                takes: set.remaining_takes().to_vec(),
            })
            .collect()
    }

    /// Every player's token icon and position.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.players
            .iter()
            .map(|p| Token {
                player: p.id,
                icon: format!("{}{}{}.png", self.config.token_prefix, p.color, p.rank),
                position: p.position,
            })
            .collect()
    }

    // === Commands ===

    /// Dispatch a command value.
    pub fn apply(&mut self, command: &Command) -> CommandResult<CommandOutcome> {
        match command {
            Command::Move { to } => self.move_to(to).map(|to| CommandOutcome::Moved { to }),
            Command::TakeRole { role } => {
                self.take_role(role).map(|role| CommandOutcome::RoleTaken { role })
            }
            Command::Rehearse => self.rehearse().map(|chips| CommandOutcome::Rehearsed { chips }),
            Command::Act => self.act().map(CommandOutcome::Acted),
            Command::Upgrade { rank, currency } => self
                .upgrade(*rank, *currency)
                .map(|rank| CommandOutcome::Upgraded { rank }),
            Command::EndTurn => self.end_turn().map(|next| CommandOutcome::TurnEnded { next }),
        }
    }

    /// Move the current player to the neighbor called `name`.
    pub fn move_to(&mut self, name: &str) -> CommandResult<LocationId> {
        self.ensure_available(ActionKind::Move)?;
        let from = self.current_player().location;
        let Some(to) = self.board.neighbor(from, name) else {
            return self.reject(RuleError::NotAdjacent(name.to_string()));
        };

        let occupants = self
            .players
            .iter()
            .filter(|p| p.id != self.current && p.location == to && !p.has_role())
            .count();
        let dest = self.board.location(to);
        let position = dest.layout.slot(&dest.area, occupants);

        let player = &mut self.players[self.current.index()];
        player.location = to;
        player.position = position;
        player.flags.moved = true;

        self.record(Command::Move {
            to: name.to_string(),
        });
        Ok(to)
    }

    /// Take the role called `name` on the current set.
    pub fn take_role(&mut self, name: &str) -> CommandResult<RoleId> {
        self.ensure_available(ActionKind::TakeRole)?;
        let player = self.current_player();
        let location = player.location;
        let Some(slot) = self
            .board
            .set(location)
            .and_then(|set| set.find_open_role(name, player.rank))
        else {
            return self.reject(RuleError::RoleUnavailable(name.to_string()));
        };

        let id = RoleId { location, slot };
        let set_area = self.board.location(location).area;
        let Some(role) = self.board.role_mut(id) else {
            return self.reject(RuleError::RoleUnavailable(name.to_string()));
        };
        role.taken = true;
        let position = role.token_position(&set_area);

        let player = &mut self.players[self.current.index()];
        player.role = Some(id);
        player.practice_chips = 0;
        player.position = position;
        player.flags.taken_role = true;

        self.record(Command::TakeRole {
            role: name.to_string(),
        });
        Ok(id)
    }

    /// Add a practice chip. Returns the new chip count.
    pub fn rehearse(&mut self) -> CommandResult<u8> {
        let player = self.current_player();
        if !self.over && self.available_actions().contains(ActionKind::Act) {
            if let Some((role, scene)) = self.held_role(player) {
                if role.on_card && player.practice_chips >= scene.max_practice_chips() {
                    return self.reject(RuleError::RehearsalCapped {
                        chips: player.practice_chips,
                        budget: scene.budget,
                    });
                }
            }
        }
        self.ensure_available(ActionKind::Rehearse)?;

        let player = &mut self.players[self.current.index()];
        player.practice_chips += 1;
        player.flags.rehearsed = true;
        let chips = player.practice_chips;

        self.record(Command::Rehearse);
        Ok(chips)
    }

    /// Roll for the held role.
    ///
    /// Success consumes a take. The shot that empties the pool wraps the
    /// scene, and the wrap may in turn end the day and the game.
    pub fn act(&mut self) -> CommandResult<ActOutcome> {
        self.ensure_available(ActionKind::Act)?;
        let player = self.current_player();
        let Some((role, scene)) = self.held_role(player) else {
            return self.reject(RuleError::ActionUnavailable(ActionKind::Act));
        };
        let on_card = role.on_card;
        let budget = scene.budget;
        let chips = player.practice_chips;
        let Some(set_id) = player.role.map(|r| r.location) else {
            return self.reject(RuleError::ActionUnavailable(ActionKind::Act));
        };

        let roll = self.dice.roll_die();
        let total = roll.saturating_add(chips);
        let success = total >= budget;

        let wrapped = success
            && self
                .board
                .set_mut(set_id)
                .is_some_and(|set| set.decrement_takes());

        let payout = match (success, on_card) {
            (true, true) => Payout {
                dollars: 0,
                credits: 2,
            },
            (true, false) => Payout {
                dollars: 1,
                credits: 1,
            },
            (false, false) => Payout {
                dollars: 1,
                credits: 0,
            },
            (false, true) => Payout::default(),
        };

        let player = &mut self.players[self.current.index()];
        player.dollars += payout.dollars;
        player.credits += payout.credits;
        player.flags.acted = true;

        debug!(player = %self.current, roll, total, budget, success, "act");
        self.record(Command::Act);

        let mut outcome = ActOutcome {
            success,
            roll,
            total,
            payout,
            bonus_awarded: false,
            day_ended: false,
            game_ended: false,
            wrap: None,
        };

        if wrapped {
            let report = self.wrap_scene(set_id);
            outcome.bonus_awarded = !report.dice.is_empty();
            outcome.wrap = Some(report);

            if self.board.check_end_day() {
                outcome.day_ended = true;
                outcome.game_ended = self.end_day()?;
            }
        }

        Ok(outcome)
    }

    /// Buy the `rank` tier paying in `currency`. Returns the new rank.
    pub fn upgrade(&mut self, rank: u8, currency: Currency) -> CommandResult<u8> {
        self.ensure_available(ActionKind::Upgrade)?;
        let player = self.current_player();
        let Some(tier) = self
            .board
            .upgrades()
            .iter()
            .find(|u| u.rank == rank && u.currency == currency && u.rank > player.rank)
        else {
            return self.reject(RuleError::UpgradeUnavailable { rank, currency });
        };

        let price = tier.price;
        let held = balance(player, currency);
        if held < price {
            return self.reject(RuleError::InsufficientFunds {
                price,
                currency,
                balance: held,
            });
        }

        let player = &mut self.players[self.current.index()];
        match currency {
            Currency::Dollars => player.dollars -= price,
            Currency::Credits => player.credits -= price,
        }
        player.rank = rank;
        player.flags.upgraded = true;

        self.record(Command::Upgrade { rank, currency });
        Ok(rank)
    }

    /// Clear the current player's flags and pass to the next seat.
    pub fn end_turn(&mut self) -> CommandResult<PlayerId> {
        self.ensure_available(ActionKind::EndTurn)?;
        self.players[self.current.index()].flags.clear();
        self.record(Command::EndTurn);

        self.current = self.current.next(self.players.len());
        self.turn += 1;
        self.sequence = 0;
        Ok(self.current)
    }

    /// Give a player a display name.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> CommandResult<()> {
        if id.index() >= self.players.len() {
            return self.reject(RuleError::UnknownPlayer(id.index()));
        }
        self.players[id.index()].name = name.into();
        Ok(())
    }

    // === Internals ===

    fn held_role(&self, player: &Player) -> Option<(&Role, &SceneCard)> {
        let id = player.role?;
        let role = self.board.role(id)?;
        let scene = self.board.set(id.location)?.scene()?;
        Some((role, scene))
    }

    fn ensure_available(&self, kind: ActionKind) -> CommandResult<()> {
        if self.over {
            return self.reject(RuleError::GameOver);
        }
        if !self.available_actions().contains(kind) {
            return self.reject(RuleError::ActionUnavailable(kind));
        }
        Ok(())
    }

    fn reject<T>(&self, err: RuleError) -> CommandResult<T> {
        warn!(player = %self.current, error = %err, "command rejected");
        Err(err.into())
    }

    fn record(&mut self, command: Command) {
        debug!(player = %self.current, ?command, "command accepted");
        self.sequence += 1;
        self.history.push_back(ActionRecord {
            player: self.current,
            command,
            day: self.day(),
            turn: self.turn,
            sequence: self.sequence,
        });
    }

    /// Pay out and clear everyone holding a role on `set_id`.
    fn wrap_scene(&mut self, set_id: LocationId) -> WrapReport {
        let holders: Vec<(usize, RoleId)> = self
            .players
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.role.filter(|r| r.location == set_id).map(|r| (i, r)))
            .collect();

        let mut dice = WrapRoll::new();
        let mut payouts = Vec::with_capacity(holders.len());

        if holders.iter().any(|(_, r)| r.is_on_card()) {
            let scene = self.board.set(set_id).and_then(|s| s.scene());
            let (budget, ranks): (u8, Vec<u8>) = scene.map_or((0, Vec::new()), |scene| {
                (scene.budget, scene.roles.iter().map(|r| r.rank).collect())
            });
            dice = self.dice.wrap_roll(budget);
            let shares = distribute_bonus(&dice, &ranks);

            for &(i, id) in &holders {
                let amount = if id.is_on_card() {
                    shares.get(id.slot.index()).copied().unwrap_or(0)
                } else {
                    self.board.role(id).map_or(0, |r| u32::from(r.rank))
                };
                self.players[i].dollars += amount;
                payouts.push((self.players[i].id, amount));
            }
        } else {
            payouts.extend(holders.iter().map(|&(i, _)| (self.players[i].id, 0)));
        }

        for &(i, id) in &holders {
            if let Some(role) = self.board.role_mut(id) {
                role.taken = false;
            }
            self.players[i].release_role();
        }

        self.board.close_scene();
        info!(
            set = %self.board.location(set_id).name,
            bonus_dice = ?dice.as_slice(),
            open_scenes = self.board.open_scenes(),
            "scene wrapped"
        );

        WrapReport {
            set: set_id,
            dice,
            payouts,
        }
    }

    /// Close the day. Returns true when it was the last one.
    fn end_day(&mut self) -> CommandResult<bool> {
        self.days = self.days.saturating_sub(1);

        if self.days == 0 {
            self.over = true;
            info!(result = ?self.result(), "game over");
            return Ok(true);
        }

        self.board.start_new_day()?;
        for player in &mut self.players {
            player.release_role();
            player.flags.clear();
        }
        self.send_everyone_home();
        info!(day = self.day(), days_left = self.days, "new day");
        Ok(false)
    }

    /// Put every player in the trailer grid, in seat order.
    fn send_everyone_home(&mut self) {
        let trailer = self.board.location(self.board.trailer());
        let (id, area, layout) = (trailer.id, trailer.area, trailer.layout);
        for (i, player) in self.players.iter_mut().enumerate() {
            player.location = id;
            player.position = layout.slot(&area, i);
        }
    }
}

fn balance(player: &Player, currency: Currency) -> u32 {
    match currency {
        Currency::Dollars => player.dollars,
        Currency::Credits => player.credits,
    }
}
