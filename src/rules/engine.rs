//! Rules engine: the single entry point collaborators call.
//!
//! `Rules` owns the injected `RulesConfig` and exposes every match
//! operation. Each operation takes the current state by reference and
//! returns either a new state or a `Rejection`; the input is never
//! modified.
//!
//! `RulesEngine` is the command-level interface: apply a `Command`, list
//! the commands currently legal for a player, and check for a result.

use tracing::debug;

use super::actions;
use super::outcome::{check_game_end, GameEnd, MatchResult};
use super::phase;
use crate::cards::{CardId, CardRef};
use crate::core::{AttackTarget, Command, GameState, MatchId, PlayerId, RulesConfig};
use crate::error::{ConfigError, Rejection};
use crate::zones::Zone;

/// Command-level rules interface.
///
/// ## Implementation Notes
///
/// - `apply`: Must be deterministic; never mutates `state`
/// - `legal_commands`: Empty when the player cannot act
/// - `is_terminal`: `None` while the match continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Apply a command on behalf of `player`.
    fn apply(
        &self,
        state: &GameState,
        player: &PlayerId,
        command: &Command,
    ) -> Result<GameState, Rejection>;

    /// Every command `apply` would currently accept from `player`.
    fn legal_commands(&self, state: &GameState, player: &PlayerId) -> Vec<Command>;

    /// The recorded result once the match has ended.
    fn is_terminal(&self, state: &GameState) -> Option<MatchResult>;
}

/// The standard rules, parameterized by a `RulesConfig`.
///
/// ## Example
///
/// ```
/// use school_ccg::core::{Phase, PlayerId};
/// use school_ccg::rules::Rules;
///
/// let rules = Rules::default();
/// let state = rules.create_match("alice", "bob", "match-1").unwrap();
/// let state = rules.advance_phase(&state).unwrap();
///
/// assert_eq!(state.phase, Phase::Main);
/// assert!(rules.check_game_end(&state).winner.is_none());
/// assert_eq!(state.current().id, PlayerId::new("alice"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    /// Create rules from a validated configuration.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a fresh match. See `phase::create_match`.
    pub fn create_match(
        &self,
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        match_id: impl Into<MatchId>,
    ) -> Result<GameState, Rejection> {
        phase::create_match(&self.config, player_a, player_b, match_id)
    }

    /// Create a fresh match with an explicit creation time.
    pub fn create_match_at(
        &self,
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        match_id: impl Into<MatchId>,
        created_at: u64,
    ) -> Result<GameState, Rejection> {
        phase::create_match_at(&self.config, player_a, player_b, match_id, created_at)
    }

    /// Shuffle decks and deal starting hands.
    pub fn start_match(
        &self,
        state: &GameState,
        deck_a: &[CardRef],
        deck_b: &[CardRef],
        seed: u64,
    ) -> Result<GameState, Rejection> {
        traced(
            state,
            None,
            "start_match",
            phase::start_match(&self.config, state, deck_a, deck_b, seed),
        )
    }

    pub fn advance_phase(&self, state: &GameState) -> Result<GameState, Rejection> {
        traced(
            state,
            None,
            "advance_phase",
            phase::advance_phase(&self.config, state),
        )
    }

    pub fn play_card(
        &self,
        state: &GameState,
        player: &PlayerId,
        card: &CardId,
    ) -> Result<GameState, Rejection> {
        traced(
            state,
            Some(player),
            "play_card",
            actions::play_card(&self.config, state, player, card),
        )
    }

    pub fn draw_card(&self, state: &GameState, player: &PlayerId) -> Result<GameState, Rejection> {
        traced(
            state,
            Some(player),
            "draw_card",
            actions::draw_card(&self.config, state, player),
        )
    }

    pub fn tap_for_mana(
        &self,
        state: &GameState,
        player: &PlayerId,
        card: &CardId,
    ) -> Result<GameState, Rejection> {
        traced(
            state,
            Some(player),
            "tap_for_mana",
            actions::tap_for_mana(state, player, card),
        )
    }

    pub fn attack(
        &self,
        state: &GameState,
        player: &PlayerId,
        attacker: &CardId,
        target: &AttackTarget,
    ) -> Result<GameState, Rejection> {
        traced(
            state,
            Some(player),
            "attack",
            actions::attack(state, player, attacker, target),
        )
    }

    pub fn surrender(&self, state: &GameState, player: &PlayerId) -> Result<GameState, Rejection> {
        traced(
            state,
            Some(player),
            "surrender",
            actions::surrender(state, player),
        )
    }

    #[must_use]
    pub fn check_game_end(&self, state: &GameState) -> GameEnd {
        check_game_end(state)
    }

    fn dispatch(
        &self,
        state: &GameState,
        player: &PlayerId,
        command: &Command,
    ) -> Result<GameState, Rejection> {
        match command {
            Command::DrawCard => actions::draw_card(&self.config, state, player),
            Command::PlayCard { card } => actions::play_card(&self.config, state, player, card),
            Command::TapForMana { card } => actions::tap_for_mana(state, player, card),
            Command::Attack { attacker, target } => {
                actions::attack(state, player, attacker, target)
            }
            Command::PassPhase => phase::advance_phase(&self.config, state),
            Command::Surrender => actions::surrender(state, player),
        }
    }

    /// Commands worth trying for `player`, before legality filtering.
    fn candidates(&self, state: &GameState, player: &PlayerId) -> Vec<Command> {
        let Some(seat) = state.seat_of(player) else {
            return Vec::new();
        };
        if !state.is_active {
            return Vec::new();
        }

        let me = state.player(seat);
        let opponent = state.player(seat.opponent());
        let mut commands = vec![Command::DrawCard];

        commands.extend(me.zones.hand.iter().map(|card| Command::play(card.id.clone())));
        for card in me.zones.battlefield.iter() {
            if card.is_land() {
                commands.push(Command::tap(card.id.clone()));
            }
            if card.is_creature() {
                commands.push(Command::attack_player(card.id.clone()));
                commands.extend(
                    opponent
                        .zones
                        .get(Zone::Battlefield)
                        .iter()
                        .filter(|blocker| blocker.is_creature())
                        .map(|blocker| Command::attack_creature(card.id.clone(), blocker.id.clone())),
                );
            }
        }

        // Phase advance is not actor-gated in the engine; only offer it to
        // the player whose turn it is.
        if state.current_player == seat {
            commands.push(Command::PassPhase);
        }
        commands.push(Command::Surrender);
        commands
    }
}

impl RulesEngine for Rules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply(
        &self,
        state: &GameState,
        player: &PlayerId,
        command: &Command,
    ) -> Result<GameState, Rejection> {
        let op = command.kind();
        let result = self.dispatch(state, player, command);
        if let Err(rejection) = &result {
            debug!(
                match_id = %state.id,
                player = %player,
                command = ?op,
                kind = rejection.kind().as_str(),
                reason = %rejection,
                "command rejected"
            );
        }
        result
    }

    fn legal_commands(&self, state: &GameState, player: &PlayerId) -> Vec<Command> {
        self.candidates(state, player)
            .into_iter()
            .filter(|command| self.dispatch(state, player, command).is_ok())
            .collect()
    }

    fn is_terminal(&self, state: &GameState) -> Option<MatchResult> {
        state.result.clone()
    }
}

fn traced(
    state: &GameState,
    player: Option<&PlayerId>,
    op: &'static str,
    result: Result<GameState, Rejection>,
) -> Result<GameState, Rejection> {
    if let Err(rejection) = &result {
        debug!(
            match_id = %state.id,
            player = ?player.map(PlayerId::as_str),
            op,
            kind = rejection.kind().as_str(),
            reason = %rejection,
            "action rejected"
        );
    }
    result
}
