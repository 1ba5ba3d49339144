//! The game session: command surface and turn/round state machine
//!
//! One `GameSession` per game. It owns the composed state, the catalog,
//! the RNG and the observer, and exposes the two commands the outside
//! world gets: `deploy` and `end_turn`, plus the host-driven enemy
//! stepping. All legality checks live here; a rejected command mutates
//! nothing.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::battle;
use crate::board::SlotId;
use crate::bot::{EnemyAction, EnemyPlan};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::error::{FearResult, GameError};
use crate::events::{GameObserver, NullObserver};
use crate::state::GameState;
use crate::types::{Side, UnitId};
use crate::view::GameView;

pub struct GameSession {
    config: GameConfig,
    catalog: Catalog,
    state: GameState,
    rng: StdRng,
    observer: Box<dyn GameObserver>,
    enemy_plan: Option<EnemyPlan>,
}

impl GameSession {
    /// Start a fresh game: build and shuffle the deck, deal the
    /// starting hand, then open round 1 with the player's turn.
    pub fn new(catalog: Catalog, config: GameConfig, seed: u64) -> Self {
        let mut session = Self {
            state: GameState::new(&config),
            rng: StdRng::seed_from_u64(seed),
            observer: Box::new(NullObserver),
            enemy_plan: None,
            config,
            catalog,
        };
        session.begin();
        session
    }

    /// Replace the visual-sync subscriber
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = observer;
    }

    /// Tear everything down and rebuild from the catalog and config:
    /// field, hand, deck, ledgers and health all reset.
    pub fn restart(&mut self) {
        log::info!("restarting game");
        self.state = GameState::new(&self.config);
        self.enemy_plan = None;
        self.begin();
    }

    fn begin(&mut self) {
        self.state
            .deck
            .build(&self.catalog, self.config.deck_copies, &mut self.rng);
        for _ in 0..self.config.starting_hand {
            self.draw_card();
        }
        self.start_turn(Side::Player);
    }

    /// Deploy a hand card into one of the player's slots. Checked in
    /// order: game over, turn ownership, slot side and range, occupancy,
    /// hand membership, then cost. Any failure leaves hand, board and
    /// ledger untouched.
    pub fn deploy(&mut self, unit: UnitId, slot: SlotId) -> FearResult<()> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }
        if self.state.turn.owner != Side::Player {
            return Err(GameError::NotYourTurn { side: Side::Player });
        }
        if slot.side != Side::Player {
            return Err(GameError::WrongSide);
        }
        if slot.index >= self.state.board.side_len() {
            return Err(GameError::InvalidSlot { index: slot.index });
        }
        if self.state.board.is_occupied(slot) {
            return Err(GameError::SlotOccupied {
                side: slot.side,
                index: slot.index,
            });
        }
        if !self.state.hand.contains(unit) {
            return Err(GameError::NotInHand);
        }
        let cost = self
            .state
            .units
            .get(unit)
            .map(|u| u.cost)
            .ok_or(GameError::NotInHand)?;
        self.state
            .ledger
            .try_spend(Side::Player, cost, self.state.turn.owner)?;

        self.state.hand.remove(unit);
        if let Err(err) = self.state.board.set_occupant(slot, unit) {
            // Occupancy was validated above; only a bug lands here
            log::error!("deploy rejected after spend: {err}");
            self.state.hand.return_to_hand(unit);
            return Err(err);
        }
        if let Some(u) = self.state.units.get_mut(unit) {
            u.slot = Some(slot.index);
        }
        self.state.register_deployment(unit);
        log::info!("player deployed {unit:?} into slot {}", slot.index);
        self.observer.unit_deployed(unit, slot);
        self.observer
            .fear_changed(Side::Player, self.state.ledger.current(Side::Player));
        Ok(())
    }

    /// End the player's turn: resolve combat for the player's units,
    /// then hand control to the enemy.
    pub fn end_turn(&mut self) -> FearResult<()> {
        if self.state.game_over {
            return Err(GameError::GameOver);
        }
        if self.state.turn.owner != Side::Player {
            return Err(GameError::NotYourTurn { side: Side::Player });
        }
        self.finish_turn(Side::Player);
        Ok(())
    }

    /// Run one step of the enemy plan. The host calls this after each
    /// pacing delay; each call commits at most one deployment. When the
    /// plan reports `Finished` the enemy turn resolves and control
    /// returns to the player before this call returns.
    pub fn advance_enemy(&mut self) -> FearResult<EnemyAction> {
        if self.state.turn.owner != Side::Enemy {
            return Err(GameError::NoEnemyTurn);
        }
        let plan = self.enemy_plan.as_mut().ok_or(GameError::NoEnemyTurn)?;
        let action = plan.advance(
            &mut self.state,
            &self.catalog,
            &mut self.rng,
            self.observer.as_mut(),
            self.config.enemy_plays_per_turn,
        );
        match action {
            EnemyAction::Deployed { .. } => Ok(action),
            EnemyAction::Finished => {
                self.enemy_plan = None;
                self.finish_turn(Side::Enemy);
                Ok(action)
            }
            EnemyAction::Aborted => {
                self.enemy_plan = None;
                Ok(action)
            }
        }
    }

    /// Drive the enemy turn to completion without pacing; used by
    /// headless hosts and tests.
    pub fn run_enemy_turn(&mut self) -> FearResult<()> {
        loop {
            match self.advance_enemy()? {
                EnemyAction::Deployed { .. } => continue,
                EnemyAction::Finished | EnemyAction::Aborted => return Ok(()),
            }
        }
    }

    fn finish_turn(&mut self, side: Side) {
        log::info!("{side:?} ended their turn");
        battle::resolve_turn(&mut self.state, side, self.observer.as_mut());
        if self.state.game_over {
            self.enemy_plan = None;
            return;
        }
        self.start_turn(side.opponent());
    }

    fn start_turn(&mut self, side: Side) {
        self.state.turn.owner = side;
        if side == Side::Player {
            self.state.turn.round += 1;
            log::info!("--- round {} ---", self.state.turn.round);
        }
        self.state.ledger.refill(self.state.turn.round);
        self.observer
            .fear_changed(Side::Player, self.state.ledger.current(Side::Player));
        self.observer
            .fear_changed(Side::Enemy, self.state.ledger.current(Side::Enemy));
        self.observer.turn_started(side, self.state.turn.round);
        match side {
            Side::Player => {
                self.draw_card();
                self.enemy_plan = None;
            }
            Side::Enemy => {
                self.enemy_plan = Some(EnemyPlan::new());
            }
        }
    }

    fn draw_card(&mut self) {
        if let Some(unit) = self.state.hand.draw(
            &mut self.state.deck,
            &self.catalog,
            &mut self.state.units,
        ) {
            if let Some(card) = self.state.units.get(unit).map(|u| u.card) {
                self.observer.card_drawn(unit, card);
            }
        }
    }

    /// Anchors for the current hand, using the configured origin and
    /// spacing
    pub fn hand_positions(&self) -> Vec<f32> {
        self.state
            .hand
            .layout_positions(self.config.hand_origin, self.config.card_spacing)
    }

    /// Snapshot for presentation layers
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
