//! One game session: simulation plus the frame it renders

use crate::config::GameConfig;
use crate::renderer::{Frame, compose};
use crate::sim::{GamePhase, GameState, Playfield, TickEvents, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    config: GameConfig,
    state: GameState,
    last_events: Option<TickEvents>,
}

impl Game {
    pub fn new(config: GameConfig, playfield: Playfield, seed: u64, surface_left: f32) -> Self {
        let state = GameState::new(seed, &config, playfield, surface_left);
        log::info!(
            "Game started with seed {} on {}x{} playfield",
            seed,
            playfield.width,
            playfield.height
        );
        Self {
            config,
            state,
            last_events: None,
        }
    }

    /// Wrap an existing state (fixed ball placement, mid-game snapshots)
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            state,
            last_events: None,
        }
    }

    /// Run one tick and build its frame
    pub fn step(&mut self, input: &TickInput) -> Frame {
        if !self.state.is_over() {
            self.last_events = Some(tick(&mut self.state, input));
        }
        compose(&self.state)
    }

    /// Start a fresh session on the same playfield
    pub fn restart(&mut self, seed: u64, surface_left: f32) {
        let playfield = self.state.playfield;
        self.state = GameState::new(seed, &self.config, playfield, surface_left);
        self.last_events = None;
        log::info!("Game restarted with seed {}", seed);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events from the most recent tick that ran
    pub fn last_events(&self) -> Option<TickEvents> {
        self.last_events
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}
