//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and filesystem access:
//! - Variable timestep (measured frame delta)
//! - Seeded RNG owned by the state
//! - Side effects reported as `GameEvent`s

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod event;
pub mod lanes;
pub mod machine;
pub mod movement;
pub mod objective;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{PassReport, is_hit, resolve};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use event::{Cue, GameEvent, MatchSummary, Outcome, Standing};
pub use lanes::LaneOwnership;
pub use movement::Steer;
pub use objective::Objective;
pub use spawner::spawn_tick;
pub use state::{
    Effect, EndItem, Entity, EntityKind, GameMode, GamePhase, GameState, MenuItem, PauseItem,
    PlayerId, PlayerState,
};
pub use tick::{TickInput, tick};
