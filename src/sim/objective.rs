//! Match objectives
//!
//! The objective decides what ends a match besides elimination, and which
//! ranking table the result goes to.

use serde::{Deserialize, Serialize};

use super::event::Outcome;
use super::state::{GameMode, GameState};

/// What a match is played for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Objective {
    /// Survive until the match clock runs out
    #[default]
    Time,
    /// First collector to intercept the capacity target wins
    Fill,
    /// Start with a score cushion; missed hazards drain it
    Drain,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Time, Objective::Fill, Objective::Drain];

    /// Label used in ranking keys
    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Time => "TIME",
            Objective::Fill => "FILL",
            Objective::Drain => "DRAIN",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Objective::Time => 0,
            Objective::Fill => 1,
            Objective::Drain => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Only the Time objective runs against the clock
    pub fn is_timed(self) -> bool {
        self == Objective::Time
    }
}

/// Outcome if the objective's end condition holds this frame.
/// Elimination is checked separately.
pub fn reached(state: &GameState) -> Option<Outcome> {
    match state.objective {
        Objective::Time => (state.elapsed >= state.max_seconds).then_some(Outcome::Survived),
        Objective::Fill => {
            let target = state.profile().capacity_target;
            state
                .players
                .iter()
                .any(|p| p.is_alive() && p.load >= target)
                .then_some(Outcome::Filled)
        }
        Objective::Drain => {
            let active = state.players.iter().filter(|p| p.active);
            let total: u32 = match state.mode {
                GameMode::Solo => active.take(1).map(|p| p.score).sum(),
                GameMode::TwoPlayer => active.map(|p| p.score).sum(),
            };
            (total == 0).then_some(Outcome::Drained)
        }
    }
}
