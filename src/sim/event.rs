//! Events emitted during a simulation step.
//! Audio and presentation consume these after `tick` returns.

use super::difficulty::Difficulty;
use super::objective::Objective;
use super::state::{EntityKind, GameMode, GamePhase, PlayerId};

/// Audio cue identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Hazard intercepted
    Defend,
    /// Pickup collected
    Collect,
    /// Hazard got through
    LifeLost,
    GameOver,
    /// Victory music (stopped when leaving the end screen)
    Victory,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Defend, Cue::Collect, Cue::LifeLost, Cue::GameOver, Cue::Victory];
}

/// How a match finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Survived to the time limit
    Survived,
    /// A collector reached the capacity target
    Filled,
    /// Every active player eliminated
    Eliminated,
    /// Drain objective score ran out
    Drained,
}

impl Outcome {
    /// Outcomes shown on the Win screen
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Survived | Outcome::Filled)
    }
}

/// Final standing of a two-player match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Winner(PlayerId),
    Draw,
}

/// Snapshot of a finished match
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub objective: Objective,
    pub outcome: Outcome,
    pub scores: [u32; 2],
    /// Interceptions per player
    pub loads: [u32; 2],
    pub elapsed: f32,
}

impl MatchSummary {
    /// Head-to-head result; None in solo.
    /// A filled match is decided by load, anything else by score.
    pub fn standing(&self) -> Option<Standing> {
        if self.mode != GameMode::TwoPlayer {
            return None;
        }
        let [p1, p2] = match self.outcome {
            Outcome::Filled => self.loads,
            _ => self.scores,
        };
        Some(match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Standing::Winner(PlayerId::One),
            std::cmp::Ordering::Less => Standing::Winner(PlayerId::Two),
            std::cmp::Ordering::Equal => Standing::Draw,
        })
    }

    /// Combined score of all players
    pub fn total_score(&self) -> u32 {
        self.scores.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlayCue(Cue),
    StopCue(Cue),
    PhaseChanged { from: GamePhase, to: GamePhase },
    Intercepted { player: PlayerId, kind: EntityKind },
    LifeLost { player: PlayerId, lives_left: u32 },
    PlayerEliminated(PlayerId),
    MatchEnded(MatchSummary),
    /// Menu asked for the Extras mini-game
    LaunchExtras,
    /// Menu asked to exit
    Quit,
}
