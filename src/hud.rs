//! HUD snapshot
//!
//! Plain view data derived from a `GameState` each frame. Whatever draws the
//! scene reads this instead of poking at simulation internals.

use crate::sim::machine::summarize;
use crate::sim::{
    Difficulty, GameMode, GamePhase, GameState, Objective, Outcome, PlayerId, Standing,
};

/// Per-player corner panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPanel {
    pub label: &'static str,
    pub lives: u32,
    pub score: u32,
    /// Interceptions so far (Fill progress)
    pub load: u32,
    pub speed_level: u8,
}

/// Centered menu or overlay with a highlighted option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub options: Vec<&'static str>,
    pub selected: usize,
    /// Score line shown on end screens
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub phase: GamePhase,
    pub objective: Objective,
    /// Whole seconds left; None when the objective has no clock
    pub time_left: Option<u32>,
    /// Interceptions needed to win a Fill match
    pub capacity_target: Option<u32>,
    /// Panels for players still in play
    pub panels: Vec<PlayerPanel>,
    pub overlay: Option<Overlay>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let in_match = !matches!(state.phase, GamePhase::Menu | GamePhase::DifficultySelect);
        let panels = if in_match {
            PlayerId::BOTH
                .into_iter()
                .filter(|id| state.player(*id).is_alive())
                .map(|id| {
                    let p = state.player(id);
                    PlayerPanel {
                        label: id.label(),
                        lives: p.lives,
                        score: p.score,
                        load: p.load,
                        speed_level: p.speed_level,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            phase: state.phase,
            objective: state.objective,
            time_left: state
                .objective
                .is_timed()
                .then(|| (state.max_seconds - state.elapsed).max(0.0) as u32),
            capacity_target: (state.objective == Objective::Fill)
                .then(|| state.profile().capacity_target),
            panels,
            overlay: overlay(state),
        }
    }

    /// End-screen headline, if any
    pub fn banner(&self) -> Option<&str> {
        if self.phase.is_end_screen() {
            self.overlay.as_ref().map(|o| o.title.as_str())
        } else {
            None
        }
    }
}

/// Headline for an end screen
pub fn banner(state: &GameState) -> Option<String> {
    let text = match state.phase {
        GamePhase::GameOver => "GAME OVER",
        GamePhase::Win => match summarize(state, win_outcome(state.objective)).standing() {
            None => "VICTORY!",
            Some(Standing::Winner(PlayerId::One)) => "PLAYER 1 WINS!",
            Some(Standing::Winner(PlayerId::Two)) => "PLAYER 2 WINS!",
            Some(Standing::Draw) => "DRAW!",
        },
        _ => return None,
    };
    Some(text.to_string())
}

fn win_outcome(objective: Objective) -> Outcome {
    match objective {
        Objective::Fill => Outcome::Filled,
        Objective::Time | Objective::Drain => Outcome::Survived,
    }
}

fn overlay(state: &GameState) -> Option<Overlay> {
    let (title, options, selected) = match state.phase {
        GamePhase::Playing => return None,
        GamePhase::Menu => (
            "EARTH DEFENDERS".to_string(),
            vec!["Solo", "Two Players", "Extras", "Quit"],
            state.cursors.menu,
        ),
        GamePhase::DifficultySelect => (
            "SELECT DIFFICULTY".to_string(),
            Difficulty::ALL.iter().map(|d| d.profile().name).collect(),
            state.cursors.difficulty,
        ),
        GamePhase::Paused => (
            "PAUSED".to_string(),
            vec!["RESUME", "RESTART", "MAIN MENU"],
            state.cursors.pause,
        ),
        GamePhase::GameOver => (
            banner(state).unwrap_or_default(),
            vec!["TRY AGAIN", "MAIN MENU"],
            state.cursors.end,
        ),
        GamePhase::Win => (
            banner(state).unwrap_or_default(),
            vec!["PLAY AGAIN", "MAIN MENU"],
            state.cursors.end,
        ),
    };

    let detail = if state.phase.is_end_screen() {
        let p1 = format!("P1: {}", state.players[0].score);
        Some(match state.mode {
            GameMode::Solo => p1,
            GameMode::TwoPlayer => format!("{}  P2: {}", p1, state.players[1].score),
        })
    } else if state.phase == GamePhase::DifficultySelect {
        Some(format!("< OBJECTIVE: {} >", state.objective.as_str()))
    } else {
        None
    };

    Some(Overlay {
        title,
        options,
        selected,
        detail,
    })
}
