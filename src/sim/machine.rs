//! Lifecycle state machine
//!
//! Menu → DifficultySelect → Playing ⇄ Paused, and Playing → GameOver / Win.
//! The objective is picked alongside the difficulty (left/right).
//! End screens stay put until the player picks Retry or Main Menu.

use super::difficulty::Difficulty;
use super::event::{Cue, GameEvent, MatchSummary, Outcome};
use super::objective::Objective;
use super::state::{EndItem, GameMode, GamePhase, GameState, MenuItem, PauseItem, PlayerId};
use super::tick::TickInput;

fn wrap_prev(cursor: usize, len: usize) -> usize {
    (cursor + len - 1) % len
}

fn wrap_next(cursor: usize, len: usize) -> usize {
    (cursor + 1) % len
}

/// Switch phase, logging and reporting the transition
pub fn set_phase(state: &mut GameState, to: GamePhase, events: &mut Vec<GameEvent>) {
    let from = state.phase;
    if from == to {
        return;
    }
    log::info!("Phase {:?} -> {:?}", from, to);
    state.phase = to;
    events.push(GameEvent::PhaseChanged { from, to });
}

/// Reset the match and enter Playing
pub fn start_match(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.reset_match();
    set_phase(state, GamePhase::Playing, events);
}

/// Snapshot the current match as if it ended with `outcome`
pub fn summarize(state: &GameState, outcome: Outcome) -> MatchSummary {
    MatchSummary {
        mode: state.mode,
        difficulty: state.difficulty,
        objective: state.objective,
        outcome,
        scores: [state.players[0].score, state.players[1].score],
        loads: [state.players[0].load, state.players[1].load],
        elapsed: state.elapsed,
    }
}

/// End the running match
pub fn finish_match(state: &mut GameState, outcome: Outcome, events: &mut Vec<GameEvent>) {
    let (phase, cue) = if outcome.is_win() {
        (GamePhase::Win, Cue::Victory)
    } else {
        (GamePhase::GameOver, Cue::GameOver)
    };
    set_phase(state, phase, events);
    events.push(GameEvent::PlayCue(cue));

    let summary = summarize(state, outcome);
    log::info!(
        "Match ended: {:?} after {:.1}s, scores {:?}",
        outcome,
        summary.elapsed,
        summary.scores
    );
    events.push(GameEvent::MatchEnded(summary));
}

/// Handle this frame's discrete input for the current phase
pub fn dispatch(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    match state.phase {
        GamePhase::Menu => menu(state, input, events),
        GamePhase::DifficultySelect => difficulty_select(state, input, events),
        GamePhase::Playing => playing(state, input, events),
        GamePhase::Paused => paused(state, input, events),
        GamePhase::GameOver | GamePhase::Win => end_screen(state, input, events),
    }
}

fn menu(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let len = MenuItem::ALL.len();
    if input.up {
        state.cursors.menu = wrap_prev(state.cursors.menu, len);
    }
    if input.down {
        state.cursors.menu = wrap_next(state.cursors.menu, len);
    }
    if !input.confirm {
        return;
    }
    match MenuItem::ALL[state.cursors.menu % len] {
        MenuItem::Solo => {
            state.mode = GameMode::Solo;
            set_phase(state, GamePhase::DifficultySelect, events);
        }
        MenuItem::TwoPlayer => {
            state.mode = GameMode::TwoPlayer;
            set_phase(state, GamePhase::DifficultySelect, events);
        }
        MenuItem::Extras => events.push(GameEvent::LaunchExtras),
        MenuItem::Quit => events.push(GameEvent::Quit),
    }
}

fn difficulty_select(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let len = Difficulty::ALL.len();
    if input.up {
        state.cursors.difficulty = wrap_prev(state.cursors.difficulty, len);
    }
    if input.down {
        state.cursors.difficulty = wrap_next(state.cursors.difficulty, len);
    }
    let objectives = Objective::ALL.len();
    if input.left {
        state.objective = Objective::from_index(wrap_prev(state.objective.index(), objectives));
    }
    if input.right {
        state.objective = Objective::from_index(wrap_next(state.objective.index(), objectives));
    }
    if input.confirm {
        state.difficulty = Difficulty::from_index(state.cursors.difficulty);
        start_match(state, events);
    } else if input.back {
        set_phase(state, GamePhase::Menu, events);
    }
}

fn playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.pause {
        set_phase(state, GamePhase::Paused, events);
        return;
    }
    for id in PlayerId::BOTH {
        if id == PlayerId::Two && state.mode != GameMode::TwoPlayer {
            continue;
        }
        let player = state.player_mut(id);
        if input.faster[id.index()] {
            player.speed_up();
        }
        if input.slower[id.index()] {
            player.slow_down();
        }
    }
}

fn paused(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.pause {
        set_phase(state, GamePhase::Playing, events);
        return;
    }
    let len = PauseItem::ALL.len();
    // Sideways keys step back like up
    if input.up || input.left || input.right {
        state.cursors.pause = wrap_prev(state.cursors.pause, len);
    }
    if input.down {
        state.cursors.pause = wrap_next(state.cursors.pause, len);
    }
    if !input.confirm {
        return;
    }
    match PauseItem::ALL[state.cursors.pause % len] {
        PauseItem::Resume => set_phase(state, GamePhase::Playing, events),
        PauseItem::Restart => start_match(state, events),
        PauseItem::MainMenu => set_phase(state, GamePhase::Menu, events),
    }
}

fn end_screen(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.up || input.down || input.left || input.right {
        state.cursors.end = 1 - state.cursors.end.min(1);
    }
    if !input.confirm {
        return;
    }
    events.push(GameEvent::StopCue(Cue::Victory));
    match EndItem::ALL[state.cursors.end.min(1)] {
        EndItem::Retry => start_match(state, events),
        EndItem::MainMenu => set_phase(state, GamePhase::Menu, events),
    }
}
