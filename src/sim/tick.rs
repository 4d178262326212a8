//! Per-frame simulation step
//!
//! Order within a frame: state machine dispatch, then (only while playing)
//! movement, match timer, objective check, spawning, loss check, collision
//! pass and effect aging. The frame uses the measured wall-clock delta as-is.

use super::autopilot;
use super::collision::resolve;
use super::effects::age_effects;
use super::event::{GameEvent, Outcome};
use super::machine;
use super::movement::{Steer, apply_steering};
use super::objective;
use super::spawner::spawn_tick;
use super::state::{GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Menu navigation (one-shot)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub back: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Held lateral controls per player
    pub steer: [Steer; 2],
    /// Speed level up/down per player (one-shot)
    pub faster: [bool; 2],
    pub slower: [bool; 2],
    /// Idle/demo mode - autopilot steers both players
    pub idle_mode: bool,
}

/// Advance the game by one frame of `dt` seconds.
///
/// Returns the events raised this frame, in order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    machine::dispatch(state, input, &mut events);

    if state.phase != GamePhase::Playing {
        return events;
    }

    let steer = if input.idle_mode {
        autopilot::steer(state)
    } else {
        input.steer
    };
    step_playing(state, steer, dt, &mut events);
    events
}

fn step_playing(state: &mut GameState, steer: [Steer; 2], dt: f32, events: &mut Vec<GameEvent>) {
    apply_steering(state, steer, dt);

    state.elapsed += dt;
    if let Some(outcome) = objective::reached(state) {
        machine::finish_match(state, outcome, events);
        return;
    }

    spawn_tick(state, dt);

    if !state.any_player_alive() {
        machine::finish_match(state, Outcome::Eliminated, events);
        return;
    }

    resolve(state, dt, events);
    age_effects(&mut state.effects, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::event::Cue;
    use crate::sim::objective::Objective;
    use crate::sim::state::{Entity, EntityKind, GameMode};
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn start(mode_down: bool) -> GameState {
        let mut state = GameState::new(12345);
        if mode_down {
            tick(
                &mut state,
                &TickInput {
                    down: true,
                    ..Default::default()
                },
                0.0,
            );
        }
        tick(&mut state, &confirm(), 0.0);
        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_menu_frames_do_not_simulate() {
        let mut state = GameState::new(1);
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.elapsed, 0.0);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_paused_frames_do_not_simulate() {
        let mut state = start(false);
        tick(&mut state, &TickInput::default(), 0.5);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, DT);
        let frozen = state.clone();
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_survival_wins_regardless_of_score() {
        let mut state = start(false);
        state.elapsed = state.max_seconds - 0.01;
        let events = tick(&mut state, &TickInput::default(), 0.02);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.players[0].score, 0);
        assert!(events.contains(&GameEvent::PlayCue(Cue::Victory)));
    }

    #[test]
    fn test_last_life_lost_leads_to_game_over() {
        let mut state = GameState::new(3);
        tick(&mut state, &confirm(), 0.0);
        // Dante Must Die
        for _ in 0..2 {
            tick(
                &mut state,
                &TickInput {
                    down: true,
                    ..Default::default()
                },
                0.0,
            );
        }
        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.players[0].lives, 1);

        state.entities.push(Entity::new(EntityKind::Hazard, 0.5, 5.0));
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.players[0].eliminated);
        assert_eq!(state.phase, GamePhase::Playing);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::PlayCue(Cue::GameOver)));
    }

    fn start_objective(objective: Objective) -> GameState {
        let mut state = GameState::new(77);
        tick(&mut state, &confirm(), 0.0);
        for _ in 0..objective.index() {
            tick(
                &mut state,
                &TickInput {
                    right: true,
                    ..Default::default()
                },
                0.0,
            );
        }
        tick(&mut state, &confirm(), 0.0);
        assert_eq!(state.objective, objective);
        state
    }

    fn ended_with(events: &[GameEvent]) -> Option<Outcome> {
        events.iter().find_map(|e| match e {
            GameEvent::MatchEnded(summary) => Some(summary.outcome),
            _ => None,
        })
    }

    #[test]
    fn test_fill_wins_once_capacity_is_reached() {
        let mut state = start_objective(Objective::Fill);
        let target = state.profile().capacity_target;
        state.players[0].load = target - 1;
        let (lane, depth) = (state.players[0].lane, state.players[0].depth);
        state.entities.push(Entity::new(EntityKind::Hazard, lane, depth));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.players[0].load, target);
        assert_eq!(state.phase, GamePhase::Playing);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(ended_with(&events), Some(Outcome::Filled));
    }

    #[test]
    fn test_fill_and_drain_ignore_the_clock() {
        for objective in [Objective::Fill, Objective::Drain] {
            let mut state = start_objective(objective);
            state.elapsed = state.max_seconds + 5.0;
            tick(&mut state, &TickInput::default(), DT);
            assert_eq!(state.phase, GamePhase::Playing, "{}", objective.as_str());
        }
    }

    #[test]
    fn test_drain_ends_when_score_runs_out() {
        let mut state = start_objective(Objective::Drain);
        assert_eq!(state.players[0].score, 20);
        state.entities.push(Entity::new(EntityKind::Hazard, 0.5, 5.0));
        state.entities.push(Entity::new(EntityKind::Hazard, 0.5, 5.0));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.players[0].score, 0);
        assert_eq!(state.players[0].lives, 3);

        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(ended_with(&events), Some(Outcome::Drained));
    }

    #[test]
    fn test_two_player_game_over_needs_both_eliminated() {
        let mut state = start(true);
        assert_eq!(state.mode, GameMode::TwoPlayer);
        state.players[0].lives = 0;
        state.players[0].eliminated = true;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Playing);

        state.players[1].lives = 0;
        state.players[1].eliminated = true;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_long_frame_is_used_as_is() {
        let mut state = start(false);
        tick(&mut state, &TickInput::default(), 2.5);
        assert_eq!(state.elapsed, 2.5);
        // One wave per frame however long the frame was
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_spawn_timer_stays_below_interval() {
        let mut state = start(false);
        let interval = state.profile().spawn_interval;
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
            assert!(state.spawn_timer >= 0.0 && state.spawn_timer < interval);
        }
    }

    #[test]
    fn test_idle_mode_plays_a_full_match() {
        let mut state = start(false);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut ended = None;
        for _ in 0..(61 * 60) {
            let events = tick(&mut state, &idle, DT);
            if let Some(summary) = events.iter().find_map(|e| match e {
                GameEvent::MatchEnded(s) => Some(s.clone()),
                _ => None,
            }) {
                ended = Some(summary);
                break;
            }
        }
        let summary = ended.expect("match should end within the time limit");
        assert!(state.phase.is_end_screen());
        assert!(summary.total_score() > 0);
    }

    proptest! {
        #[test]
        fn prop_lives_never_increase(
            seed in any::<u64>(),
            two_player in any::<bool>(),
            frames in proptest::collection::vec((0u8..4, any::<bool>(), 0.0f32..0.05), 1..400),
        ) {
            let mut state = GameState::new(seed);
            if two_player {
                tick(&mut state, &TickInput { down: true, ..Default::default() }, 0.0);
            }
            tick(&mut state, &confirm(), 0.0);
            tick(&mut state, &confirm(), 0.0);

            let mut prev = [state.players[0].lives, state.players[1].lives];
            for (steer, faster, dt) in frames {
                let steer = Steer { left: steer & 1 != 0, right: steer & 2 != 0 };
                let input = TickInput {
                    steer: [steer, steer],
                    faster: [faster, faster],
                    ..Default::default()
                };
                tick(&mut state, &input, dt);
                for (i, p) in state.players.iter().enumerate() {
                    prop_assert!(p.lives <= prev[i]);
                    prop_assert_eq!(p.eliminated, p.active && p.lives == 0);
                    prop_assert!((SPEED_LEVEL_MIN..=SPEED_LEVEL_MAX).contains(&p.speed_level));
                    prev[i] = p.lives;
                }
                prop_assert!(state.spawn_timer < state.profile().spawn_interval);
                prop_assert!(state.effects.iter().all(|e| e.age < e.lifetime));
            }
        }
    }
}
