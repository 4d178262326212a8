//! Collision detection and resolution
//!
//! One pass per frame over the entity arena: advance each entity by its
//! lane's time scale, test it against the players allowed to intercept it,
//! then resolve hits and misses. Indices to drop are collected during the
//! pass and removed afterwards, so the arena is never mutated mid-iteration.

use super::event::{Cue, GameEvent};
use super::objective::Objective;
use super::state::{Effect, Entity, EntityKind, GameState, PlayerState};
use crate::consts::*;

/// Tallies from one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Entities intercepted by a player
    pub hits: usize,
    /// Entities that crossed the miss threshold
    pub misses: usize,
    /// Lives taken by missed hazards
    pub lives_lost: usize,
}

impl PassReport {
    pub fn removed(&self) -> usize {
        self.hits + self.misses
    }
}

/// Axis-aligned proximity test between an entity and a collector
#[inline]
pub fn is_hit(entity: &Entity, player: &PlayerState) -> bool {
    (entity.lane - player.lane).abs() < HIT_LANE_TOLERANCE
        && (entity.depth - player.depth).abs() < HIT_DEPTH_TOLERANCE
}

/// Move every entity and resolve hits and misses for this frame
pub fn resolve(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) -> PassReport {
    let lanes = state.lanes();
    let fall_speed = state.profile().fall_speed;
    let draining = state.objective == Objective::Drain;
    let GameState {
        entities,
        players,
        effects,
        ..
    } = state;

    let mut report = PassReport::default();
    let mut removals: Vec<usize> = Vec::new();

    for (index, entity) in entities.iter_mut().enumerate() {
        let local_dt = dt * lanes.time_scale(entity.lane, players);
        entity.depth += fall_speed * local_dt;
        entity.rotation += SPIN_DEG_PER_SEC * local_dt;

        // At most one scorer per entity
        let scorer = lanes
            .targets(entity.lane, players)
            .into_iter()
            .find(|id| is_hit(entity, &players[id.index()]));

        if let Some(id) = scorer {
            let player = &mut players[id.index()];
            player.score += entity.kind.points();
            player.load += 1;
            let cue = match entity.kind {
                EntityKind::Hazard => Cue::Defend,
                EntityKind::Pickup => Cue::Collect,
            };
            events.push(GameEvent::Intercepted {
                player: id,
                kind: entity.kind,
            });
            events.push(GameEvent::PlayCue(cue));
            removals.push(index);
            report.hits += 1;
            continue;
        }

        if entity.depth <= MISS_DEPTH {
            continue;
        }

        if entity.kind == EntityKind::Hazard {
            effects.push(Effect::explosion(entity.position(), entity.size));
            if let Some(victim) = lanes.miss_victim(entity.lane, players) {
                let player = &mut players[victim.index()];
                let eliminated = player.lose_life();
                if draining {
                    player.score = player.score.saturating_sub(DRAIN_MISS_PENALTY);
                }
                report.lives_lost += 1;
                events.push(GameEvent::LifeLost {
                    player: victim,
                    lives_left: player.lives,
                });
                events.push(GameEvent::PlayCue(Cue::LifeLost));
                if eliminated {
                    log::info!("{} eliminated", victim.label());
                    events.push(GameEvent::PlayerEliminated(victim));
                }
            }
        }
        removals.push(index);
        report.misses += 1;
    }

    // Descending order keeps the remaining marked indices valid
    for index in removals.into_iter().rev() {
        entities.swap_remove(index);
    }

    report
}
