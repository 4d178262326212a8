//! Idle/demo mode - the game plays itself
//!
//! Each living player chases the entity it can intercept that is closest to
//! crossing the miss line. Hazards win ties over pickups since a missed
//! pickup costs nothing.

use super::movement::Steer;
use super::state::{EntityKind, GameState, PlayerId};
use crate::consts::*;

/// Distance under which the player stops adjusting (avoids jitter)
const SETTLE_DISTANCE: f32 = 0.25;

/// Depth handicap for pickups when ranking targets
const PICKUP_PRIORITY_PENALTY: f32 = 3.0;

/// Lane the player should head for, if anything is incoming
pub fn target_lane(state: &GameState, id: PlayerId) -> Option<f32> {
    let lanes = state.lanes();
    let player = state.player(id);
    state
        .entities
        .iter()
        .filter(|e| lanes.targets(e.lane, &state.players).contains(&id))
        // Already past the hit window
        .filter(|e| e.depth <= player.depth + HIT_DEPTH_TOLERANCE)
        .max_by(|a, b| {
            let urgency = |kind: EntityKind, depth: f32| match kind {
                EntityKind::Hazard => depth,
                EntityKind::Pickup => depth - PICKUP_PRIORITY_PENALTY,
            };
            urgency(a.kind, a.depth)
                .partial_cmp(&urgency(b.kind, b.depth))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| {
            let (min, max) = lanes.movement_bounds(id);
            e.lane.clamp(min, max)
        })
}

/// Steering for both players this frame
pub fn steer(state: &GameState) -> [Steer; 2] {
    let lanes = state.lanes();
    let mut steer = [Steer::default(); 2];
    for id in PlayerId::BOTH {
        let player = state.player(id);
        if !player.is_alive() {
            continue;
        }
        let goal = target_lane(state, id).unwrap_or_else(|| lanes.home_lane(id));
        let delta = goal - player.lane;
        if delta.abs() > SETTLE_DISTANCE {
            steer[id.index()] = Steer {
                left: delta < 0.0,
                right: delta > 0.0,
            };
        }
    }
    steer
}
