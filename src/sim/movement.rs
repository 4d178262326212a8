//! Collector movement

use super::lanes::LaneOwnership;
use super::state::{GameState, PlayerId, PlayerState};
use crate::consts::*;

/// Held lateral controls for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steer {
    pub left: bool,
    pub right: bool,
}

/// Move one player along the lane axis, clamped to its bounds
pub fn steer_player(player: &mut PlayerState, id: PlayerId, lanes: LaneOwnership, steer: Steer, dt: f32) {
    if !player.is_alive() {
        return;
    }
    let (min, max) = lanes.movement_bounds(id);
    let step = PLAYER_BASE_SPEED * dt * player.speed_factor();
    if steer.left {
        player.lane = (player.lane - step).max(min);
    }
    if steer.right {
        player.lane = (player.lane + step).min(max);
    }
}

/// Apply both players' held controls for this frame
pub fn apply_steering(state: &mut GameState, steer: [Steer; 2], dt: f32) {
    let lanes = state.lanes();
    for id in PlayerId::BOTH {
        steer_player(&mut state.players[id.index()], id, lanes, steer[id.index()], dt);
    }
}
