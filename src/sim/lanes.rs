//! Lane ownership policy
//!
//! Solo play shares the whole field with player one. Two-player play splits
//! the field at the midline: the left half belongs to player one and the
//! right half (midline included) to player two. Spawning, movement bounds
//! and collision targeting all go through this one type.

use std::ops::Range;

use rand::Rng;

use super::state::{GameMode, PlayerId, PlayerState};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneOwnership {
    /// Whole field, player one sets the pace
    Shared,
    /// Field split at `midline`
    Split { midline: f32 },
}

impl LaneOwnership {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Solo => LaneOwnership::Shared,
            GameMode::TwoPlayer => LaneOwnership::Split { midline: MIDLINE },
        }
    }

    /// Player whose speed factor drives entities at `lane`
    pub fn owner(&self, lane: f32) -> PlayerId {
        match *self {
            LaneOwnership::Shared => PlayerId::One,
            LaneOwnership::Split { midline } => {
                if lane < midline {
                    PlayerId::One
                } else {
                    PlayerId::Two
                }
            }
        }
    }

    /// Local time scale for an entity at `lane`
    pub fn time_scale(&self, lane: f32, players: &[PlayerState; 2]) -> f32 {
        players[self.owner(lane).index()].speed_factor()
    }

    /// Players allowed to intercept an entity at `lane`, in test order
    pub fn targets(&self, lane: f32, players: &[PlayerState; 2]) -> Vec<PlayerId> {
        match self {
            LaneOwnership::Shared => PlayerId::BOTH
                .into_iter()
                .filter(|id| players[id.index()].is_alive())
                .collect(),
            LaneOwnership::Split { .. } => {
                let owner = self.owner(lane);
                if players[owner.index()].is_alive() {
                    vec![owner]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Player who loses a life when a hazard at `lane` gets through
    pub fn miss_victim(&self, lane: f32, players: &[PlayerState; 2]) -> Option<PlayerId> {
        let victim = self.owner(lane);
        players[victim.index()].is_alive().then_some(victim)
    }

    /// Lateral movement range for a player
    pub fn movement_bounds(&self, id: PlayerId) -> (f32, f32) {
        match (*self, id) {
            (LaneOwnership::Shared, _) => (0.0, COLS),
            (LaneOwnership::Split { midline }, PlayerId::One) => (0.0, midline - SPLIT_DEAD_ZONE),
            (LaneOwnership::Split { midline }, PlayerId::Two) => (midline + SPLIT_DEAD_ZONE, COLS),
        }
    }

    /// Starting lane after a reset
    pub fn home_lane(&self, id: PlayerId) -> f32 {
        match (*self, id) {
            (LaneOwnership::Shared, _) => COLS / 2.0,
            (LaneOwnership::Split { .. }, PlayerId::One) => COLS / 4.0,
            (LaneOwnership::Split { .. }, PlayerId::Two) => COLS / 4.0 * 3.0,
        }
    }

    /// Lane range spawns for `id` are drawn from
    pub fn half(&self, id: PlayerId) -> Range<f32> {
        match (*self, id) {
            (LaneOwnership::Shared, _) => 0.0..COLS,
            (LaneOwnership::Split { midline }, PlayerId::One) => 0.0..midline,
            (LaneOwnership::Split { midline }, PlayerId::Two) => midline..COLS,
        }
    }

    /// Lane positions for one spawn wave of `count` draws.
    ///
    /// In a split field each draw lands in a random half, and when more than
    /// one draw is requested every draw also adds one entity to each half.
    /// A wave of `count` can therefore produce up to `3 * count` lanes.
    pub fn spawn_lanes<R: Rng>(&self, count: u32, rng: &mut R) -> Vec<f32> {
        let mut lanes = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match self {
                LaneOwnership::Shared => lanes.push(rng.random_range(0.0..COLS)),
                LaneOwnership::Split { .. } => {
                    let side = if rng.random_bool(0.5) {
                        PlayerId::One
                    } else {
                        PlayerId::Two
                    };
                    lanes.push(rng.random_range(self.half(side)));
                    if count > 1 {
                        lanes.push(rng.random_range(self.half(PlayerId::One)));
                        lanes.push(rng.random_range(self.half(PlayerId::Two)));
                    }
                }
            }
        }
        lanes
    }
}
