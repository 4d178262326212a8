//! Game state and core simulation types
//!
//! `GameState` is the single owner of everything a match touches: both
//! players, the entity arena and the effect arena. Callers hold it and pass
//! it by `&mut` into [`tick`](super::tick::tick).

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, DifficultyProfile};
use super::lanes::LaneOwnership;
use super::objective::Objective;
use crate::consts::*;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu
    Menu,
    /// Choosing difficulty after picking a mode
    DifficultySelect,
    /// Active gameplay
    Playing,
    /// Simulation halted, overlay shown
    Paused,
    /// Every active player eliminated
    GameOver,
    /// Survived until the match timer ran out
    Win,
}

impl GamePhase {
    /// End screens wait for an explicit retry/menu choice
    pub fn is_end_screen(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// Solo or two players sharing the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Solo,
    TwoPlayer,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Solo => "SOLO",
            GameMode::TwoPlayer => "DUEL",
        }
    }
}

/// Player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "P1",
            PlayerId::Two => "P2",
        }
    }
}

/// One controllable collector
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Lateral position on the lane field
    pub lane: f32,
    /// Fixed depth near the camera
    pub depth: f32,
    pub active: bool,
    pub eliminated: bool,
    pub lives: u32,
    pub score: u32,
    /// Entities intercepted this match (Fill objective progress)
    pub load: u32,
    /// Discrete speed setting, 1..=5
    pub speed_level: u8,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            lane: MIDLINE,
            depth: PLAYER_DEPTH,
            active: true,
            eliminated: false,
            lives: 5,
            score: 0,
            load: 0,
            speed_level: SPEED_LEVEL_MIN,
        }
    }
}

impl PlayerState {
    /// Multiplier applied to own movement and to the fall speed of
    /// entities in this player's lane half
    pub fn speed_factor(&self) -> f32 {
        1.0 + f32::from(self.speed_level.saturating_sub(SPEED_LEVEL_MIN)) * SPEED_LEVEL_STEP
    }

    /// Active and not yet eliminated
    pub fn is_alive(&self) -> bool {
        self.active && !self.eliminated
    }

    pub fn speed_up(&mut self) {
        self.speed_level = (self.speed_level + 1).min(SPEED_LEVEL_MAX);
    }

    pub fn slow_down(&mut self) {
        self.speed_level = self.speed_level.saturating_sub(1).max(SPEED_LEVEL_MIN);
    }

    /// Take one life; returns true if this eliminated the player
    pub fn lose_life(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        if self.lives == 0 {
            self.eliminated = true;
            return true;
        }
        false
    }
}

/// What a falling entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Must be intercepted; costs a life when missed
    Hazard,
    /// Bonus; no penalty when missed
    Pickup,
}

impl EntityKind {
    /// Score granted when intercepted
    pub fn points(self) -> u32 {
        match self {
            EntityKind::Hazard => HAZARD_POINTS,
            EntityKind::Pickup => PICKUP_POINTS,
        }
    }
}

/// A falling entity
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Lateral position (real-valued, not snapped to a column)
    pub lane: f32,
    /// Position along the travel axis; grows toward the players
    pub depth: f32,
    pub size: f32,
    /// Spin accumulator in degrees
    pub rotation: f32,
}

impl Entity {
    pub fn new(kind: EntityKind, lane: f32, depth: f32) -> Self {
        Self {
            kind,
            lane,
            depth,
            size: ENTITY_SIZE,
            rotation: 0.0,
        }
    }

    /// World-space position for rendering
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.lane, 0.0, self.depth)
    }
}

/// Transient visual effect (explosion)
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub position: Vec3,
    pub base_scale: f32,
    pub age: f32,
    pub lifetime: f32,
}

impl Effect {
    pub fn explosion(position: Vec3, base_scale: f32) -> Self {
        Self {
            position,
            base_scale,
            age: 0.0,
            lifetime: EXPLOSION_LIFETIME,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Normalized progress, 0 at birth and 1 at expiry
    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            1.0
        } else {
            (self.age / self.lifetime).clamp(0.0, 1.0)
        }
    }
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Solo,
    TwoPlayer,
    Extras,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Solo,
        MenuItem::TwoPlayer,
        MenuItem::Extras,
        MenuItem::Quit,
    ];
}

/// Pause overlay entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseItem {
    Resume,
    Restart,
    MainMenu,
}

impl PauseItem {
    pub const ALL: [PauseItem; 3] = [PauseItem::Resume, PauseItem::Restart, PauseItem::MainMenu];
}

/// End screen entries (binary cursor)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndItem {
    Retry,
    MainMenu,
}

impl EndItem {
    pub const ALL: [EndItem; 2] = [EndItem::Retry, EndItem::MainMenu];
}

/// Menu cursor positions
#[derive(Debug, Clone, PartialEq)]
pub struct Cursors {
    pub menu: usize,
    pub difficulty: usize,
    pub pause: usize,
    pub end: usize,
}

impl Default for Cursors {
    fn default() -> Self {
        Self {
            menu: 0,
            difficulty: Difficulty::default().index(),
            pause: 0,
            end: 0,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub objective: Objective,
    pub cursors: Cursors,
    /// Seconds survived in the current match
    pub elapsed: f32,
    /// Survival target; reaching it wins the match
    pub max_seconds: f32,
    /// Time accumulated toward the next spawn wave
    pub spawn_timer: f32,
    pub players: [PlayerState; 2],
    /// Falling entities (order is not stable across frames)
    pub entities: Vec<Entity>,
    pub effects: Vec<Effect>,
}

impl GameState {
    /// Create a state sitting on the main menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            mode: GameMode::Solo,
            difficulty: Difficulty::default(),
            objective: Objective::default(),
            cursors: Cursors::default(),
            elapsed: 0.0,
            max_seconds: DEFAULT_MATCH_SECONDS,
            spawn_timer: 0.0,
            players: [PlayerState::default(), PlayerState::default()],
            entities: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Use a different survival target
    pub fn with_max_seconds(mut self, max_seconds: f32) -> Self {
        self.max_seconds = max_seconds;
        self
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        self.difficulty.profile()
    }

    /// Partition policy for the current mode
    pub fn lanes(&self) -> LaneOwnership {
        LaneOwnership::for_mode(self.mode)
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    /// True while at least one active player has lives left
    pub fn any_player_alive(&self) -> bool {
        self.players.iter().any(PlayerState::is_alive)
    }

    /// Full reset for a fresh match with the current mode, difficulty and
    /// objective
    pub fn reset_match(&mut self) {
        let profile = self.profile();
        let lanes = self.lanes();
        let two_player = self.mode == GameMode::TwoPlayer;
        let starting_score = match self.objective {
            Objective::Drain => profile.drain_starting_score,
            Objective::Time | Objective::Fill => 0,
        };

        for id in PlayerId::BOTH {
            let active = id == PlayerId::One || two_player;
            self.players[id.index()] = PlayerState {
                lane: lanes.home_lane(id),
                depth: PLAYER_DEPTH,
                active,
                eliminated: false,
                lives: if active { profile.starting_lives } else { 0 },
                score: if active { starting_score } else { 0 },
                load: 0,
                speed_level: SPEED_LEVEL_MIN,
            };
        }

        self.entities.clear();
        self.effects.clear();
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.cursors.pause = 0;
        self.cursors.end = 0;

        log::info!(
            "Match reset: mode={} objective={} difficulty={} lives={}",
            self.mode.as_str(),
            self.objective.as_str(),
            profile.name,
            profile.starting_lives
        );
    }
}
