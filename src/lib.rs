//! Earth Defenders - a lane-based arcade defense game
//!
//! Core modules:
//! - `sim`: Frame simulation (spawning, collisions, lifecycle state machine)
//! - `hud`: Read-only snapshot for whatever draws the scene
//! - `audio`: Cue sink consumed after each frame
//! - `assets`: Visual asset lookup with flat-colour fallback
//! - `ranking`: Top-3 score tables persisted as JSON
//! - `settings`: User configuration
//! - `launcher`: Extras mini-game process launch

pub mod assets;
pub mod audio;
pub mod hud;
pub mod launcher;
pub mod ranking;
pub mod settings;
pub mod sim;

pub use ranking::Ranking;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the main loop
    pub const TARGET_FPS: u32 = 60;

    /// Width of the lane field (nominal column count)
    pub const COLS: f32 = 12.0;
    /// Midline splitting the field in two-player mode
    pub const MIDLINE: f32 = COLS / 2.0;
    /// Gap kept on each side of the midline in two-player mode
    pub const SPLIT_DEAD_ZONE: f32 = 0.7;

    /// Collector depth (fixed, near the camera)
    pub const PLAYER_DEPTH: f32 = 1.0;
    /// Lateral speed in lanes per second at speed level 1
    pub const PLAYER_BASE_SPEED: f32 = 10.0;
    pub const SPEED_LEVEL_MIN: u8 = 1;
    pub const SPEED_LEVEL_MAX: u8 = 5;
    /// Speed factor gained per speed level above 1
    pub const SPEED_LEVEL_STEP: f32 = 0.25;

    /// Hit window along the lane axis
    pub const HIT_LANE_TOLERANCE: f32 = 1.2;
    /// Hit window along the depth axis
    pub const HIT_DEPTH_TOLERANCE: f32 = 1.0;
    /// Entities deeper than this without a hit are misses
    pub const MISS_DEPTH: f32 = 5.0;

    /// Spawn depth range (far from the camera)
    pub const SPAWN_DEPTH_MIN: f32 = -100.0;
    pub const SPAWN_DEPTH_MAX: f32 = -60.0;
    pub const ENTITY_SIZE: f32 = 0.6;
    pub const PICKUP_CHANCE: f64 = 0.1;
    /// Entity spin in degrees per second (scaled like fall speed)
    pub const SPIN_DEG_PER_SEC: f32 = 90.0;

    pub const HAZARD_POINTS: u32 = 1;
    pub const PICKUP_POINTS: u32 = 2;
    /// Score lost per missed hazard under the Drain objective
    pub const DRAIN_MISS_PENALTY: u32 = 10;

    /// Default survival time for a match
    pub const DEFAULT_MATCH_SECONDS: f32 = 60.0;

    /// Explosion effect lifetime
    pub const EXPLOSION_LIFETIME: f32 = 0.5;
}
