//! Difficulty profiles
//!
//! Static tuning table selected once on the difficulty screen.

use serde::{Deserialize, Serialize};

/// Named difficulty, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    DanteMustDie,
}

/// Tuning constants for one difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Seconds between spawn waves
    pub spawn_interval: f32,
    /// Fall speed in depth units per second (before the lane's speed factor)
    pub fall_speed: f32,
    pub spawn_count_min: u32,
    pub spawn_count_max: u32,
    pub starting_lives: u32,
    /// Interceptions needed to win a Fill match
    pub capacity_target: u32,
    /// Score each player starts a Drain match with
    pub drain_starting_score: u32,
}

const EASY: DifficultyProfile = DifficultyProfile {
    name: "Easy",
    spawn_interval: 2.0,
    fall_speed: 6.0,
    spawn_count_min: 1,
    spawn_count_max: 1,
    starting_lives: 5,
    capacity_target: 6,
    drain_starting_score: 20,
};

const NORMAL: DifficultyProfile = DifficultyProfile {
    name: "Normal",
    spawn_interval: 1.5,
    fall_speed: 9.0,
    spawn_count_min: 1,
    spawn_count_max: 2,
    starting_lives: 5,
    capacity_target: 18,
    drain_starting_score: 20,
};

const HARD: DifficultyProfile = DifficultyProfile {
    name: "Hard",
    spawn_interval: 1.0,
    fall_speed: 14.0,
    spawn_count_min: 2,
    spawn_count_max: 3,
    starting_lives: 5,
    capacity_target: 16,
    drain_starting_score: 20,
};

// One life only: the top difficulty is a single-mistake run.
const DANTE_MUST_DIE: DifficultyProfile = DifficultyProfile {
    name: "Dante Must Die",
    spawn_interval: 0.7,
    fall_speed: 20.0,
    spawn_count_min: 2,
    spawn_count_max: 3,
    starting_lives: 1,
    capacity_target: 16,
    drain_starting_score: 20,
};

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::DanteMustDie,
    ];

    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
            Difficulty::DanteMustDie => &DANTE_MUST_DIE,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.profile().name
    }

    /// Position in the menu list
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|d| *d == self).unwrap_or(1)
    }

    /// Difficulty at a (wrapping) menu index
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dante_must_die_has_one_life() {
        for d in Difficulty::ALL {
            let expected = if d == Difficulty::DanteMustDie { 1 } else { 5 };
            assert_eq!(d.profile().starting_lives, expected, "{}", d.as_str());
        }
    }

    #[test]
    fn test_profiles_are_ordered_by_pressure() {
        let profiles: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();
        for pair in profiles.windows(2) {
            assert!(pair[0].spawn_interval > pair[1].spawn_interval);
            assert!(pair[0].fall_speed < pair[1].fall_speed);
        }
        for p in profiles {
            assert!(p.spawn_count_min <= p.spawn_count_max);
        }
    }

    #[test]
    fn test_fill_targets_and_drain_cushion() {
        let targets: Vec<u32> = Difficulty::ALL.iter().map(|d| d.profile().capacity_target).collect();
        assert_eq!(targets, vec![6, 18, 16, 16]);
        assert!(Difficulty::ALL.iter().all(|d| d.profile().drain_starting_score == 20));
    }

    #[test]
    fn test_index_round_trip_and_default() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
        assert_eq!(Difficulty::Normal.index(), 1);
        assert_eq!(Difficulty::from_index(3), Difficulty::DanteMustDie);
        assert_eq!(Difficulty::from_index(4), Difficulty::Easy);
    }
}
