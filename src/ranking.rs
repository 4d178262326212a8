//! Ranking tables
//!
//! A JSON object keyed by `"{objective}-{mode}"`, each value holding the top
//! three entries for that table, best score first. A missing or corrupt file
//! reads as an empty ranking.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::{GameMode, MatchSummary, PlayerId};

/// Entries kept per table
pub const MAX_RANKING_ENTRIES: usize = 3;

#[derive(Debug)]
pub enum RankingError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
}

impl fmt::Display for RankingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "ranking i/o error: {e}"),
            Self::Malformed(e) => write!(f, "malformed ranking: {e}"),
        }
    }
}

impl std::error::Error for RankingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed(e) => Some(e),
        }
    }
}

/// A single ranking entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player label in head-to-head tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default)]
    pub score: u32,
    /// Whole seconds the match lasted
    #[serde(default)]
    pub time: u32,
}

/// Table key for an objective and mode
pub fn ranking_key(objective: &str, mode: GameMode) -> String {
    format!("{}-{}", objective, mode.as_str())
}

/// All ranking tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    tables: BTreeMap<String, Vec<RankingEntry>>,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a ranking file
    pub fn read(path: &Path) -> Result<Self, RankingError> {
        let json = fs::read_to_string(path).map_err(RankingError::Io)?;
        let mut ranking: Ranking = serde_json::from_str(&json).map_err(RankingError::Malformed)?;
        for entries in ranking.tables.values_mut() {
            normalize(entries);
        }
        Ok(ranking)
    }

    /// Load the ranking, treating an absent or corrupt file as empty
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No ranking found, starting fresh");
            return Self::new();
        }
        match Self::read(path) {
            Ok(ranking) => {
                log::info!("Loaded {} ranking tables", ranking.tables.len());
                ranking
            }
            Err(e) => {
                log::warn!("{} ({}), starting fresh", e, path.display());
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), RankingError> {
        let json = serde_json::to_string_pretty(self).map_err(RankingError::Malformed)?;
        fs::write(path, json).map_err(RankingError::Io)?;
        log::info!("Ranking saved ({} tables)", self.tables.len());
        Ok(())
    }

    /// Entries for a table, best first
    pub fn entries(&self, key: &str) -> &[RankingEntry] {
        self.tables.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add an entry and keep only the top scores.
    /// Returns the 1-based rank achieved, or None if it fell off the table.
    pub fn record(&mut self, key: &str, entry: RankingEntry) -> Option<usize> {
        let entries = self.tables.entry(key.to_string()).or_default();
        // Ties keep earlier entries ahead
        let pos = entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(entries.len());
        entries.insert(pos, entry);
        entries.truncate(MAX_RANKING_ENTRIES);
        (pos < MAX_RANKING_ENTRIES).then_some(pos + 1)
    }

    /// Record a finished match under its objective's table: one entry in
    /// solo, one per player in head-to-head
    pub fn record_match(&mut self, summary: &MatchSummary) -> Vec<Option<usize>> {
        let key = ranking_key(summary.objective.as_str(), summary.mode);
        let time = summary.elapsed.max(0.0) as u32;
        match summary.mode {
            GameMode::Solo => vec![self.record(
                &key,
                RankingEntry {
                    player: None,
                    score: summary.total_score(),
                    time,
                },
            )],
            GameMode::TwoPlayer => PlayerId::BOTH
                .into_iter()
                .map(|id| {
                    self.record(
                        &key,
                        RankingEntry {
                            player: Some(id.label().to_string()),
                            score: summary.scores[id.index()],
                            time,
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Sort best first (stable) and trim
fn normalize(entries: &mut Vec<RankingEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_RANKING_ENTRIES);
}
