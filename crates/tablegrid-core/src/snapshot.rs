//! Snapshot ingestion.
//!
//! Bridges the records the persistence layer emits to the canonical
//! [`TournamentSnapshot`] the scheduler consumes. Active tables from older
//! clients store their pass number under different field names; they are
//! folded into a single `pass_number` here so nothing downstream has to
//! know about them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{ActiveTable, CompletedRound, Participant, ParticipantId, PassNumber};

/// Everything the scheduler needs for one decision.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub participants: Vec<Participant>,
    pub completed_rounds: Vec<CompletedRound>,
    pub active_tables: Vec<ActiveTable>,
}

/// Snapshot as read from JSON, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(alias = "completedGames", default)]
    pub completed_rounds: Vec<CompletedRound>,
    #[serde(alias = "activePasses", default)]
    pub active_tables: Vec<RawActiveTable>,
}

/// An active table in any of the shapes found in stored data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActiveTable {
    pub pass_number: Option<PassNumber>,
    pub passe_tournament_number: Option<PassNumber>,
    pub current_game_number: Option<PassNumber>,
    pub passe_number: Option<PassNumber>,
    #[serde(alias = "passeInRound")]
    pub table_label: Option<String>,
    #[serde(alias = "participantUids", default)]
    pub participant_ids: Vec<ParticipantId>,
}

impl RawActiveTable {
    /// First non-zero pass number, canonical field first.
    pub fn resolved_pass_number(&self) -> Option<PassNumber> {
        [
            self.pass_number,
            self.passe_tournament_number,
            self.current_game_number,
            self.passe_number,
        ]
        .into_iter()
        .flatten()
        .find(|&n| n > 0)
    }

    /// Convert to the canonical shape. `index` is only used for the error.
    pub fn normalize(self, index: usize) -> CoreResult<ActiveTable> {
        let pass_number = self
            .resolved_pass_number()
            .ok_or(CoreError::MissingPassNumber { index })?;

        Ok(ActiveTable {
            pass_number,
            table_label: self.table_label.filter(|label| !label.is_empty()),
            participant_ids: self
                .participant_ids
                .into_iter()
                .filter(|id| !id.is_empty())
                .collect(),
        })
    }
}

impl RawSnapshot {
    pub fn normalize(self) -> CoreResult<TournamentSnapshot> {
        let active_tables = self
            .active_tables
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.normalize(index))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(TournamentSnapshot {
            participants: self.participants,
            completed_rounds: self.completed_rounds,
            active_tables,
        })
    }
}

impl TournamentSnapshot {
    pub fn from_json(content: &str) -> CoreResult<Self> {
        let raw: RawSnapshot = serde_json::from_str(content)?;
        let snapshot = raw.normalize()?;
        tracing::debug!(
            participants = snapshot.participants.len(),
            completed_rounds = snapshot.completed_rounds.len(),
            active_tables = snapshot.active_tables.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}
