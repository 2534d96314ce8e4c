//! Seating validation.
//!
//! A decision is a proposal computed from a snapshot that may already be
//! stale. Before the store commits a table, the concrete seating is
//! re-checked against a fresh snapshot here; every violation is reported,
//! not just the first.

use std::collections::HashSet;

use tablegrid_core::{PassNumber, SchedulerConfig, TournamentSnapshot};
use thiserror::Error;

use crate::capacity::max_tables;
use crate::eligibility::seated_participants;
use crate::label::{label_to_ordinal, used_labels};
use crate::progress::with_live_counts;

/// One reason a seating cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingViolation {
    #[error("table needs {expected} players, got {got}")]
    WrongTableSize { expected: u32, got: usize },

    #[error("{0} is listed more than once")]
    DuplicateParticipant(String),

    #[error("{0} is not a participant of this tournament")]
    UnknownParticipant(String),

    #[error("{id} has already played pass {pass_number} ({completed} completed)")]
    AlreadyPlayed {
        id: String,
        completed: u32,
        pass_number: PassNumber,
    },

    #[error("{id} is seated at an active table for pass {pass_number}")]
    AlreadySeated { id: String, pass_number: PassNumber },

    #[error("{0:?} is not a table label")]
    InvalidLabel(String),

    #[error("table {pass_number}{label} is already in use")]
    LabelTaken { label: String, pass_number: PassNumber },

    #[error("table {label} exceeds the {max_tables} tables this tournament can run per pass")]
    LabelOutOfRange { label: String, max_tables: usize },
}

/// The seating was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("seating for pass {pass_number} rejected{}", bullet_list(.violations))]
pub struct SeatingRejected {
    pub pass_number: PassNumber,
    pub violations: Vec<SeatingViolation>,
}

fn bullet_list(violations: &[SeatingViolation]) -> String {
    violations.iter().map(|v| format!("\n  - {v}")).collect()
}

/// Check that `player_ids` may sit at table `label` for `pass_number`.
pub fn validate_seating(
    snapshot: &TournamentSnapshot,
    config: &SchedulerConfig,
    pass_number: PassNumber,
    label: &str,
    player_ids: &[String],
) -> Result<(), SeatingRejected> {
    let mut violations = Vec::new();

    if player_ids.len() != config.table_size as usize {
        violations.push(SeatingViolation::WrongTableSize {
            expected: config.table_size,
            got: player_ids.len(),
        });
    }

    let participants = with_live_counts(&snapshot.participants, &snapshot.completed_rounds);
    let seated = seated_participants(&snapshot.active_tables);
    let mut seen = HashSet::new();

    for id in player_ids {
        if !seen.insert(id.as_str()) {
            violations.push(SeatingViolation::DuplicateParticipant(id.clone()));
            continue;
        }

        let Some(participant) = participants.iter().find(|p| &p.id == id) else {
            violations.push(SeatingViolation::UnknownParticipant(id.clone()));
            continue;
        };

        if participant.completed_passes >= pass_number {
            violations.push(SeatingViolation::AlreadyPlayed {
                id: id.clone(),
                completed: participant.completed_passes,
                pass_number,
            });
        }

        if seated.contains(id.as_str()) {
            let table_pass = snapshot
                .active_tables
                .iter()
                .find(|t| t.participant_ids.iter().any(|p| p == id))
                .map_or(pass_number, |t| t.pass_number);
            violations.push(SeatingViolation::AlreadySeated {
                id: id.clone(),
                pass_number: table_pass,
            });
        }
    }

    match label_to_ordinal(label) {
        None => violations.push(SeatingViolation::InvalidLabel(label.to_string())),
        Some(ordinal) => {
            let letters = label.to_ascii_uppercase();
            let bound = max_tables(snapshot.participants.len(), config.table_size);
            if ordinal >= bound {
                violations.push(SeatingViolation::LabelOutOfRange {
                    label: letters.clone(),
                    max_tables: bound,
                });
            }
            let used = used_labels(pass_number, &snapshot.completed_rounds, &snapshot.active_tables);
            if used.contains(&letters) {
                violations.push(SeatingViolation::LabelTaken {
                    label: letters,
                    pass_number,
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        tracing::debug!(pass = pass_number, violations = violations.len(), "seating rejected");
        Err(SeatingRejected {
            pass_number,
            violations,
        })
    }
}
