//! Completed-pass counts.
//!
//! Counts are always derived from the completed-round log. The cached
//! `completed_passes_count` carried on participant records drifts when
//! completion events are processed out of order, so it is never read.

use serde::Serialize;
use tablegrid_core::{ActiveTable, CompletedRound, Participant, ParticipantRef, PassNumber};

use crate::eligibility::seated_participants;

/// Number of finished rounds the participant took part in.
///
/// Rounds without a completion marker never count, even if the
/// participant is listed in them.
pub fn count_completed_passes(participant_id: &str, rounds: &[CompletedRound]) -> u32 {
    rounds
        .iter()
        .filter(|round| round.is_completed() && round.includes(participant_id))
        .count() as u32
}

/// Attach a freshly computed count to every participant, in input order.
pub fn with_live_counts(participants: &[Participant], rounds: &[CompletedRound]) -> Vec<ParticipantRef> {
    participants
        .iter()
        .map(|p| ParticipantRef {
            id: p.id.clone(),
            display_name: p.display_name.clone(),
            completed_passes: count_completed_passes(&p.id, rounds),
        })
        .collect()
}

/// Per-participant standing for progress views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProgress {
    pub id: String,
    pub display_name: String,
    pub completed_passes: u32,
    /// The pass this participant plays next.
    pub next_pass_number: PassNumber,
    /// Seated at an active table right now.
    pub seated: bool,
}

pub fn participant_progress(
    participants: &[Participant],
    rounds: &[CompletedRound],
    active: &[ActiveTable],
) -> Vec<ParticipantProgress> {
    let seated = seated_participants(active);
    with_live_counts(participants, rounds)
        .into_iter()
        .map(|p| ParticipantProgress {
            seated: seated.contains(p.id.as_str()),
            next_pass_number: p.completed_passes + 1,
            id: p.id,
            display_name: p.display_name,
            completed_passes: p.completed_passes,
        })
        .collect()
}
