//! Eligibility filter.
//!
//! A participant may sit down for pass `n` when they have completed fewer
//! than `n` passes and are not seated at any active table.

use std::collections::HashSet;

use tablegrid_core::{ActiveTable, ParticipantRef, PassNumber};

/// Ids of everyone seated at an active table, whatever its pass number.
pub fn seated_participants(active: &[ActiveTable]) -> HashSet<&str> {
    active
        .iter()
        .flat_map(|table| table.participant_ids.iter())
        .filter(|id| !id.is_empty())
        .map(String::as_str)
        .collect()
}

pub fn is_eligible(participant: &ParticipantRef, pass_number: PassNumber, seated: &HashSet<&str>) -> bool {
    participant.completed_passes < pass_number && !seated.contains(participant.id.as_str())
}

/// Eligible participants for `pass_number`, fewest completed passes first.
/// Ties keep input order. An empty result is a valid answer.
pub fn eligible_for_pass(
    participants: &[ParticipantRef],
    pass_number: PassNumber,
    seated: &HashSet<&str>,
) -> Vec<ParticipantRef> {
    let mut eligible: Vec<ParticipantRef> = participants
        .iter()
        .filter(|p| is_eligible(p, pass_number, seated))
        .cloned()
        .collect();
    eligible.sort_by_key(|p| p.completed_passes);
    eligible
}
