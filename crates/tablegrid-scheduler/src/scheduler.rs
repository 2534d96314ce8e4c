//! The composed scheduling decision.

use tablegrid_core::{SchedulerConfig, SchedulingDecision, TournamentSnapshot};
use tracing::info;

use crate::label::{allocate_table_label, compose_label};
use crate::progress::with_live_counts;
use crate::search::find_next_playable_pass;

/// Decide the next table for `snapshot`.
///
/// Counts are recomputed from the completed-round log, the search picks
/// the pass number and eligible participants, and a table label is
/// allocated only when the pass is playable. Never fails: blocked states
/// come back as a non-playable decision with a reason.
pub fn schedule_next_pass(snapshot: &TournamentSnapshot, config: &SchedulerConfig) -> SchedulingDecision {
    let participants = with_live_counts(&snapshot.participants, &snapshot.completed_rounds);
    let search = find_next_playable_pass(&participants, &snapshot.active_tables, config);

    if !search.is_playable {
        if let Some(reason) = &search.reason {
            info!(pass = search.pass_number, %reason, "no table can start");
        }
        return SchedulingDecision {
            next_pass_number: search.pass_number,
            next_pass_label: search.pass_number.to_string(),
            eligible_players: search.eligible,
            is_playable: false,
            reason: search.reason,
        };
    }

    let letters = allocate_table_label(
        search.pass_number,
        &snapshot.completed_rounds,
        &snapshot.active_tables,
        snapshot.participants.len(),
        config.table_size,
    );
    let label = compose_label(search.pass_number, &letters);
    info!(label = %label, eligible = search.eligible.len(), "next table proposed");

    SchedulingDecision {
        next_pass_number: search.pass_number,
        next_pass_label: label,
        eligible_players: search.eligible,
        is_playable: true,
        reason: None,
    }
}
