//! Next-playable-pass search.
//!
//! Starts at the lowest pass number someone still has to play
//! (`min completed + 1`) and walks forward:
//!
//! 1. At least `table_size` eligible → playable.
//! 2. Nobody eligible → not playable at this candidate. The search does
//!    not look past it, even if free participants are further ahead.
//! 3. Some but not enough eligible → try the next pass number.
//!
//! When the iteration ceiling is reached the result is a not-playable
//! fallback at the starting pass number with nobody eligible.

use tablegrid_core::{ActiveTable, NotPlayableReason, ParticipantRef, PassNumber, SchedulerConfig};
use tracing::{debug, warn};

use crate::eligibility::{eligible_for_pass, seated_participants};

/// Outcome of the search, before a table label is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSearch {
    pub pass_number: PassNumber,
    pub eligible: Vec<ParticipantRef>,
    pub is_playable: bool,
    pub reason: Option<NotPlayableReason>,
}

impl PassSearch {
    fn playable(pass_number: PassNumber, eligible: Vec<ParticipantRef>) -> Self {
        Self {
            pass_number,
            eligible,
            is_playable: true,
            reason: None,
        }
    }

    fn blocked(pass_number: PassNumber, eligible: Vec<ParticipantRef>, reason: NotPlayableReason) -> Self {
        Self {
            pass_number,
            eligible,
            is_playable: false,
            reason: Some(reason),
        }
    }
}

/// Find the first pass number with a full table of eligible participants.
///
/// `participants` must carry counts from [`crate::progress::with_live_counts`].
pub fn find_next_playable_pass(
    participants: &[ParticipantRef],
    active: &[ActiveTable],
    config: &SchedulerConfig,
) -> PassSearch {
    let required = config.table_size;

    if participants.is_empty() {
        return PassSearch::blocked(1, Vec::new(), NotPlayableReason::NoParticipants);
    }
    if participants.len() < required as usize {
        return PassSearch::blocked(
            1,
            Vec::new(),
            NotPlayableReason::TooFewParticipants {
                total: participants.len(),
                required,
            },
        );
    }

    let seated = seated_participants(active);
    let min_completed = participants
        .iter()
        .map(|p| p.completed_passes)
        .min()
        .unwrap_or(0);

    let start = min_completed + 1;
    let mut candidate = start;

    for _ in 0..config.max_search_iterations {
        let eligible = eligible_for_pass(participants, candidate, &seated);
        debug!(candidate, eligible = eligible.len(), seated = seated.len(), "checked pass");

        if eligible.len() >= required as usize {
            return PassSearch::playable(candidate, eligible);
        }

        if eligible.is_empty() {
            return PassSearch::blocked(
                candidate,
                eligible,
                NotPlayableReason::NoneAvailable {
                    pass_number: candidate,
                },
            );
        }

        candidate += 1;
    }

    warn!(
        start,
        last_candidate = candidate,
        iterations = config.max_search_iterations,
        "pass search hit iteration ceiling, returning fallback"
    );
    PassSearch::blocked(
        start,
        Vec::new(),
        NotPlayableReason::SearchExhausted {
            iterations: config.max_search_iterations,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str, completed: u32) -> ParticipantRef {
        ParticipantRef {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            completed_passes: completed,
        }
    }

    fn table(pass: u32, ids: &[&str]) -> ActiveTable {
        ActiveTable {
            pass_number: pass,
            table_label: Some("A".to_string()),
            participant_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(search: &PassSearch) -> Vec<&str> {
        search.eligible.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn no_participants() {
        let search = find_next_playable_pass(&[], &[], &SchedulerConfig::default());

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert_eq!(search.reason, Some(NotPlayableReason::NoParticipants));
    }

    #[test]
    fn fewer_than_a_table() {
        let participants = vec![p("a", 0), p("b", 0), p("c", 0)];
        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert_eq!(
            search.reason,
            Some(NotPlayableReason::TooFewParticipants { total: 3, required: 4 })
        );
    }

    #[test]
    fn fresh_tournament_starts_at_one() {
        let participants = vec![p("a", 0), p("b", 0), p("c", 0), p("d", 0)];
        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert_eq!(search.eligible.len(), 4);
        assert!(search.reason.is_none());
    }

    #[test]
    fn laggards_fill_the_earliest_pass() {
        let participants = vec![p("a", 1), p("b", 0), p("c", 0), p("d", 0), p("e", 0)];
        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert_eq!(ids(&search), vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn advances_past_partial_pass() {
        // Nine players, 2 tables done with pass 1, one straggler still on 0.
        let mut participants: Vec<ParticipantRef> =
            ["a", "b", "c", "d", "e", "f", "g", "h"].iter().map(|id| p(id, 1)).collect();
        participants.push(p("i", 0));

        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(search.is_playable);
        assert_eq!(search.pass_number, 2);
        assert_eq!(search.eligible.len(), 9);
        assert_eq!(search.eligible[0].id, "i");
    }

    #[test]
    fn everyone_seated_is_not_playable() {
        let participants = vec![p("a", 0), p("b", 0), p("c", 0), p("d", 0)];
        let active = vec![table(1, &["a", "b", "c", "d"])];

        let search = find_next_playable_pass(&participants, &active, &SchedulerConfig::default());

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert!(search.eligible.is_empty());
        assert_eq!(search.reason, Some(NotPlayableReason::NoneAvailable { pass_number: 1 }));
    }

    #[test]
    fn zero_eligible_stops_even_with_players_ahead() {
        // e-h finished pass 1 while a-d still play it; pass 1 has nobody
        // free, so the search stops there.
        let participants = vec![
            p("a", 0), p("b", 0), p("c", 0), p("d", 0),
            p("e", 1), p("f", 1), p("g", 1), p("h", 1),
        ];
        let active = vec![table(1, &["a", "b", "c", "d"])];

        let search = find_next_playable_pass(&participants, &active, &SchedulerConfig::default());

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert!(search.eligible.is_empty());
        assert_eq!(search.reason, Some(NotPlayableReason::NoneAvailable { pass_number: 1 }));
    }

    #[test]
    fn too_few_free_players_runs_into_the_ceiling() {
        let participants = vec![
            p("a", 0), p("b", 0), p("c", 0), p("d", 0),
            p("e", 0), p("f", 0), p("g", 0), p("h", 0),
            p("i", 0),
        ];
        let active = vec![
            table(1, &["a", "b", "c", "d"]),
            table(1, &["e", "f", "g", "h"]),
        ];

        let search = find_next_playable_pass(&participants, &active, &SchedulerConfig::default());

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert!(search.eligible.is_empty());
        assert_eq!(search.reason, Some(NotPlayableReason::SearchExhausted { iterations: 100 }));
    }

    #[test]
    fn partial_pass_advances_to_a_full_table() {
        // Two laggards at 0, four players at 1: pass 1 has two eligible,
        // pass 2 has all six.
        let participants = vec![p("a", 0), p("b", 0), p("c", 1), p("d", 1), p("e", 1), p("f", 1)];
        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(search.is_playable);
        assert_eq!(search.pass_number, 2);
        assert_eq!(ids(&search), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn iteration_ceiling_returns_fallback() {
        // Three laggards at 0, a fourth participant far ahead: reaching it
        // takes more candidates than the ceiling allows.
        let participants = vec![p("a", 0), p("b", 0), p("c", 0), p("d", 50)];
        let config = SchedulerConfig {
            max_search_iterations: 10,
            ..SchedulerConfig::default()
        };

        let search = find_next_playable_pass(&participants, &[], &config);

        assert!(!search.is_playable);
        assert_eq!(search.pass_number, 1);
        assert!(search.eligible.is_empty());
        assert_eq!(search.reason, Some(NotPlayableReason::SearchExhausted { iterations: 10 }));
    }

    #[test]
    fn wide_spread_within_ceiling_is_playable() {
        let participants = vec![p("a", 0), p("b", 0), p("c", 0), p("d", 50)];
        let search = find_next_playable_pass(&participants, &[], &SchedulerConfig::default());

        assert!(search.is_playable);
        assert_eq!(search.pass_number, 51);
    }

    #[test]
    fn respects_configured_table_size() {
        let participants = vec![p("a", 0), p("b", 0), p("c", 0)];
        let config = SchedulerConfig {
            table_size: 2,
            ..SchedulerConfig::default()
        };

        let search = find_next_playable_pass(&participants, &[], &config);

        assert!(search.is_playable);
        assert_eq!(search.eligible.len(), 3);
    }
}
