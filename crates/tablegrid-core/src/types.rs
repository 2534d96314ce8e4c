//! Domain types for the tournament table scheduler.
//!
//! These mirror the records the persistence layer hands over on every
//! invocation: participants, completed rounds, and active tables. All of
//! them are plain data; the scheduler reads them and never writes back.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Opaque participant identifier.
pub type ParticipantId = String;

/// One-based pass number ("round" of the tournament).
pub type PassNumber = u32;

// ── Participant ───────────────────────────────────────────────────

/// A tournament participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(alias = "uid")]
    pub id: ParticipantId,
    #[serde(alias = "name", default)]
    pub display_name: String,
    /// Denormalized counter from the persistence layer. Accepted for
    /// compatibility and never consulted; counts are derived from the
    /// completed-round log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_passes_count: Option<u32>,
}

impl Participant {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            completed_passes_count: None,
        }
    }
}

// ── Completed round ───────────────────────────────────────────────

/// A finished table instance. Immutable once written by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedRound {
    #[serde(alias = "tournamentRound")]
    pub pass_number: PassNumber,
    #[serde(alias = "passeInRound", default)]
    pub table_label: String,
    #[serde(alias = "participantUidsForPasse", alias = "participantUids", default)]
    pub participant_ids: Vec<ParticipantId>,
    /// Unix timestamp (millis). Present if and only if the round finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<u64>,
}

impl CompletedRound {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn includes(&self, participant_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == participant_id)
    }
}

// ── Active table ──────────────────────────────────────────────────

/// An in-progress table in canonical shape.
///
/// Legacy records carry the pass number under several names; those are
/// folded into `pass_number` by [`crate::snapshot::RawActiveTable`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTable {
    pub pass_number: PassNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_label: Option<String>,
    #[serde(default)]
    pub participant_ids: Vec<ParticipantId>,
}

// ── Decision ──────────────────────────────────────────────────────

/// A participant as reported in a decision, with the recomputed count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRef {
    pub id: ParticipantId,
    pub display_name: String,
    pub completed_passes: u32,
}

/// Why no table can start right now.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum NotPlayableReason {
    /// The tournament has no participants.
    NoParticipants,
    /// Fewer participants than a single table needs.
    TooFewParticipants { total: usize, required: u32 },
    /// Everyone is either done with this pass or seated elsewhere.
    NoneAvailable { pass_number: PassNumber },
    /// The search ran into its iteration ceiling.
    SearchExhausted { iterations: u32 },
}

impl fmt::Display for NotPlayableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "no participants in tournament"),
            Self::TooFewParticipants { total, required } => write!(
                f,
                "minimum {required} participants required (currently {total})"
            ),
            Self::NoneAvailable { pass_number } => write!(
                f,
                "no participants available for pass {pass_number}: all have already played \
                 this many passes or are seated elsewhere"
            ),
            Self::SearchExhausted { iterations } => write!(
                f,
                "internal error: no playable pass found after {iterations} iterations"
            ),
        }
    }
}

/// The scheduler's answer. A proposal, not a reservation: the caller must
/// commit the seating through a serializing store.
///
/// On the wire `reason` is the human-readable message; callers that need
/// to branch on it use `reason_code`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingDecision {
    pub next_pass_number: PassNumber,
    /// Pass number plus table letters, e.g. `"3B"`. The bare pass number
    /// when not playable.
    pub next_pass_label: String,
    pub eligible_players: Vec<ParticipantRef>,
    pub is_playable: bool,
    /// Set only when `is_playable` is false.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "reason_message")]
    pub reason: Option<NotPlayableReason>,
}

fn reason_message<S: Serializer>(reason: &Option<NotPlayableReason>, serializer: S) -> Result<S::Ok, S::Error> {
    match reason {
        Some(reason) => serializer.collect_str(reason),
        None => serializer.serialize_none(),
    }
}

impl NotPlayableReason {
    /// Stable snake_case identifier, e.g. `"none_available"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoParticipants => "no_participants",
            Self::TooFewParticipants { .. } => "too_few_participants",
            Self::NoneAvailable { .. } => "none_available",
            Self::SearchExhausted { .. } => "search_exhausted",
        }
    }
}

impl SchedulingDecision {
    pub fn reason_code(&self) -> Option<&'static str> {
        self.reason.as_ref().map(NotPlayableReason::code)
    }

    /// Table letters of the label (`"B"` for `"3B"`), if any.
    pub fn table_letters(&self) -> Option<&str> {
        let letters = self
            .next_pass_label
            .trim_start_matches(|c: char| c.is_ascii_digit());
        (!letters.is_empty()).then_some(letters)
    }
}
