//! tablegrid-scheduler: decides which table can start next.
//!
//! Given a snapshot of participants, completed rounds, and active tables,
//! the scheduler proposes the next pass number, the participants free to
//! play it, and a table label that does not collide with tables already
//! running that pass. It is a pure function of the snapshot: no I/O, no
//! locking, no stored state. Reservation of the proposed table belongs to
//! the persistence layer.
//!
//! # Components
//!
//! - **`progress`**: completed-pass counts derived from the round log
//! - **`eligibility`**: who may sit down for a given pass number
//! - **`search`**: forward search for the first playable pass number
//! - **`label`**: table label codec and allocator
//! - **`capacity`**: tables per pass and occupancy
//! - **`scheduler`**: the composed decision
//! - **`validate`**: re-checks a concrete seating before commit

pub mod capacity;
pub mod eligibility;
pub mod label;
pub mod progress;
pub mod scheduler;
pub mod search;
pub mod validate;

pub use capacity::{PassOccupancy, is_pass_full, max_tables, occupancy_by_pass, pass_capacity, pass_occupancy, tables_in_pass};
pub use eligibility::{eligible_for_pass, is_eligible, seated_participants};
pub use label::{allocate_table_label, compose_label, label_to_ordinal, ordinal_to_label, parse_label, used_labels};
pub use progress::{ParticipantProgress, count_completed_passes, participant_progress, with_live_counts};
pub use scheduler::schedule_next_pass;
pub use search::{PassSearch, find_next_playable_pass};
pub use validate::{SeatingRejected, SeatingViolation, validate_seating};
