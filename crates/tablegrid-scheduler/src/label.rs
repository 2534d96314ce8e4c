//! Table labels.
//!
//! Tables running the same pass number are told apart by letters:
//! ordinal 0 is `A`, 25 is `Z`, 26 is `AA`, 27 is `AB`, and so on
//! (bijective base 26, like spreadsheet columns). A pass number and its
//! letters form the label shown to players, e.g. `3B`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tablegrid_core::{ActiveTable, CompletedRound, PassNumber};
use tracing::{debug, warn};

use crate::capacity::max_tables;

static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Z]+)$").expect("label pattern is a valid regex"));

pub fn ordinal_to_label(ordinal: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = ordinal + 1;
    while remaining > 0 {
        remaining -= 1;
        letters.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// Inverse of [`ordinal_to_label`]. `None` unless the input is one or more
/// letters A–Z (case-insensitive).
pub fn label_to_ordinal(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut value: usize = 0;
    for c in letters.chars() {
        let c = c.to_ascii_uppercase();
        if !c.is_ascii_uppercase() {
            return None;
        }
        value = value
            .checked_mul(26)?
            .checked_add((c as u8 - b'A') as usize + 1)?;
    }
    Some(value - 1)
}

pub fn compose_label(pass_number: PassNumber, letters: &str) -> String {
    format!("{pass_number}{letters}")
}

/// Split `"12AB"` into `(12, "AB")`.
pub fn parse_label(label: &str) -> Option<(PassNumber, String)> {
    let caps = LABEL_PATTERN.captures(label)?;
    let pass_number = caps[1].parse().ok()?;
    Some((pass_number, caps[2].to_string()))
}

/// Letters already taken for `pass_number` by completed or active tables.
pub fn used_labels(
    pass_number: PassNumber,
    completed: &[CompletedRound],
    active: &[ActiveTable],
) -> HashSet<String> {
    let from_completed = completed
        .iter()
        .filter(|round| round.pass_number == pass_number && !round.table_label.is_empty())
        .map(|round| round.table_label.clone());

    let from_active = active
        .iter()
        .filter(|table| table.pass_number == pass_number)
        .filter_map(|table| table.table_label.clone());

    from_completed.chain(from_active).collect()
}

/// First free label for `pass_number`, scanning ordinals below the table
/// bound for this participant count.
///
/// When every slot is taken the last valid label comes back and a warning
/// is logged; the search should have prevented that, but a stale snapshot
/// can still get here.
pub fn allocate_table_label(
    pass_number: PassNumber,
    completed: &[CompletedRound],
    active: &[ActiveTable],
    total_participants: usize,
    table_size: u32,
) -> String {
    let bound = max_tables(total_participants, table_size);
    if bound == 0 {
        warn!(
            pass = pass_number,
            total_participants, "fewer participants than one table, falling back to first label"
        );
        return ordinal_to_label(0);
    }

    let used = used_labels(pass_number, completed, active);
    for ordinal in 0..bound {
        let label = ordinal_to_label(ordinal);
        if !used.contains(&label) {
            debug!(pass = pass_number, label = %label, used = used.len(), "allocated table label");
            return label;
        }
    }

    warn!(
        pass = pass_number,
        max_tables = bound,
        "all table labels for pass in use, returning last label"
    );
    ordinal_to_label(bound - 1)
}
