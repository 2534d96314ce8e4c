//! Tables per pass.
//!
//! With `n` participants and tables of `k`, at most `n / k` tables can run
//! the same pass number; the remaining `n % k` participants sit out that
//! pass and catch up later.

use std::collections::BTreeSet;

use serde::Serialize;
use tablegrid_core::{ActiveTable, CompletedRound, PassNumber};

pub fn max_tables(total_participants: usize, table_size: u32) -> usize {
    if table_size == 0 {
        return 0;
    }
    total_participants / table_size as usize
}

/// Players a single pass can hold (always a multiple of the table size).
pub fn pass_capacity(total_participants: usize, table_size: u32) -> usize {
    max_tables(total_participants, table_size) * table_size as usize
}

/// Completed and active tables recorded for `pass_number`.
pub fn tables_in_pass(pass_number: PassNumber, completed: &[CompletedRound], active: &[ActiveTable]) -> usize {
    let done = completed.iter().filter(|r| r.pass_number == pass_number).count();
    let running = active.iter().filter(|t| t.pass_number == pass_number).count();
    done + running
}

pub fn is_pass_full(
    pass_number: PassNumber,
    completed: &[CompletedRound],
    active: &[ActiveTable],
    total_participants: usize,
    table_size: u32,
) -> bool {
    let seated = tables_in_pass(pass_number, completed, active) * table_size as usize;
    seated >= pass_capacity(total_participants, table_size)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassOccupancy {
    pub pass_number: PassNumber,
    pub completed_tables: usize,
    pub active_tables: usize,
    pub max_tables: usize,
    pub is_full: bool,
}

pub fn pass_occupancy(
    pass_number: PassNumber,
    completed: &[CompletedRound],
    active: &[ActiveTable],
    total_participants: usize,
    table_size: u32,
) -> PassOccupancy {
    PassOccupancy {
        pass_number,
        completed_tables: completed.iter().filter(|r| r.pass_number == pass_number).count(),
        active_tables: active.iter().filter(|t| t.pass_number == pass_number).count(),
        max_tables: max_tables(total_participants, table_size),
        is_full: is_pass_full(pass_number, completed, active, total_participants, table_size),
    }
}

/// Occupancy for every pass number that has at least one table, ascending.
pub fn occupancy_by_pass(
    completed: &[CompletedRound],
    active: &[ActiveTable],
    total_participants: usize,
    table_size: u32,
) -> Vec<PassOccupancy> {
    let passes: BTreeSet<PassNumber> = completed
        .iter()
        .map(|r| r.pass_number)
        .chain(active.iter().map(|t| t.pass_number))
        .collect();

    passes
        .into_iter()
        .map(|pass| pass_occupancy(pass, completed, active, total_participants, table_size))
        .collect()
}
