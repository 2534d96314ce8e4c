//! tablegrid-core: shared types for the tournament table scheduler.
//!
//! The scheduler is a pure function over a [`TournamentSnapshot`]. This
//! crate owns the snapshot shape, the normalization of legacy records
//! into it, the decision type handed back to callers, and the
//! `tablegrid.toml` configuration.

pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;

pub use config::{SchedulerConfig, TablegridConfig};
pub use error::{CoreError, CoreResult};
pub use snapshot::{RawActiveTable, RawSnapshot, TournamentSnapshot};
pub use types::*;
