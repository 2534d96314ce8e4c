use std::path::Path;

use anyhow::bail;
use tablegrid_core::{SchedulerConfig, TournamentSnapshot};

pub fn validate(
    snapshot_path: &Path,
    config: &SchedulerConfig,
    pass: Option<u32>,
    label: &str,
    players: &[String],
) -> anyhow::Result<()> {
    let (pass, letters) = resolve_table(pass, label)?;
    let snapshot = TournamentSnapshot::from_file(snapshot_path)?;
    tablegrid_scheduler::validate_seating(&snapshot, config, pass, &letters, players)?;

    println!("✓ Table {pass}{letters} can start with {}", players.join(", "));
    Ok(())
}

/// Accept either bare letters with `--pass`, or a full label like `3B`.
pub fn resolve_table(pass: Option<u32>, label: &str) -> anyhow::Result<(u32, String)> {
    let upper = label.to_ascii_uppercase();
    match (tablegrid_scheduler::parse_label(&upper), pass) {
        (Some((from_label, _)), Some(pass)) if from_label != pass => {
            bail!("label {upper} is for pass {from_label}, not pass {pass}")
        }
        (Some((from_label, letters)), _) => Ok((from_label, letters)),
        (None, Some(pass)) => Ok((pass, upper)),
        (None, None) => bail!("--pass is required unless the label carries it (e.g. 3B)"),
    }
}
