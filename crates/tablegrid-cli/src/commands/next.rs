use std::path::Path;

use tablegrid_core::{SchedulerConfig, SchedulingDecision, TournamentSnapshot};

pub fn next(snapshot_path: &Path, config: &SchedulerConfig, format: &str) -> anyhow::Result<()> {
    let snapshot = TournamentSnapshot::from_file(snapshot_path)?;
    let decision = tablegrid_scheduler::schedule_next_pass(&snapshot, config);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        _ => {
            println!("{}", format_decision(&decision));
        }
    }

    Ok(())
}

pub fn format_decision(decision: &SchedulingDecision) -> String {
    let mut out = String::new();

    if decision.is_playable {
        out.push_str(&format!("Next table: {}\n", decision.next_pass_label));
    } else {
        out.push_str(&format!("Pass {}: no table can start\n", decision.next_pass_number));
        if let Some(reason) = &decision.reason {
            out.push_str(&format!("  {reason}\n"));
        }
    }

    if !decision.eligible_players.is_empty() {
        out.push_str(&format!("Eligible players ({}):\n", decision.eligible_players.len()));
        for player in &decision.eligible_players {
            out.push_str(&format!(
                "  {:<20} {} completed\n",
                player.display_name, player.completed_passes
            ));
        }
    }

    out.trim_end().to_string()
}
