use std::path::Path;

use serde_json::json;
use tablegrid_core::{SchedulerConfig, TournamentSnapshot};
use tablegrid_scheduler::{PassOccupancy, ParticipantProgress};

pub fn progress(snapshot_path: &Path, config: &SchedulerConfig, format: &str) -> anyhow::Result<()> {
    let snapshot = TournamentSnapshot::from_file(snapshot_path)?;
    let participants = tablegrid_scheduler::participant_progress(
        &snapshot.participants,
        &snapshot.completed_rounds,
        &snapshot.active_tables,
    );
    let passes = tablegrid_scheduler::occupancy_by_pass(
        &snapshot.completed_rounds,
        &snapshot.active_tables,
        snapshot.participants.len(),
        config.table_size,
    );

    match format {
        "json" => {
            let report = json!({ "participants": participants, "passes": passes });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!("{}", format_progress(&participants, &passes));
        }
    }

    Ok(())
}

pub fn format_progress(participants: &[ParticipantProgress], passes: &[PassOccupancy]) -> String {
    let mut out = String::from("Participants:\n");
    for p in participants {
        let status = if p.seated { "playing" } else { "free" };
        out.push_str(&format!(
            "  {:<20} {:>3} completed, next pass {:<3} [{status}]\n",
            p.display_name, p.completed_passes, p.next_pass_number
        ));
    }

    if !passes.is_empty() {
        out.push_str("Passes:\n");
        for pass in passes {
            out.push_str(&format!(
                "  pass {:<3} {} done, {} running, max {}{}\n",
                pass.pass_number,
                pass.completed_tables,
                pass.active_tables,
                pass.max_tables,
                if pass.is_full { " (full)" } else { "" }
            ));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_participants_and_passes() {
        let participants = vec![ParticipantProgress {
            id: "a".to_string(),
            display_name: "Anna".to_string(),
            completed_passes: 2,
            next_pass_number: 3,
            seated: true,
        }];
        let passes = vec![PassOccupancy {
            pass_number: 1,
            completed_tables: 2,
            active_tables: 0,
            max_tables: 2,
            is_full: true,
        }];

        let text = format_progress(&participants, &passes);
        assert!(text.contains("Anna"));
        assert!(text.contains("next pass 3"));
        assert!(text.contains("[playing]"));
        assert!(text.contains("pass 1   2 done, 0 running, max 2 (full)"));
    }

    #[test]
    fn omits_pass_section_before_first_table() {
        let text = format_progress(&[], &[]);
        assert_eq!(text, "Participants:");
    }
}
