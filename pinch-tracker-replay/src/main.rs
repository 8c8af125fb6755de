use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::{debug, info, warn};
use pinch_tracker::{
    contexts::{HandSlot, PinchDiagnostics},
    recording::load_recording,
    PinchContext,
};
use serde::Serialize;

/// Replay a recorded pinch event stream and report where both hands ended up
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pinch-tracker-replay")]
struct ReplayConfig {
    /// JSON Lines recording to replay
    recording_path: PathBuf,

    /// Log both slots after every event
    #[arg(long)]
    frames: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ReplaySummary<'a> {
    left: &'a HandSlot,
    right: &'a HandSlot,
    last_observed_position: Vec3,
    pinches_are_targeted: bool,
    diagnostics: PinchDiagnostics,
}

impl<'a> From<&'a PinchContext> for ReplaySummary<'a> {
    fn from(pinch_context: &'a PinchContext) -> Self {
        Self {
            left: pinch_context.left(),
            right: pinch_context.right(),
            last_observed_position: pinch_context.last_observed_position(),
            pinches_are_targeted: pinch_context.pinches_are_targeted(),
            diagnostics: pinch_context.diagnostics(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ReplayConfig::parse();
    let pinch_context = replay(&config)?;

    let summary = ReplaySummary::from(&pinch_context);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn replay(config: &ReplayConfig) -> Result<PinchContext> {
    let records = load_recording(&config.recording_path).with_context(|| {
        format!(
            "Unable to load recording {}",
            config.recording_path.display()
        )
    })?;
    info!(
        "Replaying {} events from {}",
        records.len(),
        config.recording_path.display()
    );

    let mut pinch_context = PinchContext::default();
    for (frame, record) in records.iter().enumerate() {
        pinch_context.process_event(&record.to_event());
        if config.frames {
            info!(
                "[{frame}] left: {} right: {}",
                describe_slot(pinch_context.left()),
                describe_slot(pinch_context.right())
            );
        }
    }

    let diagnostics = pinch_context.diagnostics();
    if diagnostics.overflow_resets > 0 {
        warn!(
            "Recording contained {} overflow resets",
            diagnostics.overflow_resets
        );
    }
    debug!("Final diagnostics: {diagnostics:?}");

    Ok(pinch_context)
}

fn describe_slot(slot: &HandSlot) -> String {
    match (slot.assigned_event_id(), slot.current_selection_ray()) {
        (None, _) => "idle".to_string(),
        (Some(id), Some((origin, direction))) => format!(
            "{id:?} at {:?} pinching from {origin} towards {direction}",
            slot.pinch_current_position()
        ),
        (Some(id), None) => format!("{id:?} at {:?}", slot.pinch_current_position()),
    }
}

fn print_summary(summary: &ReplaySummary) {
    println!("left:  {}", describe_slot(summary.left));
    println!("right: {}", describe_slot(summary.right));
    println!("last observed position: {}", summary.last_observed_position);
    println!("targeted: {}", summary.pinches_are_targeted);
    println!("{:#?}", summary.diagnostics);
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    pub fn test_config_from_command_line() {
        let config = ReplayConfig::try_parse_from([
            "pinch-tracker-replay",
            "--json",
            "pinches.jsonl",
            "--frames",
        ])
        .unwrap();
        assert_eq!(
            config,
            ReplayConfig {
                recording_path: "pinches.jsonl".into(),
                frames: true,
                json: true,
            }
        );

        let defaults = ReplayConfig::try_parse_from(["pinch-tracker-replay", "a.jsonl"]).unwrap();
        assert!(!defaults.frames);
        assert!(!defaults.json);

        let rejected: [&[&str]; 3] = [
            &["pinch-tracker-replay"],
            &["pinch-tracker-replay", "a.jsonl", "b.jsonl"],
            &["pinch-tracker-replay", "--fast", "a.jsonl"],
        ];
        for args in rejected {
            assert!(ReplayConfig::try_parse_from(args).is_err(), "{args:?}");
        }

        // Help is never mistaken for a recording path.
        let help = ReplayConfig::try_parse_from(["pinch-tracker-replay", "-h"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let help = ReplayConfig::try_parse_from(["pinch-tracker-replay", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    pub fn test_replay() {
        let path = std::env::temp_dir().join(format!(
            "pinch_tracker_replay_{}.jsonl",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            for id in 1..=3 {
                writeln!(
                    file,
                    r#"{{"id": {id}, "kind": "indirectPinch", "phase": "active"}}"#
                )
                .unwrap();
            }
            writeln!(file, r#"{{"id": 4, "kind": "indirectPinch", "phase": "active"}}"#).unwrap();
        }

        let config = ReplayConfig {
            recording_path: path.clone(),
            frames: true,
            json: false,
        };
        let replayed = replay(&config);
        std::fs::remove_file(&path).unwrap();
        let pinch_context = replayed.unwrap();

        let diagnostics = pinch_context.diagnostics();
        assert_eq!(diagnostics.overflow_resets, 1);
        assert_eq!(describe_slot(pinch_context.right()), "idle");
        assert!(pinch_context.left().is_assigned());

        let summary = serde_json::to_value(ReplaySummary::from(&pinch_context)).unwrap();
        assert_eq!(summary["left"]["assigned_event_id"], 4);
        assert_eq!(summary["diagnostics"]["pinch_starts"], 3);
    }

    #[test]
    pub fn test_bundled_recording() {
        let recording = include_str!("../recordings/third_hand.jsonl");
        let records = pinch_tracker::recording::read_recording(recording.as_bytes()).unwrap();

        let mut pinch_context = PinchContext::default();
        for record in &records {
            pinch_context.process_event(&record.to_event());
        }

        let diagnostics = pinch_context.diagnostics();
        assert_eq!(diagnostics.events_processed, 7);
        assert_eq!(diagnostics.ignored_events, 1);
        assert_eq!(diagnostics.continuations, 1);
        assert_eq!(diagnostics.overflow_resets, 1);
        assert_eq!(diagnostics.stale_ends, 1);
        assert_eq!(diagnostics.pinch_starts, 3);

        let (origin, direction) = pinch_context.left().current_selection_ray().unwrap();
        assert_eq!(origin, Vec3::new(0., 1.5, 0.));
        assert_eq!(direction, Vec3::NEG_Z);
        assert!(pinch_context.pinches_are_targeted());
        assert!(!pinch_context.right().is_assigned());
    }

    #[test]
    pub fn test_missing_recording() {
        let config = ReplayConfig {
            recording_path: "definitely/not/here.jsonl".into(),
            frames: false,
            json: false,
        };
        let error = replay(&config).unwrap_err();
        assert!(error.to_string().contains("definitely/not/here.jsonl"));
    }
}
