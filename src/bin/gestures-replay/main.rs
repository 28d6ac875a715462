use std::fs;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::{debug, info, warn};

use hand_gesture_classification::classifier_config::load_config_from_file;
use hand_gesture_classification::landmarks::RecordedFrame;
use hand_gesture_classification::systems::swiping::SwipeDirection;
use hand_gesture_classification::systems::{Systems, handle_frame};

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let mut systems = Systems::new(&config);

    let frames = load_recorded_frames(&cli.frames_path)?;
    info!(
        "Loaded {} recorded frame(s) from \"{}\"",
        frames.len(),
        &cli.frames_path
    );

    let mut rejected = 0;
    let mut swipes = 0;

    for (frame_index, recorded) in frames.iter().enumerate() {
        let hands = match recorded.to_hands() {
            Ok(hands) => hands,
            Err(e) => {
                warn!("Rejected frame {}: {}", frame_index, e);
                rejected += 1;
                continue;
            }
        };

        let report = handle_frame(&hands, &recorded.size(), &mut systems);

        for (hand_index, hand_report) in report.hands.iter().enumerate() {
            if config.enable_finger_count {
                info!(
                    "frame {} hand {}: {} finger(s) up",
                    frame_index,
                    hand_index,
                    hand_report.fingers_up.len()
                );
            }
            if config.enable_anchors {
                debug!(
                    "frame {} hand {}: mass {:?}, palm {:?}",
                    frame_index, hand_index, hand_report.center_of_mass, hand_report.palm_center
                );
            }
            if config.enable_swipe && hand_report.swipe_direction != SwipeDirection::None {
                swipes += 1;
                println!("{:?}", hand_report.swipe_direction);
            }
        }

        if config.enable_grab_count {
            info!(
                "frame {}: {} of {} hand(s) grabbing",
                frame_index,
                report.grab_count,
                report.hands.len()
            );
        }
    }

    info!(
        "Replay done: {} frame(s), {} rejected, {} swipe event(s)",
        frames.len(),
        rejected,
        swipes
    );

    Ok(())
}

fn load_recorded_frames(path: &str) -> Result<Vec<RecordedFrame>> {
    let bytes = fs::read(path).map_err(|e| anyhow!("Failed to read \"{}\": {}", path, e))?;

    if path.ends_with(".msgpack") || path.ends_with(".mp") {
        rmp_serde::from_slice(&bytes).map_err(|e| anyhow!("Failed to decode frames: {}", e))
    } else {
        serde_json::from_slice(&bytes).map_err(|e| anyhow!("Failed to decode frames: {}", e))
    }
}
