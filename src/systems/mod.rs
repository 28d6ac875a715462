pub mod anchors;
pub mod fingers;
pub mod grabbing;
pub mod swiping;

use log::debug;

use crate::{
    classifier_config::ClassifierConfig,
    landmarks::{FrameSize, HandLandmarks},
    report::{FrameReport, GestureReport},
};

use anchors::{center_of_mass, palm_center};
use fingers::fingers_up;
use grabbing::{GrabDetector, GrabSettings};
use swiping::{GrabSession, SwipeDirection, SwipeSettings, SwipeTracker};

pub struct Systems {
    pub grab_detector: GrabDetector,
    pub swipe_tracker: SwipeTracker,
    /// The one persistent piece of state: the latched grab for the primary
    /// hand, advanced once per frame by the swipe tracker
    pub swipe_session: GrabSession,
    /// Which detector-reported hand drives the swipe machine
    pub primary_hand: usize,
}

impl Systems {
    pub fn new(config: &ClassifierConfig) -> Systems {
        let grab_detector = GrabDetector::new(GrabSettings {
            strategy: config.grab_strategy,
            cluster_threshold: config.grab_cluster_threshold,
            palm_proximity_max_px: config.grab_palm_proximity_max_px,
        });

        let swipe_tracker = SwipeTracker::new(SwipeSettings {
            mirror_horizontal: config.swipe_mirror_horizontal,
        });

        Systems {
            grab_detector,
            swipe_tracker,
            swipe_session: GrabSession::default(),
            primary_hand: config.primary_hand,
        }
    }
}

/// Run the full per-frame pipeline: anchors, finger states and grab
/// classification for every detected hand, swipe tracking for the primary
/// hand only (other hands always report `None`).
///
/// Zero hands is a normal, frequent state and yields an empty report; the
/// swipe session is left untouched until the tracked hand reappears.
pub fn handle_frame(
    hands: &[HandLandmarks],
    size: &FrameSize,
    systems: &mut Systems,
) -> FrameReport {
    let mut reports = Vec::with_capacity(hands.len());

    for (index, hand) in hands.iter().enumerate() {
        let mass = center_of_mass(hand, size);
        let palm = palm_center(hand, size);
        let grabbing = systems.grab_detector.is_grabbing(hand, size);

        let swipe_direction = if index == systems.primary_hand {
            systems
                .swipe_tracker
                .update(&mut systems.swipe_session, grabbing, mass, size)
        } else {
            SwipeDirection::None
        };

        reports.push(GestureReport {
            fingers_up: fingers_up(hand, &palm, size),
            is_grabbing: grabbing,
            swipe_direction,
            center_of_mass: mass,
            palm_center: palm,
        });
    }

    let grab_count = reports.iter().filter(|report| report.is_grabbing).count();
    debug!("frame: {} hand(s), {} grabbing", hands.len(), grab_count);

    FrameReport {
        hands: reports,
        grab_count,
    }
}
