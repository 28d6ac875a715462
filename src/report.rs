use serde::{Deserialize, Serialize};

use crate::{Point2D, landmarks::Finger, systems::swiping::SwipeDirection};

/// Per-hand classification results for one frame. Rebuilt every frame, never
/// retained across frames.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GestureReport {
    pub fingers_up: Vec<Finger>,
    pub is_grabbing: bool,
    pub swipe_direction: SwipeDirection,
    /// Anchor points in pixel space, for downstream visualization
    pub center_of_mass: Point2D,
    pub palm_center: Point2D,
}

impl Default for GestureReport {
    fn default() -> Self {
        GestureReport {
            fingers_up: Vec::new(),
            is_grabbing: false,
            swipe_direction: SwipeDirection::None,
            center_of_mass: (0., 0.),
            palm_center: (0., 0.),
        }
    }
}

/// Everything the classifiers produced for one frame: one report per detected
/// hand, plus the grab-count aggregate.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub hands: Vec<GestureReport>,
    /// How many of the detected hands are currently grabbing
    pub grab_count: usize,
}
