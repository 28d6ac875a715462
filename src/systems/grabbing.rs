use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    geometry_utils::{centroid, distance, distance_points},
    landmarks::{FrameSize, HandLandmarks},
};

use super::anchors::{center_of_mass, palm_center};

/// How a hand qualifies as "grabbing".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabStrategy {
    /// All five fingertips clustered within a radius of their shared centroid
    /// (fist, or all fingers pinched together). Threshold is in normalized
    /// units, so the test is resolution-independent.
    FingertipCluster,
    /// Center of mass close to the palm center, measured in pixels.
    PalmProximity,
}

pub struct GrabSettings {
    pub strategy: GrabStrategy,
    /// Max normalized distance from each fingertip to the fingertip centroid
    /// (FingertipCluster only)
    pub cluster_threshold: f32,
    /// Max pixel distance between center of mass and palm center
    /// (PalmProximity only)
    pub palm_proximity_max_px: f32,
}

pub struct GrabDetector {
    settings: GrabSettings,
}

impl GrabDetector {
    pub fn new(settings: GrabSettings) -> Self {
        GrabDetector { settings }
    }

    /// Classify a single hand. FingertipCluster requires EVERY fingertip
    /// within range of the cluster centroid: one extended finger disqualifies
    /// the grab.
    pub fn is_grabbing(&self, hand: &HandLandmarks, size: &FrameSize) -> bool {
        match self.settings.strategy {
            GrabStrategy::FingertipCluster => {
                let tips = hand.fingertips();
                let Some(center) = centroid(&tips) else {
                    return false;
                };
                let grabbing = tips
                    .iter()
                    .all(|tip| distance_points(tip, &center) <= self.settings.cluster_threshold);
                debug!("fingertip cluster grabbing: {}", grabbing);
                grabbing
            }
            GrabStrategy::PalmProximity => {
                let (mass_x, mass_y) = center_of_mass(hand, size);
                let (palm_x, palm_y) = palm_center(hand, size);
                distance(mass_x, mass_y, palm_x, palm_y) < self.settings.palm_proximity_max_px
            }
        }
    }

    /// Count variant: classify each detected hand independently and count the
    /// grabbing ones, rather than OR-ing into a single boolean.
    pub fn count_grabbing(&self, hands: &[HandLandmarks], size: &FrameSize) -> usize {
        hands
            .iter()
            .filter(|hand| self.is_grabbing(hand, size))
            .count()
    }
}
