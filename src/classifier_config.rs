use std::fs;

use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::systems::grabbing::GrabStrategy;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    // -------- GRAB SETTINGS
    /// Which grab classification strategy to use
    pub grab_strategy: GrabStrategy,

    /// Max distance (normalized units, resolution-independent) from each
    /// fingertip to the fingertip centroid for a FingertipCluster grab
    pub grab_cluster_threshold: f32,

    /// Max distance (pixels) between center of mass and palm center for a
    /// PalmProximity grab
    pub grab_palm_proximity_max_px: f32,

    // -------- SWIPE SETTINGS
    /// Swap reported Left/Right to compensate for a horizontally-mirrored
    /// (selfie-view) camera feed
    pub swipe_mirror_horizontal: bool,

    /// Index of the detector-reported hand that drives the swipe machine
    pub primary_hand: usize,

    // -------- OUTPUT TOGGLES
    /// Report finger-up counts per hand
    pub enable_finger_count: bool,

    /// Report the per-frame grabbing-hands count
    pub enable_grab_count: bool,

    /// Report the center-of-mass and palm-center anchor points
    pub enable_anchors: bool,

    /// Report swipe-direction events
    pub enable_swipe: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            grab_strategy: GrabStrategy::FingertipCluster,
            grab_cluster_threshold: 0.02,
            grab_palm_proximity_max_px: 100.,
            swipe_mirror_horizontal: true,
            primary_hand: 0,
            enable_finger_count: true,
            enable_grab_count: true,
            enable_anchors: false,
            enable_swipe: true,
        }
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<ClassifierConfig> {
    let config = ClassifierConfig::default();
    debug!("Created init config object {:?}", config);

    match fs::read_to_string(config_file_path) {
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!(
                    "Classifier config file not found at \"{}\"; using defaults",
                    &config_file_path
                );
                Ok(config)
            } else {
                Err(anyhow!("Failed to load classifier config from disk: {:?}", e))
            }
        }
        Ok(s) => {
            info!("Loaded classifier config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<ClassifierConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.grab_strategy, GrabStrategy::FingertipCluster);
        assert_eq!(config.grab_cluster_threshold, 0.02);
        assert_eq!(config.grab_palm_proximity_max_px, 100.);
        assert!(config.swipe_mirror_horizontal);
        assert_eq!(config.primary_hand, 0);
    }

    #[test]
    fn test_json_round_trip_camel_case() {
        let config = ClassifierConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"grabClusterThreshold\":0.02"));
        assert!(json.contains("\"grabStrategy\":\"FingertipCluster\""));

        let parsed: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.grab_cluster_threshold, config.grab_cluster_threshold);
        assert_eq!(parsed.swipe_mirror_horizontal, config.swipe_mirror_horizontal);
    }
}
