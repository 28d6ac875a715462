use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Point2D, landmarks::FrameSize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Latched grab state for one tracked hand. Owned by the caller and advanced
/// by `SwipeTracker` at most once per frame.
#[derive(Debug, Default)]
pub struct GrabSession {
    pub is_grabbing: bool,
    pub grab_origin: Option<Point2D>,
}

impl GrabSession {
    pub fn reset(&mut self) {
        self.is_grabbing = false;
        self.grab_origin = None;
    }
}

pub struct SwipeSettings {
    /// Swap the reported Left/Right to compensate for a horizontally-mirrored
    /// (selfie-view) feed. Vertical directions are unaffected: a mirror flips
    /// only the horizontal axis.
    pub mirror_horizontal: bool,
}

/// Toggle state machine turning a continuous grab signal into a one-shot
/// direction event: latch the center of mass when a grab starts, classify the
/// displacement when it releases.
///
/// Single-hand by design; the aggregator feeds one deterministically chosen
/// hand. Detector hand ordering may drift between frames, which is a known
/// limitation of the upstream, not compensated here.
pub struct SwipeTracker {
    settings: SwipeSettings,
}

impl SwipeTracker {
    pub fn new(settings: SwipeSettings) -> Self {
        SwipeTracker { settings }
    }

    /// Advance the session with this frame's grab classification and center
    /// of mass (pixel space). Emits a direction only on the grab-release
    /// frame; every other frame yields `SwipeDirection::None`.
    pub fn update(
        &self,
        session: &mut GrabSession,
        grabbing: bool,
        center_of_mass: Point2D,
        size: &FrameSize,
    ) -> SwipeDirection {
        if grabbing {
            if !session.is_grabbing {
                session.is_grabbing = true;
                session.grab_origin = Some(center_of_mass);
                debug!("grab latched at {:?}", center_of_mass);
            }
            return SwipeDirection::None;
        }

        if session.is_grabbing {
            session.is_grabbing = false;
            if let Some((origin_x, origin_y)) = session.grab_origin.take() {
                let (release_x, release_y) = center_of_mass;
                let direction =
                    self.classify(release_x - origin_x, release_y - origin_y, size);
                debug!(
                    "grab released at {:?}, direction {:?}",
                    center_of_mass, direction
                );
                return direction;
            }
        }

        SwipeDirection::None
    }

    /// Split the plane around the grab origin into four quadrants along the
    /// diagonals `dy = ±(H/W)·dx`, so the boundaries follow the frame's
    /// aspect ratio rather than a fixed 45° cross. Image-space y grows
    /// downward.
    fn classify(&self, dx: f32, dy: f32, size: &FrameSize) -> SwipeDirection {
        let slope = size.height / size.width;
        let below_falling = dy >= slope * dx;
        let below_rising = dy >= -slope * dx;

        match (below_falling, below_rising) {
            (true, true) => SwipeDirection::Down,
            (false, false) => SwipeDirection::Up,
            (false, true) => {
                if self.settings.mirror_horizontal {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                }
            }
            (true, false) => {
                if self.settings.mirror_horizontal {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: FrameSize = FrameSize {
        width: 1280.,
        height: 920.,
    };

    fn mirrored() -> SwipeTracker {
        SwipeTracker::new(SwipeSettings {
            mirror_horizontal: true,
        })
    }

    #[test]
    fn test_horizontal_release_reports_left_when_mirrored() {
        let tracker = mirrored();
        let mut session = GrabSession::default();

        assert_eq!(
            tracker.update(&mut session, true, (600., 460.), &SIZE),
            SwipeDirection::None
        );
        // Intermediate grabbing frames stay silent
        assert_eq!(
            tracker.update(&mut session, true, (640., 460.), &SIZE),
            SwipeDirection::None
        );
        // Release displaced by (+100, 0) px
        assert_eq!(
            tracker.update(&mut session, false, (700., 460.), &SIZE),
            SwipeDirection::Left
        );
        // Exactly one event: the following idle frame is None again
        assert_eq!(
            tracker.update(&mut session, false, (700., 460.), &SIZE),
            SwipeDirection::None
        );
    }

    #[test]
    fn test_unmirrored_feed_reports_right() {
        let tracker = SwipeTracker::new(SwipeSettings {
            mirror_horizontal: false,
        });
        let mut session = GrabSession::default();

        tracker.update(&mut session, true, (600., 460.), &SIZE);
        assert_eq!(
            tracker.update(&mut session, false, (700., 460.), &SIZE),
            SwipeDirection::Right
        );
    }

    #[test]
    fn test_vertical_directions_not_mirrored() {
        let tracker = mirrored();

        let mut session = GrabSession::default();
        tracker.update(&mut session, true, (600., 460.), &SIZE);
        assert_eq!(
            tracker.update(&mut session, false, (600., 660.), &SIZE),
            SwipeDirection::Down
        );

        tracker.update(&mut session, true, (600., 460.), &SIZE);
        assert_eq!(
            tracker.update(&mut session, false, (600., 260.), &SIZE),
            SwipeDirection::Up
        );
    }

    #[test]
    fn test_aspect_ratio_quadrant_boundary() {
        // The diagonals follow the frame's aspect ratio: on 1280x920 their
        // slope is 0.71875, so a (+100, -80) displacement falls in the upper
        // quadrant...
        let tracker = mirrored();
        let mut session = GrabSession::default();
        tracker.update(&mut session, true, (600., 460.), &SIZE);
        assert_eq!(
            tracker.update(&mut session, false, (700., 380.), &SIZE),
            SwipeDirection::Up
        );

        // ...while on a square frame (slope 1) the same displacement is
        // horizontal-dominant
        let square = FrameSize {
            width: 1000.,
            height: 1000.,
        };
        tracker.update(&mut session, true, (600., 460.), &square);
        assert_eq!(
            tracker.update(&mut session, false, (700., 380.), &square),
            SwipeDirection::Left
        );
    }

    #[test]
    fn test_idle_frames_never_emit() {
        let tracker = mirrored();
        let mut session = GrabSession::default();
        for _ in 0..5 {
            assert_eq!(
                tracker.update(&mut session, false, (600., 460.), &SIZE),
                SwipeDirection::None
            );
        }
        assert!(!session.is_grabbing);
        assert!(session.grab_origin.is_none());
    }

    #[test]
    fn test_reset_clears_latched_grab() {
        let tracker = mirrored();
        let mut session = GrabSession::default();
        tracker.update(&mut session, true, (600., 460.), &SIZE);
        assert!(session.is_grabbing);

        session.reset();
        assert!(!session.is_grabbing);
        // After a reset the release frame has no origin to classify against
        assert_eq!(
            tracker.update(&mut session, false, (700., 460.), &SIZE),
            SwipeDirection::None
        );
    }
}
