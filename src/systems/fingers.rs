use log::debug;

use crate::{
    Point2D,
    geometry_utils::{distance_points, scale_to_pixels},
    landmarks::{Finger, FrameSize, HandLandmarks},
};

/// Offset from a fingertip landmark down to the first joint below it; the
/// comparison joint for the extended/curled test.
pub const JOINT_SHIFT: usize = 2;

/// Classify each finger as extended or curled by comparing palm-center
/// distances in pixel space: a finger is "up" when its tip sits further from
/// the palm center than the joint below it. Returns the extended fingers;
/// callers rely on membership and count only, not ordering.
pub fn fingers_up(hand: &HandLandmarks, palm: &Point2D, size: &FrameSize) -> Vec<Finger> {
    let mut up = Vec::new();

    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        if tip_beyond_joint(hand, finger, palm, size) {
            up.push(finger);
        }
    }

    // Thumb anatomy differs from the other four fingers; the rule is the same
    // for now, but it stays a separate branch so it can be tuned on its own.
    if tip_beyond_joint(hand, Finger::Thumb, palm, size) {
        up.push(Finger::Thumb);
    }

    debug!("{} finger(s) up: {:?}", up.len(), &up);

    up
}

fn tip_beyond_joint(
    hand: &HandLandmarks,
    finger: Finger,
    palm: &Point2D,
    size: &FrameSize,
) -> bool {
    let tip = scale_to_pixels(&hand.point(finger.tip()), size);
    let joint = scale_to_pixels(&hand.point(finger.tip() - JOINT_SHIFT), size);

    distance_points(palm, &tip) > distance_points(palm, &joint)
}
