use crate::{
    Point2D,
    geometry_utils::scale_to_pixels,
    landmarks::{FrameSize, HandLandmarks, LANDMARK_COUNT, PALM_BASE, WRIST},
};

/// Mean of all 21 landmarks, in pixel space. Each point is scaled before
/// averaging: scaling and averaging do not commute on non-square frames.
pub fn center_of_mass(hand: &HandLandmarks, size: &FrameSize) -> Point2D {
    let (sum_x, sum_y) = hand.points().iter().fold((0., 0.), |acc, p| {
        let (x, y) = scale_to_pixels(p, size);
        (acc.0 + x, acc.1 + y)
    });
    (
        sum_x / LANDMARK_COUNT as f32,
        sum_y / LANDMARK_COUNT as f32,
    )
}

/// Weighted average of the palm-base landmarks in pixel space: wrist plus the
/// four knuckles, with the wrist counted twice (divisor 6). The double wrist
/// weight keeps the anchor stable regardless of which fingers are extended.
pub fn palm_center(hand: &HandLandmarks, size: &FrameSize) -> Point2D {
    let (sum_x, sum_y) = PALM_BASE.iter().fold((0., 0.), |acc, index| {
        let (x, y) = scale_to_pixels(&hand.point(*index), size);
        (acc.0 + x, acc.1 + y)
    });

    // Wrist counted a second time
    let (wrist_x, wrist_y) = scale_to_pixels(&hand.point(WRIST), size);
    let total_weight = (PALM_BASE.len() + 1) as f32;

    (
        (sum_x + wrist_x) / total_weight,
        (sum_y + wrist_y) / total_weight,
    )
}
