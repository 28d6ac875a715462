use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::Point2D;

pub const LANDMARK_COUNT: usize = 21;

// Landmark indices as per the MediaPipe hand model
pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// Wrist plus the four base knuckles: the "palm triangle" landmarks used for
/// the palm-center anchor.
pub const PALM_BASE: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn tip(&self) -> usize {
        match self {
            Finger::Thumb => THUMB_TIP,
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }
}

/// Pixel dimensions of the source frame, delivered by the detector alongside
/// the normalized landmarks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

/// One detected hand: exactly 21 landmarks in normalized [0,1] coordinates,
/// index semantics fixed by the detector. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct HandLandmarks {
    points: [Point2D; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Validate a detector-provided point list. Anything other than exactly
    /// 21 points is rejected here, so the classifiers can index freely
    /// without re-checking the frame shape.
    pub fn from_points(points: &[Point2D]) -> Result<HandLandmarks> {
        match <[Point2D; LANDMARK_COUNT]>::try_from(points) {
            Ok(points) => Ok(HandLandmarks { points }),
            Err(_) => Err(anyhow!(
                "malformed landmark frame: expected {} points, got {}",
                LANDMARK_COUNT,
                points.len()
            )),
        }
    }

    pub fn point(&self, index: usize) -> Point2D {
        self.points[index]
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// The five fingertip landmarks, thumb first.
    pub fn fingertips(&self) -> [Point2D; 5] {
        Finger::ALL.map(|finger| self.points[finger.tip()])
    }
}

/// One frame as recorded from the upstream landmark detector: normalized
/// hands plus the pixel dimensions they were detected at.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecordedFrame {
    pub width: f32,
    pub height: f32,
    pub hands: Vec<Vec<Point2D>>,
}

impl RecordedFrame {
    /// Validate every hand in the frame; a frame either converts wholesale or
    /// is rejected.
    pub fn to_hands(&self) -> Result<Vec<HandLandmarks>> {
        self.hands
            .iter()
            .map(|hand| HandLandmarks::from_points(hand))
            .collect()
    }

    pub fn size(&self) -> FrameSize {
        FrameSize {
            width: self.width,
            height: self.height,
        }
    }
}
