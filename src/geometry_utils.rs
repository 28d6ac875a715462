use map_range::MapRange;

use crate::{Point2D, landmarks::FrameSize};

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1).powf(2.0) + (y2 - y1).powf(2.0)).sqrt()
}

pub fn distance_points(a: &Point2D, b: &Point2D) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;

    f32::sqrt(f32::powi(x1 - x2, 2) + f32::powi(y1 - y2, 2))
}

/// Arithmetic mean of a point set; None when the set is empty. Every caller
/// in this crate holds a fixed-count invariant (21 landmarks, 5 fingertips),
/// so None signals a caller bug rather than a runtime condition.
pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
    let count = points.len();
    points
        .iter()
        .cloned()
        .reduce(|acc, el| (acc.0 + el.0, acc.1 + el.1))
        .map(|(x, y)| (x / count as f32, y / count as f32))
}

/// Remap a normalized [0,1] detector point into pixel space for the given
/// frame dimensions.
pub fn scale_to_pixels(p: &Point2D, size: &FrameSize) -> Point2D {
    let (x, y) = *p;
    (
        x.map_range(0.0..1.0, 0.0..size.width),
        y.map_range(0.0..1.0, 0.0..size.height),
    )
}

/// Inverse of `scale_to_pixels`.
pub fn normalize_to_unit(p: &Point2D, size: &FrameSize) -> Point2D {
    let (x, y) = *p;
    (
        x.map_range(0.0..size.width, 0.0..1.0),
        y.map_range(0.0..size.height, 0.0..1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_both_signatures_agree() {
        assert_eq!(distance(0., 0., 3., 4.), 5.0);
        assert_eq!(distance_points(&(0., 0.), &(3., 4.)), 5.0);
        assert_eq!(distance(-1., -1., -4., 3.), 5.0);
    }

    #[test]
    fn test_centroid_unit_square() {
        let points = [(0., 0.), (1., 0.), (1., 1.), (0., 1.)];
        assert_eq!(centroid(&points), Some((0.5, 0.5)));
    }

    #[test]
    fn test_centroid_empty_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_scale_round_trip_non_square() {
        let size = FrameSize {
            width: 1280.,
            height: 920.,
        };
        let original = (0.37, 0.81);
        let (x, y) = normalize_to_unit(&scale_to_pixels(&original, &size), &size);
        assert!((x - original.0).abs() < 1e-6);
        assert!((y - original.1).abs() < 1e-6);
    }

    #[test]
    fn test_scale_uses_both_axes() {
        let size = FrameSize {
            width: 1000.,
            height: 500.,
        };
        assert_eq!(scale_to_pixels(&(0.5, 0.5), &size), (500., 250.));
    }
}
