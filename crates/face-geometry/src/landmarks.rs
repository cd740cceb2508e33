//! Facial landmark sets in the 68-point dlib layout

use serde::{Deserialize, Serialize};

use crate::GeometryError;

/// Number of points in a full landmark set
pub const LANDMARK_COUNT: usize = 68;

/// Number of points in the mouth region (outer + inner lips)
pub const MOUTH_POINT_COUNT: usize = 20;

/// Right eye contour (subject's right), 6 points
const RIGHT_EYE_RANGE: std::ops::Range<usize> = 36..42;

/// Left eye contour (subject's left), 6 points
const LEFT_EYE_RANGE: std::ops::Range<usize> = 42..48;

/// Mouth region, 20 points (12 outer lip + 8 inner lip)
const MOUTH_RANGE: std::ops::Range<usize> = 48..68;

/// A 2D landmark point in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected face's landmarks, fixed 68-point layout.
///
/// Produced by an external landmark model once per detected face per frame;
/// immutable after construction, so the 68-point invariant always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    /// Create a landmark set, rejecting anything but exactly 68 points
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() != LANDMARK_COUNT {
            return Err(GeometryError::WrongPointCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// All 68 points in model order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Subject's left eye contour
    pub fn left_eye(&self) -> [Point; 6] {
        self.eye_region(LEFT_EYE_RANGE)
    }

    /// Subject's right eye contour
    pub fn right_eye(&self) -> [Point; 6] {
        self.eye_region(RIGHT_EYE_RANGE)
    }

    /// The 20 mouth points (outer lip first, then inner lip)
    pub fn mouth(&self) -> &[Point] {
        &self.points[MOUTH_RANGE]
    }

    fn eye_region(&self, range: std::ops::Range<usize>) -> [Point; 6] {
        let mut eye = [Point::default(); 6];
        eye.copy_from_slice(&self.points[range]);
        eye
    }
}
