//! Face Geometry
//!
//! Landmark data model and aspect-ratio computation for drowsiness detection:
//! - 68-point facial landmark sets with eye/mouth region accessors
//! - Eye aspect ratio (EAR): low value = closed/closing eye
//! - Mouth aspect ratio (MAR): high value = open mouth (yawn candidate)

mod aspect;
mod landmarks;

pub use aspect::{eye_aspect_ratio, mouth_aspect_ratio};
pub use landmarks::{LandmarkSet, Point, LANDMARK_COUNT, MOUTH_POINT_COUNT};

use thiserror::Error;

/// Landmark geometry error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Expected {expected} landmark points, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },
}
