//! Frame sources
//!
//! The landmark detector is an external collaborator; the frame loop only
//! sees its per-frame output. `FrameSource` is that boundary, and
//! `SyntheticSource` is a canned implementation for running the pipeline
//! without a camera or model.

use face_geometry::{LandmarkSet, Point, LANDMARK_COUNT};

/// Per-frame supplier of detected-face landmark sets.
///
/// Returns the landmark sets of every face found in the next frame (empty
/// when no face is visible), or `None` when the stream has ended.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Vec<LandmarkSet>>;
}

/// Scripted frame source for demos and tests
pub struct SyntheticSource {
    frames: Vec<Vec<LandmarkSet>>,
    position: usize,
    cycle: bool,
}

impl SyntheticSource {
    /// Play the given frames once, then end the stream
    pub fn new(frames: Vec<Vec<LandmarkSet>>) -> Self {
        Self {
            frames,
            position: 0,
            cycle: false,
        }
    }

    /// Repeat the given frames forever
    pub fn cycling(frames: Vec<Vec<LandmarkSet>>) -> Self {
        Self {
            frames,
            position: 0,
            cycle: true,
        }
    }

    /// Demo script cycling through every status: an attentive stretch, a
    /// long eye closure, a yawn, and a no-face gap.
    pub fn demo() -> Self {
        let mut frames = Vec::new();
        frames.extend(std::iter::repeat_with(|| vec![attentive_face()]).take(90));
        frames.extend(std::iter::repeat_with(|| vec![closed_eyes_face()]).take(100));
        frames.extend(std::iter::repeat_with(|| vec![yawning_face()]).take(45));
        frames.extend(std::iter::repeat_with(Vec::new).take(45));
        Self::cycling(frames)
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Option<Vec<LandmarkSet>> {
        if self.position >= self.frames.len() {
            if !self.cycle || self.frames.is_empty() {
                return None;
            }
            self.position = 0;
        }
        let frame = self.frames[self.position].clone();
        self.position += 1;
        Some(frame)
    }
}

/// Eyes open (EAR 0.5), mouth closed (MAR 0.1)
pub fn attentive_face() -> LandmarkSet {
    synthetic_face(1.0, 0.3)
}

/// Eyes nearly shut (EAR 0.05)
pub fn closed_eyes_face() -> LandmarkSet {
    synthetic_face(0.1, 0.3)
}

/// Mouth wide open (MAR 1.0)
pub fn yawning_face() -> LandmarkSet {
    synthetic_face(1.0, 3.0)
}

/// Build a 68-point landmark set with the given eye and inner-lip geometry.
/// EAR works out to `eye_half_height / 2`, MAR to `mouth_half_gap / 3`.
fn synthetic_face(eye_half_height: f32, mouth_half_gap: f32) -> LandmarkSet {
    let mut points = vec![Point::default(); LANDMARK_COUNT];

    let eye = |h: f32| {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, h),
            Point::new(3.0, h),
            Point::new(4.0, 0.0),
            Point::new(3.0, -h),
            Point::new(1.0, -h),
        ]
    };
    points[36..42].copy_from_slice(&eye(eye_half_height));
    points[42..48].copy_from_slice(&eye(eye_half_height));

    let g = mouth_half_gap;
    points[60] = Point::new(0.0, 0.0);
    points[61] = Point::new(1.0, g);
    points[62] = Point::new(3.0, g);
    points[63] = Point::new(5.0, g);
    points[64] = Point::new(6.0, 0.0);
    points[65] = Point::new(5.0, -g);
    points[66] = Point::new(3.0, -g);
    points[67] = Point::new(1.0, -g);

    LandmarkSet::new(points).expect("synthetic face always has 68 points")
}
