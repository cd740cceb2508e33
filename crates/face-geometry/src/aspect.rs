//! Eye and mouth aspect ratio computation
//!
//! Both functions are pure and stateless; each call depends only on the
//! points passed in. A zero horizontal distance (degenerate landmark
//! configuration) yields `None` rather than a division fault, and callers
//! treat it as "ratio undefined for this face this frame".

use crate::landmarks::{Point, MOUTH_POINT_COUNT};

/// Eye aspect ratio over a 6-point eye contour.
///
/// EAR = (|p1-p5| + |p2-p4|) / (2 * |p0-p3|), where p0/p3 are the horizontal
/// eye corners. Approaches 0 as the eye closes.
pub fn eye_aspect_ratio(eye: &[Point; 6]) -> Option<f32> {
    let a = eye[1].distance(&eye[5]);
    let b = eye[2].distance(&eye[4]);
    let c = eye[0].distance(&eye[3]);

    if c == 0.0 {
        return None;
    }
    Some((a + b) / (2.0 * c))
}

/// Mouth aspect ratio over the 20-point mouth region.
///
/// Uses the inner-lip points (relative indices 12..=19):
/// MAR = (|m13-m19| + |m14-m18| + |m15-m17|) / (3 * |m12-m16|), where
/// m12/m16 are the inner mouth corners. Grows as the mouth opens.
pub fn mouth_aspect_ratio(mouth: &[Point]) -> Option<f32> {
    if mouth.len() < MOUTH_POINT_COUNT {
        return None;
    }

    let a = mouth[13].distance(&mouth[19]);
    let b = mouth[14].distance(&mouth[18]);
    let c = mouth[15].distance(&mouth[17]);
    let d = mouth[12].distance(&mouth[16]);

    if d == 0.0 {
        return None;
    }
    Some((a + b + c) / (3.0 * d))
}
