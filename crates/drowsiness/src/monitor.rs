//! Per-frame drowsiness state machine

use face_geometry::{eye_aspect_ratio, mouth_aspect_ratio, LandmarkSet};
use tracing::{debug, warn};

use crate::config::MonitorConfig;
use crate::counter::HysteresisCounter;
use crate::status::MonitorStatus;

/// Result of one frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub status: MonitorStatus,
    pub alert_active: bool,
}

/// Drowsiness state machine.
///
/// Owns the three hysteresis counters (eye, mouth, no-face) and the last
/// derived status. Driven sequentially by one frame loop; configuration is
/// snapshotted by the caller and passed in per step, so hot-reloaded
/// thresholds take effect on the next frame.
#[derive(Debug, Clone)]
pub struct DrowsinessMonitor {
    eye: HysteresisCounter,
    mouth: HysteresisCounter,
    no_face: HysteresisCounter,
    status: MonitorStatus,
}

impl DrowsinessMonitor {
    /// Create a monitor with counters seeded from `config`
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            eye: HysteresisCounter::new(config.eye_consec_frames),
            mouth: HysteresisCounter::new(config.mouth_consec_frames),
            no_face: HysteresisCounter::new(config.no_face_consec_frames),
            status: MonitorStatus::Normal,
        }
    }

    /// Process one frame's detected faces and derive the current status.
    ///
    /// Condition priority within a frame is no-face > eyes-closed > yawning.
    /// With multiple detected faces only the first (primary) face is
    /// evaluated, so counter state never mixes signals from different
    /// subjects. Never fails; every input resolves to a defined status.
    pub fn step(&mut self, config: &MonitorConfig, faces: &[LandmarkSet]) -> StepOutcome {
        self.eye.set_threshold(config.eye_consec_frames);
        self.mouth.set_threshold(config.mouth_consec_frames);
        self.no_face.set_threshold(config.no_face_consec_frames);

        let outcome = if faces.is_empty() {
            // No face means no eye/mouth signal this frame; clearing both
            // counters keeps a previous face's run from persisting across
            // the gap.
            let triggered = self.no_face.update(true);
            self.eye.reset();
            self.mouth.reset();
            if triggered {
                StepOutcome {
                    status: MonitorStatus::NoFace,
                    alert_active: true,
                }
            } else {
                StepOutcome {
                    status: MonitorStatus::Normal,
                    alert_active: false,
                }
            }
        } else {
            self.no_face.update(false);
            self.evaluate_face(config, &faces[0])
        };

        if outcome.status != self.status {
            if outcome.status.is_alerting() {
                warn!(
                    status = outcome.status.message(),
                    "subject state changed"
                );
            } else {
                debug!(
                    status = outcome.status.message(),
                    "subject state changed"
                );
            }
        }
        self.status = outcome.status;
        outcome
    }

    fn evaluate_face(&mut self, config: &MonitorConfig, face: &LandmarkSet) -> StepOutcome {
        // A degenerate ratio (zero horizontal distance) is undefined for this
        // frame; the condition is treated as not holding rather than faulting.
        let ear = match (
            eye_aspect_ratio(&face.left_eye()),
            eye_aspect_ratio(&face.right_eye()),
        ) {
            (Some(left), Some(right)) => Some((left + right) / 2.0),
            _ => None,
        };
        let mar = mouth_aspect_ratio(face.mouth());

        let eyes_closed = ear.is_some_and(|e| e < config.eye_ratio_threshold);
        let mouth_open = mar.is_some_and(|m| m > config.mouth_ratio_threshold);

        // Each counter resets only when its own condition is false,
        // independent of whether the other one triggered.
        let eye_triggered = self.eye.update(eyes_closed);
        let mouth_triggered = self.mouth.update(mouth_open);

        let status = if eye_triggered {
            MonitorStatus::EyesClosed
        } else if mouth_triggered {
            MonitorStatus::Yawning
        } else {
            MonitorStatus::Normal
        };

        StepOutcome {
            status,
            alert_active: status.is_alerting(),
        }
    }

    /// Last derived status, queryable between steps
    pub fn status(&self) -> MonitorStatus {
        self.status
    }

    /// Reset all counters and the status (on subject or session change)
    pub fn reset(&mut self) {
        self.eye.reset();
        self.mouth.reset();
        self.no_face.reset();
        self.status = MonitorStatus::Normal;
    }

    /// Current eye-closure run length (diagnostics)
    pub fn eye_frames(&self) -> u32 {
        self.eye.count()
    }

    /// Current open-mouth run length (diagnostics)
    pub fn mouth_frames(&self) -> u32 {
        self.mouth.count()
    }

    /// Current faceless run length (diagnostics)
    pub fn no_face_frames(&self) -> u32 {
        self.no_face.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_geometry::{Point, LANDMARK_COUNT};

    /// Build a 68-point landmark set with controllable eye and mouth
    /// geometry. `eye_half_height` sets EAR = half_height / 2;
    /// `mouth_half_gap` sets MAR = half_gap / 3.
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

        // Inner lip (absolute indices 60..68): corners plus three point pairs
        let g = mouth_half_gap;
        points[60] = Point::new(0.0, 0.0);
        points[61] = Point::new(1.0, g);
        points[62] = Point::new(3.0, g);
        points[63] = Point::new(5.0, g);
        points[64] = Point::new(6.0, 0.0);
        points[65] = Point::new(5.0, -g);
        points[66] = Point::new(3.0, -g);
        points[67] = Point::new(1.0, -g);

        // Spread the remaining points so the outer mouth is non-degenerate
        for (i, p) in points.iter_mut().enumerate().take(60).skip(48) {
            p.x = i as f32;
        }

        LandmarkSet::new(points).unwrap()
    }

    /// Alert subject: eyes open (EAR 0.5), mouth closed (MAR 0.1)
    fn alert_face() -> LandmarkSet {
        synthetic_face(1.0, 0.3)
    }

    /// Eyes nearly shut (EAR 0.05), mouth closed
    fn drowsy_face() -> LandmarkSet {
        synthetic_face(0.1, 0.3)
    }

    /// Eyes open, mouth wide (MAR 1.0)
    fn yawning_face() -> LandmarkSet {
        synthetic_face(1.0, 3.0)
    }

    /// Eyes shut and mouth wide at once
    fn drowsy_yawning_face() -> LandmarkSet {
        synthetic_face(0.1, 3.0)
    }

    fn quick_config() -> MonitorConfig {
        MonitorConfig {
            eye_consec_frames: 3,
            mouth_consec_frames: 3,
            no_face_consec_frames: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_normal_face_stays_normal() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        for _ in 0..10 {
            let out = monitor.step(&config, &[alert_face()]);
            assert_eq!(out.status, MonitorStatus::Normal);
            assert!(!out.alert_active);
        }
    }

    #[test]
    fn test_no_face_sequence() {
        // [face, face, gone, gone, gone, face] with a 3-frame limit:
        // the alert fires exactly on the third faceless frame.
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        let face = vec![alert_face()];
        let none: Vec<LandmarkSet> = vec![];

        let frames = [&face, &face, &none, &none, &none, &face];
        let expected = [
            MonitorStatus::Normal,
            MonitorStatus::Normal,
            MonitorStatus::Normal,
            MonitorStatus::Normal,
            MonitorStatus::NoFace,
            MonitorStatus::Normal,
        ];
        for (faces, want) in frames.iter().zip(expected) {
            assert_eq!(monitor.step(&config, faces).status, want);
        }
    }

    #[test]
    fn test_eye_trigger_exactly_on_threshold_frame() {
        let config = MonitorConfig {
            eye_consec_frames: 80,
            ..Default::default()
        };
        let mut monitor = DrowsinessMonitor::new(&config);

        for frame in 1..80 {
            let out = monitor.step(&config, &[drowsy_face()]);
            assert_eq!(out.status, MonitorStatus::Normal, "frame {frame}");
        }
        let out = monitor.step(&config, &[drowsy_face()]);
        assert_eq!(out.status, MonitorStatus::EyesClosed);
        assert!(out.alert_active);

        // One open-eyed frame resets the run completely
        let out = monitor.step(&config, &[alert_face()]);
        assert_eq!(out.status, MonitorStatus::Normal);
        assert_eq!(monitor.eye_frames(), 0);
    }

    #[test]
    fn test_yawn_trigger() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        for _ in 0..2 {
            assert_eq!(
                monitor.step(&config, &[yawning_face()]).status,
                MonitorStatus::Normal
            );
        }
        let out = monitor.step(&config, &[yawning_face()]);
        assert_eq!(out.status, MonitorStatus::Yawning);
        assert!(out.alert_active);
    }

    #[test]
    fn test_eye_takes_priority_over_mouth() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        for _ in 0..2 {
            monitor.step(&config, &[drowsy_yawning_face()]);
        }
        // Both counters reach their threshold on the same frame
        let out = monitor.step(&config, &[drowsy_yawning_face()]);
        assert_eq!(out.status, MonitorStatus::EyesClosed);
        assert_eq!(monitor.mouth_frames(), 3);
    }

    #[test]
    fn test_mouth_counter_survives_eye_reset() {
        // The eye condition clearing must not touch the mouth run.
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        monitor.step(&config, &[drowsy_yawning_face()]);
        monitor.step(&config, &[drowsy_yawning_face()]);
        let out = monitor.step(&config, &[yawning_face()]);
        assert_eq!(out.status, MonitorStatus::Yawning);
        assert_eq!(monitor.eye_frames(), 0);
    }

    #[test]
    fn test_no_face_clears_eye_and_mouth_runs() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        monitor.step(&config, &[drowsy_yawning_face()]);
        monitor.step(&config, &[drowsy_yawning_face()]);

        // Repeated faceless frames keep incrementing only the no-face run
        for i in 1..=2u32 {
            monitor.step(&config, &[]);
            assert_eq!(monitor.no_face_frames(), i);
            assert_eq!(monitor.eye_frames(), 0);
            assert_eq!(monitor.mouth_frames(), 0);
        }

        // The face returning starts both runs from scratch
        let out = monitor.step(&config, &[drowsy_yawning_face()]);
        assert_eq!(out.status, MonitorStatus::Normal);
        assert_eq!(monitor.eye_frames(), 1);
        assert_eq!(monitor.no_face_frames(), 0);
    }

    #[test]
    fn test_only_primary_face_is_evaluated() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        // A drowsy second face must not leak into the counters.
        for _ in 0..5 {
            let out = monitor.step(&config, &[alert_face(), drowsy_face()]);
            assert_eq!(out.status, MonitorStatus::Normal);
        }
        assert_eq!(monitor.eye_frames(), 0);
    }

    #[test]
    fn test_degenerate_landmarks_do_not_trigger() {
        let config = MonitorConfig {
            eye_consec_frames: 1,
            ..Default::default()
        };
        // All points coincident: EAR and MAR are undefined.
        let degenerate =
            LandmarkSet::new(vec![Point::new(2.0, 2.0); LANDMARK_COUNT]).unwrap();
        let mut monitor = DrowsinessMonitor::new(&config);
        for _ in 0..3 {
            let out = monitor.step(&config, &[degenerate.clone()]);
            assert_eq!(out.status, MonitorStatus::Normal);
            assert!(!out.alert_active);
        }
    }

    #[test]
    fn test_threshold_hot_reload_applies_next_step() {
        let mut config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        monitor.step(&config, &[drowsy_face()]);
        monitor.step(&config, &[drowsy_face()]);

        // Raising the limit mid-run postpones the trigger
        config.eye_consec_frames = 5;
        assert_eq!(
            monitor.step(&config, &[drowsy_face()]).status,
            MonitorStatus::Normal
        );

        // Lowering it below the current run fires immediately
        config.eye_consec_frames = 2;
        assert_eq!(
            monitor.step(&config, &[drowsy_face()]).status,
            MonitorStatus::EyesClosed
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let config = quick_config();
        let mut monitor = DrowsinessMonitor::new(&config);
        for _ in 0..3 {
            monitor.step(&config, &[drowsy_face()]);
        }
        assert_eq!(monitor.status(), MonitorStatus::EyesClosed);

        monitor.reset();
        assert_eq!(monitor.status(), MonitorStatus::Normal);
        assert_eq!(monitor.eye_frames(), 0);
        assert_eq!(
            monitor.step(&config, &[drowsy_face()]).status,
            MonitorStatus::Normal
        );
    }
}
