//! Monitor configuration

use serde::{Deserialize, Serialize};

/// Thresholds and frame-count limits for the drowsiness monitor.
///
/// Values are not range-validated: a zero frame count triggers its condition
/// instantly and a negative ratio threshold can never be crossed. Keeping the
/// values sane is the operator's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// EAR below this value counts as a closed-eye frame
    pub eye_ratio_threshold: f32,

    /// Consecutive closed-eye frames before the drowsiness alert
    pub eye_consec_frames: u32,

    /// MAR above this value counts as an open-mouth frame
    pub mouth_ratio_threshold: f32,

    /// Consecutive open-mouth frames before the yawning alert
    pub mouth_consec_frames: u32,

    /// Consecutive faceless frames before the no-face alert
    pub no_face_consec_frames: u32,

    /// Whether the audible alert is enabled
    pub audio_enabled: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            eye_ratio_threshold: 0.20,
            eye_consec_frames: 80,
            mouth_ratio_threshold: 0.55,
            mouth_consec_frames: 30,
            no_face_consec_frames: 30,
            audio_enabled: true,
        }
    }
}

impl MonitorConfig {
    /// Strict config (alerts fire sooner)
    pub fn strict() -> Self {
        Self {
            eye_ratio_threshold: 0.25,
            eye_consec_frames: 48,
            mouth_consec_frames: 20,
            ..Default::default()
        }
    }

    /// Lenient config (alerts fire later)
    pub fn lenient() -> Self {
        Self {
            eye_ratio_threshold: 0.18,
            eye_consec_frames: 120,
            mouth_consec_frames: 45,
            ..Default::default()
        }
    }
}

/// Partial configuration update.
///
/// Fields left out of the request keep their current values; nothing is
/// replaced wholesale. Field names match the settings JSON of the web UI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdate {
    pub eye_aspect_ratio_threshold: Option<f32>,
    pub eye_aspect_ratio_frames: Option<u32>,
    pub mouth_aspect_ratio_threshold: Option<f32>,
    pub mouth_aspect_ratio_frames: Option<u32>,
    pub no_face_frames: Option<u32>,
    pub audio_enabled: Option<bool>,
}

impl ConfigUpdate {
    /// Merge the present fields into `config`, leaving the rest untouched
    pub fn apply(&self, config: &mut MonitorConfig) {
        if let Some(v) = self.eye_aspect_ratio_threshold {
            config.eye_ratio_threshold = v;
        }
        if let Some(v) = self.eye_aspect_ratio_frames {
            config.eye_consec_frames = v;
        }
        if let Some(v) = self.mouth_aspect_ratio_threshold {
            config.mouth_ratio_threshold = v;
        }
        if let Some(v) = self.mouth_aspect_ratio_frames {
            config.mouth_consec_frames = v;
        }
        if let Some(v) = self.no_face_frames {
            config.no_face_consec_frames = v;
        }
        if let Some(v) = self.audio_enabled {
            config.audio_enabled = v;
        }
    }
}
