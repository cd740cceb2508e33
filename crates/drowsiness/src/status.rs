//! Monitor status reported to external consumers

use serde::{Deserialize, Serialize};

/// Per-frame status of the monitored subject.
///
/// Derived fresh on every step; priority when several conditions hold in the
/// same frame is NoFace > EyesClosed > Yawning > Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonitorStatus {
    #[default]
    Normal,
    NoFace,
    EyesClosed,
    Yawning,
}

impl MonitorStatus {
    /// Human-readable status message shown in the UI
    pub fn message(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::NoFace => "No face detected",
            Self::EyesClosed => "You are Drowsy",
            Self::Yawning => "You are Drowsy (Yawning)",
        }
    }

    /// Whether this status should sound the alert
    pub fn is_alerting(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}
