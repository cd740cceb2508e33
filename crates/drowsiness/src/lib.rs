//! Drowsiness Detection Core
//!
//! Real-time driver/subject fatigue analysis from facial landmarks:
//! - Eye closure detection (EAR below threshold over consecutive frames)
//! - Yawn detection (MAR above threshold over consecutive frames)
//! - Face-absence detection
//!
//! The state machine is driven sequentially, one call per video frame, by a
//! single frame loop; it is not designed for concurrent stepping.

pub mod config;
pub mod counter;
pub mod monitor;
pub mod status;

pub use config::{ConfigUpdate, MonitorConfig};
pub use counter::HysteresisCounter;
pub use monitor::{DrowsinessMonitor, StepOutcome};
pub use status::MonitorStatus;
