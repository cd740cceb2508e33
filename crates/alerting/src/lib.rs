//! Alerting
//!
//! Decouples the drowsiness state machine from whatever actually sounds the
//! alarm. The monitor only produces a per-frame alert flag; the gate here
//! turns flag edges into start/stop calls on a pluggable sink.

mod gate;
mod sink;

pub use gate::AlertGate;
pub use sink::{AlertSink, LogAlertSink, NullAlertSink};
