//! Radar device endpoints: status probe, telemetry fetch, console rendering.

mod probe;
mod render;
mod telemetry;
mod types;

// Re-export public API
pub use probe::probe_status;
pub use render::render_snapshot;
pub use telemetry::poll_telemetry;
pub use types::{PeerRecord, RadarSnapshot};
