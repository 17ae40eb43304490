//! Connection state machine for the radar poll cycle.
//!
//! One cooperative loop: scan and join the radar's AP, wait for its status
//! endpoint to answer, then poll peer telemetry once a second. Every failure
//! is recovered inside the cycle; the controller never exits on error.

use std::io::Write;
use std::time::Duration;

use tracing::{info, warn};

use crate::config;
use crate::error::RadarError;
use crate::http::HttpClient;
use crate::radar::{poll_telemetry, probe_status};
use crate::wifi::{RetryPolicy, WifiStation, find_and_join};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Scanning,
    Connected,
    RadarActive,
}

impl ConnectionState {
    /// States that assume an established wireless link.
    fn requires_link(self) -> bool {
        matches!(self, Self::Connected | Self::RadarActive)
    }
}

/// Fixed waits for the poll cycle
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub join: RetryPolicy,
    pub status_retry: Duration,
    pub poll: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            join: RetryPolicy::default(),
            status_retry: Duration::from_millis(config::STATUS_RETRY_DELAY_MS),
            poll: Duration::from_millis(config::TELEMETRY_POLL_INTERVAL_MS),
        }
    }
}

/// Owns the collaborators and the current state, advancing one step per
/// iteration.
pub struct Controller<S, H, W> {
    station: S,
    http: H,
    out: W,
    timing: Timing,
    state: ConnectionState,
}

impl<S: WifiStation, H: HttpClient, W: Write> Controller<S, H, W> {
    pub fn new(station: S, http: H, out: W) -> Self {
        Self::with_timing(station, http, out, Timing::default())
    }

    pub fn with_timing(station: S, http: H, out: W, timing: Timing) -> Self {
        Self {
            station,
            http,
            out,
            timing,
            state: ConnectionState::Disconnected,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Run the poll cycle until the process is stopped.
    pub async fn run(&mut self) {
        loop {
            self.step().await;
        }
    }

    /// One iteration of the cycle.
    pub async fn step(&mut self) {
        // Link loss trumps whatever the cycle was doing.
        if self.state.requires_link() && !self.station.link_up().await {
            warn!("{}, reconnecting", RadarError::LinkLost);
            self.state = ConnectionState::Disconnected;
            return;
        }

        self.state = match self.state {
            ConnectionState::Disconnected => ConnectionState::Scanning,

            ConnectionState::Scanning => {
                match find_and_join(&mut self.station, &self.timing.join).await {
                    Ok(Some(_)) => ConnectionState::Connected,
                    Ok(None) => ConnectionState::Disconnected,
                    Err(e) => {
                        warn!("scan failed: {e}");
                        ConnectionState::Disconnected
                    }
                }
            }

            ConnectionState::Connected => {
                if probe_status(&self.http).await {
                    info!("radar is active, starting peer telemetry");
                    ConnectionState::RadarActive
                } else {
                    tokio::time::sleep(self.timing.status_retry).await;
                    ConnectionState::Connected
                }
            }

            ConnectionState::RadarActive => {
                if let Err(e) = poll_telemetry(&self.http, &mut self.out).await {
                    warn!("error getting peer telemetry: {e}");
                }
                tokio::time::sleep(self.timing.poll).await;
                ConnectionState::RadarActive
            }
        };
    }
}
