/// Typed errors for radarlink operations
use std::net::Ipv4Addr;
use thiserror::Error;

/// Result type alias for radar client operations
pub type RadarResult<T> = Result<T, RadarError>;

/// Errors that can occur while talking to the radar
#[derive(Error, Debug)]
pub enum RadarError {
    #[error("wireless link lost")]
    LinkLost,

    #[error("connection to '{ssid}' not established after {attempts} attempts")]
    ConnectionTimeout { ssid: String, attempts: u32 },

    #[error("joined '{ssid}' but address {addr} is outside the radar subnet")]
    WrongSubnet { ssid: String, addr: Ipv4Addr },

    #[error("HTTP transport failure (code: {code})")]
    HttpTransport { code: i32 },

    #[error("telemetry decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no wireless interface found")]
    NoInterface,

    #[error("failed to scan networks: {reason}")]
    ScanFailed { reason: String },

    #[error("failed to start connection: {reason}")]
    ConnectFailed { reason: String },

    #[error("failed to disconnect: {reason}")]
    DisconnectFailed { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
