/// Centralized configuration constants for radarlink
// Radar access point
pub const TARGET_SSID_PREFIX: &str = "iNav Radar";
pub const RADAR_PSK: &str = "inavradar";

/// First three octets every radar AP hands out addresses from.
pub const RADAR_SUBNET: [u8; 3] = [192, 168, 4];

// Radar endpoints
pub const STATUS_URL: &str = "http://192.168.4.1/system/status";
pub const TELEMETRY_URL: &str = "http://192.168.4.1/peermanager/status";

// Timing
pub const JOIN_POLL_INTERVAL_MS: u64 = 500;
pub const JOIN_MAX_ATTEMPTS: u32 = 20;
pub const STATUS_RETRY_DELAY_MS: u64 = 2000;
pub const TELEMETRY_POLL_INTERVAL_MS: u64 = 1000;
pub const HTTP_TIMEOUT_SECS: u64 = 5;
