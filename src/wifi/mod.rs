//! Wireless station module for radarlink
//!
//! This module finds and joins the radar's access point: scanning,
//! prefix-filtered candidate selection, join polling with subnet
//! verification, and the NetworkManager-backed station implementation.

mod connection;
mod nmcli;
mod scanning;
mod station;
mod types;

// Re-export public API
pub use connection::{RetryPolicy, join_network};
pub use nmcli::NmcliStation;
pub use scanning::find_and_join;
pub use station::WifiStation;
pub use types::NetworkCandidate;
