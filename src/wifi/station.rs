use std::net::Ipv4Addr;

use secrecy::SecretString;

use crate::error::RadarResult;
use crate::wifi::types::NetworkCandidate;

/// Operations the wireless stack must provide.
///
/// `join` only initiates the attempt; callers poll `link_up` to observe the
/// outcome. `link_up` and `local_addr` are status queries and never fail:
/// a backend that cannot answer reports down/no-address.
pub trait WifiStation {
    /// Run a scan and return the discovered networks.
    async fn scan(&mut self) -> RadarResult<Vec<NetworkCandidate>>;

    /// Start joining `ssid` with the given pre-shared key.
    async fn join(&mut self, ssid: &str, psk: &SecretString) -> RadarResult<()>;

    /// Whether the wireless link is currently established.
    async fn link_up(&mut self) -> bool;

    /// The IPv4 address assigned to the wireless interface, if any.
    async fn local_addr(&mut self) -> Option<Ipv4Addr>;

    /// Drop the current connection.
    async fn disconnect(&mut self) -> RadarResult<()>;
}
