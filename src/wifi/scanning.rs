use secrecy::SecretString;
use tracing::{info, warn};

use crate::config;
use crate::error::RadarResult;
use crate::wifi::connection::{RetryPolicy, join_network};
use crate::wifi::station::WifiStation;

/// Scan for radar access points and join the first one that takes the PSK
/// and lands on the right subnet. Returns the SSID that was joined, or
/// `None` when no matching network connected this cycle.
///
/// Candidates are tried in scan order and the search stops at the first
/// successful join; remaining matches wait for the next cycle.
pub async fn find_and_join<S: WifiStation>(
    station: &mut S,
    policy: &RetryPolicy,
) -> RadarResult<Option<String>> {
    info!("scanning for networks");
    let networks = station.scan().await?;
    info!("scan complete");

    if networks.is_empty() {
        info!("no networks found");
        return Ok(None);
    }
    info!("{} networks found", networks.len());

    let psk = SecretString::from(config::RADAR_PSK);
    for candidate in networks
        .iter()
        .filter(|n| n.ssid.starts_with(config::TARGET_SSID_PREFIX))
    {
        info!(
            "found radar network: '{}' ({} dBm)",
            candidate.ssid, candidate.signal_dbm
        );
        match join_network(station, &candidate.ssid, &psk, policy).await {
            Ok(_) => return Ok(Some(candidate.ssid.clone())),
            Err(e) => warn!("could not join '{}': {e}", candidate.ssid),
        }
    }

    Ok(None)
}
