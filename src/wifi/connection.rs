use std::net::Ipv4Addr;
use std::time::Duration;

use secrecy::SecretString;
use tracing::{info, warn};

use crate::config;
use crate::error::{RadarError, RadarResult};
use crate::wifi::station::WifiStation;

/// Bounded polling schedule for a join attempt
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(config::JOIN_POLL_INTERVAL_MS),
            max_attempts: config::JOIN_MAX_ATTEMPTS,
        }
    }
}

/// Join `ssid` and wait for the link to come up, then verify the assigned
/// address sits on the radar subnet. A wrong-subnet join is torn down before
/// the error is returned.
pub async fn join_network<S: WifiStation>(
    station: &mut S,
    ssid: &str,
    psk: &SecretString,
    policy: &RetryPolicy,
) -> RadarResult<Ipv4Addr> {
    info!("attempting to connect to '{ssid}'");
    station.join(ssid, psk).await?;

    let mut attempts = 0;
    while !station.link_up().await {
        if attempts >= policy.max_attempts {
            return Err(RadarError::ConnectionTimeout {
                ssid: ssid.to_string(),
                attempts,
            });
        }
        attempts += 1;
        tokio::time::sleep(policy.interval).await;
    }

    let addr = station
        .local_addr()
        .await
        .ok_or_else(|| RadarError::ConnectFailed {
            reason: format!("no IPv4 address assigned on '{ssid}'"),
        })?;

    if addr.octets()[..3] != config::RADAR_SUBNET {
        if let Err(e) = station.disconnect().await {
            warn!("disconnect after subnet mismatch failed: {e}");
        }
        return Err(RadarError::WrongSubnet {
            ssid: ssid.to_string(),
            addr,
        });
    }

    info!("connected to '{ssid}', address {addr}");
    Ok(addr)
}
