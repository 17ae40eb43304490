//! NetworkManager-backed station.
//!
//! Drives `nmcli` in terse mode. Scans, joins, and status queries each run
//! the tool once; the join is fire-and-forget so the connector can poll the
//! link state on its own schedule.

use std::net::Ipv4Addr;
use std::process::Stdio;

use secrecy::{ExposeSecret, SecretString};
use tokio::process::Command;
use tracing::debug;

use crate::error::{RadarError, RadarResult};
use crate::wifi::station::WifiStation;
use crate::wifi::types::NetworkCandidate;

// NM_DEVICE_STATE_ACTIVATED
const DEVICE_STATE_ACTIVATED: u32 = 100;

/// Station driving the first wifi-type device NetworkManager reports
#[derive(Debug)]
pub struct NmcliStation {
    device: String,
}

impl NmcliStation {
    /// Detect the first wireless device known to NetworkManager.
    pub async fn detect() -> RadarResult<Self> {
        let out = run_nmcli(&["--terse", "--fields", "DEVICE,TYPE", "device", "status"])
            .await
            .map_err(|reason| RadarError::ScanFailed { reason })?;

        let device = out
            .lines()
            .map(split_terse)
            .find(|fields| fields.len() >= 2 && fields[1] == "wifi")
            .map(|fields| fields[0].clone())
            .ok_or(RadarError::NoInterface)?;

        debug!("using wireless device '{device}'");
        Ok(Self { device })
    }
}

impl WifiStation for NmcliStation {
    async fn scan(&mut self) -> RadarResult<Vec<NetworkCandidate>> {
        let out = run_nmcli(&[
            "--terse",
            "--fields",
            "SSID,SIGNAL",
            "device",
            "wifi",
            "list",
            "ifname",
            &self.device,
            "--rescan",
            "yes",
        ])
        .await
        .map_err(|reason| RadarError::ScanFailed { reason })?;

        Ok(out.lines().filter_map(parse_scan_line).collect())
    }

    async fn join(&mut self, ssid: &str, psk: &SecretString) -> RadarResult<()> {
        // Detached: nmcli blocks until the activation settles, but the
        // connector observes progress through link_up instead.
        Command::new("nmcli")
            .args(["device", "wifi", "connect", ssid, "password"])
            .arg(psk.expose_secret())
            .args(["ifname", &self.device])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RadarError::ConnectFailed {
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn link_up(&mut self) -> bool {
        let out = match run_nmcli(&[
            "--terse",
            "--fields",
            "GENERAL.STATE",
            "device",
            "show",
            &self.device,
        ])
        .await
        {
            Ok(out) => out,
            Err(_) => return false,
        };

        out.lines()
            .filter_map(parse_state_code)
            .any(|code| code >= DEVICE_STATE_ACTIVATED)
    }

    async fn local_addr(&mut self) -> Option<Ipv4Addr> {
        let out = run_nmcli(&[
            "--terse",
            "--get-values",
            "IP4.ADDRESS",
            "device",
            "show",
            &self.device,
        ])
        .await
        .ok()?;

        out.lines().find_map(parse_cidr_addr)
    }

    async fn disconnect(&mut self) -> RadarResult<()> {
        run_nmcli(&["device", "disconnect", &self.device])
            .await
            .map_err(|reason| RadarError::DisconnectFailed { reason })?;
        Ok(())
    }
}

/// Run nmcli and return stdout, or stderr text on a non-zero exit.
async fn run_nmcli(args: &[&str]) -> Result<String, String> {
    let output = Command::new("nmcli")
        .args(args)
        .output()
        .await
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split a terse-mode line on unescaped colons, dropping the escapes.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parse one `SSID:SIGNAL` scan line; hidden networks (empty SSID) are
/// dropped. NetworkManager reports signal as a 0-100 percentage.
fn parse_scan_line(line: &str) -> Option<NetworkCandidate> {
    let fields = split_terse(line);
    if fields.len() < 2 || fields[0].is_empty() {
        return None;
    }
    let percent: i32 = fields[1].trim().parse().ok()?;
    Some(NetworkCandidate {
        ssid: fields[0].clone(),
        signal_dbm: signal_dbm(percent),
    })
}

/// NetworkManager's percent scale mapped back to dBm.
fn signal_dbm(percent: i32) -> i32 {
    percent / 2 - 100
}

/// Extract the numeric code from a `GENERAL.STATE:100 (connected)` line.
fn parse_state_code(line: &str) -> Option<u32> {
    let fields = split_terse(line);
    let value = if fields.len() >= 2 { &fields[1] } else { &fields[0] };
    value.split_whitespace().next()?.parse().ok()
}

/// Parse the address out of a `192.168.4.2/24` value line.
fn parse_cidr_addr(line: &str) -> Option<Ipv4Addr> {
    line.trim().split('/').next()?.parse().ok()
}
