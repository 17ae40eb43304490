use std::io::Write;

use crate::config;
use crate::error::{RadarError, RadarResult};
use crate::http::HttpClient;
use crate::radar::render::render_snapshot;
use crate::radar::types::RadarSnapshot;

/// Fetch one telemetry snapshot and render it to the sink.
///
/// A transport failure or a malformed body aborts the cycle without writing
/// anything; the caller logs the error and polls again next round.
pub async fn poll_telemetry<H: HttpClient, W: Write>(http: &H, out: &mut W) -> RadarResult<()> {
    let resp = http.get(config::TELEMETRY_URL).await;
    if resp.code <= 0 {
        return Err(RadarError::HttpTransport { code: resp.code });
    }

    let snapshot: RadarSnapshot = serde_json::from_str(&resp.body)?;
    render_snapshot(out, &snapshot)?;
    Ok(())
}
