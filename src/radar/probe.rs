use tracing::{info, warn};

use crate::config;
use crate::http::HttpClient;

/// Ask the radar's status endpoint whether anything is home.
///
/// Any response with a positive code counts as active, whatever the body
/// says: an answer at all means the device is up. The body is logged but
/// never parsed.
pub async fn probe_status<H: HttpClient>(http: &H) -> bool {
    let resp = http.get(config::STATUS_URL).await;

    if resp.code > 0 {
        info!("status response: {}", resp.body.trim());
        true
    } else {
        warn!("error checking status (code: {})", resp.code);
        false
    }
}
