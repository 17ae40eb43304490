use serde::Deserialize;

/// One telemetry response from the radar. At most one snapshot is live at a
/// time; it is rendered and dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct RadarSnapshot {
    #[serde(rename = "myID")]
    pub own_id: String,
    pub count: i32,
    #[serde(rename = "countActive")]
    pub count_active: i32,
    pub peers: Vec<PeerRecord>,
}

/// A tracked aircraft as reported by the radar
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerRecord {
    pub id: String,
    pub name: String,
    /// Milliseconds since the radar last heard this peer.
    pub age: i64,
    pub lat: f64,
    pub lon: f64,
    /// Altitude in meters.
    pub alt: i32,
    /// Ground speed in km/h.
    pub ground_speed: i32,
    /// Ground course in degrees.
    pub ground_course: i32,
    /// Distance from the radar in meters.
    pub distance: f64,
    /// Bearing to the peer in degrees.
    pub course_to: i32,
    pub relative_altitude: i32,
    pub packets_received: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PEERS: &str = r#"{
        "myID": "ALPHA",
        "count": 3,
        "countActive": 2,
        "peers": [
            {
                "id": "P1", "name": "Falcon", "age": 120,
                "lat": 47.123456, "lon": 8.654321, "alt": 320,
                "groundSpeed": 45, "groundCourse": 270,
                "distance": 12.3, "courseTo": 90,
                "relativeAltitude": -15, "packetsReceived": 412
            },
            {
                "id": "P2", "name": "Kestrel", "age": 980,
                "lat": 47.2, "lon": 8.7, "alt": 410,
                "groundSpeed": 0, "groundCourse": 0,
                "distance": 845.75, "courseTo": 181,
                "relativeAltitude": 75, "packetsReceived": 9
            }
        ]
    }"#;

    #[test]
    fn test_decode_well_formed_snapshot() {
        let snapshot: RadarSnapshot = serde_json::from_str(TWO_PEERS).unwrap();
        assert_eq!(snapshot.own_id, "ALPHA");
        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.count_active, 2);
        assert_eq!(snapshot.peers.len(), 2);
        // Array order is authoritative.
        assert_eq!(snapshot.peers[0].id, "P1");
        assert_eq!(snapshot.peers[1].id, "P2");
        assert_eq!(snapshot.peers[0].ground_speed, 45);
        assert_eq!(snapshot.peers[0].course_to, 90);
        assert_eq!(snapshot.peers[0].relative_altitude, -15);
        assert_eq!(snapshot.peers[1].packets_received, 9);
    }

    #[test]
    fn test_decode_malformed_body_fails() {
        let truncated = &TWO_PEERS[..TWO_PEERS.len() - 1];
        assert!(serde_json::from_str::<RadarSnapshot>(truncated).is_err());
    }

    #[test]
    fn test_decode_empty_peer_list() {
        let body = r#"{"myID": "ALPHA", "count": 0, "countActive": 0, "peers": []}"#;
        let snapshot: RadarSnapshot = serde_json::from_str(body).unwrap();
        assert!(snapshot.peers.is_empty());
    }
}
