use std::io::Write;

use crate::radar::types::{PeerRecord, RadarSnapshot};

/// Write a snapshot to the sink: a summary block, then one block per peer
/// in the order the radar reported them. Latitude and longitude get six
/// decimal places, distance two, everything else prints as an integer.
pub fn render_snapshot<W: Write>(out: &mut W, snapshot: &RadarSnapshot) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Radar Status ===")?;
    writeln!(out, "My ID: {}", snapshot.own_id)?;
    writeln!(out, "Total Peers: {}", snapshot.count)?;
    writeln!(out, "Active Peers: {}", snapshot.count_active)?;

    for peer in &snapshot.peers {
        render_peer(out, peer)?;
    }
    Ok(())
}

fn render_peer<W: Write>(out: &mut W, peer: &PeerRecord) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Peer Info ===")?;
    writeln!(out, "ID: {}", peer.id)?;
    writeln!(out, "Name: {}", peer.name)?;
    writeln!(out, "Last Update: {} ms ago", peer.age)?;
    writeln!(out, "Location: {:.6}, {:.6}", peer.lat, peer.lon)?;
    writeln!(out, "Altitude: {} m", peer.alt)?;
    writeln!(out, "Speed: {} km/h", peer.ground_speed)?;
    writeln!(out, "Course: {}°", peer.ground_course)?;
    writeln!(out, "Distance: {:.2} m", peer.distance)?;
    writeln!(out, "Course to: {}°", peer.course_to)?;
    writeln!(out, "Relative Altitude: {} m", peer.relative_altitude)?;
    writeln!(out, "Packets Received: {}", peer.packets_received)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(id: &str) -> PeerRecord {
        PeerRecord {
            id: id.to_string(),
            name: "Falcon".to_string(),
            age: 120,
            lat: 47.123456,
            lon: 8.654321,
            alt: 320,
            ground_speed: 45,
            ground_course: 270,
            distance: 12.3,
            course_to: 90,
            relative_altitude: -15,
            packets_received: 412,
        }
    }

    fn snapshot(peers: Vec<PeerRecord>) -> RadarSnapshot {
        RadarSnapshot {
            own_id: "ALPHA".to_string(),
            count: peers.len() as i32,
            count_active: peers.len() as i32,
            peers,
        }
    }

    #[test]
    fn test_one_block_per_peer_in_order() {
        let mut out = Vec::new();
        render_snapshot(&mut out, &snapshot(vec![peer("P1"), peer("P2"), peer("P3")])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("=== Peer Info ===").count(), 3);
        let p1 = text.find("ID: P1").unwrap();
        let p2 = text.find("ID: P2").unwrap();
        let p3 = text.find("ID: P3").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn test_fixed_decimal_formatting() {
        let mut out = Vec::new();
        render_snapshot(&mut out, &snapshot(vec![peer("P1")])).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Location: 47.123456, 8.654321"));
        // Distance pads to two decimals.
        assert!(text.contains("Distance: 12.30 m"));
        assert!(text.contains("Relative Altitude: -15 m"));
    }

    #[test]
    fn test_summary_block() {
        let mut out = Vec::new();
        render_snapshot(&mut out, &snapshot(Vec::new())).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("=== Radar Status ==="));
        assert!(text.contains("My ID: ALPHA"));
        assert!(text.contains("Total Peers: 0"));
        assert!(text.contains("Active Peers: 0"));
        assert!(!text.contains("=== Peer Info ==="));
    }
}
