/// A network discovered by a scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetworkCandidate {
    pub ssid: String,
    pub signal_dbm: i32,
}
