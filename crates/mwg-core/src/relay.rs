//! Relay-directory entries as returned by the Mullvad public API.
//!
//! The directory is a JSON array of server objects. Only the fields the
//! generator consumes are modeled; everything else is ignored. Fields may be
//! absent in individual entries, so presence is checked at the point of use
//! rather than at parse time.

use serde::Deserialize;

/// One server entry from the relay directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relay {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    /// WireGuard public key of the relay.
    #[serde(default)]
    pub pubkey: Option<String>,
    /// Public IPv4 address clients connect to (dotted quad).
    #[serde(default)]
    pub ipv4_addr_in: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// True for servers Mullvad owns (vs. rented).
    #[serde(default)]
    pub owned: bool,
    /// Tunnel protocol, e.g. "wireguard" or "openvpn".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// 2-letter lowercase country code.
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Parse a full directory response body into relay entries.
pub fn parse_relay_list(body: &[u8]) -> Result<Vec<Relay>, serde_json::Error> {
    serde_json::from_slice(body)
}
