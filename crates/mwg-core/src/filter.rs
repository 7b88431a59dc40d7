//! Qualifying predicate for relay entries.

use crate::relay::Relay;

/// Countries whose relays are never written out.
pub const EXCLUDED_COUNTRY_CODES: [&str; 9] =
    ["au", "br", "ca", "gb", "hk", "jp", "nz", "sg", "us"];

/// True if a profile should be generated for this relay: active, owned by
/// Mullvad, WireGuard, and outside the exclusion set. Entries with a missing
/// field never qualify.
pub fn qualifies(relay: &Relay) -> bool {
    if !relay.active || !relay.owned {
        return false;
    }
    if relay.kind.as_deref() != Some("wireguard") {
        return false;
    }
    match relay.country_code.as_deref() {
        Some(cc) => !EXCLUDED_COUNTRY_CODES.contains(&cc),
        None => false,
    }
}
