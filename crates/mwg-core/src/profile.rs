//! Profile rendering: filename derivation and the WireGuard config template.

use crate::config::MwgConfig;
use crate::relay::Relay;

/// Characters stripped from filenames (illegal on Windows shares plus
/// separators that make shell handling awkward).
pub const FILE_ILLEGAL_CHARS: &str = "/?:\\<>*|#, ";

/// WireGuard listen port used by every Mullvad relay.
pub const WIREGUARD_PORT: u16 = 51820;

/// A relay entry lacked a field the profile needs.
#[derive(Debug, thiserror::Error)]
#[error("relay entry is missing `{field}`")]
pub struct MissingField {
    pub field: &'static str,
}

/// A rendered profile ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFile {
    pub filename: String,
    pub body: String,
}

/// Remove every illegal character, keeping the rest in order.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .filter(|c| !FILE_ILLEGAL_CHARS.contains(*c))
        .collect()
}

/// Derive the output filename for a relay hostname:
/// `se1-wireguard` becomes `mullvad-se1.conf`.
pub fn profile_filename(hostname: &str) -> String {
    let name = hostname.strip_suffix("-wireguard").unwrap_or(hostname);
    sanitize_filename(&format!("mullvad-{name}.conf"))
}

/// Render the profile body for one relay.
pub fn render(relay: &Relay, cfg: &MwgConfig) -> Result<String, MissingField> {
    let pubkey = relay
        .pubkey
        .as_deref()
        .ok_or(MissingField { field: "pubkey" })?;
    let endpoint_ip = relay
        .ipv4_addr_in
        .as_deref()
        .ok_or(MissingField { field: "ipv4_addr_in" })?;

    Ok(format!(
        "[Interface]\n\
         PrivateKey = {private_key}\n\
         Address = {address}\n\
         DNS = {dns}\n\
         {firewall_rules}\n\
         \n\
         [Peer]\n\
         PublicKey = {pubkey}\n\
         AllowedIPs = 0.0.0.0/0\n\
         Endpoint = {endpoint_ip}:{port}\n",
        private_key = cfg.private_key,
        address = cfg.address,
        dns = cfg.dns,
        firewall_rules = cfg.firewall_rules,
        port = WIREGUARD_PORT,
    ))
}

/// Filename plus body for one relay; fails if any required field is absent.
pub fn build(relay: &Relay, cfg: &MwgConfig) -> Result<ProfileFile, MissingField> {
    let hostname = relay
        .hostname
        .as_deref()
        .ok_or(MissingField { field: "hostname" })?;
    Ok(ProfileFile {
        filename: profile_filename(hostname),
        body: render(relay, cfg)?,
    })
}
