use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Local tunnel address assigned by Mullvad to the operator's key.
pub const DEFAULT_ADDRESS: &str = "10.66.166.115/32";
/// Mullvad's in-tunnel DNS resolver.
pub const DEFAULT_DNS: &str = "193.138.218.74";
/// Policy-routing and NAT directives inserted verbatim into the
/// `[Interface]` section of every profile.
pub const DEFAULT_FIREWALL_RULES: &str = "Table = 55111\n\
\n\
PostUp = iptables -t nat -A POSTROUTING -o %i -j MASQUERADE\n\
PostUp = iptables -I FORWARD -i vpn0 -o %i -j ACCEPT\n\
PostUp = ip rule add from 10.10.10.0/24 lookup 55111\n\
PostUp = ip rule add lookup main suppress_prefixlength 0\n\
PreDown = iptables -t nat -D POSTROUTING -o %i -j MASQUERADE\n\
PreDown = ip rule del lookup main suppress_prefixlength 0\n\
PreDown = ip rule del from 10.10.10.0/24 lookup 55111";

/// Interface-side profile settings loaded from `~/.config/mwg/config.toml`.
///
/// Every key is optional in the file; missing keys fall back to the defaults
/// below. `private_key` defaults to empty and must be filled in by the
/// operator before the generated profiles are usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MwgConfig {
    /// Operator's WireGuard private key (empty = fill in later).
    pub private_key: String,
    /// Address assigned to the local tunnel interface.
    pub address: String,
    /// DNS resolver pushed into each profile.
    pub dns: String,
    /// Extra `[Interface]` directives, inserted verbatim.
    pub firewall_rules: String,
}

impl Default for MwgConfig {
    fn default() -> Self {
        Self {
            private_key: String::new(),
            address: DEFAULT_ADDRESS.to_string(),
            dns: DEFAULT_DNS.to_string(),
            firewall_rules: DEFAULT_FIREWALL_RULES.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mwg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MwgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MwgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MwgConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MwgConfig::default();
        assert!(cfg.private_key.is_empty());
        assert_eq!(cfg.address, "10.66.166.115/32");
        assert_eq!(cfg.dns, "193.138.218.74");
        assert!(cfg.firewall_rules.starts_with("Table = 55111"));
        assert!(cfg.firewall_rules.ends_with("lookup 55111"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MwgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MwgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.private_key, cfg.private_key);
        assert_eq!(parsed.address, cfg.address);
        assert_eq!(parsed.dns, cfg.dns);
        assert_eq!(parsed.firewall_rules, cfg.firewall_rules);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            private_key = "SECRETKEY="
            address = "10.0.0.2/32"
            dns = "9.9.9.9"
            firewall_rules = "PostUp = true"
        "#;
        let cfg: MwgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.private_key, "SECRETKEY=");
        assert_eq!(cfg.address, "10.0.0.2/32");
        assert_eq!(cfg.dns, "9.9.9.9");
        assert_eq!(cfg.firewall_rules, "PostUp = true");
    }

    #[test]
    fn config_toml_missing_keys_fall_back() {
        let toml = r#"
            private_key = "SECRETKEY="
        "#;
        let cfg: MwgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.private_key, "SECRETKEY=");
        assert_eq!(cfg.address, DEFAULT_ADDRESS);
        assert_eq!(cfg.dns, DEFAULT_DNS);
        assert_eq!(cfg.firewall_rules, DEFAULT_FIREWALL_RULES);
    }

    #[test]
    fn config_toml_empty_file_is_all_defaults() {
        let cfg: MwgConfig = toml::from_str("").unwrap();
        assert!(cfg.private_key.is_empty());
        assert_eq!(cfg.address, DEFAULT_ADDRESS);
    }
}
