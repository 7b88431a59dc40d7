//! Relay directory fetch.
//!
//! Uses the curl crate (libcurl) to issue the single GET against the public
//! directory endpoint and parses the body into relay entries. One request per
//! run, no retries; any failure aborts the pipeline.

use std::time::Duration;

use crate::relay::{parse_relay_list, Relay};

/// Public relay directory listing every Mullvad server.
pub const RELAY_ENDPOINT: &str = "https://api.mullvad.net/www/relays/all/";

/// Connection establishment timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(11);
/// Whole-transfer timeout.
pub const TRANSFER_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of the fetch step. Transport and HTTP-status errors surface before
/// any parse attempt; parse errors mean the body was not a relay array.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    #[error("relay directory returned HTTP {0}")]
    Http(u32),
    #[error("invalid relay list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Performs the directory GET and returns the parsed relay entries.
///
/// Follows redirects. Runs in the current thread and blocks until the
/// transfer completes or times out.
pub fn fetch_relays(url: &str) -> Result<Vec<Relay>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TRANSFER_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(parse_relay_list(&body)?)
}
