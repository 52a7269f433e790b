//! Raw-byte retrieval from URLs and filesystem paths.

use std::fs;
use std::time::Duration;

use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

use crate::error::RetrievalError;

/// Global timeout for all HTTP operations (2 seconds).
///
/// The batch is fully sequential, so this bounds how long one slow or dead
/// host can stall the whole run.
const HTTP_TIMEOUT: Duration = Duration::from_secs(2);

/// Maximum response body size (64 MB).
///
/// Metadata documents are a few megabytes and TTF files a few hundred
/// kilobytes; anything near this limit is a misbehaving server.
const MAX_RESPONSE_SIZE: u64 = 64 * 1024 * 1024;

/// Whether `location` names a network resource rather than a local file.
pub fn is_url(location: &str) -> bool {
    matches!(
        url::Url::parse(location),
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https")
    )
}

/// Create a new HTTP agent configured with native-tls and the global timeout.
fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Rewrite GitHub blob page URLs so the raw file bytes are fetched.
///
/// The glyph-file links in the variant table point at GitHub's HTML blob
/// pages; `?raw=true` redirects to the actual file content. URLs already on
/// a raw path are left alone.
fn effective_url(location: &str) -> String {
    if location.contains("github.com")
        && !location.contains("/raw/")
        && !location.contains("raw=true")
    {
        format!("{location}?raw=true")
    } else {
        location.to_string()
    }
}

/// Obtain the raw bytes behind `location`.
///
/// A URL is fetched with a single HTTP GET bounded by [`HTTP_TIMEOUT`];
/// anything else is treated as a filesystem path and read in full.
///
/// # Errors
///
/// Returns [`RetrievalError`] when the HTTP request fails or returns a
/// non-success status, or when the file is missing or unreadable.
pub fn load(location: &str) -> Result<Vec<u8>, RetrievalError> {
    if is_url(location) {
        download(location)
    } else {
        read_file(location)
    }
}

fn download(location: &str) -> Result<Vec<u8>, RetrievalError> {
    let url = effective_url(location);
    let response = agent()
        .get(&url)
        .header("User-Agent", "iconhdr")
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(status) => RetrievalError::HttpStatus {
                location: location.to_string(),
                status,
            },
            other => RetrievalError::Transport {
                location: location.to_string(),
                source: Box::new(other),
            },
        })?;

    let bytes = response
        .into_body()
        .with_config()
        .limit(MAX_RESPONSE_SIZE)
        .read_to_vec()
        .map_err(|e| RetrievalError::Transport {
            location: location.to_string(),
            source: Box::new(e),
        })?;

    log::info!("downloaded {location} ({} bytes)", bytes.len());
    Ok(bytes)
}

fn read_file(location: &str) -> Result<Vec<u8>, RetrievalError> {
    let bytes = fs::read(location).map_err(|e| RetrievalError::File {
        location: location.to_string(),
        source: e,
    })?;

    log::info!("read {location} ({} bytes)", bytes.len());
    Ok(bytes)
}
