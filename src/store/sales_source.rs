use log::{debug, warn};

use crate::error::SourceError;
use crate::model::SalesRecord;

/// Fetch a JSON array of sales records.
///
/// `location` is either an `http://`/`https://` URL or a path on the local
/// filesystem (optionally prefixed with `file://`).
pub async fn fetch_sales(
    client: &reqwest::Client,
    location: &str,
) -> Result<Vec<SalesRecord>, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_remote(client, location).await
    } else {
        read_local(location.strip_prefix("file://").unwrap_or(location)).await
    }
}

/// Check a sales location supplied by an HTTP caller.
///
/// Only `http`/`https` URLs are accepted; local paths are reserved for the
/// configured default source. A non-empty `allowed_hosts` further limits the
/// URL host (compared ignoring case).
pub fn check_request_source(location: &str, allowed_hosts: &[String]) -> Result<(), SourceError> {
    let disallowed = |reason: &str| SourceError::Disallowed {
        location: location.to_string(),
        reason: reason.to_string(),
    };

    let url = reqwest::Url::parse(location).map_err(|_| disallowed("not an absolute URL"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(disallowed("only http and https sources are accepted"));
    }

    let host = url.host_str().ok_or_else(|| disallowed("URL has no host"))?;
    if !allowed_hosts.is_empty()
        && !allowed_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    {
        return Err(disallowed("host is not in the allowed list"));
    }

    Ok(())
}

/// Like [`fetch_sales`], but a failed fetch yields an empty list so callers
/// fall through to their "no data" path.
pub async fn fetch_sales_or_empty(client: &reqwest::Client, location: &str) -> Vec<SalesRecord> {
    match fetch_sales(client, location).await {
        Ok(records) => {
            debug!("Loaded {} sales records from {}", records.len(), location);
            records
        }
        Err(e) => {
            warn!("Sales data unavailable: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_remote(
    client: &reqwest::Client,
    location: &str,
) -> Result<Vec<SalesRecord>, SourceError> {
    let response = client
        .get(location)
        .send()
        .await
        .map_err(|source| SourceError::Http {
            location: location.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            location: location.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|source| SourceError::Http {
        location: location.to_string(),
        source,
    })?;
    decode(location, &body)
}

async fn read_local(path: &str) -> Result<Vec<SalesRecord>, SourceError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
        location: path.to_string(),
        source,
    })?;
    decode(path, &bytes)
}

fn decode(location: &str, bytes: &[u8]) -> Result<Vec<SalesRecord>, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Decode {
        location: location.to_string(),
        source,
    })
}
