use std::time::Duration;

use serde::Deserialize;
use stocktimum_core::{DashboardError, Endpoint, MalformedData};

const MAX_RAW_BODY: usize = 200;

#[derive(Deserialize)]
struct Envelope {
    error: EnvelopeBody,
}

#[derive(Deserialize)]
struct EnvelopeBody {
    message: String,
}

#[derive(Deserialize)]
struct Detail {
    detail: serde_json::Value,
}

/// Map a reqwest failure onto the network-class error variants.
pub(crate) fn normalize_transport(
    endpoint: Endpoint,
    timeout: Duration,
    e: &reqwest::Error,
) -> DashboardError {
    if e.is_timeout() {
        DashboardError::timeout(endpoint.as_str(), timeout)
    } else if e.is_decode() {
        DashboardError::Malformed(MalformedData::NotJson(e.to_string()))
    } else {
        DashboardError::network(endpoint.as_str(), e.to_string())
    }
}

/// Best human-readable message for a non-2xx response.
///
/// Prefers `{"error": {"message": ..}}`, then a bare `{"detail": ..}`, then a
/// short raw body, then the canonical reason phrase.
pub(crate) fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(env) = serde_json::from_str::<Envelope>(body) {
        return env.error.message;
    }
    if let Ok(d) = serde_json::from_str::<Detail>(body) {
        return match d.detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
    }
    let raw = body.trim();
    if !raw.is_empty() && raw.len() <= MAX_RAW_BODY {
        return raw.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}
