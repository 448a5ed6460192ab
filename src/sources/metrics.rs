//! LoRaWAN traffic metrics over HTTP.
//!
//! The packet forwarder's log parser publishes a JSON document:
//!
//! ```json
//! {
//!   "bucket_count": 36,
//!   "bucket_size": 60,
//!   "buckets": { "0": {"rx": 12, "tx": 3}, "5": {"rx": 1, "tx": 0} },
//!   "totals": { "rx_max": "12" }
//! }
//! ```
//!
//! `buckets` is sparse and keyed by the decimal bucket index. `totals.rx_max` may
//! arrive as a number or a numeric string. Connection errors, non-2xx statuses
//! and malformed bodies all surface as a [`SourceError`]; the traffic page treats
//! every one of them as "no data".

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use serde::{Deserialize, Deserializer};
use tracing::debug;
use ureq::Agent;

use super::MetricsSource;
use crate::error::SourceError;
use crate::histogram::{BucketCounts, BucketSeries};

/// Fetches the bucket series with a bounded request time.
pub struct HttpMetricsSource {
    agent: Agent,
    url: String,
}

impl HttpMetricsSource {
    /// `timeout` bounds the whole request (connect, send, receive).
    ///
    /// Non-2xx responses come back as a normal response and are reported as
    /// [`SourceError::Status`].
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent, url: url.into() }
    }
}

impl MetricsSource for HttpMetricsSource {
    fn fetch(&self) -> Result<BucketSeries, SourceError> {
        let mut response = self.agent.get(&self.url).call()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.body_mut().read_to_string()?;
        parse_document(&body)
    }
}

// =============================================================================
// Wire Format
// =============================================================================

#[derive(Deserialize)]
struct MetricsDocument {
    bucket_count: u64,
    bucket_size: u64,
    buckets: HashMap<String, WireCounts>,
    totals: Totals,
}

#[derive(Deserialize)]
struct WireCounts {
    rx: u64,
    #[serde(default)]
    tx: u64,
}

#[derive(Deserialize)]
struct Totals {
    #[serde(deserialize_with = "lenient_count")]
    rx_max: u64,
}

/// Counter that may be encoded as a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCount {
    Int(u64),
    Float(f64),
    Text(String),
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match LenientCount::deserialize(deserializer)? {
        LenientCount::Int(n) => Ok(n),
        LenientCount::Float(f) if f >= 0.0 && f.is_finite() => Ok(f as u64),
        LenientCount::Float(f) => Err(D::Error::custom(format!("invalid count {f}"))),
        LenientCount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid count {s:?}"))),
    }
}

/// Decode a metrics document into a [`BucketSeries`].
///
/// Bucket keys that are not non-negative integers are dropped.
pub fn parse_document(body: &str) -> Result<BucketSeries, SourceError> {
    let doc: MetricsDocument = serde_json::from_str(body)?;

    let mut buckets = BTreeMap::new();
    for (key, counts) in doc.buckets {
        match key.parse::<usize>() {
            Ok(index) => {
                buckets.insert(index, BucketCounts { rx: counts.rx, tx: counts.tx });
            }
            Err(_) => debug!(key = %key, "ignoring non-numeric bucket key"),
        }
    }

    Ok(BucketSeries {
        bucket_count: usize::try_from(doc.bucket_count).unwrap_or(usize::MAX),
        bucket_size: doc.bucket_size,
        buckets,
        rx_max: doc.totals.rx_max,
    })
}
