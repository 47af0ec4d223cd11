//! Stats source backed by a process's HTTP stats endpoint.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use super::{LoadContext, LoadError, StatsSource};
use crate::model::{MemStats, StatsResponse};

/// Fetches snapshots with one GET request per load.
///
/// The endpoint must answer `200 OK` with a body shaped like
/// `{"memstats": {"GCCPUFraction": <float>}}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Creates a source using a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Creates a source using the given client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl StatsSource for HttpSource {
    fn load(&self, ctx: &LoadContext) -> Result<MemStats, LoadError> {
        if ctx.is_expired() {
            return Err(LoadError::DeadlineExceeded);
        }

        let mut request = self.client.get(&self.url);
        if let Some(left) = ctx.remaining() {
            request = request.timeout(left);
        }

        let response = request.send().map_err(LoadError::Transport)?;
        let status = response.status();
        debug!(url = %self.url, %status, "stats endpoint responded");
        if status != StatusCode::OK {
            return Err(LoadError::Status(status));
        }

        let body = response.bytes().map_err(LoadError::Transport)?;
        let decoded: StatsResponse = serde_json::from_slice(&body).map_err(LoadError::Decode)?;

        Ok(decoded.memstats)
    }
}
