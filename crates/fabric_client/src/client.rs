//! Health query client: request assembly over a pluggable transport.
//!
//! This layer owns the request shape and the body codec. Connections,
//! retries, TLS and credentials belong to the [`Transport`] implementation
//! plugged in by the embedding application.

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};
use fabric_common::{ClusterHealthChunk, ClusterHealthChunkQueryDescription};
use tracing::debug;

/// One fully assembled request, handed to the transport as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthRequest {
    /// HTTP method.
    pub method: &'static str,
    /// Absolute URL including the api-version query string.
    pub url: String,
    /// JSON body.
    pub body: String,
    /// Timeout the transport must enforce for this request.
    pub timeout_secs: u64,
}

/// Boundary to the HTTP layer.
///
/// One call per query. Implementations return the raw response body on
/// success; everything else is a [`TransportError`].
pub trait Transport {
    fn send(&self, request: HealthRequest) -> Result<String, TransportError>;
}

/// Client for the cluster health-reporting API.
pub struct HealthClient<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> HealthClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query the aggregated cluster health chunk.
    ///
    /// The query description is encoded first; an encode failure aborts the
    /// call with no transport activity. The transport is invoked exactly
    /// once, then the body is decoded into a [`ClusterHealthChunk`].
    pub fn get_cluster_health_chunk(
        &self,
        query: &ClusterHealthChunkQueryDescription,
    ) -> Result<ClusterHealthChunk, ClientError> {
        let body = serde_json::to_string(query).map_err(ClientError::Encode)?;
        let url = format!(
            "{}/$/GetClusterHealthChunk?api-version={}",
            self.config.endpoint, self.config.api_version
        );

        debug!(url = %url, filters = query.application_filters().len(), "sending cluster health chunk query");
        let raw = self.transport.send(HealthRequest {
            method: "POST",
            url,
            body,
            timeout_secs: self.config.timeout_secs,
        })?;

        let chunk: ClusterHealthChunk =
            serde_json::from_str(&raw).map_err(ClientError::Decode)?;
        debug!(
            health_state = ?chunk.health_state,
            applications = chunk.application_health_state_chunks.items.len(),
            "cluster health chunk received"
        );
        Ok(chunk)
    }
}
