//! Typed view of the cluster health chunk returned by a query.
//!
//! The wire wraps every child collection in an object with an `Items` field;
//! the list types here mirror that shape instead of flattening it.

use crate::health::HealthState;
use serde::{Deserialize, Serialize};

/// Aggregated health snapshot for the cluster, reduced to the entities the
/// query's filters selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterHealthChunk {
    /// Aggregated health of the cluster, computed over all applications
    /// regardless of the filters applied to the returned set.
    pub health_state: HealthState,
    pub application_health_state_chunks: ApplicationHealthStateChunkList,
}

/// Applications selected by the query filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationHealthStateChunkList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ApplicationHealthStateChunk>,
    /// Total number of matching applications, which can exceed the number of
    /// returned items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// Health snapshot of one application and the children its filters selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationHealthStateChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_type_name: Option<String>,
    pub health_state: HealthState,
    pub service_health_state_chunks: ServiceHealthStateChunkList,
    pub deployed_application_health_state_chunks: DeployedApplicationHealthStateChunkList,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceHealthStateChunkList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ServiceHealthStateChunk>,
}

/// Health snapshot of one service of a returned application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceHealthStateChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub health_state: HealthState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeployedApplicationHealthStateChunkList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DeployedApplicationHealthStateChunk>,
}

/// Health snapshot of one deployed instance of a returned application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeployedApplicationHealthStateChunk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    pub health_state: HealthState,
}
