//! Hierarchical health-state filters for cluster health chunk queries.
//!
//! A filter describes which applications the caller wants returned in the
//! aggregated health snapshot, and which of their services and deployed
//! instances come back with them. Filters are request objects: the cluster
//! evaluates them, this layer only represents them. One filter can match
//! zero, one or many applications depending on which fields are set.

use crate::health::{HealthState, HealthStateFilter};
use serde::{Deserialize, Serialize};

/// Matching criteria for applications in a cluster health chunk query.
///
/// Matching contract, as evaluated by the cluster:
///
/// 1. If an application name is set, only that exact application is
///    eligible; if it does not exist, this filter contributes nothing.
/// 2. If an application type name is set, only applications of that exact
///    type are eligible.
/// 3. An eligible application is included when its aggregated health state
///    intersects the health-state mask. A mask left at the unset default
///    together with an explicit name or type filter matches unconditionally;
///    an unset mask alone matches nothing.
/// 4. The child filter lists only select which services and deployed
///    instances are *returned* with an included application. An empty list
///    returns no children of that kind. Aggregation of the application's own
///    health always considers all children, filtered or not.
///
/// Instances are immutable once built and compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApplicationHealthStateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    application_name_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    application_type_name_filter: Option<String>,
    #[serde(skip_serializing_if = "HealthStateFilter::is_default")]
    health_state_filter: HealthStateFilter,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    service_filters: Vec<ServiceHealthStateFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    deployed_application_filters: Vec<DeployedApplicationHealthStateFilter>,
}

impl ApplicationHealthStateFilter {
    pub fn builder() -> ApplicationHealthStateFilterBuilder {
        ApplicationHealthStateFilterBuilder::default()
    }

    /// Exact application name this filter is restricted to, as a fabric uri.
    pub fn application_name_filter(&self) -> Option<&str> {
        self.application_name_filter.as_deref()
    }

    /// Exact application type name this filter is restricted to.
    pub fn application_type_name_filter(&self) -> Option<&str> {
        self.application_type_name_filter.as_deref()
    }

    /// Health-state mask applications are matched against.
    pub fn health_state_filter(&self) -> HealthStateFilter {
        self.health_state_filter
    }

    /// Filters selecting which services are returned with a matched
    /// application.
    pub fn service_filters(&self) -> &[ServiceHealthStateFilter] {
        &self.service_filters
    }

    /// Filters selecting which deployed instances are returned with a
    /// matched application.
    pub fn deployed_application_filters(&self) -> &[DeployedApplicationHealthStateFilter] {
        &self.deployed_application_filters
    }

    /// Health-state clause of the matching contract, rule 3 above.
    ///
    /// The cluster is authoritative; this predicate exists so callers and
    /// tests can predict what a filter will select.
    pub fn matches_health_state(&self, state: HealthState) -> bool {
        if self.health_state_filter.is_default()
            && (self.application_name_filter.is_some()
                || self.application_type_name_filter.is_some())
        {
            return true;
        }
        self.health_state_filter.matches(state)
    }
}

#[derive(Debug, Default)]
pub struct ApplicationHealthStateFilterBuilder {
    inner: ApplicationHealthStateFilter,
}

impl ApplicationHealthStateFilterBuilder {
    /// Restrict the filter to one application, named as a fabric uri.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.inner.application_name_filter = Some(name.into());
        self
    }

    /// Restrict the filter to applications of one type.
    pub fn application_type_name(mut self, name: impl Into<String>) -> Self {
        self.inner.application_type_name_filter = Some(name.into());
        self
    }

    pub fn health_state_filter(mut self, filter: HealthStateFilter) -> Self {
        self.inner.health_state_filter = filter;
        self
    }

    /// Add one service filter. May be called repeatedly; the filters are
    /// unioned by the evaluator.
    pub fn service_filter(mut self, filter: ServiceHealthStateFilter) -> Self {
        self.inner.service_filters.push(filter);
        self
    }

    /// Add one deployed application filter.
    pub fn deployed_application_filter(
        mut self,
        filter: DeployedApplicationHealthStateFilter,
    ) -> Self {
        self.inner.deployed_application_filters.push(filter);
        self
    }

    pub fn build(self) -> ApplicationHealthStateFilter {
        self.inner
    }
}

/// Matching criteria for services returned as children of a matched
/// application. Same shape pattern as the parent, one level down.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceHealthStateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    service_name_filter: Option<String>,
    #[serde(skip_serializing_if = "HealthStateFilter::is_default")]
    health_state_filter: HealthStateFilter,
}

impl ServiceHealthStateFilter {
    pub fn builder() -> ServiceHealthStateFilterBuilder {
        ServiceHealthStateFilterBuilder::default()
    }

    /// Exact service name this filter is restricted to, as a fabric uri.
    pub fn service_name_filter(&self) -> Option<&str> {
        self.service_name_filter.as_deref()
    }

    pub fn health_state_filter(&self) -> HealthStateFilter {
        self.health_state_filter
    }

    /// Health-state clause of the matching contract; a named service with an
    /// unset mask is returned unconditionally.
    pub fn matches_health_state(&self, state: HealthState) -> bool {
        if self.health_state_filter.is_default() && self.service_name_filter.is_some() {
            return true;
        }
        self.health_state_filter.matches(state)
    }
}

#[derive(Debug, Default)]
pub struct ServiceHealthStateFilterBuilder {
    inner: ServiceHealthStateFilter,
}

impl ServiceHealthStateFilterBuilder {
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.inner.service_name_filter = Some(name.into());
        self
    }

    pub fn health_state_filter(mut self, filter: HealthStateFilter) -> Self {
        self.inner.health_state_filter = filter;
        self
    }

    pub fn build(self) -> ServiceHealthStateFilter {
        self.inner
    }
}

/// Matching criteria for deployed application instances returned as children
/// of a matched application, keyed by the node they run on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeployedApplicationHealthStateFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    node_name_filter: Option<String>,
    #[serde(skip_serializing_if = "HealthStateFilter::is_default")]
    health_state_filter: HealthStateFilter,
}

impl DeployedApplicationHealthStateFilter {
    pub fn builder() -> DeployedApplicationHealthStateFilterBuilder {
        DeployedApplicationHealthStateFilterBuilder::default()
    }

    /// Exact node name this filter is restricted to.
    pub fn node_name_filter(&self) -> Option<&str> {
        self.node_name_filter.as_deref()
    }

    pub fn health_state_filter(&self) -> HealthStateFilter {
        self.health_state_filter
    }

    /// Health-state clause of the matching contract; a named node with an
    /// unset mask is returned unconditionally.
    pub fn matches_health_state(&self, state: HealthState) -> bool {
        if self.health_state_filter.is_default() && self.node_name_filter.is_some() {
            return true;
        }
        self.health_state_filter.matches(state)
    }
}

#[derive(Debug, Default)]
pub struct DeployedApplicationHealthStateFilterBuilder {
    inner: DeployedApplicationHealthStateFilter,
}

impl DeployedApplicationHealthStateFilterBuilder {
    pub fn node_name(mut self, name: impl Into<String>) -> Self {
        self.inner.node_name_filter = Some(name.into());
        self
    }

    pub fn health_state_filter(mut self, filter: HealthStateFilter) -> Self {
        self.inner.health_state_filter = filter;
        self
    }

    pub fn build(self) -> DeployedApplicationHealthStateFilter {
        self.inner
    }
}

/// Top-level description of a cluster health chunk query.
///
/// Carries any number of application filters; the evaluator unions them, each
/// one evaluated independently. An application is returned when at least one
/// filter matches it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClusterHealthChunkQueryDescription {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    application_filters: Vec<ApplicationHealthStateFilter>,
}

impl ClusterHealthChunkQueryDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one application filter to the union.
    pub fn with_application_filter(mut self, filter: ApplicationHealthStateFilter) -> Self {
        self.application_filters.push(filter);
        self
    }

    pub fn application_filters(&self) -> &[ApplicationHealthStateFilter] {
        &self.application_filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_filter_has_documented_defaults() {
        let filter = ApplicationHealthStateFilter::default();
        assert_eq!(filter.application_name_filter(), None);
        assert_eq!(filter.application_type_name_filter(), None);
        assert_eq!(filter.health_state_filter(), HealthStateFilter::DEFAULT);
        assert!(filter.service_filters().is_empty());
        assert!(filter.deployed_application_filters().is_empty());
        assert_eq!(filter, ApplicationHealthStateFilter::builder().build());
    }

    #[test]
    fn test_identical_filters_compare_equal() {
        let build = || {
            ApplicationHealthStateFilter::builder()
                .application_name("fabric:/App1")
                .health_state_filter(HealthStateFilter::ERROR)
                .service_filter(
                    ServiceHealthStateFilter::builder()
                        .service_name("fabric:/App1/Svc")
                        .build(),
                )
                .build()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_empty_filter_serializes_to_empty_object() {
        let filter = ApplicationHealthStateFilter::default();
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({}));
    }

    #[test]
    fn test_wire_shape_uses_pascal_case_fields() {
        let filter = ApplicationHealthStateFilter::builder()
            .application_name("fabric:/App1")
            .application_type_name("App1Type")
            .health_state_filter(HealthStateFilter::OK | HealthStateFilter::WARNING)
            .service_filter(
                ServiceHealthStateFilter::builder()
                    .health_state_filter(HealthStateFilter::ERROR)
                    .build(),
            )
            .deployed_application_filter(
                DeployedApplicationHealthStateFilter::builder()
                    .node_name("Node01")
                    .build(),
            )
            .build();

        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({
                "ApplicationNameFilter": "fabric:/App1",
                "ApplicationTypeNameFilter": "App1Type",
                "HealthStateFilter": 6,
                "ServiceFilters": [{ "HealthStateFilter": 8 }],
                "DeployedApplicationFilters": [{ "NodeNameFilter": "Node01" }],
            })
        );
    }

    #[test]
    fn test_filter_round_trips_through_json() {
        let filter = ApplicationHealthStateFilter::builder()
            .application_type_name("App1Type")
            .health_state_filter(HealthStateFilter::ALL)
            .deployed_application_filter(
                DeployedApplicationHealthStateFilter::builder()
                    .node_name("Node01")
                    .health_state_filter(HealthStateFilter::ERROR)
                    .build(),
            )
            .build();

        let json = serde_json::to_string(&filter).unwrap();
        let back: ApplicationHealthStateFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }

    #[test]
    fn test_absent_wire_fields_take_defaults() {
        let filter: ApplicationHealthStateFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, ApplicationHealthStateFilter::default());
    }

    #[test]
    fn test_mask_alone_selects_matching_states() {
        let filter = ApplicationHealthStateFilter::builder()
            .health_state_filter(HealthStateFilter::OK | HealthStateFilter::WARNING)
            .build();
        assert!(filter.matches_health_state(HealthState::Ok));
        assert!(filter.matches_health_state(HealthState::Warning));
        assert!(!filter.matches_health_state(HealthState::Error));
    }

    #[test]
    fn test_named_application_with_unset_mask_matches_any_state() {
        let filter = ApplicationHealthStateFilter::builder()
            .application_name("fabric:/App1")
            .build();
        assert!(filter.matches_health_state(HealthState::Ok));
        assert!(filter.matches_health_state(HealthState::Warning));
        assert!(filter.matches_health_state(HealthState::Error));
    }

    #[test]
    fn test_unset_mask_without_names_matches_nothing() {
        let filter = ApplicationHealthStateFilter::default();
        assert!(!filter.matches_health_state(HealthState::Ok));
        assert!(!filter.matches_health_state(HealthState::Error));
    }

    #[test]
    fn test_unsatisfiable_combination_is_legal_and_matches_nothing() {
        // NONE together with a required name builds fine; it just selects
        // no state.
        let filter = ApplicationHealthStateFilter::builder()
            .application_name("fabric:/App1")
            .health_state_filter(HealthStateFilter::NONE)
            .build();
        assert!(!filter.matches_health_state(HealthState::Ok));
        assert!(!filter.matches_health_state(HealthState::Error));
    }

    #[test]
    fn test_named_service_with_unset_mask_is_always_returned() {
        let filter = ServiceHealthStateFilter::builder()
            .service_name("fabric:/App1/Svc")
            .build();
        assert!(filter.matches_health_state(HealthState::Ok));
        assert!(filter.matches_health_state(HealthState::Error));
    }

    #[test]
    fn test_query_description_unions_filters() {
        let query = ClusterHealthChunkQueryDescription::new()
            .with_application_filter(
                ApplicationHealthStateFilter::builder()
                    .application_name("fabric:/App1")
                    .build(),
            )
            .with_application_filter(
                ApplicationHealthStateFilter::builder()
                    .health_state_filter(HealthStateFilter::ERROR)
                    .build(),
            );

        assert_eq!(query.application_filters().len(), 2);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({
                "ApplicationFilters": [
                    { "ApplicationNameFilter": "fabric:/App1" },
                    { "HealthStateFilter": 8 },
                ],
            })
        );
    }

    #[test]
    fn test_empty_query_description_serializes_to_empty_object() {
        let query = ClusterHealthChunkQueryDescription::new();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({}));
    }
}
