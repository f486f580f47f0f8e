//! Resource vocabulary for stop and describe calls.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::UnknownSourceType;

/// Kind of database resource a notification refers to.
///
/// Decides which stop operation applies, which identifier parameter the
/// provider expects, and how state-conflict faults are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// An Aurora cluster, stopped and started as a unit.
    Cluster,
    /// A standalone database instance.
    Instance,
}

impl ResourceType {
    /// Derive the resource type from a source-type token such as
    /// `"RDS_DB_CLUSTER"`. Only the last underscore-delimited word counts,
    /// compared case-insensitively.
    pub fn from_source_type(source_type: &str) -> Result<Self, UnknownSourceType> {
        let word = source_type.rsplit('_').next().unwrap_or(source_type);
        match word.to_lowercase().as_str() {
            "cluster" => Ok(Self::Cluster),
            "instance" => Ok(Self::Instance),
            _ => Err(UnknownSourceType(source_type.to_string())),
        }
    }

    /// Control-plane operation that stops this resource kind.
    pub fn stop_operation(&self) -> &'static str {
        match self {
            Self::Cluster => "StopDBCluster",
            Self::Instance => "StopDBInstance",
        }
    }

    /// Identifier parameter name the provider expects for this resource kind.
    pub fn identifier_param(&self) -> &'static str {
        match self {
            Self::Cluster => "DBClusterIdentifier",
            Self::Instance => "DBInstanceIdentifier",
        }
    }

    /// Lower-case token for log payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::Instance => "instance",
        }
    }
}

/// One stop call, ready to dispatch and to render into log entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRequest {
    /// Which kind of resource to stop.
    pub resource: ResourceType,
    /// Provider-side identifier of the cluster or instance.
    pub identifier: String,
}

impl StopRequest {
    pub fn new(resource: ResourceType, identifier: impl Into<String>) -> Self {
        Self {
            resource,
            identifier: identifier.into(),
        }
    }

    /// Operation name, e.g. `"StopDBCluster"`.
    pub fn operation(&self) -> &'static str {
        self.resource.stop_operation()
    }

    /// Request parameters in the provider's wire shape.
    pub fn params(&self) -> Value {
        let param = self.resource.identifier_param();
        json!({ param: self.identifier })
    }
}

/// Slim view of one record returned by `DescribeDBInstances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbInstanceSummary {
    /// Instance identifier.
    #[serde(rename = "DBInstanceIdentifier")]
    pub identifier: String,
    /// Current lifecycle status, when the provider reported one.
    #[serde(rename = "DBInstanceStatus", default)]
    pub status: Option<String>,
}
