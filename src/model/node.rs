// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sysboard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sysboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// The closed vocabulary of architecture components that can be placed on the canvas.
///
/// Wire names are SCREAMING_SNAKE_CASE (`WEB_SERVER`, `SQL_DB`, ...). Deserializing any other
/// string fails, so a `NodeType` value is always a recognized component kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    WebServer,
    Microservice,
    Lambda,
    Container,
    K8s,
    Lb,
    ApiGateway,
    Cdn,
    Dns,
    ServiceMesh,
    SqlDb,
    NosqlDb,
    S3,
    Blob,
    GraphDb,
    SearchEngine,
    Redis,
    Kafka,
    PubSub,
    EtlPipeline,
    StreamProcessor,
    Firewall,
    Waf,
    Auth,
    Kms,
    Siem,
    Monitoring,
    Logging,
    Analytics,
    Dashboard,
    Client,
    MobileApp,
    IotDevice,
}

impl NodeType {
    pub const ALL: [NodeType; 33] = [
        Self::WebServer,
        Self::Microservice,
        Self::Lambda,
        Self::Container,
        Self::K8s,
        Self::Lb,
        Self::ApiGateway,
        Self::Cdn,
        Self::Dns,
        Self::ServiceMesh,
        Self::SqlDb,
        Self::NosqlDb,
        Self::S3,
        Self::Blob,
        Self::GraphDb,
        Self::SearchEngine,
        Self::Redis,
        Self::Kafka,
        Self::PubSub,
        Self::EtlPipeline,
        Self::StreamProcessor,
        Self::Firewall,
        Self::Waf,
        Self::Auth,
        Self::Kms,
        Self::Siem,
        Self::Monitoring,
        Self::Logging,
        Self::Analytics,
        Self::Dashboard,
        Self::Client,
        Self::MobileApp,
        Self::IotDevice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebServer => "WEB_SERVER",
            Self::Microservice => "MICROSERVICE",
            Self::Lambda => "LAMBDA",
            Self::Container => "CONTAINER",
            Self::K8s => "K8S",
            Self::Lb => "LB",
            Self::ApiGateway => "API_GATEWAY",
            Self::Cdn => "CDN",
            Self::Dns => "DNS",
            Self::ServiceMesh => "SERVICE_MESH",
            Self::SqlDb => "SQL_DB",
            Self::NosqlDb => "NOSQL_DB",
            Self::S3 => "S3",
            Self::Blob => "BLOB",
            Self::GraphDb => "GRAPH_DB",
            Self::SearchEngine => "SEARCH_ENGINE",
            Self::Redis => "REDIS",
            Self::Kafka => "KAFKA",
            Self::PubSub => "PUB_SUB",
            Self::EtlPipeline => "ETL_PIPELINE",
            Self::StreamProcessor => "STREAM_PROCESSOR",
            Self::Firewall => "FIREWALL",
            Self::Waf => "WAF",
            Self::Auth => "AUTH",
            Self::Kms => "KMS",
            Self::Siem => "SIEM",
            Self::Monitoring => "MONITORING",
            Self::Logging => "LOGGING",
            Self::Analytics => "ANALYTICS",
            Self::Dashboard => "DASHBOARD",
            Self::Client => "CLIENT",
            Self::MobileApp => "MOBILE_APP",
            Self::IotDevice => "IOT_DEVICE",
        }
    }

    /// Label shown in the component palette and used for freshly dropped nodes.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::WebServer => "Web Server",
            Self::Microservice => "Microservice",
            Self::Lambda => "Lambda/FaaS",
            Self::Container => "Container",
            Self::K8s => "Kubernetes",
            Self::Lb => "Load Balancer",
            Self::ApiGateway => "API Gateway",
            Self::Cdn => "CDN",
            Self::Dns => "DNS",
            Self::ServiceMesh => "Service Mesh",
            Self::SqlDb => "SQL DB",
            Self::NosqlDb => "NoSQL DB",
            Self::S3 => "Object Storage",
            Self::Blob => "Blob Storage",
            Self::GraphDb => "Graph DB",
            Self::SearchEngine => "Search Engine",
            Self::Redis => "Redis/Cache",
            Self::Kafka => "Message Queue",
            Self::PubSub => "Pub/Sub",
            Self::EtlPipeline => "ETL Pipeline",
            Self::StreamProcessor => "Stream Proc",
            Self::Firewall => "Firewall",
            Self::Waf => "WAF",
            Self::Auth => "Auth Service",
            Self::Kms => "KMS",
            Self::Siem => "SIEM",
            Self::Monitoring => "Monitoring",
            Self::Logging => "Logging",
            Self::Analytics => "Analytics",
            Self::Dashboard => "Dashboard",
            Self::Client => "Web Client",
            Self::MobileApp => "Mobile App",
            Self::IotDevice => "IoT Device",
        }
    }

    pub fn category(self) -> NodeCategory {
        match self {
            Self::WebServer | Self::Microservice | Self::Lambda | Self::Container | Self::K8s => {
                NodeCategory::Compute
            }
            Self::Lb | Self::ApiGateway | Self::Cdn | Self::Dns | Self::ServiceMesh => {
                NodeCategory::Networking
            }
            Self::SqlDb
            | Self::NosqlDb
            | Self::S3
            | Self::Blob
            | Self::GraphDb
            | Self::SearchEngine => NodeCategory::Storage,
            Self::Redis
            | Self::Kafka
            | Self::PubSub
            | Self::EtlPipeline
            | Self::StreamProcessor => NodeCategory::MessagingStreaming,
            Self::Firewall | Self::Waf | Self::Auth | Self::Kms | Self::Siem => {
                NodeCategory::Security
            }
            Self::Monitoring | Self::Logging | Self::Analytics | Self::Dashboard => {
                NodeCategory::Observability
            }
            Self::Client | Self::MobileApp | Self::IotDevice => NodeCategory::Clients,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node type: {0:?}")]
pub struct ParseNodeTypeError(pub String);

impl FromStr for NodeType {
    type Err = ParseNodeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseNodeTypeError(s.to_owned()))
    }
}

/// Palette grouping of component kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Compute,
    Networking,
    Storage,
    MessagingStreaming,
    Security,
    Observability,
    Clients,
}

impl NodeCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Networking => "Networking",
            Self::Storage => "Storage",
            Self::MessagingStreaming => "Messaging & Streaming",
            Self::Security => "Security",
            Self::Observability => "Observability",
            Self::Clients => "Clients",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload of a canvas node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SystemNodeData {
    label: String,
    #[serde(rename = "type")]
    kind: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SystemNodeData {
    pub fn new(label: impl Into<String>, kind: NodeType) -> Self {
        Self { label: label.into(), kind, category: None, description: None }
    }

    /// Payload for a component dropped from the palette: default label and palette category.
    pub fn from_palette(kind: NodeType) -> Self {
        Self {
            label: kind.default_label().to_owned(),
            kind,
            category: Some(kind.category().label().to_owned()),
            description: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn kind(&self) -> NodeType {
        self.kind
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn set_category<T: Into<String>>(&mut self, category: Option<T>) {
        self.category = category.map(Into::into);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }
}

/// One architecture component placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: NodeId,
    #[serde(default)]
    position: Position,
    data: SystemNodeData,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    selected: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    dragging: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
}

impl Node {
    pub fn new(id: NodeId, position: Position, data: SystemNodeData) -> Self {
        Self { id, position, data, selected: false, dragging: false, width: None, height: None }
    }

    /// A node with a freshly generated id.
    pub fn create(position: Position, data: SystemNodeData) -> Self {
        Self::new(NodeId::generate(), position, data)
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn data(&self) -> &SystemNodeData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SystemNodeData {
        &mut self.data
    }

    pub fn kind(&self) -> NodeType {
        self.data.kind()
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn dimensions(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = Some(width);
        self.height = Some(height);
    }
}
