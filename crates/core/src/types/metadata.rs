use serde::{Deserialize, Serialize};

/// Metadata of a service interface project.
///
/// Every field stays `None` until the interface project is found and read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InterfaceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_class_name: Option<String>,
}

impl InterfaceMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Metadata of a service implementation project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImplementationMetadata {
    pub project_name: String,
    /// Name of the paired interface project; set only by a parsed service config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_impl_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interface_class_name: Option<String>,
    pub consumer_base_source_directory: String,
    #[serde(default)]
    pub interface_metadata: InterfaceMetadata,
}

impl ImplementationMetadata {
    pub fn new(
        project_name: impl Into<String>,
        consumer_base_source_directory: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            service_name: None,
            target_namespace: None,
            service_impl_class_name: None,
            service_interface_class_name: None,
            consumer_base_source_directory: consumer_base_source_directory.into(),
            interface_metadata: InterfaceMetadata::default(),
        }
    }

    pub fn is_linked(&self) -> bool {
        !self.interface_metadata.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metadata_has_empty_interface() {
        let metadata = ImplementationMetadata::new("OrderServiceImpl", "src/main/java");
        assert_eq!(metadata.service_name, None);
        assert!(metadata.interface_metadata.is_empty());
        assert!(!metadata.is_linked());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let metadata = ImplementationMetadata::new("OrderServiceImpl", "src/main/java");
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["project_name"], "OrderServiceImpl");
        assert!(json.get("service_name").is_none());
        assert_eq!(json["interface_metadata"], serde_json::json!({}));
    }
}
