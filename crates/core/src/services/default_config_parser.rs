//! Default config parser implementation
//!
//! Reads the service config XML with `quick-xml` and interface properties
//! with the bundled properties reader.

use serde::Deserialize;

use crate::{
    error::ParserError,
    interfaces::ConfigParser,
    types::{ImplementationMetadata, InterfaceMetadata},
    utils::Properties,
};

// Structs for deserializing service config files
#[derive(Debug, Deserialize)]
struct ServiceConfigDocument {
    #[serde(default, rename = "@service-name")]
    service_name: Option<String>,
    #[serde(default, rename = "service-impl-class-name")]
    service_impl_class_name: Option<String>,
    #[serde(default, rename = "service-interface-class-name")]
    service_interface_class_name: Option<String>,
    #[serde(default, rename = "consumer-source-directory")]
    consumer_source_directory: Option<String>,
}

/// Split a qualified name written as `{namespace}Local` or plain `Local`.
fn split_qualified_name(raw: &str) -> Result<(Option<String>, String), ParserError> {
    let raw = raw.trim();
    let (namespace, local) = match raw.strip_prefix('{') {
        Some(rest) => {
            let (namespace, local) = rest.split_once('}').ok_or_else(|| {
                ParserError::Invalid(format!("unterminated namespace in service name '{raw}'"))
            })?;
            (Some(namespace.trim().to_string()).filter(|ns| !ns.is_empty()), local.trim())
        }
        None => (None, raw),
    };

    if local.is_empty() {
        return Err(ParserError::Invalid(format!("service name '{raw}' has no local part")));
    }
    Ok((namespace, local.to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parser for the formats svclink reads out of the box
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConfigParser;

impl DefaultConfigParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigParser for DefaultConfigParser {
    fn parse_service_config(
        &self,
        bytes: &[u8],
        target: &mut ImplementationMetadata,
    ) -> Result<(), ParserError> {
        let content = std::str::from_utf8(bytes)?;
        let document: ServiceConfigDocument =
            quick_xml::de::from_str(content).map_err(|e| ParserError::Syntax(e.to_string()))?;

        let raw_name = non_blank(document.service_name)
            .ok_or_else(|| ParserError::Invalid("service-config has no service-name".to_string()))?;
        let (namespace, service_name) = split_qualified_name(&raw_name)?;

        target.service_name = Some(service_name);
        if namespace.is_some() {
            target.target_namespace = namespace;
        }
        if let Some(class_name) = non_blank(document.service_impl_class_name) {
            target.service_impl_class_name = Some(class_name);
        }
        if let Some(class_name) = non_blank(document.service_interface_class_name) {
            target.service_interface_class_name = Some(class_name);
        }
        if let Some(directory) = non_blank(document.consumer_source_directory) {
            target.consumer_base_source_directory = directory;
        }
        Ok(())
    }

    fn parse_interface_properties(
        &self,
        bytes: &[u8],
        target: &mut InterfaceMetadata,
    ) -> Result<(), ParserError> {
        let properties = Properties::from_bytes(bytes)?;

        let fields = [
            ("service_name", &mut target.service_name),
            ("service_namespace", &mut target.namespace),
            ("admin_name", &mut target.admin_name),
            ("service_version", &mut target.service_version),
            ("service_interface_class_name", &mut target.interface_class_name),
        ];
        for (key, field) in fields {
            if let Some(value) = properties.get_non_empty(key) {
                *field = Some(value.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <service-config xmlns="http://www.example.org/soa/config" group="CommonServiceConfigGroup"
                        service-name="{http://www.example.org/services}OrderService">
            <service-impl-class-name>org.example.order.OrderServiceImpl</service-impl-class-name>
            <service-interface-class-name>org.example.order.OrderService</service-interface-class-name>
            <service-instance-config>
                <pipeline-config/>
            </service-instance-config>
        </service-config>
    "#;

    fn metadata() -> ImplementationMetadata {
        ImplementationMetadata::new("OrderServiceImpl", "src/main/java")
    }

    #[test]
    fn test_parse_service_config() {
        let mut target = metadata();
        DefaultConfigParser::new()
            .parse_service_config(SERVICE_CONFIG.as_bytes(), &mut target)
            .unwrap();

        assert_eq!(target.service_name.as_deref(), Some("OrderService"));
        assert_eq!(target.target_namespace.as_deref(), Some("http://www.example.org/services"));
        assert_eq!(
            target.service_impl_class_name.as_deref(),
            Some("org.example.order.OrderServiceImpl")
        );
        assert_eq!(
            target.service_interface_class_name.as_deref(),
            Some("org.example.order.OrderService")
        );
        // Not mentioned in the document, so the default survives
        assert_eq!(target.consumer_base_source_directory, "src/main/java");
    }

    #[test]
    fn test_consumer_directory_override() {
        let xml = r#"<service-config service-name="OrderService">
                <consumer-source-directory> src/client/java </consumer-source-directory>
            </service-config>"#;
        let mut target = metadata();
        DefaultConfigParser::new()
            .parse_service_config(xml.as_bytes(), &mut target)
            .unwrap();

        assert_eq!(target.service_name.as_deref(), Some("OrderService"));
        assert_eq!(target.target_namespace, None);
        assert_eq!(target.consumer_base_source_directory, "src/client/java");
    }

    #[test]
    fn test_malformed_xml_leaves_target_untouched() {
        let mut target = metadata();
        let err = DefaultConfigParser::new()
            .parse_service_config(b"<service-config service-name=\"OrderService\">", &mut target)
            .unwrap_err();

        assert!(matches!(err, ParserError::Syntax(_)));
        assert_eq!(target, metadata());
    }

    #[test]
    fn test_missing_service_name_is_invalid() {
        let mut target = metadata();
        let err = DefaultConfigParser::new()
            .parse_service_config(b"<service-config></service-config>", &mut target)
            .unwrap_err();
        assert!(matches!(err, ParserError::Invalid(_)));
    }

    #[test]
    fn test_split_qualified_name() {
        assert_eq!(
            split_qualified_name("{urn:ns}Svc").unwrap(),
            (Some("urn:ns".to_string()), "Svc".to_string())
        );
        assert_eq!(split_qualified_name("{}Svc").unwrap(), (None, "Svc".to_string()));
        assert!(split_qualified_name("{urn:ns").is_err());
        assert!(split_qualified_name("{urn:ns}").is_err());
    }

    #[test]
    fn test_parse_interface_properties() {
        let props = "\
            admin_name=OrderServiceV1\n\
            service_namespace=http://www.example.org/services\n\
            service_version=1.2.0\n\
            service_interface_class_name=org.example.order.OrderService\n\
            service_layer=BUSINESS\n";
        let mut target = InterfaceMetadata {
            project_name: Some("OrderService".to_string()),
            ..Default::default()
        };
        DefaultConfigParser::new()
            .parse_interface_properties(props.as_bytes(), &mut target)
            .unwrap();

        assert_eq!(target.project_name.as_deref(), Some("OrderService"));
        assert_eq!(target.admin_name.as_deref(), Some("OrderServiceV1"));
        assert_eq!(target.namespace.as_deref(), Some("http://www.example.org/services"));
        assert_eq!(target.service_version.as_deref(), Some("1.2.0"));
        assert_eq!(
            target.interface_class_name.as_deref(),
            Some("org.example.order.OrderService")
        );
        assert_eq!(target.service_name, None);
    }
}
