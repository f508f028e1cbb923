//! Artifact path derivation
//!
//! Pure name computation from a project, a service name and the naming
//! conventions. Nothing here touches the file system or can fail.

use serde::Serialize;

use crate::{
    config::NamingConvention,
    types::{ProjectHandle, ResourcePath},
};

/// Every derived artifact location of one implementation project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub gen_web_content: ResourcePath,
    pub temp_gen_web_content: ResourcePath,
    pub jar: ResourcePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub war: Option<ResourcePath>,
    pub impl_properties: ResourcePath,
    pub web_xml: ResourcePath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_config: Option<ResourcePath>,
}

impl ArtifactPaths {
    /// `(label, path)` pairs in a stable order, absent paths skipped
    pub fn entries(&self) -> Vec<(&'static str, &ResourcePath)> {
        let mut entries = vec![
            ("gen-web-content", &self.gen_web_content),
            ("temp-gen-web-content", &self.temp_gen_web_content),
            ("jar", &self.jar),
        ];
        if let Some(war) = &self.war {
            entries.push(("war", war));
        }
        entries.push(("impl-properties", &self.impl_properties));
        entries.push(("web-xml", &self.web_xml));
        if let Some(config) = &self.service_config {
            entries.push(("service-config", config));
        }
        entries
    }
}

/// Derives artifact paths from naming conventions
#[derive(Debug, Clone, Copy)]
pub struct PathDeriver<'a> {
    naming: &'a NamingConvention,
}

impl<'a> PathDeriver<'a> {
    pub fn new(naming: &'a NamingConvention) -> Self {
        Self { naming }
    }

    fn in_project(project: &ProjectHandle, relative: ResourcePath) -> ResourcePath {
        ResourcePath::from_segments([project.name(), relative.as_str()])
    }

    pub fn gen_web_content_dir(&self, project: &ProjectHandle) -> ResourcePath {
        Self::in_project(project, ResourcePath::from(self.naming.gen_web_content_dir.as_str()))
    }

    /// Staging copy of the generated web content, next to the real one
    pub fn temp_gen_web_content_dir(&self, project: &ProjectHandle) -> ResourcePath {
        let staging = format!("{}{}", self.naming.temp_prefix, self.naming.gen_web_content_dir);
        Self::in_project(project, ResourcePath::from(staging))
    }

    pub fn jar_file(&self, project: &ProjectHandle) -> ResourcePath {
        let jar = format!("{}{}", project.name(), self.naming.jar_extension);
        Self::in_project(project, ResourcePath::from(jar))
    }

    pub fn war_file(&self, project: &ProjectHandle, service_name: &str) -> ResourcePath {
        let war = format!("{}{}", service_name, self.naming.war_extension);
        Self::in_project(project, ResourcePath::from(war))
    }

    /// Project-relative location of the implementation properties file
    pub fn service_impl_properties_path(&self) -> ResourcePath {
        ResourcePath::from(self.naming.impl_properties_filename.as_str())
    }

    pub fn service_impl_properties_file(&self, project: &ProjectHandle) -> ResourcePath {
        Self::in_project(project, self.service_impl_properties_path())
    }

    pub fn web_xml_file(&self, project: &ProjectHandle) -> ResourcePath {
        let web_xml = ResourcePath::from_segments([
            self.naming.gen_web_content_dir.as_str(),
            self.naming.web_inf_dir.as_str(),
            self.naming.web_xml_filename.as_str(),
        ]);
        Self::in_project(project, web_xml)
    }

    /// Project-relative location of the service config file
    pub fn service_config_path(&self, service_name: &str) -> ResourcePath {
        ResourcePath::from_segments([
            self.naming.meta_source_root.as_str(),
            self.naming.service_config_dir.as_str(),
            service_name,
            self.naming.service_config_filename.as_str(),
        ])
    }

    pub fn service_config_file(
        &self,
        project: &ProjectHandle,
        service_name: &str,
    ) -> ResourcePath {
        Self::in_project(project, self.service_config_path(service_name))
    }

    /// Project-relative location of an interface project's properties file
    pub fn interface_properties_path(&self) -> ResourcePath {
        ResourcePath::from(self.naming.intf_properties_filename.as_str())
    }

    pub fn artifacts(&self, project: &ProjectHandle, service_name: Option<&str>) -> ArtifactPaths {
        ArtifactPaths {
            gen_web_content: self.gen_web_content_dir(project),
            temp_gen_web_content: self.temp_gen_web_content_dir(project),
            jar: self.jar_file(project),
            war: service_name.map(|service| self.war_file(project, service)),
            impl_properties: self.service_impl_properties_file(project),
            web_xml: self.web_xml_file(project),
            service_config: service_name
                .map(|service| self.service_config_file(project, service)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_service() -> ProjectHandle {
        ProjectHandle::new("OrderService")
    }

    #[test]
    fn test_jar_and_war_files() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);

        assert_eq!(deriver.jar_file(&order_service()).as_str(), "OrderService/OrderService.jar");
        assert_eq!(
            deriver.war_file(&order_service(), "PaymentService").as_str(),
            "OrderService/PaymentService.war"
        );
    }

    #[test]
    fn test_web_content_paths() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);

        assert_eq!(
            deriver.gen_web_content_dir(&order_service()).as_str(),
            "OrderService/gen-web-content"
        );
        assert_eq!(
            deriver.temp_gen_web_content_dir(&order_service()).as_str(),
            "OrderService/temp-gen-web-content"
        );
        assert_eq!(
            deriver.web_xml_file(&order_service()).as_str(),
            "OrderService/gen-web-content/WEB-INF/web.xml"
        );
    }

    #[test]
    fn test_service_config_file() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);

        assert_eq!(
            deriver.service_config_path("OrderService").as_str(),
            "meta-src/META-INF/soa/services/config/OrderService/ServiceConfig.xml"
        );
        assert_eq!(
            deriver
                .service_config_file(&ProjectHandle::new("OrderServiceImpl"), "OrderService")
                .as_str(),
            "OrderServiceImpl/meta-src/META-INF/soa/services/config/OrderService/ServiceConfig.xml"
        );
    }

    #[test]
    fn test_custom_naming_is_honored() {
        let naming = NamingConvention {
            gen_web_content_dir: "web".to_string(),
            temp_prefix: String::new(),
            war_extension: ".ear".to_string(),
            ..Default::default()
        };
        let deriver = PathDeriver::new(&naming);

        assert_eq!(deriver.temp_gen_web_content_dir(&order_service()).as_str(), "OrderService/web");
        assert_eq!(deriver.war_file(&order_service(), "Svc").as_str(), "OrderService/Svc.ear");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);

        let first = deriver.artifacts(&order_service(), Some("OrderService"));
        let second = deriver.artifacts(&order_service(), Some("OrderService"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_artifact_listing() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);
        let artifacts =
            deriver.artifacts(&ProjectHandle::new("OrderServiceImpl"), Some("OrderService"));

        let listing = artifacts
            .entries()
            .iter()
            .map(|(label, path)| format!("{label}: {path}"))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(listing, @r"
        gen-web-content: OrderServiceImpl/gen-web-content
        temp-gen-web-content: OrderServiceImpl/temp-gen-web-content
        jar: OrderServiceImpl/OrderServiceImpl.jar
        war: OrderServiceImpl/OrderService.war
        impl-properties: OrderServiceImpl/service_impl_project.properties
        web-xml: OrderServiceImpl/gen-web-content/WEB-INF/web.xml
        service-config: OrderServiceImpl/meta-src/META-INF/soa/services/config/OrderService/ServiceConfig.xml
        ");
    }

    #[test]
    fn test_artifacts_without_service_omit_war() {
        let naming = NamingConvention::default();
        let deriver = PathDeriver::new(&naming);
        let artifacts = deriver.artifacts(&order_service(), None);

        assert_eq!(artifacts.war, None);
        assert_eq!(artifacts.service_config, None);
        assert_eq!(artifacts.entries().len(), 5);
    }
}
