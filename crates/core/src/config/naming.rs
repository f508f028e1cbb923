use serde::{Deserialize, Serialize};

/// Naming conventions that locate service artifacts inside a project.
///
/// Every field has a default, so a config file only needs to name the
/// conventions it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct NamingConvention {
    pub meta_source_root: String,
    pub service_config_dir: String,
    pub service_config_filename: String,
    pub gen_web_content_dir: String,
    pub temp_prefix: String,
    pub web_inf_dir: String,
    pub web_xml_filename: String,
    pub jar_extension: String,
    pub war_extension: String,
    pub impl_properties_filename: String,
    pub intf_properties_filename: String,
    pub default_consumer_source_dir: String,
    /// Stripped from an implementation project name to guess its service name.
    pub impl_project_suffix: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            meta_source_root: "meta-src".to_string(),
            service_config_dir: "META-INF/soa/services/config".to_string(),
            service_config_filename: "ServiceConfig.xml".to_string(),
            gen_web_content_dir: "gen-web-content".to_string(),
            temp_prefix: "temp-".to_string(),
            web_inf_dir: "WEB-INF".to_string(),
            web_xml_filename: "web.xml".to_string(),
            jar_extension: ".jar".to_string(),
            war_extension: ".war".to_string(),
            impl_properties_filename: "service_impl_project.properties".to_string(),
            intf_properties_filename: "service_intf_project.properties".to_string(),
            default_consumer_source_dir: "src/main/java".to_string(),
            impl_project_suffix: "Impl".to_string(),
        }
    }
}

impl NamingConvention {
    /// Guess the service name of an implementation project from its name,
    /// e.g. `OrderServiceImpl` -> `OrderService`.
    pub fn service_name_from_project(&self, project_name: &str) -> Option<String> {
        if self.impl_project_suffix.is_empty() {
            return None;
        }
        project_name
            .strip_suffix(&self.impl_project_suffix)
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }
}
