//! Configuration validation for ensuring naming conventions produce usable paths

use crate::{
    config::{Config, NamingConvention},
    error::{Error, Result},
};
use regex::Regex;
use std::sync::LazyLock;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.[A-Za-z0-9]+$").expect("extension pattern is valid"));

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &Config) -> Result<()>;
}

/// Checks every naming convention for values that would derive broken paths
#[derive(Debug, Default)]
pub struct NamingValidator;

impl NamingValidator {
    pub fn new() -> Self {
        Self
    }

    fn check_extension(field: &str, value: &str) -> Result<()> {
        if EXTENSION.is_match(value) {
            Ok(())
        } else {
            Err(Error::ConfigError(format!(
                "{field} must look like '.ext', got '{value}'"
            )))
        }
    }

    fn check_name(field: &str, value: &str, allow_empty: bool) -> Result<()> {
        if value.is_empty() {
            return if allow_empty {
                Ok(())
            } else {
                Err(Error::ConfigError(format!("{field} must not be empty")))
            };
        }
        if value.contains('\\') {
            return Err(Error::ConfigError(format!(
                "{field} must use '/' as separator, got '{value}'"
            )));
        }
        if value.split('/').any(|segment| segment == "..") {
            return Err(Error::ConfigError(format!(
                "{field} must stay inside the project, got '{value}'"
            )));
        }
        Ok(())
    }

    fn validate_naming(naming: &NamingConvention) -> Result<()> {
        Self::check_extension("jar_extension", &naming.jar_extension)?;
        Self::check_extension("war_extension", &naming.war_extension)?;

        let required = [
            ("meta_source_root", &naming.meta_source_root),
            ("service_config_dir", &naming.service_config_dir),
            ("service_config_filename", &naming.service_config_filename),
            ("gen_web_content_dir", &naming.gen_web_content_dir),
            ("web_inf_dir", &naming.web_inf_dir),
            ("web_xml_filename", &naming.web_xml_filename),
            ("impl_properties_filename", &naming.impl_properties_filename),
            ("intf_properties_filename", &naming.intf_properties_filename),
            ("default_consumer_source_dir", &naming.default_consumer_source_dir),
        ];
        for (field, value) in required {
            Self::check_name(field, value, false)?;
        }

        Self::check_name("temp_prefix", &naming.temp_prefix, true)?;
        if naming.temp_prefix.contains('/') {
            return Err(Error::ConfigError(format!(
                "temp_prefix must not contain '/', got '{}'",
                naming.temp_prefix
            )));
        }
        Ok(())
    }
}

impl ConfigValidator for NamingValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        Self::validate_naming(&config.naming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(update: impl FnOnce(&mut NamingConvention)) -> Config {
        let mut config = Config::default();
        update(&mut config.naming);
        config
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(NamingValidator::new().validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_extension_without_dot() {
        let config = config_with(|n| n.war_extension = "war".to_string());
        let err = NamingValidator::new().validate(&config).unwrap_err();
        assert!(err.to_string().contains("war_extension"));
    }

    #[test]
    fn test_rejects_backslash_and_parent_segments() {
        let validator = NamingValidator::new();
        let config = config_with(|n| n.web_inf_dir = "gen\\WEB-INF".to_string());
        assert!(validator.validate(&config).is_err());

        let config = config_with(|n| n.meta_source_root = "../meta-src".to_string());
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_empty_temp_prefix_is_allowed() {
        let config = config_with(|n| n.temp_prefix = String::new());
        assert!(NamingValidator::new().validate(&config).is_ok());
    }
}
