use std::io;

use crate::types::ResourcePath;

/// Errors that can occur during svclink operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ConfigParse(#[from] ConfigParseError),

    #[error(transparent)]
    WorkspaceAccess(#[from] WorkspaceAccessError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for svclink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a [`ConfigParser`](crate::interfaces::ConfigParser)
/// for a single document. Carries no location; the loader attaches one.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("content is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("invalid content: {0}")]
    Invalid(String),
}

/// A config or build artifact exists but its content is malformed.
#[derive(Debug, thiserror::Error)]
#[error("Malformed config '{path}' for service '{service}': {source}")]
pub struct ConfigParseError {
    pub path: ResourcePath,
    pub service: String,
    #[source]
    pub source: ParserError,
}

/// Workspace data exists but could not be read as declared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot read {operation} of project '{project}': {message}")]
pub struct WorkspaceAccessError {
    pub project: String,
    pub operation: &'static str,
    pub message: String,
}

impl WorkspaceAccessError {
    pub fn new(
        project: impl Into<String>,
        operation: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_names_file_and_service() {
        let err = ConfigParseError {
            path: ResourcePath::from("OrderServiceImpl/meta-src/ServiceConfig.xml"),
            service: "OrderService".to_string(),
            source: ParserError::Syntax("unexpected end of file".to_string()),
        };

        let message = Error::from(err).to_string();
        assert!(message.contains("OrderServiceImpl/meta-src/ServiceConfig.xml"));
        assert!(message.contains("'OrderService'"));
        assert!(message.contains("unexpected end of file"));
    }

    #[test]
    fn test_workspace_access_error_display() {
        let err = WorkspaceAccessError::new("OrderServiceImpl", "classpath", "permission denied");
        assert_eq!(
            err.to_string(),
            "Cannot read classpath of project 'OrderServiceImpl': permission denied"
        );
    }
}
