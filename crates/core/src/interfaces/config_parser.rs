//! Config parser interface

use crate::{
    error::ParserError,
    types::{ImplementationMetadata, InterfaceMetadata},
};

/// Turns raw artifact bytes into metadata.
///
/// Parsers populate the target in place and leave fields the document does
/// not mention untouched, so caller-supplied defaults survive.
pub trait ConfigParser: Send + Sync {
    /// Parse a service config file into implementation metadata
    fn parse_service_config(
        &self,
        bytes: &[u8],
        target: &mut ImplementationMetadata,
    ) -> Result<(), ParserError>;

    /// Parse the properties artifact of an interface project
    fn parse_interface_properties(
        &self,
        bytes: &[u8],
        target: &mut InterfaceMetadata,
    ) -> Result<(), ParserError>;
}
