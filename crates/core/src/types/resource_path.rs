use serde::{Deserialize, Serialize};
use std::fmt;

/// The one separator used for every workspace-relative path, on every platform.
pub const SEPARATOR: char = '/';

/// A workspace-relative path such as `OrderServiceImpl/gen-web-content`.
///
/// Paths are plain names: building one never touches the file system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Join segments with [`SEPARATOR`]. Segments may contain separators
    /// themselves; empty pieces and stray leading/trailing separators are dropped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for segment in segments {
            for piece in segment.as_ref().split(SEPARATOR).filter(|p| !p.is_empty()) {
                if !joined.is_empty() {
                    joined.push(SEPARATOR);
                }
                joined.push_str(piece);
            }
        }
        Self(joined)
    }

    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        Self::from_segments([self.0.as_str(), segment.as_ref()])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.segments().next().is_none()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|s| !s.is_empty())
    }

    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Drop the first `count` segments, e.g. the owning project of a
    /// workspace-level classpath path.
    pub fn remove_first_segments(&self, count: usize) -> Self {
        Self::from_segments(self.segments().skip(count))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourcePath {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ResourcePath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_flattens_nested_separators() {
        let path = ResourcePath::from_segments([
            "Impl",
            "meta-src/",
            "/META-INF/soa",
            "",
            "ServiceConfig.xml",
        ]);
        assert_eq!(path.as_str(), "Impl/meta-src/META-INF/soa/ServiceConfig.xml");
    }

    #[test]
    fn test_remove_first_segments() {
        let path = ResourcePath::from("/OrderServiceImpl/src/main/java");
        assert_eq!(path.remove_first_segments(1).as_str(), "src/main/java");
        assert_eq!(path.remove_first_segments(4).as_str(), "");
        assert!(path.remove_first_segments(9).is_empty());
    }

    #[test]
    fn test_file_name() {
        let path = ResourcePath::from("OrderService/OrderService.jar");
        assert_eq!(path.file_name(), Some("OrderService.jar"));
        assert_eq!(ResourcePath::default().file_name(), None);
    }
}
