use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single coordinate segment (security limit)
const MAX_SEGMENT_LENGTH: usize = 255;

/// Placeholder ClearlyDefined uses for an absent namespace
pub const EMPTY_NAMESPACE: &str = "-";

const MAVEN_TYPE: &str = "maven";
const MAVEN_SOURCE: &str = "mavencentral";

/// Canonical identifier of a piece of third-party content.
///
/// Always rendered as a ClearlyDefined coordinate
/// `type/provider/namespace/name/revision`, regardless of the notation it
/// was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId {
    kind: String,
    source: String,
    namespace: String,
    name: String,
    version: String,
}

impl ContentId {
    /// Parses a content id from either notation:
    ///
    /// - ClearlyDefined coordinates: `npm/npmjs/-/write/1.0.3`
    /// - Maven coordinates: `org.eclipse.jgit:org.eclipse.jgit:5.7.0`,
    ///   optionally with a packaging segment (`group:artifact:jar:version`)
    ///
    /// # Errors
    /// Returns [`LicenseCheckError::InvalidContentId`] when the value matches
    /// neither notation or a segment fails validation.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();

        if value.is_empty() {
            return Err(invalid(value, "Content id cannot be empty"));
        }

        if value.contains('/') {
            return Self::parse_coordinates(value);
        }

        if value.contains(':') {
            return Self::parse_maven(value);
        }

        Err(invalid(
            value,
            "Unrecognized format; expected '/' or ':' separated segments",
        ))
    }

    fn parse_coordinates(value: &str) -> Result<Self> {
        let segments: Vec<&str> = value.split('/').collect();
        if segments.len() != 5 {
            return Err(invalid(
                value,
                &format!(
                    "ClearlyDefined coordinates need 5 segments, found {}",
                    segments.len()
                ),
            ));
        }

        for segment in &segments {
            validate_segment(value, segment)?;
        }

        Ok(Self {
            kind: segments[0].to_string(),
            source: segments[1].to_string(),
            namespace: segments[2].to_string(),
            name: segments[3].to_string(),
            version: segments[4].to_string(),
        })
    }

    fn parse_maven(value: &str) -> Result<Self> {
        let segments: Vec<&str> = value.split(':').collect();
        let (group, artifact, version) = match segments.as_slice() {
            [group, artifact, version] => (*group, *artifact, *version),
            [group, artifact, _packaging, version] => (*group, *artifact, *version),
            _ => {
                return Err(invalid(
                    value,
                    "Maven coordinates must be group:artifact:version or group:artifact:packaging:version",
                ))
            }
        };

        for segment in &segments {
            validate_segment(value, segment)?;
        }

        Ok(Self {
            kind: MAVEN_TYPE.to_string(),
            source: MAVEN_SOURCE.to_string(),
            namespace: group.to_string(),
            name: artifact.to_string(),
            version: version.to_string(),
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Namespace segment; `-` when the content has none
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

fn validate_segment(value: &str, segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(invalid(value, "Empty segment"));
    }

    if segment.len() > MAX_SEGMENT_LENGTH {
        return Err(invalid(
            value,
            &format!(
                "Segment is too long ({} bytes). Maximum allowed: {} bytes",
                segment.len(),
                MAX_SEGMENT_LENGTH
            ),
        ));
    }

    if segment.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(value, "Segments must not contain whitespace"));
    }

    Ok(())
}

fn invalid(value: &str, reason: &str) -> anyhow::Error {
    LicenseCheckError::InvalidContentId {
        id: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.kind, self.source, self.namespace, self.name, self.version
        )
    }
}

impl FromStr for ContentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clearlydefined_coordinates() {
        let id = ContentId::parse("npm/npmjs/-/write/1.0.3").unwrap();
        assert_eq!(id.kind(), "npm");
        assert_eq!(id.source(), "npmjs");
        assert_eq!(id.namespace(), EMPTY_NAMESPACE);
        assert_eq!(id.name(), "write");
        assert_eq!(id.version(), "1.0.3");
        assert_eq!(id.to_string(), "npm/npmjs/-/write/1.0.3");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id = ContentId::parse("  pypi/pypi/-/requests/2.31.0\n").unwrap();
        assert_eq!(id.to_string(), "pypi/pypi/-/requests/2.31.0");
    }

    #[test]
    fn test_parse_maven_gav() {
        let id = ContentId::parse("org.eclipse.jgit:org.eclipse.jgit:5.7.0").unwrap();
        assert_eq!(
            id.to_string(),
            "maven/mavencentral/org.eclipse.jgit/org.eclipse.jgit/5.7.0"
        );
    }

    #[test]
    fn test_parse_maven_with_packaging() {
        let id = ContentId::parse("com.google.guava:guava:jar:31.1-jre").unwrap();
        assert_eq!(id.namespace(), "com.google.guava");
        assert_eq!(id.name(), "guava");
        assert_eq!(id.version(), "31.1-jre");
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        let err = ContentId::parse("npm/npmjs/write/1.0.3").unwrap_err();
        let err = err.downcast::<LicenseCheckError>().unwrap();
        assert!(matches!(err, LicenseCheckError::InvalidContentId { .. }));
        assert!(err.to_string().contains("5 segments"));
    }

    #[test]
    fn test_parse_empty_segment() {
        let result = ContentId::parse("npm/npmjs//write/1.0.3");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Empty segment"));
    }

    #[test]
    fn test_parse_maven_too_few_segments() {
        assert!(ContentId::parse("com.google.guava:guava").is_err());
    }

    #[test]
    fn test_parse_unrecognized() {
        let err = ContentId::parse("write@1.0.3").unwrap_err();
        assert!(err.to_string().contains("Unrecognized format"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(ContentId::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_embedded_whitespace() {
        assert!(ContentId::parse("npm/npmjs/-/wr ite/1.0.3").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_segment() {
        let long = "a".repeat(MAX_SEGMENT_LENGTH + 1);
        let value = format!("npm/npmjs/-/{}/1.0.0", long);
        assert!(ContentId::parse(&value).unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_from_str() {
        let id: ContentId = "crate/cratesio/-/serde/1.0.200".parse().unwrap();
        assert_eq!(id.name(), "serde");
    }

    #[test]
    fn test_equal_ids_from_different_notations() {
        let a = ContentId::parse("junit:junit:4.13.2").unwrap();
        let b = ContentId::parse("maven/mavencentral/junit/junit/4.13.2").unwrap();
        assert_eq!(a, b);
    }
}
