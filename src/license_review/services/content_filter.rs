use crate::license_review::domain::ContentId;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ContentFilter - Drops content ids matching exclusion patterns
///
/// Patterns are matched against the canonical coordinate
/// (`type/provider/namespace/name/revision`). `*` matches zero or more
/// characters, including `/`, so `npm/npmjs/@types/*` excludes a whole
/// namespace. Matching is case-sensitive.
#[derive(Debug)]
pub struct ContentFilter {
    patterns: Vec<ExcludePattern>,
}

impl ContentFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Errors
    /// - More than 64 patterns
    /// - A pattern that is empty, longer than 255 bytes, contains whitespace
    ///   or control characters, or consists only of wildcards
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns the ids that match no pattern, preserving order
    pub fn filter_ids(&self, ids: Vec<ContentId>) -> Vec<ContentId> {
        ids.into_iter()
            .filter(|id| !self.matches(&id.to_string()))
            .collect()
    }

    fn matches(&self, coordinate: &str) -> bool {
        // Evaluate every pattern so each one records whether it matched.
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(coordinate) || hit)
    }

    /// Patterns that have not matched anything filtered so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    /// Literal pieces between `*`s; empty pieces mark leading/trailing wildcards
    pieces: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let pieces = pattern.split('*').map(str::to_string).collect();

        Ok(Self {
            original: pattern,
            pieces,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, candidate: &str) -> bool {
        let is_match = glob_match(&self.pieces, candidate);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored wildcard match: the first piece must be a prefix, the last a
/// suffix, and the middle pieces must appear in order in between.
fn glob_match(pieces: &[String], candidate: &str) -> bool {
    let (first, rest) = match pieces.split_first() {
        Some(split) => split,
        None => return candidate.is_empty(),
    };

    if rest.is_empty() {
        return candidate == first;
    }

    let Some(mut remaining) = candidate.strip_prefix(first.as_str()) else {
        return false;
    };

    let (last, middle) = match rest.split_last() {
        Some(split) => split,
        None => return true,
    };

    for piece in middle {
        match remaining.find(piece.as_str()) {
            Some(pos) => remaining = &remaining[pos + piece.len()..],
            None => return false,
        }
    }

    remaining.ends_with(last.as_str())
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        anyhow::bail!(
            "Exclusion pattern contains invalid character {:?} in pattern '{}'",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<ContentId> {
        values.iter().map(|v| ContentId::parse(v).unwrap()).collect()
    }

    fn filter(patterns: &[&str]) -> ContentFilter {
        ContentFilter::new(patterns.iter().map(|p| p.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let f = filter(&["npm/npmjs/-/write/1.0.3"]);
        assert!(f.matches("npm/npmjs/-/write/1.0.3"));
        assert!(!f.matches("npm/npmjs/-/write/1.0.4"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let f = filter(&["npm/npmjs/@types/*"]);
        assert!(f.matches("npm/npmjs/@types/node/20.1.0"));
        assert!(!f.matches("npm/npmjs/-/types/1.0.0"));
    }

    #[test]
    fn test_leading_wildcard() {
        let f = filter(&["*/1.0.0-SNAPSHOT"]);
        assert!(f.matches("maven/mavencentral/org.example/app/1.0.0-SNAPSHOT"));
        assert!(!f.matches("maven/mavencentral/org.example/app/1.0.0"));
    }

    #[test]
    fn test_middle_wildcards_are_anchored() {
        let f = filter(&["maven/*/org.eclipse.*/*"]);
        assert!(f.matches("maven/mavencentral/org.eclipse.jgit/org.eclipse.jgit/5.7.0"));
        assert!(!f.matches("npm/npmjs/-/maven/org.eclipse.x"));
        assert!(!f.matches("maven/mavencentral/com.example/eclipse/1.0"));
    }

    #[test]
    fn test_contains_wildcard() {
        let f = filter(&["*/eslint*"]);
        assert!(f.matches("npm/npmjs/-/eslint/8.0.0"));
        assert!(f.matches("npm/npmjs/-/eslint-plugin-react/7.0.0"));
        assert!(!f.matches("npm/npmjs/-/prettier/3.0.0"));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let f = filter(&["npm/npmjs/-/Write/*"]);
        assert!(!f.matches("npm/npmjs/-/write/1.0.3"));
    }

    #[test]
    fn test_filter_ids() {
        let f = filter(&["pypi/*"]);
        let kept = f.filter_ids(ids(&[
            "npm/npmjs/-/write/1.0.3",
            "pypi/pypi/-/requests/2.31.0",
            "crate/cratesio/-/serde/1.0.200",
        ]));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name(), "write");
        assert_eq!(kept[1].name(), "serde");
    }

    #[test]
    fn test_filter_ids_maven_notation_uses_canonical_form() {
        let f = filter(&["maven/mavencentral/junit/*"]);
        let kept = f.filter_ids(ids(&["junit:junit:4.13.2", "npm/npmjs/-/write/1.0.3"]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name(), "write");
    }

    #[test]
    fn test_unmatched_patterns() {
        let f = filter(&["pypi/*", "gem/*", "npm/npmjs/-/write/*"]);
        f.filter_ids(ids(&["npm/npmjs/-/write/1.0.3", "pypi/pypi/-/flask/3.0.0"]));
        assert_eq!(f.unmatched_patterns(), vec!["gem/*".to_string()]);
    }

    #[test]
    fn test_overlapping_patterns_both_marked_matched() {
        let f = filter(&["npm/*", "*/write/*"]);
        f.filter_ids(ids(&["npm/npmjs/-/write/1.0.3"]));
        assert!(f.unmatched_patterns().is_empty());
    }

    #[test]
    fn test_empty_pattern_list() {
        let f = filter(&[]);
        assert!(!f.matches("npm/npmjs/-/write/1.0.3"));
        assert!(f.unmatched_patterns().is_empty());
    }

    #[test]
    fn test_pattern_validation_empty() {
        let result = ContentFilter::new(vec!["".to_string()]);
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_pattern_validation_whitespace() {
        let result = ContentFilter::new(vec!["npm/ npmjs".to_string()]);
        assert!(result.unwrap_err().to_string().contains("invalid character"));
    }

    #[test]
    fn test_pattern_validation_only_wildcards() {
        let result = ContentFilter::new(vec!["**".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot contain only wildcards"));
    }

    #[test]
    fn test_pattern_length_boundary() {
        assert!(ContentFilter::new(vec!["a".repeat(255)]).is_ok());
        let result = ContentFilter::new(vec!["a".repeat(256)]);
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_pattern_count_boundary() {
        let patterns: Vec<String> = (0..64).map(|i| format!("p{}", i)).collect();
        assert!(ContentFilter::new(patterns).is_ok());

        let patterns: Vec<String> = (0..65).map(|i| format!("p{}", i)).collect();
        let result = ContentFilter::new(patterns);
        assert!(result.unwrap_err().to_string().contains("Too many"));
    }
}
