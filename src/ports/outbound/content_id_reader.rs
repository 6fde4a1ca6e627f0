use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where the list of content ids comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A text file with one content id per line
    File(PathBuf),
    /// Standard input, selected with `-` on the command line
    Stdin,
}

impl InputSource {
    /// Maps the `-` argument to stdin and anything else to a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// ContentIdReader port for loading the content ids to check
pub trait ContentIdReader {
    /// Reads raw (unparsed) content ids from `source`
    ///
    /// Implementations trim each line and skip blank lines and lines
    /// starting with `#`.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn read_content_ids(&self, source: &InputSource) -> Result<Vec<String>>;
}

/// Splits list content into raw ids, dropping blanks and `#` comments
pub fn parse_id_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("deps.txt"),
            InputSource::File(PathBuf::from("deps.txt"))
        );
    }

    #[test]
    fn test_input_source_display() {
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("deps.txt")).to_string(),
            "deps.txt"
        );
    }

    #[test]
    fn test_parse_id_lines() {
        let content = "# direct dependencies\nnpm/npmjs/-/write/1.0.3\n\n  junit:junit:4.13.2  \r\n#trailing\n";
        assert_eq!(
            parse_id_lines(content),
            vec![
                "npm/npmjs/-/write/1.0.3".to_string(),
                "junit:junit:4.13.2".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_id_lines_empty() {
        assert!(parse_id_lines("").is_empty());
        assert!(parse_id_lines("\n\n# only comments\n").is_empty());
    }
}
