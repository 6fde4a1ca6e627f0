use cd_license_check::ports::outbound::parse_id_lines;
use cd_license_check::prelude::*;

/// Mock ContentIdReader serving a fixed list of lines
///
/// Lines go through the same trimming and comment filtering as the real readers.
pub struct MockContentIdReader {
    pub lines: Vec<String>,
    pub should_fail: bool,
}

impl MockContentIdReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            lines: Vec::new(),
            should_fail: true,
        }
    }
}

impl ContentIdReader for MockContentIdReader {
    fn read_content_ids(&self, _source: &InputSource) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock content id read failure");
        }
        Ok(parse_id_lines(&self.lines.join("\n")))
    }
}
