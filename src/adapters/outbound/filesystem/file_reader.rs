use crate::ports::outbound::{parse_id_lines, ContentIdReader, InputSource};
use crate::shared::error::LicenseCheckError;
use crate::shared::security::{inspect_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading content id lists
///
/// Implements the ContentIdReader port for files and stdin. Files are read
/// only if they are regular, non-symlink files within the size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(LicenseCheckError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        inspect_input_file(path, "content list", MAX_FILE_SIZE).map_err(|e| {
            LicenseCheckError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        fs::read_to_string(path).map_err(|e| {
            LicenseCheckError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<String> {
        read_limited(io::stdin().lock(), MAX_FILE_SIZE)
    }
}

/// Reads `reader` to a string, failing once more than `limit` bytes arrive
fn read_limited(reader: impl Read, limit: u64) -> Result<String> {
    let mut content = String::new();
    reader
        .take(limit + 1)
        .read_to_string(&mut content)
        .map_err(|e| anyhow::anyhow!("Failed to read content ids from stdin: {}", e))?;

    if content.len() as u64 > limit {
        anyhow::bail!(
            "Content ids on stdin exceed the maximum size of {} bytes\n\n💡 Hint: Split the list or pass it as a file",
            limit
        );
    }
    Ok(content)
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentIdReader for FileSystemReader {
    fn read_content_ids(&self, source: &InputSource) -> Result<Vec<String>> {
        let content = match source {
            InputSource::File(path) => self.read_file(path)?,
            InputSource::Stdin => self.read_stdin()?,
        };

        Ok(parse_id_lines(&content))
    }
}
