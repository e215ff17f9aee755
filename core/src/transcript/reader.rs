use std::fs;
use std::path::{Path, PathBuf};

use memchr::memchr_iter;

use super::error::ReaderError;

const BOM: char = '\u{feff}';

/// A whole transcript held in memory. Files are small chat exports, and
/// boss detection needs the full text anyway.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub path: PathBuf,
    pub content: String,
}

impl Transcript {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path).map_err(|source| ReaderError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let content =
            String::from_utf8(bytes).map_err(|_| ReaderError::Encoding { path: path.clone() })?;
        Ok(Self::from_string(path, content))
    }

    pub fn from_string(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let content = match content.strip_prefix(BOM) {
            Some(stripped) => stripped.to_string(),
            None => content,
        };
        Self {
            path: path.into(),
            content,
        }
    }

    /// Lines without their `\n` / `\r\n` terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.content)
    }
}

pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let bytes = content.as_bytes();
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        ranges.push((start, end));
        start = end + 1;
    }
    if start < bytes.len() {
        ranges.push((start, bytes.len()));
    }

    ranges.into_iter().map(move |(start, end)| {
        let line = &content[start..end];
        line.strip_suffix('\r').unwrap_or(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_handle_crlf_and_missing_newline() {
        let transcript = Transcript::from_string("inline", "\u{feff}one\r\ntwo\n\nthree");
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines, vec!["one", "two", "", "three"]);
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = Transcript::read("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0x0a]).unwrap();
        assert!(matches!(
            Transcript::read(&path),
            Err(ReaderError::Encoding { .. })
        ));
    }
}
