//! Loading text sources into line-oriented documents

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The loaded line sequence of one analyzed text source
#[derive(Debug, Clone, Default)]
pub struct Document {
    source: Option<PathBuf>,
    lines: Vec<String>,
}

impl Document {
    /// Read `path` into memory, one entry per line with terminators stripped.
    /// `\r\n`, `\n` and a lone `\r` all end a line.
    ///
    /// A missing file yields [`Error::SourceNotFound`]; every other read
    /// failure (permissions, invalid UTF-8) yields [`Error::Io`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::from_read(path, e))?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| Error::from_read(path, e))?;
        let lines = split_lines(&text);

        debug!("Loaded {} lines from {}", lines.len(), path.display());

        Ok(Self {
            source: Some(path.to_path_buf()),
            lines,
        })
    }

    /// Build a document from in-memory lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: None,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a document by splitting `text` on line terminators
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(split_lines(text))
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split `text` on `\r\n`, `\n` or `\r`; a trailing terminator does not
/// open an extra empty line
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}
