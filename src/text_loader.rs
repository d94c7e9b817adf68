use std::fs;
use std::path::Path;

use crate::error::{FadingTextError, Result};

// --- Helper: Load texts from a file, one per non-empty line ---
pub fn load_text_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| FadingTextError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let texts = parse_text_lines(&content);
    if texts.is_empty() {
        Err(FadingTextError::EmptyTextList)
    } else {
        log::debug!("Loaded {} texts from {:?}", texts.len(), path);
        Ok(texts)
    }
}

pub fn parse_text_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
