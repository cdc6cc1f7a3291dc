// Wed Feb 04 2026 - Alex

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Corpus '{0}' is empty")]
    Empty(PathBuf),
}

/// Read a corpus file fully into memory. A file that cannot be read, or
/// reads back empty, is a startup error; scanning a silently empty buffer
/// would make every trial trivially pass.
pub fn read_corpus(path: &Path) -> Result<Vec<u8>, CorpusError> {
    let content = fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.is_empty() {
        return Err(CorpusError::Empty(path.to_path_buf()));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_surfaced() {
        let path = std::env::temp_dir().join("pattern-scan-bench-missing-corpus");
        let err = read_corpus(&path);
        assert!(matches!(err, Err(CorpusError::Io { .. })));
    }

    #[test]
    fn test_empty_file_is_surfaced() {
        let path = std::env::temp_dir().join("pattern-scan-bench-empty-corpus");
        fs::File::create(&path).unwrap();
        let err = read_corpus(&path);
        assert!(matches!(err, Err(CorpusError::Empty(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_content_read_fully() {
        let path = std::env::temp_dir().join("pattern-scan-bench-corpus");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        drop(file);

        let content = read_corpus(&path).unwrap();
        assert_eq!(content, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        let _ = fs::remove_file(&path);
    }
}
