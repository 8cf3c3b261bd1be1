use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Notes file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a notes file and return its content
pub fn read_notes(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    debug!("read {} bytes of notes from {}", content.len(), path.display());
    Ok(content)
}

/// Read the whole notes body from a reader, e.g. stdin
pub fn read_notes_from<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_existing_notes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("handoff.md");
        fs::write(&path, "# Bed 4\n- NPO").unwrap();

        assert_eq!(read_notes(&path).unwrap(), "# Bed 4\n- NPO");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        let err = read_notes(&path).unwrap_err();
        assert!(matches!(err, IoError::NotFound(p) if p == path));
    }

    #[test]
    fn read_from_reader() {
        let content = read_notes_from("a\r\nb".as_bytes()).unwrap();
        assert_eq!(content, "a\r\nb");
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let err = read_notes_from(&[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
