//! Upload Repository
//!
//! Filesystem access for the uploads directory. Files keep the name chosen by
//! the uploader; a second upload under the same name overwrites the first.

use easel_core::domain::taxonomy::is_safe_segment;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Repository error type
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File name would escape the uploads directory")]
    InvalidFileName,

    #[error("File does not exist")]
    NotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolves `file_name` inside `dir`, rejecting names that would escape it
pub fn file_path(dir: &Path, file_name: &str) -> Result<PathBuf, StorageError> {
    if !is_safe_segment(file_name) {
        return Err(StorageError::InvalidFileName);
    }
    Ok(dir.join(file_name))
}

/// Writes `data` to `<dir>/<file_name>`, creating `dir` if needed
pub async fn save(dir: &Path, file_name: &str, data: &[u8]) -> Result<u64, StorageError> {
    let path = file_path(dir, file_name)?;

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, data).await?;

    Ok(data.len() as u64)
}

/// Removes `<dir>/<file_name>`
pub async fn remove(dir: &Path, file_name: &str) -> Result<(), StorageError> {
    let path = file_path(dir, file_name)?;

    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound),
        Err(e) => Err(StorageError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("uploads");

        let size = save(&dir, "x.jpg", b"jpeg bytes").await.unwrap();

        assert_eq!(size, 10);
        assert_eq!(std::fs::read(dir.join("x.jpg")).unwrap(), b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        save(tmp.path(), "x.jpg", b"first").await.unwrap();
        save(tmp.path(), "x.jpg", b"second").await.unwrap();
        assert_eq!(std::fs::read(tmp.path().join("x.jpg")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_remove_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let result = remove(tmp.path(), "missing.jpg").await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_rejects_escaping_names() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            save(tmp.path(), "../x.jpg", b"x").await,
            Err(StorageError::InvalidFileName)
        ));
        assert!(matches!(
            remove(tmp.path(), "..").await,
            Err(StorageError::InvalidFileName)
        ));
    }
}
