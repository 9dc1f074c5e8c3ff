//! Upload Service
//!
//! Result ingress: rendered mockups uploaded by the worker are stored in the
//! uploads directory and published under `<public url>/uploads/<name>`.

use easel_core::dto::mockup::{DeleteResponse, UploadResponse};
use thiserror::Error;

use crate::config::Config;
use crate::repository::upload_repository::{self, StorageError};

/// Service error type
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid filename")]
    InvalidFileName,

    #[error("File not found")]
    NotFound,

    #[error("Upload failed: {0}")]
    Io(std::io::Error),
}

impl From<StorageError> for UploadError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidFileName => UploadError::InvalidFileName,
            StorageError::NotFound => UploadError::NotFound,
            StorageError::Io(e) => UploadError::Io(e),
        }
    }
}

/// Store an uploaded mockup under the name chosen by the uploader
///
/// # Arguments
/// * `config` - Relay configuration (uploads dir and public URL)
/// * `file_name` - Name from the multipart part; must be a single path segment
/// * `data` - File content
///
/// # Returns
/// The stored file's name, public URL and size in bytes
pub async fn save_upload(
    config: &Config,
    file_name: &str,
    data: &[u8],
) -> Result<UploadResponse, UploadError> {
    let size = upload_repository::save(&config.uploads_dir, file_name, data).await?;

    tracing::info!("Stored upload {} ({} bytes)", file_name, size);

    Ok(UploadResponse {
        success: true,
        file_name: file_name.to_string(),
        file_path: config.upload_url(file_name),
        size,
    })
}

/// Delete a previously uploaded mockup
///
/// # Arguments
/// * `config` - Relay configuration
/// * `file_name` - Name the file was uploaded under
pub async fn delete_upload(
    config: &Config,
    file_name: &str,
) -> Result<DeleteResponse, UploadError> {
    upload_repository::remove(&config.uploads_dir, file_name).await?;

    tracing::info!("Deleted upload {}", file_name);

    Ok(DeleteResponse {
        success: true,
        message: "File deleted successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_uploads(dir: PathBuf) -> Config {
        let mut config = Config::default();
        config.uploads_dir = dir;
        config.public_url = "http://127.0.0.1:3001".to_string();
        config
    }

    #[tokio::test]
    async fn test_save_then_delete() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_uploads(tmp.path().join("uploads"));

        let response = save_upload(&config, "processed_job_1.jpg", b"abc")
            .await
            .unwrap();
        assert_eq!(
            response,
            UploadResponse {
                success: true,
                file_name: "processed_job_1.jpg".to_string(),
                file_path: "http://127.0.0.1:3001/uploads/processed_job_1.jpg".to_string(),
                size: 3,
            }
        );

        let deleted = delete_upload(&config, "processed_job_1.jpg").await.unwrap();
        assert!(deleted.success);
        assert_eq!(deleted.message, "File deleted successfully");

        assert!(matches!(
            delete_upload(&config, "processed_job_1.jpg").await,
            Err(UploadError::NotFound)
        ));
    }
}
