use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use util::paths::{self, resolve_key};

use crate::error::{ServiceError, ServiceResult};

/// Object store for uploaded submissions, backed by a directory on disk.
///
/// Objects are addressed by `/`-separated keys relative to `root` and are never
/// overwritten.
#[derive(Debug, Clone)]
pub struct SubmissionStorage {
    root: PathBuf,
    public_base_url: String,
}

impl SubmissionStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn path_for(&self, key: &str) -> ServiceResult<PathBuf> {
        resolve_key(&self.root, key)
            .ok_or_else(|| ServiceError::Validation(format!("Invalid storage path: {key}")))
    }

    /// Writes a new object. Fails if `key` is already taken.
    pub async fn put_new(&self, key: &str, bytes: &[u8]) -> ServiceResult<()> {
        let path = self.path_for(key)?;
        paths::ensure_parent_dir(&path)?;

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ServiceError::Validation(format!(
                    "A file already exists at {key}"
                )));
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = file.write_all(bytes).await {
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(e.into());
        }
        file.flush().await?;
        Ok(())
    }

    pub async fn read(&self, key: &str) -> ServiceResult<Vec<u8>> {
        let path = self.path_for(key)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ServiceError::NotFound("File not found".into()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes an object. Missing objects are ignored.
    pub async fn remove(&self, key: &str) -> ServiceResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        paths::public_url(&self.public_base_url, key)
    }
}
