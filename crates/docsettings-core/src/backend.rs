//! Storage backends for the settings document

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::types::Document;

/// Backend reference type
pub type BackendRef = Arc<dyn SettingsBackend>;

/// Where the settings document lives between process runs
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Location reported in logs and errors
    fn location(&self) -> &Path;

    /// Read the stored document, `None` when nothing has been stored yet
    async fn read(&self) -> CoreResult<Option<Document>>;

    /// Replace the stored document wholesale
    async fn write(&self, document: &Document) -> CoreResult<()>;
}

/// YAML file on the local filesystem
#[derive(Debug, Clone)]
pub struct YamlFileBackend {
    path: PathBuf,
}

impl YamlFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the document is staged in before the rename
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

#[async_trait]
impl SettingsBackend for YamlFileBackend {
    fn location(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> CoreResult<Option<Document>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::persistence(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Some(Document::new()));
        }

        let value: Value = serde_yaml::from_str(&content)
            .map_err(|e| CoreError::persistence(&self.path, format!("invalid YAML: {}", e)))?;

        match value {
            Value::Object(document) => Ok(Some(document)),
            Value::Null => Ok(Some(Document::new())),
            _ => Err(CoreError::persistence(
                &self.path,
                "top-level value must be a mapping",
            )),
        }
    }

    async fn write(&self, document: &Document) -> CoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::persistence(&self.path, e))?;
        }

        let content = serde_yaml::to_string(document)
            .map_err(|e| CoreError::persistence(&self.path, e))?;

        let staging = self.staging_path();
        let staged = match tokio::fs::write(&staging, content).await {
            Ok(()) => tokio::fs::rename(&staging, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = staged {
            match tokio::fs::remove_file(&staging).await {
                Err(cleanup) if cleanup.kind() != ErrorKind::NotFound => log::warn!(
                    "Failed to remove staging file {}: {}",
                    staging.display(),
                    cleanup
                ),
                _ => {}
            }
            return Err(CoreError::persistence(&self.path, e));
        }

        log::debug!("Wrote settings to {}", self.path.display());
        Ok(())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let backend = YamlFileBackend::new(temp_dir.path().join("settings.yaml"));
        assert!(backend.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config").join("settings.yaml");
        let backend = YamlFileBackend::new(&path);

        let mut document = Document::new();
        document.insert("faiss".to_string(), json!({ "index_type": "Flat", "nlist": 10 }));
        backend.write(&document).await.unwrap();

        assert!(path.exists());
        assert!(!backend.staging_path().exists());
        assert_eq!(backend.read().await.unwrap(), Some(document));
    }

    #[tokio::test]
    async fn test_failed_rename_removes_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = temp_dir.path().join("settings.yaml");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let backend = YamlFileBackend::new(&path);

        let err = backend.write(&Document::new()).await.unwrap_err();
        assert!(matches!(err, CoreError::Persistence { .. }));
        assert!(!backend.staging_path().exists());
    }

    #[tokio::test]
    async fn test_read_hand_written_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(
            &path,
            "# edited by hand\nchatbot:\n  max_length: 256\n  temperature: 0.2\n",
        )
        .unwrap();

        let document = YamlFileBackend::new(&path).read().await.unwrap().unwrap();
        assert_eq!(document["chatbot"]["max_length"], json!(256));
        assert_eq!(document["chatbot"]["temperature"], json!(0.2));
    }

    #[tokio::test]
    async fn test_read_empty_file_is_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(&path, "").unwrap();

        let document = YamlFileBackend::new(&path).read().await.unwrap().unwrap();
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn test_read_rejects_non_mapping() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(&path, "- just\n- a list\n").unwrap();

        let err = YamlFileBackend::new(&path).read().await.unwrap_err();
        assert!(matches!(err, CoreError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_read_rejects_broken_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        std::fs::write(&path, "faiss: [unclosed\n").unwrap();

        let err = YamlFileBackend::new(&path).read().await.unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }
}
