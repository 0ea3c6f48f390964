//! Settings document validation and persistence
//!
//! [`SettingsStore`] owns the settings document served by the API. It loads
//! the document from a [`SettingsBackend`] (writing built-in defaults on
//! first run), validates every candidate against the settings schema and
//! persists accepted changes before they become visible in memory.

pub mod backend;
pub mod defaults;
pub mod error;
pub mod types;
pub mod validation;

use serde_json::Value;
use std::path::Path;

use docsettings_utils::{check_access, PathAccess};

pub use backend::{BackendRef, SettingsBackend, YamlFileBackend};
pub use defaults::default_document;
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use types::{Document, DocumentSource, IndexType, ValidationResult, REQUIRED_SECTIONS};
pub use validation::{validate, validate_document};

/// In-memory settings document backed by persistent storage
pub struct SettingsStore {
    backend: BackendRef,
    document: Document,
}

impl SettingsStore {
    /// Create a store and load its document from the backend
    pub async fn open(backend: BackendRef) -> CoreResult<Self> {
        let mut store = Self {
            backend,
            document: Document::new(),
        };
        store.load().await?;
        Ok(store)
    }

    /// Location of the backing storage
    pub fn location(&self) -> &Path {
        self.backend.location()
    }

    /// (Re)load the document from the backend.
    ///
    /// Writes the built-in defaults when nothing is stored yet. On failure the
    /// current in-memory document is kept.
    pub async fn load(&mut self) -> CoreResult<()> {
        let document = match self.backend.read().await? {
            Some(document) => {
                let result = validate_document(&document);
                if !result.valid {
                    log::error!(
                        "Settings at {} failed validation: {}",
                        self.location().display(),
                        result.errors.join("; ")
                    );
                    return Err(CoreError::Validation {
                        errors: result.errors,
                    });
                }
                document
            }
            None => {
                log::info!(
                    "No settings at {}, writing defaults",
                    self.location().display()
                );
                let document = default_document();
                self.backend.write(&document).await?;
                document
            }
        };

        self.document = document;
        log::info!("Settings loaded from {}", self.location().display());
        Ok(())
    }

    /// Current document
    pub fn get(&self) -> &Document {
        &self.document
    }

    /// Validate a candidate without side effects
    pub fn validate(candidate: &Value) -> ValidationResult {
        validate(candidate)
    }

    /// Shallow-merge `candidate` into the document and persist it.
    ///
    /// The merged document must pass validation, so a candidate may carry only
    /// the sections it changes. Nothing is mutated unless the write succeeds,
    /// and a candidate that changes nothing is not written.
    pub async fn update(&mut self, candidate: Value) -> CoreResult<()> {
        let Value::Object(candidate) = candidate else {
            return Err(CoreError::Validation {
                errors: vec!["Settings must be a mapping of section names to values".to_string()],
            });
        };

        let mut merged = self.document.clone();
        merged.extend(candidate);

        let result = validate_document(&merged);
        if !result.valid {
            log::warn!("Rejected settings update: {}", result.errors.join("; "));
            return Err(CoreError::Validation {
                errors: result.errors,
            });
        }

        if merged == self.document {
            log::debug!("Settings update changes nothing, skipping write");
            return Ok(());
        }

        self.backend.write(&merged).await?;
        self.document = merged;
        log::info!("Settings updated at {}", self.location().display());
        Ok(())
    }

    /// Check that every configured document source path exists and is readable
    pub fn validate_paths(&self) -> Vec<String> {
        let sources = match self.document.get("document_sources").and_then(Value::as_array) {
            Some(sources) => sources,
            None => return Vec::new(),
        };

        sources
            .iter()
            .filter_map(|source| source.get("path").and_then(Value::as_str))
            .filter(|path| !path.is_empty())
            .filter_map(|path| match check_access(Path::new(path)) {
                PathAccess::Readable => None,
                PathAccess::Missing => Some(format!("Path does not exist: {}", path)),
                PathAccess::Unreadable => Some(format!("Path is not readable: {}", path)),
            })
            .collect()
    }

    // ==================== Section Accessors ====================

    /// Raw value of a top-level section
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.document.get(name)
    }

    /// Well-formed document sources; malformed entries are skipped
    pub fn document_sources(&self) -> Vec<DocumentSource> {
        self.section("document_sources")
            .and_then(Value::as_array)
            .map(|sources| {
                sources
                    .iter()
                    .filter_map(|source| serde_json::from_value(source.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn extraction(&self) -> Option<&Value> {
        self.section("extraction")
    }

    pub fn vectorization(&self) -> Option<&Value> {
        self.section("vectorization")
    }

    pub fn faiss(&self) -> Option<&Value> {
        self.section("faiss")
    }

    pub fn chatbot(&self) -> Option<&Value> {
        self.section("chatbot")
    }
}

// ==================== Tests ====================
