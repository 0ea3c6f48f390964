//! Settings document types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Settings document: top-level section name to section value
pub type Document = Map<String, Value>;

/// Sections every settings document must carry, in check order
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "document_sources",
    "extraction",
    "preprocessing",
    "vectorization",
    "faiss",
    "chatbot",
];

/// A directory the ingestion pipeline reads documents from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSource {
    pub path: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub watch: bool,
}

/// FAISS index kinds accepted in `faiss.index_type`
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    IVFFlat,
    Flat,
    HNSW,
}

impl std::str::FromStr for IndexType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IVFFlat" => Ok(IndexType::IVFFlat),
            "Flat" => Ok(IndexType::Flat),
            "HNSW" => Ok(IndexType::HNSW),
            _ => Err(format!("Invalid FAISS index type: {}", s)),
        }
    }
}

/// Outcome of validating a candidate document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from accumulated messages
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_type_parse_is_case_sensitive() {
        assert_eq!("HNSW".parse::<IndexType>(), Ok(IndexType::HNSW));
        assert_eq!("IVFFlat".parse::<IndexType>(), Ok(IndexType::IVFFlat));
        assert!("flat".parse::<IndexType>().is_err());
        assert!("BadType".parse::<IndexType>().is_err());
    }

    #[test]
    fn test_document_source_defaults() {
        let source: DocumentSource =
            serde_json::from_value(serde_json::json!({ "path": "/srv/docs" })).unwrap();
        assert_eq!(source.path, "/srv/docs");
        assert!(source.types.is_empty());
        assert!(!source.watch);
    }
}
