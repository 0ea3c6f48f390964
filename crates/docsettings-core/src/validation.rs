//! Schema checks for settings documents
//!
//! Validation happens in two phases. First every required section must be
//! present; if any is missing only those messages are reported. Otherwise the
//! per-section field rules run and all their messages are accumulated.

use serde_json::Value;

use crate::types::{Document, IndexType, ValidationResult, REQUIRED_SECTIONS};

/// Validate a candidate without touching any state.
///
/// Anything other than a mapping is missing every required section.
pub fn validate(candidate: &Value) -> ValidationResult {
    match candidate.as_object() {
        Some(document) => validate_document(document),
        None => ValidationResult::from_errors(
            REQUIRED_SECTIONS
                .iter()
                .map(|section| missing_message(section))
                .collect(),
        ),
    }
}

/// Validate a settings document
pub fn validate_document(document: &Document) -> ValidationResult {
    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !document.contains_key(**section))
        .map(|section| missing_message(section))
        .collect();
    if !missing.is_empty() {
        return ValidationResult::from_errors(missing);
    }

    let mut errors = Vec::new();
    check_document_sources(&document["document_sources"], &mut errors);
    check_extraction(&document["extraction"], &mut errors);
    check_vectorization(&document["vectorization"], &mut errors);
    check_faiss(&document["faiss"], &mut errors);
    check_chatbot(&document["chatbot"], &mut errors);

    ValidationResult::from_errors(errors)
}

fn missing_message(section: &str) -> String {
    format!("Missing required section: {}", section)
}

fn is_integer(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if v.is_i64() || v.is_u64())
}

fn check_document_sources(sources: &Value, errors: &mut Vec<String>) {
    let Some(sources) = sources.as_array() else {
        errors.push("Document sources must be a list".to_string());
        return;
    };

    for source in sources {
        if !matches!(source.get("path"), Some(Value::String(_))) {
            errors.push("Document source path must be a string".to_string());
        }
        if !matches!(source.get("types"), Some(Value::Array(_))) {
            errors.push("Document types must be a list".to_string());
        }
    }
}

fn check_extraction(extraction: &Value, errors: &mut Vec<String>) {
    let languages = extraction
        .get("docling")
        .and_then(|docling| docling.get("languages"));

    if let Some(languages) = languages {
        if !languages.is_array() {
            errors.push("Languages must be a list".to_string());
        }
    }
}

fn check_vectorization(vectorization: &Value, errors: &mut Vec<String>) {
    if !is_integer(vectorization.get("batch_size")) {
        errors.push("Batch size must be an integer".to_string());
    }
    if !is_integer(vectorization.get("dimension")) {
        errors.push("Vector dimension must be an integer".to_string());
    }
}

fn check_faiss(faiss: &Value, errors: &mut Vec<String>) {
    let known = faiss
        .get("index_type")
        .and_then(Value::as_str)
        .is_some_and(|kind| kind.parse::<IndexType>().is_ok());

    if !known {
        errors.push("Invalid FAISS index type".to_string());
    }
}

fn check_chatbot(chatbot: &Value, errors: &mut Vec<String>) {
    if !is_integer(chatbot.get("max_length")) {
        errors.push("Max length must be an integer".to_string());
    }

    // Absent temperature counts as 0
    let in_range = match chatbot.get("temperature") {
        None => true,
        Some(value) => value.as_f64().is_some_and(|t| (0.0..=1.0).contains(&t)),
    };
    if !in_range {
        errors.push("Temperature must be between 0 and 1".to_string());
    }
}

// ==================== Tests ====================
