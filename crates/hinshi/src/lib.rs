//! hinshi part-of-speech tagging library
//!
//! Turns vibrato-rkyv morphological analysis into tokens with a part-of-speech tag, a lemma and an optional entity label

/// Configuration - PipelineConfig, DictionaryPreset
pub mod config;

/// Dictionary - loading and caching of analyzer dictionaries
pub mod dictionary;

/// Errors - HinshiError, HinshiResult
pub mod errors;

/// Handler - the high-level `tag` / `ner` API
pub mod handler;

/// Data model - Token, AnalyzedUnit
pub mod models;

/// Pipelines - the Pipeline trait, the vibrato implementation and entity recognition
pub mod pipeline;

/// Re-exports
pub use config::{DictionaryPreset, PipelineConfig};
pub use errors::{HinshiError, HinshiResult};
pub use handler::Handler;
pub use models::Token;
pub use pipeline::Pipeline;
