//! pipeline module
//!
//! A [`Pipeline`] takes a string and returns annotated units.
//! [`VibratoPipeline`] is the production implementation; tests inject stubs.

pub mod entity_recognizer;
pub mod feature;
pub mod vibrato_pipeline;

use crate::errors::PipelineError;
use crate::models::AnalyzedUnit;

/// Re-exports
pub use entity_recognizer::{EntityRecognizer, EntityType};
pub use feature::FeatureFields;
pub use vibrato_pipeline::VibratoPipeline;

/// Common interface of NLP pipelines
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, hence `Send + Sync` and `&self`.
pub trait Pipeline: Send + Sync {
  /// Names of the components this pipeline runs, in order
  fn pipe_names(&self) -> Vec<&'static str>;

  /// Analyzes `text` into units in document order
  ///
  /// # Errors
  /// Returns a `PipelineError` if the input cannot be processed
  fn process(&self, text: &str) -> Result<Vec<AnalyzedUnit>, PipelineError>;
}
