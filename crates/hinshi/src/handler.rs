// crates/hinshi/src/handler.rs

//! Handler: the facade of the hinshi crate.
//!
//! - A tagging-only pipeline (always present)
//! - A pipeline with entity recognition (only when enabled at startup)
//!
//! The HTTP layer only needs the two operations `tag` and `ner`.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::config::PipelineConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::HinshiResult;
use crate::models::{AnalyzedUnit, Iob, PRONOUN_LEMMA, Token};
use crate::pipeline::{Pipeline, VibratoPipeline};

/// Provides the `tag` / `ner` operations.
///
/// Pipelines are loaded once at startup and shared read-only afterwards.
pub struct Handler {
  /// Tagging-only pipeline
  tagging: Arc<dyn Pipeline>,

  /// Pipeline with entity recognition (`None` when disabled)
  ner: Option<Arc<dyn Pipeline>>,
}

impl Handler {
  /// Builds a handler from already loaded pipelines
  pub fn new(tagging: Arc<dyn Pipeline>, ner: Option<Arc<dyn Pipeline>>) -> Self {
    Self { tagging, ner }
  }

  /// Loads the pipelines described by `config`
  ///
  /// # Flow
  /// 1. Validate the configuration
  /// 2. Load the dictionary (presets are downloaded on the first run only)
  /// 3. Build the tagging pipeline
  /// 4. If `ner` is set, build the NER pipeline over the same dictionary
  ///
  /// # Errors
  /// - Invalid configuration (missing dictionary file, etc.)
  /// - Dictionary load failure
  pub fn from_config(config: &PipelineConfig) -> HinshiResult<Self> {
    config.validate()?;

    let manager = match (&config.dictionary_path, config.dictionary_cache_dir()) {
      (Some(path), _) => DictionaryManager::from_local_path(path)?,
      (None, Some(cache_dir)) => {
        DictionaryManager::with_preset_in(config.dictionary_preset(), cache_dir)
      }
      (None, None) => DictionaryManager::with_preset(config.dictionary_preset())?,
    };
    let dict = manager.load()?;

    let tagging = VibratoPipeline::tagging(Arc::clone(&dict), config.preset);
    info!(
      preset = %config.preset,
      pipes = %tagging.pipe_names().join(", "),
      "Tagging pipeline"
    );

    let ner = if config.ner {
      let ner = VibratoPipeline::with_entities(dict, config.preset);
      info!(
        preset = %config.preset,
        pipes = %ner.pipe_names().join(", "),
        "NER pipeline"
      );
      Some(Arc::new(ner) as Arc<dyn Pipeline>)
    } else {
      None
    };

    Ok(Self::new(Arc::new(tagging), ner))
  }

  /// Whether a NER pipeline is configured
  pub fn has_ner(&self) -> bool {
    self.ner.is_some()
  }

  /// Part-of-speech tagging
  ///
  /// One token per unit, in document order. `entity` is always `None`.
  ///
  /// # Errors
  /// Pipeline errors are returned unchanged
  pub fn tag(&self, sentence: &str) -> HinshiResult<Vec<Token>> {
    let units = self.tagging.process(sentence)?;
    Ok(units.into_iter().map(|unit| to_token(unit, false)).collect())
  }

  /// Tagging with named-entity recognition
  ///
  /// Returns `Ok(None)` when no NER pipeline is configured.
  ///
  /// # Errors
  /// Pipeline errors are returned unchanged
  pub fn ner(&self, sentence: &str) -> HinshiResult<Option<Vec<Token>>> {
    let Some(pipeline) = &self.ner else {
      return Ok(None);
    };

    let units = pipeline.process(sentence)?;
    Ok(Some(units.into_iter().map(|unit| to_token(unit, true)).collect()))
  }
}

/// Lemma normalization
///
/// The pronoun sentinel `-PRON-` becomes the lower-cased surface form;
/// any other lemma is lower-cased and trimmed.
pub fn normalize_lemma(orth: &str, lemma: &str) -> String {
  if lemma == PRONOUN_LEMMA {
    orth.to_lowercase()
  } else {
    lemma.to_lowercase().trim().to_string()
  }
}

/// Entity label `"<IOB>-<TYPE>"`.
///
/// `None` unless the unit is inside a span (`B` or `I`) with a non-empty type.
pub fn entity_label(unit: &AnalyzedUnit) -> Option<String> {
  if unit.ent_type.is_empty() {
    return None;
  }
  match unit.ent_iob {
    Some(iob @ (Iob::Begin | Iob::Inside)) => Some(format!("{iob}-{}", unit.ent_type)),
    _ => None,
  }
}

fn to_token(unit: AnalyzedUnit, with_entity: bool) -> Token {
  let entity = if with_entity { entity_label(&unit) } else { None };
  Token {
    lemma: normalize_lemma(&unit.orth, &unit.lemma),
    tag: unit.tag,
    text: unit.orth,
    entity,
  }
}

/// Pipelines are not `Debug`, so only their component names are shown
impl fmt::Debug for Handler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Handler")
      .field("tagging", &self.tagging.pipe_names())
      .field("ner", &self.ner.as_ref().map(|p| p.pipe_names()))
      .finish()
  }
}
