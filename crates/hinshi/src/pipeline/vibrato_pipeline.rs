//! Pipeline backed by the vibrato-rkyv morphological analyzer

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;
use vibrato_rkyv::dictionary::LexType;

use crate::config::DictionaryPreset;
use crate::errors::PipelineError;
use crate::models::{AnalyzedUnit, PRONOUN_LEMMA};

use super::Pipeline;
use super::entity_recognizer::{EntityRecognizer, EntityType};
use super::feature::FeatureFields;

/// Analyzer-backed pipeline
///
/// - Stateless apart from the shared dictionary
/// - `Clone + Send + Sync`; a fresh worker is created for every call
#[derive(Clone)]
pub struct VibratoPipeline {
  inner: VibratoImpl,
  /// Decides where the lemma lives in the feature string
  preset: DictionaryPreset,
  /// `Some` for the NER pipeline
  recognizer: Option<EntityRecognizer>,
}

impl VibratoPipeline {
  /// Tagging pipeline (tokenizer, tagger, lemmatizer)
  pub fn tagging(dict: Arc<Dictionary>, preset: DictionaryPreset) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      preset,
      recognizer: None,
    }
  }

  /// Tagging pipeline plus the entity recognizer
  pub fn with_entities(dict: Arc<Dictionary>, preset: DictionaryPreset) -> Self {
    Self {
      recognizer: Some(EntityRecognizer),
      ..Self::tagging(dict, preset)
    }
  }
}

impl Pipeline for VibratoPipeline {
  fn pipe_names(&self) -> Vec<&'static str> {
    let mut names = vec!["tokenizer", "tagger", "lemmatizer"];
    if self.recognizer.is_some() {
      names.push(EntityRecognizer::NAME);
    }
    names
  }

  fn process(&self, text: &str) -> Result<Vec<AnalyzedUnit>, PipelineError> {
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    let mut units = Vec::with_capacity(worker.num_tokens());
    let mut types = Vec::with_capacity(worker.num_tokens());
    // Whitespace-separated runs of units; an entity span never crosses whitespace
    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut run_start = 0;

    for token in worker.token_iter() {
      let surface = token.surface();
      if surface.trim().is_empty() {
        runs.push(run_start..units.len());
        run_start = units.len();
        continue;
      }

      let (unit, entity) = analyze_token(surface, token.feature(), self.preset);
      units.push(unit);
      // Unknown-word templates carry a guessed POS, not a real proper-noun class
      types.push(if token.lex_type() == LexType::Unknown { None } else { entity });
    }
    runs.push(run_start..units.len());

    if let Some(recognizer) = &self.recognizer {
      for run in runs.into_iter().filter(|run| !run.is_empty()) {
        recognizer.annotate(&mut units[run.clone()], &types[run]);
      }
    }

    debug!(
      total_tokens = worker.num_tokens(),
      units = units.len(),
      ner = self.recognizer.is_some(),
      "Analysis completed"
    );

    Ok(units)
  }
}

/// Maps one analyzer token to a unit and its entity type candidate.
///
/// - tag: POS hierarchy joined with `-`
/// - lemma: the dictionary base form, [`PRONOUN_LEMMA`] for pronouns, the surface when missing
pub fn analyze_token(
  surface: &str,
  feature: &str,
  preset: DictionaryPreset,
) -> (AnalyzedUnit, Option<EntityType>) {
  let fields = FeatureFields::parse(feature);

  let lemma = if fields.is_pronoun() {
    PRONOUN_LEMMA
  } else {
    fields.lemma(preset.lemma_field()).unwrap_or(surface)
  };

  let unit = AnalyzedUnit::new(surface, fields.pos_tag(), lemma);
  (unit, EntityType::from_feature(&fields))
}
