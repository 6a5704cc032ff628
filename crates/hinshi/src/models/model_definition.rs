//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lemma sentinel a pipeline emits for pronouns.
///
/// The handler replaces it with the lower-cased surface form.
pub const PRONOUN_LEMMA: &str = "-PRON-";

/// One annotated token as returned by the HTTP API.
///
/// `entity` is only set on the NER path and is omitted from JSON when absent:
///
/// ```json
/// {"text": "山田", "tag": "名詞-固有名詞-人名-姓", "lemma": "山田", "entity": "B-PERSON"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Surface form as it appears in the input
  pub text: String,

  /// Part-of-speech tag
  pub tag: String,

  /// Normalized base form
  pub lemma: String,

  /// `"<IOB>-<TYPE>"`, e.g. `"B-PERSON"`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub entity: Option<String>,
}

impl Token {
  /// Token without entity information
  pub fn new(text: impl Into<String>, tag: impl Into<String>, lemma: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      tag: tag.into(),
      lemma: lemma.into(),
      entity: None,
    }
  }

  /// Builder that sets the entity label
  #[must_use]
  pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
    self.entity = Some(entity.into());
    self
  }
}

/// Position of a unit relative to a named-entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Iob {
  /// First unit of a span
  Begin,
  /// Continuation of the span started by the previous unit
  Inside,
  /// Not part of any entity
  Outside,
}

impl Iob {
  /// Single-letter marker (`"B"`, `"I"`, `"O"`)
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Begin => "B",
      Self::Inside => "I",
      Self::Outside => "O",
    }
  }
}

impl fmt::Display for Iob {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Raw per-unit output of a [`Pipeline`](crate::pipeline::Pipeline).
///
/// `ent_iob` is `None` when no entity recognizer ran; `ent_type` is empty
/// outside entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedUnit {
  /// Surface form
  pub orth: String,
  /// Part-of-speech tag
  pub tag: String,
  /// Base form as produced by the pipeline (may be [`PRONOUN_LEMMA`])
  pub lemma: String,
  /// IOB marker
  pub ent_iob: Option<Iob>,
  /// Entity type label
  pub ent_type: String,
}

impl AnalyzedUnit {
  /// Unit without entity annotation
  pub fn new(orth: impl Into<String>, tag: impl Into<String>, lemma: impl Into<String>) -> Self {
    Self {
      orth: orth.into(),
      tag: tag.into(),
      lemma: lemma.into(),
      ent_iob: None,
      ent_type: String::new(),
    }
  }

  /// Builder that sets the entity annotation
  #[must_use]
  pub fn with_entity(mut self, iob: Iob, ent_type: impl Into<String>) -> Self {
    self.ent_iob = Some(iob);
    self.ent_type = ent_type.into();
    self
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
