//! Named-entity recognition over dictionary analysis
//!
//! Proper nouns carry their class in the feature string (IPAdic: `人名` / `地域` / `組織` / `一般`,
//! UniDic: `人名` / `地名` / `一般`). Adjacent units of the same class form one span:
//! the first unit is `B`, the following ones `I`, everything else `O`.

use std::fmt;

use tracing::trace;

use crate::models::{AnalyzedUnit, Iob};

use super::feature::FeatureFields;

/// Entity type labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
  /// People, including surname + given name sequences
  Person,
  /// Countries, cities, regions
  Gpe,
  /// Companies, agencies, institutions
  Org,
  /// Other proper nouns
  Misc,
}

impl EntityType {
  /// Label used in the `entity` field
  pub fn label(&self) -> &'static str {
    match self {
      Self::Person => "PERSON",
      Self::Gpe => "GPE",
      Self::Org => "ORG",
      Self::Misc => "MISC",
    }
  }

  /// Maps a proper-noun class from the feature string
  pub fn from_proper_noun_class(class: &str) -> Option<Self> {
    match class {
      "人名" => Some(Self::Person),
      "地域" | "地名" => Some(Self::Gpe),
      "組織" => Some(Self::Org),
      "一般" => Some(Self::Misc),
      _ => None,
    }
  }

  /// Entity type of a unit given its feature string
  pub fn from_feature(feature: &FeatureFields<'_>) -> Option<Self> {
    feature.proper_noun_class().and_then(Self::from_proper_noun_class)
  }
}

impl fmt::Display for EntityType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Pipeline component that assigns IOB markers and entity types
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityRecognizer;

impl EntityRecognizer {
  /// Component name reported by `Pipeline::pipe_names`
  pub const NAME: &'static str = "ner";

  /// Annotates `units` in place.
  ///
  /// `types[i]` is the entity type detected for `units[i]`; both slices have the same length.
  pub fn annotate(&self, units: &mut [AnalyzedUnit], types: &[Option<EntityType>]) {
    debug_assert_eq!(units.len(), types.len());

    let mut previous: Option<EntityType> = None;
    for (unit, current) in units.iter_mut().zip(types.iter().copied()) {
      match current {
        Some(ent) => {
          let iob = if previous == Some(ent) { Iob::Inside } else { Iob::Begin };
          trace!(orth = %unit.orth, %iob, entity = %ent, "Entity unit");
          unit.ent_iob = Some(iob);
          unit.ent_type = ent.label().to_string();
        }
        None => {
          unit.ent_iob = Some(Iob::Outside);
          unit.ent_type.clear();
        }
      }
      previous = current;
    }
  }
}
