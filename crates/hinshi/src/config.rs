// crates/hinshi/src/config.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Pretrained dictionary that backs the pipeline.
///
/// This is the "language identifier" given at startup: choosing a preset
/// selects which pretrained analysis model is loaded. `ja` is accepted as an
/// alias for the default preset (IPAdic).
///
/// ## Why not `PresetDictionaryKind` directly
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and implements neither
/// `Deserialize` nor `FromStr`, and the orphan rule prevents adding them here.
/// Conversion goes through `From<DictionaryPreset> for PresetDictionaryKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IPAdic: the smallest, with person / place / organization proper-noun classes
  #[serde(alias = "ja")]
  Ipadic,
  /// UniDic for written language
  UnidicCwj,
  /// UniDic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Returns the canonical identifier (`"ipadic"`, `"unidic-cwj"`, `"unidic-csj"`).
  pub fn name(&self) -> &'static str {
    match self {
      Self::Ipadic => "ipadic",
      Self::UnidicCwj => "unidic-cwj",
      Self::UnidicCsj => "unidic-csj",
    }
  }

  /// Position of the base form (lemma) in the dictionary's feature string.
  ///
  /// - IPAdic: `品詞,細分類1,細分類2,細分類3,活用型,活用形,原形,読み,発音` → 6
  /// - UniDic: `pos1,pos2,pos3,pos4,cType,cForm,lForm,lemma,orth,...` → 7
  pub fn lemma_field(&self) -> usize {
    match self {
      Self::Ipadic => 6,
      Self::UnidicCwj | Self::UnidicCsj => 7,
    }
  }
}

impl FromStr for DictionaryPreset {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "ja" | "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(ConfigError::UnknownLanguage {
        language: s.to_string(),
      }),
    }
  }
}

impl fmt::Display for DictionaryPreset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

/// Pipeline loading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
  /// Preset dictionary. With `dictionary_path` set, describes the local
  /// dictionary's feature layout instead.
  pub preset: DictionaryPreset,

  /// Local compiled dictionary file, used instead of downloading the preset.
  #[serde(default)]
  pub dictionary_path: Option<PathBuf>,

  /// Dictionary cache directory.
  ///
  /// `None` leaves the choice to `DictionaryManager` (OS cache directory).
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,

  /// Also load the pipeline with entity recognition.
  #[serde(default)]
  pub ner: bool,
}

impl PipelineConfig {
  /// Tagging-only configuration for `preset` with default cache location.
  pub fn new(preset: DictionaryPreset) -> Self {
    Self {
      preset,
      dictionary_path: None,
      cache_dir: None,
      ner: false,
    }
  }

  /// Enables or disables the entity recognition pipeline.
  #[must_use]
  pub fn with_ner(mut self, ner: bool) -> Self {
    self.ner = ner;
    self
  }

  /// Loads the dictionary from a local file instead of the preset download.
  #[must_use]
  pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.dictionary_path = Some(path.into());
    self
  }

  /// Overrides the dictionary cache directory.
  #[must_use]
  pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.cache_dir = Some(dir.into());
    self
  }

  /// Returns the preset dictionary type to pass to `DictionaryManager`.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.preset.into()
  }

  /// Returns the configured cache directory, if any.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.cache_dir.as_deref()
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `dictionary_path` points to an existing file
  /// - `cache_dir` exists as a directory or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(path) = &self.dictionary_path
      && !path.is_file()
    {
      return Err(ConfigError::DictionaryFileNotFound { path: path.clone() });
    }

    if let Some(cache_dir) = &self.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── DictionaryPreset ────────────────────────────────────────────────

  #[test]
  fn preset_from_str_accepts_names_and_alias() {
    assert_eq!("ja".parse::<DictionaryPreset>().unwrap(), DictionaryPreset::Ipadic);
    assert_eq!("IPADIC".parse::<DictionaryPreset>().unwrap(), DictionaryPreset::Ipadic);
    assert_eq!(
      "unidic-cwj".parse::<DictionaryPreset>().unwrap(),
      DictionaryPreset::UnidicCwj
    );
    assert_eq!(
      " Unidic-CSJ ".parse::<DictionaryPreset>().unwrap(),
      DictionaryPreset::UnidicCsj
    );
  }

  #[test]
  fn preset_from_str_rejects_unknown() {
    let err = "en".parse::<DictionaryPreset>().unwrap_err();
    match err {
      ConfigError::UnknownLanguage { language } => assert_eq!(language, "en"),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn preset_display_round_trips_through_from_str() {
    for preset in [
      DictionaryPreset::Ipadic,
      DictionaryPreset::UnidicCwj,
      DictionaryPreset::UnidicCsj,
    ] {
      assert_eq!(preset.to_string().parse::<DictionaryPreset>().unwrap(), preset);
    }
  }

  #[test]
  fn preset_lemma_field_depends_on_layout() {
    assert_eq!(DictionaryPreset::Ipadic.lemma_field(), 6);
    assert_eq!(DictionaryPreset::UnidicCwj.lemma_field(), 7);
    assert_eq!(DictionaryPreset::UnidicCsj.lemma_field(), 7);
  }

  #[test]
  fn preset_converts_to_vibrato_kind() {
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::Ipadic),
      PresetDictionaryKind::Ipadic
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCwj),
      PresetDictionaryKind::UnidicCwj
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCsj),
      PresetDictionaryKind::UnidicCsj
    );
  }

  // ─── PipelineConfig deserialization ──────────────────────────────────

  #[test]
  fn pipeline_config_deserializes_with_defaults() {
    let config: PipelineConfig = serde_json::from_str(r#"{ "preset": "ja" }"#).unwrap();

    assert_eq!(config.preset, DictionaryPreset::Ipadic);
    assert!(config.dictionary_path.is_none());
    assert!(config.cache_dir.is_none());
    assert!(!config.ner);
  }

  #[test]
  fn pipeline_config_deserializes_full() {
    let config: PipelineConfig = serde_json::from_str(
      r#"{ "preset": "unidic-cwj", "cache_dir": "/tmp/dict", "ner": true }"#,
    )
    .unwrap();

    assert_eq!(config.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.dictionary_cache_dir(), Some(Path::new("/tmp/dict")));
    assert!(config.ner);
  }

  // ─── validate() ──────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_default_config() {
    let config = PipelineConfig::new(DictionaryPreset::Ipadic);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_creates_missing_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let cache_dir = temp_dir.path().join("nested").join("dict");
    let config = PipelineConfig::new(DictionaryPreset::Ipadic).with_cache_dir(&cache_dir);

    assert!(config.validate().is_ok());
    assert!(cache_dir.is_dir());
  }

  #[test]
  fn validate_rejects_cache_dir_that_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let config = PipelineConfig::new(DictionaryPreset::Ipadic).with_cache_dir(&file_path);
    let err = config.validate().unwrap_err();
    match err {
      ConfigError::InvalidDictionaryCacheDir { path } => assert_eq!(path, file_path),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn validate_rejects_missing_dictionary_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("system.dic");

    let config = PipelineConfig::new(DictionaryPreset::Ipadic).with_dictionary_path(&missing);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::DictionaryFileNotFound { .. }));
  }

  #[test]
  fn validate_accepts_existing_dictionary_file() {
    let temp_dir = TempDir::new().unwrap();
    let dict = temp_dir.path().join("system.dic");
    fs::write(&dict, b"placeholder").unwrap();

    let config = PipelineConfig::new(DictionaryPreset::Ipadic)
      .with_dictionary_path(&dict)
      .with_ner(true);
    assert!(config.validate().is_ok());
  }
}
