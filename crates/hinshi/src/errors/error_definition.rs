//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Errors in the pipeline configuration (`PipelineConfig`)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// Unknown language identifier (preset dictionary name)
  #[error("unknown language identifier: {language} (valid: ja, ipadic, unidic-cwj, unidic-csj)")]
  UnknownLanguage {
    /// Identifier as given
    language: String,
  },

  /// The file given as `dictionary_path` does not exist
  #[error("dictionary file not found: path={path:?}")]
  DictionaryFileNotFound {
    /// Path as given
    path: PathBuf,
  },

  /// `cache_dir` exists but is not a directory
  #[error("cache_dir is not a directory: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// Offending path
    path: PathBuf,
  },

  /// `cache_dir` could not be created
  #[error("failed to create cache_dir: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// Path that was being created
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },
}

/// Dictionary errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// No OS cache directory is available
  #[error("dictionary cache directory not found")]
  CacheDirNotFound,

  /// The cache directory could not be created
  #[error("failed to create dictionary cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// The requested dictionary does not exist
  #[error("dictionary not found: {0}")]
  DictionaryNotFound(String),

  /// Neither a usable path nor a preset kind was given
  #[error("invalid dictionary path or preset kind: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv failed to load the dictionary
  #[error("vibrato-rkyv dictionary load error: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv failed to download the preset dictionary
  #[error("vibrato-rkyv preset dictionary download failed: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// Errors raised while running a pipeline
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum PipelineError {
  /// A component failed
  #[error("pipeline component {component} failed: {reason}")]
  Component {
    /// Component name (`tagger`, `ner`, ...)
    component: &'static str,
    /// Failure reason
    reason: String,
  },
}

/// Aggregate error
///
/// Every public API of this crate returns this error,
/// used as `HinshiResult<T>` = `Result<T, HinshiError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum HinshiError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Dictionary error
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Pipeline error
  #[error(transparent)]
  Pipeline(#[from] PipelineError),
}

/// Standard `Result` alias of the hinshi crate
pub type HinshiResult<T> = Result<T, HinshiError>;
