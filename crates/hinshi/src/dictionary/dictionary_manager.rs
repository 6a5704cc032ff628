//! Dictionary Management Module
//!
//! Loads the vibrato-rkyv dictionary that backs every pipeline.
//! Preset dictionaries are downloaded on the first run and read from the cache directory afterwards.
//! A local compiled dictionary can be loaded directly instead.

use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Dictionary manager for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset dictionary type; `None` for local dictionaries
  preset_kind: Option<PresetDictionaryKind>,

  /// Local dictionary file; `None` for preset dictionaries
  dictionary_path: Option<PathBuf>,

  /// Loaded dictionary, initialized at the first `load()`.
  /// Errors are cached as well (DictionaryError is Clone).
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Manager for a preset dictionary cached under the OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    let cache_dir = default_cache_dir()?;
    Ok(Self::with_preset_in(preset_kind, cache_dir))
  }

  /// Manager for a preset dictionary cached under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      preset_kind: Some(preset_kind),
      dictionary_path: None,
      dictionary: OnceLock::new(),
    }
  }

  /// Manager for a local compiled dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      dictionary_path: Some(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Whether the preset dictionary is already present in the cache.
  ///
  /// Always `true` for local dictionaries.
  pub fn is_cached(&self) -> bool {
    match self.preset_kind {
      Some(kind) if self.dictionary_path.is_none() => self.cache_dir.join(kind.name()).exists(),
      _ => true,
    }
  }

  /// Load dictionary
  ///
  /// - Loads (and for presets, downloads) the dictionary on the first call
  /// - Returns a clone of the shared `Arc<Dictionary>` afterwards
  /// - A failed first load is cached and returned on every later call
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match (&self.dictionary_path, self.preset_kind) {
      (Some(path), _) => Self::load_from_local_path(path),
      (None, Some(preset_kind)) => self.load_from_preset(preset_kind),
      _ => Err(DictionaryError::InvalidPathOrInvalidPresetKind(
        self.cache_dir.clone(),
        self.preset_kind,
      )),
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    tracing::info!(path = %path.display(), "Loading local dictionary");
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    // One subdirectory per preset
    let dict_dir = self.cache_dir.join(preset_kind.name());
    tracing::info!(
      preset = preset_kind.name(),
      dir = %dict_dir.display(),
      cached = dict_dir.exists(),
      "Loading preset dictionary"
    );

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                               |
/// |---------|--------------------------------------------|
/// | Linux   | `~/.cache/hinshi/dict`                     |
/// | macOS   | `~/Library/Caches/hinshi/dict`             |
/// | Windows | `C:\Users\{user}\AppData\Local\hinshi\dict` |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("hinshi").join("dict"))
}

/// `vibrato_rkyv::Dictionary` is not `Debug`, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("dictionary_path", &self.dictionary_path)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn with_preset_in_uses_given_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, temp_dir.path());

    assert_eq!(manager.cache_dir(), temp_dir.path());
    assert!(!manager.is_cached());
  }

  #[test]
  fn is_cached_detects_preset_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join(PresetDictionaryKind::Ipadic.name())).unwrap();

    let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, temp_dir.path());
    assert!(manager.is_cached());
  }

  #[test]
  fn from_local_path_rejects_missing_file() {
    let err = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic").unwrap_err();
    assert!(matches!(err, DictionaryError::DictionaryNotFound(_)));
  }

  #[test]
  fn from_local_path_uses_parent_as_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let dict = temp_dir.path().join("system.dic");
    std::fs::write(&dict, b"not a real dictionary").unwrap();

    let manager = DictionaryManager::from_local_path(&dict).unwrap();
    assert_eq!(manager.cache_dir(), temp_dir.path());
    assert!(manager.is_cached());
  }

  #[test]
  fn debug_shows_meta_only() {
    let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, "/tmp/hinshi");
    let debug = format!("{manager:?}");
    assert!(debug.contains("dictionary_initialized: false"));
  }
}
