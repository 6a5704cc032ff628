//! Feature string parsing
//!
//! vibrato returns one comma separated feature string per token, e.g. for IPAdic:
//! `名詞,固有名詞,人名,姓,*,*,山田,ヤマダ,ヤマダ`.

/// Number of leading fields that make up the part-of-speech hierarchy
const POS_DEPTH: usize = 4;

/// Placeholder for empty fields in MeCab-style dictionaries
const EMPTY_FIELD: &str = "*";

/// Borrowed view over the fields of a feature string
#[derive(Debug, Clone)]
pub struct FeatureFields<'a> {
  fields: Vec<&'a str>,
}

impl<'a> FeatureFields<'a> {
  /// Splits a feature string into fields
  pub fn parse(feature: &'a str) -> Self {
    Self {
      fields: feature.split(',').collect(),
    }
  }

  /// Returns field `idx`, or `None` if it is missing, empty or `*`
  pub fn get(&self, idx: usize) -> Option<&'a str> {
    self.fields.get(idx).copied().filter(|s| !s.is_empty() && *s != EMPTY_FIELD)
  }

  /// Part-of-speech tag: the POS hierarchy joined with `-`, skipping empty levels.
  ///
  /// `名詞,固有名詞,人名,姓,...` → `名詞-固有名詞-人名-姓`,
  /// `助詞,格助詞,一般,*,...` → `助詞-格助詞-一般`
  pub fn pos_tag(&self) -> String {
    (0..POS_DEPTH).filter_map(|idx| self.get(idx)).collect::<Vec<_>>().join("-")
  }

  /// Base form at `lemma_field`, if the dictionary provides one
  pub fn lemma(&self, lemma_field: usize) -> Option<&'a str> {
    self.get(lemma_field)
  }

  /// Pronoun in either layout (IPAdic `名詞,代名詞`, UniDic `代名詞`)
  pub fn is_pronoun(&self) -> bool {
    match (self.get(0), self.get(1)) {
      (Some("代名詞"), _) => true,
      (Some("名詞"), Some("代名詞")) => true,
      _ => false,
    }
  }

  /// Proper-noun class (`人名`, `地域`, `地名`, `組織`, `一般`), if this is a proper noun
  pub fn proper_noun_class(&self) -> Option<&'a str> {
    match (self.get(0), self.get(1)) {
      (Some("名詞"), Some("固有名詞")) => self.get(2),
      _ => None,
    }
  }
}
