//! models module

mod model_definition;

pub use model_definition::{AnalyzedUnit, Iob, PRONOUN_LEMMA, Token};
