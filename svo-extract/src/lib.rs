//! Subject–verb–object triple extraction from dependency-annotated sentences.
//!
//! Given a sentence already annotated by an external service (one
//! [`TokenRecord`](annotation_utils::TokenRecord) per token: POS tag, lemma,
//! dependency label, head link), this crate builds a [`DependencyTree`] and
//! applies rule-based heuristics to find, for each finite verb, its subjects,
//! its objects, and whether the relation is negated.
//!
//! # Example
//!
//! ```
//! use annotation_utils::{Language, PartOfSpeech::*, TokenRecord};
//! use svo_extract::Extractor;
//!
//! // "Lynda owns a car."
//! let records = vec![
//!     TokenRecord::new(1, "Lynda", "Lynda", Propn, 2, "nsubj"),
//!     TokenRecord::new(2, "owns", "own", Verb, 0, "root"),
//!     TokenRecord::new(3, "a", "a", Det, 4, "det"),
//!     TokenRecord::new(4, "car", "car", Noun, 2, "obj"),
//!     TokenRecord::new(5, ".", ".", Punct, 2, "punct"),
//! ];
//!
//! let extractor = Extractor::for_language(Language::English);
//! let triples = extractor.extract(records).unwrap();
//! assert_eq!(triples.len(), 1);
//! assert_eq!(triples[0].subjects, vec!["lynda"]);
//! assert_eq!(triples[0].verb, "owns");
//! assert_eq!(triples[0].objects, vec!["car"]);
//! ```

mod conjunction;
mod negation;
mod objects;
mod subjects;

pub mod extract;
pub mod profile;
pub mod tree;

pub use extract::{
    Extractor, Triple, VerbObjects, VerbSubjects, extract_triples, grouped_triples,
    objects_by_verb, subjects_by_verb,
};
pub use profile::ExtractionProfile;
pub use tree::{DependencyTree, Token, TreeError};
