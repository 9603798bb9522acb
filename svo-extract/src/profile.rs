//! Per-language extraction tables.
//!
//! One configurable profile replaces a subclass per language: everything the
//! resolvers treat as language-dependent lives here, so adding a language is
//! a table, not a type.

use annotation_utils::{Language, PartOfSpeech};
use serde::{Deserialize, Serialize};

/// The label tables and vocabularies driving subject/object/negation
/// resolution for one language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractionProfile {
    /// Dependency labels marking a verb's subject.
    pub subject_relations: Vec<String>,
    /// Dependency labels marking a verb's object.
    pub object_relations: Vec<String>,
    /// Surface words that negate their head (matched case-insensitively).
    pub negation_words: Vec<String>,
    /// The label the ancestor-climb fallback looks for on a clause head's
    /// left children. Deliberately not part of `subject_relations`; see
    /// DESIGN.md.
    pub clause_subject_relation: String,
    /// Pronouns accepted as prepositional objects even when their label
    /// is not in `object_relations`.
    pub object_pronouns: Vec<String>,
    /// Coarse tag of auxiliary verbs, which never anchor a triple.
    pub auxiliary_pos: PartOfSpeech,
}

impl ExtractionProfile {
    pub fn for_language(language: Language) -> Self {
        match language {
            // The annotation models for all four languages emit the same
            // label vocabulary, so the tables only diverge if an annotation
            // scheme does.
            Language::English | Language::Dutch | Language::German | Language::French => {
                Self::universal()
            }
        }
    }

    fn universal() -> Self {
        let owned = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect();
        Self {
            subject_relations: owned(&[
                "nsubj",
                "nsubjpass",
                "csubj",
                "csubjpass",
                "agent",
                "expl",
                "conj",
            ]),
            object_relations: owned(&[
                "obj", "dative", "attr", "oprd", "prep", "ccomp", "conj", "advmod",
            ]),
            negation_words: owned(&["no", "not", "n't", "never", "none"]),
            clause_subject_relation: "SUB".to_string(),
            object_pronouns: owned(&["me"]),
            auxiliary_pos: PartOfSpeech::Aux,
        }
    }

    pub fn is_subject_relation(&self, relation: &str) -> bool {
        self.subject_relations.iter().any(|r| r == relation)
    }

    pub fn is_object_relation(&self, relation: &str) -> bool {
        self.object_relations.iter().any(|r| r == relation)
    }

    pub fn is_negation_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.negation_words.iter().any(|w| *w == word)
    }

    pub fn is_object_pronoun(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.object_pronouns.iter().any(|w| *w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_membership() {
        let profile = ExtractionProfile::for_language(Language::English);
        assert!(profile.is_subject_relation("nsubj"));
        assert!(profile.is_subject_relation("conj"));
        assert!(!profile.is_subject_relation("det"));
        assert!(profile.is_object_relation("prep"));
        assert!(!profile.is_object_relation("nsubj"));
    }

    #[test]
    fn test_negation_words_are_case_insensitive() {
        let profile = ExtractionProfile::for_language(Language::English);
        assert!(profile.is_negation_word("Not"));
        assert!(profile.is_negation_word("n't"));
        assert!(!profile.is_negation_word("nothing"));
    }

    #[test]
    fn test_unknown_labels_never_match() {
        // Annotation-scheme drift degrades to "no match", never an error.
        let profile = ExtractionProfile::for_language(Language::Dutch);
        assert!(!profile.is_subject_relation("nsubj:outer"));
        assert!(!profile.is_object_relation("obl"));
    }

    #[test]
    fn test_all_languages_have_profiles() {
        for language in [
            Language::English,
            Language::Dutch,
            Language::German,
            Language::French,
        ] {
            let profile = ExtractionProfile::for_language(language);
            assert!(!profile.subject_relations.is_empty());
            assert_eq!(profile.clause_subject_relation, "SUB");
        }
    }
}
