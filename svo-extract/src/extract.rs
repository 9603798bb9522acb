//! Triple extraction: per-verb orchestration of the subject and object
//! resolvers, and the public entry points.

use annotation_utils::{Language, TokenRecord};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::negation::is_negated;
use crate::objects::resolve_objects;
use crate::profile::ExtractionProfile;
use crate::subjects::resolve_subjects;
use crate::tree::{DependencyTree, Token, TreeError};

/// One extracted relation: ordered lists of lower-cased subject and object
/// surface forms around a lower-cased verb. A negated relation carries a
/// leading `!` on the verb.
#[derive(Clone, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Triple {
    pub subjects: Vec<String>,
    pub verb: String,
    pub objects: Vec<String>,
}

/// Per-verb subject view (diagnostic; original-case surface forms).
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct VerbSubjects {
    pub verb: String,
    pub subjects: Vec<String>,
}

/// Per-verb object view (diagnostic; original-case surface forms). The verb
/// is the surfaced one, so xcomp redirection shows up here too.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct VerbObjects {
    pub verb: String,
    pub objects: Vec<String>,
}

/// The extraction context: an explicit profile value instead of any
/// process-wide state. Construct once per language, share by reference.
#[derive(Clone, Debug)]
pub struct Extractor {
    profile: ExtractionProfile,
}

impl Extractor {
    pub fn new(profile: ExtractionProfile) -> Self {
        Self { profile }
    }

    pub fn for_language(language: Language) -> Self {
        Self::new(ExtractionProfile::for_language(language))
    }

    pub fn profile(&self) -> &ExtractionProfile {
        &self.profile
    }

    /// Builds the dependency tree and extracts one triple per
    /// (subject, object) pair. Fails only on tree construction; a sentence
    /// that yields no triples is an empty `Ok`.
    pub fn extract(&self, records: Vec<TokenRecord>) -> Result<Vec<Triple>, TreeError> {
        let tree = DependencyTree::build(records)?;
        Ok(extract_triples(&tree, &self.profile))
    }

    /// Like [`Extractor::extract`], but with one triple per verb carrying
    /// the full subject and object lists.
    pub fn extract_grouped(&self, records: Vec<TokenRecord>) -> Result<Vec<Triple>, TreeError> {
        let tree = DependencyTree::build(records)?;
        Ok(grouped_triples(&tree, &self.profile))
    }
}

/// Candidate triple anchors: VERB-tagged tokens, excluding auxiliaries, in
/// sentence order.
fn candidate_verbs<'a>(
    tree: &'a DependencyTree,
    profile: &'a ExtractionProfile,
) -> impl Iterator<Item = &'a Token> {
    tree.verbs().filter(|tok| tok.pos != profile.auxiliary_pos)
}

fn render_verb(word: &str, negated: bool) -> String {
    let word = word.to_lowercase();
    if negated { format!("!{word}") } else { word }
}

/// Emits one triple per (subject, object) pair, in verb discovery order,
/// then subject order, then object order. Verbs with no resolved subjects
/// are skipped entirely. The negation marker reflects the verb-level flag
/// or the specific object's own local negation.
pub fn extract_triples(tree: &DependencyTree, profile: &ExtractionProfile) -> Vec<Triple> {
    let mut triples = Vec::new();
    for verb in candidate_verbs(tree, profile) {
        let subjects = resolve_subjects(tree, profile, verb);
        if subjects.subjects.is_empty() {
            log::trace!("verb {:?}: no subjects, skipping", verb.word);
            continue;
        }
        let objects = resolve_objects(tree, profile, verb);
        let surfaced = tree.get(objects.verb).map(|t| t.word.as_str()).unwrap_or(&verb.word);
        for &subject_id in &subjects.subjects {
            let subject = tree.get(subject_id);
            for &object_id in &objects.objects {
                let (Some(subject), Some(object)) = (subject, tree.get(object_id)) else {
                    continue;
                };
                let negated = subjects.negated || is_negated(tree, object, profile);
                triples.push(Triple {
                    subjects: vec![subject.word.to_lowercase()],
                    verb: render_verb(surfaced, negated),
                    objects: vec![object.word.to_lowercase()],
                });
            }
        }
    }
    triples
}

/// Emits one triple per verb, with the deduplicated subject and object lists
/// in discovery order. The relation is negated when the verb-level flag or
/// any object's local negation holds.
pub fn grouped_triples(tree: &DependencyTree, profile: &ExtractionProfile) -> Vec<Triple> {
    let mut triples = Vec::new();
    for verb in candidate_verbs(tree, profile) {
        let subjects = resolve_subjects(tree, profile, verb);
        if subjects.subjects.is_empty() {
            continue;
        }
        let objects = resolve_objects(tree, profile, verb);
        if objects.objects.is_empty() {
            continue;
        }
        let surfaced = tree.node(objects.verb);
        let negated = subjects.negated
            || objects
                .objects
                .iter()
                .any(|&id| is_negated(tree, tree.node(id), profile));
        let subject_words: IndexSet<String> = subjects
            .subjects
            .iter()
            .map(|&id| tree.node(id).word.to_lowercase())
            .collect();
        let object_words: IndexSet<String> = objects
            .objects
            .iter()
            .map(|&id| tree.node(id).word.to_lowercase())
            .collect();
        triples.push(Triple {
            subjects: subject_words.into_iter().collect(),
            verb: render_verb(&surfaced.word, negated),
            objects: object_words.into_iter().collect(),
        });
    }
    triples
}

/// The resolved subjects of every candidate verb that has any.
pub fn subjects_by_verb(tree: &DependencyTree, profile: &ExtractionProfile) -> Vec<VerbSubjects> {
    candidate_verbs(tree, profile)
        .filter_map(|verb| {
            let resolution = resolve_subjects(tree, profile, verb);
            if resolution.subjects.is_empty() {
                return None;
            }
            Some(VerbSubjects {
                verb: verb.word.clone(),
                subjects: resolution
                    .subjects
                    .iter()
                    .map(|&id| tree.node(id).word.clone())
                    .collect(),
            })
        })
        .collect()
}

/// The resolved objects of every candidate verb that has any, keyed by the
/// surfaced (possibly xcomp-reassigned) verb.
pub fn objects_by_verb(tree: &DependencyTree, profile: &ExtractionProfile) -> Vec<VerbObjects> {
    candidate_verbs(tree, profile)
        .filter_map(|verb| {
            let resolution = resolve_objects(tree, profile, verb);
            if resolution.objects.is_empty() {
                return None;
            }
            Some(VerbObjects {
                verb: tree.node(resolution.verb).word.clone(),
                objects: resolution
                    .objects
                    .iter()
                    .map(|&id| tree.node(id).word.clone())
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation_utils::PartOfSpeech::*;

    fn english() -> Extractor {
        Extractor::for_language(Language::English)
    }

    fn he_did_not_kill_me() -> Vec<TokenRecord> {
        vec![
            TokenRecord::new(1, "he", "he", Pron, 4, "nsubj"),
            TokenRecord::new(2, "did", "do", Aux, 4, "aux"),
            TokenRecord::new(3, "not", "not", Part, 4, "advmod"),
            TokenRecord::new(4, "kill", "kill", Verb, 0, "root"),
            TokenRecord::new(5, "me", "me", Pron, 4, "obj"),
        ]
    }

    #[test]
    fn test_negated_verb_is_marked() {
        let triples = english().extract(he_did_not_kill_me()).unwrap();
        assert_eq!(
            triples,
            vec![Triple {
                subjects: vec!["he".to_string()],
                verb: "!kill".to_string(),
                objects: vec!["me".to_string()],
            }]
        );
    }

    #[test]
    fn test_object_local_negation_marks_verb() {
        // "He offers no support": the verb itself is not negated, the
        // object is
        let triples = english()
            .extract(vec![
                TokenRecord::new(1, "He", "he", Pron, 2, "nsubj"),
                TokenRecord::new(2, "offers", "offer", Verb, 0, "root"),
                TokenRecord::new(3, "no", "no", Det, 4, "det"),
                TokenRecord::new(4, "support", "support", Noun, 2, "obj"),
            ])
            .unwrap();
        assert_eq!(triples[0].verb, "!offers");
        assert_eq!(triples[0].objects, vec!["support"]);
    }

    #[test]
    fn test_verbs_without_subjects_are_skipped() {
        let triples = english()
            .extract(vec![
                TokenRecord::new(1, "rains", "rain", Verb, 0, "root"),
                TokenRecord::new(2, "water", "water", Noun, 1, "obj"),
            ])
            .unwrap();
        assert!(triples.is_empty());
    }

    #[test]
    fn test_auxiliaries_are_not_anchors() {
        // "I have carried your gods and ideas.": "have" is AUX and must not
        // anchor a triple
        let records = vec![
            TokenRecord::new(1, "I", "I", Pron, 3, "nsubj"),
            TokenRecord::new(2, "have", "have", Aux, 3, "aux"),
            TokenRecord::new(3, "carried", "carry", Verb, 0, "root"),
            TokenRecord::new(4, "your", "your", Det, 5, "det"),
            TokenRecord::new(5, "gods", "god", Noun, 3, "obj"),
            TokenRecord::new(6, "and", "and", Cconj, 7, "cc"),
            TokenRecord::new(7, "ideas", "idea", Noun, 5, "conj"),
            TokenRecord::new(8, ".", ".", Punct, 3, "punct"),
        ];
        let triples = english().extract(records).unwrap();
        assert_eq!(triples.len(), 2);
        assert!(triples.iter().all(|t| t.verb == "carried"));
        assert_eq!(triples[0].objects, vec!["gods"]);
        assert_eq!(triples[1].objects, vec!["ideas"]);
    }

    #[test]
    fn test_grouped_triples_merge_per_verb() {
        let records = vec![
            TokenRecord::new(1, "Janna", "Janna", Propn, 2, "nsubj"),
            TokenRecord::new(2, "heeft", "hebben", Verb, 0, "root"),
            TokenRecord::new(3, "een", "een", Det, 5, "det"),
            TokenRecord::new(4, "rode", "rood", Adj, 5, "amod"),
            TokenRecord::new(5, "wagen", "wagen", Noun, 2, "obj"),
            TokenRecord::new(6, "en", "en", Cconj, 8, "cc"),
            TokenRecord::new(7, "een", "een", Det, 8, "det"),
            TokenRecord::new(8, "fiets", "fiets", Noun, 5, "conj"),
            TokenRecord::new(9, ".", ".", Punct, 2, "punct"),
        ];
        let extractor = Extractor::for_language(Language::Dutch);
        let triples = extractor.extract_grouped(records).unwrap();
        assert_eq!(
            triples,
            vec![Triple {
                subjects: vec!["janna".to_string()],
                verb: "heeft".to_string(),
                objects: vec!["wagen".to_string(), "fiets".to_string()],
            }]
        );
    }

    #[test]
    fn test_extraction_is_pure() {
        let first = english().extract(he_did_not_kill_me()).unwrap();
        let second = english().extract(he_did_not_kill_me()).unwrap();
        assert_eq!(first, second);
    }
}
