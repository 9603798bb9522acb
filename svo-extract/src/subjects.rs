//! Subject resolution for a verb: direct left-side subjects, an
//! ancestor-climb fallback for verbs inside subordinate clauses, and
//! coordinated-subject expansion.

use annotation_utils::PartOfSpeech;

use crate::conjunction;
use crate::negation::is_negated;
use crate::profile::ExtractionProfile;
use crate::tree::{DependencyTree, Token};

pub(crate) struct SubjectResolution {
    /// Subject token ids, in discovery order.
    pub subjects: Vec<u32>,
    /// Negation state of the verb (or, for the fallback path, of the clause
    /// the subjects were borrowed from).
    pub negated: bool,
}

pub(crate) fn resolve_subjects(
    tree: &DependencyTree,
    profile: &ExtractionProfile,
    verb: &Token,
) -> SubjectResolution {
    let mut subjects: Vec<u32> = tree
        .lefts(verb)
        .into_iter()
        .filter(|tok| {
            profile.is_subject_relation(&tok.relation) && tok.pos != PartOfSpeech::Det
        })
        .map(|tok| tok.id)
        .collect();

    if subjects.is_empty() {
        let (found, negated) = climb_for_subjects(tree, profile, verb, verb, tree.len());
        log::trace!(
            "verb {:?}: no direct subjects, fallback found {}",
            verb.word,
            found.len()
        );
        return SubjectResolution {
            subjects: found,
            negated,
        };
    }

    conjunction::expand(tree, &mut subjects, |tok| joins_subject(profile, tok));
    SubjectResolution {
        subjects,
        negated: is_negated(tree, verb, profile),
    }
}

fn joins_subject(profile: &ExtractionProfile, token: &Token) -> bool {
    profile.is_subject_relation(&token.relation)
        || token.pos == PartOfSpeech::Noun
        || token.pos == PartOfSpeech::Propn
}

/// Climbs the ancestor chain from `from` to the nearest VERB or NOUN head.
///
/// A VERB head contributes its own clause subjects (left children carrying
/// the clause-subject label), along with its negation state; when it has
/// none and is not the root, the climb restarts from it. A NOUN head is
/// itself the sole subject, with negation taken from the original verb.
/// `budget` caps the restarts at the token count so malformed chains
/// terminate.
fn climb_for_subjects(
    tree: &DependencyTree,
    profile: &ExtractionProfile,
    verb: &Token,
    from: &Token,
    budget: usize,
) -> (Vec<u32>, bool) {
    if budget == 0 {
        return (Vec::new(), false);
    }

    // the root has no parent, which ends the climb
    let mut head = match from.parent {
        Some(parent) => tree.node(parent),
        None => from,
    };
    while head.pos != PartOfSpeech::Verb && head.pos != PartOfSpeech::Noun {
        match head.parent {
            Some(parent) => head = tree.node(parent),
            None => break,
        }
    }

    if head.pos == PartOfSpeech::Verb {
        let mut subjects: Vec<u32> = tree
            .lefts(head)
            .into_iter()
            .filter(|tok| tok.relation == profile.clause_subject_relation)
            .map(|tok| tok.id)
            .collect();
        if !subjects.is_empty() {
            let negated = is_negated(tree, head, profile);
            conjunction::expand(tree, &mut subjects, |tok| joins_subject(profile, tok));
            (subjects, negated)
        } else if head.parent.is_some() {
            climb_for_subjects(tree, profile, verb, head, budget - 1)
        } else {
            (Vec::new(), false)
        }
    } else if head.pos == PartOfSpeech::Noun {
        (vec![head.id], is_negated(tree, verb, profile))
    } else {
        (Vec::new(), false)
    }
}
