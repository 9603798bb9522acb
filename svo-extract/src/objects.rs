//! Object resolution for a verb: direct right-side objects, objects reached
//! through prepositions, open-clausal-complement (xcomp) redirection, and
//! coordinated-object expansion.

use annotation_utils::PartOfSpeech;

use crate::conjunction;
use crate::profile::ExtractionProfile;
use crate::tree::{DependencyTree, Token};

/// An xcomp child can take over as the surfaced verb ("I want to eat cake"
/// binds the object to "eat", not "want"), so resolution returns the verb id
/// alongside the objects.
pub(crate) struct ObjectResolution {
    pub verb: u32,
    /// Object token ids, in discovery order.
    pub objects: Vec<u32>,
}

pub(crate) fn resolve_objects(
    tree: &DependencyTree,
    profile: &ExtractionProfile,
    verb: &Token,
) -> ObjectResolution {
    let rights = tree.rights(verb);
    let mut verb_id = verb.id;

    let mut objects: Vec<u32> = rights
        .iter()
        .filter(|tok| profile.is_object_relation(&tok.relation))
        .map(|tok| tok.id)
        .collect();
    objects.extend(prepositional_objects(tree, profile, &rights));

    if let Some((xcomp_verb, xcomp_objects)) = objects_from_xcomp(tree, profile, &rights) {
        log::debug!(
            "xcomp redirection: {:?} -> {:?}",
            verb.word,
            tree.node(xcomp_verb).word
        );
        objects.extend(xcomp_objects);
        verb_id = xcomp_verb;
    }

    if !objects.is_empty() {
        conjunction::expand(tree, &mut objects, |tok| {
            profile.is_object_relation(&tok.relation) || tok.pos == PartOfSpeech::Noun
        });
    }

    ObjectResolution {
        verb: verb_id,
        objects,
    }
}

/// Objects sitting under a preposition: for each right child tagged ADP with
/// relation "prep", its object-labeled right children, plus object pronouns
/// regardless of label.
fn prepositional_objects(
    tree: &DependencyTree,
    profile: &ExtractionProfile,
    deps: &[&Token],
) -> Vec<u32> {
    let mut objects = Vec::new();
    for dep in deps {
        if dep.pos == PartOfSpeech::Adp && dep.relation == "prep" {
            objects.extend(
                tree.rights(dep)
                    .into_iter()
                    .filter(|tok| {
                        profile.is_object_relation(&tok.relation)
                            || (tok.pos == PartOfSpeech::Pron
                                && profile.is_object_pronoun(&tok.word))
                    })
                    .map(|tok| tok.id),
            );
        }
    }
    objects
}

/// The first VERB right child with relation "xcomp" whose own direct and
/// prepositional objects are non-empty redirects the relation to itself.
fn objects_from_xcomp(
    tree: &DependencyTree,
    profile: &ExtractionProfile,
    deps: &[&Token],
) -> Option<(u32, Vec<u32>)> {
    for dep in deps {
        if dep.pos == PartOfSpeech::Verb && dep.relation == "xcomp" {
            let rights = tree.rights(dep);
            let mut objects: Vec<u32> = rights
                .iter()
                .filter(|tok| profile.is_object_relation(&tok.relation))
                .map(|tok| tok.id)
                .collect();
            objects.extend(prepositional_objects(tree, profile, &rights));
            if !objects.is_empty() {
                return Some((dep.id, objects));
            }
        }
    }
    None
}
