//! Scope-local negation detection.

use crate::profile::ExtractionProfile;
use crate::tree::{DependencyTree, Token};

/// Whether a negation marker sits among the token's immediate left or right
/// children. Single-level on purpose: a negation in a grandchild clause does
/// not negate this token.
pub(crate) fn is_negated(
    tree: &DependencyTree,
    token: &Token,
    profile: &ExtractionProfile,
) -> bool {
    tree.lefts(token)
        .into_iter()
        .chain(tree.rights(token))
        .any(|dep| profile.is_negation_word(&dep.word))
}
