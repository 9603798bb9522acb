//! Coordinated-phrase expansion shared by the subject and object resolvers.

use rustc_hash::FxHashSet;

use crate::tree::{DependencyTree, Token};

/// Grows `seeds` to its coordination fixpoint: every right child of a seed
/// that `qualifies` becomes a seed itself ("Peter and Fred", comma-joined
/// lists, nested coordinations).
///
/// The worklist runs over `seeds` in place, so discovery order is preserved.
/// The visited set keeps any token from being expanded twice, which bounds
/// the walk by the token count even if the annotation input is malformed
/// enough to loop.
pub(crate) fn expand(
    tree: &DependencyTree,
    seeds: &mut Vec<u32>,
    qualifies: impl Fn(&Token) -> bool,
) {
    let mut seen: FxHashSet<u32> = seeds.iter().copied().collect();
    let mut cursor = 0;
    while cursor < seeds.len() {
        let token = tree.node(seeds[cursor]);
        cursor += 1;
        for child in tree.rights(token) {
            if qualifies(child) && seen.insert(child.id) {
                log::trace!(
                    "conjunction expansion: {:?} -> {:?}",
                    token.word,
                    child.word
                );
                seeds.push(child.id);
            }
        }
    }
}
