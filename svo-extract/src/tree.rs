//! Dependency tree built from a flat annotated token sequence.
//!
//! Tokens live in an arena addressed by their 1-based sentence id; parent and
//! children links are ids, never ownership, so the tree has no reference
//! cycles and "visited" tracking during resolution is a plain id set.

use annotation_utils::{PartOfSpeech, TokenRecord};
use rustc_hash::FxHashMap;

/// A node in the dependency tree. Field-for-field the annotated record, plus
/// the resolved tree links.
#[derive(Clone, Debug)]
pub struct Token {
    pub id: u32,
    pub word: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub xpos: String,
    pub feats: String,
    pub relation: String,
    /// Head id; `None` for the sentence root.
    pub parent: Option<u32>,
    /// Child ids in input order.
    pub children: Vec<u32>,
}

/// Malformed input the tree cannot be built from. Fatal for the sentence;
/// the caller should skip or report it, never silently drop it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("no tokens in sentence")]
    Empty,

    #[error("duplicate token id {id}")]
    DuplicateId { id: u32 },

    #[error("token {child} references missing parent {parent}")]
    MissingParent { child: u32, parent: u32 },

    #[error("no root token found")]
    MissingRoot,

    #[error("multiple root tokens: {first} and {second}")]
    MultipleRoots { first: u32, second: u32 },

    #[error("parent chain from token {id} never reaches the root")]
    ParentCycle { id: u32 },
}

/// The dependency structure of one sentence. Built once, immutable after.
#[derive(Clone, Debug)]
pub struct DependencyTree {
    tokens: Vec<Token>,
    index: FxHashMap<u32, usize>,
    root: u32,
}

impl DependencyTree {
    /// Links every token to its head. A token whose parent field is 0 or its
    /// own id is the root; exactly one such token must exist, every parent
    /// reference must resolve, and every parent chain must reach the root
    /// within N steps (N = token count).
    pub fn build(records: Vec<TokenRecord>) -> Result<Self, TreeError> {
        if records.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut index = FxHashMap::default();
        index.reserve(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id, position).is_some() {
                return Err(TreeError::DuplicateId { id: record.id });
            }
        }

        let mut tokens: Vec<Token> = records
            .into_iter()
            .map(|record| {
                let parent = if record.parent == 0 || record.parent == record.id {
                    None
                } else {
                    Some(record.parent)
                };
                Token {
                    id: record.id,
                    word: record.word,
                    lemma: record.lemma,
                    pos: record.pos,
                    xpos: record.xpos,
                    feats: record.feats,
                    relation: record.relation,
                    parent,
                    children: Vec::new(),
                }
            })
            .collect();

        let mut root = None;
        let links: Vec<(u32, Option<u32>)> = tokens.iter().map(|t| (t.id, t.parent)).collect();
        for (child, parent) in links {
            match parent {
                Some(parent_id) => {
                    let Some(&parent_index) = index.get(&parent_id) else {
                        return Err(TreeError::MissingParent {
                            child,
                            parent: parent_id,
                        });
                    };
                    tokens[parent_index].children.push(child);
                }
                None => match root {
                    None => root = Some(child),
                    Some(first) => {
                        return Err(TreeError::MultipleRoots {
                            first,
                            second: child,
                        });
                    }
                },
            }
        }
        let Some(root) = root else {
            return Err(TreeError::MissingRoot);
        };

        let tree = Self {
            tokens,
            index,
            root,
        };
        for token in &tree.tokens {
            let mut current = token;
            let mut steps = 0usize;
            while let Some(parent_id) = current.parent {
                current = tree.node(parent_id);
                steps += 1;
                if steps > tree.tokens.len() {
                    return Err(TreeError::ParentCycle { id: token.id });
                }
            }
        }

        log::debug!(
            "built dependency tree: {} tokens, root {:?}",
            tree.tokens.len(),
            tree.root().word
        );
        Ok(tree)
    }

    pub fn get(&self, id: u32) -> Option<&Token> {
        self.index.get(&id).map(|&position| &self.tokens[position])
    }

    /// Lookup for ids handed out by this tree.
    pub(crate) fn node(&self, id: u32) -> &Token {
        self.get(id).expect("token id issued by this tree")
    }

    pub fn root(&self) -> &Token {
        self.node(self.root)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token whose surface form matches `word`, case-insensitively.
    pub fn token_by_word(&self, word: &str) -> Option<&Token> {
        let word = word.to_lowercase();
        self.tokens.iter().find(|t| t.word.to_lowercase() == word)
    }

    /// All VERB-tagged tokens, in sentence order.
    pub fn verbs(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.pos == PartOfSpeech::Verb)
    }

    /// Children preceding the token in the sentence, punctuation excluded.
    pub fn lefts<'a>(&'a self, token: &Token) -> Vec<&'a Token> {
        token
            .children
            .iter()
            .map(|&child| self.node(child))
            .filter(|child| child.id < token.id && child.pos != PartOfSpeech::Punct)
            .collect()
    }

    /// Children following the token in the sentence, punctuation excluded.
    pub fn rights<'a>(&'a self, token: &Token) -> Vec<&'a Token> {
        token
            .children
            .iter()
            .map(|&child| self.node(child))
            .filter(|child| child.id > token.id && child.pos != PartOfSpeech::Punct)
            .collect()
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        token: &Token,
        level: usize,
    ) -> std::fmt::Result {
        if level == 0 {
            write!(f, "{} [{}, {}]", token.word, token.relation, token.pos)?;
        } else {
            write!(
                f,
                "\n{:width$}+ {} [{}, {}]",
                "",
                token.word,
                token.relation,
                token.pos,
                width = level * 4
            )?;
        }
        for &child in &token.children {
            self.fmt_node(f, self.node(child), level + 1)?;
        }
        Ok(())
    }
}

/// Indented rendering of the whole tree, one `word [relation, POS]` per node.
impl std::fmt::Display for DependencyTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_node(f, self.root(), 0)
    }
}
