//! Shared types for externally produced linguistic annotation.
//!
//! Tokenization, tagging, lemmatization and dependency labeling are performed
//! by an external annotation service per language. This crate only models the
//! output of that service: the universal coarse part-of-speech tagset, the
//! flat per-token annotation record, and a reader for the tab-separated rows
//! the annotator emits ([`rows`]).

pub mod rows;

use serde::{Deserialize, Serialize};

/// The languages the annotation collaborator ships models for.
#[derive(
    Clone,
    Copy,
    Debug,
    Serialize,
    Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Language {
    English,
    Dutch,
    German,
    French,
}

impl Language {
    pub fn iso_639_1(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Dutch => "nl",
            Language::German => "de",
            Language::French => "fr",
        }
    }
}

/// Universal coarse part-of-speech tags, as emitted by the annotator.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum PartOfSpeech {
    #[serde(rename = "ADJ")]
    Adj, // adjective
    #[serde(rename = "ADP")]
    Adp, // adposition
    #[serde(rename = "ADV")]
    Adv, // adverb
    #[serde(rename = "AUX")]
    Aux, // auxiliary
    #[serde(rename = "CCONJ")]
    Cconj, // coordinating conjunction
    #[serde(rename = "DET")]
    Det, // determiner
    #[serde(rename = "INTJ")]
    Intj, // interjection
    #[serde(rename = "NOUN")]
    Noun, // noun
    #[serde(rename = "NUM")]
    Num, // numeral
    #[serde(rename = "PART")]
    Part, // particle
    #[serde(rename = "PRON")]
    Pron, // pronoun
    #[serde(rename = "PROPN")]
    Propn, // proper noun
    #[serde(rename = "PUNCT")]
    Punct, // punctuation
    #[serde(rename = "SCONJ")]
    Sconj, // subordinating conjunction
    #[serde(rename = "SYM")]
    Sym, // symbol
    #[serde(rename = "VERB")]
    Verb, // verb
    #[serde(rename = "SPACE")]
    Space, // space
    #[serde(rename = "X")]
    X, // other
}

/// A part-of-speech tag outside the universal tagset.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized part-of-speech tag: {0:?}")]
pub struct UnknownPartOfSpeech(pub String);

impl PartOfSpeech {
    /// The canonical tag string ("VERB", "NOUN", ...).
    pub fn as_upos(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::X => "X",
        }
    }

    /// Parses a tag, mapping anything outside the universal tagset to
    /// [`PartOfSpeech::X`]. Annotation schemes drift; a tag we do not know
    /// should degrade to "matches nothing" rather than fail the sentence.
    pub fn parse_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or(PartOfSpeech::X)
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = match s {
            "ADJ" => PartOfSpeech::Adj,
            "ADP" => PartOfSpeech::Adp,
            "ADV" => PartOfSpeech::Adv,
            "AUX" => PartOfSpeech::Aux,
            "CCONJ" => PartOfSpeech::Cconj,
            "DET" => PartOfSpeech::Det,
            "INTJ" => PartOfSpeech::Intj,
            "NOUN" => PartOfSpeech::Noun,
            "NUM" => PartOfSpeech::Num,
            "PART" => PartOfSpeech::Part,
            "PRON" => PartOfSpeech::Pron,
            "PROPN" => PartOfSpeech::Propn,
            "PUNCT" => PartOfSpeech::Punct,
            "SCONJ" => PartOfSpeech::Sconj,
            "SYM" => PartOfSpeech::Sym,
            "VERB" => PartOfSpeech::Verb,
            "SPACE" => PartOfSpeech::Space,
            "X" => PartOfSpeech::X,
            other => return Err(UnknownPartOfSpeech(other.to_string())),
        };
        Ok(pos)
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_upos())
    }
}

/// One flat annotated token row, as handed over by the annotation service.
///
/// `id` is the 1-based position of the token in the sentence. `parent` is the
/// id of the syntactic head, with 0 denoting the sentence root. `xpos` and
/// `feats` carry finer-grained morphological tags and are opaque here.
/// `relation` is kept as a free string so labels outside the vocabulary we
/// know simply never match a label set.
#[derive(Clone, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TokenRecord {
    pub id: u32,
    pub word: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub xpos: String,
    pub feats: String,
    pub parent: u32,
    pub relation: String,
}

impl TokenRecord {
    /// A record with empty opaque tag fields. Mostly useful in tests and for
    /// callers that feed pre-tokenized structures instead of annotator rows.
    pub fn new(
        id: u32,
        word: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        parent: u32,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            id,
            word: word.into(),
            lemma: lemma.into(),
            pos,
            xpos: String::new(),
            feats: String::new(),
            parent,
            relation: relation.into(),
        }
    }
}
