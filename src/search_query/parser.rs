#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::lexer::{Prefix, Token};
use super::normalize::{normalize_text, reorder_buckets};

/// One searchable word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(deny_unknown_fields)
)]
pub struct TermDescriptor {
    /// Lowercased content, whitespace runs collapsed to one space
    pub term: String,
    /// Match only when the term is absent
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub exclude: bool,
    /// Compare against the whole text instead of searching inside it
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub exact: bool,
}

impl TermDescriptor {
    /// Lowercases `term` and collapses its whitespace, like the tokenizer.
    pub fn plain(term: &str) -> Self {
        Self {
            term: normalize_text(term),
            ..Default::default()
        }
    }

    pub fn excluded(term: &str) -> Self {
        Self {
            exclude: true,
            ..Self::plain(term)
        }
    }

    pub fn exact(term: &str) -> Self {
        Self {
            exact: true,
            ..Self::plain(term)
        }
    }
}

#[cfg(feature = "serde")]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Alternatives separated by `OR` / `|`. Matches when any child group matches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "OrRepr", into = "OrRepr")
)]
pub struct OrNode {
    pub children: Vec<Vec<TermDescriptor>>,
}

/// Wire shape `{"or": true, "children": [...]}`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OrRepr {
    or: bool,
    children: Vec<Vec<TermDescriptor>>,
}

#[cfg(feature = "serde")]
impl From<OrNode> for OrRepr {
    fn from(node: OrNode) -> Self {
        Self {
            or: true,
            children: node.children,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<OrRepr> for OrNode {
    type Error = String;

    fn try_from(repr: OrRepr) -> Result<Self, Self::Error> {
        if !repr.or {
            return Err("expected `\"or\": true` on an alternative node".to_string());
        }
        Ok(Self {
            children: repr.children,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum ClauseNode {
    Term(TermDescriptor),
    Or(OrNode),
}

fn token_to_term(prefix: Option<Prefix>, content: String) -> TermDescriptor {
    TermDescriptor {
        term: content.to_lowercase(),
        exclude: prefix == Some(Prefix::Exclude),
        exact: prefix == Some(Prefix::Exact),
    }
}

/// Build the clause-node sequence from lexed tokens.
///
/// Without delimiters the result is one bucket-reordered AND clause. With
/// delimiters the whole query becomes a single OR node holding one group per
/// delimiter-separated run, left to right. Empty groups are kept.
pub fn parse(tokens: Vec<Token>) -> Vec<ClauseNode> {
    let mut groups: Vec<Vec<TermDescriptor>> = Vec::new();
    let mut current = Vec::new();

    for tok in tokens {
        match tok {
            Token::Delimiter => groups.push(std::mem::take(&mut current)),
            Token::Word(prefix, content) | Token::Phrase(prefix, content) => {
                current.push(token_to_term(prefix, content))
            }
        }
    }

    if groups.is_empty() {
        return reorder_buckets(current)
            .into_iter()
            .map(ClauseNode::Term)
            .collect();
    }

    groups.push(current);
    vec![ClauseNode::Or(OrNode {
        children: groups.into_iter().map(reorder_buckets).collect(),
    })]
}
