use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::errors::QueryError;
use crate::search_query::{self, ClauseNode, OrNode, TermDescriptor};

/// A tokenized query, ready to be matched against any number of documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    nodes: Vec<ClauseNode>,
}

impl Query {
    pub fn parse(input: &str) -> Self {
        Self {
            nodes: search_query::tokenize(input),
        }
    }

    /// Wrap a hand-built or deserialized tree, checking the invariants that
    /// [`search_query::tokenize`] guarantees for its own output.
    pub fn from_nodes(nodes: Vec<ClauseNode>) -> Result<Self, QueryError> {
        if let Err(e) = validate(&nodes) {
            log::debug!("rejected query tree: {e}");
            return Err(e);
        }
        Ok(Self { nodes })
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        let nodes: Vec<ClauseNode> = serde_json::from_str(json).map_err(|e| {
            log::debug!("invalid query json: {e}");
            e
        })?;
        Self::from_nodes(nodes)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(&self.nodes)?)
    }

    pub fn nodes(&self) -> &[ClauseNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<ClauseNode> {
        self.nodes
    }

    /// An empty query matches every text.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        search_query::matches(&self.nodes, text)
    }

    /// Lazily keep the documents that match, in input order.
    pub fn filter<'q, I>(&'q self, docs: I) -> impl Iterator<Item = I::Item> + 'q
    where
        I: IntoIterator,
        I::IntoIter: 'q,
        I::Item: AsRef<str>,
    {
        docs.into_iter().filter(move |doc| self.matches(doc.as_ref()))
    }

    /// Like [`Query::filter`], spread across the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn par_filter<'d, T>(&self, docs: &'d [T]) -> Vec<&'d T>
    where
        T: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        docs.par_iter()
            .filter(|doc| self.matches((*doc).as_ref()))
            .collect()
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn validate(nodes: &[ClauseNode]) -> Result<(), QueryError> {
    for node in nodes {
        match node {
            ClauseNode::Term(term) => validate_term(term)?,
            ClauseNode::Or(or) => {
                if nodes.len() > 1 {
                    return Err(QueryError::OrNotAlone);
                }
                if or.children.len() < 2 {
                    return Err(QueryError::TooFewAlternatives(or.children.len()));
                }
                for term in or.children.iter().flatten() {
                    validate_term(term)?;
                }
            }
        }
    }
    Ok(())
}

fn validate_term(descriptor: &TermDescriptor) -> Result<(), QueryError> {
    if descriptor.term.trim().is_empty() {
        return Err(QueryError::EmptyTerm);
    }
    if descriptor.term != descriptor.term.to_lowercase() {
        return Err(QueryError::NotLowercase(descriptor.term.clone()));
    }
    let collapsed = descriptor.term.split_whitespace().collect::<Vec<_>>().join(" ");
    if descriptor.term != collapsed {
        return Err(QueryError::UncollapsedWhitespace(descriptor.term.clone()));
    }
    // Neither a word nor a phrase can start with `"`, and a phrase cannot
    // contain one.
    if descriptor.term.starts_with('"')
        || (descriptor.term.contains('"') && needs_quotes(descriptor))
    {
        return Err(QueryError::Unquotable(descriptor.term.clone()));
    }
    Ok(())
}

// Rendering below produces query syntax that tokenizes back to the same tree
// for every validated query, except that a descriptor flagged both exclude
// and exact keeps only the `-`.

fn needs_quotes(descriptor: &TermDescriptor) -> bool {
    let term = descriptor.term.as_str();
    let prefixed = descriptor.exclude || descriptor.exact;
    term.is_empty()
        || term.chars().any(char::is_whitespace)
        || (!prefixed && (term.starts_with('-') || term.starts_with('=') || term == "|"))
}

impl fmt::Display for TermDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exclude {
            f.write_str("-")?;
        } else if self.exact {
            f.write_str("=")?;
        }
        if needs_quotes(self) {
            write!(f, "\"{}\"", self.term)
        } else {
            f.write_str(&self.term)
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, terms: &[TermDescriptor]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{term}")?;
    }
    Ok(())
}

impl fmt::Display for OrNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            write_group(f, group)?;
        }
        Ok(())
    }
}

impl fmt::Display for ClauseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseNode::Term(term) => write!(f, "{term}"),
            ClauseNode::Or(or) => write!(f, "{or}"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
