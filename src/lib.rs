//! A small boolean query language over free text.
//!
//! A query such as `"hello world" -spam =exact OR other` is compiled by
//! [`tokenize`] into a tree of [`ClauseNode`]s, which [`matches`] evaluates
//! against a text blob. [`Query`] bundles both for the common case of
//! matching one query against many documents.

mod errors;
mod query;
mod search_query;

pub use errors::QueryError;
pub use query::Query;
pub use search_query::{matches, tokenize, ClauseNode, OrNode, TermDescriptor};
