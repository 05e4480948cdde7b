mod eval;
mod lexer;
mod normalize;
mod parser;

pub use parser::{ClauseNode, OrNode, TermDescriptor};

/// Compile a raw query string into its clause-node sequence.
///
/// Behavior:
/// - Empty/whitespace → empty sequence (matches everything)
/// - Unmatched quote → phrase runs to end of input
/// - Bare `-` / `=` → literal one-character term
/// - `OR` / `|` (unquoted, unprefixed) → the whole query becomes one OR node
pub fn tokenize(query: &str) -> Vec<ClauseNode> {
    let tokens = lexer::tokenize(query);
    let nodes = parser::parse(tokens);
    log::trace!("tokenized query={query:?} nodes={nodes:?}");
    nodes
}

/// Evaluate a tokenized query against `text`.
pub fn matches(nodes: &[ClauseNode], text: &str) -> bool {
    let matched = eval::eval(nodes, text);
    log::trace!("nodes={} matched={matched}", nodes.len());
    matched
}
