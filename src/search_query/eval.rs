use super::normalize::normalize_text;
use super::parser::{ClauseNode, OrNode, TermDescriptor};

/// Evaluate a clause-node sequence against one text blob.
///
/// Top-level nodes are ANDed; an empty sequence matches everything.
pub fn eval(nodes: &[ClauseNode], text: &str) -> bool {
    let haystack = normalize_text(text);
    nodes.iter().all(|node| eval_node(node, &haystack))
}

fn eval_node(node: &ClauseNode, haystack: &str) -> bool {
    match node {
        ClauseNode::Term(term) => eval_term(term, haystack),
        ClauseNode::Or(or) => eval_or(or, haystack),
    }
}

fn eval_or(node: &OrNode, haystack: &str) -> bool {
    node.children
        .iter()
        .any(|group| eval_and(group, haystack))
}

fn eval_and(terms: &[TermDescriptor], haystack: &str) -> bool {
    terms.iter().all(|term| eval_term(term, haystack))
}

// An empty term is contained in every text and equals only an empty one.
fn eval_term(descriptor: &TermDescriptor, haystack: &str) -> bool {
    let found = if descriptor.exact {
        haystack == descriptor.term
    } else {
        haystack.contains(descriptor.term.as_str())
    };
    found != descriptor.exclude
}
