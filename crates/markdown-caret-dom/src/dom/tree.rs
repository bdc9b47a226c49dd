use crate::dom::host::Node;

/// Finds the closest node matching `predicate`, starting from `node` itself
/// and walking up through its ancestors.
///
/// Returns `None` when the root is reached without a match.
pub fn closest<N, P>(node: &N, predicate: P) -> Option<N>
where
    N: Node,
    P: Fn(&N) -> bool,
{
    if predicate(node) {
        return Some(node.clone());
    }
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if predicate(&ancestor) {
            return Some(ancestor);
        }
        current = ancestor.parent();
    }
    None
}
