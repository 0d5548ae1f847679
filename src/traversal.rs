/// The order in which a traversal visits the nodes of a tree.
///
/// # Examples
///
/// ```
/// use balanced_bst::{BstMap, Traversal};
///
/// let tree = BstMap::from([(2, ()), (1, ()), (3, ())]);
///
/// let keys = |order| tree.keys(order).copied().collect::<Vec<_>>();
/// assert_eq!(keys(Traversal::PreOrder), [2, 1, 3]);
/// assert_eq!(keys(Traversal::InOrder), [1, 2, 3]);
/// assert_eq!(keys(Traversal::PostOrder), [1, 3, 2]);
/// assert_eq!(keys(Traversal::LevelOrder), [2, 1, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, node, right subtree: ascending key order.
    #[default]
    InOrder,
    /// Left subtree, right subtree, then the node.
    PostOrder,
    /// Breadth first, left to right within each level.
    LevelOrder,
}

/// The direction in which [`TreeMap::to_tree_string`](crate::TreeMap::to_tree_string) lays
/// out a tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TreeLayout {
    /// Root on the first line, children indented beneath their parent with branch guides.
    #[default]
    Vertical,
    /// Root in the leftmost column, right subtree above it and left subtree below it.
    Horizontal,
}
