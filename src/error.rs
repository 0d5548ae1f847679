use thiserror::Error;

/// Errors returned by fallible [`TreeMap`](crate::TreeMap) operations.
///
/// A failed operation never modifies the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum TreeError {
    /// The requested key (or value) is not stored in the tree.
    #[error("key not found")]
    KeyNotFound,
    /// The query has no meaningful answer for an empty tree.
    #[error("tree is empty")]
    EmptyTree,
}

/// A broken structural invariant, reported by [`TreeMap::validate`](crate::TreeMap::validate).
///
/// Seeing one of these means the tree has been corrupted; it is never produced by correct
/// use of the public API.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Violation {
    /// An in-order walk produced keys that are not strictly ascending.
    #[error("keys are not in strictly ascending order")]
    Unordered,
    /// A child's parent link does not point back at its parent, or the root has a parent.
    #[error("a parent link does not match the child link above it")]
    BrokenParentLink,
    /// The recorded length differs from the number of reachable entries.
    #[error("length is {recorded} but {reachable} entries are reachable")]
    LenMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
    /// An AVL node's stored height differs from the height of its subtree.
    #[error("stored height {stored} differs from computed height {computed}")]
    StaleHeight {
        /// Height kept in the node.
        stored: i32,
        /// Height recomputed from the children.
        computed: i32,
    },
    /// An AVL node's subtrees differ in height by more than one.
    #[error("balance factor {factor} is outside -1..=1")]
    Unbalanced {
        /// Height of the left subtree minus height of the right subtree.
        factor: i32,
    },
    /// A red-black tree has a red root.
    #[error("root is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRed,
    /// Two subtrees of a red-black node contain different numbers of black nodes.
    #[error("black height differs between subtrees ({left} vs {right})")]
    BlackHeight {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
}
