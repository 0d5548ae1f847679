use alloc::collections::VecDeque;
use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Side;
use super::raw_tree::RawTree;
use crate::balance::Balance;
use crate::traversal::Traversal;

/// Cursor state for one traversal order.
///
/// Depth-first orders step between nodes through child and parent links, so they need no
/// stack. Level order keeps a FIFO of discovered nodes.
#[derive(Clone, Debug)]
pub(crate) enum Walk {
    PreOrder(Option<Handle>),
    InOrder(Option<Handle>),
    PostOrder(Option<Handle>),
    LevelOrder(VecDeque<Handle>),
}

impl Walk {
    /// Positions a walk on the first node of `order`.
    pub(crate) fn new<K, V, B: Balance>(tree: &RawTree<K, V, B>, order: Traversal) -> Self {
        let root = tree.root();
        match order {
            Traversal::PreOrder => Walk::PreOrder(root),
            Traversal::InOrder => Walk::InOrder(root.map(|root| tree.extreme(root, Side::Left))),
            Traversal::PostOrder => Walk::PostOrder(root.map(|root| tree.first_post_order(root))),
            Traversal::LevelOrder => Walk::LevelOrder(root.into_iter().collect()),
        }
    }

    /// Yields the current node and advances past it.
    pub(crate) fn next<K, V, B: Balance>(&mut self, tree: &RawTree<K, V, B>) -> Option<Handle> {
        match self {
            Walk::PreOrder(next) => {
                let current = (*next)?;
                *next = tree.pre_order_successor(current);
                Some(current)
            }
            Walk::InOrder(next) => {
                let current = (*next)?;
                *next = tree.in_order_successor(current);
                Some(current)
            }
            Walk::PostOrder(next) => {
                let current = (*next)?;
                *next = tree.post_order_successor(current);
                Some(current)
            }
            Walk::LevelOrder(queue) => {
                let current = queue.pop_front()?;
                let node = tree.node(current);
                queue.extend(node.left());
                queue.extend(node.right());
                Some(current)
            }
        }
    }
}

impl<K, V, B: Balance> RawTree<K, V, B> {
    pub(crate) fn in_order_successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.child(handle, Side::Right) {
            return Some(self.extreme(right, Side::Left));
        }
        // Climb until we leave a left subtree.
        let mut current = handle;
        while let Some((parent, side)) = self.slot_of(current) {
            if side == Side::Left {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    pub(crate) fn pre_order_successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.node(handle);
        if let Some(child) = node.left().or(node.right()) {
            return Some(child);
        }
        // Climb until some ancestor has an unvisited right subtree.
        let mut current = handle;
        while let Some((parent, side)) = self.slot_of(current) {
            if side == Side::Left
                && let Some(right) = self.child(parent, Side::Right)
            {
                return Some(right);
            }
            current = parent;
        }
        None
    }

    /// Returns the first node a post-order walk of the subtree at `handle` visits.
    pub(crate) fn first_post_order(&self, handle: Handle) -> Handle {
        let mut current = handle;
        loop {
            let node = self.node(current);
            match node.left().or(node.right()) {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    pub(crate) fn post_order_successor(&self, handle: Handle) -> Option<Handle> {
        let (parent, side) = self.slot_of(handle)?;
        match self.child(parent, Side::Right) {
            Some(right) if side == Side::Left => Some(self.first_post_order(right)),
            _ => Some(parent),
        }
    }

    /// Folds the tree bottom-up: `combine` sees each node after both of its children, together
    /// with the results computed for them. Returns `None` for an empty tree.
    pub(crate) fn fold_up<T, E, F>(&self, mut combine: F) -> Result<Option<T>, E>
    where
        F: FnMut(Handle, Option<T>, Option<T>) -> Result<T, E>,
    {
        // Results of finished subtrees whose parent has not been visited yet.
        let mut pending: SmallVec<[T; 32]> = SmallVec::new();
        let mut walk = Walk::new(self, Traversal::PostOrder);

        while let Some(handle) = walk.next(self) {
            let node = self.node(handle);
            let right = if node.right().is_some() { pending.pop() } else { None };
            let left = if node.left().is_some() { pending.pop() } else { None };
            pending.push(combine(handle, left, right)?);
        }

        debug_assert!(pending.len() <= 1);
        Ok(pending.pop())
    }
}
