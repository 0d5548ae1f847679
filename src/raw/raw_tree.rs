use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use super::walk::Walk;
use crate::balance::Balance;
use crate::traversal::Traversal;

/// The binary search tree substrate backing `TreeMap`.
///
/// It performs unconstrained insertions and removals and hands every structural change to
/// the balancing strategy `B` before returning.
pub(crate) struct RawTree<K, V, B: Balance> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V, B::Meta>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

/// Result of descending the tree in search of a key.
pub(crate) enum Search {
    /// A node holds the key.
    Found(Handle),
    /// The key would be attached as the `side` child of `parent` (or as the root).
    Vacant { parent: Option<Handle>, side: Side },
}

/// The position emptied by a removal, handed to the strategy's post-delete fix-up.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Vacancy<M> {
    /// Parent of the removed node and the side it hung from; `None` when it was the root.
    pub(crate) slot: Option<(Handle, Side)>,
    /// The removed node's only child, now occupying the slot.
    pub(crate) child: Option<Handle>,
    /// Bookkeeping the removed node carried.
    pub(crate) removed: M,
}

impl<K, V, B: Balance> RawTree<K, V, B> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of key-value pairs in the tree; every live arena slot holds one.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V, B::Meta> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V, B::Meta> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).parent()
    }

    #[inline]
    pub(crate) fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.node(handle).child(side)
    }

    #[inline]
    pub(crate) fn meta(&self, handle: Handle) -> B::Meta {
        self.node(handle).meta()
    }

    #[inline]
    pub(crate) fn set_meta(&mut self, handle: Handle, meta: B::Meta) {
        self.node_mut(handle).set_meta(meta);
    }

    /// Returns the parent of `handle` together with the side `handle` hangs from.
    pub(crate) fn slot_of(&self, handle: Handle) -> Option<(Handle, Side)> {
        let parent = self.parent(handle)?;
        let side = self
            .node(parent)
            .side_of_child(handle)
            .expect("`RawTree::slot_of()` - parent does not link back to its child!");
        Some((parent, side))
    }

    /// Returns the side `handle` hangs from, or `None` for the root.
    pub(crate) fn side_of(&self, handle: Handle) -> Option<Side> {
        self.slot_of(handle).map(|(_, side)| side)
    }

    /// Puts `new` where `old` hangs below `parent` (or at the root) and points `new` back up.
    pub(crate) fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self
                    .node(parent)
                    .side_of_child(old)
                    .expect("`RawTree::replace_child()` - `old` is not a child of `parent`!");
                self.node_mut(parent).set_child(side, new);
            }
        }
        if let Some(new) = new {
            self.node_mut(new).set_parent(parent);
        }
    }

    /// Follows `side` links from `from` as far as they go.
    pub(crate) fn extreme(&self, from: Handle, side: Side) -> Handle {
        let mut current = from;
        while let Some(next) = self.child(current, side) {
            current = next;
        }
        current
    }

    /// Returns the key-value pair stored at `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.node(handle);
        (node.key(), node.value())
    }

    /// Returns the smallest (`Side::Left`) or largest (`Side::Right`) entry.
    pub(crate) fn edge(&self, side: Side) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, side))
    }

    /// Unlinks the node at `handle` from the tree and returns its key and value.
    ///
    /// A node with two children trades its payload with its in-order successor, which is
    /// then unlinked in its place; the strategy's fix-up starts at the vacated position.
    pub(crate) fn remove_handle(&mut self, handle: Handle) -> (K, V) {
        let node = self.node(handle);
        let doomed = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let successor = self.extreme(right, Side::Left);
                let (target, successor_node) = self.nodes.get_pair_mut(handle, successor);
                target.swap_payload(successor_node);
                successor
            }
            _ => handle,
        };

        let node = self.node(doomed);
        debug_assert!(node.left().is_none() || node.right().is_none());
        let child = node.left().or(node.right());
        let slot = self.slot_of(doomed);
        self.replace_child(slot.map(|(parent, _)| parent), doomed, child);

        let node = self.nodes.take(doomed);
        B::after_remove(
            self,
            Vacancy {
                slot,
                child,
                removed: node.meta(),
            },
        );
        node.into_entry()
    }

    /// Removes and returns the smallest (`Side::Left`) or largest (`Side::Right`) entry.
    pub(crate) fn pop_edge(&mut self, side: Side) -> Option<(K, V)> {
        let handle = self.edge(side)?;
        Some(self.remove_handle(handle))
    }

    /// Drains all key-value pairs in ascending key order, leaving the tree empty.
    pub(crate) fn drain_in_order(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.len());
        let mut walk = Walk::new(self, Traversal::InOrder);
        while let Some(handle) = walk.next(self) {
            handles.push(handle);
        }

        let entries = handles.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.clear();
        entries
    }

    /// Returns the first node, in `order`, whose value satisfies `predicate`.
    pub(crate) fn position<F>(&self, order: Traversal, mut predicate: F) -> Option<Handle>
    where
        F: FnMut(&V) -> bool,
    {
        let mut walk = Walk::new(self, order);
        while let Some(handle) = walk.next(self) {
            if predicate(self.node(handle).value()) {
                return Some(handle);
            }
        }
        None
    }
}

impl<K: Ord, V, B: Balance> RawTree<K, V, B> {
    /// Descends from the root comparing against `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(handle) = current {
            side = match key.cmp(self.node(handle).key().borrow()) {
                Ordering::Equal => return Search::Found(handle),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(handle);
            current = self.child(handle, side);
        }

        Search::Vacant { parent, side }
    }

    /// Returns the node holding `key`, if any.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.search(key) {
            Search::Found(handle) => Some(handle),
            Search::Vacant { .. } => None,
        }
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present; the shape is then untouched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Search::Found(handle) => Some(self.node_mut(handle).replace_value(value)),
            Search::Vacant { parent, side } => {
                let handle = self.nodes.alloc(Node::new(key, value, B::LEAF, parent));
                match parent {
                    None => self.root = Some(handle),
                    Some(parent) => self.node_mut(parent).set_child(side, Some(handle)),
                }
                B::after_insert(self, handle);
                None
            }
        }
    }

    /// Removes `key` from the tree, returning the stored key and value.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(key)?;
        Some(self.remove_handle(handle))
    }
}

impl<K: Clone, V: Clone, B: Balance> Clone for RawTree<K, V, B> {
    fn clone(&self) -> Self {
        // Handles are slot indices, so a slot-for-slot copy keeps every link valid.
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::balance::Unbalanced;
    use alloc::vec;
    use proptest::prelude::*;

    fn tree_of(keys: &[i32]) -> RawTree<i32, i32, Unbalanced> {
        let mut tree = RawTree::new();
        for &key in keys {
            tree.insert(key, key * 10);
        }
        tree
    }

    fn in_order(tree: &RawTree<i32, i32, Unbalanced>) -> Vec<i32> {
        let mut walk = Walk::new(tree, Traversal::InOrder);
        let mut keys = Vec::new();
        while let Some(handle) = walk.next(tree) {
            keys.push(*tree.node(handle).key());
        }
        keys
    }

    #[test]
    fn insert_links_parent_and_child() {
        let tree = tree_of(&[5, 3, 8]);
        let root = tree.root().unwrap();
        let left = tree.child(root, Side::Left).unwrap();
        let right = tree.child(root, Side::Right).unwrap();

        assert_eq!(*tree.node(root).key(), 5);
        assert_eq!(*tree.node(left).key(), 3);
        assert_eq!(*tree.node(right).key(), 8);
        assert_eq!(tree.parent(left), Some(root));
        assert_eq!(tree.slot_of(right), Some((root, Side::Right)));
        assert_eq!(tree.slot_of(root), None);
        tree.validate().unwrap();
    }

    #[test]
    fn insert_existing_key_overwrites_in_place() {
        let mut tree = tree_of(&[5, 3, 8]);
        let before = tree.find(&3);

        assert_eq!(tree.insert(3, 99), Some(30));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.find(&3), before);
        assert_eq!(*tree.node(before.unwrap()).value(), 99);
    }

    #[test]
    fn len_counts_live_nodes_through_reuse_and_drain() {
        let mut tree = tree_of(&[5, 3, 8, 1]);
        assert_eq!(tree.len(), 4);

        tree.remove_entry(&3).unwrap();
        tree.insert(3, 30);
        tree.insert(3, 31);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.capacity(), tree.nodes.capacity());

        assert_eq!(tree.pop_edge(Side::Left), Some((1, 10)));
        assert_eq!(tree.len(), 3);

        let entries = tree.drain_in_order();
        assert_eq!(entries, [(3, 31), (5, 50), (8, 80)]);
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn search_reports_attachment_point() {
        let tree = tree_of(&[5, 3, 8]);
        let Search::Vacant { parent, side } = tree.search(&4) else {
            panic!("4 is not in the tree");
        };
        assert_eq!(parent, tree.find(&3));
        assert_eq!(side, Side::Right);

        let empty: RawTree<i32, i32, Unbalanced> = RawTree::new();
        assert!(matches!(empty.search(&1), Search::Vacant { parent: None, .. }));
    }

    #[test]
    fn remove_leaf_single_child_and_two_children() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 35]);

        assert_eq!(tree.remove_entry(&20), Some((20, 200)));
        assert_eq!(in_order(&tree), [30, 35, 40, 50, 60, 70, 80]);

        assert_eq!(tree.remove_entry(&40), Some((40, 400)));
        assert_eq!(in_order(&tree), [30, 35, 50, 60, 70, 80]);

        // The successor's payload moves into the root's node.
        let root = tree.root();
        assert_eq!(tree.remove_entry(&50), Some((50, 500)));
        assert_eq!(tree.root(), root);
        assert_eq!(*tree.node(root.unwrap()).key(), 60);
        assert_eq!(in_order(&tree), [30, 35, 60, 70, 80]);

        assert_eq!(tree.remove_entry(&50), None);
        assert_eq!(tree.len(), 5);
        tree.validate().unwrap();
    }

    #[test]
    fn remove_last_node_empties_tree() {
        let mut tree = tree_of(&[1]);
        assert_eq!(tree.remove_entry(&1), Some((1, 10)));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn pop_edges_and_drain() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.pop_edge(Side::Left), Some((1, 10)));
        assert_eq!(tree.pop_edge(Side::Right), Some((7, 70)));
        assert_eq!(tree.drain_in_order(), vec![(2, 20), (3, 30), (4, 40), (5, 50), (6, 60)]);
        assert!(tree.is_empty());
        assert_eq!(tree.pop_edge(Side::Left), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = tree_of(&[2, 1, 3]);
        let mut copy = original.clone();
        copy.insert(4, 40);
        copy.remove_entry(&1);

        assert_eq!(in_order(&original), [1, 2, 3]);
        assert_eq!(in_order(&copy), [2, 3, 4]);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..200).prop_map(Op::Insert),
            2 => (0i32..200).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn substrate_matches_btreemap(ops in prop::collection::vec(op_strategy(), 0..300)) {
            let mut tree: RawTree<i32, i32, Unbalanced> = RawTree::new();
            let mut model = alloc::collections::BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key) => prop_assert_eq!(tree.insert(key, key), model.insert(key, key)),
                    Op::Remove(key) => prop_assert_eq!(tree.remove_entry(&key), model.remove_entry(&key)),
                }
                prop_assert_eq!(tree.validate(), Ok(()));
            }

            let expected: Vec<i32> = model.keys().copied().collect();
            prop_assert_eq!(in_order(&tree), expected);
        }
    }
}
