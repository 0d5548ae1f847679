use tracing::trace;

use super::handle::Handle;
use super::node::Side;
use super::raw_tree::RawTree;
use crate::balance::Balance;

impl<K, V, B: Balance> RawTree<K, V, B> {
    /// Rotates `pivot` down toward `toward`; its child on the other side takes its place.
    ///
    /// ```text
    ///       pivot                 riser
    ///       /   \                 /   \
    ///      a   riser    ==>   pivot    c
    ///          /   \          /   \
    ///      inner    c        a   inner
    /// ```
    /// (shown for `toward == Side::Left`). The in-order sequence is unchanged. Returns the
    /// riser, which now roots the subtree.
    ///
    /// # Panics
    /// Panics if `pivot` has no child opposite `toward`.
    pub(crate) fn rotate(&mut self, pivot: Handle, toward: Side) -> Handle {
        let riser = self
            .child(pivot, toward.opposite())
            .expect("`RawTree::rotate()` - pivot has no child to rotate up!");
        let inner = self.child(riser, toward);

        // `inner` crosses from the riser to the pivot.
        self.node_mut(pivot).set_child(toward.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(pivot));
        }

        let parent = self.parent(pivot);
        self.replace_child(parent, pivot, Some(riser));

        self.node_mut(riser).set_child(toward, Some(pivot));
        self.node_mut(pivot).set_parent(Some(riser));
        debug_assert_eq!(self.parent(riser), parent);
        debug_assert_eq!(self.child(riser, toward), Some(pivot));
        debug_assert_eq!(self.parent(pivot), Some(riser));

        trace!(?pivot, ?riser, ?toward, "rotate");
        B::after_rotate(self, pivot, riser);
        riser
    }

    /// Rotates `node` down to the left; its right child rises.
    pub(crate) fn rotate_left(&mut self, node: Handle) -> Handle {
        self.rotate(node, Side::Left)
    }

    /// Rotates `node` down to the right; its left child rises.
    pub(crate) fn rotate_right(&mut self, node: Handle) -> Handle {
        self.rotate(node, Side::Right)
    }

    /// Rotates `node`'s left child left, then `node` right.
    /// The left child's right child ends up on top.
    pub(crate) fn rotate_left_right(&mut self, node: Handle) -> Handle {
        let left = self
            .child(node, Side::Left)
            .expect("`RawTree::rotate_left_right()` - node has no left child!");
        self.rotate_left(left);
        self.rotate_right(node)
    }

    /// Rotates `node`'s right child right, then `node` left.
    /// The right child's left child ends up on top.
    pub(crate) fn rotate_right_left(&mut self, node: Handle) -> Handle {
        let right = self
            .child(node, Side::Right)
            .expect("`RawTree::rotate_right_left()` - node has no right child!");
        self.rotate_right(right);
        self.rotate_left(node)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::balance::Unbalanced;
    use crate::raw::Walk;
    use crate::traversal::Traversal;
    use alloc::vec::Vec;

    type Plain = RawTree<i32, (), Unbalanced>;

    fn tree_of(keys: &[i32]) -> Plain {
        let mut tree = Plain::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    fn keys(tree: &Plain, order: Traversal) -> Vec<i32> {
        let mut walk = Walk::new(tree, order);
        let mut keys = Vec::new();
        while let Some(node) = walk.next(tree) {
            keys.push(*tree.node(node).key());
        }
        keys
    }

    #[test]
    fn rotate_left_at_root() {
        let mut tree = tree_of(&[2, 1, 4, 3, 5]);
        let root = tree.root().unwrap();
        let riser = tree.rotate_left(root);

        assert_eq!(tree.root(), Some(riser));
        assert_eq!(*tree.node(riser).key(), 4);
        assert_eq!(keys(&tree, Traversal::PreOrder), [4, 2, 1, 3, 5]);
        assert_eq!(keys(&tree, Traversal::InOrder), [1, 2, 3, 4, 5]);
        tree.validate().unwrap();
    }

    #[test]
    fn rotate_right_below_root() {
        let mut tree = tree_of(&[10, 5, 3, 7, 20]);
        let five = tree.find(&5).unwrap();
        tree.rotate_right(five);

        assert_eq!(keys(&tree, Traversal::PreOrder), [10, 3, 5, 7, 20]);
        tree.validate().unwrap();
    }

    #[test]
    fn rotation_relinks_riser_to_the_old_parent() {
        let mut tree = tree_of(&[10, 5, 3, 7, 20]);
        let ten = tree.find(&10).unwrap();
        let five = tree.find(&5).unwrap();
        let seven = tree.find(&7).unwrap();

        let riser = tree.rotate_left(five);

        assert_eq!(tree.parent(riser), Some(ten));
        assert_eq!(tree.child(ten, Side::Left), Some(riser));
        assert_eq!(tree.parent(five), Some(riser));
        assert_eq!(tree.child(riser, Side::Left), Some(five));
        assert_eq!(riser, seven);
        tree.validate().unwrap();
    }

    #[test]
    fn double_rotations_lift_the_inner_grandchild() {
        let mut tree = tree_of(&[3, 1, 2]);
        let root = tree.root().unwrap();
        let top = tree.rotate_left_right(root);
        assert_eq!(*tree.node(top).key(), 2);
        assert_eq!(keys(&tree, Traversal::LevelOrder), [2, 1, 3]);
        tree.validate().unwrap();

        let mut tree = tree_of(&[1, 3, 2]);
        let root = tree.root().unwrap();
        let top = tree.rotate_right_left(root);
        assert_eq!(*tree.node(top).key(), 2);
        assert_eq!(keys(&tree, Traversal::LevelOrder), [2, 1, 3]);
        tree.validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "pivot has no child to rotate up")]
    fn rotating_without_riser_panics() {
        let mut tree = tree_of(&[1]);
        let root = tree.root().unwrap();
        tree.rotate_left(root);
    }
}
