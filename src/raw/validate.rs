use alloc::collections::VecDeque;

use super::raw_tree::RawTree;
use super::walk::Walk;
use crate::balance::Balance;
use crate::error::Violation;
use crate::traversal::Traversal;

impl<K: Ord, V, B: Balance> RawTree<K, V, B> {
    /// Checks every structural invariant: parent links, length, key order, and finally the
    /// balancing strategy's own invariant.
    pub(crate) fn validate(&self) -> Result<(), Violation> {
        let mut reachable = 0;
        if let Some(root) = self.root() {
            if self.parent(root).is_some() {
                return Err(Violation::BrokenParentLink);
            }

            // Breadth-first, so a cycle through a bad link is cut off by the length check
            // instead of looping forever.
            let mut queue = VecDeque::from([root]);
            while let Some(handle) = queue.pop_front() {
                reachable += 1;
                if reachable > self.len() {
                    break;
                }
                let node = self.node(handle);
                for child in [node.left(), node.right()].into_iter().flatten() {
                    if self.parent(child) != Some(handle) {
                        return Err(Violation::BrokenParentLink);
                    }
                    queue.push_back(child);
                }
            }
        }
        if reachable != self.len() {
            return Err(Violation::LenMismatch {
                recorded: self.len(),
                reachable,
            });
        }

        let mut walk = Walk::new(self, Traversal::InOrder);
        let mut previous = walk.next(self);
        while let Some(current) = walk.next(self) {
            if let Some(previous) = previous
                && self.node(previous).key() >= self.node(current).key()
            {
                return Err(Violation::Unordered);
            }
            previous = Some(current);
        }

        B::check(self)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::balance::Unbalanced;
    use crate::raw::Side;

    fn tree_of(keys: &[i32]) -> RawTree<i32, (), Unbalanced> {
        let mut tree = RawTree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn well_formed_trees_pass() {
        assert_eq!(tree_of(&[]).validate(), Ok(()));
        assert_eq!(tree_of(&[4, 2, 6, 1, 3, 5, 7]).validate(), Ok(()));
        assert_eq!(tree_of(&[1, 2, 3, 4]).validate(), Ok(()));
    }

    #[test]
    fn swapped_children_are_unordered() {
        let mut tree = tree_of(&[2, 1, 3]);
        let root = tree.root().unwrap();
        let left = tree.child(root, Side::Left);
        let right = tree.child(root, Side::Right);
        tree.node_mut(root).set_child(Side::Left, right);
        tree.node_mut(root).set_child(Side::Right, left);
        assert_eq!(tree.validate(), Err(Violation::Unordered));
    }

    #[test]
    fn stale_parent_link_is_reported() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.find(&1).unwrap();
        let right = tree.find(&3).unwrap();
        tree.node_mut(left).set_parent(Some(right));
        assert_eq!(tree.validate(), Err(Violation::BrokenParentLink));

        let mut tree = tree_of(&[2, 1, 3]);
        let root = tree.root().unwrap();
        tree.node_mut(root).set_parent(Some(root));
        assert_eq!(tree.validate(), Err(Violation::BrokenParentLink));
    }

    #[test]
    fn detached_subtree_is_a_length_mismatch() {
        let mut tree = tree_of(&[2, 1, 3]);
        let root = tree.root().unwrap();
        tree.node_mut(root).set_child(Side::Right, None);
        assert_eq!(
            tree.validate(),
            Err(Violation::LenMismatch {
                recorded: 3,
                reachable: 2
            })
        );
    }
}
