use core::fmt;

use tracing::trace;

use super::{Balance, sealed};
use crate::error::Violation;
use crate::raw::{Handle, RawTree, Vacancy};

/// Color balancing (red-black).
///
/// Every node is red or black, the root is black, a red node never has a red child, and every
/// path from a node down to an absent child passes the same number of black nodes. The
/// longest root-to-leaf path is therefore at most twice the shortest, and the height of a tree
/// with `n` entries stays below `2 * log2(n + 1)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RedBlack;

/// Color of a red-black node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl sealed::Sealed for RedBlack {}

/// Absent children count as black.
fn color<K, V>(tree: &RawTree<K, V, RedBlack>, node: Option<Handle>) -> Color {
    node.map_or(Color::Black, |node| tree.meta(node))
}

fn is_red<K, V>(tree: &RawTree<K, V, RedBlack>, node: Option<Handle>) -> bool {
    color(tree, node) == Color::Red
}

fn paint_root_black<K, V>(tree: &mut RawTree<K, V, RedBlack>) {
    if let Some(root) = tree.root() {
        tree.set_meta(root, Color::Black);
    }
}

impl Balance for RedBlack {
    type Meta = Color;

    const LEAF: Color = Color::Red;

    fn after_insert<K, V>(tree: &mut RawTree<K, V, Self>, inserted: Handle) {
        let mut node = inserted;
        loop {
            let Some(mut parent) = tree.parent(node) else { break };
            if tree.meta(parent) == Color::Black {
                break;
            }
            // The root is black, so a red parent always has a parent of its own.
            let (grandparent, parent_side) = tree.slot_of(parent).expect("a red node is never the root");
            let uncle = tree.child(grandparent, parent_side.opposite());

            if is_red(tree, uncle) {
                trace!(?node, case = "uncle-red", "red-black insert fix-up");
                tree.set_meta(parent, Color::Black);
                if let Some(uncle) = uncle {
                    tree.set_meta(uncle, Color::Black);
                }
                tree.set_meta(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if tree.side_of(node) != Some(parent_side) {
                // Inner grandchild: turn it into an outer one first.
                trace!(?node, case = "inner-grandchild", "red-black insert fix-up");
                tree.rotate(parent, parent_side);
                parent = node;
            }

            trace!(?node, case = "outer-grandchild", "red-black insert fix-up");
            tree.set_meta(parent, Color::Black);
            tree.set_meta(grandparent, Color::Red);
            tree.rotate(grandparent, parent_side.opposite());
            break;
        }
        paint_root_black(tree);
    }

    fn after_remove<K, V>(tree: &mut RawTree<K, V, Self>, vacancy: Vacancy<Color>) {
        if vacancy.removed == Color::Red {
            return;
        }
        if let Some(child) = vacancy.child
            && tree.meta(child) == Color::Red
        {
            tree.set_meta(child, Color::Black);
            return;
        }

        // The vacated position is now one black node short ("double black").
        let mut slot = vacancy.slot;
        while let Some((parent, side)) = slot {
            let mut sibling = tree
                .child(parent, side.opposite())
                .expect("a double-black position always has a sibling");

            if tree.meta(sibling) == Color::Red {
                trace!(?parent, case = "sibling-red", "red-black remove fix-up");
                tree.set_meta(sibling, Color::Black);
                tree.set_meta(parent, Color::Red);
                tree.rotate(parent, side);
                sibling = tree
                    .child(parent, side.opposite())
                    .expect("the red sibling's child becomes the new sibling");
            }

            let near = tree.child(sibling, side);
            let far = tree.child(sibling, side.opposite());

            if !is_red(tree, near) && !is_red(tree, far) {
                trace!(?parent, case = "nephews-black", "red-black remove fix-up");
                tree.set_meta(sibling, Color::Red);
                if tree.meta(parent) == Color::Red {
                    tree.set_meta(parent, Color::Black);
                    return;
                }
                slot = tree.slot_of(parent);
                continue;
            }

            if !is_red(tree, far) {
                trace!(?parent, case = "near-red", "red-black remove fix-up");
                let near = near.expect("near nephew is red");
                tree.set_meta(near, Color::Black);
                tree.set_meta(sibling, Color::Red);
                tree.rotate(sibling, side.opposite());
                sibling = near;
            }

            trace!(?parent, case = "far-red", "red-black remove fix-up");
            let parent_color = tree.meta(parent);
            tree.set_meta(sibling, parent_color);
            tree.set_meta(parent, Color::Black);
            if let Some(far) = tree.child(sibling, side.opposite()) {
                tree.set_meta(far, Color::Black);
            }
            tree.rotate(parent, side);
            break;
        }
        paint_root_black(tree);
    }

    fn check<K, V>(tree: &RawTree<K, V, Self>) -> Result<(), Violation> {
        if is_red(tree, tree.root()) {
            return Err(Violation::RedRoot);
        }
        // Each subtree reports its black height, counting the absent children below it as one.
        tree.fold_up(|node, left, right| {
            let (left, right) = (left.unwrap_or(1), right.unwrap_or(1));
            if left != right {
                return Err(Violation::BlackHeight { left, right });
            }
            let links = tree.node(node);
            match tree.meta(node) {
                Color::Red if is_red(tree, links.left()) || is_red(tree, links.right()) => Err(Violation::RedRed),
                Color::Red => Ok(left),
                Color::Black => Ok(left + 1),
            }
        })
        .map(|_| ())
    }

    fn annotate(meta: Color, out: &mut dyn fmt::Write) -> fmt::Result {
        match meta {
            Color::Red => out.write_str(" [R]"),
            Color::Black => out.write_str(" [B]"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::Side;
    use crate::raw::Walk;
    use crate::traversal::Traversal;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    type RbTree = RawTree<i32, i32, RedBlack>;

    fn tree_of(keys: &[i32]) -> RbTree {
        let mut tree = RbTree::new();
        for &key in keys {
            tree.insert(key, key);
            tree.validate().unwrap();
        }
        tree
    }

    fn colored(tree: &RbTree, order: Traversal) -> Vec<(i32, Color)> {
        let mut walk = Walk::new(tree, order);
        let mut nodes = Vec::new();
        while let Some(node) = walk.next(tree) {
            nodes.push((*tree.node(node).key(), tree.meta(node)));
        }
        nodes
    }

    use Color::{Black as B, Red as R};

    #[test]
    fn first_insert_paints_root_black() {
        let tree = tree_of(&[1]);
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(1, B)]);
    }

    #[test]
    fn ascending_triple_rotates_and_recolors() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, R), (30, R)]);
    }

    #[test]
    fn inner_grandchild_takes_double_rotation() {
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, R), (30, R)]);
        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, R), (30, R)]);
    }

    #[test]
    fn red_uncle_pushes_red_upward() {
        let tree = tree_of(&[20, 10, 30, 5]);
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, B), (30, B), (5, R)]);
    }

    #[test]
    fn removing_red_leaf_needs_no_fix_up() {
        let mut tree = tree_of(&[20, 10, 30, 5]);
        assert_eq!(tree.remove_entry(&5), Some((5, 5)));
        tree.validate().unwrap();
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, B), (30, B)]);
    }

    #[test]
    fn removing_black_leaf_with_black_sibling_recolors() {
        let mut tree = tree_of(&[20, 10, 30, 5]);
        tree.remove_entry(&5);
        assert_eq!(tree.remove_entry(&30), Some((30, 30)));
        tree.validate().unwrap();
        assert_eq!(colored(&tree, Traversal::LevelOrder), [(20, B), (10, R)]);
    }

    #[test]
    fn removing_root_of_seven_keeps_invariants() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(tree.remove_entry(&50), Some((50, 50)));
        tree.validate().unwrap();
        let keys: Vec<i32> = colored(&tree, Traversal::InOrder).into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, [20, 30, 40, 60, 70, 80]);
        assert_eq!(*tree.node(tree.root().unwrap()).key(), 60);
    }

    #[test]
    fn draining_from_either_end_keeps_invariants() {
        let keys: Vec<i32> = (0..200).collect();
        let mut tree = tree_of(&keys);
        for expected in 0..100 {
            assert_eq!(tree.pop_edge(Side::Left), Some((expected, expected)));
            assert_eq!(tree.pop_edge(Side::Right), Some((199 - expected, 199 - expected)));
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn check_reports_each_violation() {
        let mut tree = tree_of(&[20, 10, 30]);
        let root = tree.root().unwrap();
        tree.set_meta(root, R);
        assert_eq!(RedBlack::check(&tree), Err(Violation::RedRoot));

        let mut tree = tree_of(&[20, 10, 30, 5]);
        let ten = tree.find(&10).unwrap();
        tree.set_meta(ten, R);
        assert_eq!(RedBlack::check(&tree), Err(Violation::RedRed));

        let mut tree = tree_of(&[20, 10, 30]);
        let thirty = tree.find(&30).unwrap();
        tree.set_meta(thirty, B);
        assert_eq!(RedBlack::check(&tree), Err(Violation::BlackHeight { left: 1, right: 2 }));
    }

    #[test]
    fn annotations() {
        let mut label = alloc::string::String::new();
        RedBlack::annotate(R, &mut label).unwrap();
        RedBlack::annotate(B, &mut label).unwrap();
        assert_eq!(label, " [R] [B]");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..500).prop_map(Op::Insert),
            2 => (0i32..500).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..400)) {
            let mut tree = RbTree::new();
            for op in ops {
                match op {
                    Op::Insert(key) => { tree.insert(key, key); }
                    Op::Remove(key) => { tree.remove_entry(&key); }
                }
                prop_assert_eq!(tree.validate(), Ok(()));
            }
        }
    }
}
