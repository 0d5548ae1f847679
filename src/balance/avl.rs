use core::fmt;

use tracing::trace;

use super::{Balance, sealed};
use crate::error::Violation;
use crate::raw::{Handle, RawTree, Side, Vacancy};

/// Height balancing (AVL).
///
/// Every node stores the height of its subtree (a leaf has height 0, an absent child -1), and
/// the heights of a node's two subtrees never differ by more than one. The height of a tree
/// with `n` entries is therefore below `1.44 * log2(n + 2)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Avl;

impl sealed::Sealed for Avl {}

fn height<K, V>(tree: &RawTree<K, V, Avl>, node: Option<Handle>) -> i32 {
    node.map_or(-1, |node| tree.meta(node))
}

fn update_height<K, V>(tree: &mut RawTree<K, V, Avl>, node: Handle) -> i32 {
    let links = tree.node(node);
    let updated = 1 + height(tree, links.left()).max(height(tree, links.right()));
    tree.set_meta(node, updated);
    updated
}

fn balance_factor<K, V>(tree: &RawTree<K, V, Avl>, node: Handle) -> i32 {
    let links = tree.node(node);
    height(tree, links.left()) - height(tree, links.right())
}

/// Rotates `node` back into balance if its subtrees differ in height by two.
/// Returns whichever node roots the subtree afterwards.
fn rebalance<K, V>(tree: &mut RawTree<K, V, Avl>, node: Handle) -> Handle {
    let factor = balance_factor(tree, node);
    if factor > 1 {
        let left = tree.child(node, Side::Left).expect("left-heavy node has a left child");
        if balance_factor(tree, left) < 0 {
            trace!(?node, case = "left-right", "avl rebalance");
            tree.rotate_left_right(node)
        } else {
            trace!(?node, case = "left-left", "avl rebalance");
            tree.rotate_right(node)
        }
    } else if factor < -1 {
        let right = tree.child(node, Side::Right).expect("right-heavy node has a right child");
        if balance_factor(tree, right) > 0 {
            trace!(?node, case = "right-left", "avl rebalance");
            tree.rotate_right_left(node)
        } else {
            trace!(?node, case = "right-right", "avl rebalance");
            tree.rotate_left(node)
        }
    } else {
        node
    }
}

impl Balance for Avl {
    type Meta = i32;

    const LEAF: i32 = 0;

    fn after_insert<K, V>(tree: &mut RawTree<K, V, Self>, inserted: Handle) {
        let mut current = tree.parent(inserted);
        while let Some(node) = current {
            let before = tree.meta(node);
            let after = update_height(tree, node);
            if balance_factor(tree, node).abs() > 1 {
                // The rotation restores the subtree's pre-insert height; nothing above changes.
                rebalance(tree, node);
                return;
            }
            if before == after {
                return;
            }
            current = tree.parent(node);
        }
    }

    fn after_remove<K, V>(tree: &mut RawTree<K, V, Self>, vacancy: Vacancy<i32>) {
        // A rotation after a removal can shorten the subtree, so every ancestor is revisited.
        let mut current = vacancy.slot.map(|(parent, _)| parent);
        while let Some(node) = current {
            update_height(tree, node);
            let top = rebalance(tree, node);
            current = tree.parent(top);
        }
    }

    fn after_rotate<K, V>(tree: &mut RawTree<K, V, Self>, lowered: Handle, raised: Handle) {
        update_height(tree, lowered);
        update_height(tree, raised);
    }

    fn check<K, V>(tree: &RawTree<K, V, Self>) -> Result<(), Violation> {
        tree.fold_up(|node, left, right| {
            let (left, right) = (left.unwrap_or(-1), right.unwrap_or(-1));
            let computed = 1 + left.max(right);
            let stored = tree.meta(node);
            if stored != computed {
                return Err(Violation::StaleHeight { stored, computed });
            }
            let factor = left - right;
            if factor.abs() > 1 {
                return Err(Violation::Unbalanced { factor });
            }
            Ok(computed)
        })
        .map(|_| ())
    }

    fn subtree_height(meta: i32) -> Option<usize> {
        usize::try_from(meta).ok()
    }

    fn annotate(meta: i32, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, " (h={meta})")
    }
}
