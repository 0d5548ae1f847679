use core::convert::Infallible;

use super::raw_tree::RawTree;
use crate::balance::Balance;

/// Structural summary of a subtree, computed bottom-up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Shape {
    /// Height in edges; `-1` for an absent subtree.
    pub(crate) height: isize,
    /// Every node's subtrees differ in height by at most one.
    pub(crate) balanced: bool,
    /// Every node has zero or two children.
    pub(crate) full: bool,
    /// Full, with every leaf at the same depth.
    pub(crate) perfect: bool,
    /// Every level is filled except possibly the last, which is filled from the left.
    pub(crate) complete: bool,
}

impl Shape {
    /// The shape of an absent subtree (and of an empty tree).
    pub(crate) const ABSENT: Shape = Shape {
        height: -1,
        balanced: true,
        full: true,
        perfect: true,
        complete: true,
    };

    /// Combines the shapes of a node's two subtrees into the shape of the node's subtree.
    pub(crate) fn join(left: Shape, right: Shape) -> Shape {
        let one_child = (left.height < 0) != (right.height < 0);
        let same_height = left.height == right.height;
        Shape {
            height: 1 + left.height.max(right.height),
            balanced: left.balanced && right.balanced && left.height.abs_diff(right.height) <= 1,
            full: left.full && right.full && !one_child,
            perfect: left.perfect && right.perfect && same_height,
            complete: (left.perfect && right.complete && same_height)
                || (left.complete && right.perfect && left.height == right.height + 1),
        }
    }
}

impl<K, V, B: Balance> RawTree<K, V, B> {
    /// Computes the shape of the whole tree in one post-order pass.
    pub(crate) fn shape(&self) -> Shape {
        let shape = self.fold_up::<_, Infallible, _>(|_, left, right| {
            Ok(Shape::join(left.unwrap_or(Shape::ABSENT), right.unwrap_or(Shape::ABSENT)))
        });
        match shape {
            Ok(shape) => shape.unwrap_or(Shape::ABSENT),
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::balance::Unbalanced;
    use rstest::rstest;

    fn shape_of(keys: &[u8]) -> Shape {
        let mut tree: RawTree<u8, (), Unbalanced> = RawTree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree.shape()
    }

    #[rstest]
    //  (empty)
    #[case::empty(&[], -1, true, true, true, true)]
    //  1
    #[case::single(&[1], 0, true, true, true, true)]
    //    2
    //   /
    //  1
    #[case::left_leaf(&[2, 1], 1, true, false, false, true)]
    //  1
    //   \
    //    2
    #[case::right_leaf(&[1, 2], 1, true, false, false, false)]
    //     4
    //    / \
    //   2   6
    //  /
    // 1
    #[case::last_level_left(&[4, 2, 6, 1], 2, true, false, false, true)]
    //     4
    //    / \
    //   2   6
    //  / \
    // 1   3
    #[case::full_not_perfect(&[4, 2, 6, 1, 3], 2, true, true, false, true)]
    //     4
    //    / \
    //   2   6
    //    \
    //     3
    #[case::gap_in_last_level(&[4, 2, 6, 3], 2, true, false, false, false)]
    //       4
    //      / \
    //     2   6
    //    / \ / \
    //   1  3 5  7
    #[case::perfect(&[4, 2, 6, 1, 3, 5, 7], 2, true, true, true, true)]
    //     4
    //    / \
    //   2   6
    //        \
    //         7
    //          \
    //           8
    #[case::unbalanced(&[4, 2, 6, 7, 8], 3, false, false, false, false)]
    fn shapes(
        #[case] keys: &[u8],
        #[case] height: isize,
        #[case] balanced: bool,
        #[case] full: bool,
        #[case] perfect: bool,
        #[case] complete: bool,
    ) {
        assert_eq!(
            shape_of(keys),
            Shape {
                height,
                balanced,
                full,
                perfect,
                complete
            }
        );
    }
}
