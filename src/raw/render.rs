use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Write};

use super::handle::Handle;
use super::node::Side;
use super::raw_tree::RawTree;
use crate::balance::Balance;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const GUIDE: &str = "│   ";
const BLANK: &str = "    ";
const MISSING: &str = "∅";

impl<K: Debug, V, B: Balance> RawTree<K, V, B> {
    fn write_label<W: Write>(&self, handle: Handle, out: &mut W) -> fmt::Result {
        let node = self.node(handle);
        write!(out, "{:?}", node.key())?;
        B::annotate(node.meta(), out)
    }

    /// Draws the tree top-down, one node per line, with box-drawing guides.
    ///
    /// ```text
    /// 20 [B]
    /// ├── 10 [R]
    /// └── 30 [R]
    /// ```
    /// The left child is listed first. A node with a single child shows its missing
    /// side as `∅`. An empty tree renders as nothing.
    pub(crate) fn render_vertical<W: Write>(&self, out: &mut W) -> fmt::Result {
        let Some(root) = self.root() else {
            return Ok(());
        };

        // (node, guides inherited from its ancestors, connector in front of its label)
        let mut stack: Vec<(Option<Handle>, String, &str)> = vec![(Some(root), String::new(), "")];
        while let Some((handle, guides, connector)) = stack.pop() {
            out.write_str(&guides)?;
            out.write_str(connector)?;
            let Some(handle) = handle else {
                out.write_str(MISSING)?;
                out.write_char('\n')?;
                continue;
            };
            self.write_label(handle, out)?;
            out.write_char('\n')?;

            let node = self.node(handle);
            if node.left().is_none() && node.right().is_none() {
                continue;
            }
            let mut child_guides = guides;
            child_guides.push_str(match connector {
                BRANCH => GUIDE,
                LAST_BRANCH => BLANK,
                _ => "",
            });
            // Right is pushed first so the left child is drawn first.
            stack.push((node.right(), child_guides.clone(), LAST_BRANCH));
            stack.push((node.left(), child_guides, BRANCH));
        }
        Ok(())
    }

    /// Draws the tree rotated a quarter turn: the root on the left, larger keys above it,
    /// and each level indented four more columns.
    ///
    /// ```text
    ///     30
    /// 20
    ///     10
    /// ```
    pub(crate) fn render_horizontal<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut pending: Vec<(Handle, usize)> = Vec::new();
        let mut current = self.root().map(|root| (root, 0));
        loop {
            // Reverse in-order: descend right first.
            while let Some((handle, depth)) = current {
                pending.push((handle, depth));
                current = self.child(handle, Side::Right).map(|child| (child, depth + 1));
            }
            let Some((handle, depth)) = pending.pop() else {
                return Ok(());
            };
            for _ in 0..depth {
                out.write_str(BLANK)?;
            }
            self.write_label(handle, out)?;
            out.write_char('\n')?;
            current = self.child(handle, Side::Left).map(|child| (child, depth + 1));
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::balance::{Avl, RedBlack, Unbalanced};

    fn tree_of<B: Balance>(keys: &[i32]) -> RawTree<i32, (), B> {
        let mut tree = RawTree::new();
        for &key in keys {
            tree.insert(key, ());
        }
        tree
    }

    fn vertical<B: Balance>(tree: &RawTree<i32, (), B>) -> String {
        let mut out = String::new();
        tree.render_vertical(&mut out).unwrap();
        out
    }

    fn horizontal<B: Balance>(tree: &RawTree<i32, (), B>) -> String {
        let mut out = String::new();
        tree.render_horizontal(&mut out).unwrap();
        out
    }

    #[test]
    fn empty_tree_renders_nothing() {
        let tree = tree_of::<Avl>(&[]);
        assert_eq!(vertical(&tree), "");
        assert_eq!(horizontal(&tree), "");
    }

    #[test]
    fn red_black_labels_carry_colors() {
        let tree = tree_of::<RedBlack>(&[10, 20, 30]);
        assert_eq!(vertical(&tree), "20 [B]\n├── 10 [R]\n└── 30 [R]\n");
    }

    #[test]
    fn avl_labels_carry_heights() {
        let tree = tree_of::<Avl>(&[2, 1, 3]);
        assert_eq!(vertical(&tree), "2 (h=1)\n├── 1 (h=0)\n└── 3 (h=0)\n");
    }

    #[test]
    fn nested_guides_and_missing_children() {
        //      4
        //     / \
        //    2   6
        //   /     \
        //  1       7
        let tree = tree_of::<Unbalanced>(&[4, 2, 6, 1, 7]);
        let expected = "\
4
├── 2
│   ├── 1
│   └── ∅
└── 6
    ├── ∅
    └── 7
";
        assert_eq!(vertical(&tree), expected);
    }

    #[test]
    fn horizontal_layout_puts_larger_keys_on_top() {
        let tree = tree_of::<Unbalanced>(&[4, 2, 6, 1, 7]);
        assert_eq!(horizontal(&tree), "        7\n    6\n4\n    2\n        1\n");
    }
}
