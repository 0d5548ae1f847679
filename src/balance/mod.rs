//! Balancing strategies for [`TreeMap`](crate::TreeMap).
//!
//! A strategy decides what bookkeeping every node carries and how the tree is repaired after
//! the substrate has inserted or unlinked a node. The substrate calls into it at three points:
//!
//! - after attaching a new leaf,
//! - after splicing a node out (with the position it vacated),
//! - after every rotation, so per-node metadata can be recomputed.

// The hooks take crate-private tree types; the trait is sealed, so nothing outside can name them.
#![allow(private_interfaces)]

use core::fmt;

use crate::error::Violation;
use crate::raw::{Handle, RawTree, Vacancy};

mod avl;
mod red_black;
mod unbalanced;

pub use avl::Avl;
pub use red_black::{Color, RedBlack};
pub use unbalanced::Unbalanced;

mod sealed {
    pub trait Sealed {}
}

/// A rebalancing strategy plugged into [`TreeMap`](crate::TreeMap).
///
/// This trait is sealed: the strategies are [`Unbalanced`], [`Avl`], and [`RedBlack`].
/// Its methods are called by the tree itself and are not part of the public API.
pub trait Balance: sealed::Sealed + Sized {
    /// Bookkeeping stored in every node.
    type Meta: Copy + Eq + fmt::Debug;

    /// Metadata of a freshly attached leaf.
    #[doc(hidden)]
    const LEAF: Self::Meta;

    /// Repairs the tree after `inserted` was attached as a leaf.
    #[doc(hidden)]
    fn after_insert<K, V>(tree: &mut RawTree<K, V, Self>, inserted: Handle);

    /// Repairs the tree after a node was spliced out of `vacancy`.
    #[doc(hidden)]
    fn after_remove<K, V>(tree: &mut RawTree<K, V, Self>, vacancy: Vacancy<Self::Meta>);

    /// Recomputes metadata after `lowered` was rotated beneath `raised`.
    #[doc(hidden)]
    fn after_rotate<K, V>(_tree: &mut RawTree<K, V, Self>, _lowered: Handle, _raised: Handle) {}

    /// Checks the strategy's own invariant over the whole tree.
    #[doc(hidden)]
    fn check<K, V>(_tree: &RawTree<K, V, Self>) -> Result<(), Violation> {
        Ok(())
    }

    /// Height of the subtree rooted at a node, when the metadata tracks it.
    #[doc(hidden)]
    fn subtree_height(_meta: Self::Meta) -> Option<usize> {
        None
    }

    /// Writes a short label for `meta` after a node's key in tree renderings.
    #[doc(hidden)]
    fn annotate(_meta: Self::Meta, _out: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}
