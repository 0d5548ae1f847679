//! Binary search tree maps with pluggable balancing for Rust.
//!
//! This crate provides [`TreeMap`], an ordered map stored as a binary search tree whose
//! shape is maintained by a balancing strategy chosen at the type level:
//!
//! - [`AvlTreeMap`] - height-balanced; every node's subtrees differ in height by at most one
//! - [`RbTreeMap`] - color-balanced (red-black); no path is more than twice as long as another
//! - [`BstMap`] - the plain, unbalanced search tree the other two are built on
//!
//! All three share the same operations: insertion, lookup, removal, four traversal orders,
//! shape predicates, and a diagnostic tree rendering.
//!
//! # Example
//!
//! ```
//! use balanced_bst::{AvlTreeMap, Traversal};
//!
//! let mut tree = AvlTreeMap::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.get(&4), Ok(&40));
//! assert_eq!(tree.height(), Ok(2));
//! assert!(tree.is_perfect());
//!
//! let keys: Vec<_> = tree.keys(Traversal::LevelOrder).copied().collect();
//! assert_eq!(keys, [5, 3, 8, 1, 4, 7, 9]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`; the default `std` feature only forwards
//!   to dependencies
//! - **Arena storage** - Nodes live in a slot arena and link to each other by index, so parent
//!   back-references never own anything and dropping a tree never recurses
//! - **Iterative algorithms** - Traversals and fix-ups walk parent links instead of recursing
//!
//! # Implementation
//!
//! Insertions and removals first perform the unconstrained search tree mutation, then hand
//! the touched position to the strategy's fix-up routine, which walks toward the root
//! applying rotations (and, for red-black trees, recoloring) until its invariant holds again.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;
mod traversal;

pub mod balance;
pub mod tree_map;

pub use balance::{Avl, Balance, Color, RedBlack, Unbalanced};
pub use error::{TreeError, Violation};
pub use traversal::{Traversal, TreeLayout};
pub use tree_map::{AvlTreeMap, BstMap, RbTreeMap, TreeMap};
