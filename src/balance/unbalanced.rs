use super::{Balance, sealed};
use crate::raw::{Handle, RawTree, Vacancy};

/// No balancing: the tree keeps whatever shape the insertion order gives it.
///
/// Sorted input degrades it to a linked list of height `n - 1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Unbalanced;

impl sealed::Sealed for Unbalanced {}

impl Balance for Unbalanced {
    type Meta = ();

    const LEAF: () = ();

    fn after_insert<K, V>(_tree: &mut RawTree<K, V, Self>, _inserted: Handle) {}

    fn after_remove<K, V>(_tree: &mut RawTree<K, V, Self>, _vacancy: Vacancy<()>) {}
}
