use super::TreeMap;
use crate::balance::Balance;
use crate::error::{TreeError, Violation};

impl<K, V, B: Balance> TreeMap<K, V, B> {
    /// Returns the height of the tree: the number of edges on the longest path from the
    /// root down to a leaf. A map with a single entry has height 0.
    ///
    /// AVL trees keep every subtree's height in its root, so this is O(1) for them and
    /// O(n) for the other strategies.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{BstMap, TreeError};
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), Err(TreeError::EmptyTree));
    ///
    /// for key in 1..=4 {
    ///     map.insert(key, ());
    /// }
    /// // Ascending keys on an unbalanced tree form a chain.
    /// assert_eq!(map.height(), Ok(3));
    /// ```
    pub fn height(&self) -> Result<usize, TreeError> {
        let root = self.raw.root().ok_or(TreeError::EmptyTree)?;
        if let Some(height) = B::subtree_height(self.raw.meta(root)) {
            return Ok(height);
        }
        usize::try_from(self.raw.shape().height).map_err(|_| TreeError::EmptyTree)
    }

    /// Returns `true` if the heights of every node's two subtrees differ by at most one.
    ///
    /// The check walks the whole tree and does not rely on any balancing bookkeeping.
    /// An empty map is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{AvlTreeMap, BstMap};
    ///
    /// let chain = BstMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert!(!chain.is_balanced());
    ///
    /// let avl = AvlTreeMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert!(avl.is_balanced());
    /// ```
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.raw.shape().balanced
    }

    /// Returns `true` if every node has either zero or two children.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::BstMap;
    ///
    /// let mut map = BstMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert!(map.is_full());
    /// map.insert(4, ());
    /// assert!(!map.is_full());
    /// ```
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.raw.shape().full
    }

    /// Returns `true` if every level is filled, except possibly the last, whose nodes are
    /// packed to the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::BstMap;
    ///
    /// let left_leaning = BstMap::from([(2, ()), (1, ())]);
    /// assert!(left_leaning.is_complete());
    ///
    /// let right_leaning = BstMap::from([(1, ()), (2, ())]);
    /// assert!(!right_leaning.is_complete());
    /// ```
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.raw.shape().complete
    }

    /// Returns `true` if every internal node has two children and all leaves are at the
    /// same depth, i.e. the map holds exactly `2^(height + 1) - 1` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<_, _> = (1..=7).map(|key| (key, ())).collect();
    /// assert!(map.is_perfect());
    /// map.insert(8, ());
    /// assert!(!map.is_perfect());
    /// ```
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.raw.shape().perfect
    }

    /// Checks the map's structural invariants.
    ///
    /// Verifies that keys are in strictly ascending order, that parent and child links
    /// agree, that [`len`](TreeMap::len) matches the number of reachable entries, and
    /// finally the balancing strategy's own invariant: stored heights and balance factors
    /// for [`Avl`](crate::Avl), the coloring rules for [`RedBlack`](crate::RedBlack).
    ///
    /// A map built through the public API always passes; this is a diagnostic for tests.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut map: RbTreeMap<_, _> = (0..100).map(|key| (key, key)).collect();
    /// for key in (0..100).step_by(3) {
    ///     map.remove(&key).unwrap();
    /// }
    /// assert_eq!(map.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), Violation>
    where
        K: Ord,
    {
        self.raw.validate()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{AvlTreeMap, BstMap, RbTreeMap, TreeError};

    #[test]
    fn empty_map_has_every_shape_but_no_height() {
        let map: RbTreeMap<u8, ()> = RbTreeMap::new();
        assert_eq!(map.height(), Err(TreeError::EmptyTree));
        assert!(map.is_balanced());
        assert!(map.is_full());
        assert!(map.is_complete());
        assert!(map.is_perfect());
    }

    #[test]
    fn height_agrees_across_strategies_for_the_same_shape() {
        // Inserting level by level builds the same perfect tree under every strategy.
        let keys = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15];
        let bst: BstMap<_, _> = keys.iter().map(|&key| (key, ())).collect();
        let avl: AvlTreeMap<_, _> = keys.iter().map(|&key| (key, ())).collect();
        let rb: RbTreeMap<_, _> = keys.iter().map(|&key| (key, ())).collect();
        assert_eq!(bst.height(), Ok(3));
        assert_eq!(avl.height(), Ok(3));
        assert_eq!(rb.height(), Ok(3));
        assert!(bst.is_perfect() && avl.is_perfect() && rb.is_perfect());
    }

    #[test]
    fn single_entry_has_height_zero() {
        let map = AvlTreeMap::from([(1, ())]);
        assert_eq!(map.height(), Ok(0));
        let map = BstMap::from([(1, ())]);
        assert_eq!(map.height(), Ok(0));
    }
}
