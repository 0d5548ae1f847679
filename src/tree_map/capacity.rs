use super::TreeMap;
use crate::balance::Balance;
use crate::raw::RawTree;

impl<K, V, B: Balance> TreeMap<K, V, B> {
    /// Creates an empty map with room for at least `capacity` entries before the node
    /// arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = AvlTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeMap {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// Slots freed by removals are reused before the arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::with_capacity(4);
    /// let capacity = map.capacity();
    /// map.insert(1, "a");
    /// map.remove(&1).unwrap();
    /// map.insert(2, "b");
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
