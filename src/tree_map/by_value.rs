//! Lookups by value. The tree is ordered by key, so each of these scans entries in key order.

use core::borrow::Borrow;

use super::TreeMap;
use crate::balance::Balance;
use crate::error::TreeError;
use crate::traversal::Traversal;

impl<K, V, B: Balance> TreeMap<K, V, B> {
    /// Returns `true` if some entry holds `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert!(map.contains_value(&"b"));
    /// assert!(!map.contains_value(&"c"));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.raw.position(Traversal::InOrder, |stored| stored == value).is_some()
    }

    /// Returns `true` if the map holds `key` and its value equals `value`.
    ///
    /// Unlike [`contains_value`](TreeMap::contains_value) this descends by key.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::BstMap;
    ///
    /// let map = BstMap::from([(1, "a"), (2, "b")]);
    /// assert!(map.contains_entry(&1, &"a"));
    /// assert!(!map.contains_entry(&1, &"b"));
    /// assert!(!map.contains_entry(&3, &"a"));
    /// ```
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
        V: PartialEq,
    {
        self.get(key).is_ok_and(|stored| stored == value)
    }

    /// Returns the smallest key whose entry holds `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no entry holds `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{RbTreeMap, TreeError};
    ///
    /// let map = RbTreeMap::from([(3, "odd"), (1, "odd"), (2, "even")]);
    /// assert_eq!(map.key_of(&"odd"), Ok(&1));
    /// assert_eq!(map.key_of(&"none"), Err(TreeError::KeyNotFound));
    /// ```
    pub fn key_of(&self, value: &V) -> Result<&K, TreeError>
    where
        V: PartialEq,
    {
        let handle = self
            .raw
            .position(Traversal::InOrder, |stored| stored == value)
            .ok_or(TreeError::KeyNotFound)?;
        Ok(self.raw.entry(handle).0)
    }

    /// Removes the entry with the smallest key whose value equals `value`, returning that
    /// key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no entry holds `value`; the map is then left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(3, "odd"), (1, "odd"), (2, "even")]);
    /// assert_eq!(map.remove_value(&"odd"), Ok(1));
    /// assert_eq!(map.remove_value(&"odd"), Ok(3));
    /// assert!(map.remove_value(&"odd").is_err());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_value(&mut self, value: &V) -> Result<K, TreeError>
    where
        V: PartialEq,
    {
        let handle = self
            .raw
            .position(Traversal::InOrder, |stored| stored == value)
            .ok_or(TreeError::KeyNotFound)?;
        let (key, _) = self.raw.remove_handle(handle);
        Ok(key)
    }
}
