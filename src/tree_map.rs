//! An ordered map stored as a binary search tree with a pluggable balancing strategy.

use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::balance::{Avl, Balance, RedBlack, Unbalanced};
use crate::error::TreeError;
use crate::raw::{RawTree, Side, Walk};
use crate::traversal::{Traversal, TreeLayout};

mod by_value;
mod capacity;
mod shape;

/// An ordered map based on a [binary search tree], balanced by the strategy `B`.
///
/// Given a key type with a [total order], the map keeps its entries sorted by key. Every
/// entry lives in its own tree node; after each insertion or removal the strategy restores
/// its invariant with rotations (and, for [`RedBlack`], recoloring), so lookups take
/// O(log n) comparisons for [`Avl`] and [`RedBlack`].
///
/// The strategy is usually picked through one of the aliases:
///
/// - [`AvlTreeMap`] - heights of sibling subtrees differ by at most one
/// - [`RbTreeMap`] - red-black coloring; no path is more than twice as long as another
/// - [`BstMap`] - no balancing at all
///
/// Unlike [`BTreeMap`](alloc::collections::BTreeMap), the tree's shape is observable:
/// entries can be walked in any of the four [`Traversal`] orders, the shape can be queried
/// with [`TreeMap::height`] and [`TreeMap::is_perfect`] and friends, and the whole tree can
/// be drawn with [`TreeMap::to_tree_string`].
///
/// Lookups that miss return [`TreeError::KeyNotFound`] instead of `None`.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `TreeMap` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use balanced_bst::{RbTreeMap, TreeError, Traversal};
///
/// let mut movie_reviews = RbTreeMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// assert!(!movie_reviews.contains_key("Les Miserables"));
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// assert!(movie_reviews.remove("The Blues Brothers").is_ok());
/// assert_eq!(movie_reviews.remove("The Blues Brothers"), Err(TreeError::KeyNotFound));
///
/// // look up the values associated with some keys.
/// for movie in ["Up!", "Office Space"] {
///     match movie_reviews.get(movie) {
///         Ok(review) => println!("{movie}: {review}"),
///         Err(_) => println!("{movie} is unreviewed."),
///     }
/// }
///
/// // Look up the value for a key (will panic if the key is not found).
/// println!("Movie review: {}", movie_reviews["Office Space"]);
///
/// // iterate over everything in key order.
/// for (movie, review) in &movie_reviews {
///     println!("{movie}: \"{review}\"");
/// }
///
/// // or in any other traversal order.
/// let root_first: Vec<_> = movie_reviews.keys(Traversal::PreOrder).collect();
/// assert_eq!(root_first[0], &"Pulp Fiction");
/// ```
///
/// A `TreeMap` with a known list of items can be initialized from an array:
///
/// ```
/// use balanced_bst::AvlTreeMap;
///
/// let solar_distance = AvlTreeMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.height(), Ok(2));
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct TreeMap<K, V, B: Balance = Avl> {
    raw: RawTree<K, V, B>,
}

/// A [`TreeMap`] without balancing.
pub type BstMap<K, V> = TreeMap<K, V, Unbalanced>;

/// A [`TreeMap`] balanced as an AVL tree.
pub type AvlTreeMap<K, V> = TreeMap<K, V, Avl>;

/// A [`TreeMap`] balanced as a red-black tree.
pub type RbTreeMap<K, V> = TreeMap<K, V, RedBlack>;

/// An iterator over the entries of a `TreeMap` in a chosen [`Traversal`] order.
///
/// This `struct` is created by the [`iter`] method on [`TreeMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use balanced_bst::{BstMap, Traversal};
///
/// let map = BstMap::from([(2, "b"), (1, "a"), (3, "c")]);
/// let mut iter = map.iter(Traversal::PostOrder);
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next(), Some((&3, &"c")));
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: TreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, B: Balance> {
    tree: &'a RawTree<K, V, B>,
    walk: Walk,
    remaining: usize,
}

/// An owning iterator over the entries of a `TreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`TreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
///
/// ```
/// use balanced_bst::AvlTreeMap;
///
/// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.into_iter();
/// assert_eq!(iter.next(), Some((1, "a")));
/// assert_eq!(iter.next_back(), Some((2, "b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `TreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`TreeMap`].
///
/// [`keys`]: TreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, B: Balance> {
    inner: Iter<'a, K, V, B>,
}

/// An iterator over the values of a `TreeMap`.
///
/// This `struct` is created by the [`values`] method on [`TreeMap`].
///
/// [`values`]: TreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, B: Balance> {
    inner: Iter<'a, K, V, B>,
}

impl<K, V, B: Balance> TreeMap<K, V, B> {
    /// Makes a new, empty `TreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> TreeMap<K, V, B> {
        TreeMap { raw: RawTree::new() }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut a = RbTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not in the map.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{AvlTreeMap, TreeError};
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// assert_eq!(map.get(&2), Err(TreeError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, TreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// Useful for getting the `&K` stored in the map from a borrowed `&Q` lookup key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::BstMap;
    ///
    /// let map = BstMap::from([(String::from("apple"), 3)]);
    /// let (key, value) = map.get_key_value("apple").unwrap();
    /// assert_eq!((key.as_str(), *value), ("apple", 3));
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Result<(&K, &V), TreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find(key).ok_or(TreeError::KeyNotFound)?;
        Ok(self.raw.entry(handle))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "a");
    /// if let Ok(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, TreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find(key).ok_or(TreeError::KeyNotFound)?;
        Ok(self.raw.node_mut(handle).value_mut())
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned and the tree is
    /// rebalanced around the new node.
    ///
    /// If the map did have this key present, the value is updated in place and the old
    /// value is returned. The key is not updated and the tree's shape does not change.
    ///
    /// # Complexity
    ///
    /// O(h), where h is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not in the map; the map is then
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{RbTreeMap, TreeError};
    ///
    /// let mut map = RbTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Ok("a"));
    /// assert_eq!(map.remove(&1), Err(TreeError::KeyNotFound));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, TreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if the key is not in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Ok((1, "a")));
    /// assert!(map.remove_entry(&1).is_err());
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), TreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).ok_or(TreeError::KeyNotFound)
    }

    /// Returns the first key-value pair in the map.
    /// The key in this pair is the minimum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.edge(Side::Left).map(|handle| self.raw.entry(handle))
    }

    /// Returns the last key-value pair in the map.
    /// The key in this pair is the maximum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.edge(Side::Right).map(|handle| self.raw.entry(handle))
    }

    /// Removes and returns the first element in the map.
    /// The key of this element is the minimum key that was in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// while let Some((key, _val)) = map.pop_first() {
    ///     assert!(map.iter(Default::default()).all(|(k, _v)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_edge(Side::Left)
    }

    /// Removes and returns the last element in the map.
    /// The key of this element is the maximum key that was in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::RbTreeMap;
    ///
    /// let mut map = RbTreeMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.pop_last(), Some((2, "b")));
    /// assert_eq!(map.pop_last(), Some((1, "a")));
    /// assert_eq!(map.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_edge(Side::Right)
    }

    /// Gets an iterator over the entries of the map in the given traversal order.
    ///
    /// Depth-first orders walk parent links and need no extra memory; level order keeps a
    /// queue of the nodes discovered but not yet visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{AvlTreeMap, Traversal};
    ///
    /// let map = AvlTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    ///
    /// let in_order: Vec<_> = map.iter(Traversal::InOrder).map(|(k, _)| *k).collect();
    /// assert_eq!(in_order, [1, 2, 3]);
    ///
    /// let pre_order: Vec<_> = map.iter(Traversal::PreOrder).map(|(k, _)| *k).collect();
    /// assert_eq!(pre_order, [2, 1, 3]);
    /// ```
    pub fn iter(&self, order: Traversal) -> Iter<'_, K, V, B> {
        Iter {
            tree: &self.raw,
            walk: Walk::new(&self.raw, order),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map in the given traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{RbTreeMap, Traversal};
    ///
    /// let map = RbTreeMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys(Traversal::InOrder).copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self, order: Traversal) -> Keys<'_, K, V, B> {
        Keys { inner: self.iter(order) }
    }

    /// Gets an iterator over the values of the map in the given traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{RbTreeMap, Traversal};
    ///
    /// let map = RbTreeMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.values(Traversal::InOrder).copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self, order: Traversal) -> Values<'_, K, V, B> {
        Values { inner: self.iter(order) }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut a = AvlTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::AvlTreeMap;
    ///
    /// let mut a = AvlTreeMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Renders the tree as text, one node per line.
    ///
    /// Each key is printed with its [`Debug`](fmt::Debug) form, followed by the strategy's
    /// bookkeeping: ` (h=2)` for an AVL height, ` [R]` or ` [B]` for a red-black color.
    /// [`TreeLayout::Vertical`] draws the root first with box-drawing guides and lists a
    /// missing child as `∅`; [`TreeLayout::Horizontal`] lays the tree on its side. An empty
    /// map renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{RbTreeMap, TreeLayout};
    ///
    /// let map = RbTreeMap::from([(10, ()), (20, ()), (30, ())]);
    /// assert_eq!(map.to_tree_string(TreeLayout::Vertical), "20 [B]\n├── 10 [R]\n└── 30 [R]\n");
    /// assert_eq!(map.to_tree_string(TreeLayout::Horizontal), "    30 [R]\n20 [B]\n    10 [R]\n");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the key's `Debug` implementation returns an error.
    #[must_use]
    pub fn to_tree_string(&self, layout: TreeLayout) -> String
    where
        K: fmt::Debug,
    {
        let mut out = String::new();
        let rendered = match layout {
            TreeLayout::Vertical => self.raw.render_vertical(&mut out),
            TreeLayout::Horizontal => self.raw.render_horizontal(&mut out),
        };
        rendered.expect("a Debug implementation returned an error unexpectedly");
        out
    }
}

impl<K: Clone, V: Clone, B: Balance> Clone for TreeMap<K, V, B> {
    fn clone(&self) -> Self {
        TreeMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash, B: Balance> Hash for TreeMap<K, V, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq, B: Balance> PartialEq for TreeMap<K, V, B> {
    /// Two maps are equal when they hold the same entries, whatever their shapes.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter(Traversal::InOrder).eq(other.iter(Traversal::InOrder))
    }
}

impl<K: Eq, V: Eq, B: Balance> Eq for TreeMap<K, V, B> {}

impl<K: fmt::Debug, V: fmt::Debug, B: Balance> fmt::Debug for TreeMap<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter(Traversal::InOrder)).finish()
    }
}

impl<K: fmt::Debug, V, B: Balance> fmt::Display for TreeMap<K, V, B> {
    /// Draws the tree in the [`TreeLayout::Vertical`] layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.render_vertical(f)
    }
}

impl<K, V, B: Balance> Default for TreeMap<K, V, B> {
    fn default() -> Self {
        TreeMap::new()
    }
}

impl<K: Ord, V, B: Balance> FromIterator<(K, V)> for TreeMap<K, V, B> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, B: Balance> Extend<(K, V)> for TreeMap<K, V, B> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy, B: Balance> Extend<(&'a K, &'a V)> for TreeMap<K, V, B> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, B: Balance> IntoIterator for &'a TreeMap<K, V, B> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B>;

    /// Iterates in key order.
    fn into_iter(self) -> Iter<'a, K, V, B> {
        self.iter(Traversal::InOrder)
    }
}

impl<K, V, B: Balance> IntoIterator for TreeMap<K, V, B> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_in_order().into_iter(),
        }
    }
}

impl<K, Q, V, B> Index<&Q> for TreeMap<K, V, B>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
    B: Balance,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `TreeMap`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, B: Balance, const N: usize> From<[(K, V); N]> for TreeMap<K, V, B> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V, B: Balance> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let handle = self.walk.next(tree)?;
        self.remaining -= 1;
        Some(tree.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, B: Balance> ExactSizeIterator for Iter<'_, K, V, B> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, B: Balance> FusedIterator for Iter<'_, K, V, B> {}

impl<K, V, B: Balance> Clone for Iter<'_, K, V, B> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            walk: self.walk.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, B: Balance> fmt::Debug for Iter<'_, K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    /// Creates an empty `tree_map::IntoIter`.
    ///
    /// ```
    /// # use balanced_bst::tree_map;
    /// let iter: tree_map::IntoIter<u8, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V, B: Balance> Iterator for Keys<'a, K, V, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: Balance> ExactSizeIterator for Keys<'_, K, V, B> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, B: Balance> FusedIterator for Keys<'_, K, V, B> {}

impl<K, V, B: Balance> Clone for Keys<'_, K, V, B> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, B: Balance> fmt::Debug for Keys<'_, K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, B: Balance> Iterator for Values<'a, K, V, B> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, B: Balance> ExactSizeIterator for Values<'_, K, V, B> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, B: Balance> FusedIterator for Values<'_, K, V, B> {}

impl<K, V, B: Balance> Clone for Values<'_, K, V, B> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, B: Balance> fmt::Debug for Values<'_, K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
