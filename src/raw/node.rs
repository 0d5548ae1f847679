use super::handle::Handle;

/// Which child link of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A key/value pair with its links and the balancing strategy's bookkeeping `M`.
///
/// The child links are the tree's ownership edges. The parent link is a plain back-reference
/// that is only read by upward walks.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V, M> {
    key: K,
    value: V,
    meta: M,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V, M: Copy> Node<K, V, M> {
    /// Creates a detached leaf hanging from `parent`.
    pub(crate) const fn new(key: K, value: V, meta: M, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            meta,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn replace_value(&mut self, value: V) -> V {
        core::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) const fn meta(&self) -> M {
        self.meta
    }

    #[inline]
    pub(crate) fn set_meta(&mut self, meta: M) {
        self.meta = meta;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Returns which side `child` hangs from, or `None` if it is not a child of this node.
    pub(crate) fn side_of_child(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Exchanges keys and values with `other`, leaving links and metadata in place.
    pub(crate) fn swap_payload(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.key, &mut other.key);
        core::mem::swap(&mut self.value, &mut other.value);
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
