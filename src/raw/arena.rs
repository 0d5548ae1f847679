use alloc::vec::Vec;

use super::handle::Handle;

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    // Vacant slots form an intrusive free list, most recently freed first.
    Vacant { next_free: Option<Handle> },
}

/// Slot storage for tree nodes. Handles stay valid until the element is taken.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        let handle = if let Some(handle) = self.free_head {
            let slot = &mut self.slots[handle.slot()];
            self.free_head = match slot {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => panic!("`Arena::alloc()` - free list points at an occupied slot!"),
            };
            *slot = Slot::Occupied(element);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Slot::Occupied(element));
            Handle::new(self.slots.len() - 1)
        };
        self.len += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant { .. } => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    /// Borrows two distinct elements mutably at once.
    pub(crate) fn get_pair_mut(&mut self, a: Handle, b: Handle) -> (&mut T, &mut T) {
        assert_ne!(a, b, "`Arena::get_pair_mut()` - handles must be distinct!");
        let (low, high, swapped) = if a.slot() < b.slot() { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(high.slot());
        let pair = match (&mut head[low.slot()], &mut tail[0]) {
            (Slot::Occupied(first), Slot::Occupied(second)) => (first, second),
            _ => panic!("`Arena::get_pair_mut()` - `handle` is invalid!"),
        };
        if swapped { (pair.1, pair.0) } else { pair }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.slot()];
        match core::mem::replace(slot, Slot::Vacant { next_free: self.free_head }) {
            Slot::Occupied(element) => {
                self.free_head = Some(handle);
                self.len -= 1;
                element
            }
            vacant @ Slot::Vacant { .. } => {
                *slot = vacant;
                panic!("`Arena::take()` - `handle` is invalid!");
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32> = Arena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
        assert!(arena.is_empty());
    }

    #[test]
    fn freed_slots_are_reused_most_recent_first() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        let _c = arena.alloc('c');

        assert_eq!(arena.take(a), 'a');
        assert_eq!(arena.take(b), 'b');
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.alloc('d'), b);
        assert_eq!(arena.alloc('e'), a);
        assert_eq!(*arena.get(b), 'd');
        assert_eq!(*arena.get(a), 'e');
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn pair_mut_respects_argument_order() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);

        let (x, y) = arena.get_pair_mut(b, a);
        assert_eq!((*x, *y), (2, 1));
        core::mem::swap(x, y);

        assert_eq!(*arena.get(a), 2);
        assert_eq!(*arena.get(b), 1);
    }

    #[test]
    #[should_panic(expected = "`Arena::get()` - `handle` is invalid!")]
    fn get_after_take_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.take(a);
        let _ = arena.get(a);
    }

    #[test]
    #[should_panic(expected = "`Arena::get_pair_mut()` - handles must be distinct!")]
    fn pair_mut_same_handle_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let _ = arena.get_pair_mut(a, a);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.alloc(value);
                        prop_assert!(model.iter().all(|&(h, _)| h != handle), "live handle handed out twice");
                        model.push((handle, value));
                    }
                    Operation::GetMut(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (handle, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.take(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());

                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        GetMut(usize, u32),
        Take(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::GetMut(which, value)),
            8 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }
}
