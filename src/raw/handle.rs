use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of an arena slot, stored off by one so that `Option<Handle>` needs no extra space.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) fn new(slot: usize) -> Self {
        match RawHandle::try_from(slot + 1).ok().and_then(NonZero::new) {
            Some(raw) => Self(raw),
            None => panic!("`Handle::new()` - slot {slot} > `Handle::MAX`!"),
        }
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
