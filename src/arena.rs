//! Slot storage for tree nodes. Nodes refer to each other through [`Handle`]s instead of
//! pointers so parent links never own anything and there are no reference cycles.

/// A stable index into an [`Arena`]. A handle stays valid until the element it names is
/// taken out of the arena; after that the slot (and the handle) may be reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Handle(usize);

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live elements.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(h) = self.free.pop() {
            // Reuse a free slot/handle.
            self.slots[h.0] = Some(element);
            h
        } else {
            self.slots.push(Some(element));
            Handle(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.0]
            .as_ref()
            .expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.0]
            .as_mut()
            .expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.0]
            .take()
            .expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    /// Drops every element. This is a flat walk over the slots so it never recurses, no matter
    /// how deep the tree stored in here is.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
