//! # Fixed-Capacity Object Pool
//!
//! Pre-allocated slot storage for objects that churn every frame (particles,
//! popups, transient effects). All memory is allocated once at construction;
//! acquire and release are O(1) free-list operations and saturation simply
//! returns `None` - dropped work, not an error.

/// Handle to an acquired slot in a [`Pool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    /// Index into the pool.
    index: usize,
}

impl SlotHandle {
    /// Raw slot index (stable for the lifetime of the pool).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// Occupancy snapshot of a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slots currently acquired.
    pub active: usize,
    /// Slots currently free.
    pub available: usize,
    /// Total slots. Always `active + available`.
    pub capacity: usize,
}

/// A pool of reusable slots holding values of type `T`.
///
/// Slots are constructed once (via `Default`) and then mutated in place by
/// callers; releasing a slot does not drop or move the value, it only marks
/// the slot free for reuse.
///
/// # Thread Safety
///
/// Not thread-safe. The engine's concurrency model is single-writer-per-tick
/// on one thread; wrap in a mutex if you need more.
pub struct Pool<T> {
    /// Slot storage, fixed at construction.
    slots: Box<[T]>,
    /// Per-slot occupancy flags.
    occupied: Box<[bool]>,
    /// Indices of free slots.
    free_list: Vec<usize>,
    /// Number of occupied slots.
    active_count: usize,
}

impl<T: Default> Pool<T> {
    /// Creates a pool with `capacity` default-constructed slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        let slots: Vec<T> = (0..capacity).map(|_| T::default()).collect();
        let free_list: Vec<usize> = (0..capacity).rev().collect();

        Self {
            slots: slots.into_boxed_slice(),
            occupied: vec![false; capacity].into_boxed_slice(),
            free_list,
            active_count: 0,
        }
    }
}

impl<T> Pool<T> {
    /// Total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of acquired slots.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// Acquires a free slot, or `None` when saturated.
    ///
    /// The slot's previous contents are untouched; callers reset the fields
    /// they care about.
    pub fn acquire(&mut self) -> Option<SlotHandle> {
        let index = self.free_list.pop()?;
        self.occupied[index] = true;
        self.active_count += 1;
        Some(SlotHandle { index })
    }

    /// Releases a slot back to the pool.
    ///
    /// Idempotent: releasing an already-free or out-of-range handle is a
    /// no-op returning false.
    pub fn release(&mut self, handle: SlotHandle) -> bool {
        if handle.index >= self.slots.len() || !self.occupied[handle.index] {
            return false;
        }

        self.occupied[handle.index] = false;
        self.free_list.push(handle.index);
        self.active_count -= 1;
        true
    }

    /// Reference to an acquired slot's value.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        if *self.occupied.get(handle.index)? {
            self.slots.get(handle.index)
        } else {
            None
        }
    }

    /// Mutable reference to an acquired slot's value.
    #[inline]
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        if *self.occupied.get(handle.index)? {
            self.slots.get_mut(handle.index)
        } else {
            None
        }
    }

    /// True while the handle refers to an acquired slot.
    #[inline]
    #[must_use]
    pub fn is_active(&self, handle: SlotHandle) -> bool {
        self.occupied.get(handle.index).copied().unwrap_or(false)
    }

    /// Releases every slot. No memory is freed.
    pub fn clear(&mut self) {
        for flag in self.occupied.iter_mut() {
            *flag = false;
        }
        self.free_list.clear();
        self.free_list.extend((0..self.slots.len()).rev());
        self.active_count = 0;
    }

    /// Occupancy snapshot. `active + available == capacity` always holds.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            active: self.active_count,
            available: self.slots.len() - self.active_count,
            capacity: self.slots.len(),
        }
    }

    /// Iterates over acquired slots.
    pub fn iter(&self) -> impl Iterator<Item = (SlotHandle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(index, _)| self.occupied[*index])
            .map(|(index, value)| (SlotHandle { index }, value))
    }

    /// Iterates mutably over acquired slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotHandle, &mut T)> {
        let occupied = &self.occupied;
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(index, _)| occupied[*index])
            .map(|(index, value)| (SlotHandle { index }, value))
    }
}
