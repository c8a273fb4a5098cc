//! Fixed-capacity circular window over boundary data
//!
//! The window is a ring over a preallocated slice. Pushing into a full
//! window silently evicts the oldest entry, so a scan never allocates
//! inside its per-character loop.

/// Fixed-capacity FIFO that evicts its oldest entry on overflow
#[derive(Debug, Clone)]
pub struct CircularWindow<T> {
    /// Preallocated storage, never resized
    buffer: Box<[T]>,
    /// Index of the oldest (leftmost) entry
    head: usize,
    /// Number of live entries
    len: usize,
}

impl<T: Copy + Default> CircularWindow<T> {
    /// Create an empty window holding at most `capacity` entries
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![T::default(); capacity.max(1)].into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window holds `capacity` entries
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Check if the window holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value, evicting the oldest entry first when full
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.pop();
        }
        let slot = (self.head + self.len) % self.buffer.len();
        self.buffer[slot] = value;
        self.len += 1;
    }

    /// Remove the oldest entry; no-op on an empty window
    pub fn pop(&mut self) {
        if !self.is_empty() {
            self.head = (self.head + 1) % self.buffer.len();
            self.len -= 1;
        }
    }

    /// Oldest entry, if any
    pub fn front(&self) -> Option<T> {
        self.get(0)
    }

    /// Entry at `index`, counted from the oldest
    pub fn get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| self.buffer[(self.head + index) % self.buffer.len()])
    }

    /// Iterate entries oldest to newest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            window: self,
            index: 0,
        }
    }

    /// Split into the leftmost entry and the remaining entries
    ///
    /// Does not mutate the window. Returns `None` when empty.
    pub fn extract(&self) -> Option<(T, Iter<'_, T>)> {
        let left = self.front()?;
        Some((
            left,
            Iter {
                window: self,
                index: 1,
            },
        ))
    }

    /// Drop all entries, keeping the storage
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

/// Iterator over a window's entries in insertion order
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    window: &'a CircularWindow<T>,
    index: usize,
}

impl<T: Copy + Default> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.window.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Copy + Default> ExactSizeIterator for Iter<'_, T> {}
