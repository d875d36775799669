//! Heap configuration

/// Capacity parameters of an [`IndexedPriorityHeap`].
///
/// [`IndexedPriorityHeap`]: crate::IndexedPriorityHeap
///
/// ```
/// use indexed_priority_heap::HeapConfig;
///
/// const CFG: HeapConfig = HeapConfig::new()
///     .with_initial_capacity(64)
///     .with_max_capacity(1024);
///
/// assert_eq!(CFG.initial_capacity(), 64);
/// assert_eq!(CFG.max_capacity(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapConfig {
    initial_capacity: usize,
    max_capacity: usize,
}

impl HeapConfig {
    /// The value of [`Self::max_capacity`] indicating the heap can grow as
    /// long as the backing store allows.
    pub const UNBOUNDED: usize = usize::MAX;

    /// The default configuration: no initial reservation, no capacity limit.
    pub const DEFAULT: Self = Self {
        initial_capacity: 0,
        max_capacity: Self::UNBOUNDED,
    };

    /// Construct the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the number of elements to reserve room for on construction. This
    /// is a sizing hint, not a limit.
    #[inline]
    pub const fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..self
        }
    }

    /// Set the maximum number of elements the heap can hold. Pushing beyond
    /// this fails with [`PushError::CapacityExceeded`].
    ///
    /// [`PushError::CapacityExceeded`]: crate::PushError::CapacityExceeded
    #[inline]
    pub const fn with_max_capacity(self, max_capacity: usize) -> Self {
        Self {
            max_capacity,
            ..self
        }
    }

    /// Get the initial capacity.
    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Get the maximum capacity.
    #[inline]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Get the number of elements to actually reserve room for. A reservation
    /// larger than the maximum capacity would be wasted.
    #[inline]
    pub(crate) const fn reservation(&self) -> usize {
        if self.initial_capacity < self.max_capacity {
            self.initial_capacity
        } else {
            self.max_capacity
        }
    }
}

impl Default for HeapConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let cfg = HeapConfig::default();
        assert_eq!(cfg, HeapConfig::new());
        assert_eq!(cfg.initial_capacity(), 0);
        assert_eq!(cfg.max_capacity(), HeapConfig::UNBOUNDED);
    }

    #[test]
    fn reservation_is_clamped() {
        let cfg = HeapConfig::new()
            .with_initial_capacity(100)
            .with_max_capacity(10);
        assert_eq!(cfg.reservation(), 10);
        assert_eq!(cfg.with_max_capacity(1000).reservation(), 100);
    }
}
