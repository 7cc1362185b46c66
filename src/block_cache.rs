use crate::error::InspectError;
use log::debug;

/// Three-state result of a cache lookup or population
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus<T> {
    Pending,
    Loaded(T),
    Failed(InspectError),
}

impl<T> LoadStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadStatus::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&InspectError> {
        match self {
            LoadStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, InspectError>> for LoadStatus<T> {
    fn from(result: Result<T, InspectError>) -> Self {
        match result {
            Ok(value) => LoadStatus::Loaded(value),
            Err(err) => LoadStatus::Failed(err),
        }
    }
}

/// Fixed-capacity memoization table indexed by bank number.
///
/// Slots start `Pending` and settle exactly once; the table never grows and
/// out-of-range indices are ignored.
#[derive(Debug, Clone)]
pub struct BlockCache<T> {
    slots: Vec<LoadStatus<T>>,
}

impl<T: Clone> BlockCache<T> {
    pub fn new(capacity: usize) -> Self {
        BlockCache {
            slots: vec![LoadStatus::Pending; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<LoadStatus<T>> {
        self.slots.get(index).cloned()
    }

    /// Settle a pending slot. Returns false if the index is out of range or
    /// the slot already holds a result.
    pub fn set(&mut self, index: usize, value: LoadStatus<T>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_pending() => {
                *slot = value;
                true
            }
            Some(_) => {
                debug!("block cache slot {} already settled, write discarded", index);
                false
            }
            None => {
                debug!(
                    "block cache index {} out of range (capacity {})",
                    index,
                    self.slots.len()
                );
                false
            }
        }
    }

    /// Number of slots holding a result
    pub fn settled(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_pending()).count()
    }

    /// Indices still waiting to be populated
    pub fn pending(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_pending())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DisError;
    use test_log::test;

    #[test]
    fn test_new_cache_is_all_pending() {
        let cache: BlockCache<u32> = BlockCache::new(4);
        assert_eq!(cache.capacity(), 4);
        for i in 0..4 {
            assert_eq!(cache.get(i), Some(LoadStatus::Pending));
        }
        assert_eq!(cache.settled(), 0);
        assert_eq!(cache.pending(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut cache: BlockCache<u32> = BlockCache::new(2);
        assert_eq!(cache.get(2), None);
        assert_eq!(cache.get(usize::MAX), None);
        assert!(!cache.set(2, LoadStatus::Loaded(7)));
        assert!(!cache.set(usize::MAX, LoadStatus::Loaded(7)));
        assert_eq!(cache.capacity(), 2);
        assert_eq!(cache.settled(), 0);
    }

    #[test]
    fn test_settled_slot_never_overwritten() {
        let mut cache = BlockCache::new(3);
        assert!(cache.set(1, LoadStatus::Loaded("first")));
        assert!(!cache.set(1, LoadStatus::Loaded("second")));
        assert_eq!(cache.get(1), Some(LoadStatus::Loaded("first")));

        let failure = InspectError::Render(DisError::ChrSize);
        assert!(cache.set(0, LoadStatus::Failed(failure.clone())));
        assert!(!cache.set(0, LoadStatus::Loaded("late")));
        assert_eq!(cache.get(0), Some(LoadStatus::Failed(failure)));
        assert_eq!(cache.settled(), 2);
        assert_eq!(cache.pending(), vec![2]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut cache: BlockCache<Vec<u8>> = BlockCache::new(0);
        assert_eq!(cache.get(0), None);
        assert!(!cache.set(0, LoadStatus::Pending));
    }

    #[test]
    fn test_load_status_from_result() {
        let ok: LoadStatus<u8> = Ok(3).into();
        assert_eq!(ok.loaded(), Some(&3));
        let err: LoadStatus<u8> = Err(InspectError::Unknown).into();
        assert_eq!(err.error(), Some(&InspectError::Unknown));
    }
}
