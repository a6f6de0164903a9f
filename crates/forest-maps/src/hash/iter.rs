use crate::entry::Entry;
use crate::error::CollectionError;
use crate::iter::Cursor;

use super::Slot;

/// Cursor over the occupied slots of a table, in array order.
///
/// `has_next` compares the number of entries already yielded against the
/// live count, so it never scans.
pub struct SlotCursor<'a, K, V> {
    slots: &'a [Slot<K, V>],
    count: usize,
    yielded: usize,
    index: usize,
}

impl<'a, K, V> SlotCursor<'a, K, V> {
    pub fn new(slots: &'a [Slot<K, V>], count: usize) -> Self {
        Self {
            slots,
            count,
            yielded: 0,
            index: 0,
        }
    }
}

impl<K, V> Clone for SlotCursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            count: self.count,
            yielded: self.yielded,
            index: self.index,
        }
    }
}

impl<'a, K, V> Cursor for SlotCursor<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn has_next(&self) -> bool {
        self.yielded < self.count
    }

    fn next(&mut self) -> Result<&'a Entry<K, V>, CollectionError> {
        if !self.has_next() {
            return Err(CollectionError::ExhaustedIteration);
        }
        let slots = self.slots;
        while let Some(slot) = slots.get(self.index) {
            self.index += 1;
            if let Slot::Occupied(entry) = slot {
                self.yielded += 1;
                return Ok(entry);
            }
        }
        Err(CollectionError::ExhaustedIteration)
    }

    fn rewind(&mut self) {
        self.yielded = 0;
        self.index = 0;
    }
}
