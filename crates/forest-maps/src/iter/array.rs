use crate::error::CollectionError;

use super::Cursor;

/// Cursor over the first `count` elements of a slice.
#[derive(Clone, Debug)]
pub struct ArrayCursor<'a, E> {
    elems: &'a [E],
    count: usize,
    current: usize,
}

impl<'a, E> ArrayCursor<'a, E> {
    /// `count` is clamped to the slice length.
    pub fn new(elems: &'a [E], count: usize) -> Self {
        Self {
            elems,
            count: count.min(elems.len()),
            current: 0,
        }
    }
}

impl<'a, E> Cursor for ArrayCursor<'a, E> {
    type Item = &'a E;

    fn has_next(&self) -> bool {
        self.current < self.count
    }

    fn next(&mut self) -> Result<&'a E, CollectionError> {
        if !self.has_next() {
            return Err(CollectionError::ExhaustedIteration);
        }
        let elem = &self.elems[self.current];
        self.current += 1;
        Ok(elem)
    }

    fn rewind(&mut self) {
        self.current = 0;
    }
}
