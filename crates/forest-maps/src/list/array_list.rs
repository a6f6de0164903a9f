use crate::error::CollectionError;
use crate::iter::ArrayCursor;

use super::{check_insert_position, check_position, List};

/// Backing storage grows by this factor whenever it is full.
pub const FACTOR: usize = 2;

/// List over a contiguous buffer.
///
/// Appending is amortized O(1); insertion and removal at a position shift
/// the tail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayList<E> {
    elems: Vec<E>,
}

impl<E> ArrayList<E> {
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    pub fn with_capacity(dimension: usize) -> Self {
        Self {
            elems: Vec::with_capacity(dimension),
        }
    }

    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elems
    }

    fn grow_if_full(&mut self) {
        let capacity = self.elems.capacity();
        if self.elems.len() == capacity {
            let additional = (capacity * FACTOR).max(1) - capacity;
            self.elems.reserve_exact(additional);
        }
    }
}

impl<E> List<E> for ArrayList<E> {
    type Elements<'a>
        = ArrayCursor<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn size(&self) -> usize {
        self.elems.len()
    }

    fn get_first(&self) -> Result<&E, CollectionError> {
        self.elems.first().ok_or(CollectionError::EmptyList)
    }

    fn get_last(&self) -> Result<&E, CollectionError> {
        self.elems.last().ok_or(CollectionError::EmptyList)
    }

    fn get(&self, position: usize) -> Result<&E, CollectionError> {
        check_position(position, self.elems.len())?;
        Ok(&self.elems[position])
    }

    fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.elems.iter().position(|e| e == element)
    }

    fn add_first(&mut self, element: E) {
        self.grow_if_full();
        self.elems.insert(0, element);
    }

    fn add_last(&mut self, element: E) {
        self.grow_if_full();
        self.elems.push(element);
    }

    fn add(&mut self, position: usize, element: E) -> Result<(), CollectionError> {
        check_insert_position(position, self.elems.len())?;
        self.grow_if_full();
        self.elems.insert(position, element);
        Ok(())
    }

    fn remove_first(&mut self) -> Result<E, CollectionError> {
        if self.elems.is_empty() {
            return Err(CollectionError::EmptyList);
        }
        Ok(self.elems.remove(0))
    }

    fn remove_last(&mut self) -> Result<E, CollectionError> {
        self.elems.pop().ok_or(CollectionError::EmptyList)
    }

    fn remove(&mut self, position: usize) -> Result<E, CollectionError> {
        check_position(position, self.elems.len())?;
        Ok(self.elems.remove(position))
    }

    fn iterator<'a>(&'a self) -> ArrayCursor<'a, E>
    where
        E: 'a,
    {
        ArrayCursor::new(&self.elems, self.elems.len())
    }
}

impl<E> FromIterator<E> for ArrayList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_storage_when_full() {
        let mut list = ArrayList::with_capacity(2);
        list.add_last(1);
        list.add_last(2);
        assert_eq!(list.capacity(), 2);
        list.add_last(3);
        assert!(list.capacity() >= 4);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut list = ArrayList::with_capacity(0);
        list.add_first('a');
        assert_eq!(list.get_first(), Ok(&'a'));
    }
}
