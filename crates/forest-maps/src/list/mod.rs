//! Positional sequences.
//!
//! Positions are zero-based. Access to the first or last element of an empty
//! list fails with [`CollectionError::EmptyList`]; a position outside the
//! valid range fails with [`CollectionError::InvalidPosition`]. `add` accepts
//! `0..=size`, every other positional operation `0..size`.

pub mod array_list;
pub mod singly_linked_list;

use crate::error::CollectionError;
use crate::iter::Cursor;

pub use array_list::ArrayList;
pub use singly_linked_list::{LinkedCursor, SinglyLinkedList};

pub trait List<E> {
    /// Element cursor returned by [`List::iterator`].
    type Elements<'a>: Cursor<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn get_first(&self) -> Result<&E, CollectionError>;

    fn get_last(&self) -> Result<&E, CollectionError>;

    fn get(&self, position: usize) -> Result<&E, CollectionError>;

    /// Position of the first element equal to `element`.
    fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq;

    fn add_first(&mut self, element: E);

    fn add_last(&mut self, element: E);

    fn add(&mut self, position: usize, element: E) -> Result<(), CollectionError>;

    fn remove_first(&mut self) -> Result<E, CollectionError>;

    fn remove_last(&mut self) -> Result<E, CollectionError>;

    fn remove(&mut self, position: usize) -> Result<E, CollectionError>;

    fn iterator<'a>(&'a self) -> Self::Elements<'a>
    where
        E: 'a;
}

pub(crate) fn check_position(position: usize, size: usize) -> Result<(), CollectionError> {
    if position < size {
        Ok(())
    } else {
        Err(CollectionError::InvalidPosition { position, size })
    }
}

pub(crate) fn check_insert_position(position: usize, size: usize) -> Result<(), CollectionError> {
    if position <= size {
        Ok(())
    } else {
        Err(CollectionError::InvalidPosition { position, size })
    }
}
