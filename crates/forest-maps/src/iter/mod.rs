//! Rewindable external cursors.
//!
//! A [`Cursor`] is checked with `has_next`, advanced with `next` and reset
//! with `rewind`. It never consumes or mutates its source. Cursors borrow the
//! collection they walk, so the collection cannot be structurally modified
//! while a cursor over it is alive; callers that keep indices or clones
//! around a mutation must create a fresh cursor afterwards.
//!
//! Compositions:
//! - [`Filter`] pre-fetches the next element accepted by a predicate.
//! - [`Keys`] / [`Values`] project an entry cursor onto one component.
//! - [`ArrayCursor`] walks a prefix of a slice.
//!
//! [`Cursor::iter`] bridges any cursor into a `std::iter::Iterator`.

pub mod array;
pub mod filter;
pub mod project;

use crate::error::CollectionError;

pub use array::ArrayCursor;
pub use filter::Filter;
pub use project::{Keys, Values};

pub trait Cursor {
    type Item;

    /// `true` iff `next` would return an element.
    fn has_next(&self) -> bool;

    /// Returns the current element and advances.
    ///
    /// Fails with [`CollectionError::ExhaustedIteration`] when `has_next` is
    /// `false`.
    #[allow(clippy::should_implement_trait)]
    fn next(&mut self) -> Result<Self::Item, CollectionError>;

    /// Restarts the iteration from the first element.
    fn rewind(&mut self);

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

/// `std::iter::Iterator` view over a [`Cursor`].
#[derive(Clone, Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            return None;
        }
        self.cursor.next().ok()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CollectionError> {
        (**self).next()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CollectionError> {
        (**self).next()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}
