use crate::error::CollectionError;

use super::Cursor;

/// Cursor yielding the elements of `source` accepted by `predicate`.
///
/// The next accepted element is fetched eagerly: on construction, after each
/// `next`, and on `rewind`. `has_next` is therefore O(1).
pub struct Filter<C: Cursor, P> {
    source: C,
    predicate: P,
    pending: Option<C::Item>,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(source: C, predicate: P) -> Self {
        let mut filter = Self {
            source,
            predicate,
            pending: None,
        };
        filter.advance();
        filter
    }

    fn advance(&mut self) {
        self.pending = None;
        while self.source.has_next() {
            let Ok(item) = self.source.next() else {
                break;
            };
            if (self.predicate)(&item) {
                self.pending = Some(item);
                break;
            }
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    fn next(&mut self) -> Result<C::Item, CollectionError> {
        let item = self
            .pending
            .take()
            .ok_or(CollectionError::ExhaustedIteration)?;
        self.advance();
        Ok(item)
    }

    fn rewind(&mut self) {
        self.source.rewind();
        self.advance();
    }
}
