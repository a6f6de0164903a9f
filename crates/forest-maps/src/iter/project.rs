use crate::entry::Entry;
use crate::error::CollectionError;

use super::Cursor;

/// Projects an entry cursor onto its keys.
#[derive(Clone, Debug)]
pub struct Keys<C> {
    entries: C,
}

impl<C> Keys<C> {
    pub fn new(entries: C) -> Self {
        Self { entries }
    }
}

impl<'a, C, K: 'a, V: 'a> Cursor for Keys<C>
where
    C: Cursor<Item = &'a Entry<K, V>>,
{
    type Item = &'a K;

    fn has_next(&self) -> bool {
        self.entries.has_next()
    }

    fn next(&mut self) -> Result<&'a K, CollectionError> {
        self.entries.next().map(Entry::key)
    }

    fn rewind(&mut self) {
        self.entries.rewind();
    }
}

/// Projects an entry cursor onto its values.
#[derive(Clone, Debug)]
pub struct Values<C> {
    entries: C,
}

impl<C> Values<C> {
    pub fn new(entries: C) -> Self {
        Self { entries }
    }
}

impl<'a, C, K: 'a, V: 'a> Cursor for Values<C>
where
    C: Cursor<Item = &'a Entry<K, V>>,
{
    type Item = &'a V;

    fn has_next(&self) -> bool {
        self.entries.has_next()
    }

    fn next(&mut self) -> Result<&'a V, CollectionError> {
        self.entries.next().map(Entry::value)
    }

    fn rewind(&mut self) {
        self.entries.rewind();
    }
}
