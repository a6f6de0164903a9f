use std::marker::PhantomData;

use crate::entry::Entry;
use crate::error::CollectionError;
use crate::iter::Cursor;
use crate::types::EntryNode;
use crate::util::{first, next};

/// In-order (ascending key) cursor over an arena tree.
pub struct InOrder<'a, K, V, N> {
    arena: &'a [N],
    root: Option<u32>,
    next: Option<u32>,
    _kv: PhantomData<&'a (K, V)>,
}

impl<'a, K, V, N> InOrder<'a, K, V, N>
where
    N: EntryNode<K, V>,
{
    pub fn new(arena: &'a [N], root: Option<u32>) -> Self {
        Self {
            arena,
            root,
            next: first(arena, root),
            _kv: PhantomData,
        }
    }
}

impl<K, V, N> Clone for InOrder<'_, K, V, N> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            root: self.root,
            next: self.next,
            _kv: PhantomData,
        }
    }
}

impl<'a, K, V, N> Cursor for InOrder<'a, K, V, N>
where
    N: EntryNode<K, V>,
{
    type Item = &'a Entry<K, V>;

    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn next(&mut self) -> Result<&'a Entry<K, V>, CollectionError> {
        let arena = self.arena;
        let curr = self.next.ok_or(CollectionError::ExhaustedIteration)?;
        self.next = next(arena, curr);
        Ok(arena[curr as usize].entry())
    }

    fn rewind(&mut self) {
        self.next = first(self.arena, self.root);
    }
}
