use std::fmt;

use crate::error::CollectionError;
use crate::iter::Cursor;

use super::{check_insert_position, check_position, List};

type Link<E> = Option<Box<ListNode<E>>>;

pub struct ListNode<E> {
    element: E,
    next: Link<E>,
}

/// Forward-linked list with a head link and a length counter.
///
/// Operations at position `i` walk `i` links, so `add_last` and
/// `remove_last` are O(n).
pub struct SinglyLinkedList<E> {
    head: Link<E>,
    len: usize,
}

impl<E> SinglyLinkedList<E> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn node(&self, position: usize) -> Option<&ListNode<E>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..position {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    /// The link that holds (or would hold) the node at `position`.
    fn link_mut(&mut self, position: usize) -> Option<&mut Link<E>> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    fn invalid(&self, position: usize) -> CollectionError {
        CollectionError::InvalidPosition {
            position,
            size: self.len,
        }
    }
}

impl<E> Default for SinglyLinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for SinglyLinkedList<E> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<E> List<E> for SinglyLinkedList<E> {
    type Elements<'a>
        = LinkedCursor<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn size(&self) -> usize {
        self.len
    }

    fn get_first(&self) -> Result<&E, CollectionError> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(CollectionError::EmptyList)
    }

    fn get_last(&self) -> Result<&E, CollectionError> {
        let last = self.len.checked_sub(1).ok_or(CollectionError::EmptyList)?;
        self.get(last)
    }

    fn get(&self, position: usize) -> Result<&E, CollectionError> {
        check_position(position, self.len)?;
        self.node(position)
            .map(|node| &node.element)
            .ok_or_else(|| self.invalid(position))
    }

    fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.iterator().iter().position(|e| e == element)
    }

    fn add_first(&mut self, element: E) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { element, next }));
        self.len += 1;
    }

    fn add_last(&mut self, element: E) {
        let len = self.len;
        if let Some(link) = self.link_mut(len) {
            *link = Some(Box::new(ListNode {
                element,
                next: None,
            }));
            self.len += 1;
        }
    }

    fn add(&mut self, position: usize, element: E) -> Result<(), CollectionError> {
        check_insert_position(position, self.len)?;
        let invalid = self.invalid(position);
        let link = self.link_mut(position).ok_or(invalid)?;
        let next = link.take();
        *link = Some(Box::new(ListNode { element, next }));
        self.len += 1;
        Ok(())
    }

    fn remove_first(&mut self) -> Result<E, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyList);
        }
        self.remove(0)
    }

    fn remove_last(&mut self) -> Result<E, CollectionError> {
        let last = self.len.checked_sub(1).ok_or(CollectionError::EmptyList)?;
        self.remove(last)
    }

    fn remove(&mut self, position: usize) -> Result<E, CollectionError> {
        check_position(position, self.len)?;
        let invalid = self.invalid(position);
        let link = self.link_mut(position).ok_or(invalid.clone())?;
        let node = link.take().ok_or(invalid)?;
        let ListNode { element, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(element)
    }

    fn iterator<'a>(&'a self) -> LinkedCursor<'a, E>
    where
        E: 'a,
    {
        LinkedCursor {
            head: self.head.as_deref(),
            current: self.head.as_deref(),
        }
    }
}

impl<E> FromIterator<E> for SinglyLinkedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for element in iter {
            let node = tail.insert(Box::new(ListNode {
                element,
                next: None,
            }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<E: Clone> Clone for SinglyLinkedList<E> {
    fn clone(&self) -> Self {
        self.iterator().iter().cloned().collect()
    }
}

impl<E: fmt::Debug> fmt::Debug for SinglyLinkedList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iterator().iter()).finish()
    }
}

/// Cursor following the `next` links from the head.
pub struct LinkedCursor<'a, E> {
    head: Option<&'a ListNode<E>>,
    current: Option<&'a ListNode<E>>,
}

impl<E> Clone for LinkedCursor<'_, E> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            current: self.current,
        }
    }
}

impl<'a, E> Cursor for LinkedCursor<'a, E> {
    type Item = &'a E;

    fn has_next(&self) -> bool {
        self.current.is_some()
    }

    fn next(&mut self) -> Result<&'a E, CollectionError> {
        let node = self.current.ok_or(CollectionError::ExhaustedIteration)?;
        self.current = node.next.as_deref();
        Ok(&node.element)
    }

    fn rewind(&mut self) {
        self.current = self.head;
    }
}
