use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::linked_list::SinglyLinkedList;

/// A FIFO queue on top of a singly linked list.
///
/// Values join at the tail of the list and leave from its head.
pub struct Queue<T> {
    list: SinglyLinkedList<T>,
}

impl<T: PartialOrd> Queue<T> {
    pub fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the front value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.head().map(|node| node.value())
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.append(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.delete_head().map(|node| node.into_value())
    }

    /// Values from front to back.
    pub fn to_array(&self) -> Vec<&T> {
        self.list.values().collect()
    }

    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.list.to_string_with(callback)
    }
}

impl<T: PartialOrd> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}
