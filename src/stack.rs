use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::linked_list::SinglyLinkedList;

/// A LIFO stack on top of a singly linked list.
///
/// The head of the list is the top of the stack, so `push` and `pop` are
/// `prepend` and `delete_head`.
pub struct Stack<T> {
    list: SinglyLinkedList<T>,
}

impl<T: PartialOrd> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }
}

impl<T> Stack<T> {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.head().map(|node| node.value())
    }

    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.delete_head().map(|node| node.into_value())
    }

    /// Values from top to bottom.
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

impl<T: PartialOrd> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}
