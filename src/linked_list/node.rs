use alloc::string::String;
use core::fmt;

use super::{
    store::NodeId,
    traits::{Link, LinkWithPrev, Node, NodeWithValue},
};

/// A node of a linked list: a link of kind `L` next to a value.
pub struct ListNode<L, T> {
    link: L,
    value: T,
}

impl<L: Default, T> ListNode<L, T> {
    /// Creates a detached node.
    pub fn new(value: T) -> Self {
        Self {
            link: L::default(),
            value,
        }
    }
}

impl<L, T> ListNode<L, T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Formats the value with `callback`.
    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: Fn(&T) -> String,
    {
        callback(&self.value)
    }
}

impl<L: Link, T> Link for ListNode<L, T> {
    fn next(&self) -> Option<NodeId> {
        self.link.next()
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.link.set_next(next);
    }
}

impl<L: LinkWithPrev, T> LinkWithPrev for ListNode<L, T> {
    fn prev(&self) -> Option<NodeId> {
        self.link.prev()
    }

    fn set_prev(&mut self, prev: Option<NodeId>) {
        self.link.set_prev(prev);
    }
}

impl<L: Node, T> Node for ListNode<L, T> {
    const BACK_LINKED: bool = L::BACK_LINKED;

    fn back(&self) -> Option<NodeId> {
        self.link.back()
    }

    fn set_back(&mut self, prev: Option<NodeId>) {
        self.link.set_back(prev);
    }
}

impl<L, T> NodeWithValue for ListNode<L, T>
where
    L: Node + Default,
{
    type Value = T;

    fn with_value(value: T) -> Self {
        Self::new(value)
    }

    fn value(&self) -> &T {
        ListNode::value(self)
    }

    fn value_mut(&mut self) -> &mut T {
        ListNode::value_mut(self)
    }

    fn into_value(self) -> T {
        ListNode::into_value(self)
    }
}

impl<L, T: fmt::Display> fmt::Display for ListNode<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<L: fmt::Debug, T: fmt::Debug> fmt::Debug for ListNode<L, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListNode")
            .field("link", &self.link)
            .field("value", &self.value)
            .finish()
    }
}
