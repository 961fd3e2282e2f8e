use super::{
    list::LinkedList,
    node::ListNode,
    store::NodeId,
    traits::{Link, LinkWithPrev, Node},
};

/// A node in a doubly linked list.
pub type DoubleNode<T> = ListNode<DoubleLink, T>;

/// A doubly linked list.
///
/// Every node records its predecessor, so `delete_tail` runs in O(1).
pub type DoublyLinkedList<T> = LinkedList<DoubleNode<T>>;

/// A link in a doubly linked list.
///
/// `prev` is a back reference only; the list owns its nodes.
#[derive(Debug, Default)]
pub struct DoubleLink {
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

impl Link for DoubleLink {
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

impl LinkWithPrev for DoubleLink {
    fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }
}

impl Node for DoubleLink {
    const BACK_LINKED: bool = true;

    fn back(&self) -> Option<NodeId> {
        self.prev()
    }

    fn set_back(&mut self, prev: Option<NodeId>) {
        self.set_prev(prev);
    }
}
