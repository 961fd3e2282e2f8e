use super::{
    list::LinkedList,
    node::ListNode,
    store::NodeId,
    traits::{Link, Node},
};

/// A node in a singly linked list.
pub type SingleNode<T> = ListNode<SingleLink, T>;

/// A singly linked list.
///
/// `delete_tail` has to walk from the head to find the new tail.
pub type SinglyLinkedList<T> = LinkedList<SingleNode<T>>;

/// A link in a singly linked list.
#[derive(Debug, Default)]
pub struct SingleLink {
    next: Option<NodeId>,
}

impl Link for SingleLink {
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

impl Node for SingleLink {
    const BACK_LINKED: bool = false;

    /// A single link does not know its predecessor, so this is always `None`.
    fn back(&self) -> Option<NodeId> {
        None
    }

    /// A single link keeps no predecessor, so this does nothing.
    fn set_back(&mut self, _prev: Option<NodeId>) {}
}
