use super::store::NodeId;

/// A trait for a link in a linked list.
pub trait Link {
    /// Get the next node in the linked list
    fn next(&self) -> Option<NodeId>;

    /// Set the next node in the linked list
    fn set_next(&mut self, next: Option<NodeId>);
}

/// A trait for a link with a previous pointer.
pub trait LinkWithPrev: Link {
    /// Get the previous node in the linked list
    fn prev(&self) -> Option<NodeId>;

    /// Set the previous node in the linked list
    fn set_prev(&mut self, prev: Option<NodeId>);
}

/// A trait for the link kind of a node.
///
/// [`LinkedList`](super::list::LinkedList) performs all relinking through
/// [`Link::set_next`] and [`Node::set_back`]; a link kind that does not record
/// its predecessor simply ignores the latter.
pub trait Node: Link {
    /// Whether [`Node::back`] reports the predecessor of the node.
    ///
    /// When this is `false` the list has to walk from the head to find it.
    const BACK_LINKED: bool;

    /// Get the predecessor, if the link kind records it
    fn back(&self) -> Option<NodeId>;

    /// Record the predecessor, if the link kind keeps one
    fn set_back(&mut self, prev: Option<NodeId>);

    /// Clear every link of a node that left its list
    fn unlink(&mut self) {
        self.set_next(None);
        self.set_back(None);
    }
}

/// A trait for a node that carries a value.
pub trait NodeWithValue: Node {
    /// The type of value stored in the node.
    type Value;

    /// Create a detached node holding `value`
    fn with_value(value: Self::Value) -> Self;

    /// Get the value stored in the node
    fn value(&self) -> &Self::Value;

    /// Get a mutable reference to the value stored in the node
    fn value_mut(&mut self) -> &mut Self::Value;

    /// Consume the node and return its value
    fn into_value(self) -> Self::Value;
}
