//! Linear containers: singly and doubly linked lists, a stack and a queue
//! built on top of them, and a pluggable [`Comparator`](comparator::Comparator)
//! used for every value based lookup.
#![no_std]

extern crate alloc;

pub mod comparator;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use comparator::Comparator;
pub use linked_list::{
    DoublyLinkedList, SinglyLinkedList,
    double::DoubleNode,
    query::Find,
    single::SingleNode,
    store::NodeId,
};
pub use queue::Queue;
pub use stack::Stack;
