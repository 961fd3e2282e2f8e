//! Singly and doubly linked lists.
//!
//! Both flavors are [`list::LinkedList`] over a different node kind. A node is
//! a [`node::ListNode`] pairing a link ([`single::SingleLink`] or
//! [`double::DoubleLink`]) with a value. Nodes are owned by the list and refer
//! to each other by [`store::NodeId`]; the `prev` link of a double node is a
//! back reference only.
//!
//! ## Core Components
//!
//! - [`traits`]: `Link`, `LinkWithPrev`, `Node` and `NodeWithValue`.
//! - [`list::LinkedList`]: head/tail bookkeeping, lookup, deletion and reversal.
//! - [`single`] and [`double`]: the two link kinds and their list aliases.
//! - [`query::Find`]: what `find` looks for.
//!
//! # Examples
//!
//! ```
//! use linear_collections::linked_list::{
//!     DoublyLinkedList,
//!     traits::{Link, LinkWithPrev},
//! };
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(2).append(3).prepend(1);
//! assert_eq!(list.to_string(), "1,2,3");
//!
//! let head = list.head().unwrap();
//! assert_eq!(*head.value(), 1);
//! assert!(head.prev().is_none());
//!
//! let second = list.node(head.next().unwrap()).unwrap();
//! assert_eq!(second.prev(), list.head_id());
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "3,2,1");
//! assert_eq!(list.delete_tail().map(|node| node.into_value()), Some(1));
//! ```

pub mod double;
pub mod iter;
pub mod list;
pub mod node;
pub mod query;
pub mod single;
pub mod store;
pub mod traits;

#[cfg(test)]
mod tests;

pub use double::DoublyLinkedList;
pub use single::SinglyLinkedList;
