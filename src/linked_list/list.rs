use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::comparator::Comparator;

use super::{
    iter::Iter,
    query::Find,
    store::{NodeId, NodeStore},
    traits::NodeWithValue,
};

/// A linked list over nodes of kind `N`.
///
/// The link kind of `N` picks the flavor: [`SinglyLinkedList`] and
/// [`DoublyLinkedList`] are this type over single and double nodes. The list
/// owns every node; nodes refer to each other by [`NodeId`].
///
/// [`SinglyLinkedList`]: super::single::SinglyLinkedList
/// [`DoublyLinkedList`]: super::double::DoublyLinkedList
pub struct LinkedList<N: NodeWithValue> {
    store: NodeStore<N>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    comparator: Comparator<N::Value>,
}

impl<N> LinkedList<N>
where
    N: NodeWithValue,
    N::Value: PartialOrd,
{
    /// Creates an empty list comparing values by their natural order.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::new())
    }
}

impl<N: NodeWithValue> LinkedList<N> {
    /// Creates an empty list using `comparator` for `find`, `delete` and
    /// `contains`.
    pub fn with_comparator(comparator: Comparator<N::Value>) -> Self {
        Self {
            store: NodeStore::new(),
            head: None,
            tail: None,
            comparator,
        }
    }

    pub fn comparator(&self) -> &Comparator<N::Value> {
        &self.comparator
    }

    pub fn comparator_mut(&mut self) -> &mut Comparator<N::Value> {
        &mut self.comparator
    }

    pub fn head(&self) -> Option<&N> {
        self.head.map(|id| &self.store[id])
    }

    pub fn tail(&self) -> Option<&N> {
        self.tail.map(|id| &self.store[id])
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Looks up a node of this list. Ids of deleted nodes resolve to `None`.
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` in front of the current head.
    pub fn prepend(&mut self, value: N::Value) -> &mut Self {
        let id = self.store.insert(N::with_value(value));
        let head = self.head;
        self.connect(Some(id), head);
        self.connect(None, Some(id));
        self
    }

    /// Adds `value` after the current tail.
    pub fn append(&mut self, value: N::Value) -> &mut Self {
        let id = self.store.insert(N::with_value(value));
        let tail = self.tail;
        self.connect(tail, Some(id));
        self.connect(Some(id), None);
        self
    }

    /// Appends every value in order.
    pub fn from_array<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = N::Value>,
    {
        for value in values {
            self.append(value);
        }
        self
    }

    /// Returns the first node matching `query`, scanning from the head.
    pub fn find(&self, query: Find<'_, N::Value>) -> Option<&N> {
        self.iter().find(|node| {
            if let Some(callback) = query.callback {
                if callback(node.value()) {
                    return true;
                }
            }

            query
                .value
                .is_some_and(|value| self.comparator.equal(node.value(), value))
        })
    }

    pub fn contains(&self, value: &N::Value) -> bool {
        self.find(Find::value(value)).is_some()
    }

    /// Removes every node equal to `value`.
    ///
    /// Returns the last removed node in scan order, or `None` when nothing
    /// matched. Use [`delete_all`](Self::delete_all) to get every removed node.
    pub fn delete(&mut self, value: &N::Value) -> Option<N> {
        let mut deleted = None;
        self.delete_matching(value, |node| deleted = Some(node));
        deleted
    }

    /// Removes every node equal to `value` and returns them in scan order.
    pub fn delete_all(&mut self, value: &N::Value) -> Vec<N> {
        let mut deleted = Vec::new();
        self.delete_matching(value, |node| deleted.push(node));
        deleted
    }

    fn delete_matching<F>(&mut self, value: &N::Value, mut on_delete: F)
    where
        F: FnMut(N),
    {
        let before = self.len();
        let mut prev = None;
        let mut current = self.head;

        while let Some(id) = current {
            let node = &self.store[id];
            current = node.next();

            if self.comparator.equal(node.value(), value) {
                on_delete(self.unlink(id, prev));
            } else {
                prev = Some(id);
            }
        }

        trace!("deleted {} of {} nodes", before - self.len(), before);
    }

    /// Removes and returns the head.
    pub fn delete_head(&mut self) -> Option<N> {
        let head = self.head?;
        Some(self.unlink(head, None))
    }

    /// Removes and returns the tail.
    ///
    /// O(1) for back linked nodes, O(n) otherwise.
    pub fn delete_tail(&mut self) -> Option<N> {
        let tail = self.tail?;
        let prev = self.predecessor(tail);
        Some(self.unlink(tail, prev))
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) -> &mut Self {
        let mut prev = None;
        let mut current = self.head;

        while let Some(id) = current {
            let node = &mut self.store[id];
            current = node.next();
            node.set_next(prev);
            node.set_back(current);
            prev = Some(id);
        }

        core::mem::swap(&mut self.head, &mut self.tail);
        trace!("reversed list of {} nodes", self.len());
        self
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        trace!("clearing list of {} nodes", self.len());
        self.store.clear();
        self.head = None;
        self.tail = None;
    }

    /// Nodes from head to tail.
    pub fn to_array(&self) -> Vec<&N> {
        self.iter().collect()
    }

    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(&self.store, self.head)
    }

    /// Values from head to tail.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &N::Value> {
        self.iter().map(|node| node.value())
    }

    /// Formats every value with `callback` and joins them with `,`.
    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: Fn(&N::Value) -> String,
    {
        let parts: Vec<String> = self.values().map(callback).collect();
        parts.join(",")
    }

    /// Makes `next` follow `prev`, where `None` stands for the list ends.
    fn connect(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => self.store[prev].set_next(next),
            None => self.head = next,
        }

        match next {
            Some(next) => self.store[next].set_back(prev),
            None => self.tail = prev,
        }
    }

    /// Detaches `id`, whose predecessor is `prev`, and hands it back.
    fn unlink(&mut self, id: NodeId, prev: Option<NodeId>) -> N {
        let mut node = match self.store.remove(id) {
            Some(node) => node,
            None => panic!("unlinking {id:?}, which is not in this list"),
        };
        self.connect(prev, node.next());
        node.unlink();
        node
    }

    fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if N::BACK_LINKED {
            return self.store[id].back();
        }

        let mut current = self.head;
        while let Some(candidate) = current {
            let next = self.store[candidate].next();
            if next == Some(id) {
                return Some(candidate);
            }
            current = next;
        }
        None
    }
}

impl<N> Default for LinkedList<N>
where
    N: NodeWithValue,
    N::Value: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<N::Value> for LinkedList<N>
where
    N: NodeWithValue,
    N::Value: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = N::Value>>(iter: I) -> Self {
        let mut list = Self::new();
        list.from_array(iter);
        list
    }
}

impl<N: NodeWithValue> Extend<N::Value> for LinkedList<N> {
    fn extend<I: IntoIterator<Item = N::Value>>(&mut self, iter: I) {
        self.from_array(iter);
    }
}

impl<'a, N: NodeWithValue> IntoIterator for &'a LinkedList<N> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N> fmt::Display for LinkedList<N>
where
    N: NodeWithValue,
    N::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}

impl<N> fmt::Debug for LinkedList<N>
where
    N: NodeWithValue,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
