use core::iter::FusedIterator;

use super::{
    store::{NodeId, NodeStore},
    traits::Link,
};

/// An iterator over the nodes of a linked list, head to tail.
pub struct Iter<'a, N> {
    store: &'a NodeStore<N>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, N: Link> Iter<'a, N> {
    pub(crate) fn new(store: &'a NodeStore<N>, head: Option<NodeId>) -> Self {
        Self {
            store,
            current: head,
            remaining: store.len(),
        }
    }
}

impl<'a, N: Link> Iterator for Iter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.current.map(|current| {
            let node = &store[current];
            self.current = node.next();
            self.remaining -= 1;
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: Link> ExactSizeIterator for Iter<'_, N> {}

impl<N: Link> FusedIterator for Iter<'_, N> {}

impl<N> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
