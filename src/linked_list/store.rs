use core::fmt;
use core::ops::{Index, IndexMut};

use hashbrown::HashMap;

/// A handle to a node owned by a linked list.
///
/// Ids are handed out in increasing order and never reused by the list that
/// created them, so the id of a deleted node stays dangling forever instead of
/// silently pointing at a newer node.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The arena every node of a list lives in.
///
/// Links between nodes are plain [`NodeId`]s, so ownership stays with the
/// store and back links never form an ownership cycle.
pub(crate) struct NodeStore<N> {
    nodes: HashMap<NodeId, N>,
    next_id: u64,
}

impl<N> NodeStore<N> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
        }
    }

    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        self.nodes.remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node. Ids keep counting up.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<N> Index<NodeId> for NodeStore<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.nodes.get(&id) {
            Some(node) => node,
            None => panic!("dangling {id:?} in linked list"),
        }
    }
}

impl<N> IndexMut<NodeId> for NodeStore<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.nodes.get_mut(&id) {
            Some(node) => node,
            None => panic!("dangling {id:?} in linked list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NodeStore;

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = NodeStore::new();
        let a = store.insert('a');
        let b = store.insert('b');
        assert_ne!(a, b);

        assert_eq!(store.remove(a), Some('a'));
        let c = store.insert('c');
        assert_ne!(a, c);
        assert!(store.get(a).is_none());
        assert_eq!(store[c], 'c');
        assert_eq!(store.len(), 2);

        store.clear();
        assert_eq!(store.len(), 0);
        let d = store.insert('d');
        assert!(d > c);
    }

    #[test]
    #[should_panic(expected = "dangling")]
    fn test_index_dangling_id() {
        let mut store = NodeStore::new();
        let a = store.insert(1);
        store.remove(a);
        let _value = store[a];
    }
}
