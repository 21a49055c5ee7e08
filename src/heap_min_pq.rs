/*
Indexed binary min-heap.

The heap lives in a Vec of nodes (root at 0, children of i at 2i+1 and 2i+2) and a hash map
from element to its current slot in that Vec. Every swap rewrites both slots in the map, so
`contains`, `get_priority` and `change_priority` are O(1) lookups followed by at most one
O(log n) sift.
*/

use crate::error::{Error, Result};
use crate::min_pq::{describe, MinPq, Priority, PriorityNode};
use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct HeapMinPq<E> {
    nodes: Vec<PriorityNode<E>>,
    index_of: HashMap<E, usize, FnvBuildHasher>,
}

impl<E> Default for HeapMinPq<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index_of: HashMap::default(),
        }
    }
}

impl<E> HeapMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index_of: HashMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default()),
        }
    }

    /// Lowers the priority of a present element, or adds it if absent.
    /// A present element whose priority is already lower keeps it. Returns true if the queue changed.
    pub fn decrease_key_or_push(&mut self, element: E, priority: Priority) -> bool {
        match self.index_of.get(&element).copied() {
            Some(i) => {
                if priority < self.nodes[i].priority {
                    self.nodes[i].priority = priority;
                    self.sift_up(i);
                    true
                } else {
                    false
                }
            }
            None => {
                let i = self.nodes.len();
                self.index_of.insert(element.clone(), i);
                self.nodes.push(PriorityNode::new(element, priority));
                self.sift_up(i);
                true
            }
        }
    }

    #[inline]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        // Both moved nodes need their slots rewritten, or the map goes stale.
        self.index_of.insert(self.nodes[i].element.clone(), i);
        self.index_of.insert(self.nodes[j].element.clone(), j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = Self::parent(i);
            if self.nodes[i].priority < self.nodes[parent].priority {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.nodes.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < n && self.nodes[right].priority < self.nodes[left].priority {
                smallest = right;
            }
            if self.nodes[smallest].priority < self.nodes[i].priority {
                self.swap(i, smallest);
                i = smallest;
            } else {
                break;
            }
        }
    }
}

impl<E> MinPq<E> for HeapMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    fn add(&mut self, element: E, priority: Priority) -> Result<()> {
        if self.index_of.contains_key(&element) {
            return Err(Error::DuplicateElement(describe(&element)));
        }
        let i = self.nodes.len();
        self.index_of.insert(element.clone(), i);
        self.nodes.push(PriorityNode::new(element, priority));
        self.sift_up(i);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.index_of.contains_key(element)
    }

    fn get_priority(&self, element: &E) -> Result<Priority> {
        self.index_of
            .get(element)
            .map(|&i| self.nodes[i].priority)
            .ok_or_else(|| Error::NotFound(describe(element)))
    }

    fn peek_min(&self) -> Result<&E> {
        self.nodes.first().map(|n| &n.element).ok_or(Error::Empty)
    }

    fn remove_min(&mut self) -> Result<E> {
        if self.nodes.is_empty() {
            return Err(Error::Empty);
        }
        let last = self.nodes.len() - 1;
        self.swap(0, last);
        let min = self.nodes.pop().ok_or(Error::Empty)?;
        self.index_of.remove(&min.element);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(min.element)
    }

    fn change_priority(&mut self, element: &E, priority: Priority) -> Result<()> {
        let i = *self
            .index_of
            .get(element)
            .ok_or_else(|| Error::NotFound(describe(element)))?;
        let old = self.nodes[i].priority;
        self.nodes[i].priority = priority;
        if priority < old {
            self.sift_up(i);
        } else {
            self.sift_down(i);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent<E: Clone + Eq + Hash + Debug>(pq: &HeapMinPq<E>) {
        assert_eq!(pq.nodes.len(), pq.index_of.len());
        for (i, node) in pq.nodes.iter().enumerate() {
            assert_eq!(pq.index_of[&node.element], i, "stale index for {:?}", node.element);
            if i > 0 {
                assert!(pq.nodes[HeapMinPq::<E>::parent(i)].priority <= node.priority);
            }
        }
    }

    #[test]
    fn removes_in_priority_order() {
        let mut pq = HeapMinPq::new();
        for (e, p) in [(7, 7.0), (3, 3.0), (9, 9.0), (1, 1.0), (5, 5.0), (2, 2.0)] {
            pq.add(e, p).unwrap();
            assert_consistent(&pq);
        }
        assert_eq!(pq.len(), 6);
        assert_eq!(*pq.peek_min().unwrap(), 1);

        let mut order = Vec::new();
        while !pq.is_empty() {
            order.push(pq.remove_min().unwrap());
            assert_consistent(&pq);
        }
        assert_eq!(order, vec![1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn change_priority_moves_both_ways() {
        let mut pq = HeapMinPq::from_pairs(vec![("a", 1.0), ("b", 2.0), ("c", 3.0), ("d", 4.0)]).unwrap();

        pq.change_priority(&"d", 0.5).unwrap();
        assert_consistent(&pq);
        assert_eq!(*pq.peek_min().unwrap(), "d");
        assert_eq!(pq.get_priority(&"d").unwrap(), 0.5);

        pq.change_priority(&"d", 10.0).unwrap();
        assert_consistent(&pq);
        assert_eq!(*pq.peek_min().unwrap(), "a");
        assert_eq!(pq.get_priority(&"d").unwrap(), 10.0);

        // Same priority is a no-op.
        pq.change_priority(&"b", 2.0).unwrap();
        assert_consistent(&pq);

        let order: Vec<_> = std::iter::from_fn(|| pq.remove_min().ok()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn failures() {
        let mut pq: HeapMinPq<u32> = HeapMinPq::new();
        assert_eq!(pq.peek_min(), Err(Error::Empty));
        assert_eq!(pq.remove_min(), Err(Error::Empty));
        assert_eq!(pq.get_priority(&4), Err(Error::NotFound("4".into())));
        assert_eq!(pq.change_priority(&4, 1.0), Err(Error::NotFound("4".into())));

        pq.add(4, 1.0).unwrap();
        assert_eq!(pq.add(4, 2.0), Err(Error::DuplicateElement("4".into())));
        // The rejected add leaves the original priority alone.
        assert_eq!(pq.get_priority(&4).unwrap(), 1.0);
        assert_eq!(pq.len(), 1);
    }

    #[test]
    fn duplicate_pairs_rejected_on_bulk_build() {
        let result = HeapMinPq::from_pairs(vec![(1, 1.0), (2, 2.0), (1, 3.0)]);
        assert!(matches!(result, Err(Error::DuplicateElement(_))));
    }

    #[test]
    fn decrease_key_or_push_only_lowers() {
        let mut pq = HeapMinPq::new();
        assert!(pq.decrease_key_or_push(0, 10.0));
        assert!(pq.decrease_key_or_push(3, 5.0));
        assert!(pq.decrease_key_or_push(2, 7.5));
        assert!(!pq.decrease_key_or_push(3, 6.0));
        assert!(pq.decrease_key_or_push(0, 2.5));
        assert_consistent(&pq);
        assert_eq!(pq.get_priority(&3).unwrap(), 5.0);
        assert_eq!(pq.remove_min().unwrap(), 0);
        assert_eq!(pq.remove_min().unwrap(), 3);
    }

    #[test]
    fn removed_elements_can_be_added_again() {
        let mut pq = HeapMinPq::with_capacity(4);
        pq.add('x', 1.0).unwrap();
        pq.add('y', 2.0).unwrap();
        assert_eq!(pq.remove_min().unwrap(), 'x');
        assert!(!pq.contains(&'x'));
        pq.add('x', 3.0).unwrap();
        assert_consistent(&pq);
        assert_eq!(pq.remove_min().unwrap(), 'y');
        assert_eq!(pq.remove_min().unwrap(), 'x');
        assert!(pq.is_empty());
    }
}
