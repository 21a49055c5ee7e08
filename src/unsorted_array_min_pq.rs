/*
MinPq over an unsorted Vec. Every operation except `add` is a linear scan; kept as the
simplest possible baseline for the heap variants.
*/

use crate::error::{Error, Result};
use crate::min_pq::{describe, MinPq, Priority, PriorityNode};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPq<E> {
    nodes: Vec<PriorityNode<E>>,
}

impl<E> Default for UnsortedArrayMinPq<E> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<E> UnsortedArrayMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.nodes.iter().position(|n| &n.element == element)
    }

    // First node holding the smallest priority.
    fn min_position(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            match best {
                Some(b) if self.nodes[b].priority <= node.priority => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<E> MinPq<E> for UnsortedArrayMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    fn add(&mut self, element: E, priority: Priority) -> Result<()> {
        if self.contains(&element) {
            return Err(Error::DuplicateElement(describe(&element)));
        }
        self.nodes.push(PriorityNode::new(element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    fn get_priority(&self, element: &E) -> Result<Priority> {
        self.position(element)
            .map(|i| self.nodes[i].priority)
            .ok_or_else(|| Error::NotFound(describe(element)))
    }

    fn peek_min(&self) -> Result<&E> {
        self.min_position()
            .map(|i| &self.nodes[i].element)
            .ok_or(Error::Empty)
    }

    fn remove_min(&mut self) -> Result<E> {
        let i = self.min_position().ok_or(Error::Empty)?;
        Ok(self.nodes.swap_remove(i).element)
    }

    fn change_priority(&mut self, element: &E, priority: Priority) -> Result<()> {
        let i = self
            .position(element)
            .ok_or_else(|| Error::NotFound(describe(element)))?;
        self.nodes[i].priority = priority;
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
