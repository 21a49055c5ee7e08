/*
MinPq backed by `priority_queue::DoublePriorityQueue`, which keeps its own item-to-slot map.
Used as the trusted reference the hand-written heap is checked against.
*/

use crate::error::{Error, Result};
use crate::min_pq::{describe, MinPq, Priority};
use ordered_float::OrderedFloat;
use priority_queue::DoublePriorityQueue;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct DoubleMapMinPq<E>
where
    E: Hash + Eq,
{
    pq: DoublePriorityQueue<E, OrderedFloat<Priority>>,
}

impl<E> Default for DoubleMapMinPq<E>
where
    E: Hash + Eq,
{
    fn default() -> Self {
        Self {
            pq: DoublePriorityQueue::new(),
        }
    }
}

impl<E> DoubleMapMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> MinPq<E> for DoubleMapMinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    fn add(&mut self, element: E, priority: Priority) -> Result<()> {
        if self.contains(&element) {
            return Err(Error::DuplicateElement(describe(&element)));
        }
        self.pq.push(element, OrderedFloat(priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.pq.get_priority(element).is_some()
    }

    fn get_priority(&self, element: &E) -> Result<Priority> {
        self.pq
            .get_priority(element)
            .map(|p| p.0)
            .ok_or_else(|| Error::NotFound(describe(element)))
    }

    fn peek_min(&self) -> Result<&E> {
        self.pq.peek_min().map(|(e, _)| e).ok_or(Error::Empty)
    }

    fn remove_min(&mut self) -> Result<E> {
        self.pq.pop_min().map(|(e, _)| e).ok_or(Error::Empty)
    }

    fn change_priority(&mut self, element: &E, priority: Priority) -> Result<()> {
        self.pq
            .change_priority(element, OrderedFloat(priority))
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(describe(element)))
    }

    fn len(&self) -> usize {
        self.pq.len()
    }
}
