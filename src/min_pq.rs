/*
Minimum priority queue contract shared by every queue variant in the crate.

Elements are unique: adding an element that is already present is an error, and the
priority of a present element is changed in place with `change_priority`. Priorities are
plain `f64` values; the smallest priority is served first.
*/

use crate::error::Result;
use std::fmt::Debug;
use std::hash::Hash;

pub type Priority = f64;

/// An element paired with its current priority.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityNode<E> {
    pub element: E,
    pub priority: Priority,
}

impl<E> PriorityNode<E> {
    pub fn new(element: E, priority: Priority) -> Self {
        Self { element, priority }
    }
}

pub trait MinPq<E>
where
    E: Clone + Eq + Hash + Debug,
{
    /// Adds an element with the given priority. Fails with `DuplicateElement` if present.
    fn add(&mut self, element: E, priority: Priority) -> Result<()>;

    fn contains(&self, element: &E) -> bool;

    /// Current priority of the element. Fails with `NotFound` if absent.
    fn get_priority(&self, element: &E) -> Result<Priority>;

    /// Element with the smallest priority. Fails with `Empty`.
    fn peek_min(&self) -> Result<&E>;

    /// Removes and returns the element with the smallest priority. Fails with `Empty`.
    fn remove_min(&mut self) -> Result<E>;

    /// Replaces the priority of a present element. Fails with `NotFound` if absent.
    fn change_priority(&mut self, element: &E, priority: Priority) -> Result<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add_all<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (E, Priority)>,
        Self: Sized,
    {
        for (element, priority) in pairs {
            self.add(element, priority)?;
        }
        Ok(())
    }

    /// Builds a queue holding every `(element, priority)` pair.
    fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, Priority)>,
        Self: Default + Sized,
    {
        let mut pq = Self::default();
        pq.add_all(pairs)?;
        Ok(pq)
    }
}

pub(crate) fn describe<E: Debug>(element: &E) -> String {
    format!("{:?}", element)
}
