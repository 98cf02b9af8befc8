//! Priority structures holding the vertices a search still has to settle.
//!
//! All frontiers pop the entry with the smallest distance. Among entries with
//! equal distance the order is arbitrary and differs between
//! implementations, so searches must never depend on it.

use std::{cmp::Reverse, collections::BinaryHeap};

use clap::ValueEnum;
use keyed_priority_queue::{Entry, KeyedPriorityQueue};
use radix_heap::RadixHeapMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::FrontierError,
    graphs::{Distance, Vertex},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierEntry {
    pub distance: Distance,
    pub vertex: Vertex,
}

impl FrontierEntry {
    pub fn new(distance: Distance, vertex: Vertex) -> FrontierEntry {
        FrontierEntry { distance, vertex }
    }
}

pub trait Frontier {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts `vertex` with its tentative `distance`.
    fn insert(&mut self, distance: Distance, vertex: Vertex);

    /// Removes and returns the entry with the smallest distance, or `None` if
    /// the frontier is empty.
    fn pop(&mut self) -> Option<FrontierEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like `pop`, but treats an empty frontier as a contract violation.
    fn extract_min(&mut self) -> Result<FrontierEntry, FrontierError> {
        self.pop().ok_or(FrontierError::Empty)
    }
}

/// Binary heap with lazy deletion: a vertex may be present several times and
/// outdated entries are left for the search to skip.
#[derive(Clone, Default)]
pub struct BinaryHeapFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl BinaryHeapFrontier {
    pub fn new() -> Self {
        BinaryHeapFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl Frontier for BinaryHeapFrontier {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, distance: Distance, vertex: Vertex) {
        self.heap.push(Reverse(FrontierEntry::new(distance, vertex)));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let Reverse(entry) = self.heap.pop()?;
        Some(entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Radix heap frontier.
///
/// The radix heap is monotone: nothing may be inserted below the last popped
/// distance. Dijkstra on non-negative weights never does this. Smaller
/// distances, which only a negative edge can produce, are raised to the last
/// popped distance, so such a search gives wrong distances instead of
/// panicking.
pub struct RadixFrontier {
    // max-heap, so distances are stored negated
    heap: RadixHeapMap<i64, Vertex>,
    last_popped: Option<Distance>,
}

impl RadixFrontier {
    pub fn new() -> Self {
        RadixFrontier {
            heap: RadixHeapMap::new(),
            last_popped: None,
        }
    }
}

impl Default for RadixFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for RadixFrontier {
    fn clear(&mut self) {
        self.heap.clear();
        self.last_popped = None;
    }

    fn insert(&mut self, distance: Distance, vertex: Vertex) {
        let distance = self
            .last_popped
            .map_or(distance, |last_popped| distance.max(last_popped));
        self.heap.push(distance.saturating_neg(), vertex);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let (negative_distance, vertex) = self.heap.pop()?;
        let distance = -negative_distance;
        self.last_popped = Some(distance);
        Some(FrontierEntry::new(distance, vertex))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Frontier with decrease-key. Each vertex is stored at most once with its
/// smallest inserted distance, so no stale entries are ever popped.
pub struct KeyedFrontier {
    queue: KeyedPriorityQueue<Vertex, Reverse<Distance>>,
}

impl KeyedFrontier {
    pub fn new() -> Self {
        KeyedFrontier {
            queue: KeyedPriorityQueue::new(),
        }
    }
}

impl Default for KeyedFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for KeyedFrontier {
    fn clear(&mut self) {
        self.queue = KeyedPriorityQueue::new();
    }

    fn insert(&mut self, distance: Distance, vertex: Vertex) {
        match self.queue.entry(vertex) {
            Entry::Vacant(entry) => {
                entry.set_priority(Reverse(distance));
            }
            Entry::Occupied(entry) => {
                if Reverse(distance) > *entry.get_priority() {
                    entry.set_priority(Reverse(distance));
                }
            }
        };
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        let (vertex, Reverse(distance)) = self.queue.pop()?;
        Some(FrontierEntry::new(distance, vertex))
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FrontierKind {
    #[default]
    BinaryHeap,
    Radix,
    Keyed,
}

impl FrontierKind {
    pub fn build(&self) -> Box<dyn Frontier> {
        match self {
            FrontierKind::BinaryHeap => Box::new(BinaryHeapFrontier::new()),
            FrontierKind::Radix => Box::new(RadixFrontier::new()),
            FrontierKind::Keyed => Box::new(KeyedFrontier::new()),
        }
    }
}
