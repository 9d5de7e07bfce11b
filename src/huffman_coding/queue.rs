//! Priority queue holding tree nodes while the tree is built.
//!
//! Nodes come out in ascending weight. Nodes of equal weight come out in the order they went
//! in, so a node pushed now waits behind every node of the same weight already queued. That
//! order decides the tree shape, and with it every bit of the compressed output.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::Node;

#[derive(Debug)]
struct Entry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Reversed on both keys: BinaryHeap pops its greatest entry, and we want the lightest,
    /// oldest one.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ascending, insertion-stable queue of tree nodes.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Queue a node behind all nodes of lower or equal weight.
    pub fn push(&mut self, node: Node) {
        let entry = Entry {
            weight: node.weight,
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    /// Remove and return the lightest node, or None if the queue is empty.
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
