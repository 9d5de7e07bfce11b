//! Builds the Huffman tree from a histogram of byte counts.
//!
//! The two lightest nodes are merged under a new internal node until one node is left. The first
//! node taken from the queue becomes the left child. Because the queue is insertion-stable, the
//! same histogram always produces the same tree.

use log::{debug, trace};

use super::node::Node;
use super::queue::PriorityQueue;
use crate::tools::freq_count::Histogram;

/// Build a Huffman tree from a weight for every byte value (zero weight = not present).
/// Returns None if no byte value has a weight.
pub fn build_tree(freqs: &Histogram) -> Option<Node> {
    let mut queue = PriorityQueue::with_capacity(freqs.len() + 1);

    // Seed the queue with a leaf for every symbol we saw, in symbol order
    freqs
        .iter()
        .enumerate()
        .filter(|&(_, &weight)| weight > 0)
        .for_each(|(symbol, &weight)| queue.push(Node::leaf(symbol as u8, weight)));

    /*
    A single distinct symbol would give a tree that is just one leaf, and a leaf at the root has
    an empty path. Add a placeholder leaf (weight 0, first unused byte value) so the real symbol
    sits one level down and gets a one bit code like any other.
    */
    if queue.len() == 1 {
        if let Some(unused) = freqs.iter().position(|&weight| weight == 0) {
            trace!("Single symbol input, adding placeholder symbol {}", unused);
            queue.push(Node::leaf(unused as u8, 0));
        }
    }

    let symbols = queue.len();
    // Pair off the two lightest nodes until only the root is left
    let root = loop {
        let left = queue.pop()?;
        match queue.pop() {
            Some(right) => queue.push(Node::merge(left, right)),
            None => break left,
        }
    };

    debug!(
        "Built tree of {} leaves with height {} and weight {}",
        symbols,
        root.height(),
        root.weight
    );
    Some(root)
}
