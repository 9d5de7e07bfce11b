//! The code table maps each symbol to its path through the Huffman tree.
//!
//! A path is a list of bits, false (0) for every step to a left child and true (1) for every
//! step to a right child. Since only leaves get codes, no code is a prefix of another.

use rustc_hash::FxHashMap;

use super::node::{Node, NodeData};
use crate::tools::freq_count::Histogram;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Vec<bool>>,
}

impl CodeTable {
    /// Walk the tree (preorder) and record the path to every leaf.
    pub fn from_tree(root: &Node) -> Self {
        let mut table = CodeTable::default();
        match root.node_data {
            // A tree that is only a leaf has no paths. Give the symbol a one bit code.
            NodeData::Leaf(symbol) => {
                table.codes.insert(symbol, vec![false]);
            }
            NodeData::Kids(..) => {
                let mut path = Vec::with_capacity(root.height());
                table.walk(root, &mut path);
            }
        }
        table
    }

    fn walk(&mut self, node: &Node, path: &mut Vec<bool>) {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                path.push(false);
                self.walk(left, path);
                path.pop();
                path.push(true);
                self.walk(right, path);
                path.pop();
            }
            NodeData::Leaf(symbol) => {
                self.codes.insert(*symbol, path.clone());
            }
        }
    }

    /// The code for `symbol`, or None if the symbol is not in the tree.
    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// The code for `symbol` as a string of '0' and '1', for reporting.
    pub fn code_string(&self, symbol: u8) -> Option<String> {
        self.get(symbol)
            .map(|code| code.iter().map(|&bit| if bit { '1' } else { '0' }).collect())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs, sorted by symbol.
    pub fn sorted(&self) -> Vec<(u8, &[bool])> {
        let mut pairs: Vec<(u8, &[bool])> = self
            .codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_slice()))
            .collect();
        pairs.sort_unstable_by_key(|&(symbol, _)| symbol);
        pairs
    }

    /// Exact number of bits needed to encode data with this histogram.
    pub fn encoded_len(&self, freqs: &Histogram) -> u64 {
        freqs
            .iter()
            .enumerate()
            .filter_map(|(symbol, &count)| {
                self.get(symbol as u8).map(|code| count * code.len() as u64)
            })
            .sum()
    }
}
