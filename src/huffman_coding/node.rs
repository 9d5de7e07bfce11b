//! Huffman tree nodes.
//!
//! A node is either a leaf holding one byte value, or an internal node owning exactly two
//! children. The root owns the whole tree, so dropping the root frees every node.

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Symbol count for a leaf, sum of the children for an internal node. Zero once a tree has
    /// been read back from a file.
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: u8, weight: u64) -> Node {
        Node {
            weight,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Create an internal node owning `left` and `right`, weighing their sum.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    /// Count of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Length of the longest path from this node down to a leaf. A lone leaf has height 0.
    pub fn height(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => 1 + left.height().max(right.height()),
            NodeData::Leaf(_) => 0,
        }
    }

    /// Leaf symbols in preorder (left before right).
    pub fn symbols(&self) -> Vec<u8> {
        let mut symbols = Vec::new();
        collect_symbols(self, &mut symbols);
        symbols
    }
}

fn collect_symbols(node: &Node, symbols: &mut Vec<u8>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            collect_symbols(left, symbols);
            collect_symbols(right, symbols);
        }
        NodeData::Leaf(symbol) => symbols.push(*symbol),
    }
}

#[cfg(test)]
mod test {
    use super::{Node, NodeData};

    #[test]
    fn merge_test() {
        let node = Node::merge(Node::leaf(b'a', 3), Node::leaf(b'b', 4));
        assert_eq!(node.weight, 7);
        assert!(matches!(node.node_data, NodeData::Kids(..)));
        assert_eq!(node.leaf_count(), 2);
        assert_eq!(node.height(), 1);
        assert_eq!(node.symbols(), b"ab".to_vec());
    }

    #[test]
    fn shape_test() {
        // ((a, (b, c)), d)
        let inner = Node::merge(Node::leaf(b'b', 1), Node::leaf(b'c', 1));
        let left = Node::merge(Node::leaf(b'a', 1), inner);
        let root = Node::merge(left, Node::leaf(b'd', 5));
        assert_eq!(root.weight, 8);
        assert_eq!(root.height(), 3);
        assert_eq!(root.leaf_count(), 4);
        assert_eq!(root.symbols(), b"abcd".to_vec());
    }
}
