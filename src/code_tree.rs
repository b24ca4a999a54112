use std::collections::{BTreeMap, HashMap};

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};
use log::debug;

use crate::errors::Error;

/// A root-to-leaf path. `0` means "go left", `1` means "go right".
pub type Bits = BitVec<u8, Msb0>;

/// One node of a Huffman code tree.
///
/// Every node carries the sequence number it was created with during
/// [`build`]. Nodes of equal weight are merged in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: usize,
        sequence_id: u64,
    },
    Internal {
        weight: usize,
        sequence_id: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn merge(left: Node, right: Node, sequence_id: u64) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            sequence_id,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The symbol of a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn sequence_id(&self) -> u64 {
        match self {
            Node::Leaf { sequence_id, .. } | Node::Internal { sequence_id, .. } => *sequence_id,
        }
    }

    /// `(left, right)` for internal nodes.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// All leaves, left to right.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// The path of every leaf, keyed by symbol.
    pub fn code_table(&self) -> BTreeMap<char, Bits> {
        let mut table = BTreeMap::new();
        self.collect_codes(&mut Bits::new(), &mut table);
        table
    }

    fn collect_codes(&self, path: &mut Bits, table: &mut BTreeMap<char, Bits>) {
        match self {
            Node::Leaf { symbol, .. } => {
                table.entry(*symbol).or_insert_with(|| path.clone());
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                left.collect_codes(path, table);
                path.pop();
                path.push(true);
                right.collect_codes(path, table);
                path.pop();
            }
        }
    }

    /// Depth-first, left-first search. On success `path` holds the bits
    /// leading to the matching leaf.
    fn find(&self, symbol: char, path: &mut Bits) -> bool {
        match self {
            Node::Leaf { symbol: s, .. } => *s == symbol,
            Node::Internal { left, right, .. } => {
                path.push(false);
                if left.find(symbol, path) {
                    return true;
                }
                path.pop();
                path.push(true);
                if right.find(symbol, path) {
                    return true;
                }
                path.pop();
                false
            }
        }
    }
}

/// Iterator over the leaves of a tree. See [`Node::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { .. } => return Some(node),
                Node::Internal { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

/// Count each distinct character of `text`.
///
/// Entries are ordered by first appearance, which is the order [`build`]
/// creates leaves in.
pub fn count_frequencies(text: &str) -> Vec<(char, usize)> {
    let mut index = HashMap::new();
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in text.chars() {
        let i = *index.entry(c).or_insert_with(|| {
            counts.push((c, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }
    counts
}

/// Build a Huffman tree from `(symbol, count)` pairs.
///
/// Leaves are numbered in iteration order and every merged node gets the
/// next number. The two lightest nodes are merged first; on equal weight the
/// lower number wins. The first node extracted becomes the left child.
///
/// A single symbol yields a lone leaf as the root.
pub fn build<I>(frequencies: I) -> Result<Node, Error>
where
    I: IntoIterator<Item = (char, usize)>,
{
    let mut next_id = 0u64;
    let mut fresh_id = || {
        let id = next_id;
        next_id += 1;
        id
    };

    // Keyed by (weight, sequence id), so keys are unique and ordered.
    let mut queue: BTreeMap<(usize, u64), Node> = BTreeMap::new();
    for (symbol, weight) in frequencies {
        let sequence_id = fresh_id();
        let leaf = Node::Leaf {
            symbol,
            weight,
            sequence_id,
        };
        queue.insert((weight, sequence_id), leaf);
    }

    loop {
        let (_, first) = queue.pop_first().ok_or(Error::EmptyAlphabet)?;
        let Some((_, second)) = queue.pop_first() else {
            return Ok(first);
        };

        let merged = Node::merge(first, second, fresh_id());
        debug!(
            "merged node #{} with weight {}",
            merged.sequence_id(),
            merged.weight()
        );
        queue.insert((merged.weight(), merged.sequence_id()), merged);
    }
}

/// The path from `root` to the leaf carrying `symbol`, if there is one.
pub fn path_to(root: &Node, symbol: char) -> Option<Bits> {
    let mut path = Bits::new();
    root.find(symbol, &mut path).then_some(path)
}

/// Format a path as a string of `0`s and `1`s.
pub fn bits_to_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|bit| if *bit { '1' } else { '0' }).collect()
}
