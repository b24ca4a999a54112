use log::{error, info, warn};

use crate::code_tree::{self, bits_to_string, count_frequencies, Bits, Node};
use crate::errors::{Error, SymbolNotFound};

/// An accumulating corpus together with the Huffman tree built over it.
///
/// The tree is rebuilt from scratch whenever the corpus grows.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    corpus: String,
    root: Node,
}

/// The result of [`SymbolTable::encode_detailed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// One path per resolved character, in query order.
    pub codes: Vec<Bits>,

    /// Characters that were skipped, in query order.
    pub skipped: Vec<SymbolNotFound>,
}

impl SymbolTable {
    /// Seed a table with `initial` and build its tree.
    pub fn new(initial: &str) -> Result<Self, Error> {
        if initial.is_empty() {
            return Err(Error::EmptyInput);
        }

        let root = code_tree::build(count_frequencies(initial))?;
        let table = Self {
            corpus: initial.to_owned(),
            root,
        };
        table.log_rebuild();
        Ok(table)
    }

    /// Append `more` to the corpus and rebuild the tree from scratch.
    ///
    /// An empty `more` still rebuilds, producing an identical tree.
    pub fn append(&mut self, more: &str) {
        self.corpus.push_str(more);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        match code_tree::build(count_frequencies(&self.corpus)) {
            Ok(root) => {
                self.root = root;
                self.log_rebuild();
            }
            // The corpus only ever grows, so this would be a logic error.
            // The previous tree stays in place.
            Err(e) => error!("rebuild failed, keeping previous tree: {e}"),
        }
    }

    fn log_rebuild(&self) {
        info!(
            "rebuilt tree: {} characters, {} symbols, {} nodes",
            self.root.weight(),
            self.root.leaves().count(),
            self.root.node_count()
        );
    }

    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    /// Length of the corpus in characters.
    pub fn corpus_len(&self) -> usize {
        self.root.weight()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn lookup(&self, symbol: char) -> Result<Bits, SymbolNotFound> {
        code_tree::path_to(&self.root, symbol).ok_or(SymbolNotFound { symbol })
    }

    /// The path of every character of `query` that the tree knows.
    ///
    /// Unknown characters are logged and left out.
    pub fn encode(&self, query: &str) -> Vec<Bits> {
        self.encode_detailed(query).codes
    }

    /// Like [`encode`](Self::encode), but also reports what was skipped.
    pub fn encode_detailed(&self, query: &str) -> Encoded {
        let mut encoded = Encoded::default();
        for symbol in query.chars() {
            match self.lookup(symbol) {
                Ok(code) => encoded.codes.push(code),
                Err(missing) => {
                    warn!("{missing}, skipping");
                    encoded.skipped.push(missing);
                }
            }
        }
        encoded
    }

    /// The concatenated codes of `query` as `0`/`1` text.
    pub fn encode_to_string(&self, query: &str) -> String {
        self.encode(query)
            .iter()
            .map(|code| bits_to_string(code))
            .collect()
    }
}
