//! Incrementally built Huffman prefix codes.
//!
//! A [`SymbolTable`] owns a growing corpus and rebuilds a Huffman tree over
//! it on every append. Codes for arbitrary query strings are derived by
//! walking that tree.

pub mod code_tree;
pub mod dot;
mod errors;
pub mod repl;
mod symbol_table;

pub use crate::code_tree::{bits_to_string, build, count_frequencies, path_to, Bits, Node};
pub use crate::errors::{Error, SymbolNotFound};
pub use crate::symbol_table::{Encoded, SymbolTable};
