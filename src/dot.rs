//! Graphviz rendering of a code tree.
//!
//! Leaves are labeled with their symbol, internal nodes with
//! `weight/total`. Edges to left children are labeled `0`, edges to right
//! children `1`.

use std::{
    fs::File,
    io::{self, prelude::*, BufWriter},
    path::Path,
};

use crate::code_tree::Node;

/// Write `root` as a DOT digraph. `total` is the corpus length.
pub fn render(root: &Node, total: usize, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "digraph g {{")?;
    writeln!(out, "\tnode [shape=record, height=.1];")?;
    let mut next_id = 0;
    render_node(root, total, &mut out, &mut next_id)?;
    writeln!(out, "}}")
}

/// Render `root` into the file at `path`, replacing it.
pub fn write_file(root: &Node, total: usize, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    render(root, total, &mut file)?;
    file.flush()
}

/// Emit `node` and its subtree in pre-order. Returns the id given to `node`.
fn render_node<W: Write>(
    node: &Node,
    total: usize,
    out: &mut W,
    next_id: &mut usize,
) -> io::Result<usize> {
    let id = *next_id;
    *next_id += 1;

    match node {
        Node::Leaf { symbol, .. } => {
            writeln!(out, "\tn{id} [label=\"\\\"{}\\\"\"];", escape(*symbol))?;
        }
        Node::Internal {
            weight,
            left,
            right,
            ..
        } => {
            writeln!(out, "\tn{id} [label=\"{weight}/{total}\"];")?;
            let left_id = render_node(left, total, out, next_id)?;
            writeln!(out, "\tn{id} -> n{left_id} [label=\"0\"];")?;
            let right_id = render_node(right, total, out, next_id)?;
            writeln!(out, "\tn{id} -> n{right_id} [label=\"1\"];")?;
        }
    }

    Ok(id)
}

/// Escape a symbol for use inside a quoted record label.
fn escape(symbol: char) -> String {
    match symbol {
        '"' | '\\' | '{' | '}' | '|' | '<' | '>' => format!("\\{symbol}"),
        '\n' => "\\n".to_string(),
        c => c.to_string(),
    }
}
