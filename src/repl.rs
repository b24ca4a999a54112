//! The interactive command loop.
//!
//! ```text
//! u <string>   append to the corpus and rebuild the tree
//! l <string>   print the string encoded with the current tree
//! t            print the code of every known symbol
//! q            quit
//! ```

use std::{
    io::{self, prelude::*},
    path::Path,
};

use crate::{code_tree::bits_to_string, dot, SymbolTable};

const HELP: &str = "'u <string>' to append to the string from which the huffman tree is generated\n\
                    'l <string>' to get the string encoded with the current huffman tree\n\
                    't' to list the code of every known symbol\n";

const PROMPT: &str = "u(pdate)/l(ookup)/t(able)/q(uit): ";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Update(&'a str),
    Lookup(&'a str),
    Table,
    Quit,
    Invalid,
}

impl<'a> Command<'a> {
    /// Parse a line, without its trailing newline.
    ///
    /// The text after `u ` or `l ` is taken verbatim, including any further
    /// spaces.
    pub fn parse(line: &'a str) -> Self {
        if let Some(text) = line.strip_prefix("u ") {
            Command::Update(text)
        } else if let Some(text) = line.strip_prefix("l ") {
            Command::Lookup(text)
        } else if line.starts_with('t') {
            Command::Table
        } else if line.starts_with('q') {
            Command::Quit
        } else {
            Command::Invalid
        }
    }
}

/// Read commands from `input` until `q` or end of input.
///
/// If `dot_path` is set, the tree is re-rendered there after every update.
pub fn run(
    table: &mut SymbolTable,
    mut input: impl BufRead,
    mut output: impl Write,
    dot_path: Option<&Path>,
) -> io::Result<()> {
    writeln!(output, "{HELP}")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let command_line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        match Command::parse(command_line) {
            Command::Update(text) => {
                table.append(text);
                if let Some(path) = dot_path {
                    dot::write_file(table.root(), table.corpus_len(), path)?;
                }
                writeln!(output, "Updated")?;
            }
            Command::Lookup(text) => writeln!(output, "{}", table.encode_to_string(text))?,
            Command::Table => {
                for (symbol, code) in table.root().code_table() {
                    writeln!(output, "{symbol:?} {}", bits_to_string(&code))?;
                }
            }
            Command::Quit => break,
            Command::Invalid => writeln!(output, "Wrong selection")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;

    #[test_case("u abc", Command::Update("abc"))]
    #[test_case("u ", Command::Update(""))]
    #[test_case("u  two words", Command::Update(" two words"))]
    #[test_case("l hello", Command::Lookup("hello"))]
    #[test_case("t", Command::Table)]
    #[test_case("q", Command::Quit)]
    #[test_case("quit", Command::Quit)]
    #[test_case("u", Command::Invalid)]
    #[test_case("x", Command::Invalid)]
    #[test_case("", Command::Invalid)]
    fn parse(line: &str, expected: Command) {
        assert_eq!(Command::parse(line), expected);
    }

    fn session(initial: &str, input: &str) -> anyhow::Result<(SymbolTable, Vec<String>)> {
        let mut table = SymbolTable::new(initial)?;
        let mut output = Vec::new();
        run(&mut table, Cursor::new(input), &mut output, None)?;
        let output = String::from_utf8(output)?;
        let replies = output
            .split(PROMPT)
            .skip(1)
            .map(|reply| reply.trim_end().to_string())
            .collect();
        Ok((table, replies))
    }

    #[test]
    fn update_then_lookup() -> anyhow::Result<()> {
        let (table, replies) = session("ab", "l c\nu c\nl c\nl abc\nq\n")?;
        assert_eq!(table.corpus(), "abc");
        assert_eq!(replies, ["", "Updated", "0", "10110", ""]);
        Ok(())
    }

    #[test]
    fn prompts_after_help() -> anyhow::Result<()> {
        let mut table = SymbolTable::new("ab")?;
        let mut output = Vec::new();
        run(&mut table, Cursor::new("q\n"), &mut output, None)?;
        let output = String::from_utf8(output)?;
        assert!(output.starts_with("'u <string>'"));
        assert!(output.ends_with("\n\nu(pdate)/l(ookup)/t(able)/q(uit): "));
        Ok(())
    }

    #[test]
    fn wrong_selection_and_eof() -> anyhow::Result<()> {
        let (table, replies) = session("aaabbb", "?\nl ba\n")?;
        assert_eq!(table.corpus(), "aaabbb");
        assert_eq!(replies, ["Wrong selection", "10", ""]);
        Ok(())
    }

    #[test]
    fn code_table_listing() -> anyhow::Result<()> {
        let (_, replies) = session("aab", "t\r\nq\r\n")?;
        assert_eq!(replies, ["'a' 1\n'b' 0", ""]);
        Ok(())
    }

    #[test]
    fn update_renders_dot_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("hufftree-repl-{}.dot", std::process::id()));
        let mut table = SymbolTable::new("ab")?;
        run(&mut table, Cursor::new("u b\nq\n"), io::sink(), Some(path.as_path()))?;

        let dot = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;
        assert!(dot.starts_with("digraph g {"));
        assert!(dot.contains("[label=\"3/3\"]"));
        Ok(())
    }
}
