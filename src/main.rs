use std::{io, path::PathBuf};

use clap::Parser;
use hufftree::{dot, repl, SymbolTable};

/// Build a Huffman tree over a growing string and look up codes interactively.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Initial string from which the huffman tree is built.
    initial: String,

    /// Render the tree as Graphviz DOT to this file after every update.
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Log merges and rebuilds. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut table = SymbolTable::new(&cli.initial)?;
    if let Some(path) = &cli.dot {
        dot::write_file(table.root(), table.corpus_len(), path)?;
    }

    repl::run(&mut table, io::stdin().lock(), io::stdout(), cli.dot.as_deref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn initial_is_required() {
        assert!(Cli::try_parse_from(["hufftree"]).is_err());
    }

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["hufftree", "abracadabra"])?;
        assert_eq!(cli.initial, "abracadabra");
        assert_eq!(cli.dot, None);
        assert!(!cli.verbose);
        Ok(())
    }

    #[test]
    fn dot_and_verbose() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["hufftree", "-v", "--dot", "tree.dot", "aab"])?;
        assert_eq!(cli.initial, "aab");
        assert_eq!(cli.dot.as_deref(), Some(Path::new("tree.dot")));
        assert!(cli.verbose);
        Ok(())
    }

    #[test]
    fn dot_needs_a_path() {
        assert!(Cli::try_parse_from(["hufftree", "aab", "--dot"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
