use clap::Parser;
use nagare::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Render a flowchart session snapshot as Mermaid markup
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a session JSON file; the built-in demo flowchart when omitted
    session_path: Option<String>,

    /// Write the markup to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Print block and connection counts before the markup
    #[arg(short, long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let session = match &cli.session_path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            UiSession::from_json(&json)?
        }
        None => {
            eprintln!("No session file given, rendering the built-in demo flowchart.");
            UiSession::demo()
        }
    };

    let graph = session.into_graph()?;
    if cli.summary {
        eprintln!(
            "{} blocks, {} connections",
            graph.blocks().len(),
            graph.connections().len()
        );
    }

    let markup = render(&graph);
    match &cli.output {
        Some(path) => {
            fs::write(path, &markup)?;
            eprintln!("Wrote {} bytes to {}", markup.len(), path);
        }
        None => io::stdout().write_all(markup.as_bytes())?,
    }

    Ok(())
}
