//! Peek - inspect structured values as collapsible trees.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use peek_ui::cli::Cli;
use peek_ui::Dumper;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with dumped output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    tracing::debug!(?config, "starting peek");

    let collection = cli.collection()?;
    let mut dumper = Dumper::new(config)
        .with_format(cli.format.into())
        .with_html(cli.html())
        .with_callables(cli.callables());
    tracing::debug!(skin = %dumper.skin().describe(), "loaded skin");

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    dumper.dump_collection(&mut out, &collection)?;
    out.flush()?;
    Ok(())
}
