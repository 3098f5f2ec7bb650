//! Command-line interface for the `peek` binary.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use peek_api::Value;
use peek_kernel::{Collection, CollectorRegistry, KnownCallables, RenderConfig};

use crate::{HtmlEmitter, OutputFormat};

/// Inspect structured values as collapsible trees.
///
/// Examples:
///   peek json config.json              # A JSON document as HTML
///   peek --format text env             # Environment variables in the terminal
///   cat data.json | peek json -o out.html
#[derive(Parser, Debug)]
#[command(name = "peek")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html, global = true)]
    pub format: Format,

    /// Truncate strings longer than this many characters
    ///
    /// Overrides PEEK_TRUNCATE_LENGTH.
    #[arg(short = 't', long, global = true)]
    pub truncate: Option<usize>,

    /// Skin name, looked up as <skin-dir>/<name>/skin.css
    ///
    /// Overrides PEEK_SKIN.
    #[arg(long, global = true)]
    pub skin: Option<String>,

    /// Directory holding skins
    #[arg(long, value_name = "DIR", global = true)]
    pub skin_dir: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    /// Name a callable; matching strings are annotated as callbacks
    ///
    /// May be given more than once. `Class::method` names a method.
    #[arg(long = "callable", value_name = "NAME", global = true)]
    pub callables: Vec<String>,

    /// Leave the version footnote out of HTML output
    #[arg(long, global = true)]
    pub no_footnote: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// A JSON document (reads stdin when no file is given)
    Json { file: Option<PathBuf> },
    /// An INI file
    Ini { file: PathBuf },
    /// Environment variables
    Env,
    /// Command-line arguments of this process
    Args,
    /// Entries of PATH
    Path,
    /// The active call stack
    Backtrace,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Environment config with command-line overrides applied.
    pub fn config(&self) -> RenderConfig {
        let mut config = RenderConfig::from_env();
        if let Some(n) = self.truncate {
            config = config.with_truncate_length(n);
        }
        if let Some(skin) = &self.skin {
            config.skin = skin.clone();
        }
        if self.skin_dir.is_some() {
            config.skin_dir = self.skin_dir.clone();
        }
        config
    }

    pub fn html(&self) -> HtmlEmitter {
        if self.no_footnote {
            HtmlEmitter::without_footnote()
        } else {
            HtmlEmitter::new()
        }
    }

    pub fn callables(&self) -> KnownCallables {
        self.callables.iter().cloned().collect()
    }

    /// Gather the collection the subcommand names.
    pub fn collection(&self) -> anyhow::Result<Collection> {
        let registry = CollectorRegistry::new();
        let (name, args) = match &self.command {
            Command::Json { file: None } => return stdin_json(),
            Command::Json { file: Some(file) } => ("json", vec![file.display().to_string()]),
            Command::Ini { file } => ("ini", vec![file.display().to_string()]),
            Command::Env => ("env", Vec::new()),
            Command::Args => ("args", Vec::new()),
            Command::Path => ("path", Vec::new()),
            Command::Backtrace => ("backtrace", Vec::new()),
        };
        let collector = registry
            .get(name)
            .with_context(|| format!("no collector named {}", name))?;
        collector.collect(&args)
    }
}

fn stdin_json() -> anyhow::Result<Collection> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("reading stdin")?;
    let json: serde_json::Value =
        serde_json::from_str(&content).context("stdin: JSON parse error")?;
    Ok(Collection {
        title: "This is a list of all the values from standard input.".to_string(),
        label: "stdin".to_string(),
        value: Value::from(json),
    })
}
