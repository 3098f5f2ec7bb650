//! Host-collection collectors.
//!
//! Each collector gathers one named collection from the host (environment,
//! arguments, the call stack, a parsed file) into a plain `Value` and
//! describes it with a title and a label. Collectors know nothing about rendering.

mod backtrace;
mod env;
mod ini;
mod json;
mod registry;

pub use backtrace::{parse_frames, BacktraceCollector};
pub use env::{ArgsCollector, EnvCollector, PathCollector};
pub use ini::{parse_ini, IniCollector};
pub use json::JsonCollector;
pub use registry::CollectorRegistry;

use peek_api::Value;

/// A gathered collection, ready to be rendered.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Sentence shown above the rendered tree.
    pub title: String,
    /// Label of the root node.
    pub label: String,
    pub value: Value,
}

/// Trait for anything that gathers a host collection.
pub trait Collector {
    /// The collector name (e.g., "env", "json").
    fn name(&self) -> &'static str;

    /// Gather the collection. `args` carries collector-specific input such
    /// as a file path.
    fn collect(&self, args: &[String]) -> anyhow::Result<Collection>;
}

/// First argument as a path, or an error naming the collector.
fn path_arg<'a>(name: &str, args: &'a [String]) -> anyhow::Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{}: missing file argument", name))
}
