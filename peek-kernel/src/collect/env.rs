//! Process collectors - env, args, path.

use super::{Collection, Collector};
use peek_api::Value;

// ============================================================================
// env - environment variables
// ============================================================================

pub struct EnvCollector;

impl Collector for EnvCollector {
    fn name(&self) -> &'static str {
        "env"
    }

    fn collect(&self, _args: &[String]) -> anyhow::Result<Collection> {
        let mut entries: Vec<(String, String)> = std::env::vars_os()
            .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
            .collect();

        // Sort by key for consistent output
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Collection {
            title: "This is a list of all the environment variables.".to_string(),
            label: "env".to_string(),
            value: Value::map(entries),
        })
    }
}

// ============================================================================
// args - command-line arguments
// ============================================================================

pub struct ArgsCollector;

impl Collector for ArgsCollector {
    fn name(&self) -> &'static str {
        "args"
    }

    fn collect(&self, _args: &[String]) -> anyhow::Result<Collection> {
        let args: Vec<String> = std::env::args_os()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        Ok(Collection {
            title: "This is a list of the process command-line arguments.".to_string(),
            label: "args".to_string(),
            value: Value::list(args),
        })
    }
}

// ============================================================================
// path - PATH search directories
// ============================================================================

pub struct PathCollector;

impl Collector for PathCollector {
    fn name(&self) -> &'static str {
        "path"
    }

    fn collect(&self, _args: &[String]) -> anyhow::Result<Collection> {
        let dirs: Vec<String> = std::env::var_os("PATH")
            .map(|path| {
                std::env::split_paths(&path)
                    .map(|p| p.display().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Collection {
            title: "This is a list of the directories in PATH.".to_string(),
            label: "PATH".to_string(),
            value: Value::list(dirs),
        })
    }
}
