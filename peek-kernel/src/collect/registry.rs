//! Collector registry for looking up collectors by name.

use super::Collector;
use std::collections::HashMap;

use super::backtrace::BacktraceCollector;
use super::env::{ArgsCollector, EnvCollector, PathCollector};
use super::ini::IniCollector;
use super::json::JsonCollector;

/// Registry of all available collectors.
pub struct CollectorRegistry {
    collectors: HashMap<&'static str, Box<dyn Collector>>,
}

impl CollectorRegistry {
    /// Create a new registry with all built-in collectors registered.
    pub fn new() -> Self {
        let mut registry = Self {
            collectors: HashMap::new(),
        };

        registry.register(EnvCollector);
        registry.register(ArgsCollector);
        registry.register(PathCollector);
        registry.register(JsonCollector);
        registry.register(IniCollector);
        registry.register(BacktraceCollector);

        registry
    }

    /// Register a collector, replacing any with the same name.
    pub fn register<C: Collector + 'static>(&mut self, collector: C) {
        self.collectors.insert(collector.name(), Box::new(collector));
    }

    /// Look up a collector by name.
    pub fn get(&self, name: &str) -> Option<&dyn Collector> {
        self.collectors.get(name).map(|c| c.as_ref())
    }

    /// Check if a collector is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.collectors.contains_key(name)
    }

    /// List all registered collector names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.collectors.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CollectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Collection;
    use peek_api::Value;

    struct FixedCollector;

    impl Collector for FixedCollector {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn collect(&self, _args: &[String]) -> anyhow::Result<Collection> {
            Ok(Collection {
                title: "Fixed".to_string(),
                label: "fixed".to_string(),
                value: Value::Int(1),
            })
        }
    }

    #[test]
    fn test_registry_has_builtins() {
        let registry = CollectorRegistry::new();
        assert_eq!(registry.names(), vec!["args", "backtrace", "env", "ini", "json", "path"]);
        assert!(registry.get("env").is_some());
        assert!(!registry.contains("nope"));
    }

    #[test]
    fn test_register_custom_collector() {
        let mut registry = CollectorRegistry::new();
        registry.register(FixedCollector);
        let collection = registry.get("fixed").unwrap().collect(&[]).unwrap();
        assert!(matches!(collection.value, Value::Int(1)));
    }
}
