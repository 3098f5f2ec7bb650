//! The `json` collector - a JSON document as a value.

use super::{path_arg, Collection, Collector};
use peek_api::Value;
use std::fs;

pub struct JsonCollector;

impl Collector for JsonCollector {
    fn name(&self) -> &'static str {
        "json"
    }

    fn collect(&self, args: &[String]) -> anyhow::Result<Collection> {
        let file = path_arg(self.name(), args)?;
        let content =
            fs::read_to_string(file).map_err(|e| anyhow::anyhow!("{}: {}", file, e))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{}: JSON parse error: {}", file, e))?;

        Ok(Collection {
            title: format!("This is a list of all the values from the {} JSON file.", file),
            label: file.to_string(),
            value: Value::from(json),
        })
    }
}
