//! The `backtrace` collector - the active call stack as a value.
//!
//! Each frame becomes a keyed container with `function` and, when the
//! location is known, `file` and `line`.

use super::{Collection, Collector};
use peek_api::{Container, Value};
use std::backtrace::Backtrace;

pub struct BacktraceCollector;

impl Collector for BacktraceCollector {
    fn name(&self) -> &'static str {
        "backtrace"
    }

    fn collect(&self, _args: &[String]) -> anyhow::Result<Collection> {
        let trace = Backtrace::force_capture();
        let frames = parse_frames(&trace.to_string());
        tracing::debug!(frames = frames.len(), "captured backtrace");

        Ok(Collection {
            title: "This is the active call stack.".to_string(),
            label: "backtrace".to_string(),
            value: Value::list(frames),
        })
    }
}

/// Parse the display form of a captured backtrace into frame values.
///
/// Frame lines look like `  3: module::function` and may be followed by an
/// `at path:line:column` line. Anything else is ignored.
pub fn parse_frames(text: &str) -> Vec<Value> {
    let mut frames = Vec::new();
    let mut current: Option<Container> = None;

    for line in text.lines().map(str::trim) {
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = current.as_mut() {
                let (file, line) = split_location(location);
                frame.insert("file", file);
                if let Some(line) = line {
                    frame.insert("line", line);
                }
            }
            continue;
        }

        let Some((index, function)) = line.split_once(": ") else {
            continue;
        };
        if index.parse::<usize>().is_err() {
            continue;
        }
        if let Some(frame) = current.take() {
            frames.push(Value::container(frame));
        }
        let mut frame = Container::new();
        frame.insert("function", function.trim());
        current = Some(frame);
    }

    if let Some(frame) = current {
        frames.push(Value::container(frame));
    }
    frames
}

// "path:line:column" -> (path, line)
fn split_location(location: &str) -> (String, Option<i64>) {
    let mut parts = location.rsplitn(3, ':');
    let (Some(_column), Some(line), Some(file)) = (parts.next(), parts.next(), parts.next()) else {
        return (location.to_string(), None);
    };
    match line.parse() {
        Ok(n) => (file.to_string(), Some(n)),
        Err(_) => (location.to_string(), None),
    }
}
