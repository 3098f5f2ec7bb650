//! The `ini` collector - an INI file as a value.
//!
//! `[section]` headers open nested containers, `key = value` lines become
//! text members, and `key[] = value` lines append to a list. Lines starting
//! with `;` or `#` are comments.

use super::{path_arg, Collection, Collector};
use peek_api::{Container, Key, Value};
use std::fs;

pub struct IniCollector;

impl Collector for IniCollector {
    fn name(&self) -> &'static str {
        "ini"
    }

    fn collect(&self, args: &[String]) -> anyhow::Result<Collection> {
        let file = path_arg(self.name(), args)?;
        let content =
            fs::read_to_string(file).map_err(|e| anyhow::anyhow!("{}: {}", file, e))?;
        let value = parse_ini(&content).map_err(|e| anyhow::anyhow!("{}: {}", file, e))?;

        Ok(Collection {
            title: format!("This is a list of all the values from the {} INI file.", file),
            label: file.to_string(),
            value,
        })
    }
}

/// Parse INI text into a keyed container.
pub fn parse_ini(text: &str) -> anyhow::Result<Value> {
    let mut root = Container::new();
    let mut section: Option<(String, Container)> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| anyhow::anyhow!("line {}: unterminated section header", lineno + 1))?
                .trim();
            if let Some((prev, members)) = section.take() {
                root.insert(prev, Value::container(members));
            }
            section = Some((name.to_string(), Container::new()));
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("line {}: expected 'key = value'", lineno + 1))?;
        let key = key.trim();
        let value = unquote(value.trim());

        let target = match section.as_mut() {
            Some((_, members)) => members,
            None => &mut root,
        };
        insert_entry(target, key, value);
    }

    if let Some((name, members)) = section {
        root.insert(name, Value::container(members));
    }
    Ok(Value::container(root))
}

fn insert_entry(target: &mut Container, key: &str, value: &str) {
    let Some(list_key) = key.strip_suffix("[]") else {
        target.insert(key, value);
        return;
    };

    let list_key = Key::from(list_key.trim());
    if let Some(Value::Container(list)) = target.get(&list_key) {
        list.borrow_mut().push(value);
        return;
    }
    target.insert(list_key, Value::list(vec![value]));
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value) -> Vec<String> {
        value
            .as_container()
            .unwrap()
            .borrow()
            .iter()
            .map(|(k, _)| k.to_string())
            .collect()
    }

    fn text_at(value: &Value, key: &str) -> String {
        match value.as_container().unwrap().borrow().get(&Key::from(key)) {
            Some(Value::Text(s)) => s.clone(),
            other => panic!("expected text at {}, got {:?}", key, other),
        }
    }

    #[test]
    fn test_sections_and_globals() {
        let value = parse_ini(
            "; comment\nname = top\n\n[db]\nhost = \"localhost\"\nport=5432\n# another\n[cache]\nttl = '60'\n",
        )
        .unwrap();
        assert_eq!(keys(&value), vec!["name", "db", "cache"]);
        assert_eq!(text_at(&value, "name"), "top");

        let root = value.as_container().unwrap().borrow();
        let db = root.get(&Key::from("db")).unwrap().clone();
        assert_eq!(keys(&db), vec!["host", "port"]);
        assert_eq!(text_at(&db, "host"), "localhost");
        assert_eq!(text_at(&db, "port"), "5432");
        let cache = root.get(&Key::from("cache")).unwrap().clone();
        assert_eq!(text_at(&cache, "ttl"), "60");
    }

    #[test]
    fn test_list_entries() {
        let value = parse_ini("[paths]\ndir[] = /a\ndir[] = /b\n").unwrap();
        let root = value.as_container().unwrap().borrow();
        let paths = root.get(&Key::from("paths")).unwrap().clone();
        let paths = paths.as_container().unwrap().borrow();
        let dir = paths.get(&Key::from("dir")).unwrap().as_container().unwrap().borrow();
        assert_eq!(dir.len(), 2);
        assert!(matches!(dir.get(&Key::Index(1)), Some(Value::Text(s)) if s == "/b"));
    }

    #[test]
    fn test_malformed_lines() {
        let err = parse_ini("[open\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
        let err = parse_ini("ok = 1\njunk\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_ini_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[s]\nk = v\n").unwrap();
        let path = file.path().display().to_string();
        let collection = IniCollector.collect(&[path]).unwrap();
        assert_eq!(keys(&collection.value), vec!["s"]);
        assert!(collection.title.contains("INI file"));
    }
}
