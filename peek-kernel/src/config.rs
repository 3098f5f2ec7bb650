//! Render configuration.

use std::path::PathBuf;

/// Default number of characters a text may have before it is truncated.
pub const TRUNCATE_LENGTH: usize = 50;

/// Smallest usable truncation threshold: one character plus the ellipsis.
pub const MIN_TRUNCATE_LENGTH: usize = 4;

/// Configuration for a renderer and its presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Texts longer than this are truncated, with the full text in a child.
    pub truncate_length: usize,

    /// A disabled configuration renders and dumps nothing.
    pub enabled: bool,

    /// Skin (stylesheet) name, a folder under `skin_dir`.
    pub skin: String,

    /// Where skins live. `None` uses only the built-in default skin.
    pub skin_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            truncate_length: TRUNCATE_LENGTH,
            enabled: true,
            skin: String::from("default"),
            skin_dir: None,
        }
    }
}

impl RenderConfig {
    /// Default configuration overlaid with `PEEK_TRUNCATE_LENGTH` and
    /// `PEEK_SKIN` from the environment.
    pub fn from_env() -> Self {
        Self::default().overlay(|name| std::env::var(name).ok())
    }

    /// Overlay settings looked up by variable name.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("PEEK_TRUNCATE_LENGTH") {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.truncate_length = n,
                Err(e) => tracing::warn!("ignoring PEEK_TRUNCATE_LENGTH={:?}: {}", raw, e),
            }
        }
        if let Some(skin) = lookup("PEEK_SKIN") {
            if !skin.trim().is_empty() {
                self.skin = skin.trim().to_string();
            }
        }
        self
    }

    pub fn with_truncate_length(mut self, n: usize) -> Self {
        self.truncate_length = n;
        self
    }

    pub fn with_skin(mut self, skin: impl Into<String>, dir: Option<PathBuf>) -> Self {
        self.skin = skin.into();
        self.skin_dir = dir;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The truncation threshold actually used, never below
    /// [`MIN_TRUNCATE_LENGTH`].
    pub fn effective_truncate_length(&self) -> usize {
        if self.truncate_length < MIN_TRUNCATE_LENGTH {
            tracing::warn!(
                "truncate length {} is too small, using {}",
                self.truncate_length,
                MIN_TRUNCATE_LENGTH
            );
            return MIN_TRUNCATE_LENGTH;
        }
        self.truncate_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.truncate_length, 50);
        assert!(config.enabled);
        assert_eq!(config.skin, "default");
        assert!(config.skin_dir.is_none());
    }

    #[test]
    fn test_overlay() {
        let vars: HashMap<&str, &str> =
            [("PEEK_TRUNCATE_LENGTH", " 20 "), ("PEEK_SKIN", "blue")].into_iter().collect();
        let config = RenderConfig::default().overlay(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.truncate_length, 20);
        assert_eq!(config.skin, "blue");
    }

    #[test]
    fn test_overlay_ignores_garbage() {
        let config = RenderConfig::default().overlay(|k| match k {
            "PEEK_TRUNCATE_LENGTH" => Some("lots".to_string()),
            "PEEK_SKIN" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_effective_truncate_length_clamps() {
        assert_eq!(RenderConfig::default().with_truncate_length(2).effective_truncate_length(), 4);
        assert_eq!(RenderConfig::default().with_truncate_length(10).effective_truncate_length(), 10);
    }
}
