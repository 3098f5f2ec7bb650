//! Skins - the stylesheet that goes with the HTML markup.
//!
//! A skin is `<skin_dir>/<name>/skin.css`. When it cannot be used the
//! built-in default stylesheet is used instead and the reason is kept as a
//! warning for the emitter to show.

use std::fs;
use std::path::{Path, PathBuf};

use peek_kernel::RenderConfig;

use crate::error::{PeekError, Result};

/// Built-in stylesheet.
pub const DEFAULT_CSS: &str = include_str!("../assets/default.css");

/// Client-side expand/collapse script.
pub const TOGGLE_SCRIPT: &str = include_str!("../assets/toggle.js");

/// Where a skin's stylesheet came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinSource {
    Builtin,
    File(PathBuf),
}

/// A loaded skin.
#[derive(Debug, Clone)]
pub struct Skin {
    pub name: String,
    pub css: String,
    pub source: SkinSource,
    /// Why the requested skin was not used, if it wasn't.
    pub warning: Option<String>,
}

impl Skin {
    /// The built-in default skin.
    pub fn builtin() -> Self {
        Self {
            name: "default".to_string(),
            css: DEFAULT_CSS.to_string(),
            source: SkinSource::Builtin,
            warning: None,
        }
    }

    /// Load the skin named by `config`, falling back to the built-in skin.
    pub fn load(config: &RenderConfig) -> Self {
        let name = canonical_name(&config.skin);
        let Some(dir) = config.skin_dir.as_deref() else {
            if name != "default" {
                return Self::fallback(format!(
                    "skin \"{}\" requested but no skin directory is configured",
                    name
                ));
            }
            return Self::builtin();
        };

        match read_skin(dir, name) {
            Ok((path, css)) => {
                tracing::debug!("using skin {}", path.display());
                Self {
                    name: name.to_string(),
                    css,
                    source: SkinSource::File(path),
                    warning: None,
                }
            }
            Err(e) if name == "default" => {
                // No override of the default skin on disk
                tracing::debug!("{}", e);
                Self::builtin()
            }
            Err(e) => Self::fallback(e.to_string()),
        }
    }

    fn fallback(reason: String) -> Self {
        tracing::warn!("{}; using the default skin", reason);
        Self {
            warning: Some(reason),
            ..Self::builtin()
        }
    }

    /// Label for the stylesheet comment, e.g. `default/skin.css`.
    pub fn describe(&self) -> String {
        match &self.source {
            SkinSource::Builtin => "default (built-in)".to_string(),
            SkinSource::File(_) => format!("{}/skin.css", self.name),
        }
    }
}

// Legacy skin names
fn canonical_name(name: &str) -> &str {
    match name {
        "schablon.com" => "kaloyan.info",
        other => other,
    }
}

fn read_skin(dir: &Path, name: &str) -> Result<(PathBuf, String)> {
    let path = dir.join(name).join("skin.css");
    let css = fs::read_to_string(&path).map_err(|source| PeekError::Skin {
        path: path.clone(),
        source,
    })?;
    if css.trim().is_empty() {
        return Err(PeekError::EmptySkin { path });
    }
    Ok((path, css))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn skin_dir(skins: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, css) in skins {
            fs::create_dir_all(dir.path().join(name)).unwrap();
            fs::write(dir.path().join(name).join("skin.css"), css).unwrap();
        }
        dir
    }

    #[test]
    fn test_default_without_dir_is_builtin() {
        let skin = Skin::load(&RenderConfig::default());
        assert_eq!(skin.source, SkinSource::Builtin);
        assert!(skin.warning.is_none());
        assert!(skin.css.contains("peek-node"));
    }

    #[test]
    fn test_named_skin_from_dir() {
        let dir = skin_dir(&[("blue", "body { color: blue; }")]);
        let config = RenderConfig::default().with_skin("blue", Some(dir.path().to_path_buf()));
        let skin = Skin::load(&config);
        assert_eq!(skin.css, "body { color: blue; }");
        assert!(matches!(skin.source, SkinSource::File(_)));
        assert!(skin.warning.is_none());
        assert_eq!(skin.describe(), "blue/skin.css");
    }

    #[test]
    fn test_missing_skin_falls_back_with_warning() {
        let dir = skin_dir(&[]);
        let config = RenderConfig::default().with_skin("nope", Some(dir.path().to_path_buf()));
        let skin = Skin::load(&config);
        assert_eq!(skin.source, SkinSource::Builtin);
        let warning = skin.warning.unwrap();
        assert!(warning.contains("nope"));
        assert!(warning.contains("unable to read skin"));
    }

    #[test]
    fn test_empty_skin_falls_back() {
        let dir = skin_dir(&[("blank", "  \n")]);
        let config = RenderConfig::default().with_skin("blank", Some(dir.path().to_path_buf()));
        let skin = Skin::load(&config);
        assert_eq!(skin.source, SkinSource::Builtin);
        assert!(skin.warning.unwrap().contains("is empty"));
    }

    #[test]
    fn test_legacy_name_alias() {
        let dir = skin_dir(&[("kaloyan.info", "a {}")]);
        let config =
            RenderConfig::default().with_skin("schablon.com", Some(dir.path().to_path_buf()));
        let skin = Skin::load(&config);
        assert_eq!(skin.name, "kaloyan.info");
        assert_eq!(skin.css, "a {}");
    }

    #[test]
    fn test_named_skin_without_dir_warns() {
        let config = RenderConfig::default().with_skin("blue", None);
        let skin = Skin::load(&config);
        assert!(skin.warning.is_some());
        assert_eq!(skin.source, SkinSource::Builtin);
    }
}
