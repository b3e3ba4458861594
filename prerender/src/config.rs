//! Configuration file support for the prerenderer.
//!
//! Loads an optional `site.toml`. A missing file means defaults; a file that
//! exists but cannot be read, parsed or validated is an error.

use aviz_core::DisclosureTiming;
use aviz_core::content::school;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub page: PageMeta,
    /// Popup auto-show delay and scroll threshold, handed to the browser bundle
    pub popup: DisclosureTiming,
    pub bundle: BundleAssets,
}

/// Document `<head>` metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: format!("{} | {}", school::NAME, school::TAGLINE),
            description: format!(
                "{} - English medium, UP Board, Playgroup to Class 8. Admissions open {}.",
                school::NAME,
                school::ADMISSION_YEAR
            ),
            lang: "en".into(),
        }
    }
}

/// Browser bundle produced by trunk / wasm-bindgen (`--target web`).
///
/// Without `js` the page ships as static markup only.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BundleAssets {
    /// URL of the JS glue module
    pub js: Option<String>,
    /// URL of the `.wasm` file; defaults to the one next to the glue
    pub wasm: Option<String>,
}

impl BundleAssets {
    /// Inline module script that initialises the bundle, if one is configured.
    ///
    /// Paths are written as JSON strings, which are valid escaped JS literals.
    pub fn bootstrap(&self) -> Option<String> {
        let js = serde_json::to_string(self.js.as_deref()?).ok()?;
        Some(match self.wasm.as_deref() {
            Some(wasm) => {
                let wasm = serde_json::to_string(wasm).ok()?;
                format!("import init from {js};\ninit({{ module_or_path: {wasm} }});")
            }
            None => format!("import init from {js};\ninit();"),
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl SiteConfig {
    /// Load config from `path`. Returns the default config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.popup.delay_ms == 0 {
            return Err(ConfigError::Invalid("popup.delay_ms must be greater than zero".into()));
        }
        let threshold = self.popup.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "popup.scroll_threshold must be a non-negative number, got {threshold}"
            )));
        }
        if self.bundle.wasm.is_some() && self.bundle.js.is_none() {
            return Err(ConfigError::Invalid("bundle.wasm requires bundle.js".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.popup, DisclosureTiming::default());
        assert_eq!(config.page.lang, "en");
        assert!(config.page.title.starts_with("Aviz Convent School"));
        assert!(config.bundle.bootstrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(&temp.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
[page]
title = "Open Day"

[popup]
delay_ms = 5000
scroll_threshold = 800.0

[bundle]
js = "/pkg/aviz_landing.js"
wasm = "/pkg/aviz_landing_bg.wasm"
"#,
        );

        let config = SiteConfig::load(&path).expect("valid config");
        assert_eq!(config.page.title, "Open Day");
        assert_eq!(config.page.lang, "en");
        assert_eq!(config.popup.delay_ms, 5000);
        assert_eq!(config.popup.scroll_threshold, 800.0);
        assert_eq!(config.bundle.js.as_deref(), Some("/pkg/aviz_landing.js"));
    }

    #[test]
    fn test_partial_popup_section_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[popup]\ndelay_ms = 1200\n");
        let config = SiteConfig::load(&path).expect("valid config");
        assert_eq!(config.popup.delay_ms, 1200);
        assert_eq!(config.popup.scroll_threshold, 500.0);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[popup\ndelay_ms = ");
        let err = SiteConfig::load(&path).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }

    #[test]
    fn test_zero_delay_is_invalid() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[popup]\ndelay_ms = 0\n");
        let err = SiteConfig::load(&path).expect_err("must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_negative_threshold_is_invalid() {
        let mut config = SiteConfig::default();
        config.popup.scroll_threshold = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_wasm_without_js_is_invalid() {
        let mut config = SiteConfig::default();
        config.bundle.wasm = Some("/pkg/app_bg.wasm".into());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bootstrap_script() {
        let bundle = BundleAssets {
            js: Some("/pkg/app.js".into()),
            wasm: Some("/pkg/app_bg.wasm".into()),
        };
        assert_eq!(
            bundle.bootstrap().as_deref(),
            Some("import init from \"/pkg/app.js\";\ninit({ module_or_path: \"/pkg/app_bg.wasm\" });")
        );

        let glue_only = BundleAssets {
            js: Some("/pkg/app.js".into()),
            wasm: None,
        };
        assert_eq!(
            glue_only.bootstrap().as_deref(),
            Some("import init from \"/pkg/app.js\";\ninit();")
        );
    }

    #[test]
    fn test_bootstrap_escapes_quotes_in_paths() {
        let bundle = BundleAssets {
            js: Some("/pkg/it's.js".into()),
            wasm: Some(r#"/pkg/"odd".wasm"#.into()),
        };
        assert_eq!(
            bundle.bootstrap().as_deref(),
            Some(r#"import init from "/pkg/it's.js";
init({ module_or_path: "/pkg/\"odd\".wasm" });"#)
        );
    }
}
