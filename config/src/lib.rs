use once_cell::sync::Lazy;

/// Colors used when printing, read from [`Config::path`] on first access.
///
/// The first node printed triggers the load, which reads the filesystem and may
/// log. Call [`init`] up front so later printing does neither.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::parse);

/// Loads [`CONFIG`] now instead of on the first print.
pub fn init() -> &'static Config {
    Lazy::force(&CONFIG)
}

use egui::Color32;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::colors")]
    pub colors: Colors,
}

/// Colors of the different roles a token can play within a demangled declaration.
#[derive(Debug, Deserialize)]
pub struct Colors {
    /// Identifiers: namespaces, classes, functions.
    #[serde(default = "defaults::item", deserialize_with = "color32")]
    pub item: Color32,
    /// Builtin types, calling conventions and keywords such as `operator`.
    #[serde(default = "defaults::known", deserialize_with = "color32")]
    pub known: Color32,
    /// cv-qualifiers and array lengths.
    #[serde(default = "defaults::annotation", deserialize_with = "color32")]
    pub annotation: Color32,
    /// Pointer and reference sigils.
    #[serde(default = "defaults::special", deserialize_with = "color32")]
    pub special: Color32,
    #[serde(default = "defaults::brackets", deserialize_with = "color32")]
    pub brackets: Color32,
    #[serde(default = "defaults::delimiter", deserialize_with = "color32")]
    pub delimiter: Color32,
    #[serde(default = "defaults::spacing", deserialize_with = "color32")]
    pub spacing: Color32,
}

/// Default color values when one is missing in the config.yaml's colors field.
mod defaults {
    use egui::Color32;

    pub fn config() -> super::Config {
        super::Config {
            colors: colors(),
        }
    }

    pub fn colors() -> super::Colors {
        super::Colors {
            item: item(),
            known: known(),
            annotation: annotation(),
            special: special(),
            brackets: brackets(),
            delimiter: delimiter(),
            spacing: spacing(),
        }
    }

    pub fn item() -> Color32 {
        Color32::from_rgb(0xf5, 0x12, 0x81)
    }
    pub fn known() -> Color32 {
        Color32::from_rgb(0x89, 0x1f, 0xff)
    }
    pub fn annotation() -> Color32 {
        Color32::from_rgb(0x0f, 0x62, 0xfe)
    }
    pub fn special() -> Color32 {
        Color32::from_rgb(0xff, 0x00, 0x0b)
    }
    pub fn brackets() -> Color32 {
        Color32::from_rgb(0x60, 0x60, 0x60)
    }
    pub fn delimiter() -> Color32 {
        Color32::from_rgb(0xa0, 0xa0, 0xa0)
    }
    pub fn spacing() -> Color32 {
        Color32::from_rgb(0xff, 0xff, 0xff)
    }
}

impl Config {
    /// Location of the user's config, if the platform has a data directory.
    pub fn path() -> Option<PathBuf> {
        let mut dir = dirs::data_dir()?;
        dir.push("borland-demangler");
        dir.push("config.yaml");
        Some(dir)
    }

    pub fn parse() -> Self {
        let path = match Self::path() {
            Some(path) => path,
            None => {
                log::warning!("[config::parse] no data directory set, using default colors.");
                return defaults::config();
            }
        };

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            // a missing config is the common case and parses as an empty document
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                log::warning!("[config::parse] failed to read '{}': {err}.", path.display());
                return defaults::config();
            }
        };

        let config = Self::from_str(&raw);
        if !raw.is_empty() {
            log::notify!("[config::parse] loaded '{}'.", path.display());
        }

        config
    }

    /// Parses a yaml document, falling back to defaults on any error.
    pub fn from_str(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return defaults::config();
        }

        match serde_yaml::from_str(raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warning!("[config::parse] failed to parse config.\nError: {err}.");

                // parse everything as default
                defaults::config()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::config()
    }
}

fn color32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
    struct ColorParsing;
    impl<'de> Visitor<'de> for ColorParsing {
        type Value = Color32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("expected hex color values")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            Color32::from_hex(s).map_err(|err| E::custom(format!("{err:?}")))
        }
    }

    deserializer.deserialize_str(ColorParsing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_str("");
        assert_eq!(config.colors.item, defaults::item());
        assert_eq!(config.colors.spacing, defaults::spacing());
    }

    #[test]
    fn partial_colors() {
        let config = Config::from_str("colors:\n  item: \"#102030\"\n");
        assert_eq!(config.colors.item, Color32::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(config.colors.known, defaults::known());
    }

    #[test]
    fn invalid_document_falls_back() {
        let config = Config::from_str("colors:\n  item: \"not a color\"\n");
        assert_eq!(config.colors.item, defaults::item());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn unreadable_config_is_logged() {
        let data_dir = tempfile::TempDir::new().unwrap();

        // a directory where the file should be can't be read as a string
        let path = data_dir.path().join("borland-demangler").join("config.yaml");
        std::fs::create_dir_all(&path).unwrap();
        std::env::set_var("XDG_DATA_HOME", data_dir.path());

        let config = Config::parse();
        assert_eq!(config.colors.item, defaults::item());

        let logger = log::LOGGER.read().unwrap();
        let warned = logger.lines().any(|(line, level)| {
            level == log::Level::Warning
                && line.starts_with("[config::parse] failed to read")
                && line.contains(&*path.to_string_lossy())
        });
        assert!(warned, "no warning logged for '{}'", path.display());
    }

    #[test]
    fn init_loads_config() {
        let config = init();
        assert!(Lazy::get(&CONFIG).is_some());
        assert!(std::ptr::eq(config, &*CONFIG));
    }
}
