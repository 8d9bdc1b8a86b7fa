// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::report::OutputFormat;
use crate::stats::{ORPHAN_FOLDER_NAME, ORPHAN_RANGE_NAME};

/// Where the catalog and usage snapshots are read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub usage_path: Option<PathBuf>,
}

/// Display configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_hide_zero_counts")]
    pub hide_zero_counts: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_orphan_folder_label")]
    pub orphan_folder_label: String,
    #[serde(default = "default_orphan_range_label")]
    pub orphan_range_label: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_hide_zero_counts() -> bool {
    true
}

fn default_title() -> String {
    "Most used ranges".to_string()
}

fn default_orphan_folder_label() -> String {
    ORPHAN_FOLDER_NAME.to_string()
}

fn default_orphan_range_label() -> String {
    ORPHAN_RANGE_NAME.to_string()
}

fn default_empty_message() -> String {
    "No usage recorded yet".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            hide_zero_counts: default_hide_zero_counts(),
            format: OutputFormat::default(),
            title: default_title(),
            orphan_folder_label: default_orphan_folder_label(),
            orphan_range_label: default_orphan_range_label(),
            empty_message: default_empty_message(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Every display field is optional and falls back to its default.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_display_fields_use_defaults(
            include_display_section in prop::bool::ANY,
            include_hide_zero in prop::bool::ANY
        ) {
            let toml_content = if !include_display_section {
                String::new()
            } else if !include_hide_zero {
                "[display]\n".to_string()
            } else {
                "[display]\nhide_zero_counts = false\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            if include_display_section && include_hide_zero {
                prop_assert!(!config.display.hide_zero_counts);
            } else {
                prop_assert!(config.display.hide_zero_counts);
            }
            prop_assert_eq!(config.display.format, OutputFormat::Dialog);
            prop_assert_eq!(config.display.title, "Most used ranges");
        }

        #[test]
        fn prop_valid_format_parsing(format in prop::sample::select(vec!["dialog", "plain", "json"])) {
            let toml_content = format!("[display]\nformat = \"{}\"\n", format);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid format: {}", format);

            let expected = match format {
                "dialog" => OutputFormat::Dialog,
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().display.format, expected);
        }
    }

    #[test]
    fn test_display_config_default() {
        let config = DisplayConfig::default();
        assert!(config.hide_zero_counts);
        assert_eq!(config.orphan_folder_label, ORPHAN_FOLDER_NAME);
        assert_eq!(config.orphan_range_label, ORPHAN_RANGE_NAME);
        assert_eq!(config.empty_message, "No usage recorded yet");
    }

    #[test]
    fn test_parse_storage_paths() {
        let toml = r#"
[storage]
catalog_path = "/srv/ranges/catalog.json"
usage_path = "/srv/ranges/usage.json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.storage.catalog_path,
            Some(PathBuf::from("/srv/ranges/catalog.json"))
        );
        assert_eq!(
            config.storage.usage_path,
            Some(PathBuf::from("/srv/ranges/usage.json"))
        );
    }

    #[test]
    fn test_parse_localized_labels() {
        let toml = r#"
[display]
title = "Meistgenutzte Ranges"
orphan_folder_label = "Ordner gelöscht"
orphan_range_label = "Range fehlt"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.display.title, "Meistgenutzte Ranges");
        assert_eq!(config.display.orphan_folder_label, "Ordner gelöscht");
        assert_eq!(config.display.orphan_range_label, "Range fehlt");
        assert_eq!(config.display.empty_message, "No usage recorded yet");
    }

    #[test]
    fn test_invalid_format_fails_parse() {
        let toml = "[display]\nformat = \"html\"\n";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err(), "Invalid format should fail to parse");
    }
}
