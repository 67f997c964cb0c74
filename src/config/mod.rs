//! Configuration module for timbertrees
//!
//! Names the markup the renderer emits (tag attributes, card class, toggle id)
//! and the classes/attributes the engine writes back, plus two behavior
//! switches. Every field has a default matching the stock stylesheet, so an
//! empty or partial TOML file is valid.
//!
//! ```toml
//! [markup]
//! card_class = "card"
//! found_class = "found"
//!
//! [behavior]
//! active_click = "clear"
//! preserve_toggle_position = false
//! ```

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What a searchable click does while a search is already active
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveClick {
    /// Any searchable click turns the search off
    #[default]
    Clear,
    /// Clicking an entry with different tags switches the search to them
    Switch,
}

/// Attribute, class and id names shared with the renderer and stylesheet
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Space separated searchable tags on an entry
    pub searchable_attribute: String,
    /// Space separated category tags on an entry
    pub category_attribute: String,
    /// Class identifying card containers
    pub card_class: String,
    /// Element id of the facet toggle control
    pub toggle_id: String,
    /// Class written on matching entries
    pub found_class: String,
    /// Class written on cards containing a matching entry
    pub exposed_class: String,
    /// Root attribute present while a search is active
    pub search_state_attribute: String,
    /// Root attribute holding the active facet
    pub category_state_attribute: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            searchable_attribute: "data-searchable".to_string(),
            category_attribute: "data-category".to_string(),
            card_class: "card".to_string(),
            toggle_id: "toggle".to_string(),
            found_class: "found".to_string(),
            exposed_class: "exposed".to_string(),
            search_state_attribute: "data-search".to_string(),
            category_state_attribute: "data-facet".to_string(),
        }
    }
}

/// Interaction switches
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Searchable click while a search is active
    pub active_click: ActiveClick,
    /// Keep the toggle control stationary when cycling facets
    pub preserve_toggle_position: bool,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct HighlightConfig {
    #[serde(default)]
    pub markup: MarkupConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl HighlightConfig {
    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text cannot be parsed.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
