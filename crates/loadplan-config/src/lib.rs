//! Configuration system for loadplan.
//!
//! Load layout configuration from TOML or YAML to control preprocessing
//! heuristics, initializers and construction without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use loadplan_config::{LayoutConfig, PartOrdering, SortMetric};
//!
//! let config = LayoutConfig::from_toml_str(r#"
//!     random_seed = 7
//!     position_step = 5
//!     part_ordering = "hint_then_min"
//!
//!     [orientation_filter]
//!     min_area_only = true
//!
//!     [construction]
//!     sort_metric = "depth"
//! "#).unwrap();
//!
//! assert_eq!(config.position_step, 5);
//! assert_eq!(config.part_ordering, PartOrdering::HintThenMin);
//! assert!(config.orientation_filter.min_area_only);
//! assert!(config.orientation_filter.singleton_for_mandatory);
//! assert_eq!(config.construction.unwrap().sort_metric, SortMetric::Depth);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use loadplan_config::LayoutConfig;
//!
//! let config = LayoutConfig::load("layout.toml").unwrap_or_default();
//! assert_eq!(config.position_step, 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_true() -> bool {
    true
}

fn default_position_step() -> u32 {
    1
}

/// Main layout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LayoutConfig {
    /// Seed for the randomized initializer. `None` seeds from zero, so runs
    /// stay reproducible either way.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Granularity of the position value domain.
    #[serde(default = "default_position_step")]
    pub position_step: u32,

    /// Order in which parts are presented to construction and search.
    #[serde(default)]
    pub part_ordering: PartOrdering,

    #[serde(default)]
    pub orientation_filter: OrientationFilterConfig,

    #[serde(default)]
    pub hint_initializer: HintInitializerConfig,

    /// Randomized initializer; skipped when absent.
    #[serde(default)]
    pub random_initializer: Option<RandomInitializerConfig>,

    /// Shelf-packing construction; skipped when absent.
    #[serde(default)]
    pub construction: Option<ConstructionConfig>,

    /// Reorder allowed sides by hint, preference and footprint area.
    #[serde(default = "default_true")]
    pub side_ordering: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            position_step: default_position_step(),
            part_ordering: PartOrdering::default(),
            orientation_filter: OrientationFilterConfig::default(),
            hint_initializer: HintInitializerConfig::default(),
            random_initializer: None,
            construction: None,
            side_ordering: true,
        }
    }
}

impl LayoutConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, as YAML for `.yaml`/`.yml`
    /// extensions and as TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, cannot be parsed or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.position_step == 0 {
            return Err(ConfigError::Invalid(
                "position_step must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the position step.
    pub fn with_position_step(mut self, step: u32) -> Self {
        self.position_step = step;
        self
    }

    pub fn with_part_ordering(mut self, ordering: PartOrdering) -> Self {
        self.part_ordering = ordering;
        self
    }

    pub fn with_orientation_filter(mut self, filter: OrientationFilterConfig) -> Self {
        self.orientation_filter = filter;
        self
    }

    pub fn with_hint_initializer(mut self, hints: HintInitializerConfig) -> Self {
        self.hint_initializer = hints;
        self
    }

    pub fn with_random_initializer(mut self, random: RandomInitializerConfig) -> Self {
        self.random_initializer = Some(random);
        self
    }

    pub fn with_construction(mut self, construction: ConstructionConfig) -> Self {
        self.construction = Some(construction);
        self
    }

    pub fn with_side_ordering(mut self, enabled: bool) -> Self {
        self.side_ordering = enabled;
        self
    }

    /// Seed actually used by randomized heuristics.
    pub fn effective_seed(&self) -> u64 {
        self.random_seed.unwrap_or(0)
    }
}

/// Part ordering strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOrdering {
    /// Most flexible parts first, then smallest minimum allowed area.
    #[default]
    AllowedSides,

    /// Ascending minimum allowed area.
    MinArea,

    /// Ascending volume.
    Volume,

    /// Ascending default (unrotated) footprint area.
    DefaultArea,

    /// Ascending area of the hinted side, else minimum allowed area.
    HintThenMin,

    /// Descending difficulty weight (hardest parts first).
    Difficulty,
}

/// Orientation filter flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct OrientationFilterConfig {
    /// A mandatory hint's side becomes the only kept side.
    pub singleton_for_mandatory: bool,

    /// Drop the opposite of every side already kept.
    pub remove_equivalent_sides: bool,

    /// Keep only the minimum-area side after hinted/preferred sides.
    pub min_area_only: bool,

    /// Keep only the hinted and minimum-area sides, ignoring the preferred
    /// side and every other possible side.
    pub force_min_area: bool,
}

impl Default for OrientationFilterConfig {
    fn default() -> Self {
        Self {
            singleton_for_mandatory: true,
            remove_equivalent_sides: true,
            min_area_only: false,
            force_min_area: false,
        }
    }
}

/// Hint-driven initializer toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct HintInitializerConfig {
    pub assign_rotation: bool,
    pub assign_side: bool,

    /// Requires side and rotation to be assigned.
    pub assign_position: bool,

    /// Assign the preferred side to parts without a hint.
    pub preferred_side_without_hint: bool,

    /// Only initialize parts whose hint is mandatory.
    pub mandatory_only: bool,
}

impl Default for HintInitializerConfig {
    fn default() -> Self {
        Self {
            assign_rotation: true,
            assign_side: true,
            assign_position: true,
            preferred_side_without_hint: false,
            mandatory_only: false,
        }
    }
}

/// Randomized initializer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RandomInitializerConfig {
    /// Use the preferred side when one is declared.
    pub use_preferred_side: bool,

    /// Otherwise use the minimum-area side.
    pub use_min_area_side: bool,
}

impl Default for RandomInitializerConfig {
    fn default() -> Self {
        Self {
            use_preferred_side: true,
            use_min_area_side: true,
        }
    }
}

/// Shelf-packing construction configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ConstructionConfig {
    pub sort_metric: SortMetric,
}

/// Metric parts are sorted by (descending) before shelf packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMetric {
    #[default]
    MinAllowedArea,
    DefaultArea,
    Depth,
}

#[cfg(test)]
mod tests;
