//! Static application configuration.
//!
//! The category tables and image pools the application consumes are
//! read-only inputs, injected into the data store and the view
//! computations rather than baked into them. A TOML file can override the
//! built-in defaults.

/// Budget plots and the transaction category list
pub mod budgets;

/// Image pools for subscriptions, goals, and the dashboard plant
pub mod images;

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Error, Result};

pub use budgets::BudgetCategory;
pub use images::{Flower, PlantImages};

/// The entire static configuration consumed by the core.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Budget plots: one spending limit per category
    pub budgets: Vec<BudgetCategory>,
    /// The fixed transaction category list
    pub categories: Vec<String>,
    /// Icon pool for newly created subscriptions
    pub subscription_images: Vec<String>,
    /// Flower pool for newly created savings goals
    pub flowers: Vec<Flower>,
    /// Dashboard plant illustration per financial-health state
    pub plants: PlantImages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            budgets: budgets::default_budgets(),
            categories: budgets::default_categories(),
            subscription_images: images::default_subscription_images(),
            flowers: images::default_flowers(),
            plants: PlantImages::default(),
        }
    }
}

impl AppConfig {
    /// Whether `category` belongs to the fixed transaction category list.
    #[must_use]
    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
/// Sections left out of the file keep their built-in defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_default_config_is_consistent() {
        let config = AppConfig::default();

        // Every budget plot draws from the category list
        for budget in &config.budgets {
            assert!(
                config.is_known_category(&budget.category),
                "budget category '{}' missing from category list",
                budget.category
            );
        }
        assert!(!config.subscription_images.is_empty());
        assert!(!config.flowers.is_empty());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let toml_str = r#"
            categories = ["Food", "Rent"]

            [[budgets]]
            category = "Food"
            limit = 200.0
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.categories, vec!["Food", "Rent"]);
        assert_eq!(config.budgets.len(), 1);
        assert_eq!(config.budgets[0].limit, 200.0);
        // Unspecified sections fall back to defaults
        assert!(!config.flowers.is_empty());
    }

    #[test]
    fn test_parse_flower_pool() {
        let toml_str = r#"
            [[flowers]]
            name = "Rose"
            image_url = "https://example.com/rose.png"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.flowers.len(), 1);
        assert_eq!(config.flowers[0].name, "Rose");
    }
}
