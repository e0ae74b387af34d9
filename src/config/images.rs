//! Image pools for subscriptions, savings goals, and the dashboard plant.

use rand::Rng;
use serde::Deserialize;

/// A flower illustration selectable for a savings goal.
#[derive(Debug, Clone, Deserialize)]
pub struct Flower {
    /// Display name (e.g., "Rose")
    pub name: String,
    /// Illustration URL
    pub image_url: String,
}

/// Dashboard plant illustration per financial-health state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlantImages {
    /// Shown when the savings rate is below 10%
    pub stressed: String,
    /// Shown for new accounts and savings rates below 30%
    pub young: String,
    /// Shown for savings rates below 50%
    pub healthy: String,
    /// Shown for savings rates of 50% and above
    pub thriving: String,
}

impl Default for PlantImages {
    fn default() -> Self {
        Self {
            stressed: "https://i.ibb.co/P9T0Gk9/plant-stressed.png".to_string(),
            young: "https://i.ibb.co/c8pTfQd/plant-young.png".to_string(),
            healthy: "https://i.ibb.co/9gfY7T5/plant-healthy.png".to_string(),
            thriving: "https://i.ibb.co/yqg4YyP/plant-thriving.png".to_string(),
        }
    }
}

/// The built-in subscription icon pool.
#[must_use]
pub fn default_subscription_images() -> Vec<String> {
    [
        "https://i.ibb.co/L8yW3D7/sub-icon-1.png",
        "https://i.ibb.co/zV2h4w2/sub-icon-2.png",
        "https://i.ibb.co/hR1jPZv/sub-icon-3.png",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// The built-in flower pool for savings goals.
#[must_use]
pub fn default_flowers() -> Vec<Flower> {
    [
        ("Rose", "https://i.ibb.co/2kZpTf6/flower-rose.png"),
        ("Tulip", "https://i.ibb.co/k3g3b2h/flower-tulip.png"),
        ("Sunflower", "https://i.ibb.co/XzLwJjV/flower-sunflower.png"),
        ("Daisy", "https://i.ibb.co/qYdYvM9/flower-daisy.png"),
    ]
    .into_iter()
    .map(|(name, image_url)| Flower {
        name: name.to_string(),
        image_url: image_url.to_string(),
    })
    .collect()
}

/// Picks one entry from a pool pseudo-randomly.
///
/// Returns None for an empty pool; creation paths treat that as a
/// configuration error.
pub fn pick_random<T>(pool: &[T]) -> Option<&T> {
    if pool.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..pool.len());
    pool.get(index)
}
