//! Savings goal entity.
//!
//! Goals are created by explicit user action and never deleted. The only
//! mutation is "add funds", which accumulates toward the target without
//! ever exceeding it.

use serde::{Deserialize, Serialize};

/// A savings goal with accumulated progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier, assigned as max(existing) + 1
    pub id: i64,
    /// Human-readable goal title (e.g., "Vacation fund")
    pub title: String,
    /// Target amount, always positive. Serialized as `goal` for
    /// compatibility with the original data format.
    #[serde(rename = "goal")]
    pub target: f64,
    /// Accumulated amount, starts at 0 and is clamped to `target`
    pub current: f64,
    /// Flower illustration assigned from the configured pool
    pub image_url: String,
}

impl Goal {
    /// Progress toward the target as a fraction in `[0, 1]`.
    ///
    /// A non-positive target yields 0 rather than dividing by zero.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }

    /// Whether the goal has been fully funded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }
}
