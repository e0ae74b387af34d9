//! Subscription entity.
//!
//! Subscriptions are the only records the user can both create and delete.
//! Each one gets an icon assigned pseudo-randomly from a fixed pool at
//! creation time.

use serde::{Deserialize, Serialize};

/// Billing period of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPeriod {
    /// Billed every month
    Monthly,
    /// Billed once a year
    Yearly,
}

/// A recurring subscription tracked by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Unique identifier, assigned as max(existing) + 1
    pub id: i64,
    /// Service name (e.g., "Streaming Deluxe")
    pub title: String,
    /// Billed amount, always positive
    pub amount: f64,
    /// Billing period
    pub period: SubscriptionPeriod,
    /// Icon assigned from the configured pool at creation
    pub image_url: String,
}

/// Input for creating a subscription; id and icon are assigned by the store.
#[derive(Clone, Debug)]
pub struct NewSubscription {
    /// Service name
    pub title: String,
    /// Billed amount
    pub amount: f64,
    /// Billing period
    pub period: SubscriptionPeriod,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_period_serializes_lowercase() {
        let json = serde_json::to_string(&SubscriptionPeriod::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
        let back: SubscriptionPeriod = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(back, SubscriptionPeriod::Yearly);
    }
}
