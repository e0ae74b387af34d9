//! Entity module - Plain data models persisted as JSON blobs.
//! Field names serialize in camelCase to stay compatible with the
//! `localStorage` format the data originated from.

pub mod bundle;
pub mod goal;
pub mod subscription;
pub mod transaction;
pub mod user;

pub use bundle::UserData;
pub use goal::Goal;
pub use subscription::{NewSubscription, Subscription, SubscriptionPeriod};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
pub use user::{Credential, Session};
