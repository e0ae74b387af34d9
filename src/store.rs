//! Per-user data store - goals, subscriptions, and transactions.
//!
//! A [`UserStore`] is scoped to the authenticated user: constructing one
//! performs the once-per-session load of that user's bundle, and every
//! mutation rewrites the whole bundle under `userData_<email>`. The
//! in-memory bundle is the sole source of truth between persists; the
//! model assumes a single active writer, so writes are unconditional
//! overwrites with no read-modify-write protection.

use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::auth::SessionManager;
use crate::config::{AppConfig, images};
use crate::core::IncomeFlag;
use crate::entities::bundle::next_id;
use crate::entities::{
    Goal, NewSubscription, NewTransaction, Subscription, Transaction, TransactionKind, UserData,
};
use crate::errors::{Error, Result};
use crate::storage::{BlobStore, user_data_key};

/// The authenticated user's goals, subscriptions, and transactions.
#[derive(Debug)]
pub struct UserStore<S> {
    store: Arc<S>,
    config: Arc<AppConfig>,
    email: String,
    data: UserData,
    income_flag: IncomeFlag,
}

impl<S: BlobStore> UserStore<S> {
    /// Loads the bundle for the currently authenticated user.
    ///
    /// Fails with [`Error::NoActiveSession`] while anonymous. An absent or
    /// malformed bundle initializes to the empty bundle. This is the
    /// once-per-session load; all mutations afterwards work on the
    /// in-memory snapshot.
    pub fn load(
        store: Arc<S>,
        config: Arc<AppConfig>,
        sessions: &SessionManager<S>,
    ) -> Result<Self> {
        let session = sessions.current().ok_or(Error::NoActiveSession)?;
        let email = session.email.clone();
        let key = user_data_key(&email);

        let data = match store.read_json::<UserData>(&key) {
            Ok(Some(bundle)) => bundle,
            Ok(None) => {
                debug!(%email, "no bundle yet; starting fresh");
                UserData::default()
            }
            Err(Error::MalformedPersistedData { .. }) => {
                warn!(%email, "bundle is malformed; starting from empty");
                UserData::default()
            }
            Err(err) => return Err(err),
        };

        info!(
            %email,
            goals = data.goals.len(),
            subscriptions = data.subscriptions.len(),
            transactions = data.transactions.len(),
            "loaded user data"
        );

        Ok(Self {
            store,
            config,
            email,
            data,
            income_flag: IncomeFlag::default(),
        })
    }

    /// Email of the user this store is scoped to.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Savings goals in creation order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    /// Subscriptions in creation order.
    #[must_use]
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.data.subscriptions
    }

    /// Transactions, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    /// The transient income-animation flag. Cancelled automatically when
    /// the store (and with it the session's view) is torn down.
    #[must_use]
    pub fn income_flag(&self) -> &IncomeFlag {
        &self.income_flag
    }

    /// Creates a savings goal with a flower picked from the configured
    /// pool. Progress starts at zero; goals are never deleted.
    pub fn add_goal(&mut self, title: &str, target: f64) -> Result<Goal> {
        validate_amount(target)?;
        let flower = images::pick_random(&self.config.flowers).ok_or_else(|| Error::Config {
            message: "flower image pool is empty".to_string(),
        })?;

        let goal = Goal {
            id: next_id(&self.data.goals, |g| g.id),
            title: title.to_string(),
            target,
            current: 0.0,
            image_url: flower.image_url.clone(),
        };
        debug!(id = goal.id, %title, "added goal");
        self.data.goals.push(goal.clone());
        self.persist()?;
        Ok(goal)
    }

    /// Adds funds to a goal, clamping at the target: accumulating past it
    /// silently discards the excess rather than erroring.
    pub fn add_funds(&mut self, goal_id: i64, amount: f64) -> Result<Goal> {
        validate_amount(amount)?;
        let goal = self
            .data
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or(Error::GoalNotFound { id: goal_id })?;

        goal.current = (goal.current + amount).min(goal.target);
        let updated = goal.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Records a transaction, prepending it so the sequence stays
    /// newest-first. The date defaults to the current calendar day. An
    /// income transaction raises the income-animation flag.
    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<Transaction> {
        validate_amount(input.amount)?;
        if !self.config.is_known_category(&input.category) {
            return Err(Error::UnknownCategory {
                category: input.category,
            });
        }

        let transaction = Transaction {
            id: next_id(&self.data.transactions, |t| t.id),
            description: input.description,
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            date: input.date.unwrap_or_else(|| Local::now().date_naive()),
        };
        debug!(id = transaction.id, "added transaction");
        self.data.transactions.insert(0, transaction.clone());

        if transaction.kind == TransactionKind::Income {
            self.income_flag.trigger();
        }

        self.persist()?;
        Ok(transaction)
    }

    /// Replaces a transaction in full, preserving its sequence position.
    ///
    /// The replacement's category is intentionally not re-validated; an
    /// edit keeps whatever category it carries, matching creation-time
    /// behavior of the data this store inherits.
    pub fn edit_transaction(&mut self, updated: Transaction) -> Result<Transaction> {
        validate_amount(updated.amount)?;
        let slot = self
            .data
            .transactions
            .iter_mut()
            .find(|t| t.id == updated.id)
            .ok_or(Error::TransactionNotFound { id: updated.id })?;

        *slot = updated.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Creates a subscription with an icon picked pseudo-randomly from
    /// the configured pool.
    pub fn add_subscription(&mut self, input: NewSubscription) -> Result<Subscription> {
        validate_amount(input.amount)?;
        let image =
            images::pick_random(&self.config.subscription_images).ok_or_else(|| Error::Config {
                message: "subscription image pool is empty".to_string(),
            })?;

        let subscription = Subscription {
            id: next_id(&self.data.subscriptions, |s| s.id),
            title: input.title,
            amount: input.amount,
            period: input.period,
            image_url: image.clone(),
        };
        debug!(id = subscription.id, "added subscription");
        self.data.subscriptions.push(subscription.clone());
        self.persist()?;
        Ok(subscription)
    }

    /// Removes a subscription. Removing an id that does not exist is a
    /// no-op, not an error.
    pub fn remove_subscription(&mut self, id: i64) -> Result<()> {
        self.data.subscriptions.retain(|s| s.id != id);
        self.persist()
    }

    /// Budget utilization for every configured plot, from the current
    /// transaction snapshot.
    #[must_use]
    pub fn budget_reports(&self) -> Vec<crate::core::BudgetReport> {
        crate::core::budget::reports(&self.config.budgets, &self.data.transactions)
    }

    /// Financial-health classification from the full transaction history.
    #[must_use]
    pub fn health(&self) -> crate::core::FinancialHealth {
        crate::core::health::classify(&self.data.transactions)
    }

    /// Serializes the whole bundle and overwrites the persisted copy.
    fn persist(&self) -> Result<()> {
        self.store.write_json(&user_data_key(&self.email), &self.data)
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
