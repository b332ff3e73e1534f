use serde::Serialize;

mod ledger;
mod rule;
mod tier;

pub use ledger::{MutationKind, PointLedgerEntry, RedemptionRecord, RewardRequest};
pub use rule::{EarningRule, RuleKind, Transaction};
pub use tier::{evaluate_tier, Tier};

/// Loyalty account of a customer with a merchant
///
/// `earn`, `redeem` and `expire_points` are the only mutators of the balance and tier. Every
/// balance change is recorded in `point_history` with the exact amount applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Membership {
    membership_id: String,
    customer_id: String,
    merchant_id: String,
    /// Number of points that can still be spent
    points_available: u64,
    current_tier: Tier,
    point_history: Vec<PointLedgerEntry>,
    redemption_history: Vec<RedemptionRecord>,
}

impl Membership {
    pub fn new(
        membership_id: impl Into<String>,
        customer_id: impl Into<String>,
        merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            membership_id: membership_id.into(),
            customer_id: customer_id.into(),
            merchant_id: merchant_id.into(),
            points_available: 0,
            current_tier: Tier::default(),
            point_history: Vec::default(),
            redemption_history: Vec::default(),
        }
    }

    pub fn membership_id(&self) -> &str {
        &self.membership_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn points_available(&self) -> u64 {
        self.points_available
    }

    pub fn current_tier(&self) -> Tier {
        self.current_tier
    }

    pub fn point_history(&self) -> &[PointLedgerEntry] {
        &self.point_history
    }

    pub fn redemption_history(&self) -> &[RedemptionRecord] {
        &self.redemption_history
    }

    /// Earn points for `transaction` under `rule`
    ///
    /// Returns the number of points added. Earning zero points leaves the membership untouched.
    pub fn earn(&mut self, transaction: &Transaction, rule: &EarningRule) -> u64 {
        // Clamp so the balance cannot overflow and the ledger matches what was applied
        let points = rule
            .points_for(transaction)
            .min(u64::MAX - self.points_available);
        if points == 0 {
            return 0;
        }

        self.points_available += points;
        self.point_history
            .push(PointLedgerEntry::new(MutationKind::Earned, points));

        let tier = evaluate_tier(self.points_available, self.current_tier);
        if tier != self.current_tier {
            tracing::debug!(
                membership_id = %self.membership_id,
                from = self.current_tier.name(),
                to = tier.name(),
                "tier upgraded"
            );
            self.current_tier = tier;
        }

        points
    }

    /// Spend points on a reward
    ///
    /// The tier is kept as-is, even if the balance drops below its threshold.
    pub fn redeem(&mut self, reward: &RewardRequest) -> Result<(), Error> {
        self.ensure_available(reward.point_cost)?;

        self.points_available -= reward.point_cost;
        self.redemption_history.push(RedemptionRecord::new(
            reward.reward_id.clone(),
            reward.point_cost,
        ));
        self.point_history.push(PointLedgerEntry::new(
            MutationKind::Redeemed,
            reward.point_cost,
        ));

        Ok(())
    }

    /// Remove expired points from the balance
    ///
    /// Expiring zero points is a no-op. Like redemptions, expiry never changes the tier.
    pub fn expire_points(&mut self, amount: u64) -> Result<(), Error> {
        self.ensure_available(amount)?;
        if amount == 0 {
            return Ok(());
        }

        self.points_available -= amount;
        self.point_history
            .push(PointLedgerEntry::new(MutationKind::Expired, amount));

        Ok(())
    }

    /// Apply a single update to the membership
    pub fn apply(&mut self, update: &MembershipUpdate) -> Result<(), Error> {
        match update {
            MembershipUpdate::Earn { transaction, rule } => {
                self.earn(transaction, rule);
                Ok(())
            }
            MembershipUpdate::Redeem(reward) => self.redeem(reward),
            MembershipUpdate::Expire { amount } => self.expire_points(*amount),
        }
    }

    fn ensure_available(&self, requested: u64) -> Result<(), Error> {
        if requested > self.points_available {
            return Err(Error::InsufficientPoints {
                available: self.points_available,
                requested,
            });
        }
        Ok(())
    }
}

/// Mutation to run against a stored [`Membership`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MembershipUpdate {
    Earn {
        transaction: Transaction,
        rule: EarningRule,
    },
    Redeem(RewardRequest),
    Expire {
        amount: u64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Trying to spend more points than the membership holds
    ///
    /// The membership is left untouched.
    #[error("insufficient points: {requested} requested, {available} available")]
    InsufficientPoints { available: u64, requested: u64 },
}
