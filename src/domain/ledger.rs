use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationKind {
    Earned,
    Redeemed,
    Expired,
}

/// Immutable record of a single balance-affecting event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointLedgerEntry {
    pub entry_id: Uuid,
    pub kind: MutationKind,
    pub amount: u64,
    pub created_at: DateTime<Utc>,
}

impl PointLedgerEntry {
    pub fn new(kind: MutationKind, amount: u64) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            kind,
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Points exchanged for a reward
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    pub redemption_id: Uuid,
    pub reward_id: String,
    pub points_spent: u64,
    pub created_at: DateTime<Utc>,
}

impl RedemptionRecord {
    pub fn new(reward_id: impl Into<String>, points_spent: u64) -> Self {
        Self {
            redemption_id: Uuid::new_v4(),
            reward_id: reward_id.into(),
            points_spent,
            created_at: Utc::now(),
        }
    }
}

/// Reward the caller wants to exchange points for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRequest {
    pub reward_id: String,
    pub point_cost: u64,
}
