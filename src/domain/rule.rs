use serde::{Deserialize, Serialize};

/// Purchase data supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    /// Total spend, in the smallest currency unit
    pub total_spend: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    /// Points for every full multiple of the threshold spent
    PerCurrencyUnit,
    /// Points for buying a given product
    PerProduct,
    /// Flat points for every visit
    PerVisit,
}

/// Configuration describing how a transaction converts to points
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningRule {
    pub kind: RuleKind,
    /// Spend amount that grants `points_granted` once
    ///
    /// Only used by [`RuleKind::PerCurrencyUnit`]. A missing or non-positive threshold earns
    /// nothing.
    pub multiplier_threshold: Option<i64>,
    pub points_granted: u64,
    pub product_id: Option<String>,
}

impl EarningRule {
    pub fn per_currency_unit(threshold: i64, points_granted: u64) -> Self {
        Self {
            kind: RuleKind::PerCurrencyUnit,
            multiplier_threshold: Some(threshold),
            points_granted,
            product_id: None,
        }
    }

    pub fn per_visit(points_granted: u64) -> Self {
        Self {
            kind: RuleKind::PerVisit,
            multiplier_threshold: None,
            points_granted,
            product_id: None,
        }
    }

    /// Points earned by `transaction` under this rule
    ///
    /// Never fails: anything that cannot be computed earns zero points.
    pub fn points_for(&self, transaction: &Transaction) -> u64 {
        match self.kind {
            RuleKind::PerCurrencyUnit => match self.multiplier_threshold {
                Some(threshold) if threshold > 0 => (transaction.total_spend / threshold as u64)
                    .saturating_mul(self.points_granted),
                _ => 0,
            },
            RuleKind::PerVisit => self.points_granted,
            RuleKind::PerProduct => {
                tracing::warn!(
                    transaction_id = %transaction.transaction_id,
                    product_id = ?self.product_id,
                    "unsupported rule kind PER_PRODUCT, no points earned"
                );
                0
            }
        }
    }
}
