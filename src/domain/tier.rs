use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Status unlocked by the point balance
///
/// Variants are declared in ascending level order, so the derived `Ord` follows the level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    #[default]
    Entry,
    Silver,
    Gold,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 3] = [Tier::Entry, Tier::Silver, Tier::Gold];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Entry => "Entry",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Tier::Entry => 1,
            Tier::Silver => 2,
            Tier::Gold => 3,
        }
    }

    /// Minimum balance needed to reach this tier
    pub fn threshold(&self) -> u64 {
        match self {
            Tier::Entry => 0,
            Tier::Silver => 500,
            Tier::Gold => 1000,
        }
    }
}

/// Serialized as `{ "name": ..., "level": ... }`
impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tier", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("level", &self.level())?;
        state.end()
    }
}

/// Tier reached with `balance` points, never lower than `current`
///
/// Tiers are upgrade-only: a balance below the current tier's threshold keeps the current tier.
pub fn evaluate_tier(balance: u64, current: Tier) -> Tier {
    let reached = Tier::ALL
        .into_iter()
        .rev()
        .find(|tier| balance >= tier.threshold())
        .unwrap_or_default();

    reached.max(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use speculoos::prelude::*;

    #[rstest]
    #[case(0, Tier::Entry)]
    #[case(499, Tier::Entry)]
    #[case(500, Tier::Silver)]
    #[case(999, Tier::Silver)]
    #[case(1000, Tier::Gold)]
    #[case(u64::MAX, Tier::Gold)]
    fn test_evaluate_from_entry(#[case] balance: u64, #[case] expected: Tier) {
        assert_that!(evaluate_tier(balance, Tier::Entry)).is_equal_to(expected);
    }

    /// A lower balance never takes the tier down
    #[rstest]
    fn test_evaluate_never_downgrades(
        #[values(0, 250, 499, 500, 999)] balance: u64,
        #[values(Tier::Silver, Tier::Gold)] current: Tier,
    ) {
        let res = evaluate_tier(balance, current);

        assert_that!(res).is_greater_than_or_equal_to(current);
    }

    #[test]
    fn test_levels_follow_order() {
        let levels: Vec<u8> = Tier::ALL.iter().map(Tier::level).collect();
        let thresholds: Vec<u64> = Tier::ALL.iter().map(Tier::threshold).collect();

        assert_that!(levels).is_equal_to(vec![1, 2, 3]);
        assert_that!(thresholds).is_equal_to(vec![0, 500, 1000]);
        assert_that!(Tier::default().name()).is_equal_to("Entry");
    }

    #[rstest]
    #[case(Tier::Entry, "Entry", 1)]
    #[case(Tier::Silver, "Silver", 2)]
    #[case(Tier::Gold, "Gold", 3)]
    fn test_serialize_name_and_level(#[case] tier: Tier, #[case] name: &str, #[case] level: u64) {
        let json = serde_json::to_value(tier).unwrap();

        assert_that!(json["name"].as_str()).is_equal_to(Some(name));
        assert_that!(json["level"].as_u64()).is_equal_to(Some(level));
    }
}
