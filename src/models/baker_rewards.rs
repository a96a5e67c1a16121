use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-cycle reward record for a baker as reported by the indexer.
///
/// Every field is defaulted, so a field the indexer omits deserializes as
/// zero rather than failing or being treated as "missing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BakerRewards {
    pub cycle: i64,
    pub staking_balance: Decimal,
    pub delegated_balance: Decimal,
    pub num_delegators: i64,

    pub expected_blocks: Decimal,
    pub expected_endorsements: Decimal,

    pub future_blocks: i64,
    pub future_block_rewards: Decimal,
    pub own_blocks: i64,
    pub own_block_rewards: Decimal,
    pub extra_blocks: i64,
    pub extra_block_rewards: Decimal,
    pub missed_own_blocks: i64,
    pub missed_own_block_rewards: Decimal,
    pub missed_extra_blocks: i64,
    pub missed_extra_block_rewards: Decimal,
    pub uncovered_own_blocks: i64,
    pub uncovered_own_block_rewards: Decimal,
    pub uncovered_extra_blocks: i64,
    pub uncovered_extra_block_rewards: Decimal,

    pub future_endorsements: i64,
    pub future_endorsement_rewards: Decimal,
    pub endorsements: i64,
    pub endorsement_rewards: Decimal,
    pub missed_endorsements: i64,
    pub missed_endorsement_rewards: Decimal,
    pub uncovered_endorsements: i64,
    pub uncovered_endorsement_rewards: Decimal,

    pub own_block_fees: Decimal,
    pub extra_block_fees: Decimal,
    pub missed_own_block_fees: Decimal,
    pub missed_extra_block_fees: Decimal,
    pub uncovered_own_block_fees: Decimal,
    pub uncovered_extra_block_fees: Decimal,

    pub double_baking_rewards: Decimal,
    pub double_baking_lost_deposits: Decimal,
    pub double_baking_lost_rewards: Decimal,
    pub double_baking_lost_fees: Decimal,
    pub double_endorsing_rewards: Decimal,
    pub double_endorsing_lost_deposits: Decimal,
    pub double_endorsing_lost_rewards: Decimal,
    pub double_endorsing_lost_fees: Decimal,

    pub revelation_rewards: Decimal,
    pub revelation_lost_rewards: Decimal,
    pub revelation_lost_fees: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_zero() {
        let rewards: BakerRewards = serde_json::from_str(
            r#"{"cycle": 500, "ownBlockRewards": 1000, "endorsementRewards": 200}"#,
        )
        .unwrap();

        assert_eq!(rewards.cycle, 500);
        assert_eq!(rewards.own_block_rewards, Decimal::from(1000));
        assert_eq!(rewards.endorsement_rewards, Decimal::from(200));
        assert_eq!(rewards.extra_block_rewards, Decimal::ZERO);
        assert_eq!(rewards.double_baking_lost_rewards, Decimal::ZERO);
        assert_eq!(rewards.num_delegators, 0);
    }
}
