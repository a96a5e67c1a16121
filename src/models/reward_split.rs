use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One delegator's slice of a cycle's rewards. The reward amount comes from
/// the indexer, it is not recomputed locally from the share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorReward {
    pub address: String,
    pub balance: Decimal,
    pub share: Decimal,
    pub reward: Decimal,
}

/// Computed split of a cycle's rewards between a baker and its delegators.
///
/// `total_rewards` always equals `baker_rewards + delegators_rewards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSplit {
    pub cycle: i64,
    pub baker: String,
    pub staking_balance: Decimal,
    pub delegated_balance: Decimal,
    pub num_delegators: i64,
    pub delegators: Vec<DelegatorReward>,
    pub baker_rewards: Decimal,
    pub delegators_rewards: Decimal,
    pub total_rewards: Decimal,
}
