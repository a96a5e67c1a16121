use rust_decimal::Decimal;

use crate::models::{BakerRewards, DelegatorReward, RewardSplit};

/// Total rewards earned by a baker over one cycle: block and endorsement
/// rewards plus collected fees and revelation rewards, minus the rewards
/// lost to double-baking and double-endorsing penalties.
pub fn total_rewards(rewards: &BakerRewards) -> Decimal {
    rewards.own_block_rewards
        + rewards.extra_block_rewards
        + rewards.endorsement_rewards
        + rewards.own_block_fees
        + rewards.extra_block_fees
        + rewards.revelation_rewards
        - rewards.double_baking_lost_rewards
        - rewards.double_endorsing_lost_rewards
}

/// Splits a cycle's total between the baker and its delegators. The baker
/// share is derived as the remainder, so the three totals always reconcile
/// exactly.
pub fn build_split(
    baker: &str,
    cycle: i64,
    rewards: &BakerRewards,
    delegators: Vec<DelegatorReward>,
) -> RewardSplit {
    let total = total_rewards(rewards);
    let delegators_rewards: Decimal = delegators.iter().map(|d| d.reward).sum();
    let num_delegators = if rewards.num_delegators > 0 {
        rewards.num_delegators
    } else {
        delegators.len() as i64
    };

    RewardSplit {
        cycle,
        baker: baker.to_string(),
        staking_balance: rewards.staking_balance,
        delegated_balance: rewards.delegated_balance,
        num_delegators,
        delegators,
        baker_rewards: total - delegators_rewards,
        delegators_rewards,
        total_rewards: total,
    }
}
