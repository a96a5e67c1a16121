mod baker_rewards;
mod bond_pool;
mod cycle_info;
mod delegator_fee;
mod delegator_info;
mod reward_split;

pub use baker_rewards::BakerRewards;
pub use bond_pool::{BondPoolMember, BondPoolSettings};
pub use cycle_info::CycleInfo;
pub use delegator_fee::DelegatorFee;
pub use delegator_info::DelegatorInfo;
pub use reward_split::{DelegatorReward, RewardSplit};
