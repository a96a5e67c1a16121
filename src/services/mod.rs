pub mod bond_pool;
pub mod database;
pub mod delegator_fee;
pub mod reward_split;
pub mod rewards_client;
pub mod ttl_cache;
