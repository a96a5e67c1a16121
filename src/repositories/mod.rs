pub mod bond_pool_repository;
pub mod delegator_fee_repository;
