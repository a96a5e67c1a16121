use dotenv::dotenv;
use futures::stream::{self, StreamExt};
use log::{error, info, warn};
use mongodb::Database;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use tezos_baker_rewards::config::Config;
use tezos_baker_rewards::repositories::{bond_pool_repository, delegator_fee_repository};
use tezos_baker_rewards::services::rewards_client::RewardsClient;
use tezos_baker_rewards::services::{bond_pool, database, delegator_fee};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting baker rewards aggregation");
    let config = Arc::new(Config::from_env());

    let db = database::connect_to_database().await?;
    let client = Arc::new(RewardsClient::new(&config)?);

    let first_cycle = config.cycle - config.cycles_back + 1;
    info!("Processing cycles {} through {}", first_cycle, config.cycle);
    let cycles: Vec<i64> = (first_cycle..=config.cycle).collect();

    let results = stream::iter(cycles)
        .map(|cycle| {
            let client = Arc::clone(&client);
            let config = Arc::clone(&config);
            let db = db.clone();
            async move { (cycle, process_cycle(&client, &db, &config, cycle).await) }
        })
        .buffer_unordered(config.parallel_limit)
        .collect::<Vec<_>>()
        .await;

    for (cycle, result) in results {
        if let Err(e) = result {
            error!("Error processing cycle {}: {}", cycle, e);
        }
    }

    info!("Aggregation complete");
    Ok(())
}

async fn process_cycle(
    client: &RewardsClient,
    db: &Database,
    config: &Config,
    cycle: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let cycle_info = client.get_cycle_info(cycle).await?;
    info!(
        "Cycle {} runs {} to {}",
        cycle, cycle_info.start_time, cycle_info.end_time
    );

    let split = client.get_reward_split(&config.baker_address, cycle).await?;
    info!(
        "Cycle {}: total rewards {}, baker {}, delegators {} across {} delegators",
        cycle,
        split.total_rewards,
        split.baker_rewards,
        split.delegators_rewards,
        split.num_delegators
    );

    let settings = bond_pool_repository::get_settings(db, &config.baker_address).await?;
    if settings.map(|s| s.enabled).unwrap_or(false) {
        let members = bond_pool_repository::list_members(db, &config.baker_address).await?;
        info!(
            "Cycle {}: distributing baker rewards across {} pool members",
            cycle,
            members.len()
        );
        for payout in bond_pool::pool_distribution(split.baker_rewards, &members) {
            if payout.reward < Decimal::ZERO {
                warn!(
                    "Cycle {}: member {} owes {} after charges",
                    cycle, payout.address, -payout.reward
                );
            } else {
                info!(
                    "Cycle {}: member {} share {}% reward {}",
                    cycle,
                    payout.address,
                    payout.share.round_dp(4),
                    payout.reward
                );
            }
        }
    }

    let fees = delegator_fee_repository::list_fees(db, &config.baker_address).await?;
    let overrides: HashMap<&str, Decimal> = fees
        .iter()
        .map(|f| (f.address.as_str(), f.fee))
        .collect();
    for reward in &split.delegators {
        if let Some(fee) = overrides.get(reward.address.as_str()) {
            let net = delegator_fee::net_payment(reward.reward, *fee)?;
            info!(
                "Cycle {}: delegator {} gross {} net {} (fee {}%)",
                cycle, reward.address, reward.reward, net, fee
            );
        }
    }

    Ok(())
}
