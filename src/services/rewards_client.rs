use std::time::Duration;

use log::warn;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::RewardsError;
use crate::models::{BakerRewards, CycleInfo, DelegatorInfo, DelegatorReward, RewardSplit};
use crate::services::reward_split;
use crate::services::ttl_cache::TtlCache;
use crate::utils::json::{decimal_field, string_field};

/// Client for the indexer API with a cache-aside layer over raw responses.
///
/// Cache keys combine the operation name and its parameters, so two
/// operations reading the same endpoint are cached independently. Failures
/// are never retried here; each call either serves a fresh cached payload
/// or performs exactly one request.
pub struct RewardsClient {
    http: reqwest::Client,
    base_url: String,
    ttl: Duration,
    cache: TtlCache<Value>,
}

impl RewardsClient {
    pub fn new(config: &Config) -> Result<Self, RewardsError> {
        Self::with_base_url(
            config.indexer_api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_capacity,
        )
    }

    pub fn with_base_url(
        base_url: String,
        timeout: Duration,
        ttl: Duration,
        cache_capacity: usize,
    ) -> Result<Self, RewardsError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RewardsError::transport(&base_url, e))?;
        Ok(RewardsClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            ttl,
            cache: TtlCache::new(cache_capacity),
        })
    }

    /// Per-baker-per-cycle reward record with every absent field as zero.
    pub async fn get_baker_rewards(
        &self,
        baker: &str,
        cycle: i64,
    ) -> Result<BakerRewards, RewardsError> {
        let url = self.url(&format!("/v1/rewards/split/{baker}/{cycle}"));
        let key = format!("baker_rewards:{baker}:{cycle}");
        let raw = self.cached_fetch(&key, &url).await?;
        decode(&url, raw)
    }

    /// Reward record plus its delegator list, resolved into a computed
    /// baker-vs-delegators split.
    pub async fn get_reward_split(
        &self,
        baker: &str,
        cycle: i64,
    ) -> Result<RewardSplit, RewardsError> {
        let url = self.url(&format!("/v1/rewards/split/{baker}/{cycle}"));
        let key = format!("reward_split:{baker}:{cycle}");
        let raw = self.cached_fetch(&key, &url).await?;

        let rewards: BakerRewards = decode(&url, raw.clone())?;
        let delegators = raw
            .get("delegators")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(delegator_reward_entry).collect())
            .unwrap_or_default();

        Ok(reward_split::build_split(baker, cycle, &rewards, delegators))
    }

    pub async fn get_delegators(&self, baker: &str) -> Result<Vec<DelegatorInfo>, RewardsError> {
        let url = self.url(&format!("/v1/accounts/{baker}/delegators"));
        let key = format!("delegators:{baker}");
        let raw = self.cached_fetch(&key, &url).await?;
        decode(&url, raw)
    }

    pub async fn get_cycle_info(&self, cycle: i64) -> Result<CycleInfo, RewardsError> {
        let url = self.url(&format!("/v1/cycles/{cycle}"));
        let key = format!("cycle_info:{cycle}");
        let raw = self.cached_fetch(&key, &url).await?;
        decode(&url, raw)
    }

    pub async fn get_account_balance(&self, address: &str) -> Result<Decimal, RewardsError> {
        let url = self.url(&format!("/v1/accounts/{address}"));
        let key = format!("account_balance:{address}");
        let raw = self.cached_fetch(&key, &url).await?;
        Ok(decimal_field(&raw, "balance"))
    }

    /// Looks up a raw operation payload by hash. Unlike every other
    /// operation this reports failure as `None`: callers treat the lookup
    /// as a presence probe, and absence is a normal outcome.
    pub async fn get_operation(&self, hash: &str) -> Option<Value> {
        let url = self.url(&format!("/v1/operations/{hash}"));
        let key = format!("operation:{hash}");
        match self.cached_fetch(&key, &url).await {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!("Operation lookup returned nothing: {}", e);
                None
            }
        }
    }

    pub fn cache_size(&self) -> usize {
        self.cache.size()
    }

    pub fn clear_cache(&self) {
        self.cache.clear()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn cached_fetch(&self, key: &str, url: &str) -> Result<Value, RewardsError> {
        self.cache
            .get_or_fetch(key, self.ttl, || self.fetch_json(url))
            .await
    }

    async fn fetch_json(&self, url: &str) -> Result<Value, RewardsError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RewardsError::transport(url, e))?;
        if !response.status().is_success() {
            return Err(RewardsError::transport(
                url,
                format!("status {}", response.status()),
            ));
        }
        response
            .json()
            .await
            .map_err(|e| RewardsError::transport(url, e))
    }
}

fn decode<T: DeserializeOwned>(url: &str, raw: Value) -> Result<T, RewardsError> {
    serde_json::from_value(raw).map_err(|e| RewardsError::transport(url, e))
}

fn delegator_reward_entry(entry: &Value) -> DelegatorReward {
    DelegatorReward {
        address: string_field(entry, "address"),
        balance: decimal_field(entry, "balance"),
        share: decimal_field(entry, "share"),
        reward: decimal_field(entry, "reward"),
    }
}
