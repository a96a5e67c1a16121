use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata for one protocol cycle. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInfo {
    pub index: i64,
    pub first_level: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub snapshot_level: i64,
    #[serde(default)]
    pub random_seed: String,
    #[serde(default)]
    pub total_bakers: i64,
    #[serde(default)]
    pub total_delegators: i64,
    #[serde(default)]
    pub total_staking: Decimal,
}
