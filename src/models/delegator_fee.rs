use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-delegator override of a baker's default fee, as a percentage in
/// [0, 100]. No stored record means the baker default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegatorFee {
    pub baker: String,
    pub address: String,
    pub fee: Decimal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}
