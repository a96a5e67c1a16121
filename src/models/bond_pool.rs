use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pooled-bonding opt-in state for a baker. Created once, then only toggled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondPoolSettings {
    pub baker: String,
    pub enabled: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// One contributor to a baker's bond pool. `amount` and `charge` share the
/// same currency unit; `charge` is deducted from the member's proportional
/// reward on every distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondPoolMember {
    pub baker: String,
    pub address: String,
    pub amount: Decimal,
    pub name: Option<String>,
    pub charge: Decimal,
    pub manager: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}
