use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_account_type() -> String {
    "user".to_string()
}

/// Snapshot of one delegator's on-chain position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorInfo {
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
    pub address: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub staked_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_defaults_to_user() {
        let delegator: DelegatorInfo =
            serde_json::from_str(r#"{"address": "tz1abc", "balance": 5000}"#).unwrap();
        assert_eq!(delegator.account_type, "user");
        assert_eq!(delegator.balance, Decimal::from(5000));
        assert_eq!(delegator.staked_balance, Decimal::ZERO);
    }

    #[test]
    fn explicit_type_is_kept() {
        let delegator: DelegatorInfo =
            serde_json::from_str(r#"{"type": "contract", "address": "KT1abc"}"#).unwrap();
        assert_eq!(delegator.account_type, "contract");
    }
}
