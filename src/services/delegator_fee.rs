use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::RewardsError;
use crate::models::DelegatorFee;

/// Fees are percentages in [0, 100]. Every operation below validates the
/// fee before computing anything.
pub fn validate_fee(fee: Decimal) -> Result<(), RewardsError> {
    if fee < Decimal::ZERO || fee > Decimal::ONE_HUNDRED {
        return Err(RewardsError::validation("fee", fee));
    }
    Ok(())
}

/// Amount the baker retains from a gross payout.
pub fn fee_amount(gross: Decimal, fee: Decimal) -> Result<Decimal, RewardsError> {
    validate_fee(fee)?;
    Ok(gross * fee / Decimal::ONE_HUNDRED)
}

/// Amount paid out after the fee. Derived as the remainder of the gross,
/// so `net_payment + fee_amount` always equals the gross exactly.
pub fn net_payment(gross: Decimal, fee: Decimal) -> Result<Decimal, RewardsError> {
    Ok(gross - fee_amount(gross, fee)?)
}

pub fn is_zero_fee(fee: Decimal) -> bool {
    fee == Decimal::ZERO
}

pub fn is_max_fee(fee: Decimal) -> bool {
    fee == Decimal::ONE_HUNDRED
}

pub fn differs_from(fee: Decimal, baseline: Decimal) -> bool {
    fee != baseline
}

pub fn new_delegator_fee(
    baker: &str,
    address: &str,
    fee: Decimal,
) -> Result<DelegatorFee, RewardsError> {
    validate_fee(fee)?;
    let now = Utc::now();
    Ok(DelegatorFee {
        baker: baker.to_string(),
        address: address.to_string(),
        fee,
        created_at: now,
        updated_at: now,
    })
}

/// Returns a copy of the record with the new fee. Out-of-range fees are
/// rejected before anything changes.
pub fn update_fee(record: &DelegatorFee, fee: Decimal) -> Result<DelegatorFee, RewardsError> {
    validate_fee(fee)?;
    Ok(DelegatorFee {
        fee,
        updated_at: Utc::now(),
        ..record.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_and_fee_sum_to_gross() {
        let gross = Decimal::from(1_000_000);
        for fee in [
            Decimal::ZERO,
            "0.5".parse().unwrap(),
            Decimal::from(13),
            "33.33".parse().unwrap(),
            Decimal::ONE_HUNDRED,
        ] {
            let net = net_payment(gross, fee).unwrap();
            let kept = fee_amount(gross, fee).unwrap();
            assert_eq!(net + kept, gross, "fee {fee}");
        }
    }

    #[test]
    fn fee_of_ten_percent() {
        let net = net_payment(Decimal::from(500), Decimal::TEN).unwrap();
        assert_eq!(net, Decimal::from(450));
        assert_eq!(
            fee_amount(Decimal::from(500), Decimal::TEN).unwrap(),
            Decimal::from(50)
        );
    }

    #[test]
    fn out_of_range_fees_are_rejected() {
        let err = validate_fee(Decimal::from(150)).unwrap_err();
        assert!(matches!(err, RewardsError::Validation { field: "fee", .. }));
        assert!(validate_fee(Decimal::from(-1)).is_err());
        assert!(net_payment(Decimal::from(500), Decimal::from(101)).is_err());
        assert!(new_delegator_fee("tz1ABC", "tz1d1", Decimal::from(150)).is_err());
    }

    #[test]
    fn boundary_fees_are_valid() {
        assert!(validate_fee(Decimal::ZERO).is_ok());
        assert!(validate_fee(Decimal::ONE_HUNDRED).is_ok());
        assert!(is_zero_fee(Decimal::ZERO));
        assert!(is_max_fee(Decimal::ONE_HUNDRED));
        assert!(!is_max_fee(Decimal::from(99)));
    }

    #[test]
    fn baseline_comparison() {
        assert!(differs_from(Decimal::from(5), Decimal::TEN));
        assert!(!differs_from(Decimal::TEN, Decimal::TEN));
    }

    #[test]
    fn update_validates_and_returns_a_copy() {
        let record = new_delegator_fee("tz1ABC", "tz1d1", Decimal::TEN).unwrap();

        assert!(update_fee(&record, Decimal::from(101)).is_err());
        assert_eq!(record.fee, Decimal::TEN);

        let updated = update_fee(&record, Decimal::from(15)).unwrap();
        assert_eq!(updated.fee, Decimal::from(15));
        assert_eq!(updated.address, record.address);
    }
}
