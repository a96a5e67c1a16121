use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::RewardsError;
use crate::models::{BondPoolMember, BondPoolSettings};

/// One member's computed payout for a distribution round.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPayout {
    pub address: String,
    pub share: Decimal,
    pub reward: Decimal,
}

/// Percentage of the pool a contribution represents. An empty or invalid
/// pool yields zero.
pub fn share_percentage(member_amount: Decimal, total_pool_amount: Decimal) -> Decimal {
    if total_pool_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    member_amount / total_pool_amount * Decimal::ONE_HUNDRED
}

/// Net reward for one member: the proportional slice of `total_rewards`
/// minus the member's administrative charge. The net is not clamped, a
/// charge larger than the slice produces a negative payout.
pub fn reward_share(
    total_rewards: Decimal,
    total_pool_amount: Decimal,
    member: &BondPoolMember,
) -> Decimal {
    if total_pool_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let share = share_percentage(member.amount, total_pool_amount);
    total_rewards * share / Decimal::ONE_HUNDRED - member.charge
}

/// Distributes `total_rewards` across all members of a pool.
pub fn pool_distribution(total_rewards: Decimal, members: &[BondPoolMember]) -> Vec<MemberPayout> {
    let total_pool_amount: Decimal = members.iter().map(|m| m.amount).sum();
    members
        .iter()
        .map(|member| MemberPayout {
            address: member.address.clone(),
            share: share_percentage(member.amount, total_pool_amount),
            reward: reward_share(total_rewards, total_pool_amount, member),
        })
        .collect()
}

pub fn new_pool_settings(baker: &str, enabled: bool) -> BondPoolSettings {
    let now = Utc::now();
    BondPoolSettings {
        baker: baker.to_string(),
        enabled,
        created_at: now,
        updated_at: now,
    }
}

pub fn set_pool_enabled(settings: &BondPoolSettings, enabled: bool) -> BondPoolSettings {
    BondPoolSettings {
        enabled,
        updated_at: Utc::now(),
        ..settings.clone()
    }
}

pub fn new_member(
    baker: &str,
    address: &str,
    amount: Decimal,
    charge: Decimal,
    name: Option<String>,
    manager: bool,
) -> Result<BondPoolMember, RewardsError> {
    validate_amount(amount)?;
    validate_charge(charge)?;
    let now = Utc::now();
    Ok(BondPoolMember {
        baker: baker.to_string(),
        address: address.to_string(),
        amount,
        name,
        charge,
        manager,
        created_at: now,
        updated_at: now,
    })
}

/// Returns a copy of the member with the new contribution amount. Rejects
/// non-positive amounts before anything changes.
pub fn update_member_amount(
    member: &BondPoolMember,
    amount: Decimal,
) -> Result<BondPoolMember, RewardsError> {
    validate_amount(amount)?;
    Ok(BondPoolMember {
        amount,
        updated_at: Utc::now(),
        ..member.clone()
    })
}

/// Returns a copy of the member with the new administrative charge. Rejects
/// negative charges before anything changes.
pub fn update_member_charge(
    member: &BondPoolMember,
    charge: Decimal,
) -> Result<BondPoolMember, RewardsError> {
    validate_charge(charge)?;
    Ok(BondPoolMember {
        charge,
        updated_at: Utc::now(),
        ..member.clone()
    })
}

fn validate_amount(amount: Decimal) -> Result<(), RewardsError> {
    if amount <= Decimal::ZERO {
        return Err(RewardsError::validation("amount", amount));
    }
    Ok(())
}

fn validate_charge(charge: Decimal) -> Result<(), RewardsError> {
    if charge < Decimal::ZERO {
        return Err(RewardsError::validation("charge", charge));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(address: &str, amount: i64, charge: i64) -> BondPoolMember {
        new_member(
            "tz1ABC",
            address,
            Decimal::from(amount),
            Decimal::from(charge),
            None,
            false,
        )
        .unwrap()
    }

    #[test]
    fn proportional_share_with_admin_charge() {
        let member = member("tz1m1", 250, 5);
        assert_eq!(
            share_percentage(member.amount, Decimal::from(1000)),
            Decimal::from(25)
        );
        assert_eq!(
            reward_share(Decimal::from(1000), Decimal::from(1000), &member),
            Decimal::from(245)
        );
    }

    #[test]
    fn empty_pool_yields_zero() {
        let member = member("tz1m1", 250, 5);
        assert_eq!(share_percentage(member.amount, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            reward_share(Decimal::from(1000), Decimal::ZERO, &member),
            Decimal::ZERO
        );
        assert_eq!(
            reward_share(Decimal::from(1000), Decimal::from(-5), &member),
            Decimal::ZERO
        );
    }

    #[test]
    fn charge_above_slice_goes_negative() {
        let member = member("tz1m1", 10, 500);
        let net = reward_share(Decimal::from(100), Decimal::from(1000), &member);
        assert_eq!(net, Decimal::from(-499));
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let members = vec![
            member("tz1m1", 250, 0),
            member("tz1m2", 400, 0),
            member("tz1m3", 350, 0),
        ];
        let payouts = pool_distribution(Decimal::from(1000), &members);
        let total_share: Decimal = payouts.iter().map(|p| p.share).sum();
        assert_eq!(total_share, Decimal::ONE_HUNDRED);

        let by_address: Vec<_> = payouts.iter().map(|p| p.reward).collect();
        assert_eq!(by_address, vec![
            Decimal::from(250),
            Decimal::from(400),
            Decimal::from(350),
        ]);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let original = member("tz1m1", 250, 5);

        let err = update_member_amount(&original, Decimal::from(-10)).unwrap_err();
        assert!(matches!(err, RewardsError::Validation { field: "amount", .. }));
        assert!(update_member_amount(&original, Decimal::ZERO).is_err());

        // The input is untouched.
        assert_eq!(original.amount, Decimal::from(250));

        let updated = update_member_amount(&original, Decimal::from(300)).unwrap();
        assert_eq!(updated.amount, Decimal::from(300));
        assert_eq!(updated.address, original.address);
    }

    #[test]
    fn negative_charges_are_rejected() {
        let original = member("tz1m1", 250, 5);

        let err = update_member_charge(&original, Decimal::from(-1)).unwrap_err();
        assert!(matches!(err, RewardsError::Validation { field: "charge", .. }));
        assert_eq!(original.charge, Decimal::from(5));

        let updated = update_member_charge(&original, Decimal::ZERO).unwrap();
        assert_eq!(updated.charge, Decimal::ZERO);
    }

    #[test]
    fn new_member_is_validated() {
        assert!(new_member("tz1ABC", "tz1m1", Decimal::ZERO, Decimal::ZERO, None, false).is_err());
        assert!(new_member(
            "tz1ABC",
            "tz1m1",
            Decimal::ONE,
            Decimal::from(-3),
            None,
            false
        )
        .is_err());
    }

    #[test]
    fn toggling_settings_keeps_identity() {
        let settings = new_pool_settings("tz1ABC", true);
        let disabled = set_pool_enabled(&settings, false);
        assert!(!disabled.enabled);
        assert_eq!(disabled.baker, settings.baker);
        assert_eq!(disabled.created_at, settings.created_at);
    }
}
