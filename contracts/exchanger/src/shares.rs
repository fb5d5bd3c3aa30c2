use coin_exchanger_base::{
    error::exchanger::{ContractError, ContractResult},
    msg::exchanger::ReceiverInput,
    state::exchanger::{Receiver, MAX_RECEIVERS, SHARE_DENOMINATOR},
};
use cosmwasm_std::{Addr, Api, Uint128};

/// Checks the receiver table invariants: at most [`MAX_RECEIVERS`] entries
/// whose shares add up to exactly [`SHARE_DENOMINATOR`].
pub fn verify_shares(receivers: &[Receiver]) -> ContractResult<()> {
    if receivers.len() > MAX_RECEIVERS {
        return Err(ContractError::TooManyReceivers {
            count: receivers.len(),
            max: MAX_RECEIVERS,
        });
    }
    let total: u64 = receivers.iter().map(|r| u64::from(r.share)).sum();
    if total != SHARE_DENOMINATOR {
        return Err(ContractError::ShareNotFull { total });
    }
    Ok(())
}

/// Validates addresses and shares of an incoming receiver list. Nothing is
/// written here, the caller saves the returned table as a whole.
pub fn validate_receivers(api: &dyn Api, input: &[ReceiverInput]) -> ContractResult<Vec<Receiver>> {
    let receivers = input
        .iter()
        .map(|r| {
            Ok(Receiver {
                address: api.addr_validate(&r.address)?,
                share: r.share,
            })
        })
        .collect::<ContractResult<Vec<_>>>()?;
    verify_shares(&receivers)?;
    Ok(receivers)
}

/// Splits `available` between receivers in table order, rounding every payout
/// down. The rounding remainder (less than one unit per receiver) stays on the
/// contract balance.
pub fn split(available: Uint128, receivers: &[Receiver]) -> Vec<(Addr, Uint128)> {
    receivers
        .iter()
        .map(|r| {
            (
                r.address.clone(),
                available.multiply_ratio(u128::from(r.share), u128::from(SHARE_DENOMINATOR)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    fn receivers(shares: &[u32]) -> Vec<Receiver> {
        shares
            .iter()
            .enumerate()
            .map(|(i, share)| Receiver {
                address: Addr::unchecked(format!("receiver{}", i)),
                share: *share,
            })
            .collect()
    }

    #[test]
    fn full_table_is_accepted() {
        verify_shares(&receivers(&[1_000_000_000])).unwrap();
        verify_shares(&receivers(&[250_000_000, 250_000_000, 500_000_000])).unwrap();
    }

    #[test]
    fn partial_table_is_rejected() {
        assert_eq!(
            verify_shares(&receivers(&[400_000_000, 500_000_000])).unwrap_err(),
            ContractError::ShareNotFull { total: 900_000_000 }
        );
        assert_eq!(
            verify_shares(&[]).unwrap_err(),
            ContractError::ShareNotFull { total: 0 }
        );
    }

    #[test]
    fn share_sum_does_not_wrap_around() {
        // wraps to exactly 1e9 in u32 arithmetic
        let shares = [u32::MAX, 1_000_000_001];
        assert_eq!(
            verify_shares(&receivers(&shares)).unwrap_err(),
            ContractError::ShareNotFull {
                total: u64::from(u32::MAX) + 1_000_000_001
            }
        );
    }

    #[test]
    fn too_many_receivers() {
        let mut shares = vec![0u32; 16];
        shares.push(1_000_000_000);
        assert_eq!(
            verify_shares(&receivers(&shares)).unwrap_err(),
            ContractError::TooManyReceivers { count: 17, max: 16 }
        );
        shares.remove(0);
        verify_shares(&receivers(&shares)).unwrap();
    }

    #[test]
    fn validate_receivers_checks_addresses() {
        let api = MockApi::default();
        let err = validate_receivers(
            &api,
            &[ReceiverInput {
                address: "".to_string(),
                share: 1_000_000_000,
            }],
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Std(_)));

        let table = validate_receivers(
            &api,
            &[
                ReceiverInput {
                    address: "alice".to_string(),
                    share: 300_000_000,
                },
                ReceiverInput {
                    address: "bob".to_string(),
                    share: 700_000_000,
                },
            ],
        )
        .unwrap();
        assert_eq!(
            table,
            vec![
                Receiver {
                    address: Addr::unchecked("alice"),
                    share: 300_000_000
                },
                Receiver {
                    address: Addr::unchecked("bob"),
                    share: 700_000_000
                },
            ]
        );
    }

    #[test]
    fn split_rounds_down_and_keeps_dust() {
        let table = receivers(&[333_333_333, 333_333_333, 333_333_334]);
        let amounts: Vec<u128> = split(Uint128::new(100), &table)
            .iter()
            .map(|(_, amount)| amount.u128())
            .collect();
        assert_eq!(amounts, vec![33, 33, 33]);

        let paid: u128 = amounts.iter().sum();
        assert!(paid <= 100);
        assert!(100 - paid < table.len() as u128);
    }

    #[test]
    fn split_does_not_overflow_on_large_balances() {
        let table = receivers(&[500_000_000, 500_000_000]);
        let payouts = split(Uint128::MAX, &table);
        assert_eq!(payouts[0].1, Uint128::MAX.multiply_ratio(1u128, 2u128));
        assert_eq!(payouts[0].1, payouts[1].1);
    }

    #[test]
    fn split_preserves_table_order() {
        let table = receivers(&[100_000_000, 900_000_000]);
        assert_eq!(
            split(Uint128::new(1_000), &table),
            vec![
                (Addr::unchecked("receiver0"), Uint128::new(100)),
                (Addr::unchecked("receiver1"), Uint128::new(900)),
            ]
        );
    }
}
