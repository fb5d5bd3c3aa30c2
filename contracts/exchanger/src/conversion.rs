use coin_exchanger_base::{
    error::exchanger::{ContractError, ContractResult},
    state::exchanger::{Config, SHARE_DENOMINATOR},
};
use cosmwasm_std::{Addr, Uint128};

use crate::{reserve, shares};

#[derive(Debug, PartialEq)]
pub struct DepositPlan {
    /// Contract balance above the fee reserve, split between receivers.
    pub available: Uint128,
    pub payouts: Vec<(Addr, Uint128)>,
    /// Tokens credited to the depositor.
    pub token_amount: Uint128,
}

/// `floor(deposit * 1e9 / ratio)`.
pub fn token_amount(deposit: Uint128, ratio: Uint128) -> ContractResult<Uint128> {
    if ratio.is_zero() {
        return Err(ContractError::ZeroRatio {});
    }
    Ok(deposit.checked_multiply_ratio(u128::from(SHARE_DENOMINATOR), ratio)?)
}

/// Works out what a single deposit pays out. `balance` is the contract balance
/// in the configured denom, deposit included.
pub fn plan_deposit(
    config: &Config,
    balance: Uint128,
    deposit: Uint128,
) -> ContractResult<DepositPlan> {
    if deposit < config.min_deposit {
        return Err(ContractError::DepositTooSmall {
            amount: deposit,
            min_deposit: config.min_deposit,
        });
    }
    let available = reserve::available(balance, reserve::deposit_reserve(config)?)?;
    let payouts = shares::split(available, &config.receivers);
    let token_amount = token_amount(deposit, config.ratio)?;
    Ok(DepositPlan {
        available,
        payouts,
        token_amount,
    })
}
