use coin_exchanger_base::{
    error::exchanger::{ContractError, ContractResult},
    state::exchanger::{Config, MAX_RECEIVERS},
};
use cosmwasm_std::{Addr, BankMsg, Coin, MessageInfo, Response, Uint128};

/// Part of `balance` above the `reserve` floor. Fails instead of going below
/// zero.
pub fn available(balance: Uint128, reserve: Uint128) -> ContractResult<Uint128> {
    balance
        .checked_sub(reserve)
        .map_err(|_| ContractError::InsufficientBalance { balance, reserve })
}

/// Fee budget kept on the contract while a deposit is distributed: one coin
/// transfer for every possible receiver plus one token transfer.
pub fn deposit_reserve(config: &Config) -> ContractResult<Uint128> {
    Ok(config
        .coins_transfer_value
        .checked_mul(Uint128::from(MAX_RECEIVERS as u128))?
        .checked_add(config.tokens_transfer_value)?)
}

/// Funds attached to an administrative call. The contract balance before the
/// call is the reserved floor, everything attached on top goes back to the
/// sender once the operation succeeded. On failure the chain reverts the
/// transaction and returns the funds itself.
pub struct Refund {
    recipient: Addr,
    funds: Vec<Coin>,
}

impl Refund {
    pub fn reserve(info: &MessageInfo) -> Self {
        Self {
            recipient: info.sender.clone(),
            funds: info
                .funds
                .iter()
                .filter(|coin| !coin.amount.is_zero())
                .cloned()
                .collect(),
        }
    }

    /// Keeps `fee` out of the refund, the operation spends it. Fails if less
    /// than `fee` was attached in its denom.
    pub fn withhold(mut self, fee: &Coin) -> ContractResult<Self> {
        if fee.amount.is_zero() {
            return Ok(self);
        }
        let coin = self
            .funds
            .iter_mut()
            .find(|coin| coin.denom == fee.denom)
            .ok_or(ContractError::FeeNotCovered {
                attached: Uint128::zero(),
                fee: fee.amount,
            })?;
        let attached = coin.amount;
        coin.amount = attached
            .checked_sub(fee.amount)
            .map_err(|_| ContractError::FeeNotCovered {
                attached,
                fee: fee.amount,
            })?;
        self.funds.retain(|coin| !coin.amount.is_zero());
        Ok(self)
    }

    pub fn settle<T>(self, response: Response<T>) -> Response<T> {
        if self.funds.is_empty() {
            return response;
        }
        response.add_message(BankMsg::Send {
            to_address: self.recipient.into_string(),
            amount: self.funds,
        })
    }
}

/// Runs `op` and returns the funds attached to `info` on its success path.
pub fn with_refund<T, F>(info: &MessageInfo, op: F) -> ContractResult<Response<T>>
where
    F: FnOnce() -> ContractResult<Response<T>>,
{
    let refund = Refund::reserve(info);
    op().map(|response| refund.settle(response))
}

/// Like [`with_refund`], but `op` spends `fee` out of the attached funds and
/// only the excess goes back. The contract balance is left as it was.
pub fn with_fee_refund<T, F>(
    info: &MessageInfo,
    fee: &Coin,
    op: F,
) -> ContractResult<Response<T>>
where
    F: FnOnce() -> ContractResult<Response<T>>,
{
    let refund = Refund::reserve(info).withhold(fee)?;
    op().map(|response| refund.settle(response))
}
