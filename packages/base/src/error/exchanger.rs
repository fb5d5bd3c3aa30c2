use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error("Caller is not the contract's owner")]
    NotOwner {},

    #[error("Receiver shares sum up to {total}, expected 1000000000")]
    ShareNotFull { total: u64 },

    #[error("Too many receivers: {count}, max: {max}")]
    TooManyReceivers { count: usize, max: usize },

    #[error("Deposit {amount} is less than minimal deposit {min_deposit}")]
    DepositTooSmall {
        amount: Uint128,
        min_deposit: Uint128,
    },

    #[error("Exchange ratio must not be zero")]
    ZeroRatio {},

    #[error("Balance {balance} is below the reserve {reserve}")]
    InsufficientBalance { balance: Uint128, reserve: Uint128 },

    #[error("Attached {attached} does not cover the transfer fee {fee}")]
    FeeNotCovered { attached: Uint128, fee: Uint128 },

    #[error("Contract is terminated")]
    Terminated {},

    #[error("unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Can't migrate from {storage_contract_name} to {contract_name}")]
    MigrationError {
        storage_contract_name: String,
        contract_name: String,
    },
}

impl ContractError {
    /// Numeric code surfaced to off-chain clients.
    pub fn code(&self) -> u16 {
        match self {
            ContractError::NotOwner {} => 101,
            ContractError::ShareNotFull { .. } => 102,
            ContractError::TooManyReceivers { .. } => 103,
            ContractError::DepositTooSmall { .. } => 104,
            ContractError::ZeroRatio {} => 105,
            ContractError::InsufficientBalance { .. } => 106,
            ContractError::Terminated {} => 107,
            ContractError::UnknownReplyId { .. } => 108,
            ContractError::FeeNotCovered { .. } => 109,
            _ => 100,
        }
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}

pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_have_distinct_codes() {
        let codes = [
            ContractError::NotOwner {}.code(),
            ContractError::ShareNotFull { total: 0 }.code(),
            ContractError::TooManyReceivers { count: 17, max: 16 }.code(),
            ContractError::DepositTooSmall {
                amount: Uint128::zero(),
                min_deposit: Uint128::one(),
            }
            .code(),
            ContractError::FeeNotCovered {
                attached: Uint128::zero(),
                fee: Uint128::one(),
            }
            .code(),
        ];
        assert_eq!(codes, [101, 102, 103, 104, 109]);
        assert_eq!(
            ContractError::Std(StdError::generic_err("boom")).code(),
            100
        );
    }
}
