use crate::state::exchanger::Config;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct ReceiverInput {
    pub address: String,
    pub share: u32,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub receivers: Vec<ReceiverInput>,
    pub token_wallet: String,
    pub denom: String,
    pub min_deposit: Uint128,
    pub coins_transfer_value: Uint128,
    pub tokens_transfer_value: Uint128,
    pub token_wallet_deploy_value: Uint128,
    pub ratio: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    Deposit {},
    Terminate {
        destination: String,
    },
    WithdrawTokens {
        destination: String,
        amount: Uint128,
    },
    Drain {
        destination: String,
        remain_balance: Uint128,
    },
    SetOwner {
        owner: String,
    },
    SetRatio {
        ratio: Uint128,
    },
    SetReceivers {
        receivers: Vec<ReceiverInput>,
    },
    SetWallet {
        wallet: String,
    },
    SetMinDeposit {
        min_deposit: Uint128,
    },
    SetCoinsTransferValue {
        value: Uint128,
    },
    SetTokensTransferValue {
        value: Uint128,
    },
    SetTokenWalletDeployValue {
        value: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Info {},
}

#[cw_serde]
pub struct MigrateMsg {}
