use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

/// Execute interface of the token wallet contract the exchanger pays tokens from.
#[cw_serde]
pub enum TokenWalletExecuteMsg {
    Transfer {
        amount: Uint128,
        recipient: String,
        /// Native funds the wallet may spend deploying the recipient's wallet.
        deploy_wallet_value: Uint128,
        remaining_gas_to: String,
        notify: bool,
        payload: Binary,
    },
}
