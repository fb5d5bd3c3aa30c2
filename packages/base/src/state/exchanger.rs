use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// 100% expressed in share units (parts per billion).
pub const SHARE_DENOMINATOR: u64 = 1_000_000_000;

pub const MAX_RECEIVERS: usize = 16;

#[cw_serde]
pub struct Receiver {
    pub address: Addr,
    /// Parts per billion of the distributable balance.
    pub share: u32,
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub receivers: Vec<Receiver>,
    pub token_wallet: Addr,
    pub denom: String,
    pub min_deposit: Uint128,
    /// Fee budget kept aside for every possible receiver payout.
    pub coins_transfer_value: Uint128,
    /// Attached to every token wallet transfer.
    pub tokens_transfer_value: Uint128,
    pub token_wallet_deploy_value: Uint128,
    /// Native units per 1e9 token units.
    pub ratio: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PENDING_TOKEN_TRANSFER: Item<Uint128> = Item::new("pending_token_transfer");
pub const TERMINATED: Item<bool> = Item::new("terminated");
