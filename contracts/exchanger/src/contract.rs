use coin_exchanger_base::{
    error::exchanger::{ContractError, ContractResult},
    msg::{
        exchanger::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
        token_wallet::TokenWalletExecuteMsg,
    },
    state::exchanger::{Config, CONFIG, MAX_RECEIVERS, PENDING_TOKEN_TRANSFER, TERMINATED},
};
use coin_exchanger_helpers::answer::{attr_coin, attr_coins, response};
use cosmwasm_std::{
    attr, entry_point, to_json_binary, Addr, Api, Attribute, BankMsg, Binary, Coin, Deps, DepsMut,
    Env, MessageInfo, Reply, Response, Storage, SubMsg, SubMsgResult, Uint128, WasmMsg,
};

use crate::{
    conversion, guard,
    reserve::{self, with_fee_refund, with_refund},
    shares,
};

pub const CONTRACT_NAME: &str = concat!("crates.io:coin-exchanger__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_TRANSFER_REPLY_ID: u64 = 1;
/// Payout to the receiver at index `i` replies with `PAYOUT_REPLY_ID_OFFSET + i`.
pub const PAYOUT_REPLY_ID_OFFSET: u64 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    if msg.ratio.is_zero() {
        return Err(ContractError::ZeroRatio {});
    }
    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        receivers: shares::validate_receivers(deps.api, &msg.receivers)?,
        token_wallet: deps.api.addr_validate(&msg.token_wallet)?,
        denom: msg.denom,
        min_deposit: msg.min_deposit,
        coins_transfer_value: msg.coins_transfer_value,
        tokens_transfer_value: msg.tokens_transfer_value,
        token_wallet_deploy_value: msg.token_wallet_deploy_value,
        ratio: msg.ratio,
    };
    CONFIG.save(deps.storage, &config)?;
    TERMINATED.save(deps.storage, &false)?;

    Ok(response(
        "instantiate",
        CONTRACT_NAME,
        [
            attr("owner", &config.owner),
            attr("token_wallet", &config.token_wallet),
            attr("receivers", config.receivers.len().to_string()),
            attr_coin("min_deposit", config.min_deposit, &config.denom),
            attr("ratio", config.ratio),
        ],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Info {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    if TERMINATED.may_load(deps.storage)?.unwrap_or(false) {
        return Err(ContractError::Terminated {});
    }
    match msg {
        ExecuteMsg::Deposit {} => execute_deposit(deps, env, info),
        ExecuteMsg::Terminate { destination } => execute_terminate(deps, env, info, destination),
        ExecuteMsg::WithdrawTokens {
            destination,
            amount,
        } => execute_withdraw_tokens(deps, info, destination, amount),
        ExecuteMsg::Drain {
            destination,
            remain_balance,
        } => execute_drain(deps, env, info, destination, remain_balance),
        ExecuteMsg::SetOwner { owner } => {
            execute_update_config(deps, info, "execute-set-owner", |api, config| {
                config.owner = api.addr_validate(&owner)?;
                Ok(vec![attr("owner", &config.owner)])
            })
        }
        ExecuteMsg::SetRatio { ratio } => {
            execute_update_config(deps, info, "execute-set-ratio", |_, config| {
                if ratio.is_zero() {
                    return Err(ContractError::ZeroRatio {});
                }
                config.ratio = ratio;
                Ok(vec![attr("ratio", ratio)])
            })
        }
        ExecuteMsg::SetReceivers { receivers } => {
            execute_update_config(deps, info, "execute-set-receivers", |api, config| {
                config.receivers = shares::validate_receivers(api, &receivers)?;
                Ok(config
                    .receivers
                    .iter()
                    .map(|r| attr(r.address.as_str(), r.share.to_string()))
                    .collect())
            })
        }
        ExecuteMsg::SetWallet { wallet } => {
            execute_update_config(deps, info, "execute-set-wallet", |api, config| {
                config.token_wallet = api.addr_validate(&wallet)?;
                Ok(vec![attr("token_wallet", &config.token_wallet)])
            })
        }
        ExecuteMsg::SetMinDeposit { min_deposit } => {
            execute_update_config(deps, info, "execute-set-min-deposit", |_, config| {
                config.min_deposit = min_deposit;
                Ok(vec![attr_coin("min_deposit", min_deposit, &config.denom)])
            })
        }
        ExecuteMsg::SetCoinsTransferValue { value } => {
            execute_update_config(deps, info, "execute-set-coins-transfer-value", |_, config| {
                config.coins_transfer_value = value;
                Ok(vec![attr_coin("coins_transfer_value", value, &config.denom)])
            })
        }
        ExecuteMsg::SetTokensTransferValue { value } => {
            execute_update_config(deps, info, "execute-set-tokens-transfer-value", |_, config| {
                config.tokens_transfer_value = value;
                Ok(vec![attr_coin("tokens_transfer_value", value, &config.denom)])
            })
        }
        ExecuteMsg::SetTokenWalletDeployValue { value } => execute_update_config(
            deps,
            info,
            "execute-set-token-wallet-deploy-value",
            |_, config| {
                config.token_wallet_deploy_value = value;
                Ok(vec![attr_coin(
                    "token_wallet_deploy_value",
                    value,
                    &config.denom,
                )])
            },
        ),
    }
}

fn execute_update_config<F>(
    deps: DepsMut,
    info: MessageInfo,
    ty: &str,
    update: F,
) -> ContractResult<Response>
where
    F: FnOnce(&dyn Api, &mut Config) -> ContractResult<Vec<Attribute>>,
{
    let mut config = CONFIG.load(deps.storage)?;
    guard::assert_owner(&info.sender, &config.owner)?;
    with_refund(&info, || {
        let attrs = update(deps.api, &mut config)?;
        CONFIG.save(deps.storage, &config)?;
        Ok(response(ty, CONTRACT_NAME, attrs))
    })
}

fn execute_deposit(deps: DepsMut, env: Env, info: MessageInfo) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let deposit = cw_utils::must_pay(&info, &config.denom)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    let plan = conversion::plan_deposit(&config, balance, deposit)?;

    let mut attrs = vec![
        attr("sender", &info.sender),
        attr_coin("deposit", deposit, &config.denom),
        attr_coin("available", plan.available, &config.denom),
    ];
    let mut messages = vec![];
    for (index, (receiver, amount)) in plan.payouts.into_iter().enumerate() {
        attrs.push(attr(receiver.as_str(), amount));
        if amount.is_zero() {
            continue;
        }
        messages.push(SubMsg::reply_on_error(
            BankMsg::Send {
                to_address: receiver.into_string(),
                amount: vec![Coin::new(amount.u128(), &config.denom)],
            },
            PAYOUT_REPLY_ID_OFFSET + index as u64,
        ));
    }
    attrs.push(attr("token_amount", plan.token_amount));
    messages.push(token_transfer_msg(
        deps.storage,
        &config,
        plan.token_amount,
        &info.sender,
        &env.contract.address,
        true,
    )?);

    Ok(response("execute-deposit", CONTRACT_NAME, attrs).add_submessages(messages))
}

fn execute_terminate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: String,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    guard::assert_owner(&info.sender, &config.owner)?;
    let destination = deps.api.addr_validate(&destination)?;
    let balances: Vec<Coin> = deps
        .querier
        .query_all_balances(&env.contract.address)?
        .into_iter()
        .filter(|coin| !coin.amount.is_zero())
        .collect();
    TERMINATED.save(deps.storage, &true)?;

    let mut attrs = vec![attr("destination", &destination)];
    if !balances.is_empty() {
        attrs.push(attr_coins("amount", &balances));
    }
    let res = response("execute-terminate", CONTRACT_NAME, attrs);
    if balances.is_empty() {
        return Ok(res);
    }
    Ok(res.add_message(BankMsg::Send {
        to_address: destination.into_string(),
        amount: balances,
    }))
}

fn execute_withdraw_tokens(
    deps: DepsMut,
    info: MessageInfo,
    destination: String,
    amount: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    guard::assert_owner(&info.sender, &config.owner)?;
    let fee = Coin::new(config.tokens_transfer_value.u128(), &config.denom);
    with_fee_refund(&info, &fee, || {
        let destination = deps.api.addr_validate(&destination)?;
        let msg = token_transfer_msg(
            deps.storage,
            &config,
            amount,
            &destination,
            &config.owner,
            false,
        )?;
        Ok(response(
            "execute-withdraw-tokens",
            CONTRACT_NAME,
            [attr("destination", destination), attr("amount", amount)],
        )
        .add_submessage(msg))
    })
}

fn execute_drain(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: String,
    remain_balance: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    guard::assert_owner(&info.sender, &config.owner)?;
    let destination = deps.api.addr_validate(&destination)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    let amount = reserve::available(balance, remain_balance)?;

    let res = response(
        "execute-drain",
        CONTRACT_NAME,
        [
            attr("destination", &destination),
            attr_coin("amount", amount, &config.denom),
            attr_coin("remain_balance", remain_balance, &config.denom),
        ],
    );
    if amount.is_zero() {
        return Ok(res);
    }
    Ok(res.add_message(BankMsg::Send {
        to_address: destination.into_string(),
        amount: vec![Coin::new(amount.u128(), &config.denom)],
    }))
}

/// Builds the token wallet transfer and remembers its amount for the reply.
fn token_transfer_msg(
    storage: &mut dyn Storage,
    config: &Config,
    amount: Uint128,
    recipient: &Addr,
    remaining_gas_to: &Addr,
    notify: bool,
) -> ContractResult<SubMsg> {
    PENDING_TOKEN_TRANSFER.save(storage, &amount)?;
    let funds = if config.tokens_transfer_value.is_zero() {
        vec![]
    } else {
        vec![Coin::new(
            config.tokens_transfer_value.u128(),
            &config.denom,
        )]
    };
    Ok(SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: config.token_wallet.to_string(),
            msg: to_json_binary(&TokenWalletExecuteMsg::Transfer {
                amount,
                recipient: recipient.to_string(),
                deploy_wallet_value: config.token_wallet_deploy_value,
                remaining_gas_to: remaining_gas_to.to_string(),
                notify,
                payload: Binary::default(),
            })?,
            funds,
        },
        TOKEN_TRANSFER_REPLY_ID,
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> ContractResult<Response> {
    match msg.id {
        TOKEN_TRANSFER_REPLY_ID => reply_token_transfer(deps, msg.result),
        id if (PAYOUT_REPLY_ID_OFFSET..PAYOUT_REPLY_ID_OFFSET + MAX_RECEIVERS as u64)
            .contains(&id) =>
        {
            reply_payout(deps, (id - PAYOUT_REPLY_ID_OFFSET) as usize, msg.result)
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn reply_token_transfer(deps: DepsMut, result: SubMsgResult) -> ContractResult<Response> {
    let amount = PENDING_TOKEN_TRANSFER.load(deps.storage)?;
    PENDING_TOKEN_TRANSFER.remove(deps.storage);
    match result {
        SubMsgResult::Ok(_) => Ok(response(
            "reply-token-transfer",
            CONTRACT_NAME,
            [attr("amount", amount)],
        )),
        SubMsgResult::Err(reason) => {
            deps.api.debug(&format!(
                "WASMDEBUG: token transfer of {} failed: {}",
                amount, reason
            ));
            Ok(response(
                "token-transfer-failed",
                CONTRACT_NAME,
                [attr("amount", amount), attr("reason", reason)],
            ))
        }
    }
}

fn reply_payout(deps: DepsMut, index: usize, result: SubMsgResult) -> ContractResult<Response> {
    let receiver = CONFIG
        .load(deps.storage)?
        .receivers
        .get(index)
        .map(|r| r.address.to_string())
        .unwrap_or_default();
    let reason = match result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => String::new(),
    };
    Ok(response(
        "payout-failed",
        CONTRACT_NAME,
        [attr("receiver", receiver), attr("reason", reason)],
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    let contract_version_metadata = cw2::get_contract_version(deps.storage)?;
    let storage_contract_name = contract_version_metadata.contract.as_str();
    if storage_contract_name != CONTRACT_NAME {
        return Err(ContractError::MigrationError {
            storage_contract_name: storage_contract_name.to_string(),
            contract_name: CONTRACT_NAME.to_string(),
        });
    }

    let storage_version: semver::Version = contract_version_metadata.version.parse()?;
    let version: semver::Version = CONTRACT_VERSION.parse()?;

    if storage_version < version {
        cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new())
}
