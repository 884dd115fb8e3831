#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coin, to_binary, Addr, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdError, StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw721::{ContractInfoResponse, NumTokensResponse, OwnerOfResponse, TokensResponse};
use cw_storage_plus::Bound;
use cw_utils::must_pay;

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ConfigResponse, ContractUriResponse, ExecuteMsg, InstantiateMsg,
    NextTokenIdResponse, QueryMsg, RoyaltyInfoResponse, TokenUriResponse,
};
use crate::state::{
    tokens, Config, TokenInfo, WithdrawShare, BALANCES, BPS_DENOM, CONFIG, CONTRACT_URI_FILE,
    DEFAULT_BASE_EXTENSION, DEFAULT_COST, DEFAULT_MAX_MINT_AMOUNT, MAX_SUPPLY, NEXT_ID,
    RESERVED_TOKEN_IDS, ROYALTY_BPS, TOTAL_ISSUED, WITHDRAW_RECIPIENT_COUNT, WITHDRAW_SPLIT,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:birddog-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.withdraw_addresses.len() != WITHDRAW_RECIPIENT_COUNT
        || msg.withdraw_percentage_numerators.len() != WITHDRAW_RECIPIENT_COUNT
    {
        return Err(ContractError::InvalidWithdrawSplitLength {
            expected: WITHDRAW_RECIPIENT_COUNT,
        });
    }
    let sum: u64 = msg.withdraw_percentage_numerators.iter().sum();
    if sum != BPS_DENOM {
        return Err(ContractError::InvalidWithdrawSplitSum { sum });
    }

    let mut split = Vec::with_capacity(WITHDRAW_RECIPIENT_COUNT);
    for (address, numerator) in msg
        .withdraw_addresses
        .iter()
        .zip(msg.withdraw_percentage_numerators.iter())
    {
        split.push(WithdrawShare {
            recipient: deps.api.addr_validate(address)?,
            numerator: *numerator,
        });
    }
    WITHDRAW_SPLIT.save(deps.storage, &split)?;

    let config = Config {
        name: msg.name,
        symbol: msg.symbol,
        owner: deps.api.addr_validate(&msg.owner)?,
        royalty_receiver: deps.api.addr_validate(&msg.royalty_receiver)?,
        payment_denom: msg.payment_denom,
        cost: Uint128::new(DEFAULT_COST),
        max_mint_amount: DEFAULT_MAX_MINT_AMOUNT,
        base_uri: msg.base_uri,
        collection_uri: msg.collection_uri,
        base_extension: DEFAULT_BASE_EXTENSION.to_string(),
        paused: true,
        airdrop_complete: false,
    };
    CONFIG.save(deps.storage, &config)?;

    // Hand the vanity ids to the artist and start the mint counter past
    // them, so the first public id is reserved_count + 1.
    let artist = deps.api.addr_validate(&msg.artist)?;
    let ledger = tokens();
    for id in RESERVED_TOKEN_IDS {
        ledger.save(deps.storage, id, &TokenInfo {
            owner: artist.clone(),
        })?;
    }
    let reserved = RESERVED_TOKEN_IDS.len() as u64;
    BALANCES.save(deps.storage, &artist, &reserved)?;
    TOTAL_ISSUED.save(deps.storage, &reserved)?;
    NEXT_ID.save(deps.storage, &(reserved + 1))?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("artist", artist))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { to, amount } => execute_mint(deps, info, to, amount),
        ExecuteMsg::Airdrop {
            recipients,
            amounts,
        } => execute_airdrop(deps, info, recipients, amounts),
        ExecuteMsg::Pause { paused } => execute_pause(deps, info, paused),
        ExecuteMsg::SetCost { cost } => execute_set_cost(deps, info, cost),
        ExecuteMsg::SetMaxMintAmount { amount } => execute_set_max_mint_amount(deps, info, amount),
        ExecuteMsg::SetBaseUri { uri } => execute_set_base_uri(deps, info, uri),
        ExecuteMsg::SetBaseExtension { extension } => {
            execute_set_base_extension(deps, info, extension)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: Option<String>,
    amount: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::MintingPaused {});
    }
    if !config.airdrop_complete {
        return Err(ContractError::AirdropNotComplete {});
    }
    if amount == 0 || amount > config.max_mint_amount {
        return Err(ContractError::InvalidMintAmount {
            amount,
            max: config.max_mint_amount,
        });
    }
    assert_supply_available(deps.storage, amount as u64)?;

    // The owner mints for free; everyone else pays the exact price. Over-
    // and under-payment are both rejected.
    if info.sender != config.owner {
        let expected = config
            .cost
            .checked_mul(Uint128::from(amount))
            .map_err(StdError::overflow)?;
        let got = must_pay(&info, &config.payment_denom)?;
        if got != expected {
            return Err(ContractError::IncorrectPayment { got, expected });
        }
    }

    let recipient = match to {
        Some(address) => deps.api.addr_validate(&address)?,
        None => info.sender.clone(),
    };
    let issued = issue_tokens(deps.storage, &recipient, amount)?;

    let event = Event::new("mint")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("first_token_id", issued[0].to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_airdrop(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<String>,
    amounts: Vec<u32>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    if config.airdrop_complete {
        return Err(ContractError::AirdropAlreadyCompleted {});
    }
    if recipients.len() != amounts.len() {
        return Err(ContractError::AirdropListMismatch {});
    }

    let total: u64 = amounts.iter().map(|amount| *amount as u64).sum();
    assert_supply_available(deps.storage, total)?;

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        let addr = deps.api.addr_validate(recipient)?;
        issue_tokens(deps.storage, &addr, *amount)?;
    }

    config.airdrop_complete = true;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("airdrop")
        .add_attribute("recipients", recipients.len().to_string())
        .add_attribute("total", total.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_pause(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("pause")
        .add_attribute("paused", paused.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_cost(
    deps: DepsMut,
    info: MessageInfo,
    cost: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.cost = cost;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_cost")
        .add_attribute("cost", cost)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_max_mint_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: u32,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.max_mint_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_max_mint_amount")
        .add_attribute("max_mint_amount", amount.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    uri: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.base_uri = uri.clone();
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_base_uri")
        .add_attribute("base_uri", uri)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_extension(
    deps: DepsMut,
    info: MessageInfo,
    extension: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.base_extension = extension.clone();
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("set_base_extension")
        .add_attribute("base_extension", extension)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let balance = deps
        .querier
        .query_balance(env.contract.address, config.payment_denom.clone())?;
    let split = WITHDRAW_SPLIT.load(deps.storage)?;

    // Each recipient gets floor(balance * numerator / 10000), in list
    // order. Truncation dust stays in the contract.
    let mut msgs: Vec<BankMsg> = Vec::with_capacity(split.len());
    for share in &split {
        let amount = balance.amount.multiply_ratio(share.numerator, BPS_DENOM);
        if amount.is_zero() {
            continue;
        }
        msgs.push(BankMsg::Send {
            to_address: share.recipient.to_string(),
            amount: vec![coin(amount.u128(), &config.payment_denom)],
        });
    }

    let event = Event::new("withdraw")
        .add_attribute("balance", balance.amount)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_messages(msgs).add_event(event))
}

fn assert_supply_available(storage: &dyn Storage, count: u64) -> Result<(), ContractError> {
    let total = TOTAL_ISSUED.load(storage)?;
    if total + count > MAX_SUPPLY {
        return Err(ContractError::MaxSupplyExceeded {
            max_supply: MAX_SUPPLY,
        });
    }
    Ok(())
}

/// Allocates `count` fresh ids to `to` and records ownership. Ids already
/// taken (the reserved ones) are skipped, so the sequence stays strictly
/// increasing and no id is ever issued twice. Callers check the supply cap
/// first.
fn issue_tokens(
    storage: &mut dyn Storage,
    to: &Addr,
    count: u32,
) -> Result<Vec<u64>, ContractError> {
    let ledger = tokens();
    let mut next_id = NEXT_ID.load(storage)?;
    let mut issued = Vec::with_capacity(count as usize);

    for _ in 0..count {
        while ledger.has(storage, next_id) {
            next_id += 1;
        }
        ledger.save(storage, next_id, &TokenInfo { owner: to.clone() })?;
        issued.push(next_id);
        next_id += 1;
    }

    NEXT_ID.save(storage, &next_id)?;
    let balance = BALANCES.may_load(storage, to)?.unwrap_or_default();
    BALANCES.save(storage, to, &(balance + count as u64))?;
    TOTAL_ISSUED.update(storage, |total| -> StdResult<_> {
        Ok(total + count as u64)
    })?;

    Ok(issued)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_binary(&query_config(deps)?)?),
        QueryMsg::OwnerOf { token_id } => Ok(to_binary(&query_owner_of(deps, token_id)?)?),
        QueryMsg::Balance { owner } => Ok(to_binary(&query_balance(deps, owner)?)?),
        QueryMsg::NumTokens {} => Ok(to_binary(&query_num_tokens(deps)?)?),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => Ok(to_binary(&query_tokens(deps, owner, start_after, limit)?)?),
        QueryMsg::ContractInfo {} => Ok(to_binary(&query_contract_info(deps)?)?),
        QueryMsg::TokenUri { token_id } => Ok(to_binary(&query_token_uri(deps, token_id)?)?),
        QueryMsg::ContractUri {} => Ok(to_binary(&query_contract_uri(deps)?)?),
        QueryMsg::RoyaltyInfo {
            token_id,
            sale_price,
        } => Ok(to_binary(&query_royalty_info(deps, token_id, sale_price)?)?),
        QueryMsg::NextTokenId {} => Ok(to_binary(&query_next_token_id(deps)?)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { config })
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<OwnerOfResponse, ContractError> {
    let token = tokens()
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    Ok(OwnerOfResponse {
        owner: token.owner.to_string(),
        approvals: vec![],
    })
}

pub fn query_balance(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&owner)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<NumTokensResponse> {
    let count = TOTAL_ISSUED.load(deps.storage)?;
    Ok(NumTokensResponse { count })
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens: Vec<String> = tokens()
        .idx
        .owner
        .prefix(addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|id| id.map(|id| id.to_string()))
        .collect::<StdResult<_>>()?;
    Ok(TokensResponse { tokens })
}

pub fn query_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: config.name,
        symbol: config.symbol,
    })
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> Result<TokenUriResponse, ContractError> {
    assert_in_collection_range(token_id)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenUriResponse {
        token_uri: format!(
            "{}{}{}",
            config.base_uri, token_id, config.base_extension
        ),
    })
}

pub fn query_contract_uri(deps: Deps) -> StdResult<ContractUriResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractUriResponse {
        contract_uri: format!("{}{}", config.collection_uri, CONTRACT_URI_FILE),
    })
}

pub fn query_royalty_info(
    deps: Deps,
    token_id: u64,
    sale_price: Uint128,
) -> Result<RoyaltyInfoResponse, ContractError> {
    // The policy is flat, the id only gets a range check.
    assert_in_collection_range(token_id)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(RoyaltyInfoResponse {
        receiver: config.royalty_receiver.to_string(),
        royalty_amount: sale_price.multiply_ratio(ROYALTY_BPS, BPS_DENOM),
    })
}

pub fn query_next_token_id(deps: Deps) -> StdResult<NextTokenIdResponse> {
    let next_token_id = NEXT_ID.load(deps.storage)?;
    Ok(NextTokenIdResponse { next_token_id })
}

fn assert_in_collection_range(token_id: u64) -> Result<(), ContractError> {
    if token_id == 0 || token_id > MAX_SUPPLY {
        return Err(ContractError::TokenIdOutOfRange { token_id });
    }
    Ok(())
}
