use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw721::{ContractInfoResponse, NumTokensResponse, OwnerOfResponse, TokensResponse};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub owner: String,
    /// Receives the two reserved token ids at instantiation.
    pub artist: String,
    pub royalty_receiver: String,
    /// Withdrawal payout list, paired with `withdraw_percentage_numerators`
    /// by index. Both must have exactly five entries.
    pub withdraw_addresses: Vec<String>,
    /// Basis-point numerators, one per withdrawal address, summing to 10000.
    pub withdraw_percentage_numerators: Vec<u64>,
    pub base_uri: String,
    pub collection_uri: String,
    pub payment_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Public mint, open once the airdrop has run and minting is unpaused.
    /// Tokens go to `to` when given, otherwise to the sender. Non-owners
    /// must attach exactly `cost * amount` of the payment denom.
    Mint { to: Option<String>, amount: u32 },
    /// One-shot bulk issuance to the coin holder snapshot. Owner only.
    Airdrop {
        recipients: Vec<String>,
        amounts: Vec<u32>,
    },
    /// Owner only.
    Pause { paused: bool },
    /// Owner only.
    SetCost { cost: Uint128 },
    /// Owner only.
    SetMaxMintAmount { amount: u32 },
    /// Owner only.
    SetBaseUri { uri: String },
    /// Owner only.
    SetBaseExtension { extension: String },
    /// Split the contract's held balance across the fixed payout list.
    /// Owner only.
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(BalanceResponse)]
    Balance { owner: String },
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// Token ids held by `owner`, ascending.
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    /// Metadata location for a token id. Succeeds for any id within the
    /// collection range, minted or not.
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    #[returns(ContractUriResponse)]
    ContractUri {},
    /// Royalty owed on a secondary sale at `sale_price`. Reporting only,
    /// no funds move.
    #[returns(RoyaltyInfoResponse)]
    RoyaltyInfo { token_id: u64, sale_price: Uint128 },
    #[returns(NextTokenIdResponse)]
    NextTokenId {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: String,
}

#[cw_serde]
pub struct ContractUriResponse {
    pub contract_uri: String,
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub receiver: String,
    pub royalty_amount: Uint128,
}

#[cw_serde]
pub struct NextTokenIdResponse {
    pub next_token_id: u64,
}
