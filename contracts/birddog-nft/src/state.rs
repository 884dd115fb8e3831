use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};

/// Hard cap on the number of tokens that can ever be issued.
pub const MAX_SUPPLY: u64 = 3000;
/// Flat secondary-sale royalty in basis points (7.5%).
pub const ROYALTY_BPS: u64 = 750;
/// Shared denominator for royalty and withdrawal share math.
pub const BPS_DENOM: u64 = 10000;
/// Default price per token for public mints, 0.04 of an 18-decimal unit.
pub const DEFAULT_COST: u128 = 40_000_000_000_000_000;
/// Default per-transaction mint cap.
pub const DEFAULT_MAX_MINT_AMOUNT: u32 = 5;
/// Default suffix appended to per-token metadata URIs.
pub const DEFAULT_BASE_EXTENSION: &str = ".json";
/// Token ids minted to the artist at instantiation.
pub const RESERVED_TOKEN_IDS: [u64; 2] = [37, 1248];
/// File name appended to the collection URI for collection-level metadata.
pub const CONTRACT_URI_FILE: &str = "birddog-nft.json";
/// Number of entries the withdrawal split must have.
pub const WITHDRAW_RECIPIENT_COUNT: usize = 5;

#[cw_serde]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub owner: Addr,
    pub royalty_receiver: Addr,
    pub payment_denom: String,
    pub cost: Uint128,
    pub max_mint_amount: u32,
    pub base_uri: String,
    pub collection_uri: String,
    pub base_extension: String,
    /// Public minting is blocked while paused.
    pub paused: bool,
    /// Set once the one-time airdrop has run. Public minting is blocked
    /// until then, and the airdrop can never run again.
    pub airdrop_complete: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// One recipient's share of withdrawn funds, numerator over 10000.
#[cw_serde]
pub struct WithdrawShare {
    pub recipient: Addr,
    pub numerator: u64,
}

// Kept as an ordered list: payout order and per-entry truncation must be
// reproducible exactly.
pub const WITHDRAW_SPLIT: Item<Vec<WithdrawShare>> = Item::new("withdraw_split");

/// Count of tokens ever issued, reserved ids included. Never decreases.
pub const TOTAL_ISSUED: Item<u64> = Item::new("total_issued");

/// Next candidate id for the allocator. Advances strictly; reserved ids
/// are skipped when the counter reaches them, never backfilled.
pub const NEXT_ID: Item<u64> = Item::new("next_id");

// Holds per-account token counts. Sum over all accounts == TOTAL_ISSUED.
pub const BALANCES: Map<&Addr, u64> = Map::new("balances");

#[cw_serde]
pub struct TokenInfo {
    pub owner: Addr,
}

/// Defines indices for accessing tokens
pub struct TokenIndexes<'a> {
    pub owner: MultiIndex<'a, Addr, TokenInfo, u64>,
}

impl<'a> IndexList<TokenInfo> for TokenIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<TokenInfo>> + '_> {
        let v: Vec<&dyn Index<TokenInfo>> = vec![&self.owner];
        Box::new(v.into_iter())
    }
}

pub fn tokens<'a>() -> IndexedMap<'a, u64, TokenInfo, TokenIndexes<'a>> {
    let indexes = TokenIndexes {
        owner: MultiIndex::new(
            |_pk, d: &TokenInfo| d.owner.clone(),
            "tokens",
            "tokens__owner",
        ),
    };
    IndexedMap::new("tokens", indexes)
}
