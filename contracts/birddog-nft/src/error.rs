use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("MintingPaused")]
    MintingPaused {},

    #[error("AirdropNotComplete")]
    AirdropNotComplete {},

    #[error("AirdropAlreadyCompleted")]
    AirdropAlreadyCompleted {},

    #[error("Airdrop recipient and amount lists differ in length")]
    AirdropListMismatch {},

    #[error("Invalid mint amount {amount}, must be between 1 and {max}")]
    InvalidMintAmount { amount: u32, max: u32 },

    #[error("Minting would exceed the max supply of {max_supply}")]
    MaxSupplyExceeded { max_supply: u64 },

    #[error("Incorrect payment, got: {got}, expected {expected}")]
    IncorrectPayment { got: Uint128, expected: Uint128 },

    #[error("Token id {token_id} is outside the collection range")]
    TokenIdOutOfRange { token_id: u64 },

    #[error("Token {token_id} has not been minted")]
    TokenNotFound { token_id: u64 },

    #[error("Withdrawal split must list exactly {expected} recipients and numerators")]
    InvalidWithdrawSplitLength { expected: usize },

    #[error("Withdrawal split numerators sum to {sum}, expected 10000")]
    InvalidWithdrawSplitSum { sum: u64 },
}
